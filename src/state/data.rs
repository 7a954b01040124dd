/// Shared data structures for the application state
///
/// These structs represent the data model that flows between
/// the REST layer and the UI layer.

use serde::{Deserialize, Serialize};

/// A named image/video pair as stored by the remote API
///
/// Both media fields hold self-contained `data:` URIs, so a pair carries
/// everything needed to display it without a second fetch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pair {
    /// Server-assigned identifier (Mongo-style backends send `_id`)
    #[serde(alias = "_id")]
    pub id: String,
    /// User-supplied display name
    pub name: String,
    /// Image asset as a data URI
    pub image: String,
    /// Video asset as a data URI
    pub video: String,
}

/// Severity of a transient notification banner
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

/// Transient user feedback shown between the form and the list
#[derive(Debug, Clone)]
pub struct Notification {
    pub message: String,
    pub kind: NotificationKind,
    /// Monotonic sequence number; a delayed auto-dismiss only applies
    /// while this still matches the notification on screen
    pub seq: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_pair_with_plain_id() {
        let json = r#"{"id":"a1","name":"Cat","image":"data:image/png;base64,AA==","video":"data:video/mp4;base64,AA=="}"#;
        let pair: Pair = serde_json::from_str(json).unwrap();
        assert_eq!(pair.id, "a1");
        assert_eq!(pair.name, "Cat");
    }

    #[test]
    fn test_parse_pair_with_mongo_id() {
        // The original backend stores pairs in MongoDB and emits `_id`
        let json = r#"{"_id":"64fe","name":"Dog","image":"data:image/png;base64,AA==","video":"data:video/mp4;base64,AA=="}"#;
        let pair: Pair = serde_json::from_str(json).unwrap();
        assert_eq!(pair.id, "64fe");
    }

    #[test]
    fn test_parse_pair_collection() {
        let json = r#"[
            {"_id":"1","name":"One","image":"data:image/png;base64,AA==","video":"data:video/mp4;base64,AA=="},
            {"_id":"2","name":"Two","image":"data:image/png;base64,AA==","video":"data:video/mp4;base64,AA=="}
        ]"#;
        let pairs: Vec<Pair> = serde_json::from_str(json).unwrap();
        assert_eq!(pairs.len(), 2);
        assert_eq!(pairs[1].name, "Two");
    }
}
