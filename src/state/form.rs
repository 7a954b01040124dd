/// Working state of the upload/edit form
///
/// The form collects a name and two media files. Files are encoded as
/// soon as they are picked, so a submission only has to check that both
/// slots are filled before going to the network.

use crate::media::encoder::EncodedAsset;
use crate::media::preview::Preview;

use super::data::Pair;

/// One file-picker slot of the form
#[derive(Debug, Clone, Default)]
pub enum MediaSlot {
    /// Nothing selected yet
    #[default]
    Empty,
    /// File read and encoded, ready to submit
    Ready {
        asset: EncodedAsset,
        preview: Preview,
    },
}

impl MediaSlot {
    pub fn is_ready(&self) -> bool {
        matches!(self, MediaSlot::Ready { .. })
    }

    /// The encoded data URI, if a file has been selected
    pub fn data_uri(&self) -> Option<&str> {
        match self {
            MediaSlot::Ready { asset, .. } => Some(&asset.data_uri),
            MediaSlot::Empty => None,
        }
    }
}

/// A submission was rejected before any request was made
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("Please fill in the name and choose both files")]
pub struct ValidationError;

/// The form draft: name input, both media slots, and the edit target
#[derive(Debug, Default)]
pub struct FormDraft {
    pub name: String,
    pub image: MediaSlot,
    pub video: MediaSlot,
    /// When set, submission updates this pair instead of creating one
    pub editing: Option<String>,
}

impl FormDraft {
    /// Check the submission preconditions: a non-blank name and a file
    /// in each slot. Every violation produces the same error, and no
    /// request is made while any of them holds.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() || !self.image.is_ready() || !self.video.is_ready() {
            return Err(ValidationError);
        }
        Ok(())
    }

    pub fn is_editing(&self) -> bool {
        self.editing.is_some()
    }

    /// Load an existing pair into the form for editing.
    ///
    /// The stored assets stay attached to their slots, so submitting
    /// without picking new files re-sends the current media unchanged.
    pub fn load_pair(&mut self, pair: &Pair, image_preview: Option<Preview>) {
        self.name = pair.name.clone();
        self.image = MediaSlot::Ready {
            asset: EncodedAsset {
                data_uri: pair.image.clone(),
                file_name: String::from("saved image"),
            },
            preview: image_preview
                .unwrap_or_else(|| Preview::Placeholder(String::from("saved image"))),
        };
        self.video = MediaSlot::Ready {
            asset: EncodedAsset {
                data_uri: pair.video.clone(),
                file_name: String::from("saved video"),
            },
            preview: Preview::Placeholder(String::from("saved video")),
        };
        self.editing = Some(pair.id.clone());
    }

    /// Clear everything and return to create mode
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ready_slot(uri: &str) -> MediaSlot {
        MediaSlot::Ready {
            asset: EncodedAsset {
                data_uri: uri.to_string(),
                file_name: "file.bin".to_string(),
            },
            preview: Preview::Placeholder("file.bin".to_string()),
        }
    }

    fn filled_draft() -> FormDraft {
        FormDraft {
            name: "Cat".to_string(),
            image: ready_slot("data:image/png;base64,AA=="),
            video: ready_slot("data:video/mp4;base64,AA=="),
            editing: None,
        }
    }

    #[test]
    fn test_complete_draft_validates() {
        assert_eq!(filled_draft().validate(), Ok(()));
    }

    #[test]
    fn test_blank_name_is_rejected_even_with_both_files() {
        let mut draft = filled_draft();
        draft.name = "   ".to_string();
        assert_eq!(draft.validate(), Err(ValidationError));
    }

    #[test]
    fn test_missing_file_is_rejected() {
        let mut draft = filled_draft();
        draft.video = MediaSlot::Empty;
        assert_eq!(draft.validate(), Err(ValidationError));
    }

    #[test]
    fn test_load_pair_prefills_an_editable_draft() {
        let pair = Pair {
            id: "9".to_string(),
            name: "Dog".to_string(),
            image: "data:image/png;base64,AA==".to_string(),
            video: "data:video/mp4;base64,AA==".to_string(),
        };

        let mut draft = FormDraft::default();
        draft.load_pair(&pair, None);

        assert!(draft.is_editing());
        assert_eq!(draft.name, "Dog");
        assert_eq!(draft.image.data_uri(), Some(pair.image.as_str()));
        assert_eq!(draft.validate(), Ok(()));
    }

    #[test]
    fn test_reset_returns_to_an_empty_create_form() {
        let mut draft = filled_draft();
        draft.editing = Some("9".to_string());
        draft.reset();

        assert!(!draft.is_editing());
        assert!(draft.name.is_empty());
        assert!(!draft.image.is_ready());
    }
}
