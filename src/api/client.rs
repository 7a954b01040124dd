//! REST client for the remote pair store.
//!
//! Wraps the four pair endpoints (list, create, update, delete) using
//! [`reqwest`], translating between wire JSON and [`Pair`] values.
//! Every operation is attempted exactly once per user action; there are
//! no retries, timeouts beyond reqwest's defaults, or backoff.

use serde_json::json;

use crate::state::data::Pair;

/// HTTP client for a single pair store endpoint.
#[derive(Debug, Clone)]
pub struct PairStore {
    client: reqwest::Client,
    base_url: String,
}

/// Errors from the pair store REST layer.
#[derive(Debug, thiserror::Error)]
pub enum PairStoreError {
    /// The HTTP request itself failed (network, DNS, TLS, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The store returned a non-2xx status code.
    #[error("pair store error ({status}): {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },
}

impl PairStore {
    /// Create a client for the store at `base_url`,
    /// e.g. `http://localhost:5000/api/pairs`.
    pub fn new(base_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url,
        }
    }

    /// Fetch the full pair collection.
    ///
    /// Sends `GET <base>`. The store has no filtering or pagination;
    /// searching happens client-side over the result.
    pub async fn list_all(&self) -> Result<Vec<Pair>, PairStoreError> {
        let response = self.client.get(&self.base_url).send().await?;
        Self::parse_response(response).await
    }

    /// Create a new pair from its three fields.
    ///
    /// Sends `POST <base>`. The response is the canonical pair,
    /// including the server-assigned id.
    pub async fn create(
        &self,
        name: &str,
        image: &str,
        video: &str,
    ) -> Result<Pair, PairStoreError> {
        let response = self
            .client
            .post(&self.base_url)
            .json(&pair_body(name, image, video))
            .send()
            .await?;

        Self::parse_response(response).await
    }

    /// Replace all three fields of an existing pair.
    ///
    /// Sends `PUT <base>/<id>`. An id the store does not know surfaces
    /// as the generic non-success error.
    pub async fn update(
        &self,
        id: &str,
        name: &str,
        image: &str,
        video: &str,
    ) -> Result<Pair, PairStoreError> {
        let response = self
            .client
            .put(format!("{}/{}", self.base_url, id))
            .json(&pair_body(name, image, video))
            .send()
            .await?;

        Self::parse_response(response).await
    }

    /// Delete a pair by id.
    ///
    /// Sends `DELETE <base>/<id>`. Deleting an already-deleted id may
    /// succeed or fail depending on the store; either outcome is
    /// terminal here.
    pub async fn delete(&self, id: &str) -> Result<(), PairStoreError> {
        let response = self
            .client
            .delete(format!("{}/{}", self.base_url, id))
            .send()
            .await?;

        Self::error_for_status(response).await.map(|_| ())
    }

    // ---- private helpers ----

    /// Turn a non-2xx response into [`PairStoreError::Api`], keeping the
    /// body text for diagnostics.
    async fn error_for_status(
        response: reqwest::Response,
    ) -> Result<reqwest::Response, PairStoreError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response
            .text()
            .await
            .unwrap_or_else(|_| String::from("<unreadable body>"));
        Err(PairStoreError::Api {
            status: status.as_u16(),
            body,
        })
    }

    /// Parse a successful JSON response body into the expected type.
    async fn parse_response<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, PairStoreError> {
        let response = Self::error_for_status(response).await?;
        Ok(response.json::<T>().await?)
    }
}

/// JSON body shared by create and update: the id is never sent, the
/// store assigns and keys it.
fn pair_body(name: &str, image: &str, video: &str) -> serde_json::Value {
    json!({
        "name": name,
        "image": image,
        "video": video,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pair_body_carries_exactly_the_three_fields() {
        let body = pair_body("Cat", "data:image/png;base64,AA==", "data:video/mp4;base64,AA==");

        assert_eq!(body["name"], "Cat");
        assert_eq!(body["image"], "data:image/png;base64,AA==");
        assert_eq!(body["video"], "data:video/mp4;base64,AA==");
        assert_eq!(body.as_object().unwrap().len(), 3);
    }

    #[test]
    fn test_api_error_display_includes_status_and_body() {
        let err = PairStoreError::Api {
            status: 404,
            body: "not found".to_string(),
        };
        assert_eq!(err.to_string(), "pair store error (404): not found");
    }
}
