use serde::Serialize;

/// Content type of every endpoint response.
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// Status message marking a request that had no source to answer from.
pub const FAIL_MARKER: &str = "fail";

///
/// JsonResponse
///
/// Transport-neutral endpoint response. The status code is always 200; a
/// missing source is signalled through `status_message` only.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct JsonResponse {
    pub status: u16,
    pub status_message: String,
    pub content_type: &'static str,
    pub body: String,
}

impl JsonResponse {
    pub fn ok<T: Serialize + ?Sized>(payload: &T) -> Result<Self, serde_json::Error> {
        Self::build(payload, String::new())
    }

    pub fn fail<T: Serialize + ?Sized>(payload: &T) -> Result<Self, serde_json::Error> {
        Self::build(payload, FAIL_MARKER.to_string())
    }

    fn build<T: Serialize + ?Sized>(
        payload: &T,
        status_message: String,
    ) -> Result<Self, serde_json::Error> {
        Ok(Self {
            status: 200,
            status_message,
            content_type: JSON_CONTENT_TYPE,
            body: serde_json::to_string(payload)?,
        })
    }

    #[must_use]
    pub fn is_fail(&self) -> bool {
        self.status_message == FAIL_MARKER
    }
}
