//! The `{ "data": T }` wrapper used by every successful API response.

use serde::{Deserialize, Serialize};

/// Response envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }

    pub fn into_inner(self) -> T {
        self.data
    }
}

/// Payload of responses that carry nothing, serialized as `{}`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Empty {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_payload_shape() {
        let json = serde_json::to_string(&ApiResponse::new(Empty {})).unwrap();
        assert_eq!(json, r#"{"data":{}}"#);
    }

    #[test]
    fn test_list_payload_shape() {
        let parsed: ApiResponse<Vec<i64>> = serde_json::from_str(r#"{"data":[1,2]}"#).unwrap();
        assert_eq!(parsed.into_inner(), vec![1, 2]);
    }
}
