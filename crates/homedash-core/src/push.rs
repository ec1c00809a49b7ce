//! Push notifications sent to connected dashboard clients.
//!
//! Every message names what changed and which record it touched, so a client
//! can decide between a local update and a full re-fetch.

use serde::{Deserialize, Serialize};

use crate::error::DashResult;

/// Message broadcast over the push channel.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum PushMessage {
    /// An app was created.
    AppCreated { id: i64 },
    /// An app's fields or pin state changed.
    AppUpdated { id: i64 },
    /// An app was removed.
    AppDeleted { id: i64 },
    /// Something changed that is not tied to one record; re-fetch everything.
    AppsRefresh,
}

impl PushMessage {
    /// The affected app, if the message is about a single record.
    pub fn app_id(&self) -> Option<i64> {
        match self {
            Self::AppCreated { id } | Self::AppUpdated { id } | Self::AppDeleted { id } => {
                Some(*id)
            }
            Self::AppsRefresh => None,
        }
    }

    pub fn to_json(&self) -> DashResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(text: &str) -> DashResult<Self> {
        Ok(serde_json::from_str(text)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_format_is_tagged() {
        let json = PushMessage::AppDeleted { id: 3 }.to_json().unwrap();
        assert_eq!(json, r#"{"type":"AppDeleted","data":{"id":3}}"#);

        let json = PushMessage::AppsRefresh.to_json().unwrap();
        assert_eq!(json, r#"{"type":"AppsRefresh"}"#);
    }

    #[test]
    fn test_parses_incoming() {
        let msg = PushMessage::from_json(r#"{"type":"AppUpdated","data":{"id":9}}"#).unwrap();
        assert_eq!(msg, PushMessage::AppUpdated { id: 9 });
        assert_eq!(msg.app_id(), Some(9));
    }

    #[test]
    fn test_rejects_unknown_kind() {
        assert!(PushMessage::from_json(r#"{"type":"Reboot"}"#).is_err());
        assert!(PushMessage::from_json("not json").is_err());
    }
}
