//! The message record and its wire representation.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// One stored message. Serializes to `{id, body, username, created_at, updated_at}` with ISO-8601 timestamps.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct Message {
    pub id: i64,
    pub body: String,
    pub username: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields a caller supplies on create; the store assigns the rest.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewMessage {
    pub body: String,
    pub username: String,
}

/// Requested change to an existing message. Only `body` is mutable.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MessagePatch {
    pub body: Option<String>,
}

impl MessagePatch {
    pub fn is_empty(&self) -> bool {
        self.body.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn serializes_wire_shape() {
        let at = Utc.with_ymd_and_hms(2024, 5, 1, 12, 30, 0).unwrap();
        let msg = Message {
            id: 1,
            body: "Hello 👋".into(),
            username: "Liza".into(),
            created_at: at,
            updated_at: at,
        };
        let v = serde_json::to_value(&msg).unwrap();
        assert_eq!(v["id"], 1);
        assert_eq!(v["body"], "Hello 👋");
        assert_eq!(v["username"], "Liza");
        assert_eq!(v["created_at"], "2024-05-01T12:30:00Z");
        assert_eq!(v["updated_at"], "2024-05-01T12:30:00Z");
        assert_eq!(v.as_object().unwrap().len(), 5);
    }
}
