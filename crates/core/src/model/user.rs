use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::UserId;

/// The signed-in user as returned by the backend.
///
/// Only `id` and `name` are interpreted by the client. Every other field the
/// backend sends is kept in `extra` so that persisting and reloading the record
/// reproduces the server payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl User {
    #[must_use]
    pub fn new(id: UserId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            extra: Map::new(),
        }
    }

    #[must_use]
    pub fn email(&self) -> Option<&str> {
        self.extra.get("email").and_then(Value::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn keeps_unknown_fields_across_round_trip() {
        let raw = json!({
            "id": 7,
            "name": "Ada",
            "email": "ada@example.com",
            "oauth_provider": null,
            "is_verified": true
        });

        let user: User = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(user.id, UserId::new(7));
        assert_eq!(user.email(), Some("ada@example.com"));
        assert_eq!(serde_json::to_value(&user).unwrap(), raw);
    }

    #[test]
    fn missing_name_is_rejected() {
        let result = serde_json::from_value::<User>(json!({ "id": 1 }));
        assert!(result.is_err());
    }
}
