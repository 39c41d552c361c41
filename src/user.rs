use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// A user, as returned by the remote api
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    #[serde(default, deserialize_with = "lenient_text")]
    pub first_name: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub last_name: String,
    /// Url of the avatar image
    #[serde(default, deserialize_with = "lenient_text")]
    pub avatar: String,
}

impl UserRecord {

    /// The first and last name, separated by a space
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

}

/// The json document wrapping the [`UserRecord`]: `{ "data": { ... } }`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseEnvelope {
    pub data: Option<UserRecord>,
}

impl ResponseEnvelope {

    /// Extracts the envelope from arbitrary json. \
    /// Anything, that is not an object with an object under `data`, yields an envelope without data.
    pub fn from_json(json: &Value) -> Self {
        let data = json.get("data")
            .filter(|data| data.is_object())
            .and_then(|data| UserRecord::deserialize(data).ok());
        Self { data }
    }

}

// Accepts any json value where text is expected, so that a slightly off payload still renders
fn lenient_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => String::new(),
        Value::String(text) => text,
        other => other.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use super::*;

    #[test]
    fn extracts_data_from_envelope() {
        let json = json!({
            "data": {"id": 2, "first_name": "Ada", "last_name": "Lovelace", "avatar": "http://x/a.png"},
            "support": {"text": "ignored"}
        });
        let user = ResponseEnvelope::from_json(&json).data.unwrap();
        assert_eq!(user, UserRecord {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            avatar: "http://x/a.png".to_string(),
        });
        assert_eq!(user.display_name(), "Ada Lovelace");
    }

    #[test]
    fn unusable_data_is_absent() {
        assert!(ResponseEnvelope::from_json(&json!({})).data.is_none());
        assert!(ResponseEnvelope::from_json(&json!({"data": null})).data.is_none());
        assert!(ResponseEnvelope::from_json(&json!({"data": "Ada"})).data.is_none());
        assert!(ResponseEnvelope::from_json(&json!([1, 2, 3])).data.is_none());
        assert!(ResponseEnvelope::from_json(&json!("data")).data.is_none());
    }

    #[test]
    fn fields_are_decoded_leniently() {
        let json = json!({"data": {"first_name": 42, "last_name": null, "avatar": true}});
        let user = ResponseEnvelope::from_json(&json).data.unwrap();
        assert_eq!(user.first_name, "42");
        assert_eq!(user.last_name, "");
        assert_eq!(user.avatar, "true");

        let user = ResponseEnvelope::from_json(&json!({"data": {}})).data.unwrap();
        assert_eq!(user, UserRecord::default());
        assert_eq!(user.display_name(), " ");
    }
}
