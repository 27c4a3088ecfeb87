use crate::config::Credentials;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

pub const TOKEN_PATH: &str = "/CherwellAPI/token";

/// Token endpoint response. Every field is kept as an opaque string.
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
pub struct AccessToken {
    #[serde(default, deserialize_with = "opaque_string")]
    pub access_token: String,
    #[serde(default, deserialize_with = "opaque_string")]
    pub token_type: String,
    #[serde(default, deserialize_with = "opaque_string")]
    pub expires_in: String,
    #[serde(default, deserialize_with = "opaque_string")]
    pub refresh_token: String,
    #[serde(rename = ".issued", default, deserialize_with = "opaque_string")]
    pub issued: String,
    #[serde(rename = ".expires", default, deserialize_with = "opaque_string")]
    pub expires: String,
}

impl AccessToken {
    /// Parses a token response body. An unreadable body yields an empty token.
    pub fn from_body(body: &str) -> Self {
        serde_json::from_str(body).unwrap_or_else(|error| {
            log::warn!("Unable to parse token response: {}", error);
            AccessToken::default()
        })
    }

    pub fn is_empty(&self) -> bool {
        self.access_token.is_empty()
    }

    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.access_token)
    }
}

// Token servers disagree on whether expires_in is a number or a string.
fn opaque_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => String::new(),
        Value::String(value) => value,
        other => other.to_string(),
    })
}

/// Form body of the resource-owner password grant.
pub fn password_grant_form(credentials: &Credentials) -> [(&'static str, &str); 4] {
    [
        ("client_id", credentials.client_id.as_str()),
        ("username", credentials.username.as_str()),
        ("password", credentials.password.as_str()),
        ("grant_type", credentials.grant_type.as_str()),
    ]
}
