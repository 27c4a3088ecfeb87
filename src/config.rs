use crate::error::BridgeError;
use async_trait::async_trait;
use rusoto_ssm::{GetParametersRequest, Ssm, SsmClient};
use std::collections::HashMap;
use std::env;
use std::fmt;

pub const URL_VAR: &str = "URL";
pub const USER_VAR: &str = "USER";
pub const PASSWORD_VAR: &str = "PASSWORD";
pub const CLIENT_ID_VAR: &str = "CLIENT_ID";
pub const GRANT_VAR: &str = "GRANT";

/// Parameter store names of the five ITSM secrets.
#[derive(Debug, Clone, PartialEq)]
pub struct ParameterNames {
    pub endpoint: String,
    pub username: String,
    pub password: String,
    pub client_id: String,
    pub grant_type: String,
}

impl ParameterNames {
    pub fn from_env() -> Result<Self, BridgeError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, BridgeError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &'static str| {
            lookup(key)
                .filter(|value| !value.is_empty())
                .ok_or(BridgeError::MissingEnvVar(key))
        };
        Ok(ParameterNames {
            endpoint: required(URL_VAR)?,
            username: required(USER_VAR)?,
            password: required(PASSWORD_VAR)?,
            client_id: required(CLIENT_ID_VAR)?,
            grant_type: required(GRANT_VAR)?,
        })
    }

    fn all(&self) -> Vec<String> {
        vec![
            self.endpoint.clone(),
            self.username.clone(),
            self.password.clone(),
            self.client_id.clone(),
            self.grant_type.clone(),
        ]
    }
}

#[derive(Clone, PartialEq)]
pub struct Credentials {
    pub endpoint: String,
    pub username: String,
    pub password: String,
    pub client_id: String,
    pub grant_type: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("endpoint", &self.endpoint)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("client_id", &self.client_id)
            .field("grant_type", &self.grant_type)
            .finish()
    }
}

impl Credentials {
    pub async fn load<S: ParameterStore + ?Sized>(
        store: &S,
        names: &ParameterNames,
    ) -> Result<Self, BridgeError> {
        let values = store.get_parameters(names.all()).await?;
        // Several names may point at the same parameter.
        let take = |name: &str| {
            values
                .get(name)
                .cloned()
                .ok_or_else(|| BridgeError::MissingParameter(name.to_string()))
        };
        let credentials = Credentials {
            endpoint: take(names.endpoint.as_str())?,
            username: take(names.username.as_str())?,
            password: take(names.password.as_str())?,
            client_id: take(names.client_id.as_str())?,
            grant_type: take(names.grant_type.as_str())?,
        };
        log::info!("Endpoint: {}", credentials.endpoint);
        Ok(credentials)
    }
}

#[async_trait]
pub trait ParameterStore {
    /// Resolves every name in one call; names the store does not know are absent from the map.
    async fn get_parameters(
        &self,
        names: Vec<String>,
    ) -> Result<HashMap<String, String>, BridgeError>;
}

pub struct SsmParameterStore {
    client: SsmClient,
}

impl SsmParameterStore {
    pub fn new_with_client(client: SsmClient) -> Self {
        SsmParameterStore { client }
    }
}

#[async_trait]
impl ParameterStore for SsmParameterStore {
    async fn get_parameters(
        &self,
        names: Vec<String>,
    ) -> Result<HashMap<String, String>, BridgeError> {
        let result = self
            .client
            .get_parameters(GetParametersRequest {
                names,
                with_decryption: Some(true),
            })
            .await?;
        if let Some(invalid) = result.invalid_parameters.as_ref().and_then(|i| i.first()) {
            return Err(BridgeError::MissingParameter(invalid.clone()));
        }

        let mut values = HashMap::new();
        for parameter in result.parameters.unwrap_or_default() {
            if let (Some(name), Some(value)) = (parameter.name, parameter.value) {
                values.insert(name, value);
            }
        }
        Ok(values)
    }
}
