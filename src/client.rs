use crate::auth::{password_grant_form, AccessToken, TOKEN_PATH};
use crate::business_object::{BusinessObjectUpdate, SAVE_PATH};
use crate::config::Credentials;
use crate::error::BridgeError;
use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};

#[async_trait]
pub trait Submit {
    /// Saves the business object and returns the response body verbatim.
    async fn submit(&self, update: &BusinessObjectUpdate) -> Result<String, BridgeError>;
}

pub struct ItsmClient {
    http: reqwest::Client,
    credentials: Credentials,
}

impl ItsmClient {
    pub fn new(credentials: Credentials) -> Self {
        Self::new_with_client(reqwest::Client::new(), credentials)
    }

    pub fn new_with_client(http: reqwest::Client, credentials: Credentials) -> Self {
        ItsmClient { http, credentials }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.credentials.endpoint.trim_end_matches('/'), path)
    }

    pub async fn request_token(&self) -> Result<AccessToken, BridgeError> {
        let url = self.url(TOKEN_PATH);
        log::info!("Server URL: {}", url);
        let body = self
            .http
            .post(&url)
            .form(&password_grant_form(&self.credentials))
            .send()
            .await?
            .text()
            .await?;
        Ok(AccessToken::from_body(&body))
    }

    /// Non-success statuses are not errors here; the body is returned either way.
    pub async fn save_business_object(
        &self,
        token: &AccessToken,
        update: &BusinessObjectUpdate,
    ) -> Result<String, BridgeError> {
        let payload = serde_json::to_string(update)?;
        log::debug!("ITSM request: {}", payload);

        let response = self
            .http
            .post(&self.url(SAVE_PATH))
            .header(CONTENT_TYPE, "application/json")
            .header(AUTHORIZATION, token.bearer())
            .body(payload)
            .send()
            .await?;
        let status = response.status();
        if status.is_success() {
            log::info!("ITSM response: {}", status);
        } else {
            log::warn!("ITSM response: {}", status);
        }
        Ok(response.text().await?)
    }
}

#[async_trait]
impl Submit for ItsmClient {
    async fn submit(&self, update: &BusinessObjectUpdate) -> Result<String, BridgeError> {
        let token = self.request_token().await?;
        if token.is_empty() {
            return Err(BridgeError::MissingAccessToken);
        }
        self.save_business_object(&token, update).await
    }
}
