//! Pastebin API HTTP client.

use std::time::Duration;

use reqwest::{Client, Response};

use crate::api::auth::{Credentials, SessionToken};
use crate::config::EndpointsConfig;
use crate::error::{Error, Result};
use crate::paste::{parse_paste_list, PasteContent, PasteRecord, LIST_RESULTS_LIMIT};

/// Pastebin API client.
///
/// Holds no session state; the token returned by [`PastebinApi::login`] is
/// passed explicitly to the calls that need it.
pub struct PastebinApi {
    client: Client,
    endpoints: EndpointsConfig,
}

impl PastebinApi {
    /// Create a new API client.
    pub fn new(endpoints: EndpointsConfig, timeout: Option<Duration>) -> Result<Self> {
        let mut builder = Client::builder().user_agent(concat!(
            env!("CARGO_PKG_NAME"),
            "/",
            env!("CARGO_PKG_VERSION")
        ));
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        let client = builder
            .build()
            .map_err(|e| Error::Config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { client, endpoints })
    }

    /// Exchange developer credentials for a user session key.
    ///
    /// Missing credentials fail before any request is made. The response
    /// body is returned verbatim as the token.
    pub async fn login(&self, credentials: &Credentials) -> Result<SessionToken> {
        credentials.validate()?;

        tracing::debug!("POST {}", self.endpoints.login_url);

        let response = self
            .client
            .post(&self.endpoints.login_url)
            .form(&credentials.login_form())
            .send()
            .await
            .map_err(|e| Error::Authentication(format!("Login request failed: {}", e)))?;

        let body = read_success_body(response)
            .await
            .map_err(Error::Authentication)?;

        let token = SessionToken::new(body);
        tracing::debug!("Received session token {}", token.redacted());

        Ok(token)
    }

    /// List up to [`LIST_RESULTS_LIMIT`] pastes of the logged-in account.
    pub async fn list_pastes(
        &self,
        developer_key: &str,
        token: &SessionToken,
    ) -> Result<Vec<PasteRecord>> {
        let limit = LIST_RESULTS_LIMIT.to_string();
        let form = [
            ("api_dev_key", developer_key),
            ("api_user_key", token.as_str()),
            ("api_option", "list"),
            ("api_results_limit", limit.as_str()),
        ];

        tracing::debug!("POST {} (list, limit {})", self.endpoints.post_url, limit);

        let response = self
            .client
            .post(&self.endpoints.post_url)
            .form(&form)
            .send()
            .await
            .map_err(|e| Error::Lookup(format!("Listing request failed: {}", e)))?;

        let body = read_success_body(response).await.map_err(Error::Lookup)?;
        tracing::debug!("Listing response: {} bytes", body.len());

        let records = parse_paste_list(&body)?;
        tracing::debug!("Parsed {} paste records", records.len());

        Ok(records)
    }

    /// Raw content URL for a paste key.
    pub fn raw_url(&self, paste_key: &str) -> String {
        format!(
            "{}/{}",
            self.endpoints.raw_base_url.trim_end_matches('/'),
            paste_key
        )
    }

    /// Fetch the raw content of a paste. Needs no session.
    pub async fn fetch_raw(&self, paste_key: &str) -> Result<PasteContent> {
        let url = self.raw_url(paste_key);
        tracing::debug!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| Error::Fetch(format!("Request to {} failed: {}", url, e)))?;

        let status = response.status();
        tracing::debug!("Response status: {}", status);

        if !status.is_success() {
            return Err(Error::Fetch(format!("HTTP {} from {}", status, url)));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| Error::Fetch(format!("Failed to read body from {}: {}", url, e)))?;

        Ok(PasteContent::new(bytes.to_vec()))
    }
}

/// Read a response body, failing on non-2xx statuses.
async fn read_success_body(response: Response) -> std::result::Result<String, String> {
    let status = response.status();
    tracing::debug!("Response status: {}", status);

    let body = response
        .text()
        .await
        .map_err(|e| format!("Failed to read response body: {}", e))?;

    if !status.is_success() {
        return Err(format!(
            "HTTP {}: {}",
            status,
            if body.trim().is_empty() {
                "no response body"
            } else {
                body.trim()
            }
        ));
    }

    Ok(body)
}
