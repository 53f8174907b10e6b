//! Content-addressed storage client
//!
//! Uploads bytes to an IPFS-style pinning API and returns the content
//! identifier the service assigns. Every call is single-shot: no retries,
//! no ordering guarantees between independent adds.

use anyhow::{bail, Context, Result};
use rand::Rng;
use serde::Deserialize;

/// Default pinning API endpoint
pub const DEFAULT_API_URL: &str = "https://ipfs.infura.io:5001/api/v0";

/// Default public gateway used to build shareable URLs
pub const DEFAULT_GATEWAY_URL: &str = "https://ipfs.infura.io";

/// Service response for a completed add
#[derive(Debug, Clone, Deserialize)]
pub struct AddedContent {
    /// File name echoed back by the service
    #[serde(rename = "Name")]
    pub name: String,
    /// Content identifier assigned to the data
    #[serde(rename = "Hash")]
    pub cid: String,
    /// Stored size as reported by the service
    #[serde(rename = "Size")]
    pub size: String,
}

/// Client for a content-addressed storage HTTP API
#[derive(Debug, Clone)]
pub struct PinClient {
    api_url: String,
}

impl PinClient {
    /// Create a client for an API base URL (e.g. ".../api/v0").
    pub fn new(api_url: impl Into<String>) -> Self {
        Self {
            api_url: api_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// The API base URL this client targets
    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// Add bytes to the store and return the assigned content identifier.
    pub fn add(&self, data: &[u8], file_name: &str) -> Result<AddedContent> {
        let boundary = multipart_boundary();
        let body = multipart_body(&boundary, file_name, data);
        let url = format!("{}/add", self.api_url);

        let response = ureq::post(&url)
            .set(
                "Content-Type",
                &format!("multipart/form-data; boundary={}", boundary),
            )
            .send_bytes(&body);

        let response = match response {
            Ok(ok) => ok,
            Err(ureq::Error::Status(code, resp)) => {
                let text = resp.into_string().unwrap_or_default();
                bail!("Add failed ({}): {}", code, text);
            }
            Err(e) => return Err(e.into()),
        };

        let added: AddedContent = serde_json::from_reader(response.into_reader())
            .context("Failed to parse add response")?;
        Ok(added)
    }

    /// Add UTF-8 text under a generic file name.
    pub fn add_text(&self, text: &str) -> Result<AddedContent> {
        self.add(text.as_bytes(), "data.txt")
    }
}

/// Shareable gateway URL for a content identifier.
pub fn gateway_url(gateway_base: &str, cid: &str) -> String {
    format!("{}/ipfs/{}", gateway_base.trim_end_matches('/'), cid)
}

/// Random boundary marker for a multipart body.
fn multipart_boundary() -> String {
    let token: u128 = rand::thread_rng().gen();
    format!("------------------------{:032x}", token)
}

/// Single-part multipart/form-data body holding the payload.
fn multipart_body(boundary: &str, file_name: &str, data: &[u8]) -> Vec<u8> {
    let mut body = Vec::with_capacity(data.len() + 256);
    body.extend_from_slice(format!("--{}\r\n", boundary).as_bytes());
    body.extend_from_slice(
        format!(
            "Content-Disposition: form-data; name=\"file\"; filename=\"{}\"\r\n",
            file_name
        )
        .as_bytes(),
    );
    body.extend_from_slice(b"Content-Type: application/octet-stream\r\n\r\n");
    body.extend_from_slice(data);
    body.extend_from_slice(format!("\r\n--{}--\r\n", boundary).as_bytes());
    body
}
