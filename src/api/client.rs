//! Election API client
//!
//! One client per session, configured with the API base URL and the bearer
//! token. Every response is unwrapped from the `{ success, message, ... }`
//! envelope; an explicit `success: false` is an error even on a 2xx status.

use serde::de::DeserializeOwned;
use serde::Serialize;

use super::error::ApiError;
use super::transport::{ApiRequest, ApiResponse, Body, Method, Part, Transport};
use crate::display;
use crate::model::Envelope;
use crate::session::SessionContext;

pub struct ApiClient<T> {
    transport: T,
    base_url: String,
    token: Option<String>,
}

impl<T: Transport> ApiClient<T> {
    pub fn new(transport: T, base_url: &str) -> Self {
        Self {
            transport,
            base_url: base_url.trim().trim_end_matches('/').to_string(),
            token: None,
        }
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Client authenticated as the given session
    pub fn for_session(transport: T, base_url: &str, ctx: &SessionContext) -> Self {
        Self::new(transport, base_url).with_token(ctx.token.clone())
    }

    pub fn set_token(&mut self, token: Option<String>) {
        self.token = token;
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Origin that serves uploaded files
    pub fn backend_origin(&self) -> &str {
        display::backend_origin(&self.base_url)
    }

    /// Absolute URL of an uploaded file
    pub fn file_url(&self, path: &str) -> Option<String> {
        display::absolute_url(self.backend_origin(), path)
    }

    /// Build a request URL from a path relative to the base and query pairs
    pub fn url(&self, path: &str, query: &[(&str, String)]) -> String {
        let mut url = format!("{}/{}", self.base_url, path.trim_start_matches('/'));
        if !query.is_empty() {
            let encoded: Vec<String> = query
                .iter()
                .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
                .collect();
            url.push('?');
            url.push_str(&encoded.join("&"));
        }
        url
    }

    /// Send a request and decode the envelope, failing only on transport
    /// errors, non-2xx statuses and undecodable bodies
    pub async fn fetch<R>(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        body: Body,
    ) -> Result<Envelope<R>, ApiError>
    where
        R: DeserializeOwned + Default,
    {
        let request = ApiRequest {
            method,
            url: self.url(path, query),
            token: self.token.clone(),
            body,
        };
        tracing::debug!(method = method.as_str(), url = %request.url, "API request");

        let response = self.transport.execute(request).await?;
        decode(method, path, response)
    }

    /// Like [`fetch`](Self::fetch), but `success: false` is an error
    pub async fn send<R>(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        body: Body,
    ) -> Result<Envelope<R>, ApiError>
    where
        R: DeserializeOwned + Default,
    {
        let envelope = self.fetch(method, path, query, body).await?;
        if envelope.is_success() {
            Ok(envelope)
        } else {
            tracing::debug!(path, "API rejected request: {:?}", envelope.message);
            Err(ApiError::Rejected {
                message: envelope.message,
            })
        }
    }

    pub async fn get<R>(&self, path: &str, query: &[(&str, String)]) -> Result<Envelope<R>, ApiError>
    where
        R: DeserializeOwned + Default,
    {
        self.send(Method::Get, path, query, Body::Empty).await
    }

    pub async fn post_json<B, R>(&self, path: &str, body: &B) -> Result<Envelope<R>, ApiError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned + Default,
    {
        let body = Body::Json(serde_json::to_value(body)?);
        self.send(Method::Post, path, &[], body).await
    }

    pub async fn put_json<B, R>(&self, path: &str, body: &B) -> Result<Envelope<R>, ApiError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned + Default,
    {
        let body = Body::Json(serde_json::to_value(body)?);
        self.send(Method::Put, path, &[], body).await
    }

    pub async fn post_multipart<R>(&self, path: &str, parts: Vec<Part>) -> Result<Envelope<R>, ApiError>
    where
        R: DeserializeOwned + Default,
    {
        self.send(Method::Post, path, &[], Body::Multipart(parts)).await
    }
}

fn decode<R>(method: Method, path: &str, response: ApiResponse) -> Result<Envelope<R>, ApiError>
where
    R: DeserializeOwned + Default,
{
    if !response.is_success() {
        tracing::debug!(
            method = method.as_str(),
            path,
            status = response.status,
            "API request failed"
        );
        return Err(ApiError::Status {
            status: response.status,
            message: extract_message(&response.body),
        });
    }

    if response.body.trim().is_empty() {
        return Ok(Envelope::default());
    }
    Ok(serde_json::from_str(&response.body)?)
}

/// Pull the `message` field out of an error body, if it is JSON and has one
pub fn extract_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    value
        .get("message")
        .and_then(|m| m.as_str())
        .map(str::trim)
        .filter(|m| !m.is_empty())
        .map(str::to_string)
}
