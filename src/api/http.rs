//! reqwest transport for the terminal client

use async_trait::async_trait;
use reqwest::{multipart, Client};
use std::time::Duration;

use super::error::ApiError;
use super::transport::{ApiRequest, ApiResponse, Body, Method, Part, Transport};

pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    pub fn new(timeout: Duration) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("electra/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ApiError::Transport(format!("Failed to create HTTP client: {}", e)))?;
        Ok(Self { client })
    }
}

fn map_reqwest_error(e: reqwest::Error) -> ApiError {
    if e.is_timeout() {
        ApiError::Timeout
    } else if e.is_connect() {
        ApiError::Unavailable
    } else {
        ApiError::Transport(e.to_string())
    }
}

fn multipart_form(parts: Vec<Part>) -> Result<multipart::Form, ApiError> {
    let mut form = multipart::Form::new();
    for part in parts {
        form = match part {
            Part::Text { name, value } => form.text(name, value),
            Part::File { name, attachment } => {
                let mut file = multipart::Part::bytes(attachment.bytes).file_name(attachment.file_name);
                if let Some(content_type) = attachment.content_type {
                    file = file
                        .mime_str(&content_type)
                        .map_err(|e| ApiError::Transport(format!("Invalid content type: {}", e)))?;
                }
                form.part(name, file)
            }
        };
    }
    Ok(form)
}

#[async_trait(?Send)]
impl Transport for ReqwestTransport {
    async fn execute(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        let mut builder = match request.method {
            Method::Get => self.client.get(&request.url),
            Method::Post => self.client.post(&request.url),
            Method::Put => self.client.put(&request.url),
        };

        builder = builder.header("x-request-id", uuid::Uuid::new_v4().to_string());
        if let Some(token) = &request.token {
            builder = builder.bearer_auth(token);
        }

        builder = match request.body {
            Body::Empty => builder,
            Body::Json(value) => builder.json(&value),
            Body::Multipart(parts) => builder.multipart(multipart_form(parts)?),
        };

        let response = builder.send().await.map_err(map_reqwest_error)?;
        let status = response.status().as_u16();
        let body = response.text().await.map_err(map_reqwest_error)?;

        Ok(ApiResponse { status, body })
    }
}
