//! HTTP API Client
//!
//! Implements the [`Transport`] seam with `gloo-net` so the browser drives
//! the same [`ApiClient`] as the terminal client.

use async_trait::async_trait;
use gloo_net::http::{Request, RequestBuilder};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

use electra::api::{
    ApiClient, ApiError, ApiRequest, ApiResponse, Attachment, Body, Method, Part, Transport,
};
use electra::session::SessionContext;

/// Default API base URL
pub const DEFAULT_API_BASE: &str = "http://localhost:5000/api";

const API_URL_KEY: &str = "electra_api_url";

/// API base URL: the `electra_api_url` local storage entry, else the default
pub fn get_api_base() -> String {
    let url = web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|s| s.get_item(API_URL_KEY).ok().flatten())
        .filter(|url| !url.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_API_BASE.to_string());
    url.trim_end_matches('/').to_string()
}

/// Client for the current session, or an anonymous one
pub fn api_client(ctx: Option<&SessionContext>) -> ApiClient<GlooTransport> {
    let client = ApiClient::new(GlooTransport, &get_api_base());
    match ctx {
        Some(ctx) => client.with_token(ctx.token.clone()),
        None => client,
    }
}

/// Browser `fetch` via `gloo-net`
#[derive(Debug, Clone, Copy, Default)]
pub struct GlooTransport;

#[async_trait(?Send)]
impl Transport for GlooTransport {
    async fn execute(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        let mut builder: RequestBuilder = match request.method {
            Method::Get => Request::get(&request.url),
            Method::Post => Request::post(&request.url),
            Method::Put => Request::put(&request.url),
        };
        if let Some(token) = &request.token {
            builder = builder.header("Authorization", &format!("Bearer {}", token));
        }

        let prepared = match request.body {
            Body::Empty => builder.build(),
            Body::Json(value) => builder.json(&value),
            Body::Multipart(parts) => builder.body(form_data(&parts)?),
        }
        .map_err(|e| ApiError::Transport(e.to_string()))?;

        let response = prepared
            .send()
            .await
            .map_err(|e| match e {
                gloo_net::Error::JsError(_) => ApiError::Unavailable,
                other => ApiError::Transport(other.to_string()),
            })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))?;

        Ok(ApiResponse { status, body })
    }
}

fn form_data(parts: &[Part]) -> Result<web_sys::FormData, ApiError> {
    let js_err = |e: wasm_bindgen::JsValue| ApiError::Transport(format!("{:?}", e));
    let form = web_sys::FormData::new().map_err(js_err)?;

    for part in parts {
        match part {
            Part::Text { name, value } => form.append_with_str(name, value).map_err(js_err)?,
            Part::File { name, attachment } => {
                let blob = to_blob(attachment).map_err(js_err)?;
                form.append_with_blob_and_filename(name, &blob, &attachment.file_name)
                    .map_err(js_err)?
            }
        }
    }
    Ok(form)
}

fn to_blob(attachment: &Attachment) -> Result<web_sys::Blob, wasm_bindgen::JsValue> {
    let bytes = js_sys::Uint8Array::from(attachment.bytes.as_slice());
    let sequence = js_sys::Array::of1(&bytes);

    let options = web_sys::BlobPropertyBag::new();
    if let Some(content_type) = &attachment.content_type {
        options.set_type(content_type);
    }
    web_sys::Blob::new_with_u8_array_sequence_and_options(&sequence, &options)
}

/// Read the first file picked in an `<input type="file">`
pub async fn read_attachment(input: &web_sys::HtmlInputElement) -> Result<Option<Attachment>, String> {
    let Some(file) = input.files().and_then(|files| files.get(0)) else {
        return Ok(None);
    };

    let buffer = JsFuture::from(file.array_buffer())
        .await
        .map_err(|e| format!("Failed to read {}: {:?}", file.name(), e))?;
    let buffer = buffer
        .dyn_into::<js_sys::ArrayBuffer>()
        .map_err(|_| format!("Failed to read {}", file.name()))?;
    let bytes = js_sys::Uint8Array::new(&buffer).to_vec();

    let mut attachment = Attachment::new(file.name(), bytes);
    let content_type = file.type_();
    if !content_type.is_empty() {
        attachment = attachment.with_content_type(content_type);
    }
    Ok(Some(attachment))
}
