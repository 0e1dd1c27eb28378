//! Election API client
//!
//! [`ApiClient`] issues every request the views make. It is generic over a
//! [`Transport`] so the browser front end can supply a fetch-based one.
//!
//! # Endpoints
//!
//! - `POST /auth/login`, `POST /auth/signup`, `POST /auth/admin-signup`
//! - `GET /voters`, `POST /voters`, `PUT /voter/{voter_id}`
//! - `GET /candidate-applications`, `GET /candidate-applications/me`,
//!   `POST /candidate-applications` (multipart),
//!   `PUT /candidate-applications/{id}/review`
//! - `GET /election-config`, `PUT /election-config`,
//!   `POST /election-config/nomination-deadline-reminder`
//! - `GET /notifications`, `POST /notifications`
//! - `GET /reports`, `POST /reports`
//! - `GET /election-results`

mod client;
mod endpoints;
mod error;
#[cfg(feature = "native")]
mod http;
#[cfg(all(test, feature = "native"))]
pub(crate) mod mock;
mod transport;

pub use client::{extract_message, ApiClient};
pub use error::ApiError;
#[cfg(feature = "native")]
pub use http::ReqwestTransport;
pub use transport::{ApiRequest, ApiResponse, Attachment, Body, Method, Part, Transport};
