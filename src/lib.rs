//! # Electra
//!
//! Client for the Electra election management API: sign-in, role-gated
//! routing, voter lists, candidacy applications and their review, election
//! phase configuration, notifications, reports and results.
//!
//! ## Modules
//!
//! - [`session`]: persisted session state and the explicit session context
//! - [`router`]: route table and the session guard
//! - [`api`]: HTTP client over a pluggable transport
//! - [`model`]: records exchanged with the API
//! - [`forms`]: form state and local validation
//! - [`views`]: per-screen load and submit steps
//! - [`display`], [`filter`], [`prefs`]: formatting, list filters, per-user
//!   preferences
//!
//! The `native` feature (on by default) adds the reqwest transport, the file
//! backed session store, configuration, logging and the `electra` binary.
//! The browser front end builds with it off.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use electra::api::{ApiClient, ReqwestTransport};
//! use electra::forms::LoginForm;
//! use electra::router::{settle, Route};
//! use electra::session::{FileStore, Role, Session};
//! use std::time::Duration;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut store = FileStore::open("./storage.json")?;
//!     let transport = ReqwestTransport::new(Duration::from_secs(30))?;
//!     let api = ApiClient::new(transport, "http://localhost:5000/api");
//!
//!     let mut form = LoginForm::new(Role::Voter);
//!     form.email = "asha@club.org".to_string();
//!     form.password = "secret".to_string();
//!     electra::views::login(&api, &mut store, &form).await?;
//!
//!     let session = Session::load(&store);
//!     assert_eq!(settle(&session, "/dashboard"), Route::VoterDashboard);
//!     Ok(())
//! }
//! ```

pub mod api;
#[cfg(feature = "native")]
pub mod config;
pub mod display;
pub mod error;
pub mod filter;
pub mod forms;
#[cfg(feature = "native")]
pub mod logging;
pub mod model;
pub mod prefs;
pub mod router;
pub mod session;
pub mod views;

pub use api::{ApiClient, ApiError, Transport};
#[cfg(feature = "native")]
pub use config::{generate_default_config, Config, ConfigError};
pub use error::ViewError;
pub use forms::FormError;
pub use router::{resolve, settle, Navigation, Route};
pub use session::{KeyValueStore, Role, Session, SessionContext, StoreError};
