//! Routing
//!
//! Maps paths to screens and gates them on the session. The browser front end
//! and the terminal client both go through [`resolve`] before showing a view.

mod guard;
mod route;

pub use guard::{check, resolve, settle, Decision, Navigation, MAX_REDIRECTS};
pub use route::{legacy_alias, Access, Route};
