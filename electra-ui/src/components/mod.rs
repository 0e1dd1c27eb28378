//! UI Components
//!
//! Layout pieces shared by the pages.

pub mod field;
pub mod guard;
pub mod loading;
pub mod nav;
pub mod toast;

pub use field::{SelectField, SubmitButton, TextArea, TextField};
pub use guard::{Fallback, Guarded};
pub use loading::{Loading, LoadError};
pub use nav::Nav;
pub use toast::Toast;
