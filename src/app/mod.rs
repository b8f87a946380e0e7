//! egui Native Desktop App Module
//!
//! The desktop UI for the blog. Organized into focused submodules:
//!
//! - **`config`** - runtime configuration (backend origin, display name)
//! - **`session`** - session state plus login/register/logout calls
//! - **`state`** - central `AppState`: routes, form fields, pending results
//! - **`views`** - one render function per page or component
//! - **`theme`** - color palette
//! - **`main`** - binary entry point

pub mod config;
pub mod session;
pub mod state;
pub mod theme;
pub mod views;

pub use config::Config;
pub use session::SessionState;
pub use state::{AppState, Route};
