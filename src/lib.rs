//! Osobni Blog - Main Library
//!
//! Native desktop client for a PocketBase-backed personal blog. The UI is
//! built with egui/eframe; all persistence, authentication and file storage
//! live in the remote PocketBase instance, which this crate talks to through
//! a thin REST wrapper.
//!
//! # Module Structure
//!
//! The library is organized into three main modules:
//!
//! - **`shared`** - Configuration builder and client-side validation rules
//! - **`pocketbase`** - PocketBase REST client: collection CRUD, the auth
//!   store (session state plus change subscriptions), record types and
//!   file URL helpers
//! - **`app`** - The egui application: routes, central state, session
//!   handling, theme and one view per page
//!
//! # Thread Safety
//!
//! The UI is single-threaded immediate mode. Backend calls run on short
//! lived worker threads and report back over `std::sync::mpsc` channels
//! polled once per frame. The auth store is the only shared mutable state
//! and is guarded internally.

/// Configuration and validation shared across the app
pub mod shared;

/// PocketBase REST client and session store
pub mod pocketbase;

/// egui native desktop app
pub mod app;
