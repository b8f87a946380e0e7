//! PocketBase REST client
//!
//! Thin wrapper over the PocketBase collection API. The pieces mirror the
//! official SDK surface the blog uses:
//!
//! - **`client`** - `Client` and the collection-scoped CRUD handle
//!   (`create`, `update`, `delete`, `get_one`, `get_list`, `get_full_list`,
//!   `get_first_list_item`, `auth_with_password`)
//! - **`auth_store`** - session store with change subscriptions
//! - **`records`** - serde types for the `users`, `posts`, `categories`
//!   and `likes` collections
//! - **`error`** - error taxonomy for rejected calls
//! - **`files`** - file URL construction for served images

pub mod auth_store;
pub mod client;
pub mod error;
pub mod files;
pub mod records;

pub use auth_store::{AuthStore, SubscriptionId};
pub use client::{Client, Collection, ListOptions};
pub use error::ClientError;
pub use records::{
    AuthData, CategoryRecord, LikeRecord, ListResult, PostExpand, PostPayload, PostRecord,
    UserRecord,
};
