//! Record types for the blog collections
//!
//! These mirror the server-side schema one-to-one and are only held
//! transiently: every view re-fetches what it needs and drops it on
//! navigation.

use serde::{Deserialize, Serialize};

/// A record from the `users` auth collection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub created: String,
    #[serde(default)]
    pub updated: String,
}

impl UserRecord {
    /// Display name: falls back to the email when no name is set.
    pub fn display_name(&self) -> &str {
        if self.name.trim().is_empty() {
            &self.email
        } else {
            &self.name
        }
    }
}

/// A record from the `posts` collection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostRecord {
    pub id: String,
    #[serde(default, rename = "collectionId")]
    pub collection_id: String,
    pub title: String,
    #[serde(default)]
    pub content: String,
    /// Author user id
    #[serde(default)]
    pub author: String,
    /// Category id; empty string when the post has none
    #[serde(default)]
    pub category: String,
    /// Stored image filename; empty string when the post has none
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub created: String,
    #[serde(default)]
    pub updated: String,
    /// Inlined relations when the query asked for `expand`
    #[serde(default)]
    pub expand: Option<PostExpand>,
}

/// Inlined relations of a post
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PostExpand {
    #[serde(default)]
    pub author: Option<UserRecord>,
    #[serde(default)]
    pub category: Option<CategoryRecord>,
}

impl PostRecord {
    /// Author display name from the expanded relation, if present.
    pub fn author_name(&self) -> Option<&str> {
        self.expand
            .as_ref()
            .and_then(|e| e.author.as_ref())
            .map(|u| u.display_name())
    }

    /// Category name from the expanded relation, if present.
    pub fn category_name(&self) -> Option<&str> {
        self.expand
            .as_ref()
            .and_then(|e| e.category.as_ref())
            .map(|c| c.name.as_str())
    }

    /// Created timestamp formatted for display. Falls back to the raw
    /// value when the server format ever changes.
    pub fn created_display(&self) -> String {
        chrono::NaiveDateTime::parse_from_str(&self.created, "%Y-%m-%d %H:%M:%S%.3fZ")
            .map(|dt| dt.format("%d.%m.%Y.").to_string())
            .unwrap_or_else(|_| self.created.clone())
    }
}

/// A record from the `categories` collection (read-only for this client)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryRecord {
    pub id: String,
    pub name: String,
}

/// A record from the `likes` collection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LikeRecord {
    pub id: String,
    /// Post id
    pub post: String,
    /// User id
    pub user: String,
}

/// One page of a list query
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListResult<T> {
    pub page: u32,
    #[serde(rename = "perPage")]
    pub per_page: u32,
    #[serde(rename = "totalItems")]
    pub total_items: u32,
    #[serde(rename = "totalPages")]
    pub total_pages: u32,
    pub items: Vec<T>,
}

/// Successful password auth response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthData {
    pub token: String,
    pub record: UserRecord,
}

/// Multipart payload for creating or updating a post
#[derive(Debug, Clone, Default)]
pub struct PostPayload {
    pub title: String,
    pub content: String,
    /// Author user id; set on create, left out on update
    pub author: Option<String>,
    pub category: Option<String>,
    /// Image file as (filename, bytes), read from disk by the caller
    pub image: Option<(String, Vec<u8>)>,
}

impl PostPayload {
    /// Build the multipart form the records endpoint expects.
    pub fn into_form(self) -> reqwest::multipart::Form {
        let mut form = reqwest::multipart::Form::new()
            .text("title", self.title)
            .text("content", self.content);
        if let Some(author) = self.author {
            form = form.text("author", author);
        }
        if let Some(category) = self.category {
            form = form.text("category", category);
        }
        if let Some((file_name, bytes)) = self.image {
            let part = reqwest::multipart::Part::bytes(bytes).file_name(file_name);
            form = form.part("image", part);
        }
        form
    }
}
