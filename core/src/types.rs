//! Domain DTOs for the blog API.
//!
//! # Design
//! `Blog` mirrors the server's serializer output but is defined independently
//! from the mock-server crate; integration tests catch any schema drift.
//! Create/update payloads are plain structs rather than serde types because
//! they travel as multipart form fields, not JSON.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single blog post returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Blog {
    pub id: u64,
    pub title: String,
    /// HTML body of the post.
    pub content: String,
    /// URL of the header image, absent when none was uploaded.
    pub image_header: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A header image attached to a create or update submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageFile {
    pub filename: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

/// Form payload for creating a new blog.
#[derive(Debug, Clone)]
pub struct CreateBlog {
    pub title: String,
    pub content: String,
    pub image_header: Option<ImageFile>,
}

/// Form payload for updating an existing blog. Only the fields present are
/// sent; omitted fields remain unchanged on the server.
#[derive(Debug, Clone, Default)]
pub struct UpdateBlog {
    pub title: Option<String>,
    pub content: Option<String>,
    pub image_header: Option<ImageFile>,
}
