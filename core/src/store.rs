//! Client-side state for the blog collection.
//!
//! # Design
//! `BlogStore` is an explicit state object owned by the caller rather than a
//! shared singleton. Each CRUD operation has a `finish_*` transition that
//! consumes the parse outcome from `BlogClient`: on success the relevant
//! fields change, on failure the state is left untouched, the error is
//! logged, and the `Err` is handed back so the caller can react.
//!
//! List results replace `blogs` wholesale. Create and update only move
//! `blog_focus` — the listing is refreshed by fetching again, never patched
//! locally. Delete clears `blog_focus` unconditionally and filters the
//! listing by id.

use tracing::error;

use crate::error::ApiError;
use crate::types::Blog;

/// Mutable blog collection state, loosely synchronized with the server.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BlogStore {
    /// Last known full listing.
    pub blogs: Vec<Blog>,
    /// Most recently created or updated record; cleared on delete.
    pub blog_focus: Option<Blog>,
    /// UI-intent marker; no store transition reads or enforces it.
    pub is_editing: bool,
}

impl BlogStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply the outcome of a list fetch. Success replaces the listing
    /// wholesale; `blog_focus` is not touched.
    pub fn finish_list(&mut self, outcome: Result<Vec<Blog>, ApiError>) -> Result<(), ApiError> {
        match outcome {
            Ok(blogs) => {
                self.blogs = blogs;
                Ok(())
            }
            Err(err) => {
                error!("failed to fetch blogs: {err}");
                Err(err)
            }
        }
    }

    /// Apply the outcome of a create. The new record becomes the focus; the
    /// listing is left as-is and must be refetched to include it.
    pub fn finish_create(&mut self, outcome: Result<Blog, ApiError>) -> Result<(), ApiError> {
        match outcome {
            Ok(blog) => {
                self.blog_focus = Some(blog);
                Ok(())
            }
            Err(err) => {
                error!("failed to create blog: {err}");
                Err(err)
            }
        }
    }

    /// Apply the outcome of an update. The refreshed record becomes the
    /// focus and is returned to the caller; the listing entry is not patched.
    pub fn finish_update(&mut self, outcome: Result<Blog, ApiError>) -> Result<Blog, ApiError> {
        match outcome {
            Ok(blog) => {
                self.blog_focus = Some(blog.clone());
                Ok(blog)
            }
            Err(err) => {
                error!("failed to update blog: {err}");
                Err(err)
            }
        }
    }

    /// Apply the outcome of a delete. Clears the focus even when the focused
    /// record is not the deleted one, and drops the matching listing entry.
    /// Filtering an id that is already gone is a no-op.
    pub fn finish_delete(&mut self, id: u64, outcome: Result<(), ApiError>) -> Result<(), ApiError> {
        match outcome {
            Ok(()) => {
                self.blog_focus = None;
                self.blogs.retain(|blog| blog.id != id);
                Ok(())
            }
            Err(err) => {
                error!("failed to delete blog {id}: {err}");
                Err(err)
            }
        }
    }
}
