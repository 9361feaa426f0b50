//! Synchronous API client core for the blog service.
//!
//! # Overview
//! Builds `HttpRequest` values and parses `HttpResponse` values without
//! touching the network (host-does-IO pattern), and keeps a `BlogStore`
//! loosely synchronized with the server by applying parse outcomes as state
//! transitions. The caller executes the actual HTTP round-trip, making the
//! core fully deterministic and testable.
//!
//! # Design
//! - `BlogClient` is stateless — it holds only `base_url`.
//! - Each CRUD operation is split into `build_*` (produces request) and
//!   `parse_*` (consumes response), so the I/O boundary is explicit.
//! - `BlogStore` is an explicit state object; every transition returns a
//!   `Result` instead of swallowing failures.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod client;
pub mod error;
pub mod form;
pub mod http;
pub mod store;
pub mod types;

pub use client::BlogClient;
pub use error::ApiError;
pub use form::MultipartForm;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use store::BlogStore;
pub use types::{Blog, CreateBlog, ImageFile, UpdateBlog};
