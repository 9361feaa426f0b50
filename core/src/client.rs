//! Stateless HTTP request builder and response parser for the blog API.
//!
//! # Design
//! `BlogClient` holds only a `base_url` and carries no mutable state between
//! calls. Each CRUD operation is split into a `build_*` method that produces
//! an `HttpRequest` and a `parse_*` method that consumes an `HttpResponse`.
//! The caller executes the actual HTTP round-trip, keeping the core
//! deterministic and free of I/O dependencies.
//!
//! Endpoint paths mirror the server's URL map; trailing slashes are
//! significant.

use crate::error::ApiError;
use crate::form::MultipartForm;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{Blog, CreateBlog, UpdateBlog};

/// Synchronous, stateless client for the blog API.
///
/// Builds `HttpRequest` values and parses `HttpResponse` values without
/// touching the network. The caller is responsible for executing the HTTP
/// round-trip between `build_*` and `parse_*`.
#[derive(Debug, Clone)]
pub struct BlogClient {
    base_url: String,
}

impl BlogClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn build_list_blogs(&self) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: format!("{}/blogs/", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_create_blog(&self, input: &CreateBlog) -> HttpRequest {
        let mut form = MultipartForm::new()
            .text("title", &input.title)
            .text("content", &input.content);
        if let Some(image) = &input.image_header {
            form = form.file(
                "image_header",
                &image.filename,
                &image.content_type,
                image.bytes.clone(),
            );
        }
        multipart_request(HttpMethod::Post, format!("{}/blogs/", self.base_url), form)
    }

    pub fn build_update_blog(&self, id: u64, input: &UpdateBlog) -> HttpRequest {
        let mut form = MultipartForm::new();
        if let Some(title) = &input.title {
            form = form.text("title", title);
        }
        if let Some(content) = &input.content {
            form = form.text("content", content);
        }
        if let Some(image) = &input.image_header {
            form = form.file(
                "image_header",
                &image.filename,
                &image.content_type,
                image.bytes.clone(),
            );
        }
        multipart_request(
            HttpMethod::Put,
            format!("{}/blogs/update/{id}/", self.base_url),
            form,
        )
    }

    pub fn build_delete_blog(&self, id: u64) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Delete,
            path: format!("{}/blogs/delete/{id}/", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn parse_list_blogs(&self, response: HttpResponse) -> Result<Vec<Blog>, ApiError> {
        check_status(&response, 200)?;
        serde_json::from_str(&response.body).map_err(|e| ApiError::DeserializationError(e.to_string()))
    }

    pub fn parse_create_blog(&self, response: HttpResponse) -> Result<Blog, ApiError> {
        check_status(&response, 201)?;
        serde_json::from_str(&response.body).map_err(|e| ApiError::DeserializationError(e.to_string()))
    }

    pub fn parse_update_blog(&self, response: HttpResponse) -> Result<Blog, ApiError> {
        check_status(&response, 200)?;
        serde_json::from_str(&response.body).map_err(|e| ApiError::DeserializationError(e.to_string()))
    }

    /// The server answers a successful delete with 200 and an empty body.
    pub fn parse_delete_blog(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_status(&response, 200)?;
        Ok(())
    }
}

fn multipart_request(method: HttpMethod, path: String, form: MultipartForm) -> HttpRequest {
    HttpRequest {
        method,
        path,
        headers: vec![("content-type".to_string(), form.content_type())],
        body: Some(form.encode()),
    }
}

/// Map non-success status codes to the appropriate `ApiError` variant.
fn check_status(response: &HttpResponse, expected: u16) -> Result<(), ApiError> {
    if response.status == expected {
        return Ok(());
    }
    if response.status == 404 {
        return Err(ApiError::NotFound);
    }
    Err(ApiError::HttpError {
        status: response.status,
        body: response.body.clone(),
    })
}
