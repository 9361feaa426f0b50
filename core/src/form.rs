//! `multipart/form-data` encoding for blog submissions.
//!
//! Blog forms travel as multipart bodies (text fields plus an optional
//! header image), so the core encodes that wire format itself instead of
//! leaving it to the host. Parts are framed per RFC 7578 with CRLF line
//! endings. The boundary is random per form; tests pin it with
//! `with_boundary` to get byte-stable output.

use uuid::Uuid;

/// A single form part: a text field or an uploaded file.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Part {
    Text {
        name: String,
        value: String,
    },
    File {
        name: String,
        filename: String,
        content_type: String,
        bytes: Vec<u8>,
    },
}

/// An ordered `multipart/form-data` body under construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MultipartForm {
    boundary: String,
    parts: Vec<Part>,
}

impl MultipartForm {
    pub fn new() -> Self {
        Self::with_boundary(&format!("blogform-{}", Uuid::new_v4().simple()))
    }

    /// Build a form with an explicit boundary instead of a random one.
    pub fn with_boundary(boundary: &str) -> Self {
        Self {
            boundary: boundary.to_string(),
            parts: Vec::new(),
        }
    }

    pub fn text(mut self, name: &str, value: &str) -> Self {
        self.parts.push(Part::Text {
            name: name.to_string(),
            value: value.to_string(),
        });
        self
    }

    pub fn file(mut self, name: &str, filename: &str, content_type: &str, bytes: Vec<u8>) -> Self {
        self.parts.push(Part::File {
            name: name.to_string(),
            filename: filename.to_string(),
            content_type: content_type.to_string(),
            bytes,
        });
        self
    }

    /// Value for the request's `content-type` header.
    pub fn content_type(&self) -> String {
        format!("multipart/form-data; boundary={}", self.boundary)
    }

    /// Encode all parts into the final body bytes.
    pub fn encode(&self) -> Vec<u8> {
        let mut out = Vec::new();
        for part in &self.parts {
            out.extend_from_slice(format!("--{}\r\n", self.boundary).as_bytes());
            match part {
                Part::Text { name, value } => {
                    out.extend_from_slice(
                        format!("Content-Disposition: form-data; name=\"{name}\"\r\n\r\n")
                            .as_bytes(),
                    );
                    out.extend_from_slice(value.as_bytes());
                }
                Part::File {
                    name,
                    filename,
                    content_type,
                    bytes,
                } => {
                    out.extend_from_slice(
                        format!(
                            "Content-Disposition: form-data; name=\"{name}\"; filename=\"{filename}\"\r\n"
                        )
                        .as_bytes(),
                    );
                    out.extend_from_slice(
                        format!("Content-Type: {content_type}\r\n\r\n").as_bytes(),
                    );
                    out.extend_from_slice(bytes);
                }
            }
            out.extend_from_slice(b"\r\n");
        }
        out.extend_from_slice(format!("--{}--\r\n", self.boundary).as_bytes());
        out
    }
}

impl Default for MultipartForm {
    fn default() -> Self {
        Self::new()
    }
}
