use std::{collections::HashMap, sync::Arc};

use axum::{
    extract::{Multipart, Path, State},
    http::StatusCode,
    routing::{delete, get, put},
    Json, Router,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};
use tracing::debug;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Blog {
    pub id: u64,
    pub title: String,
    pub content: String,
    pub image_header: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields collected from a multipart submission. Every field is optional at
/// this level; create enforces its required set, update applies whatever is
/// present.
#[derive(Debug, Default)]
struct BlogForm {
    title: Option<String>,
    content: Option<String>,
    image_header: Option<String>,
}

#[derive(Debug, Default)]
pub struct Table {
    blogs: HashMap<u64, Blog>,
    next_id: u64,
}

pub type Db = Arc<RwLock<Table>>;

pub fn app() -> Router {
    let db = Db::default();
    Router::new()
        .route("/blogs/", get(list_blogs).post(create_blog))
        .route("/blogs/update/{id}/", put(update_blog))
        .route("/blogs/delete/{id}/", delete(delete_blog))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn list_blogs(State(db): State<Db>) -> Json<Vec<Blog>> {
    let table = db.read().await;
    let mut blogs: Vec<Blog> = table.blogs.values().cloned().collect();
    // newest first, matching the real server's listing order
    blogs.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
    Json(blogs)
}

/// Drain the multipart stream into a `BlogForm`. Unknown fields are ignored;
/// uploaded image bytes are discarded and only the URL the real server would
/// serve the file under is kept.
async fn read_form(mut multipart: Multipart) -> Result<BlogForm, StatusCode> {
    let mut form = BlogForm::default();
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|_| StatusCode::BAD_REQUEST)?
    {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "title" => {
                form.title = Some(field.text().await.map_err(|_| StatusCode::BAD_REQUEST)?);
            }
            "content" => {
                form.content = Some(field.text().await.map_err(|_| StatusCode::BAD_REQUEST)?);
            }
            "image_header" => {
                let filename = field.file_name().map(str::to_string);
                field.bytes().await.map_err(|_| StatusCode::BAD_REQUEST)?;
                form.image_header = filename.map(|f| format!("/media/blog_headers/{f}"));
            }
            _ => {}
        }
    }
    Ok(form)
}

async fn create_blog(
    State(db): State<Db>,
    multipart: Multipart,
) -> Result<(StatusCode, Json<Blog>), StatusCode> {
    let form = read_form(multipart).await?;
    let (Some(title), Some(content)) = (form.title, form.content) else {
        return Err(StatusCode::BAD_REQUEST);
    };

    let now = Utc::now();
    let mut table = db.write().await;
    table.next_id += 1;
    let blog = Blog {
        id: table.next_id,
        title,
        content,
        image_header: form.image_header,
        created_at: now,
        updated_at: now,
    };
    table.blogs.insert(blog.id, blog.clone());
    debug!(id = blog.id, "created blog");
    Ok((StatusCode::CREATED, Json(blog)))
}

async fn update_blog(
    State(db): State<Db>,
    Path(id): Path<u64>,
    multipart: Multipart,
) -> Result<Json<Blog>, StatusCode> {
    let form = read_form(multipart).await?;
    let mut table = db.write().await;
    let blog = table.blogs.get_mut(&id).ok_or(StatusCode::NOT_FOUND)?;
    if let Some(title) = form.title {
        blog.title = title;
    }
    if let Some(content) = form.content {
        blog.content = content;
    }
    if let Some(url) = form.image_header {
        blog.image_header = Some(url);
    }
    blog.updated_at = Utc::now();
    debug!(id, "updated blog");
    Ok(Json(blog.clone()))
}

async fn delete_blog(State(db): State<Db>, Path(id): Path<u64>) -> Result<StatusCode, StatusCode> {
    let mut table = db.write().await;
    let removed = table.blogs.remove(&id);
    if removed.is_some() {
        debug!(id, "deleted blog");
    }
    removed.map(|_| StatusCode::OK).ok_or(StatusCode::NOT_FOUND)
}
