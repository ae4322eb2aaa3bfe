//! Post pages: browse, read, add, edit and delete.
//!
//! Every handler resolves posts through the store explicitly and persists
//! each mutation with its own `save`/`delete` call. A missing id surfaces as
//! `RepoError::NotFound`, which the error boundary turns into a 404.

use actix_web::{
    HttpRequest, HttpResponse,
    http::header::{self, ContentType},
    web,
};
use askama::Template;

use quill_core::domain::Post;
use quill_shared::PostForm;

use crate::middleware::error::{AppError, AppResult};
use crate::observability::RequestId;
use crate::state::AppState;
use crate::views::{BrowseTemplate, ReadTemplate};

/// Title used by `add` when no form is posted.
pub const DEMO_TITLE: &str = "Pigeon droppings are not food";

/// Title used by `edit` when no form is posted.
pub const EDITED_TITLE: &str = "Yatta !";

/// Largest urlencoded body the add and edit routes accept.
pub const FORM_LIMIT: usize = 64 * 1024;

/// Form extraction outcome; the error is kept so a rejected body is reported.
type FormInput = Result<web::Form<PostForm>, actix_web::Error>;

fn redirect_to_browse() -> HttpResponse {
    HttpResponse::Found()
        .insert_header((header::LOCATION, "/"))
        .finish()
}

fn render(template: impl Template) -> AppResult<HttpResponse> {
    let body = template
        .render()
        .map_err(|e| AppError::Internal(format!("Template rendering failed: {}", e)))?;

    Ok(HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(body))
}

/// Title from the posted form, or `fallback` when the request has no body.
///
/// Any other extraction failure (wrong content type, oversized or malformed
/// body) is returned to the caller.
fn title_from(req: &HttpRequest, form: FormInput, fallback: &str) -> AppResult<String> {
    let title = match form {
        Ok(form) => form.into_inner().title,
        Err(_) if !has_body(req) => None,
        Err(e) => return Err(e.into()),
    };

    let title = title
        .map(|t| t.trim().to_string())
        .unwrap_or_else(|| fallback.to_string());

    Post::validate_title(&title)?;
    Ok(title)
}

fn has_body(req: &HttpRequest) -> bool {
    let headers = req.headers();
    let length = headers
        .get(header::CONTENT_LENGTH)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse::<u64>().ok());

    match length {
        Some(len) => len > 0,
        None => {
            headers.contains_key(header::TRANSFER_ENCODING)
                || headers.contains_key(header::CONTENT_TYPE)
        }
    }
}

/// GET /
pub async fn browse(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts = state.posts.find_all().await?;
    render(BrowseTemplate::new(&posts)?)
}

/// GET /post/{id}
pub async fn read(state: web::Data<AppState>, path: web::Path<i32>) -> AppResult<HttpResponse> {
    let post = state.posts.find_by_id(path.into_inner()).await?;
    render(ReadTemplate::new(&post)?)
}

/// GET|POST /post/add
pub async fn add(
    req: HttpRequest,
    request_id: RequestId,
    state: web::Data<AppState>,
    form: FormInput,
) -> AppResult<HttpResponse> {
    let title = title_from(&req, form, DEMO_TITLE)?;

    let saved = state.posts.save(Post::new(title)).await?;
    tracing::info!(post_id = ?saved.id, request_id = request_id.as_str(), "Post created");

    Ok(redirect_to_browse())
}

/// GET|POST /post/edit/{id}
pub async fn edit(
    req: HttpRequest,
    request_id: RequestId,
    state: web::Data<AppState>,
    path: web::Path<i32>,
    form: FormInput,
) -> AppResult<HttpResponse> {
    let mut post = state.posts.find_by_id(path.into_inner()).await?;
    let title = title_from(&req, form, EDITED_TITLE)?;

    post.retitle(title);
    let saved = state.posts.save(post).await?;
    tracing::info!(post_id = ?saved.id, request_id = request_id.as_str(), "Post edited");

    Ok(redirect_to_browse())
}

/// GET|POST /post/delete/{id}
pub async fn delete(
    request_id: RequestId,
    state: web::Data<AppState>,
    path: web::Path<i32>,
) -> AppResult<HttpResponse> {
    let post = state.posts.find_by_id(path.into_inner()).await?;

    state.posts.delete(&post).await?;
    tracing::info!(post_id = ?post.id, request_id = request_id.as_str(), "Post deleted");

    Ok(redirect_to_browse())
}
