//! Post handlers - list, view, create, edit and delete.

use actix_web::{HttpResponse, web};

use folio_shared::dto::{BlogPostFormData, ListPostsQuery, PostListResponse};
use folio_shared::validate_form;

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

fn not_found(id: u64) -> AppError {
    AppError::NotFound(format!("Post {} not found", id))
}

/// GET /api/posts?page=1&search=hospital
pub async fn list_posts(
    state: web::Data<AppState>,
    query: web::Query<ListPostsQuery>,
) -> AppResult<HttpResponse> {
    let query = query.into_inner();
    let page = state
        .with_posts(move |posts| posts.query(query.page, &query.search))
        .await?;

    Ok(HttpResponse::Ok().json(PostListResponse::from(page)))
}

/// GET /api/posts/{id}
pub async fn get_post(state: web::Data<AppState>, path: web::Path<u64>) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let post = state
        .with_posts(move |posts| posts.get_by_id(id))
        .await?
        .ok_or_else(|| not_found(id))?;

    Ok(HttpResponse::Ok().json(post))
}

/// POST /api/posts
pub async fn create_post(
    state: web::Data<AppState>,
    body: web::Json<BlogPostFormData>,
) -> AppResult<HttpResponse> {
    let form = body.into_inner();
    validate_form(&form)?;

    let post = state.with_posts(move |posts| posts.create(form)).await?;
    Ok(HttpResponse::Created().json(post))
}

/// PUT /api/posts/{id}
pub async fn update_post(
    state: web::Data<AppState>,
    path: web::Path<u64>,
    body: web::Json<BlogPostFormData>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let form = body.into_inner();
    validate_form(&form)?;

    let post = state
        .with_posts(move |posts| posts.update(id, form))
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(HttpResponse::Ok().json(post))
}

/// DELETE /api/posts/{id}
pub async fn delete_post(
    state: web::Data<AppState>,
    path: web::Path<u64>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();

    if !state.with_posts(move |posts| posts.delete(id)).await? {
        return Err(not_found(id));
    }
    Ok(HttpResponse::NoContent().finish())
}
