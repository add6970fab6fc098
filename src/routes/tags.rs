use actix_web::{web, HttpResponse};

use crate::error::{ApiError, TagError};
use crate::locale::{Locale, TAG_WAS_CREATED_MESSAGE, TAG_WAS_DELETED_MESSAGE};
use crate::models::tag::TagForm;
use crate::response::{ApiResponse, ResponseCode};
use crate::validator;
use crate::AppState;

// POST / - Create tag
async fn create_tag(
    state: web::Data<AppState>,
    locale: Locale,
    form: web::Json<TagForm>,
) -> Result<HttpResponse, ApiError> {
    try_create(&state, locale, form.into_inner())
        .await
        .map_err(|e| e.render(&state.locales, locale))
}

async fn try_create(
    state: &AppState,
    locale: Locale,
    form: TagForm,
) -> Result<HttpResponse, TagError> {
    let errors = validator::field_errors(&form);
    if !errors.is_empty() {
        return Err(TagError::FieldsNotValid(errors));
    }

    let id = state.store.create_tag(&form.name).await?;

    Ok(HttpResponse::Created().json(ApiResponse::new(
        ResponseCode::TagWasCreated,
        state.locales.message_with(locale, TAG_WAS_CREATED_MESSAGE, id),
    )))
}

// GET /{id} - Find tag by id, returned as raw tag JSON
async fn find_tag_by_id(
    state: web::Data<AppState>,
    locale: Locale,
    id: web::Path<i64>,
) -> Result<HttpResponse, ApiError> {
    let tag = state
        .store
        .find_tag_by_id(id.into_inner())
        .await
        .map_err(|e| e.render(&state.locales, locale))?;

    Ok(HttpResponse::Ok().json(tag))
}

// DELETE /{id} - Delete tag
async fn delete_tag(
    state: web::Data<AppState>,
    locale: Locale,
    id: web::Path<i64>,
) -> Result<HttpResponse, ApiError> {
    let id = id.into_inner();
    state
        .store
        .delete_tag(id)
        .await
        .map_err(|e| e.render(&state.locales, locale))?;

    Ok(HttpResponse::Ok().json(ApiResponse::new(
        ResponseCode::TagWasDeleted,
        state.locales.message_with(locale, TAG_WAS_DELETED_MESSAGE, id),
    )))
}

pub fn create_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("", web::post().to(create_tag))
        .route("/{id}", web::get().to(find_tag_by_id))
        .route("/{id}", web::delete().to(delete_tag));
}
