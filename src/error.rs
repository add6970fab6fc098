use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use thiserror::Error;

use crate::locale::{
    Locale, LocaleService, ENTITY_NOT_EXIST_ERROR, ENTITY_NOT_FOUND_ERROR, INTERNAL_ERROR_MESSAGE,
    TAG_WAS_CREATED_MESSAGE,
};
use crate::response::{ApiResponse, ResponseCode};
use crate::validator::FieldError;

/// Everything the store or the validator can raise. Each variant carries
/// just enough context to localize its message.
#[derive(Error, Debug)]
pub enum TagError {
    #[error("tag {id} not found")]
    NotFound { id: i64 },

    #[error("tag {id} does not exist")]
    NotExist { id: i64 },

    #[error("tag already exists with id {id}")]
    AlreadyExists { id: i64 },

    #[error("tag fields failed validation")]
    FieldsNotValid(Vec<FieldError>),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl TagError {
    /// Total mapping from the closed error set to a rendered HTTP error.
    /// Evaluated exactly once, at the handler boundary.
    pub fn render(&self, locales: &LocaleService, locale: Locale) -> ApiError {
        match self {
            TagError::NotFound { id } => ApiError::new(
                StatusCode::NOT_FOUND,
                ResponseCode::TagNotFound,
                locales.message_with(locale, ENTITY_NOT_FOUND_ERROR, id),
            ),
            TagError::NotExist { id } => ApiError::new(
                StatusCode::BAD_REQUEST,
                ResponseCode::TagNotExist,
                locales.message_with(locale, ENTITY_NOT_EXIST_ERROR, id),
            ),
            // Duplicate creates answer with the creation code and message
            // for the already-stored id. Pinned by a route test.
            TagError::AlreadyExists { id } => ApiError::new(
                StatusCode::BAD_REQUEST,
                ResponseCode::TagWasCreated,
                locales.message_with(locale, TAG_WAS_CREATED_MESSAGE, id),
            ),
            // Messages are appended with no separator, in validator order.
            TagError::FieldsNotValid(errors) => {
                let message = errors
                    .iter()
                    .map(|error| locales.message(locale, &error.code))
                    .collect::<String>();
                ApiError::new(StatusCode::BAD_REQUEST, ResponseCode::TagFieldsNotValid, message)
            }
            TagError::Database(e) => {
                tracing::error!("Database error: {:?}", e);
                ApiError::new(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ResponseCode::InternalError,
                    locales.message(locale, INTERNAL_ERROR_MESSAGE),
                )
            }
        }
    }
}

/// A fully rendered error: status plus the localized envelope body.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    body: ApiResponse,
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.status, self.body.message)
    }
}

impl ApiError {
    pub fn new(status: StatusCode, code: ResponseCode, message: String) -> Self {
        ApiError {
            status,
            body: ApiResponse::new(code, message),
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        self.status
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status).json(&self.body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn locales() -> LocaleService {
        LocaleService::new().unwrap()
    }

    #[test]
    fn not_found_maps_to_404() {
        let rendered = TagError::NotFound { id: 42 }.render(&locales(), Locale::En);
        assert_eq!(rendered.status, StatusCode::NOT_FOUND);
        assert_eq!(rendered.body.code, ResponseCode::TagNotFound.code());
        assert!(rendered.body.message.contains("42"));
    }

    #[test]
    fn not_exist_maps_to_400_with_its_own_code() {
        let rendered = TagError::NotExist { id: 5 }.render(&locales(), Locale::En);
        assert_eq!(rendered.status, StatusCode::BAD_REQUEST);
        assert_eq!(rendered.body.code, ResponseCode::TagNotExist.code());
        assert!(rendered.body.message.contains("5"));
    }

    #[test]
    fn already_exists_reuses_the_creation_code_and_message() {
        let rendered = TagError::AlreadyExists { id: 3 }.render(&locales(), Locale::En);
        assert_eq!(rendered.status, StatusCode::BAD_REQUEST);
        assert_eq!(rendered.body.code, ResponseCode::TagWasCreated.code());
        let created = locales().message_with(Locale::En, TAG_WAS_CREATED_MESSAGE, 3);
        assert_eq!(rendered.body.message, created);
    }

    #[test]
    fn field_errors_concatenate_in_order() {
        let errors = vec![
            FieldError { field: "name".into(), code: "tag_name_empty".into() },
            FieldError { field: "name".into(), code: "tag_name_length".into() },
        ];
        let rendered = TagError::FieldsNotValid(errors).render(&locales(), Locale::En);
        assert_eq!(rendered.status, StatusCode::BAD_REQUEST);
        assert_eq!(rendered.body.code, ResponseCode::TagFieldsNotValid.code());

        let svc = locales();
        let expected = format!(
            "{}{}",
            svc.message(Locale::En, "tag_name_empty"),
            svc.message(Locale::En, "tag_name_length"),
        );
        assert_eq!(rendered.body.message, expected);
    }
}
