use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A persisted tag. The id is assigned by the store on creation.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Tag {
    pub id: i64,
    pub name: String,
}

/// Inbound payload for tag creation.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct TagForm {
    #[validate(custom(function = crate::validator::not_blank))]
    #[validate(length(min = 1, max = 45, code = "tag_name_length"))]
    pub name: String,
}
