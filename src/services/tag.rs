use async_trait::async_trait;

use crate::db::Database;
use crate::error::TagError;
use crate::models::tag::Tag;

/// Persistence seam for tag records. Route handlers only ever see this
/// trait, so tests can swap the database for a stub.
#[async_trait]
pub trait TagStore: Send + Sync {
    /// Store a new tag and return its assigned id. Errors with
    /// `AlreadyExists` (carrying the stored id) when the name is taken.
    async fn create_tag(&self, name: &str) -> Result<i64, TagError>;

    /// Errors with `NotFound` when no tag has the given id.
    async fn find_tag_by_id(&self, id: i64) -> Result<Tag, TagError>;

    /// Errors with `NotExist` when deletion targets an absent id.
    async fn delete_tag(&self, id: i64) -> Result<(), TagError>;
}

pub struct DbTagStore {
    db: Database,
}

impl DbTagStore {
    pub fn new(db: Database) -> Self {
        DbTagStore { db }
    }
}

#[async_trait]
impl TagStore for DbTagStore {
    async fn create_tag(&self, name: &str) -> Result<i64, TagError> {
        // The UNIQUE constraint on name is the duplicate check; a
        // SELECT-then-INSERT would race with concurrent creates.
        let result = sqlx::query("INSERT INTO tag (name) VALUES ($1)")
            .bind(name)
            .execute(&self.db.pool)
            .await;

        match result {
            Ok(done) => Ok(done.last_insert_rowid()),
            Err(e) if e.as_database_error().is_some_and(|db| db.is_unique_violation()) => {
                let (id,) = sqlx::query_as::<_, (i64,)>("SELECT id FROM tag WHERE name = $1")
                    .bind(name)
                    .fetch_one(&self.db.pool)
                    .await?;
                Err(TagError::AlreadyExists { id })
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn find_tag_by_id(&self, id: i64) -> Result<Tag, TagError> {
        let tag = sqlx::query_as::<_, Tag>("SELECT id, name FROM tag WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.db.pool)
            .await?;

        tag.ok_or(TagError::NotFound { id })
    }

    async fn delete_tag(&self, id: i64) -> Result<(), TagError> {
        let result = sqlx::query("DELETE FROM tag WHERE id = $1")
            .bind(id)
            .execute(&self.db.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(TagError::NotExist { id });
        }

        Ok(())
    }
}
