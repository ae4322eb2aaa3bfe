//! PostgreSQL post store.

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DbConn, DbErr, EntityTrait, QueryOrder, SqlErr};

use quill_core::domain::Post;
use quill_core::error::RepoError;
use quill_core::ports::PostRepository;

use super::entity::post::{self, Entity as PostEntity};

/// Post store backed by the `posts` table.
pub struct SeaOrmPostRepository {
    db: DbConn,
}

impl SeaOrmPostRepository {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }
}

pub(crate) fn map_db_err(err: DbErr) -> RepoError {
    if let Some(
        SqlErr::UniqueConstraintViolation(msg) | SqlErr::ForeignKeyConstraintViolation(msg),
    ) = err.sql_err()
    {
        return RepoError::Constraint(msg);
    }

    match err {
        DbErr::Conn(e) => RepoError::Connection(e.to_string()),
        DbErr::ConnectionAcquire(e) => RepoError::Connection(e.to_string()),
        other => RepoError::Query(other.to_string()),
    }
}

#[async_trait]
impl PostRepository for SeaOrmPostRepository {
    async fn find_all(&self) -> Result<Vec<Post>, RepoError> {
        let models = PostEntity::find()
            .order_by_asc(post::Column::Id)
            .all(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Post, RepoError> {
        PostEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(map_db_err)?
            .map(Into::into)
            .ok_or(RepoError::NotFound(id))
    }

    async fn save(&self, entity: Post) -> Result<Post, RepoError> {
        let model = match entity.id {
            None => post::ActiveModel::from(entity)
                .insert(&self.db)
                .await
                .map_err(map_db_err)?,
            Some(id) => post::ActiveModel::from(entity)
                .update(&self.db)
                .await
                .map_err(|e| match e {
                    DbErr::RecordNotUpdated => RepoError::NotFound(id),
                    other => map_db_err(other),
                })?,
        };

        tracing::debug!(post_id = model.id, "Post saved");
        Ok(model.into())
    }

    async fn delete(&self, entity: &Post) -> Result<(), RepoError> {
        let id = entity.id.ok_or(RepoError::Unsaved)?;

        let result = PostEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(RepoError::NotFound(id));
        }

        Ok(())
    }
}
