//! Post entity for SeaORM.

use sea_orm::ActiveValue::{NotSet, Set, Unchanged};
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "posts")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: Option<DateTimeWithTimeZone>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Conversion from SeaORM Model to Domain Post.
impl From<Model> for quill_core::domain::Post {
    fn from(model: Model) -> Self {
        Self {
            id: Some(model.id),
            title: model.title,
            created_at: model.created_at.into(),
            updated_at: model.updated_at.map(Into::into),
        }
    }
}

/// Conversion from Domain Post to SeaORM ActiveModel.
///
/// A saved post keeps its id and creation time unchanged so that an
/// update only writes `title` and `updated_at`.
impl From<quill_core::domain::Post> for ActiveModel {
    fn from(post: quill_core::domain::Post) -> Self {
        match post.id {
            Some(id) => Self {
                id: Unchanged(id),
                title: Set(post.title),
                created_at: Unchanged(post.created_at.into()),
                updated_at: Set(post.updated_at.map(Into::into)),
            },
            None => Self {
                id: NotSet,
                title: Set(post.title),
                created_at: Set(post.created_at.into()),
                updated_at: Set(post.updated_at.map(Into::into)),
            },
        }
    }
}
