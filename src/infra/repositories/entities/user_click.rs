//! Click event database entity for SeaORM.
//!
//! Rows are append-only and owned exclusively by one user; the owning
//! user's deletion cascades here (enforced in the migration).

use sea_orm::entity::prelude::*;

use crate::domain::Click;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "user_clicks")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub user_id: Uuid,
    pub article_title: String,
    #[sea_orm(column_type = "Text")]
    pub article_url: String,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id",
        on_delete = "Cascade"
    )]
    User,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Convert database model to domain entity
impl From<Model> for Click {
    fn from(model: Model) -> Self {
        Click {
            id: model.id,
            user_id: model.user_id,
            article_title: model.article_title,
            article_url: model.article_url,
            created_at: model.created_at,
        }
    }
}
