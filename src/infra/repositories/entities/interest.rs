//! Interest database entity for SeaORM.

use sea_orm::entity::prelude::*;

use crate::domain::Interest;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "interests")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        super::user_interest::Relation::User.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::user_interest::Relation::Interest.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Convert database model to domain entity
impl From<Model> for Interest {
    fn from(model: Model) -> Self {
        Interest {
            id: model.id,
            name: model.name,
        }
    }
}
