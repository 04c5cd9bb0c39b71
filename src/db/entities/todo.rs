use base_entity_derive::base_entity;
use sea_orm::entity::prelude::*;

#[base_entity]
#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "todos")]
pub struct Model {
    pub title: String,
    #[sea_orm(default_value = false)]
    pub completed: bool,
    /// 0 = low, 1 = medium, 2 = high. Not exposed for writes.
    #[sea_orm(default_value = 0)]
    pub priority: i32,
}

impl ActiveModelBehavior for ActiveModel {}
