use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "booking")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub room_id: i32,
    pub date_start: Date,
    pub date_end: Date,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { Room }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Room => Entity::belongs_to(super::room::Entity)
                .from(Column::RoomId)
                .to(super::room::Column::Id)
                .into(),
        }
    }
}

impl Related<super::room::Entity> for Entity {
    fn to() -> RelationDef { Relation::Room.def() }
}

impl ActiveModelBehavior for ActiveModel {}
