use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "car_part")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub rarity: i32,
    pub series: i32,
    pub season_id: Option<i32>,
    /// Slot the part fits, e.g. `brakes`, `gearbox`, `rear_wing`.
    pub part_type: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::season::Entity",
        from = "Column::SeasonId",
        to = "super::season::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    Season,
    #[sea_orm(has_many = "super::user_car_part::Entity")]
    UserCarPart,
}

impl Related<super::season::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Season.def()
    }
}

impl Related<super::user_car_part::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UserCarPart.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
