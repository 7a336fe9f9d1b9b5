use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "user_car_part")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub user_id: String,
    #[sea_orm(primary_key, auto_increment = false)]
    pub car_part_id: i32,
    pub level: i32,
    pub card_count: i32,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::car_part::Entity",
        from = "Column::CarPartId",
        to = "super::car_part::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    CarPart,
}

impl Related<super::car_part::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CarPart.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
