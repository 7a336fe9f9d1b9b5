use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "boost")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub rarity: i32,
    pub series: i32,
    pub season_id: Option<i32>,
    pub boost_type: String,
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
    #[sea_orm(has_many = "super::user_boost::Entity")]
    UserBoost,
    #[sea_orm(has_many = "super::boost_custom_name::Entity")]
    BoostCustomName,
}

impl Related<super::season::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Season.def()
    }
}

impl Related<super::user_boost::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UserBoost.def()
    }
}

impl Related<super::boost_custom_name::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BoostCustomName.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
