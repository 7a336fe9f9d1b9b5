use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
pub struct DriverDto {
    pub id: i32,
    pub name: String,
    pub rarity: i32,
    pub series: i32,
    pub season_id: Option<i32>,
    pub min_tier: i32,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
pub struct CarPartDto {
    pub id: i32,
    pub name: String,
    pub rarity: i32,
    pub series: i32,
    pub season_id: Option<i32>,
    pub part_type: String,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
pub struct BoostDto {
    pub id: i32,
    pub name: String,
    pub rarity: i32,
    pub series: i32,
    pub season_id: Option<i32>,
    pub boost_type: String,
}

/// A catalog item enriched with the caller's ownership state.
///
/// The catalog fields are flattened next to the ownership fields, so an owned boost
/// serializes as `{ id, name, ..., level, card_count, is_owned }`.
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
pub struct OwnedItemDto<T> {
    #[serde(flatten)]
    pub item: T,
    pub level: i32,
    pub card_count: i32,
    pub is_owned: bool,
}

/// Request body for recording a level or card count change.
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
pub struct UpsertOwnershipDto {
    pub level: i32,
    pub card_count: i32,
}
