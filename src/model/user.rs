use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
pub struct UserDto {
    pub id: String,
    pub email: Option<String>,
    pub display_name: Option<String>,
    pub is_admin: bool,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
pub struct SetCustomNameDto {
    pub custom_name: String,
}

/// Caller's custom boost names keyed by boost id.
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, Default, PartialEq)]
#[serde(transparent)]
pub struct CustomNamesDto(pub BTreeMap<i32, String>);

/// Result of setting or clearing one custom name. `custom_name` is `None` once cleared.
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
pub struct BoostCustomNameDto {
    pub boost_id: i32,
    pub custom_name: Option<String>,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
pub struct BoostCustomNameRowDto {
    pub user_id: String,
    pub boost_id: i32,
    pub custom_name: String,
    pub updated_at: DateTime<Utc>,
}

/// Download document produced by the custom name export.
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CustomNameExportDto {
    pub exported_at: DateTime<Utc>,
    pub boost_custom_names: Vec<BoostCustomNameRowDto>,
}
