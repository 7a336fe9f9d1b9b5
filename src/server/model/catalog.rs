//! Catalog domain models and filter parameters.
//!
//! Catalog items are immutable reference content (drivers, car parts, boosts). The
//! domain models are converted from entity models at the repository boundary and to
//! DTOs at the controller boundary.

use std::collections::HashMap;

use crate::{
    model::catalog::{BoostDto, CarPartDto, DriverDto},
    server::{
        error::validation::ValidationError,
        model::page::PageRequest,
        util::parse::{ParseMode, QueryParams},
    },
};

/// Which catalog a query or ownership record targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CatalogKind {
    Driver,
    CarPart,
    Boost,
}

impl CatalogKind {
    /// Query parameter naming the catalog-specific subtype filter.
    pub fn subtype_param(self) -> &'static str {
        match self {
            Self::Driver => "min_tier",
            Self::CarPart => "part_type",
            Self::Boost => "boost_type",
        }
    }

    /// Human readable name used in error messages.
    pub fn label(self) -> &'static str {
        match self {
            Self::Driver => "Driver",
            Self::CarPart => "Car part",
            Self::Boost => "Boost",
        }
    }
}

/// Common behaviour of catalog domain models.
pub trait CatalogItem {
    fn id(&self) -> i32;
}

#[derive(Debug, Clone, PartialEq)]
pub struct Driver {
    pub id: i32,
    pub name: String,
    pub rarity: i32,
    pub series: i32,
    pub season_id: Option<i32>,
    pub min_tier: i32,
}

impl Driver {
    pub fn from_entity(entity: entity::driver::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            rarity: entity.rarity,
            series: entity.series,
            season_id: entity.season_id,
            min_tier: entity.min_tier,
        }
    }

    pub fn into_dto(self) -> DriverDto {
        DriverDto {
            id: self.id,
            name: self.name,
            rarity: self.rarity,
            series: self.series,
            season_id: self.season_id,
            min_tier: self.min_tier,
        }
    }
}

impl CatalogItem for Driver {
    fn id(&self) -> i32 {
        self.id
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CarPart {
    pub id: i32,
    pub name: String,
    pub rarity: i32,
    pub series: i32,
    pub season_id: Option<i32>,
    pub part_type: String,
}

impl CarPart {
    pub fn from_entity(entity: entity::car_part::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            rarity: entity.rarity,
            series: entity.series,
            season_id: entity.season_id,
            part_type: entity.part_type,
        }
    }

    pub fn into_dto(self) -> CarPartDto {
        CarPartDto {
            id: self.id,
            name: self.name,
            rarity: self.rarity,
            series: self.series,
            season_id: self.season_id,
            part_type: self.part_type,
        }
    }
}

impl CatalogItem for CarPart {
    fn id(&self) -> i32 {
        self.id
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Boost {
    pub id: i32,
    pub name: String,
    pub rarity: i32,
    pub series: i32,
    pub season_id: Option<i32>,
    pub boost_type: String,
}

impl Boost {
    pub fn from_entity(entity: entity::boost::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            rarity: entity.rarity,
            series: entity.series,
            season_id: entity.season_id,
            boost_type: entity.boost_type,
        }
    }

    pub fn into_dto(self) -> BoostDto {
        BoostDto {
            id: self.id,
            name: self.name,
            rarity: self.rarity,
            series: self.series,
            season_id: self.season_id,
            boost_type: self.boost_type,
        }
    }
}

impl CatalogItem for Boost {
    fn id(&self) -> i32 {
        self.id
    }
}

/// Value of the catalog-specific subtype filter.
#[derive(Debug, Clone, PartialEq)]
pub enum SubtypeFilter {
    Number(i32),
    Text(String),
}

impl From<SubtypeFilter> for sea_orm::Value {
    fn from(filter: SubtypeFilter) -> Self {
        match filter {
            SubtypeFilter::Number(n) => n.into(),
            SubtypeFilter::Text(s) => s.into(),
        }
    }
}

/// Constraints applied to a catalog read. `None` means the constraint is not applied.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatalogFilter {
    pub season_id: Option<i32>,
    pub rarity: Option<i32>,
    pub series: Option<i32>,
    pub subtype: Option<SubtypeFilter>,
    /// Case-insensitive substring matched against the item name.
    pub search: Option<String>,
}

/// A parsed catalog listing request: filter plus pagination.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatalogQuery {
    pub filter: CatalogFilter,
    pub page: PageRequest,
}

impl CatalogQuery {
    /// Parses raw query parameters for a catalog listing.
    ///
    /// Keys outside the recognized set are ignored. In `Strict` mode a recognized key
    /// with a malformed value fails with a `ValidationError` naming every offending
    /// field; in `Lenient` mode such values are dropped.
    pub fn from_params(
        kind: CatalogKind,
        raw: &HashMap<String, String>,
        mode: ParseMode,
    ) -> Result<Self, ValidationError> {
        let mut params = QueryParams::new(raw, mode);

        let season_id = params.int("season_id", 1);
        let rarity = params.int("rarity", 0);
        let series = params.int("series", 0);
        let subtype = match kind {
            CatalogKind::Driver => params
                .int(kind.subtype_param(), 0)
                .map(SubtypeFilter::Number),
            CatalogKind::CarPart | CatalogKind::Boost => params
                .text(kind.subtype_param())
                .map(SubtypeFilter::Text),
        };
        let search = params.text("search");
        let page = params.any_int("page");
        let limit = params.any_int("limit");

        params.finish()?;

        Ok(Self {
            filter: CatalogFilter {
                season_id,
                rarity,
                series,
                subtype,
                search,
            },
            page: PageRequest::new(page.map(i64::from), limit.map(i64::from)),
        })
    }
}
