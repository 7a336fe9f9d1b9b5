//! Ownership domain models.
//!
//! An ownership record is a user's progression state against one catalog item. The
//! absence of a record is a first-class zero state, modelled by `Ownership::Unowned`
//! rather than by a missing lookup.

use crate::model::catalog::OwnedItemDto;

/// Stored progression for one (user, item) pair.
#[derive(Debug, Clone, PartialEq)]
pub struct OwnershipRecord {
    pub item_id: i32,
    pub level: i32,
    pub card_count: i32,
}

impl OwnershipRecord {
    pub fn from_user_driver(entity: entity::user_driver::Model) -> Self {
        Self {
            item_id: entity.driver_id,
            level: entity.level,
            card_count: entity.card_count,
        }
    }

    pub fn from_user_car_part(entity: entity::user_car_part::Model) -> Self {
        Self {
            item_id: entity.car_part_id,
            level: entity.level,
            card_count: entity.card_count,
        }
    }

    pub fn from_user_boost(entity: entity::user_boost::Model) -> Self {
        Self {
            item_id: entity.boost_id,
            level: entity.level,
            card_count: entity.card_count,
        }
    }
}

/// Ownership state of a catalog item for the current user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ownership {
    /// No record exists; equivalent to level 0 with no cards.
    Unowned,
    /// A record exists with these values.
    Tracked { level: i32, card_count: i32 },
}

impl Ownership {
    pub fn level(&self) -> i32 {
        match self {
            Self::Unowned => 0,
            Self::Tracked { level, .. } => *level,
        }
    }

    pub fn card_count(&self) -> i32 {
        match self {
            Self::Unowned => 0,
            Self::Tracked { card_count, .. } => *card_count,
        }
    }

    /// An item counts as owned once at least one card has been collected.
    pub fn is_owned(&self) -> bool {
        self.card_count() > 0
    }
}

impl From<&OwnershipRecord> for Ownership {
    fn from(record: &OwnershipRecord) -> Self {
        Self::Tracked {
            level: record.level,
            card_count: record.card_count,
        }
    }
}

/// A catalog item combined with the caller's ownership state.
#[derive(Debug, Clone, PartialEq)]
pub struct MergedView<T> {
    pub item: T,
    pub ownership: Ownership,
}

impl<T> MergedView<T> {
    /// Converts into the flattened DTO using `convert` for the catalog part.
    pub fn into_dto<D>(self, convert: impl FnOnce(T) -> D) -> OwnedItemDto<D> {
        OwnedItemDto {
            item: convert(self.item),
            level: self.ownership.level(),
            card_count: self.ownership.card_count(),
            is_owned: self.ownership.is_owned(),
        }
    }
}

/// Parameters for recording a user's progression on one catalog item.
#[derive(Debug, Clone)]
pub struct UpsertOwnershipParams {
    pub user_id: String,
    pub item_id: i32,
    pub level: i32,
    pub card_count: i32,
}
