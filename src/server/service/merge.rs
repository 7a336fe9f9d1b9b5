//! Ownership merge.
//!
//! Joins a filtered catalog listing with the caller's ownership records. The catalog
//! side drives the result: every item appears exactly once, in catalog order, and
//! records without a matching item are dropped.

use std::collections::HashMap;

use crate::server::model::{
    catalog::CatalogItem,
    ownership::{MergedView, Ownership, OwnershipRecord},
};

pub fn merge<T: CatalogItem>(items: Vec<T>, records: &[OwnershipRecord]) -> Vec<MergedView<T>> {
    let by_item: HashMap<i32, Ownership> = records
        .iter()
        .map(|record| (record.item_id, Ownership::from(record)))
        .collect();

    items
        .into_iter()
        .map(|item| {
            let ownership = by_item
                .get(&item.id())
                .copied()
                .unwrap_or(Ownership::Unowned);
            MergedView { item, ownership }
        })
        .collect()
}
