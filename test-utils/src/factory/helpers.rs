//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates `count` boosts named `Boost 001`, `Boost 002`, ... so name order matches
/// creation order.
///
/// # Returns
/// - `Ok(Vec<entity::boost::Model>)` - Created boosts in name order
/// - `Err(DbErr)` - Database error during creation
pub async fn create_boosts(
    db: &DatabaseConnection,
    count: usize,
) -> Result<Vec<entity::boost::Model>, DbErr> {
    let mut boosts = Vec::with_capacity(count);
    for i in 1..=count {
        let boost = crate::factory::boost::BoostFactory::new(db)
            .name(format!("Boost {:03}", i))
            .build()
            .await?;
        boosts.push(boost);
    }
    Ok(boosts)
}
