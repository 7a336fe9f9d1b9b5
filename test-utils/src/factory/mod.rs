//! Factory methods for creating test data.
//!
//! Each entity has its own factory module with a `Factory` builder for customization
//! and a `create_*` convenience function for quick default creation. Defaults use an
//! auto-incremented counter so repeated calls never collide.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let driver = factory::create_driver(&db).await?;
//! let boost = factory::boost::BoostFactory::new(&db)
//!     .name("Overtake")
//!     .rarity(3)
//!     .build()
//!     .await?;
//! factory::ownership::create_user_boost(&db, "user-1", boost.id, 4, 12).await?;
//! ```
//!
//! # Available Factories
//!
//! - `season` - Season rows referenced by catalog items
//! - `driver`, `car_part`, `boost` - Catalog items
//! - `ownership` - Per-user ownership records for each catalog
//! - `profile` - Account profiles, optionally with the admin flag
//! - `custom_name` - Boost custom names
//! - `helpers` - Unique id generation and bulk creation

pub mod boost;
pub mod car_part;
pub mod custom_name;
pub mod driver;
pub mod helpers;
pub mod ownership;
pub mod profile;
pub mod season;

pub use boost::create_boost;
pub use car_part::create_car_part;
pub use custom_name::create_custom_name;
pub use driver::create_driver;
pub use profile::{create_admin, create_profile};
pub use season::create_season;
