pub use super::boost::Entity as Boost;
pub use super::boost_custom_name::Entity as BoostCustomName;
pub use super::car_part::Entity as CarPart;
pub use super::driver::Entity as Driver;
pub use super::profile::Entity as Profile;
pub use super::season::Entity as Season;
pub use super::user_boost::Entity as UserBoost;
pub use super::user_car_part::Entity as UserCarPart;
pub use super::user_driver::Entity as UserDriver;
