//! Local catalogue core for physical collectible figurines.
//!
//! The crate is split the usual way: `modules::collectible::domain` holds the
//! entity and its pure derivations, `infrastructure` the SQLite-backed
//! repository and the classification-service wire layer, `application` the
//! explicit mutation flows a front end drives.

pub mod modules;
mod schema;
pub mod shared;

pub use modules::collectible::{
    Collectible, CollectibleAttributes, CollectibleRepository, CollectibleRepositoryImpl,
    CollectionService,
};
pub use shared::errors::{AppError, AppResult};
pub use shared::Database;

/// Load environment configuration and initialize logging. Call once at
/// startup, before opening the store.
pub fn init() {
    dotenvy::dotenv().ok();
    shared::utils::logger::init_logger();
}
