pub mod application;
pub mod domain;
pub mod infrastructure;

pub use application::CollectionService;
pub use domain::entities::{Collectible, CollectibleAttributes};
pub use domain::repositories::CollectibleRepository;
pub use infrastructure::persistence::CollectibleRepositoryImpl;
