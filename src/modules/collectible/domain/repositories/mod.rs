pub mod collectible_repository;

pub use collectible_repository::CollectibleRepository;
