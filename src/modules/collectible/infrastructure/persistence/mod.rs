pub mod collectible_repository_impl;

pub use collectible_repository_impl::CollectibleRepositoryImpl;
