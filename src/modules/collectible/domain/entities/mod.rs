pub mod collectible;

pub use collectible::{Collectible, CollectibleAttributes, VALUE_PLACEHOLDER};
