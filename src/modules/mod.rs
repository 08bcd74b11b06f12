pub mod collectible;
