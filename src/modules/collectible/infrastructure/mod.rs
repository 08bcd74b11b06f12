pub mod external;
pub mod models;
pub mod persistence;
