// Service exports
pub mod catalog;
pub mod profiles;

pub use catalog::{Catalog, CatalogError};
pub use profiles::{ProfileStore, ProfileStoreError};
