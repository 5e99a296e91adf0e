//! Component catalog: the fixed set of placeable UI components that both
//! intent resolvers enumerate.

mod builtin;
mod catalog;
mod entry;
mod error;

pub use catalog::{fold, Catalog, SurfaceCollision};
pub use entry::{CatalogEntry, Category};
pub use error::{CatalogError, Result};
