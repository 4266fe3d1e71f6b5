//! Data-fetching layer for the portfolio pages.
//!
//! All three surfaces (home grid, project detail, admin manager) go through
//! the same [`catalog::CatalogClient`], which applies one fallback policy:
//! live API first, then the on-disk cache, then the built-in sample data.
//! The result says explicitly which source served it, so the surfaces can
//! never silently disagree about what is "current".

pub mod api;
pub mod cache;
pub mod catalog;
pub mod compress;
pub mod error;
pub mod fallback;
pub mod session;

pub use api::ApiClient;
pub use cache::CacheStore;
pub use catalog::{Catalog, CatalogClient, ProjectDetail, Source};
pub use error::ClientError;
pub use session::{AdminSession, SessionStore};
