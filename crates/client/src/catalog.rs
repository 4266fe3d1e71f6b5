//! The single catalog fallback policy.
//!
//! Every surface loads data the same way: live API, then the on-disk
//! cache, then the built-in samples. A [`Catalog`] always says which tier
//! served it, so a degraded backend never silently masquerades as live
//! data.

use atelier_db::models::project::Project;

use crate::api::ApiClient;
use crate::cache::CacheStore;
use crate::fallback;

/// Which tier produced the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    /// The live API answered with data.
    Live,
    /// The API was unreachable or empty; the on-disk cache answered.
    Cache,
    /// Neither the API nor the cache had data; built-in samples.
    Builtin,
}

/// A loaded portfolio with its provenance.
#[derive(Debug, Clone)]
pub struct Catalog {
    pub projects: Vec<Project>,
    pub source: Source,
}

/// Outcome of a detail-view lookup.
#[derive(Debug, Clone)]
pub enum ProjectDetail {
    Found(Project),
    NotFound,
}

/// Shared data-fetch layer for the home grid, detail view, and admin
/// manager.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    api: ApiClient,
    cache: CacheStore,
}

impl CatalogClient {
    pub fn new(api: ApiClient, cache: CacheStore) -> Self {
        Self { api, cache }
    }

    /// Load the full catalog through the fallback tiers.
    ///
    /// A successful non-empty API answer refreshes the cache; a cache write
    /// failure only logs, it never fails the load.
    pub async fn load(&self) -> Catalog {
        match self.api.list_projects().await {
            Ok(projects) if !projects.is_empty() => {
                if let Err(err) = self.cache.save(&projects) {
                    tracing::debug!(error = %err, "Could not refresh project cache");
                }
                return Catalog {
                    projects,
                    source: Source::Live,
                };
            }
            Ok(_) => tracing::debug!("API returned no projects, trying cache"),
            Err(err) => tracing::warn!(error = %err, "API not available, trying cache"),
        }

        match self.cache.load() {
            Ok(projects) if !projects.is_empty() => Catalog {
                projects,
                source: Source::Cache,
            },
            Ok(_) => {
                tracing::debug!("Cache empty, using built-in samples");
                Catalog {
                    projects: fallback::sample_projects(),
                    source: Source::Builtin,
                }
            }
            Err(err) => {
                tracing::warn!(error = %err, "Cache unavailable, using built-in samples");
                Catalog {
                    projects: fallback::sample_projects(),
                    source: Source::Builtin,
                }
            }
        }
    }

    /// Look up a single project for the detail view.
    ///
    /// A definitive 404 from a reachable API is `NotFound`; only transport
    /// failure falls back through the cache and the built-in samples.
    pub async fn find(&self, id: &str) -> ProjectDetail {
        match self.api.get_project(id).await {
            Ok(Some(project)) => return ProjectDetail::Found(project),
            Ok(None) => return ProjectDetail::NotFound,
            Err(err) => tracing::warn!(error = %err, "API not available, trying cache"),
        }

        let cached = self.cache.load().unwrap_or_default();
        let samples = fallback::sample_projects();
        let local = cached
            .iter()
            .chain(samples.iter())
            .find(|p| p.id.to_string() == id)
            .cloned();

        match local {
            Some(project) => ProjectDetail::Found(project),
            None => ProjectDetail::NotFound,
        }
    }
}
