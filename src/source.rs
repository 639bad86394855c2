//! Query drivers feeding the details page.
//!
//! Both drivers are injected into [`crate::AppState`] as trait objects so the
//! page can be exercised with hand-built statuses instead of a live catalog.

use crate::catalog::{Catalog, Product, UserProfile};
use crate::query::QueryStatus;

/// Current status of the signed-in user's permissions.
pub trait UserQuery: Send + Sync {
    fn status(&self) -> QueryStatus<UserProfile>;
}

/// Current status of the product keyed by `sku`.
///
/// May be called any number of times during a single page view.
pub trait ProductQuery: Send + Sync {
    fn status(&self, sku: &str) -> QueryStatus<Product>;
}

/// A session whose profile is fixed at startup.
#[derive(Clone, Debug)]
pub struct SessionUser {
    profile: UserProfile,
}

impl SessionUser {
    pub fn new(profile: UserProfile) -> Self {
        Self { profile }
    }
}

impl UserQuery for SessionUser {
    fn status(&self) -> QueryStatus<UserProfile> {
        QueryStatus::success(self.profile)
    }
}

/// Serves products out of a [`Catalog`] file.
#[derive(Clone, Debug)]
pub struct CatalogProducts {
    catalog: Catalog,
}

impl CatalogProducts {
    pub fn new(catalog: Catalog) -> Self {
        Self { catalog }
    }
}

impl ProductQuery for CatalogProducts {
    fn status(&self, sku: &str) -> QueryStatus<Product> {
        let result = self.catalog.find(sku);
        if let Err(e) = &result {
            tracing::warn!(
                sku,
                catalog = %self.catalog.path().display(),
                "product lookup failed: {}",
                e
            );
        }
        QueryStatus::from_result(result)
    }
}
