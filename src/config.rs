use argh::FromArgs;
use std::path::PathBuf;
use thiserror::Error;

use crate::catalog::UserProfile;
use crate::templates::RenderOptions;

pub const DEFAULT_DENIED_PATH: &str = "/access-denied";
pub const DEFAULT_CATALOG: &str = "catalog.jsonl";
pub const CATALOG_ENV: &str = "SKUVIEW_CATALOG";

/// Paths owned by the router; the denied page may not shadow them.
const RESERVED_ROUTES: &[&str] = &["/health", "/style.css", "/products"];

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid denied path {path:?}: {reason}")]
    InvalidDeniedPath { path: String, reason: &'static str },
}

/// Roots `path` and checks it can be mounted as a plain route next to the
/// built-in ones.
pub fn validate_denied_path(path: &str) -> Result<String, ConfigError> {
    let invalid = |reason| ConfigError::InvalidDeniedPath {
        path: path.to_string(),
        reason,
    };

    let trimmed = path.trim();
    let route = if trimmed.is_empty() {
        DEFAULT_DENIED_PATH.to_string()
    } else if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{}", trimmed)
    };

    if route.contains("://") {
        return Err(invalid("must be a local path, not a URL"));
    }
    if !route
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '/' | '-' | '_' | '.'))
    {
        return Err(invalid("only letters, digits, '/', '-', '_' and '.' are allowed"));
    }
    if route == "/" || route.contains("//") {
        return Err(invalid("must name a page below the root"));
    }
    let collides = RESERVED_ROUTES.iter().any(|reserved| {
        route == *reserved || route.starts_with(&format!("{}/", reserved))
    });
    if collides {
        return Err(invalid("collides with a built-in route"));
    }

    Ok(route)
}

#[derive(FromArgs, Debug)]
/// Skuview: a local web view for product details.
pub struct Config {
    /// host to bind to
    #[argh(option, default = "String::from(\"127.0.0.1\")")]
    pub host: String,

    /// port to listen on (0 for random available port)
    #[argh(option, short = 'p', default = "0")]
    pub port: u16,

    /// open the browser automatically
    #[argh(switch, short = 'o')]
    pub open: bool,

    /// product catalog in JSON Lines format (defaults to $SKUVIEW_CATALOG, then catalog.jsonl)
    #[argh(option, short = 'c')]
    pub catalog: Option<PathBuf>,

    /// run the session without permission to read products
    #[argh(switch)]
    pub deny_products: bool,

    /// mark the session user as an organization admin
    #[argh(switch)]
    pub org_admin: bool,

    /// mark the session user as SCA capable
    #[argh(switch)]
    pub sca_capable: bool,

    /// embed the insights bootstrap tag in rendered pages
    #[argh(switch)]
    pub insights: bool,

    /// where users without product access are sent
    #[argh(option, default = "String::from(DEFAULT_DENIED_PATH)")]
    pub denied_path: String,
}

impl Config {
    pub fn catalog_path(&self) -> PathBuf {
        self.catalog
            .clone()
            .or_else(|| std::env::var_os(CATALOG_ENV).map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CATALOG))
    }

    pub fn user_profile(&self) -> UserProfile {
        UserProfile {
            is_org_admin: self.org_admin,
            is_sca_capable: self.sca_capable,
            can_read_products: !self.deny_products,
        }
    }

    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            insights_enabled: self.insights,
        }
    }

    /// The denied path as a route, always rooted.
    pub fn denied_route(&self) -> Result<String, ConfigError> {
        validate_denied_path(&self.denied_path)
    }
}
