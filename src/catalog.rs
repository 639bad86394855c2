use serde::{Deserialize, Serialize};
use std::io::BufRead;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Failed to read catalog: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse catalog line {line}: {source}")]
    Parse {
        line: usize,
        #[source]
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, CatalogError>;

/// Permissions of the signed-in user.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub is_org_admin: bool,
    #[serde(rename = "isSCACapable")]
    pub is_sca_capable: bool,
    pub can_read_products: bool,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct UnitOfMeasure {
    pub name: String,
    pub quantity: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub name: String,
    pub product_line: String,
    pub quantity: u64,
    pub sku: String,
    pub service_level: String,
    pub service_type: String,
    pub unit_of_measure: Option<UnitOfMeasure>,
}

impl Product {
    /// The "no such product" sentinel: every field empty or zero.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.sku.is_empty()
    }
}

/// Product store backed by a JSON Lines file, one product per line.
///
/// The file is read on every lookup, so edits show up without a restart.
#[derive(Clone, Debug)]
pub struct Catalog {
    path: PathBuf,
}

impl Catalog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn list(&self) -> Result<Vec<Product>> {
        let file = std::fs::File::open(&self.path)?;
        let reader = std::io::BufReader::new(file);

        let mut products = Vec::new();
        for (idx, line) in reader.lines().enumerate() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            let product: Product = serde_json::from_str(&line)
                .map_err(|source| CatalogError::Parse { line: idx + 1, source })?;
            products.push(product);
        }

        Ok(products)
    }

    /// Looks up a product by SKU. A missing SKU yields [`Product::empty`],
    /// not an error.
    pub fn find(&self, sku: &str) -> Result<Product> {
        if sku.is_empty() {
            return Ok(Product::empty());
        }
        let product = self
            .list()?
            .into_iter()
            .find(|p| p.sku == sku)
            .unwrap_or_default();
        Ok(product)
    }
}
