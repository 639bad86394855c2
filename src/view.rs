use serde::Serialize;

use crate::catalog::{Product, UserProfile};
use crate::query::QueryStatus;
use crate::source::{ProductQuery, UserQuery};

/// Which variant of the details screen is active.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "product", rename_all = "snake_case")]
pub enum ViewState {
    Loading,
    Redirect,
    Detail(Product),
    NotAvailable,
}

impl ViewState {
    pub fn name(&self) -> &'static str {
        match self {
            ViewState::Loading => "loading",
            ViewState::Redirect => "redirect",
            ViewState::Detail(_) => "detail",
            ViewState::NotAvailable => "not_available",
        }
    }
}

/// Decides which screen to show from the two query snapshots.
///
/// Permission is settled before product existence is looked at, so a user
/// without read access is redirected whatever the product query says.
pub fn resolve(user: &QueryStatus<UserProfile>, product: &QueryStatus<Product>) -> ViewState {
    debug_assert!(user.is_consistent(), "inconsistent user status");
    debug_assert!(product.is_consistent(), "inconsistent product status");

    if user.is_loading {
        return ViewState::Loading;
    }

    // A settled user query without data cannot confirm access.
    let can_read = user.data().is_some_and(|u| u.can_read_products);
    if !can_read {
        return ViewState::Redirect;
    }

    match product.data() {
        Some(p) if !p.is_empty() => ViewState::Detail(p.clone()),
        _ => ViewState::NotAvailable,
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageOutcome {
    pub state: ViewState,
    pub passes: usize,
}

impl PageOutcome {
    pub fn should_navigate(&self) -> bool {
        self.state == ViewState::Redirect
    }
}

/// One view of the details page for a single SKU.
pub struct DetailsPage<'a> {
    user: &'a dyn UserQuery,
    products: &'a dyn ProductQuery,
    sku: &'a str,
}

impl<'a> DetailsPage<'a> {
    pub fn new(user: &'a dyn UserQuery, products: &'a dyn ProductQuery, sku: &'a str) -> Self {
        Self {
            user,
            products,
            sku,
        }
    }

    /// Reads both drivers once and resolves.
    pub fn render_pass(&self) -> ViewState {
        let user = self.user.status();
        let product = self.products.status(self.sku);
        resolve(&user, &product)
    }

    /// Resolves the page. A redirect is re-checked against fresh snapshots
    /// before it is committed; if the second pass disagrees, its state wins.
    pub fn run(&self) -> PageOutcome {
        let first = self.render_pass();
        let outcome = if first == ViewState::Redirect {
            PageOutcome {
                state: self.render_pass(),
                passes: 2,
            }
        } else {
            PageOutcome {
                state: first,
                passes: 1,
            }
        };

        tracing::debug!(
            sku = self.sku,
            view = outcome.state.name(),
            passes = outcome.passes,
            "resolved details page"
        );
        outcome
    }
}
