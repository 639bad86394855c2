use askama::Template;

use crate::catalog::Product;

pub mod filters {
    use crate::catalog::UnitOfMeasure;

    pub fn unit_label(unit: &Option<UnitOfMeasure>) -> askama::Result<String> {
        Ok(match unit {
            Some(u) => format!("{} {}", u.quantity, u.name),
            None => "-".to_string(),
        })
    }
}

/// Rendering switches that used to be ambient page globals.
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderOptions {
    pub insights_enabled: bool,
}

#[derive(Template)]
#[template(path = "loading.html")]
pub struct LoadingTemplate {
    pub page_title: String,
    pub app_version: String,
    pub options: RenderOptions,
    pub sku: String,
}

#[derive(Template)]
#[template(path = "redirect.html")]
pub struct RedirectTemplate {
    pub page_title: String,
    pub app_version: String,
    pub options: RenderOptions,
    pub target: String,
}

#[derive(Template)]
#[template(path = "detail.html")]
pub struct DetailTemplate {
    pub page_title: String,
    pub app_version: String,
    pub options: RenderOptions,
    pub product: Product,
}

#[derive(Template)]
#[template(path = "not_available.html")]
pub struct NotAvailableTemplate {
    pub page_title: String,
    pub app_version: String,
    pub options: RenderOptions,
    pub sku: String,
}

#[derive(Template)]
#[template(path = "denied.html")]
pub struct DeniedTemplate {
    pub page_title: String,
    pub app_version: String,
    pub options: RenderOptions,
}
