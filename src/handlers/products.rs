use askama::Template;
use axum::{
    Json,
    extract::{Path, State},
    http::{StatusCode, header},
    response::{Html, IntoResponse, Response},
};

use crate::templates::{DetailTemplate, LoadingTemplate, NotAvailableTemplate, RedirectTemplate};
use crate::view::{DetailsPage, ViewState};

pub async fn product_detail(
    State(state): State<crate::SharedAppState>,
    Path(sku): Path<String>,
) -> crate::AppResult<Response> {
    let outcome = DetailsPage::new(state.user.as_ref(), state.products.as_ref(), &sku).run();
    let app_version = state.app_version.clone();
    let options = state.render_options;

    let response = match outcome.state {
        ViewState::Loading => LoadingTemplate {
            page_title: sku.clone(),
            app_version,
            options,
            sku,
        }
        .into_response(),
        ViewState::Redirect => {
            let target = state.denied_path.clone();
            tracing::info!(sku = %sku, target = %target, "redirecting, no product access");
            let body = RedirectTemplate {
                page_title: "Redirecting".to_string(),
                app_version,
                options,
                target: target.clone(),
            }
            .render()?;
            (
                StatusCode::SEE_OTHER,
                [(header::LOCATION, target)],
                Html(body),
            )
                .into_response()
        }
        ViewState::Detail(product) => DetailTemplate {
            page_title: product.name.clone(),
            app_version,
            options,
            product,
        }
        .into_response(),
        ViewState::NotAvailable => NotAvailableTemplate {
            page_title: sku.clone(),
            app_version,
            options,
            sku,
        }
        .into_response(),
    };

    Ok(response)
}

/// The resolved view as JSON, without following a redirect.
pub async fn product_state(
    State(state): State<crate::SharedAppState>,
    Path(sku): Path<String>,
) -> Json<ViewState> {
    let page = DetailsPage::new(state.user.as_ref(), state.products.as_ref(), &sku);
    Json(page.render_pass())
}
