//! Product browsing commands.

use ecoverde_client::{MyProductsFilter, ProductFilter};
use ecoverde_core::types::{Product, ProductId, ProductStatus};
use rust_decimal::Decimal;

use super::{CliError, build_client};

/// Assemble a public listing filter from the raw command line flags.
#[allow(clippy::too_many_arguments)]
pub fn build_filter(
    page: Option<i64>,
    per_page: Option<i64>,
    search: Option<String>,
    city: Option<String>,
    min_price: Option<String>,
    max_price: Option<String>,
    sort_by: Option<String>,
    sort_order: Option<String>,
) -> Result<ProductFilter, CliError> {
    Ok(ProductFilter {
        page,
        per_page,
        search,
        city,
        min_price: parse_price("min_price", min_price)?,
        max_price: parse_price("max_price", max_price)?,
        sort_by,
        sort_order,
        ..Default::default()
    })
}

fn parse_price(name: &'static str, raw: Option<String>) -> Result<Option<Decimal>, CliError> {
    raw.map(|v| {
        v.parse::<Decimal>()
            .map_err(|_| CliError::InvalidArgument(name, v))
    })
    .transpose()
}

/// List the public catalogue.
pub async fn list(filter: &ProductFilter) -> Result<(), CliError> {
    let client = build_client()?;
    let response = client.list_products(filter).await?;

    tracing::info!(
        "{} listings (page {}/{})",
        response.total,
        response.page,
        response.total_pages
    );
    for product in &response.products {
        print_row(product);
    }
    Ok(())
}

/// List the logged-in seller's own listings.
pub async fn list_mine(
    page: Option<i64>,
    per_page: Option<i64>,
    status: Option<&str>,
) -> Result<(), CliError> {
    let status = status
        .map(|raw| {
            raw.parse::<ProductStatus>()
                .map_err(|_| CliError::InvalidArgument("status", raw.to_string()))
        })
        .transpose()?;
    let filter = MyProductsFilter {
        page,
        per_page,
        status,
    };

    let client = build_client()?;
    let response = client.my_products(&filter).await?;

    tracing::info!(
        "{} listings (page {}/{})",
        response.total,
        response.page,
        response.total_pages
    );
    for product in &response.products {
        print_row(product);
    }
    Ok(())
}

/// Show a single listing as JSON.
pub async fn show(id: ProductId) -> Result<(), CliError> {
    let client = build_client()?;
    let product = client.get_product(id).await?;
    let json = serde_json::to_string_pretty(&product)?;
    tracing::info!("{json}");
    Ok(())
}

fn print_row(product: &Product) {
    tracing::info!(
        "{}  {:>8} EUR  {:<8}  {}",
        product.id,
        product.price,
        product.status,
        product.title
    );
}
