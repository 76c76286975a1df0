use std::collections::HashSet;

use shop_domain::id::ProductId;

use crate::domain::repository::ProductRepository;
use crate::domain::types::{CheckoutLine, Product};
use crate::error::ShopServiceError;

/// Fetch authoritative prices for every requested product in one lookup.
///
/// Fails with `ProductNotFound` unless every distinct requested id matched an
/// active product.
pub async fn resolve_prices<P: ProductRepository>(
    products: &P,
    lines: &[CheckoutLine],
) -> Result<Vec<Product>, ShopServiceError> {
    let requested: HashSet<&ProductId> = lines.iter().map(|l| &l.product_id).collect();
    let ids: Vec<ProductId> = requested.iter().map(|&id| id.clone()).collect();

    let found = products.find_active_by_ids(&ids).await?;

    let matched: HashSet<&ProductId> = found
        .iter()
        .map(|p| &p.id)
        .filter(|id| requested.contains(id))
        .collect();
    if matched.len() < requested.len() {
        return Err(ShopServiceError::ProductNotFound);
    }
    Ok(found)
}
