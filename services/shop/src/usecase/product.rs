use shop_domain::id::ProductId;

use crate::domain::repository::ProductRepository;
use crate::domain::types::{MAX_PRODUCT_NAME_LEN, Product};
use crate::error::ShopServiceError;

fn validate_name(name: &str) -> Result<String, ShopServiceError> {
    let name = name.trim();
    if name.is_empty() || name.len() > MAX_PRODUCT_NAME_LEN {
        return Err(ShopServiceError::InvalidProduct);
    }
    Ok(name.to_owned())
}

fn validate_price(price: i64) -> Result<i64, ShopServiceError> {
    if price < 0 {
        return Err(ShopServiceError::InvalidProduct);
    }
    Ok(price)
}

// ── ListProducts ─────────────────────────────────────────────────────────────

pub struct ListProductsUseCase<R: ProductRepository> {
    pub repo: R,
}

impl<R: ProductRepository> ListProductsUseCase<R> {
    pub async fn execute(&self) -> Result<Vec<Product>, ShopServiceError> {
        self.repo.list_active().await
    }
}

// ── GetProduct ───────────────────────────────────────────────────────────────

pub struct GetProductUseCase<R: ProductRepository> {
    pub repo: R,
}

impl<R: ProductRepository> GetProductUseCase<R> {
    pub async fn execute(&self, id: &ProductId) -> Result<Product, ShopServiceError> {
        self.repo
            .find_active_by_id(id)
            .await?
            .ok_or(ShopServiceError::ProductNotFound)
    }
}

// ── CreateProduct ────────────────────────────────────────────────────────────

pub struct CreateProductInput {
    pub name: String,
    pub price: i64,
}

pub struct CreateProductUseCase<R: ProductRepository> {
    pub repo: R,
}

impl<R: ProductRepository> CreateProductUseCase<R> {
    pub async fn execute(&self, input: CreateProductInput) -> Result<Product, ShopServiceError> {
        let product = Product {
            id: ProductId::generate(),
            name: validate_name(&input.name)?,
            price: validate_price(input.price)?,
        };
        self.repo.create(&product).await?;
        tracing::info!(product_id = %product.id, "product created");
        Ok(product)
    }
}

// ── UpdateProduct ────────────────────────────────────────────────────────────

pub struct UpdateProductInput {
    pub name: Option<String>,
    pub price: Option<i64>,
}

pub struct UpdateProductUseCase<R: ProductRepository> {
    pub repo: R,
}

impl<R: ProductRepository> UpdateProductUseCase<R> {
    pub async fn execute(
        &self,
        id: &ProductId,
        input: UpdateProductInput,
    ) -> Result<Product, ShopServiceError> {
        if input.name.is_none() && input.price.is_none() {
            return Err(ShopServiceError::MissingData);
        }
        let name = input.name.as_deref().map(validate_name).transpose()?;
        let price = input.price.map(validate_price).transpose()?;

        let current = self
            .repo
            .find_active_by_id(id)
            .await?
            .ok_or(ShopServiceError::ProductNotFound)?;
        let updated = Product {
            id: current.id,
            name: name.unwrap_or(current.name),
            price: price.unwrap_or(current.price),
        };

        // Deleted between the read and the write.
        if !self.repo.update(&updated).await? {
            return Err(ShopServiceError::ProductNotFound);
        }
        Ok(updated)
    }
}

// ── DeleteProduct ────────────────────────────────────────────────────────────

pub struct DeleteProductUseCase<R: ProductRepository> {
    pub repo: R,
}

impl<R: ProductRepository> DeleteProductUseCase<R> {
    pub async fn execute(&self, id: &ProductId) -> Result<(), ShopServiceError> {
        if !self.repo.soft_delete(id).await? {
            return Err(ShopServiceError::ProductNotFound);
        }
        tracing::info!(product_id = %id, "product deleted");
        Ok(())
    }
}
