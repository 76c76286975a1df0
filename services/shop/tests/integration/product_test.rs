use shop::error::ShopServiceError;
use shop::usecase::product::{
    CreateProductInput, CreateProductUseCase, DeleteProductUseCase, GetProductUseCase,
    ListProductsUseCase, UpdateProductInput, UpdateProductUseCase,
};
use shop_domain::id::ProductId;

use crate::helpers::{InMemoryCatalog, test_catalog};

// ── List / Get ───────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_list_only_active_products() {
    let catalog = test_catalog();
    DeleteProductUseCase {
        repo: catalog.clone(),
    }
    .execute(&ProductId::from("P2"))
    .await
    .unwrap();

    let products = ListProductsUseCase { repo: catalog }.execute().await.unwrap();
    let ids: Vec<&str> = products.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, ["P1"]);
}

#[tokio::test]
async fn should_get_active_product() {
    let product = GetProductUseCase {
        repo: test_catalog(),
    }
    .execute(&ProductId::from("P1"))
    .await
    .unwrap();
    assert_eq!(product.price, 1000);
}

#[tokio::test]
async fn should_hide_deleted_product() {
    let catalog = test_catalog();
    DeleteProductUseCase {
        repo: catalog.clone(),
    }
    .execute(&ProductId::from("P1"))
    .await
    .unwrap();

    let result = GetProductUseCase { repo: catalog }
        .execute(&ProductId::from("P1"))
        .await;
    assert!(matches!(result, Err(ShopServiceError::ProductNotFound)));
}

// ── Create ───────────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_create_product_with_generated_id() {
    let catalog = InMemoryCatalog::default();
    let product = CreateProductUseCase {
        repo: catalog.clone(),
    }
    .execute(CreateProductInput {
        name: "  Kopi Susu ".into(),
        price: 18000,
    })
    .await
    .unwrap();

    assert_eq!(product.name, "Kopi Susu");
    assert_eq!(product.id.as_str().len(), 36);
    assert_eq!(catalog.snapshot(), vec![(product, false)]);
}

#[tokio::test]
async fn should_accept_free_product() {
    let result = CreateProductUseCase {
        repo: InMemoryCatalog::default(),
    }
    .execute(CreateProductInput {
        name: "Sticker".into(),
        price: 0,
    })
    .await;
    assert!(result.is_ok());
}

#[tokio::test]
async fn should_reject_invalid_new_product() {
    let uc = CreateProductUseCase {
        repo: InMemoryCatalog::default(),
    };
    for (name, price) in [("", 100), ("Tea", -1)] {
        let result = uc
            .execute(CreateProductInput {
                name: name.into(),
                price,
            })
            .await;
        assert!(
            matches!(result, Err(ShopServiceError::InvalidProduct)),
            "({name:?}, {price}): got {result:?}"
        );
    }
}

// ── Update ───────────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_update_price_only() {
    let catalog = test_catalog();
    let updated = UpdateProductUseCase {
        repo: catalog.clone(),
    }
    .execute(
        &ProductId::from("P1"),
        UpdateProductInput {
            name: None,
            price: Some(1200),
        },
    )
    .await
    .unwrap();

    assert_eq!(updated.name, "Product P1");
    assert_eq!(updated.price, 1200);
    let stored = GetProductUseCase { repo: catalog }
        .execute(&ProductId::from("P1"))
        .await
        .unwrap();
    assert_eq!(stored, updated);
}

#[tokio::test]
async fn should_require_some_field_to_update() {
    let result = UpdateProductUseCase {
        repo: test_catalog(),
    }
    .execute(
        &ProductId::from("P1"),
        UpdateProductInput {
            name: None,
            price: None,
        },
    )
    .await;
    assert!(matches!(result, Err(ShopServiceError::MissingData)));
}

#[tokio::test]
async fn should_reject_update_of_unknown_product() {
    let result = UpdateProductUseCase {
        repo: test_catalog(),
    }
    .execute(
        &ProductId::from("P9"),
        UpdateProductInput {
            name: Some("x".into()),
            price: None,
        },
    )
    .await;
    assert!(matches!(result, Err(ShopServiceError::ProductNotFound)));
}

// ── Delete ───────────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_soft_delete_once() {
    let catalog = test_catalog();
    let uc = DeleteProductUseCase {
        repo: catalog.clone(),
    };

    uc.execute(&ProductId::from("P1")).await.unwrap();
    assert!(catalog.snapshot().iter().any(|(p, deleted)| p.id.as_str() == "P1" && *deleted));

    let again = uc.execute(&ProductId::from("P1")).await;
    assert!(matches!(again, Err(ShopServiceError::ProductNotFound)));
}
