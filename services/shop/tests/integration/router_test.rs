use std::sync::Arc;

use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode};
use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};
use serde_json::{Value, json};
use tower::ServiceExt;

use shop::router::build_router;
use shop::state::AppState;
use shop::usecase::passcode::hash_passcode;
use shop_auth_types::admin::AdminSecret;
use shop_schema::{order_details, orders, products};
use shop_testing::auth::{MockAdmin, TEST_ADMIN_SECRET};
use shop_testing::fixture::Fixture;

fn app(db: MockDatabase) -> Router {
    build_router(AppState {
        db: Arc::new(db.into_connection()),
        admin_secret: AdminSecret::new(TEST_ADMIN_SECRET),
    })
}

fn empty_db() -> MockDatabase {
    MockDatabase::new(DatabaseBackend::Postgres)
}

fn exec(rows_affected: u64) -> MockExecResult {
    MockExecResult {
        last_insert_id: 0,
        rows_affected,
    }
}

fn product_row(id: &str, price: i64) -> products::Model {
    products::Model {
        id: id.into(),
        name: format!("Product {id}"),
        price,
        is_deleted: false,
    }
}

fn order_row(passcode: &str) -> orders::Model {
    orders::Model {
        id: "o-1".into(),
        email: "a@b.com".into(),
        address: "X".into(),
        passcode: Some(hash_passcode(passcode).unwrap()),
        paid_at: None,
        paid_bank: None,
        paid_account_number: None,
        grand_total: 2000,
    }
}

fn detail_row() -> order_details::Model {
    order_details::Model {
        id: "d-1".into(),
        order_id: "o-1".into(),
        product_id: "P1".into(),
        quantity: 2,
        price: 1000,
        total: 2000,
    }
}

fn json_request(method: &str, uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn admin(mut req: Request<Body>) -> Request<Body> {
    req.headers_mut().extend(MockAdmin::default().headers());
    req
}

async fn send(app: Router, req: Request<Body>) -> (StatusCode, Value) {
    let resp = app.oneshot(req).await.unwrap();
    let status = resp.status();
    let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

// ── health ───────────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_answer_liveness_and_readiness() {
    let (status, _) = send(
        app(empty_db()),
        Request::get("/healthz").body(Body::empty()).unwrap(),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = send(
        app(empty_db()),
        Request::get("/readyz").body(Body::empty()).unwrap(),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
}

// ── catalog ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_list_products() {
    let db = empty_db().append_query_results([vec![product_row("P1", 1000)]]);
    let (status, body) = send(
        app(db),
        Request::get("/api/v1/products").body(Body::empty()).unwrap(),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([{ "id": "P1", "name": "Product P1", "price": 1000 }]));
}

#[tokio::test]
async fn should_return_404_for_missing_product() {
    let db = empty_db().append_query_results([Vec::<products::Model>::new()]);
    let (status, body) = send(
        app(db),
        Request::get("/api/v1/products/P9").body(Body::empty()).unwrap(),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["kind"], "PRODUCT_NOT_FOUND");
}

// ── admin gate ───────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_reject_admin_request_without_secret() {
    let req = json_request("POST", "/admin/products", &json!({ "name": "Tea", "price": 1 }));
    let (status, body) = send(app(empty_db()), req).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["kind"], "UNAUTHORIZED");
}

#[tokio::test]
async fn should_reject_admin_request_with_wrong_secret() {
    let mut req = Request::delete("/admin/products/P1")
        .body(Body::empty())
        .unwrap();
    req.headers_mut()
        .extend(MockAdmin::new("not-the-secret").headers());
    let (status, _) = send(app(empty_db()), req).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn should_fail_closed_when_admin_secret_is_empty() {
    let router = build_router(AppState {
        db: Arc::new(empty_db().into_connection()),
        admin_secret: AdminSecret::new(""),
    });
    let mut req = Request::delete("/admin/products/P1")
        .body(Body::empty())
        .unwrap();
    req.headers_mut().extend(MockAdmin::new("").headers());
    let (status, body) = send(router, req).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["kind"], "ADMIN_UNCONFIGURED");
}

#[tokio::test]
async fn should_create_product_as_admin() {
    let db = empty_db().append_exec_results([exec(1)]);
    let req = admin(json_request(
        "POST",
        "/admin/products",
        &json!({ "name": "Tea", "price": 700 }),
    ));
    let (status, body) = send(app(db), req).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["name"], "Tea");
    assert_eq!(body["price"], 700);
    assert_eq!(body["id"].as_str().unwrap().len(), 36);
}

#[tokio::test]
async fn should_delete_product_as_admin() {
    let db = empty_db().append_exec_results([exec(1)]);
    let req = admin(
        Request::delete("/admin/products/P1")
            .body(Body::empty())
            .unwrap(),
    );
    let (status, _) = send(app(db), req).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn should_return_404_when_deleting_unknown_product() {
    let db = empty_db().append_exec_results([exec(0)]);
    let req = admin(
        Request::delete("/admin/products/P9")
            .body(Body::empty())
            .unwrap(),
    );
    let (status, body) = send(app(db), req).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["kind"], "PRODUCT_NOT_FOUND");
}

#[tokio::test]
async fn should_require_data_for_update() {
    let req = admin(json_request("PUT", "/admin/products/P1", &json!({})));
    let (status, body) = send(app(empty_db()), req).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["kind"], "MISSING_DATA");
}

// ── checkout ─────────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_check_out_from_contract_fixture() {
    let db = empty_db()
        .append_query_results([vec![product_row("P1", 1000), product_row("P2", 500)]])
        .append_exec_results([exec(1), exec(2)]);
    let req = json_request(
        "POST",
        "/api/v1/checkout",
        &Fixture::load("contracts/http/shop/checkout_request.json"),
    );
    let (status, body) = send(app(db), req).await;

    assert_eq!(status, StatusCode::CREATED, "{body}");
    assert_eq!(body["email"], "a@b.com");
    assert_eq!(body["grandTotal"], 2500);
    assert_eq!(body["passcode"].as_str().unwrap().len(), 5);
    assert!(body.get("paidAt").is_none());
    let detail = body["detail"].as_array().unwrap();
    assert_eq!(detail.len(), 2);
    assert_eq!(detail[0]["productId"], "P1");
    assert_eq!(detail[0]["total"], 2000);
    assert_eq!(detail[1]["productId"], "P2");
    assert_eq!(detail[1]["total"], 500);
    assert_eq!(detail[0]["orderId"], body["id"]);
}

#[tokio::test]
async fn should_reject_malformed_checkout_body() {
    let req = Request::post("/api/v1/checkout")
        .header("content-type", "application/json")
        .body(Body::from("{\"email\": "))
        .unwrap();
    let (status, body) = send(app(empty_db()), req).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["kind"], "MALFORMED_BODY");
}

#[tokio::test]
async fn should_reject_checkout_without_products() {
    let req = json_request(
        "POST",
        "/api/v1/checkout",
        &json!({ "email": "a@b.com", "address": "X", "products": [] }),
    );
    let (status, body) = send(app(empty_db()), req).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["kind"], "EMPTY_ORDER");
}

// ── orders ───────────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_get_order_with_passcode_query() {
    let db = empty_db()
        .append_query_results([vec![order_row("Ab1Cd")]])
        .append_query_results([vec![detail_row()]]);
    let (status, body) = send(
        app(db),
        Request::get("/api/v1/orders/o-1?passcode=Ab1Cd")
            .body(Body::empty())
            .unwrap(),
    )
    .await;

    assert_eq!(status, StatusCode::OK, "{body}");
    assert_eq!(body["grandTotal"], 2000);
    assert!(body.get("passcode").is_none());
    assert_eq!(body["detail"][0]["quantity"], 2);
}

#[tokio::test]
async fn should_return_401_for_wrong_order_passcode() {
    let db = empty_db().append_query_results([vec![order_row("Ab1Cd")]]);
    let (status, body) = send(
        app(db),
        Request::get("/api/v1/orders/o-1?passcode=Zz9Yy")
            .body(Body::empty())
            .unwrap(),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["kind"], "INVALID_PASSCODE");
}

#[tokio::test]
async fn should_confirm_order_over_http() {
    let db = empty_db()
        .append_query_results([vec![order_row("Ab1Cd")]])
        .append_exec_results([exec(1)])
        .append_query_results([vec![detail_row()]]);
    let req = json_request(
        "POST",
        "/api/v1/orders/o-1/confirm",
        &json!({
            "amount": 2000,
            "bank": "BCA",
            "accountNumber": "1234567890",
            "passcode": "Ab1Cd"
        }),
    );
    let (status, body) = send(app(db), req).await;

    assert_eq!(status, StatusCode::OK, "{body}");
    assert_eq!(body["paidBank"], "BCA");
    assert_eq!(body["paidAccountNumber"], "1234567890");
    assert!(body["paidAt"].as_str().unwrap().ends_with('Z'));
    assert!(body.get("passcode").is_none());
}

#[tokio::test]
async fn should_reject_confirmation_for_wrong_amount() {
    let mut confirm = Fixture::load("contracts/http/shop/confirm_request.json");
    confirm["passcode"] = json!("Ab1Cd");
    let db = empty_db().append_query_results([vec![order_row("Ab1Cd")]]);
    let req = json_request("POST", "/api/v1/orders/o-1/confirm", &confirm);
    let (status, body) = send(app(db), req).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["kind"], "AMOUNT_MISMATCH");
}

#[tokio::test]
async fn should_report_already_paid_when_update_loses_race() {
    let db = empty_db()
        .append_query_results([vec![order_row("Ab1Cd")]])
        .append_exec_results([exec(0)]);
    let req = json_request(
        "POST",
        "/api/v1/orders/o-1/confirm",
        &json!({
            "amount": 2000,
            "bank": "BCA",
            "accountNumber": "1234567890",
            "passcode": "Ab1Cd"
        }),
    );
    let (status, body) = send(app(db), req).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["kind"], "ALREADY_PAID");
}
