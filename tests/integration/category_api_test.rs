// HTTP tests for /categories over in-memory repositories

#[path = "../helpers/mod.rs"]
mod helpers;

use actix_web::{test, App};
use serde_json::{json, Value};

use helpers::*;

macro_rules! init_app {
    ($state:expr) => {{
        let state = $state.clone();
        test::init_service(App::new().configure(move |cfg| state.configure(cfg))).await
    }};
}

#[actix_web::test]
async fn test_create_category_returns_201() {
    let (state, _, categories) = in_memory_state();
    let app = init_app!(state);

    let req = test::TestRequest::post()
        .uri("/categories")
        .set_json(json!({ "name": "Vitamins" }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 201);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "success");
    assert_eq!(body["data"]["name"], "Vitamins");
    assert_eq!(categories.len(), 1);
}

#[actix_web::test]
async fn test_duplicate_category_is_409() {
    let (state, _, categories) = in_memory_state();
    let app = init_app!(state);

    for expected in [201, 409] {
        let req = test::TestRequest::post()
            .uri("/categories")
            .set_json(json!({ "name": "Vitamins" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), expected);
    }

    assert_eq!(categories.len(), 1);
}

#[actix_web::test]
async fn test_list_uses_page_and_rows_per_page() {
    let (state, _, _) = in_memory_state();
    let app = init_app!(state);

    for i in 0..5 {
        let req = test::TestRequest::post()
            .uri("/categories")
            .set_json(json!({ "name": format!("Category {}", i) }))
            .to_request();
        test::call_service(&app, req).await;
    }

    let req = test::TestRequest::get()
        .uri("/categories?page=2&rowsPerPage=2")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["data"]["count"], 5);
    let items = body["data"]["items"].as_array().unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["name"], "Category 2");
}

#[actix_web::test]
async fn test_invalid_rows_per_page_is_400() {
    let (state, _, _) = in_memory_state();
    let app = init_app!(state);

    let req = test::TestRequest::get()
        .uri("/categories?rowsPerPage=0")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);

    let req = test::TestRequest::get()
        .uri("/categories?rowsPerPage=ten")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
}

#[actix_web::test]
async fn test_edit_and_delete_category() {
    let (state, _, categories) = in_memory_state();
    let app = init_app!(state);

    let req = test::TestRequest::post()
        .uri("/categories")
        .set_json(json!({ "name": "Painkillers" }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    let id = body["data"]["id"].as_i64().unwrap();

    let req = test::TestRequest::put()
        .uri("/categories")
        .set_json(json!({ "id": id, "name": "Analgesics" }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["data"]["name"], "Analgesics");

    let req = test::TestRequest::delete()
        .uri(&format!("/categories/{}", id))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["data"]["deleted"], 1);
    assert_eq!(categories.len(), 0);

    let req = test::TestRequest::delete()
        .uri(&format!("/categories/{}", id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 404);
}
