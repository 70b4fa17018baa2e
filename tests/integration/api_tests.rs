//! API integration tests

use bookstore_api::{api, models::Book, repository::Repository, AppConfig, AppState};
use reqwest::{Client, StatusCode};
use serde_json::Value;

/// Serve the router on an ephemeral port and return its base URL
async fn spawn_app(config: AppConfig, repository: Repository) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().expect("No local address");
    let app = api::router(AppState::new(config, repository));

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Server failed");
    });

    format!("http://{}", addr)
}

async fn spawn_seeded() -> String {
    spawn_app(AppConfig::default(), Repository::seeded()).await
}

fn lenient_config() -> AppConfig {
    let mut config = AppConfig::default();
    config.api.lenient_ids = true;
    config
}

#[tokio::test]
async fn test_list_books() {
    let base = spawn_seeded().await;

    let response = Client::new()
        .get(format!("{}/books", base))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()["content-type"], "application/json");

    let body: Vec<Book> = response.json().await.expect("Failed to parse response");
    assert_eq!(body.len(), 2);
    assert_eq!(body[0].id, 1);
    assert_eq!(body[1].id, 2);
}

#[tokio::test]
async fn test_get_book_for_every_catalog_id() {
    let base = spawn_seeded().await;
    let client = Client::new();

    for id in [1, 2] {
        let response = client
            .get(format!("{}/books/{}", base, id))
            .send()
            .await
            .expect("Failed to send request");

        assert_eq!(response.status(), StatusCode::OK);
        let body: Value = response.json().await.expect("Failed to parse response");
        assert_eq!(body["ID"], id);
    }
}

#[tokio::test]
async fn test_get_book_exact_body() {
    let base = spawn_seeded().await;

    let response = Client::new()
        .get(format!("{}/books/1", base))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()["content-type"], "application/json");
    assert_eq!(
        response.text().await.unwrap(),
        r#"{"ID":1,"Title":"How to avoid a climate disaster","Author":"Bill Gates","Price":24.99}"#
    );
}

#[tokio::test]
async fn test_get_book_not_found() {
    let base = spawn_seeded().await;
    let client = Client::new();

    for id in [3, 999, 0, -1] {
        let response = client
            .get(format!("{}/books/{}", base, id))
            .send()
            .await
            .expect("Failed to send request");

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(response.headers()["content-type"], "application/json");
        assert_eq!(response.text().await.unwrap(), r#""Not Found!""#);
    }
}

#[tokio::test]
async fn test_repeated_requests_are_byte_identical() {
    let base = spawn_seeded().await;
    let client = Client::new();

    for path in ["/books", "/books/2", "/books/42"] {
        let mut bodies = Vec::new();
        for _ in 0..3 {
            let response = client
                .get(format!("{}{}", base, path))
                .send()
                .await
                .expect("Failed to send request");
            let status = response.status();
            bodies.push((status, response.bytes().await.unwrap()));
        }
        assert!(bodies.windows(2).all(|w| w[0] == w[1]), "{path} changed between requests");
    }
}

#[tokio::test]
async fn test_empty_catalog() {
    let repository = Repository::new(Vec::new()).unwrap();
    let base = spawn_app(AppConfig::default(), repository).await;
    let client = Client::new();

    let response = client
        .get(format!("{}/books", base))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.text().await.unwrap(), "[]");

    for id in ["1", "0", "123456"] {
        let response = client
            .get(format!("{}/books/{}", base, id))
            .send()
            .await
            .expect("Failed to send request");
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(response.text().await.unwrap(), r#""Not Found!""#);
    }
}

#[tokio::test]
async fn test_invalid_id_is_bad_request() {
    let base = spawn_seeded().await;

    let response = Client::new()
        .get(format!("{}/books/abc", base))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["error"], "BadValue");
    assert!(body["message"].as_str().unwrap().contains("abc"));
}

#[tokio::test]
async fn test_lenient_ids_coerce_to_zero() {
    let base = spawn_app(lenient_config(), Repository::seeded()).await;

    let response = Client::new()
        .get(format!("{}/books/abc", base))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(response.text().await.unwrap(), r#""Not Found!""#);
}

#[tokio::test]
async fn test_lenient_ids_coerce_undecodable_segment() {
    let base = spawn_app(lenient_config(), Repository::seeded()).await;

    let response = Client::new()
        .get(format!("{}/books/%FF", base))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(response.text().await.unwrap(), r#""Not Found!""#);
}

#[tokio::test]
async fn test_undecodable_segment_is_bad_request() {
    let base = spawn_seeded().await;

    let response = Client::new()
        .get(format!("{}/books/%FF", base))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["error"], "BadValue");
}

#[tokio::test]
async fn test_lenient_ids_resolve_book_zero() {
    let repository = Repository::new(vec![Book::new(0, "Zero", "Nobody", 0.0)]).unwrap();
    let base = spawn_app(lenient_config(), repository).await;

    let response = Client::new()
        .get(format!("{}/books/not-a-number", base))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), StatusCode::OK);
    let body: Book = response.json().await.expect("Failed to parse response");
    assert_eq!(body.title, "Zero");
}

#[tokio::test]
async fn test_write_methods_not_allowed() {
    let base = spawn_seeded().await;
    let client = Client::new();

    let response = client
        .post(format!("{}/books", base))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);

    let response = client
        .delete(format!("{}/books/1", base))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn test_unknown_path_is_empty_not_found() {
    let base = spawn_seeded().await;

    let response = Client::new()
        .get(format!("{}/authors", base))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(response.text().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_health_check() {
    let base = spawn_seeded().await;

    let response = Client::new()
        .get(format!("{}/health", base))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["books"], 2);
}

#[tokio::test]
async fn test_openapi_document_lists_book_routes() {
    let base = spawn_seeded().await;

    let response = Client::new()
        .get(format!("{}/api-docs/openapi.json", base))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert!(body["paths"]["/books"].is_object());
    assert!(body["paths"]["/books/{id}"].is_object());
}
