use axum::routing::get;
use axum::Router;
use axum_test::TestServer;
use shortener_web::web::handlers::index_handler;

#[tokio::test]
async fn test_index_renders_form_page() {
    let app = Router::new().route("/", get(index_handler));
    let server = TestServer::new(app).unwrap();

    let response = server.get("/").await;

    response.assert_status_ok();

    let html = response.text();
    assert!(html.contains("URL Shortener"));
    assert!(html.contains(r#"id="shorten-form""#));
    assert!(html.contains("/static/app.js"));
    assert!(html.contains(r#"id="copy""#));
}
