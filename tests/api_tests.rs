use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use http_body_util::BodyExt;
use moviehub::config::Config;
use serde_json::{Value, json};
use tower::ServiceExt;

async fn spawn_app(seed: bool) -> Router {
    let mut config = Config::default();
    config.general.database_path = "sqlite::memory:".to_string();
    config.general.seed_on_empty = seed;
    config.observability.metrics_enabled = false;

    let state = moviehub::api::create_app_state_from_config(config, None)
        .await
        .expect("Failed to create app state");
    moviehub::api::router(state)
}

async fn get_json(app: &Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&body).unwrap_or(Value::Null);
    (status, json)
}

async fn post_raw(app: &Router, body: &str, content_type: &str) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/movies")
                .header(header::CONTENT_TYPE, content_type)
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&body).unwrap_or(Value::Null);
    (status, json)
}

async fn post_movie(app: &Router, movie: &Value) -> (StatusCode, Value) {
    post_raw(app, &movie.to_string(), mime::APPLICATION_JSON.as_ref()).await
}

fn titles(list: &Value) -> Vec<String> {
    list.as_array()
        .expect("expected a JSON array")
        .iter()
        .map(|m| m["title"].as_str().unwrap().to_string())
        .collect()
}

#[tokio::test]
async fn test_create_and_fetch_roundtrip() {
    let app = spawn_app(false).await;

    let (status, body) = post_movie(
        &app,
        &json!({
            "title": "Test",
            "poster_url": "http://x",
            "description": "d",
            "download_links": [{ "label": "A", "url": "#" }],
            "is_trending": true,
            "category": "South",
            "release_year": 2024,
            "quality": "4K",
            "size": "2.1GB",
            "language": "Tamil"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    let id = body["id"].as_i64().expect("id in response");

    let (status, movie) = get_json(&app, &format!("/api/movies/{id}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(movie["id"], json!(id));
    assert_eq!(movie["title"], "Test");
    assert_eq!(movie["poster_url"], "http://x");
    assert_eq!(movie["description"], "d");
    assert_eq!(movie["category"], "South");
    assert_eq!(movie["release_year"], json!(2024));
    assert_eq!(movie["quality"], "4K");
    assert_eq!(movie["size"], "2.1GB");
    assert_eq!(movie["language"], "Tamil");
    assert_eq!(movie["is_trending"], json!(1));
    assert!(movie["created_at"].is_string());

    let links: Value =
        serde_json::from_str(movie["download_links"].as_str().expect("links stored as text"))
            .unwrap();
    assert_eq!(links, json!([{ "label": "A", "url": "#" }]));

    let (_, trending) = get_json(&app, "/api/movies?trending=true").await;
    assert!(
        trending
            .as_array()
            .unwrap()
            .iter()
            .any(|m| m["id"] == json!(id))
    );
}

#[tokio::test]
async fn test_optional_fields_default_to_null() {
    let app = spawn_app(false).await;

    let (status, body) = post_movie(&app, &json!({ "title": "Bare" })).await;
    assert_eq!(status, StatusCode::CREATED);

    let (_, movie) = get_json(&app, &format!("/api/movies/{}", body["id"])).await;
    assert!(movie["description"].is_null());
    assert!(movie["release_year"].is_null());
    assert_eq!(movie["download_links"], "[]");
    assert_eq!(movie["is_trending"], json!(0));
}

#[tokio::test]
async fn test_unknown_movie_returns_404() {
    let app = spawn_app(true).await;

    let (status, body) = get_json(&app, "/api/movies/9999").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Movie not found");

    let (status, body) = get_json(&app, "/api/movies/not-a-number").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Movie not found");
}

#[tokio::test]
async fn test_fresh_database_is_seeded() {
    let app = spawn_app(true).await;

    let (status, list) = get_json(&app, "/api/movies").await;
    assert_eq!(status, StatusCode::OK);

    let mut names = titles(&list);
    names.sort();
    assert_eq!(
        names,
        vec!["Oppenheimer", "Pathaan", "Pushpa: The Rise", "Stranger Things"]
    );
}

#[tokio::test]
async fn test_empty_search_matches_full_list() {
    let app = spawn_app(true).await;

    let (_, all) = get_json(&app, "/api/movies").await;
    let (status, empty_q) = get_json(&app, "/api/movies/search?q=").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(all, empty_q);

    let (status, no_q) = get_json(&app, "/api/movies/search").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(all, no_q);
}

#[tokio::test]
async fn test_search_by_title_substring() {
    let app = spawn_app(true).await;

    let (_, results) = get_json(&app, "/api/movies/search?q=Push").await;
    assert_eq!(titles(&results), vec!["Pushpa: The Rise"]);

    let (_, results) = get_json(&app, "/api/movies/search?q=zzz").await;
    assert!(results.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_category_filter_is_exact() {
    let app = spawn_app(true).await;
    post_movie(&app, &json!({ "title": "Lowercase", "category": "hollywood" })).await;

    let (_, list) = get_json(&app, "/api/movies?category=Hollywood").await;
    assert_eq!(titles(&list), vec!["Oppenheimer"]);

    let (_, list) = get_json(&app, "/api/movies?category=Web-Series").await;
    assert_eq!(titles(&list), vec!["Stranger Things"]);

    let (_, list) = get_json(&app, "/api/movies?category=Tollywood").await;
    assert!(list.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_trending_takes_precedence_over_category() {
    let app = spawn_app(true).await;

    let (_, list) = get_json(&app, "/api/movies?category=Web-Series&trending=true").await;
    let rows = list.as_array().unwrap();
    assert_eq!(rows.len(), 3);
    assert!(rows.iter().all(|m| m["is_trending"] == json!(1)));

    let (_, list) = get_json(&app, "/api/movies?category=Web-Series&trending=false").await;
    assert_eq!(titles(&list), vec!["Stranger Things"]);
}

#[tokio::test]
async fn test_lists_are_newest_first() {
    let app = spawn_app(false).await;

    for title in ["First", "Second", "Third"] {
        let (status, _) = post_movie(&app, &json!({ "title": title, "is_trending": true })).await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (_, list) = get_json(&app, "/api/movies").await;
    assert_eq!(titles(&list), vec!["Third", "Second", "First"]);

    let (_, list) = get_json(&app, "/api/movies?trending=true").await;
    assert_eq!(titles(&list), vec!["Third", "Second", "First"]);

    let (_, list) = get_json(&app, "/api/movies/search?q=ir").await;
    assert_eq!(titles(&list), vec!["Third", "First"]);
}

#[tokio::test]
async fn test_create_failures() {
    let app = spawn_app(false).await;

    let (status, body) = post_movie(&app, &json!({ "description": "no title" })).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Failed to add movie");

    let (status, body) = post_raw(&app, r#"{"title":"X"}"#, mime::TEXT_PLAIN.as_ref()).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Failed to add movie");

    let (status, body) = post_raw(&app, "{not json", mime::APPLICATION_JSON.as_ref()).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());

    let (_, list) = get_json(&app, "/api/movies").await;
    assert!(list.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_create_stores_empty_title() {
    let app = spawn_app(false).await;

    let (status, body) = post_movie(&app, &json!({ "title": "" })).await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, movie) = get_json(&app, &format!("/api/movies/{}", body["id"])).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(movie["title"], "");
}

#[tokio::test]
async fn test_is_trending_is_coerced() {
    let app = spawn_app(false).await;

    let (_, a) = post_movie(&app, &json!({ "title": "A", "is_trending": 1 })).await;
    let (_, b) = post_movie(&app, &json!({ "title": "B", "is_trending": "" })).await;

    let (_, a) = get_json(&app, &format!("/api/movies/{}", a["id"])).await;
    let (_, b) = get_json(&app, &format!("/api/movies/{}", b["id"])).await;
    assert_eq!(a["is_trending"], json!(1));
    assert_eq!(b["is_trending"], json!(0));
}

#[tokio::test]
async fn test_health_endpoint() {
    let app = spawn_app(true).await;

    let (status, body) = get_json(&app, "/api/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["database"], "ok");
    assert_eq!(body["movies"], json!(4));
    assert_eq!(body["environment"], "development");
}

#[tokio::test]
async fn test_development_mode_serves_api_only() {
    let app = spawn_app(false).await;

    let (status, body) = get_json(&app, "/").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["error"].is_string());

    let (status, _) = get_json(&app, "/api/metrics").await;
    assert_eq!(status, StatusCode::OK);
}
