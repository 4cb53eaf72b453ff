use axum::http::{self, Request, StatusCode};
use http_body_util::BodyExt;
use mock_server::{app, DivisionResult, HealthStatus, MAX_NAMES};
use tower::ServiceExt;

async fn body_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn body_bytes(response: axum::response::Response) -> bytes::Bytes {
    response.into_body().collect().await.unwrap().to_bytes()
}

fn divide_request(body: &str) -> Request<String> {
    Request::builder()
        .method("POST")
        .uri("/divide")
        .header(http::header::CONTENT_TYPE, "application/json")
        .body(body.to_string())
        .unwrap()
}

// --- health ---

#[tokio::test]
async fn health_reports_ok() {
    let resp = app()
        .oneshot(Request::builder().uri("/health").body(String::new()).unwrap())
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let status: HealthStatus = body_json(resp).await;
    assert_eq!(status.health, "OK");
}

// --- divide ---

#[tokio::test]
async fn divide_returns_one_result_per_name_in_order() {
    let resp = app()
        .oneshot(divide_request(
            r#"{"names":["原敬","菅義偉","安倍晋三","中曽根康弘"],"mode":"basic"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let result: DivisionResult = body_json(resp).await;
    let families: Vec<&str> = result.divided_names.iter().map(|d| d.family.as_str()).collect();
    assert_eq!(families, vec!["原", "菅", "安倍", "中曽根"]);
    assert!(result.divided_names.iter().all(|d| d.algorithm == "basic"));
}

#[tokio::test]
async fn divide_without_mode_uses_basic() {
    let resp = app()
        .oneshot(divide_request(r#"{"names":["原敬"]}"#))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let result: DivisionResult = body_json(resp).await;
    assert_eq!(result.divided_names[0].algorithm, "basic");
}

#[tokio::test]
async fn divide_echoes_gbdt_mode() {
    let resp = app()
        .oneshot(divide_request(r#"{"names":["原敬"],"mode":"gbdt"}"#))
        .await
        .unwrap();

    let result: DivisionResult = body_json(resp).await;
    assert_eq!(result.divided_names[0].algorithm, "gbdt");
}

#[tokio::test]
async fn divide_empty_names_returns_empty_list() {
    let resp = app()
        .oneshot(divide_request(r#"{"names":[],"mode":"basic"}"#))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let result: DivisionResult = body_json(resp).await;
    assert!(result.divided_names.is_empty());
}

#[tokio::test]
async fn divide_unknown_mode_returns_422() {
    let resp = app()
        .oneshot(divide_request(r#"{"names":["原敬"],"mode":"neural"}"#))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let msg: String = body_json(resp).await;
    assert_eq!(msg, "Mode must be 'basic' or 'gbdt'.");
}

#[tokio::test]
async fn divide_too_many_names_returns_422() {
    let names = vec!["原敬"; MAX_NAMES + 1];
    let body = serde_json::json!({ "names": names, "mode": "basic" }).to_string();
    let resp = app().oneshot(divide_request(&body)).await.unwrap();

    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn divide_missing_names_returns_422() {
    let resp = app()
        .oneshot(divide_request(r#"{"mode":"basic"}"#))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn divide_malformed_json_returns_400() {
    let resp = app().oneshot(divide_request("{not json")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn divide_without_content_type_returns_415() {
    let resp = app()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/divide")
                .body(r#"{"names":["原敬"]}"#.to_string())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
}

#[tokio::test]
async fn get_on_divide_is_not_allowed() {
    let resp = app()
        .oneshot(Request::builder().uri("/divide").body(String::new()).unwrap())
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
    assert!(body_bytes(resp).await.is_empty());
}

#[tokio::test]
async fn unknown_route_returns_404() {
    let resp = app()
        .oneshot(Request::builder().uri("/split").body(String::new()).unwrap())
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
