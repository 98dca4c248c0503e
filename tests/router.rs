use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use pallet_counter::{router, AppState, CountStore};
use serde_json::{json, Value};
use tower::ServiceExt;

async fn app() -> (Router, AppState) {
    let store = CountStore::in_memory().await.expect("in-memory store");
    let state = AppState::new(store, chrono_tz::America::New_York);
    (router(state.clone()), state)
}

async fn get(app: &Router, uri: &str) -> (StatusCode, Vec<u8>) {
    let resp = app
        .clone()
        .oneshot(
            Request::builder()
                .method("GET")
                .uri(uri)
                .body(Body::empty())
                .expect("failed to build request"),
        )
        .await
        .expect("request failed");
    let status = resp.status();
    let body = to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("failed to read response body");
    (status, body.to_vec())
}

async fn get_json(app: &Router, uri: &str) -> Value {
    let (status, body) = get(app, uri).await;
    assert_eq!(status, StatusCode::OK, "GET {uri}");
    serde_json::from_slice(&body).expect("response body was not json")
}

#[tokio::test]
async fn counts_for_unseen_date_are_zero() {
    let (app, _) = app().await;
    let body = get_json(&app, "/counts?date=2026-03-01").await;
    assert_eq!(body, json!({ "palletsReceived": 0, "palletsDelivered": 0 }));
}

#[tokio::test]
async fn increments_count_up_and_show_in_lookup() {
    let (app, _) = app().await;

    for expected in 1..=4 {
        let body = get_json(&app, "/palletsReceived?date=2026-03-01").await;
        assert_eq!(body, json!({ "count": expected }));
    }
    let body = get_json(&app, "/palletsDelivered?date=2026-03-01").await;
    assert_eq!(body, json!({ "count": 1 }));

    let body = get_json(&app, "/counts?date=2026-03-01").await;
    assert_eq!(body, json!({ "palletsReceived": 4, "palletsDelivered": 1 }));
}

#[tokio::test]
async fn invalid_type_is_rejected_before_storage() {
    let (app, state) = app().await;

    let (status, body) = get(&app, "/invalidType?date=2026-03-01").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, b"Invalid type");

    let (status, _) = get(&app, "/pallets_received?date=2026-03-01").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    assert_eq!(state.store.counts_for("2026-03-01").await.unwrap(), None);
}

#[tokio::test]
async fn increment_requires_a_date() {
    let (app, state) = app().await;

    let (status, _) = get(&app, "/palletsReceived").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = get(&app, "/palletsReceived?date=").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    assert_eq!(state.store.latest().await.unwrap(), None);
}

#[tokio::test]
async fn dates_do_not_affect_each_other() {
    let (app, _) = app().await;

    get_json(&app, "/palletsDelivered?date=2026-03-01").await;
    get_json(&app, "/palletsDelivered?date=2026-03-01").await;
    get_json(&app, "/palletsReceived?date=2026-03-02").await;

    let first = get_json(&app, "/counts?date=2026-03-01").await;
    let second = get_json(&app, "/counts?date=2026-03-02").await;
    assert_eq!(first, json!({ "palletsReceived": 0, "palletsDelivered": 2 }));
    assert_eq!(second, json!({ "palletsReceived": 1, "palletsDelivered": 0 }));
}

#[tokio::test]
async fn counts_without_date_reads_as_zero() {
    let (app, _) = app().await;

    get_json(&app, "/palletsReceived?date=2026-03-01").await;
    get_json(&app, "/palletsDelivered?date=2026-03-05").await;

    let body = get_json(&app, "/counts").await;
    assert_eq!(body, json!({ "palletsReceived": 0, "palletsDelivered": 0 }));
}

#[tokio::test]
async fn index_creates_today_and_shows_latest_row() {
    let (app, state) = app().await;
    let today = state.today();

    let (status, body) = get(&app, "/").await;
    assert_eq!(status, StatusCode::OK);
    let html = String::from_utf8(body).expect("page was not utf-8");
    assert!(html.contains(&format!("Today's Date: {today}")));
    assert!(html.contains(r#"<span id="palletsReceived-count">0</span>"#));

    let row = state.store.counts_for(&today).await.unwrap();
    assert!(row.is_some(), "index should create today's row");

    // A far-future row outranks today on the landing page.
    state.store.ensure_row("9999-12-31").await.unwrap();
    for _ in 0..3 {
        get_json(&app, "/palletsReceived?date=9999-12-31").await;
    }
    let (_, body) = get(&app, "/").await;
    let html = String::from_utf8(body).expect("page was not utf-8");
    assert!(html.contains(r#"<span id="palletsReceived-count">3</span>"#));
    assert!(html.contains(r#"value="9999-12-31""#));
}

#[tokio::test]
async fn index_twice_keeps_counters() {
    let (app, state) = app().await;
    let today = state.today();

    get(&app, "/").await;
    get_json(&app, &format!("/palletsDelivered?date={today}")).await;
    get(&app, "/").await;

    let row = state.store.counts_for(&today).await.unwrap().unwrap();
    assert_eq!(row.pallets_delivered, 1);
    assert_eq!(row.pallets_received, 0);
}
