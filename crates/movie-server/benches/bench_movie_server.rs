use criterion::{black_box, criterion_group, criterion_main, Criterion};
use axum::body::Body;
use axum::http::Request;
use tower::ServiceExt;
use movie_server::{app_with_state, state::AppState};
use tokio::runtime::Runtime;

fn bench_http_get(c: &mut Criterion) {
    let rt = Runtime::new().unwrap();
    c.bench_function("http_get_movie_1000", |b| {
        b.iter(|| {
            rt.block_on(async {
                let state = AppState::new();
                for _ in 0..1000 {
                    let app = app_with_state(state.clone());
                    let req = Request::builder()
                        .uri("/movies/2")
                        .body(Body::empty())
                        .unwrap();
                    let resp = app.oneshot(req).await.unwrap();
                    black_box(resp.status());
                }
            })
        })
    });
}

fn bench_http_movie_crud(c: &mut Criterion) {
    let rt = Runtime::new().unwrap();

    c.bench_function("http_create_list_movies_100", |b| {
        b.iter(|| {
            rt.block_on(async {
                let state = AppState::new();
                for i in 0..100 {
                    let app = app_with_state(state.clone());
                    let body = serde_json::json!({
                        "isbn": format!("bench-{i}"),
                        "title": format!("Benchmark movie {i}"),
                        "director": { "first_name": "Bench", "last_name": "Mark" }
                    });
                    let req = Request::builder()
                        .method("POST")
                        .uri("/movies")
                        .header("content-type", "application/json")
                        .body(Body::from(serde_json::to_vec(&body).unwrap()))
                        .unwrap();
                    let resp = app.oneshot(req).await.unwrap();
                    black_box(resp.status());
                }
                let app = app_with_state(state.clone());
                let req = Request::builder()
                    .uri("/movies")
                    .body(Body::empty())
                    .unwrap();
                let resp = app.oneshot(req).await.unwrap();
                black_box(resp.status());
            })
        })
    });
}

criterion_group!(benches, bench_http_get, bench_http_movie_crud);
criterion_main!(benches);
