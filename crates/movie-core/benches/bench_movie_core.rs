use criterion::{black_box, criterion_group, criterion_main, Criterion};
use movie_core::{MoviePayload, MovieStore};
use rand::Rng;

fn payload(i: usize) -> MoviePayload {
    MoviePayload {
        isbn: format!("isbn-{i}"),
        title: format!("Movie {i}"),
        ..Default::default()
    }
}

fn bench_create(c: &mut Criterion) {
    c.bench_function("store_create_1000", |b| {
        b.iter(|| {
            let store = MovieStore::new();
            for i in 0..1000 {
                black_box(store.create(payload(i)));
            }
        })
    });
}

fn bench_get_scan(c: &mut Criterion) {
    let store = MovieStore::new();
    let ids: Vec<String> = (0..1000).map(|i| store.create(payload(i)).id).collect();
    let mut rng = rand::thread_rng();
    c.bench_function("store_get_random_of_1000", |b| {
        b.iter(|| {
            let id = &ids[rng.gen_range(0..ids.len())];
            black_box(store.get(id).ok());
        })
    });
}

fn bench_decode(c: &mut Criterion) {
    let body = br#"{"isbn":"999","title":"New","director":{"first_name":"A","last_name":"B"}}"#;
    c.bench_function("payload_decode", |b| {
        b.iter(|| black_box(MoviePayload::from_json(body).ok()))
    });
}

criterion_group!(benches, bench_create, bench_get_scan, bench_decode);
criterion_main!(benches);
