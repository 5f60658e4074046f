//! Benchmarks for NotRedis storage operations

use std::sync::Arc;
use std::thread;

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use notredis::engine::{InMemoryEngine, Store};
use notredis::protocol::{dispatch, parse};
use notredis::storage::Storage;

fn storage_benchmarks(c: &mut Criterion) {
    let engine = InMemoryEngine::with_capacity(10_000);
    for i in 0..10_000 {
        engine.set(&format!("key{}", i), &format!("value{}", i)).unwrap();
    }

    c.bench_function("engine_set_overwrite", |b| {
        b.iter(|| engine.set(black_box("key42"), black_box("updated")).unwrap())
    });

    c.bench_function("engine_get_hit", |b| {
        b.iter(|| engine.get(black_box("key4242")).unwrap())
    });

    c.bench_function("engine_get_miss", |b| {
        b.iter(|| engine.get(black_box("absent")).is_err())
    });

    let engine = Arc::new(engine);
    c.bench_function("engine_mixed_4_threads", |b| {
        b.iter(|| {
            let handles: Vec<_> = (0..4)
                .map(|t| {
                    let engine = Arc::clone(&engine);
                    thread::spawn(move || {
                        for i in 0..250 {
                            let key = format!("key{}", i * 4 + t);
                            if i % 4 == 0 {
                                engine.set(&key, "v").unwrap();
                            } else {
                                let _ = engine.get(&key);
                            }
                        }
                    })
                })
                .collect();
            for handle in handles {
                handle.join().unwrap();
            }
        })
    });
}

fn protocol_benchmarks(c: &mut Criterion) {
    c.bench_function("parse_set", |b| {
        b.iter(|| parse(black_box("SET some_key some_value\n")).unwrap())
    });

    let storage = Storage::new(Arc::new(InMemoryEngine::new()));
    storage.set("color", "red").unwrap();
    c.bench_function("dispatch_get", |b| {
        b.iter(|| dispatch(&storage, black_box("GET color\n")))
    });
}

criterion_group!(benches, storage_benchmarks, protocol_benchmarks);
criterion_main!(benches);
