//! Benchmarks for fingerprint ranking and bucket expansion
//!
//! Run with: cargo bench --package matching
//!
//! Uses a synthetic corpus (deterministic tag combinations) so the
//! benchmark needs no external dataset.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use matching::filters::AgeRangeFilter;
use matching::{ranker, CandidateExpander, FilterChain};
use profile_store::{fingerprint, MemoryStore, ProfileStore, UserRecord};

const TAG_POOL: usize = 50;
const USERS: usize = 5_000;

/// Deterministic interest list for one synthetic user.
fn interests_for(i: usize) -> Vec<String> {
    (0..4).map(|k| format!("tag{:02}", (i * 7 + k * 3) % TAG_POOL)).collect()
}

fn build_store() -> MemoryStore {
    let mut store = MemoryStore::new();
    for i in 0..USERS {
        store
            .insert_user(UserRecord {
                id: format!("user{:05}", i),
                age: (18 + i % 50) as u8,
                interests: interests_for(i),
            })
            .expect("synthetic corpus must insert cleanly");
    }
    store
}

fn bench_rank(c: &mut Criterion) {
    let store = build_store();
    let fingerprints = store.list_fingerprints().expect("memory store");
    let query = fingerprint::encode(&interests_for(0)).expect("valid tags");

    c.bench_function("rank_fingerprints", |b| {
        b.iter(|| {
            let ranked = ranker::rank(black_box(&query), black_box(fingerprints.clone()));
            black_box(ranked)
        })
    });
}

fn bench_expand(c: &mut Criterion) {
    let store = build_store();
    let fingerprints = store.list_fingerprints().expect("memory store");
    let query = fingerprint::encode(&interests_for(0)).expect("valid tags");
    let ranked = ranker::rank(&query, fingerprints);
    let chain = FilterChain::new().add_filter(AgeRangeFilter::new(21, 45));

    c.bench_function("expand_to_quota_50", |b| {
        b.iter(|| {
            let expander = CandidateExpander::new(&store, &chain);
            let expansion = expander.expand(black_box(&ranked), black_box(50)).unwrap();
            black_box(expansion)
        })
    });
}

criterion_group!(benches, bench_rank, bench_expand);
criterion_main!(benches);
