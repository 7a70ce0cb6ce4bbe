use bytes::BytesMut;
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use tagwire::Record;

// ─── Test Data ──────────────────────────────────────────────────────────────

/// A record with one entry per supported type plus a nested record,
/// roughly the shape of a small inter-process message.
fn make_record() -> Record {
    let mut inner = Record::new();
    inner.put_str(1, "Software engineer").unwrap();
    inner.put_str(2, "https://example.com/avatar.jpg").unwrap();

    let mut record = Record::new();
    record.put_str(1, "user:abc123").unwrap();
    record.put_str(2, "Alice").unwrap();
    record.put_i32(3, 28);
    record.put_f64(4, 99.5);
    record.put_u8(5, 1);
    record.put_i64(6, 1_234_567_890);
    record.put_record(7, &inner).unwrap();
    record
}

fn make_binary() -> Vec<u8> {
    make_record().serialize().unwrap().to_vec()
}

// ═══════════════════════════════════════════════════════════════════════════
// Group 1: Building and serializing
// ═══════════════════════════════════════════════════════════════════════════

fn bench_serialize(c: &mut Criterion) {
    let mut group = c.benchmark_group("serialize");

    group.bench_function("build_and_serialize", |b| {
        b.iter(|| {
            let record = make_record();
            black_box(record.serialize().unwrap())
        })
    });

    let record = make_record();
    group.bench_function("serialize_only", |b| {
        b.iter(|| black_box(&record).serialize().unwrap())
    });

    group.bench_function("serialize_into (reused buffer)", |b| {
        let mut buf = BytesMut::new();
        b.iter(|| {
            black_box(&record).serialize_into(&mut buf).unwrap();
            black_box(buf.len())
        })
    });

    group.finish();
}

// ═══════════════════════════════════════════════════════════════════════════
// Group 2: Parsing
// ═══════════════════════════════════════════════════════════════════════════

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");
    let binary = make_binary();

    group.bench_function("parse_all", |b| {
        b.iter(|| Record::parse_all(black_box(&binary)).unwrap())
    });

    group.bench_function("parse_and_read_nested", |b| {
        b.iter(|| {
            let record = Record::parse_all(black_box(&binary)).unwrap();
            record.get_record(7).unwrap().unwrap().get_str(1).unwrap()
        })
    });

    group.finish();
}

// ═══════════════════════════════════════════════════════════════════════════
// Group 3: Accessors
// ═══════════════════════════════════════════════════════════════════════════

fn bench_accessors(c: &mut Criterion) {
    let mut group = c.benchmark_group("accessors");
    let record = make_record();

    group.bench_function("get_i64 (hit)", |b| {
        b.iter(|| black_box(&record).get_i64(6).unwrap())
    });

    group.bench_function("get_i64 (miss)", |b| {
        b.iter(|| black_box(&record).get_i64(999).unwrap())
    });

    group.bench_function("get_str (hit)", |b| {
        b.iter(|| black_box(&record).get_str(2).unwrap())
    });

    group.bench_function("put_i64 (overwrite)", |b| {
        let mut record = make_record();
        let mut n = 0i64;
        b.iter(|| {
            n = n.wrapping_add(1);
            record.put_i64(6, n);
            black_box(record.wire_len())
        })
    });

    group.finish();
}

criterion_group!(benches, bench_serialize, bench_parse, bench_accessors);
criterion_main!(benches);
