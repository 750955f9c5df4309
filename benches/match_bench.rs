use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use paramtools::{ParamSet, Params};

fn bench_matches(c: &mut Criterion) {
    let mut group = c.benchmark_group("paramset_match");

    for keys in [4usize, 16, 64].iter() {
        let mut ps = ParamSet::new();
        for key in 0..*keys {
            for value in 0..8 {
                let mut record = Params::new();
                record.set(format!("key{key}"), format!("value{value}"));
                ps.add(&record);
            }
        }
        // Worst case for the linear value scan: every lookup hits the last
        // recorded value.
        let candidate: Params = (0..*keys)
            .map(|key| (format!("key{key}"), "value7".to_string()))
            .collect();

        group.throughput(Throughput::Elements(*keys as u64));
        group.bench_function(format!("keys_{keys}"), |b| {
            b.iter(|| black_box(&ps).matches(black_box(&candidate)))
        });
    }

    group.finish();
}

fn bench_add(c: &mut Criterion) {
    let mut group = c.benchmark_group("paramset_add");

    let record: Params = (0..16)
        .map(|key| (format!("key{key}"), "value".to_string()))
        .collect();

    group.bench_function("add_16_keys", |b| {
        b.iter(|| {
            let mut ps = ParamSet::new();
            ps.add(black_box(&record));
            ps
        })
    });

    group.finish();
}

criterion_group!(benches, bench_matches, bench_add);
criterion_main!(benches);
