use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rle_list::{codec, RleList};

/// Generate ascii-art-like data with long runs of spaces and fill characters
fn generate_picture(size: usize) -> Vec<u8> {
    let rows = [
        "            ********            \n",
        "        ****************        \n",
        "    ########################    \n",
        "################################\n",
    ];

    let mut result = Vec::new();
    let mut i = 0;
    while result.len() < size {
        result.extend_from_slice(rows[i % rows.len()].as_bytes());
        i += 1;
    }
    result.truncate(size);
    result
}

/// Generate low-repetition data (simulating base64)
fn generate_low_repetition(size: usize) -> Vec<u8> {
    let chars = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";
    let mut result = Vec::with_capacity(size);
    let mut seed = 12345u64;

    for _ in 0..size {
        // Simple LCG random
        seed = seed.wrapping_mul(1103515245).wrapping_add(12345);
        result.push(chars[(seed % chars.len() as u64) as usize]);
    }
    result
}

fn bench_push(c: &mut Criterion) {
    let sizes = [1_000, 10_000, 100_000];
    let mut group = c.benchmark_group("push");

    for size in sizes.iter() {
        let picture = generate_picture(*size);
        let noise = generate_low_repetition(*size);

        group.bench_with_input(BenchmarkId::new("picture", size), &picture, |b, data| {
            b.iter(|| {
                let mut list = RleList::new();
                list.try_extend(black_box(data.iter().copied())).unwrap();
                black_box(list)
            });
        });

        group.bench_with_input(BenchmarkId::new("low_repetition", size), &noise, |b, data| {
            b.iter(|| {
                let mut list = RleList::new();
                list.try_extend(black_box(data.iter().copied())).unwrap();
                black_box(list)
            });
        });
    }

    group.finish();
}

fn bench_get(c: &mut Criterion) {
    let sizes = [1_000, 10_000];
    let mut group = c.benchmark_group("get");

    for size in sizes.iter() {
        let list = RleList::try_from_bytes(&generate_picture(*size)).unwrap();

        group.bench_with_input(BenchmarkId::new("strided", size), &list, |b, list| {
            b.iter(|| {
                let mut checksum = 0u64;
                for i in (0..list.len()).step_by(7) {
                    checksum += u64::from(list.get(black_box(i)).unwrap());
                }
                black_box(checksum)
            });
        });
    }

    group.finish();
}

fn bench_remove(c: &mut Criterion) {
    let sizes = [1_000, 10_000];
    let mut group = c.benchmark_group("remove");

    for size in sizes.iter() {
        let list = RleList::try_from_bytes(&generate_picture(*size)).unwrap();

        group.bench_with_input(BenchmarkId::new("middle", size), &list, |b, list| {
            b.iter_batched(
                || list.clone(),
                |mut list| {
                    while list.len() > 1 {
                        let middle = list.len() / 2;
                        black_box(list.remove(middle).unwrap());
                    }
                    list
                },
                criterion::BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

fn bench_map_and_export(c: &mut Criterion) {
    let sizes = [1_000, 10_000, 100_000];
    let mut group = c.benchmark_group("map_export");

    for size in sizes.iter() {
        let list = RleList::try_from_bytes(&generate_picture(*size)).unwrap();

        group.bench_with_input(BenchmarkId::new("map", size), &list, |b, list| {
            b.iter_batched(
                || list.clone(),
                |mut list| {
                    list.map(|v| if v == b' ' { b'#' } else { v }).unwrap();
                    list
                },
                criterion::BatchSize::SmallInput,
            );
        });

        group.bench_with_input(BenchmarkId::new("export", size), &list, |b, list| {
            b.iter(|| black_box(list.export_to_bytes().unwrap()));
        });

        let encoded = list.export_to_bytes().unwrap();
        group.bench_with_input(BenchmarkId::new("decode", size), &encoded, |b, encoded| {
            b.iter(|| black_box(codec::decode(black_box(encoded)).unwrap()));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_push,
    bench_get,
    bench_remove,
    bench_map_and_export
);
criterion_main!(benches);
