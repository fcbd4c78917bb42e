use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use codepage_transcode::{CodePageRegistry, FallbackPolicy};

const SIZES: [usize; 3] = [1024, 64 * 1024, 1024 * 1024];

fn sample_text(size: usize) -> String {
    let line = "Invoice 4711: Grüße aus München, 12,50 € - ☃\n";
    line.chars().cycle().take(size).collect()
}

fn benchmark_decode(c: &mut Criterion) {
    let registry = CodePageRegistry::global();
    let mut group = c.benchmark_group("decode");

    for page in ["IBM037", "cp866", "windows-1252"] {
        let table = registry.lookup(page).unwrap();
        for size in SIZES {
            let data: Vec<u8> = (0..=u8::MAX).cycle().take(size).collect();
            group.throughput(Throughput::Bytes(size as u64));
            group.bench_with_input(BenchmarkId::new(page, size), &data, |b, data| {
                b.iter(|| black_box(table.decode(black_box(data))));
            });
        }
    }

    group.finish();
}

fn benchmark_encode(c: &mut Criterion) {
    let registry = CodePageRegistry::global();
    let mut group = c.benchmark_group("encode");

    for page in ["IBM01141", "windows-1252", "iso-8859-15"] {
        let table = registry.lookup(page).unwrap();
        for size in SIZES {
            let text = sample_text(size);
            group.throughput(Throughput::Bytes(text.len() as u64));

            group.bench_with_input(BenchmarkId::new(format!("{page}/count"), size), &text, |b, text| {
                let mut encoder = table.encoder(FallbackPolicy::Replace);
                b.iter(|| black_box(encoder.byte_count(black_box(text)).unwrap()));
            });

            group.bench_with_input(
                BenchmarkId::new(format!("{page}/presized"), size),
                &text,
                |b, text| {
                    let mut encoder = table.encoder(FallbackPolicy::Replace);
                    let mut out = vec![0u8; encoder.byte_count(text).unwrap()];
                    b.iter(|| black_box(encoder.encode(black_box(text), &mut out).unwrap()));
                },
            );

            group.bench_with_input(BenchmarkId::new(format!("{page}/ncr"), size), &text, |b, text| {
                let mut encoder = table.encoder(FallbackPolicy::NcrEscape);
                b.iter(|| black_box(encoder.encode_to_vec(black_box(text)).unwrap()));
            });
        }
    }

    group.finish();
}

fn benchmark_lookup(c: &mut Criterion) {
    c.bench_function("lookup_cached", |b| {
        let registry = CodePageRegistry::global();
        b.iter(|| black_box(registry.lookup(black_box("ibm-01141")).unwrap()));
    });
}

criterion_group!(benches, benchmark_decode, benchmark_encode, benchmark_lookup);
criterion_main!(benches);
