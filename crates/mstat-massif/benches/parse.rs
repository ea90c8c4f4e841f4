use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use mstat_massif::parse;

/// Deterministic ms_print-like report with `n` snapshot rows.
fn det_report(n: usize, seed: u64) -> String {
    let mut a = 1_664_525u64.wrapping_mul(seed).wrapping_add(1_013_904_223);
    let mut out = String::from(
        "desc: --time-unit=i\ncmd: ./bench\ntime_unit: i\n\
         \x20 n        time(i)         total(B)   useful-heap(B) extra-heap(B)    stacks(B)\n",
    );
    for i in 0..n {
        a = a.wrapping_mul(1_664_525).wrapping_add(1_013_904_223) % (1 << 32);
        let total = a % 50_000_000;
        out.push_str(&format!(
            "{i:>3} {:>14} {total:>16} {:>16} {:>13} {:>12}\n",
            i * 1_000,
            total - total / 10,
            total / 10,
            0
        ));
    }
    out
}

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("massif_parse");
    for &n in &[1_000usize, 50_000usize] {
        let text = det_report(n, 2024);
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_function(BenchmarkId::new("parse", n), |b| {
            b.iter(|| black_box(parse(black_box(&text))))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_parse);
criterion_main!(benches);
