use criterion::{Criterion, black_box, criterion_group, criterion_main};
use saju_base::{
    FourPillarChart, Pillar, RawLuckPeriod, analyze_elements, build_luck_timeline, chart_ten_gods,
    current_period_index, detect_shensha, ten_god_of_chars,
};

fn sample_chart() -> FourPillarChart {
    FourPillarChart::new(
        Pillar::from_sexagenary(36),
        Pillar::from_sexagenary(14),
        Pillar::from_sexagenary(13),
        Pillar::from_sexagenary(45),
    )
}

fn classify_bench(c: &mut Criterion) {
    let chart = sample_chart();

    let mut group = c.benchmark_group("classify");
    group.bench_function("ten_god_of_chars", |b| {
        b.iter(|| ten_god_of_chars(black_box('丁'), black_box('庚')))
    });
    group.bench_function("chart_ten_gods", |b| {
        b.iter(|| chart_ten_gods(black_box(&chart)))
    });
    group.bench_function("analyze_elements", |b| {
        b.iter(|| analyze_elements(black_box(&chart)))
    });
    group.bench_function("detect_shensha", |b| {
        b.iter(|| detect_shensha(black_box(&chart)))
    });
    group.finish();
}

fn luck_bench(c: &mut Criterion) {
    let raw: Vec<RawLuckPeriod> = std::iter::once(RawLuckPeriod {
        ganzhi: String::new(),
        start_age: 1,
    })
    .chain((1..11).map(|i| RawLuckPeriod {
        ganzhi: Pillar::from_sexagenary(14 + i).to_string(),
        start_age: 1 + 10 * i as u32,
    }))
    .collect();

    let mut group = c.benchmark_group("luck");
    group.bench_function("build_luck_timeline", |b| {
        b.iter(|| build_luck_timeline(black_box(&raw)))
    });
    let timeline = build_luck_timeline(&raw).unwrap_or_default();
    group.bench_function("current_period_index", |b| {
        b.iter(|| current_period_index(black_box(&timeline), black_box(45)))
    });
    group.finish();
}

criterion_group!(benches, classify_bench, luck_bench);
criterion_main!(benches);
