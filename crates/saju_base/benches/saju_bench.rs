use criterion::{Criterion, black_box, criterion_group, criterion_main};
use saju_base::{
    BirthInput, Chart, DEFAULT_FORECAST_OFFSETS, Gender, HeavenlyStem, five_elements,
    fortune_scores, luck_timeline, period_forecasts, ten_gods, year_pillar,
};

fn pillars_bench(c: &mut Criterion) {
    let input = BirthInput::new(1984, 2, 4, 0, Gender::Male).unwrap();

    let mut group = c.benchmark_group("pillars");
    group.bench_function("year_pillar", |b| b.iter(|| year_pillar(black_box(2024))));
    group.bench_function("chart_from_birth", |b| {
        b.iter(|| Chart::from_birth(black_box(&input)))
    });
    group.bench_function("chart_compute", |b| {
        b.iter(|| Chart::compute(black_box(1990), black_box(5), black_box(15), black_box(13)))
    });
    group.finish();
}

fn analysis_bench(c: &mut Criterion) {
    let input = BirthInput::new(1984, 2, 4, 0, Gender::Male).unwrap();
    let chart = Chart::from_birth(&input);
    let elements = five_elements(&chart.pillars()).unwrap();

    let mut group = c.benchmark_group("analysis");
    group.bench_function("ten_gods", |b| {
        b.iter(|| ten_gods(black_box(HeavenlyStem::Mu), black_box(chart.stems())))
    });
    group.bench_function("five_elements", |b| {
        b.iter(|| five_elements(black_box(&chart.pillars())))
    });
    group.bench_function("luck_timeline", |b| {
        b.iter(|| luck_timeline(black_box(&chart), Gender::Male))
    });
    group.bench_function("fortune_scores", |b| {
        b.iter(|| fortune_scores(black_box(&chart), &elements, black_box(0)))
    });
    group.bench_function("period_forecasts", |b| {
        b.iter(|| {
            period_forecasts(
                chart.day_master,
                black_box(&input),
                black_box(2024),
                &DEFAULT_FORECAST_OFFSETS,
            )
        })
    });
    group.finish();
}

criterion_group!(benches, pillars_bench, analysis_bench);
criterion_main!(benches);
