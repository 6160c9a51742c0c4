use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use tooltip_core::{
    ChartSettings, ClassifyContext, Classifier, Column, MarkElement, MarkKind, MarkOrigin, RawDatum, Series,
    ShapeFlags, StackType, TriggerEvent,
};

fn gen_series(count: usize, rows: usize) -> Vec<Series> {
    let cols = vec![Column::number("x"), Column::number("y").with_decimals(2)];
    (0..count)
        .map(|s| {
            let data = (0..rows)
                .map(|i| vec![(i as f64).into(), ((i as f64 * 0.01).sin() * 10.0 + s as f64).into()])
                .collect();
            Series::from_rows(format!("s{s}"), cols.clone(), data)
        })
        .collect()
}

fn bench_data_point(c: &mut Criterion) {
    let mut group = c.benchmark_group("classify_data_point");
    let classifier = Classifier::new();
    let settings = ChartSettings::default().with_stack_type(StackType::Normalized);
    let hover = TriggerEvent::mouse_move(10.0, 10.0);
    for &rows in &[1_000usize, 10_000usize] {
        let series = gen_series(3, rows);
        let flags = ShapeFlags::detect(&settings, series.len());
        let ctx = ClassifyContext::new(&series, &settings, flags);
        // last row is the worst case for the linear row lookup
        let datum = RawDatum::point((rows - 1) as f64, 0.25);
        let element = MarkElement::new(1, MarkKind::Bar).in_stack(2);
        group.bench_with_input(BenchmarkId::from_parameter(format!("rows{rows}")), &rows, |b, _| {
            b.iter(|| black_box(classifier.classify(&datum, &ctx, MarkOrigin::new(&element, &hover))));
        });
    }
    group.finish();
}

fn bench_tuple(c: &mut Criterion) {
    let classifier = Classifier::new();
    let settings = ChartSettings::default();
    let series = gen_series(1, 10);
    let ctx = ClassifyContext::new(&series, &settings, ShapeFlags::default());
    let datum = RawDatum::tuple(vec![1.0.into(), 2.0.into(), 3.0.into()]);
    let element = MarkElement::new(1, MarkKind::Bubble);
    let click = TriggerEvent::click(0.0, 0.0);
    c.bench_function("classify_tuple", |b| {
        b.iter(|| black_box(classifier.classify(&datum, &ctx, MarkOrigin::new(&element, &click))));
    });
}

criterion_group!(benches, bench_data_point, bench_tuple);
criterion_main!(benches);
