use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use ronpr::{merge_overlapping, AxisRect, Point, TextFilter};

/// A chain of plate-sized rects where each overlaps the next, mixed with
/// disjoint outliers; exercises both the union-find pass and the fixed-point
/// iteration.
fn candidate_chain(n: usize) -> Vec<AxisRect> {
    let mut rects = Vec::with_capacity(n);
    for i in 0..n {
        let x = (i * 30) as i32;
        if i % 4 == 3 {
            // Outlier on a separate row, overlapping nothing.
            rects.push(AxisRect::new(
                Point::new(x, 200),
                Point::new(x + 20, 212),
            ));
        } else {
            rects.push(AxisRect::new(Point::new(x, 0), Point::new(x + 44, 11)));
        }
    }
    rects
}

fn benchmark_merge(c: &mut Criterion) {
    let mut group = c.benchmark_group("merge_overlapping");
    for n in [8usize, 32, 128] {
        let rects = candidate_chain(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &rects, |b, rects| {
            b.iter(|| merge_overlapping(black_box(rects)))
        });
    }
    group.finish();
}

fn benchmark_text_filter(c: &mut Criterion) {
    let filter = TextFilter::new();
    let batch: Vec<String> = [
        "23/11/2021",
        "CJ 1 2 A B C",
        "B123XYZ",
        "ROMANIA*TM07DEF*2021",
        "ZZ12ABC",
        "some unrelated sign text",
    ]
    .iter()
    .cycle()
    .take(120)
    .map(|s| s.to_string())
    .collect();

    c.bench_function("filter_dates_and_plates", |b| {
        b.iter(|| filter.filter_dates_and_plates(black_box(&batch)))
    });
}

criterion_group!(benches, benchmark_merge, benchmark_text_filter);
criterion_main!(benches);
