//! Benchmarks for lumbertab parsing performance.
//!
//! Run with: cargo bench
//!
//! These benchmarks use synthetic order documents.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

const SIZES: [&str; 4] = ["2x4 SPF", "2x6 SPF #2", "2x8 DF", "4x4 PT"];

/// Creates an order document with the given number of line items.
///
/// Every fourth item is sheathing and every third dimensional data row
/// carries the shifted footage columns.
fn create_test_order(items: usize) -> String {
    let mut html = String::from("<html><body><table>\n");

    for i in 0..items {
        if i % 4 == 3 {
            html.push_str("<tr><td></td><td>SKU OSB</td><td>Roof Sheathing</td></tr>\n");
            html.push_str(&format!(
                "<tr><td></td><td></td><td>7/16 OSB</td><td>{}</td></tr>\n",
                i % 50 + 1
            ));
            continue;
        }

        let size = SIZES[i % SIZES.len()];
        html.push_str(&format!("<tr><td>{}</td></tr>\n", size));
        html.push_str(&format!(
            "<tr><td></td><td>SKU {}</td><td>Lumber</td><td></td><td></td><td></td><td></td><td></td></tr>\n",
            i
        ));
        let (quantity, board, lineal) = (i % 20 + 1, i as f64 * 1.25, i % 16);
        if i % 3 == 0 {
            html.push_str(&format!(
                "<tr><td></td><td></td><td>{}</td><td></td><td></td><td></td><td></td><td>{}</td><td>{}' 3-1/2\"</td></tr>\n",
                quantity, board, lineal
            ));
        } else {
            html.push_str(&format!(
                "<tr><td></td><td></td><td>{}</td><td></td><td></td><td></td><td>{}</td><td>{}' 0\"</td></tr>\n",
                quantity, board, lineal
            ));
        }
    }

    html.push_str("</table></body></html>\n");
    html
}

/// Benchmark lineal footage parsing.
fn bench_to_inches(c: &mut Criterion) {
    c.bench_function("to_inches_fraction", |b| {
        b.iter(|| lumbertab::to_inches(black_box("15' 6-3/4\"")).unwrap());
    });

    c.bench_function("to_inches_plain", |b| {
        b.iter(|| lumbertab::to_inches(black_box("16' 0\"")).unwrap());
    });
}

/// Benchmark the full pipeline at various document sizes.
fn bench_order_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("order_parsing");

    for items in [10, 100, 1000].iter() {
        let html = create_test_order(*items);

        group.bench_function(format!("{}_items", items), |b| {
            b.iter(|| lumbertab::parse_str(black_box(&html)).unwrap());
        });
    }

    group.finish();
}

/// Benchmark CSV rendering of an aggregated report.
fn bench_csv_rendering(c: &mut Criterion) {
    let report = lumbertab::parse_str(&create_test_order(1000)).unwrap();
    let options = lumbertab::ReportOptions::default();

    c.bench_function("csv_rendering", |b| {
        b.iter(|| lumbertab::report::to_csv(black_box(&report), &options).unwrap());
    });
}

criterion_group!(
    benches,
    bench_to_inches,
    bench_order_parsing,
    bench_csv_rendering,
);
criterion_main!(benches);
