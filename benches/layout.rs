use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use sankey_layout::{Sankey, SankeyInput};
use std::hint::black_box;

/// `layers` columns of `width` nodes; every node feeds the next two in the
/// following column.
fn layered_input(layers: usize, width: usize) -> SankeyInput {
    let mut input = SankeyInput::new();
    if width == 0 {
        return input;
    }
    for layer in 0..layers.saturating_sub(1) {
        for i in 0..width {
            let source = format!("L{layer}N{i}");
            for step in 1..=2 {
                let target = format!("L{}N{}", layer + 1, (i + step) % width);
                input.link(&source, &target, (1 + (i * 7 + step) % 5) as f64);
            }
        }
    }
    input
}

fn fixture(name: &str) -> &'static str {
    match name {
        "energy" => include_str!(concat!(
            env!("CARGO_MANIFEST_DIR"),
            "/tests/fixtures/energy.json"
        )),
        "named" => include_str!(concat!(
            env!("CARGO_MANIFEST_DIR"),
            "/tests/fixtures/named.json"
        )),
        _ => panic!("unknown fixture: {name}"),
    }
}

fn bench_fixtures(c: &mut Criterion) {
    let mut group = c.benchmark_group("fixtures");
    for name in ["energy", "named"] {
        let input: SankeyInput = serde_json::from_str(fixture(name)).expect("parse failed");
        let sankey = match name {
            "energy" => Sankey::new(),
            _ => Sankey::by_name(),
        }
        .size([960.0, 500.0]);
        group.bench_with_input(BenchmarkId::from_parameter(name), &input, |b, input| {
            b.iter(|| {
                let graph = sankey.layout(black_box(input)).expect("layout failed");
                black_box(graph.nodes.len());
            });
        });
    }
    group.finish();
}

fn bench_layered(c: &mut Criterion) {
    let mut group = c.benchmark_group("layered");
    let sankey = Sankey::by_name().size([1200.0, 800.0]);
    for (layers, width) in [(4, 8), (8, 16), (12, 32)] {
        let input = layered_input(layers, width);
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{layers}x{width}")),
            &input,
            |b, input| {
                b.iter(|| {
                    let graph = sankey.layout(black_box(input)).expect("layout failed");
                    black_box(graph.links.len());
                });
            },
        );
    }
    group.finish();
}

fn bench_update(c: &mut Criterion) {
    let sankey = Sankey::by_name().size([1200.0, 800.0]);
    let mut graph = sankey
        .layout(&layered_input(12, 32))
        .expect("layout failed");
    c.bench_function("update_12x32", |b| {
        b.iter(|| {
            sankey.update(black_box(&mut graph));
        });
    });
}

criterion_group!(
    name = benches;
    config = Criterion::default();
    targets = bench_fixtures, bench_layered, bench_update
);
criterion_main!(benches);
