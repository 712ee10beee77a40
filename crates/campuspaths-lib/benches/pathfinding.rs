use campuspaths_lib::{find_path, load_campus, CampusMap, DatasetPaths, WeightedGraph};
use criterion::{criterion_group, criterion_main, Criterion};
use once_cell::sync::Lazy;
use std::hint::black_box;
use std::path::PathBuf;

fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures")
}

static CAMPUS: Lazy<CampusMap> = Lazy::new(|| {
    let dir = fixtures_dir();
    let paths = DatasetPaths {
        buildings: dir.join("campus_buildings.csv"),
        walkways: dir.join("campus_paths.csv"),
    };
    load_campus(&paths).expect("fixture loads")
});

/// Square lattice with walkways in all four directions between neighbours.
static GRID: Lazy<WeightedGraph<(u32, u32), f64>> = Lazy::new(|| {
    const SIZE: u32 = 60;
    let mut graph = WeightedGraph::new();
    for x in 0..SIZE {
        for y in 0..SIZE {
            graph.add_node((x, y));
        }
    }
    for x in 0..SIZE {
        for y in 0..SIZE {
            let cost = 1.0 + f64::from((x * 7 + y * 13) % 5);
            if x + 1 < SIZE {
                graph.add_edge(&(x, y), (x + 1, y), cost).expect("edge");
                graph.add_edge(&(x + 1, y), (x, y), cost).expect("edge");
            }
            if y + 1 < SIZE {
                graph.add_edge(&(x, y), (x, y + 1), cost).expect("edge");
                graph.add_edge(&(x, y + 1), (x, y), cost).expect("edge");
            }
        }
    }
    graph
});

fn benchmark_pathfinding(c: &mut Criterion) {
    let campus = &*CAMPUS;

    c.bench_function("campus_cse_hub", |b| {
        b.iter(|| {
            let path = campus.find_route("CSE", "HUB").expect("route exists");
            black_box(path.cost())
        });
    });

    c.bench_function("campus_unreachable", |b| {
        b.iter(|| black_box(campus.find_route("HUB", "CSE").is_err()));
    });

    c.bench_function("grid_corner_to_corner", |b| {
        let graph = &*GRID;
        b.iter(|| {
            let path = find_path(graph, &(0, 0), &(59, 59)).expect("route exists");
            black_box(path.len())
        });
    });
}

criterion_group!(benches, benchmark_pathfinding);
criterion_main!(benches);
