use criterion::{black_box, criterion_group, criterion_main, Criterion};
use geojson::{Feature, FeatureCollection, GeoJson, Geometry, Value};

use mapcoords::geodesic::arc::transform_line_to_arcs;
use mapcoords::geodesic::circle::{polygon_from_circle, CircleUnit};
use mapcoords::geodesic::distance::{haversine, vincenty};
use mapcoords::geometry::reproject::reproject_geojson;
use mapcoords::proj::pipeline::Pipeline;
use mapcoords::proj::registry::{ProjectionDefinition, ProjectionRegistry};
use mapcoords::viewport::viewport_geometry;
use mapcoords::BoundingBox;

fn registry_with_utm() -> ProjectionRegistry {
    let mut registry = ProjectionRegistry::new();
    registry.register(ProjectionDefinition::new(
        "EPSG:32633",
        "+proj=utm +zone=33 +datum=WGS84 +units=m +no_defs",
    ));
    registry
}

fn make_lines(features: usize, vertices: usize) -> GeoJson {
    let features = (0..features)
        .map(|f| {
            let line = (0..vertices)
                .map(|v| vec![10.0 + (v as f64 / vertices as f64) * 5.0, 45.0 + f as f64 * 0.01])
                .collect();
            Feature {
                geometry: Some(Geometry::new(Value::LineString(line))),
                ..Default::default()
            }
        })
        .collect();
    GeoJson::FeatureCollection(FeatureCollection {
        bbox: None,
        features,
        foreign_members: None,
    })
}

fn bench_projection_throughput(c: &mut Criterion) {
    // Points/sec for the native and proj4rs pipelines
    let n = 1_000_000_usize;
    let registry = registry_with_utm();

    for (name, dst) in [("proj_webmerc_1M", "EPSG:3857"), ("proj_utm33_1M", "EPSG:32633")] {
        let pipeline = Pipeline::new(&registry, "EPSG:4326", dst).unwrap();
        let mut coords: Vec<(f64, f64)> = vec![(0.0, 0.0); n];

        c.bench_function(name, |b| {
            b.iter(|| {
                for (i, c) in coords.iter_mut().enumerate() {
                    *c = (
                        10.0 + (i as f64 / n as f64) * 5.0,
                        40.0 + (i as f64 / n as f64) * 20.0,
                    );
                }
                pipeline.transform_batch(&mut coords).unwrap();
            });
        });
    }
}

fn bench_reproject_geojson(c: &mut Criterion) {
    let registry = registry_with_utm();
    let geojson = make_lines(1000, 100);

    for dst in ["EPSG:3857", "EPSG:32633"] {
        c.bench_function(&format!("reproject_geojson_100k_{dst}"), |b| {
            b.iter(|| black_box(reproject_geojson(&registry, &geojson, "EPSG:4326", dst)));
        });
    }
}

fn bench_distances(c: &mut Criterion) {
    let line: Vec<[f64; 2]> = (0..10_000)
        .map(|i| [-120.0 + i as f64 * 0.02, 30.0 + (i as f64 * 0.01).sin() * 10.0])
        .collect();

    c.bench_function("haversine_10k", |b| b.iter(|| black_box(haversine(&line))));
    c.bench_function("vincenty_10k", |b| b.iter(|| black_box(vincenty(&line))));
    c.bench_function("line_to_arcs_100", |b| {
        b.iter(|| black_box(transform_line_to_arcs(&line[..100])))
    });
}

fn bench_circle_and_viewport(c: &mut Criterion) {
    c.bench_function("circle_256_sides", |b| {
        b.iter(|| black_box(polygon_from_circle(Some([40.0, 15.0]), Some(6000.0), CircleUnit::Meters, 256)))
    });

    let bounds = BoundingBox::new(-41924181.0, -117407.0, -14020385.0, 18393806.0);
    c.bench_function("viewport_split_webmerc", |b| {
        b.iter(|| black_box(viewport_geometry(&bounds, "EPSG:3857")))
    });
}

criterion_group!(
    benches,
    bench_projection_throughput,
    bench_reproject_geojson,
    bench_distances,
    bench_circle_and_viewport
);
criterion_main!(benches);
