use altaz_core::{CelestialObject, ObjectInfo, ObserverLocation, UtcTime};
use criterion::{Criterion, black_box, criterion_group, criterion_main};

fn altaz_bench(c: &mut Criterion) {
    let info = ObjectInfo::new("M1", "Supernova Remnant", "Taurus", 6.5);
    let m1 = CelestialObject::new(info, [5.0, 34.5], [22.0, 1.0]).expect("valid object");
    let utc = UtcTime::new(2021, 1, 9, 4, 0, 0.0);
    let observer = ObserverLocation::new(42.35, -71.05).expect("valid location");

    let mut group = c.benchmark_group("altaz");
    group.bench_function("calc_altaz", |b| {
        b.iter(|| m1.calc_altaz(black_box(utc), black_box([42.0, 21.0]), black_box([-71.0, 3.0])))
    });
    group.bench_function("altaz_at", |b| {
        b.iter(|| m1.altaz_at(black_box(utc), black_box(&observer)))
    });
    group.finish();
}

criterion_group!(benches, altaz_bench);
criterion_main!(benches);
