//! Benchmarking RINEX observation parsing
extern crate criterion;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

use rinex_obs::prelude::{parse_epoch_line, parse_observation_line, Epochs, Rinex};
use std::collections::HashMap;

const ALBY: &str = "test_resources/OBS/V3/ALBY00AUS_R_20183280000_01D_30S_MO.rnx";

fn benchmark(c: &mut Criterion) {
    let mut parsing_grp = c.benchmark_group("parsing");

    parsing_grp.bench_function("OBS/V3/eager", |b| {
        b.iter(|| {
            let _ = Rinex::from_file(ALBY).unwrap();
        })
    });

    parsing_grp.bench_function("OBS/V3/lazy", |b| {
        b.iter(|| {
            let epochs = Epochs::from_file(ALBY).unwrap();
            for epoch in epochs {
                let _ = epoch.unwrap();
            }
        })
    });

    parsing_grp.bench_function("epoch line", |b| {
        b.iter(|| {
            let _ = parse_epoch_line(black_box(
                "> 2018 11 24 00 00  0.0000000  0 32         .000000012",
            ));
        })
    });

    let mut types = HashMap::new();
    types.insert(
        'G',
        ["C1C", "L1C", "D1C", "S1C"]
            .iter()
            .map(|c| c.to_string())
            .collect::<Vec<_>>(),
    );
    parsing_grp.bench_function("observation line", |b| {
        b.iter(|| {
            let _ = parse_observation_line(
                black_box("G01  22331467.880 8 117352685.282 8     -1009.418          48.950"),
                &types,
            );
        })
    });

    parsing_grp.finish();
}

criterion_group!(benches, benchmark);
criterion_main!(benches);
