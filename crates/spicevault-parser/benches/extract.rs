//! Benchmarks for netlist extraction.

use criterion::{Criterion, criterion_group, criterion_main};
use spicevault_parser::{AnomalyLog, extract};

fn synthetic_library(models: usize) -> String {
    let mut text = String::from("* synthetic model library\n");
    for i in 0..models {
        text.push_str(&format!(
            ".model nch_{i} nmos vth=0.55 l=0.18u w={}u tox=1.4e-8 cgso=1p\n",
            i % 10 + 1
        ));
        if i % 20 == 0 {
            text.push_str(&format!(
                ".subckt cell_{i} in out vdd vss\nmn out in vss vss nch_{i}\n.ends\n"
            ));
        }
    }
    text
}

fn bench_extract(c: &mut Criterion) {
    let library = synthetic_library(500);
    c.bench_function("extract_500_models", |b| {
        b.iter(|| {
            let mut anomalies = AnomalyLog::disabled();
            let records = extract(&library, "bench.lib", &mut anomalies);
            assert_eq!(records.len(), 525);
            records
        });
    });
}

criterion_group!(benches, bench_extract);
criterion_main!(benches);
