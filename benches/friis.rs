use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use radio_range::config::RadioLink;
use radio_range::physics::friis;
use radio_range::test_set::{RANGE_24_NMI_M, RangeTest};

fn friis_benchmark(c: &mut Criterion) {
    let link = RadioLink::a30();

    c.bench_function("received_power_dbm", |b| {
        b.iter(|| {
            friis::received_power_dbm(
                black_box(link.tx_power_dbm),
                black_box(link.tx_gain_dbi),
                black_box(link.rx_gain_dbi),
                black_box(link.frequency_hz),
                black_box(RANGE_24_NMI_M),
            )
        })
    });

    let test = RangeTest::a30();

    c.bench_function("a30_max_range_m", |b| {
        b.iter(|| test.max_range_m(black_box(6.096), black_box(-40.0)))
    });
}

criterion_group!(benches, friis_benchmark);
criterion_main!(benches);
