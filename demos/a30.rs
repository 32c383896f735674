use radio_range::physics::units::{feet_to_meters, meters_to_nautical_miles};
use radio_range::test_set::{RANGE_24_NMI_M, RANGE_50_NMI_M, RangeTest};

fn main() -> anyhow::Result<()> {
    let test = RangeTest::a30();
    let separation_m = feet_to_meters(20.0);

    let rf_24 = test.level_for_range_dbm(separation_m, RANGE_24_NMI_M)?;
    let rf_50 = test.level_for_range_dbm(separation_m, RANGE_50_NMI_M)?;
    println!("Test set RF level must be at least {rf_24:.2} dBm for 24 nmi range");
    println!("Test set RF level must be at least {rf_50:.2} dBm for 50 nmi range");

    // A receiver that opens at -40 dBm on the bench
    let range_m = test.max_range_m(separation_m, -40.0)?;
    println!(
        "The radio's max effective range is {:.2} nmi",
        meters_to_nautical_miles(range_m)
    );
    Ok(())
}
