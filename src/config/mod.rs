use serde::{Deserialize, Serialize};

use crate::physics::units::DIPOLE_GAIN_DBI;

/// Fixed parameters of one radio link.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RadioLink {
    pub name: String,
    pub tx_power_dbm: f64, // dBm
    pub tx_gain_dbi: f64,  // dBi
    pub rx_gain_dbi: f64,  // dBi
    pub frequency_hz: f64, // Hz
}

// FS/OAS A-30 wildland-fire range test equipment (published values).
pub const A30_FREQUENCY_HZ: f64 = 122.925e6;
pub const A30_TX_POWER_DBM: f64 = 36.989_700_043_360_19; // 5 W
pub const A30_ANTENNA_GAIN_DBI: f64 = DIPOLE_GAIN_DBI; // 0 dBd aviation antenna
pub const A30_MIN_SEPARATION_M: f64 = 6.095; // 20 ft
pub const A30_LEVEL_ACCURACY_DB: f64 = 2.0; // IFR 4000 RF level accuracy
pub const A30_PLACEMENT_UNCERTAINTY_DB: f64 = 1.0; // antenna placement allowance

impl RadioLink {
    /// Radio under FS/OAS A-30 test. The frequency is locked: across the AM
    /// and FM bands, range changes from a different carrier are offset by the
    /// matching change in path loss.
    pub fn a30() -> Self {
        Self {
            name: "FS/OAS A-30".to_string(),
            tx_power_dbm: A30_TX_POWER_DBM,
            tx_gain_dbi: A30_ANTENNA_GAIN_DBI,
            rx_gain_dbi: A30_ANTENNA_GAIN_DBI,
            frequency_hz: A30_FREQUENCY_HZ,
        }
    }
}
