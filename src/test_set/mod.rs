//! Bench range testing against an RF test set.
//!
//! The radio and the test set sit a few meters apart on the bench; the test
//! set generates the weak signal a distant station would produce. Effective
//! loss between the two ports folds in free-space path loss, the test set's
//! RF level accuracy and an allowance for antenna placement.

use crate::config::{
    A30_LEVEL_ACCURACY_DB, A30_MIN_SEPARATION_M, A30_PLACEMENT_UNCERTAINTY_DB, RadioLink,
};
use crate::physics::{InvalidInput, friis};

/// 24 nmi, the lower FS/OAS A-30 report distance (m).
pub const RANGE_24_NMI_M: f64 = 44_448.0;
/// 50 nmi, the upper FS/OAS A-30 report distance (m).
pub const RANGE_50_NMI_M: f64 = 92_600.0;

#[derive(Debug, Clone, PartialEq)]
pub struct RangeTest {
    pub link: RadioLink,
    pub level_accuracy_db: f64,        // dB
    pub placement_uncertainty_db: f64, // dB
    pub min_separation_m: f64,         // meters
}

impl RangeTest {
    /// Bench test for an arbitrary radio. The antennas must stay outside the
    /// far-field boundary of the carrier.
    pub fn new(
        link: RadioLink,
        level_accuracy_db: f64,
        placement_uncertainty_db: f64,
    ) -> Result<Self, InvalidInput> {
        let min_separation_m = friis::far_field_m(link.frequency_hz)?;
        Ok(Self {
            link,
            level_accuracy_db,
            placement_uncertainty_db,
            min_separation_m,
        })
    }

    /// FS/OAS A-30 configuration: locked frequency and power, 20 ft
    /// separation floor.
    pub fn a30() -> Self {
        Self {
            link: RadioLink::a30(),
            level_accuracy_db: A30_LEVEL_ACCURACY_DB,
            placement_uncertainty_db: A30_PLACEMENT_UNCERTAINTY_DB,
            min_separation_m: A30_MIN_SEPARATION_M,
        }
    }

    fn check_separation(&self, separation_m: f64) -> Result<(), InvalidInput> {
        if separation_m < self.min_separation_m {
            return Err(InvalidInput::SeparationTooClose {
                separation_m,
                min_m: self.min_separation_m,
            });
        }
        Ok(())
    }

    /// Loss (dB) between the radio and test set ports at the bench
    /// separation, padded with the level-accuracy and placement allowances.
    pub fn effective_loss_db(&self, separation_m: f64) -> Result<f64, InvalidInput> {
        self.check_separation(separation_m)?;
        let loss = friis::link_loss_db(
            self.link.frequency_hz,
            separation_m,
            self.link.tx_gain_dbi,
            self.link.rx_gain_dbi,
        )?;
        Ok(loss + self.level_accuracy_db + self.placement_uncertainty_db)
    }

    /// Minimum test set RF level (dBm) that demonstrates `range_m` of
    /// effective range when the instruments sit `separation_m` apart.
    pub fn level_for_range_dbm(
        &self,
        separation_m: f64,
        range_m: f64,
    ) -> Result<f64, InvalidInput> {
        let at_range = friis::received_power_dbm(
            self.link.tx_power_dbm,
            self.link.tx_gain_dbi,
            self.link.rx_gain_dbi,
            self.link.frequency_hz,
            range_m,
        )?;
        Ok(at_range + self.effective_loss_db(separation_m)?)
    }

    /// Maximum effective range (m) implied by the test set level that opens
    /// the receiver on the bench.
    pub fn max_range_m(
        &self,
        separation_m: f64,
        test_set_level_dbm: f64,
    ) -> Result<f64, InvalidInput> {
        let received_dbm = test_set_level_dbm - self.effective_loss_db(separation_m)?;
        friis::max_range_m(
            self.link.tx_power_dbm,
            self.link.tx_gain_dbi,
            self.link.rx_gain_dbi,
            received_dbm,
            self.link.frequency_hz,
        )
    }
}
