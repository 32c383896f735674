use std::f64::consts::PI;

use crate::physics::InvalidInput;
use crate::physics::units::{SPEED_OF_LIGHT, wavelength_m};

// Divisor of the engineering range form: 4*pi*1e9 / c with c rounded to
// 3e8 m/s. Kept verbatim so results line up with published test tables.
const RANGE_DIVISOR: f64 = 41.88;
const RANGE_OFFSET_DB: f64 = 180.0;

/// Received power (dBm) at `distance_m` from the transmitter.
///
/// Pr = Pt + Gt + Gr + 20*log10(lambda / (4*pi*d))
pub fn received_power_dbm(
    tx_power_dbm: f64,
    tx_gain_dbi: f64,
    rx_gain_dbi: f64,
    frequency_hz: f64,
    distance_m: f64,
) -> Result<f64, InvalidInput> {
    let wavelength = wavelength_m(frequency_hz)?;
    if distance_m <= 0.0 {
        return Err(InvalidInput::NonPositiveDistance(distance_m));
    }
    Ok(tx_power_dbm
        + tx_gain_dbi
        + rx_gain_dbi
        + 20.0 * (wavelength / (4.0 * PI * distance_m)).log10())
}

/// Maximum range (m) at which the receiver still sees `received_power_dbm`.
///
/// Range = 10^((Pt + Gt + Gr - Pr + 180) / 20) / (41.88 * f)
pub fn max_range_m(
    tx_power_dbm: f64,
    tx_gain_dbi: f64,
    rx_gain_dbi: f64,
    received_power_dbm: f64,
    frequency_hz: f64,
) -> Result<f64, InvalidInput> {
    if frequency_hz <= 0.0 {
        return Err(InvalidInput::NonPositiveFrequency(frequency_hz));
    }
    let budget_db = tx_power_dbm + tx_gain_dbi + rx_gain_dbi - received_power_dbm;
    Ok(10.0f64.powf((budget_db + RANGE_OFFSET_DB) / 20.0) / (RANGE_DIVISOR * frequency_hz))
}

/// Transmit power (dBm) needed to deliver `received_power_dbm` at `distance_m`.
pub fn transmit_power_dbm(
    received_power_dbm: f64,
    tx_gain_dbi: f64,
    rx_gain_dbi: f64,
    frequency_hz: f64,
    distance_m: f64,
) -> Result<f64, InvalidInput> {
    let wavelength = wavelength_m(frequency_hz)?;
    if distance_m <= 0.0 {
        return Err(InvalidInput::NonPositiveDistance(distance_m));
    }
    Ok(received_power_dbm
        - tx_gain_dbi
        - rx_gain_dbi
        - 20.0 * (wavelength / (4.0 * PI * distance_m)).log10())
}

/// Net loss (dB) between two antenna ports `separation_m` apart: free-space
/// path loss less both antenna gains.
pub fn link_loss_db(
    frequency_hz: f64,
    separation_m: f64,
    tx_gain_dbi: f64,
    rx_gain_dbi: f64,
) -> Result<f64, InvalidInput> {
    if frequency_hz <= 0.0 {
        return Err(InvalidInput::NonPositiveFrequency(frequency_hz));
    }
    if separation_m <= 0.0 {
        return Err(InvalidInput::NonPositiveDistance(separation_m));
    }
    let fspl_db = 20.0 * (4.0 * PI * separation_m * frequency_hz / SPEED_OF_LIGHT).log10();
    Ok(fspl_db - tx_gain_dbi - rx_gain_dbi)
}

/// Far-field boundary, two wavelengths out. Closer in, the plane-wave
/// assumption behind the path-loss model does not hold.
pub fn far_field_m(frequency_hz: f64) -> Result<f64, InvalidInput> {
    Ok(2.0 * wavelength_m(frequency_hz)?)
}
