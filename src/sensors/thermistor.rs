//! NTC thermistor conversion (Grove-style sensor, 100 kOhm @ 25 C,
//! B = 4275).
//!
//! Wired in a voltage divider read through a 10-bit ADC. The simplified
//! Beta (Steinhart-Hart) equation converts divider ratio to temperature:
//!
//! ```text
//! R   = R0 * (1023/raw - 1)
//! T_K = 1 / ( ln(R/R0)/B + 1/298.15 )
//! ```
//!
//! A raw sample of zero would divide by zero and is rejected as a sensor
//! fault instead of silently producing infinity; samples above full scale
//! cannot come from a healthy 10-bit ADC and are rejected the same way.

use crate::config::Scale;
use crate::error::SensorError;

/// Beta coefficient of the thermistor.
const B_COEFFICIENT: f32 = 4275.0;
/// Divider reference resistance (equals the thermistor's R at 25 C).
const R0_OHMS: f32 = 100_000.0;
/// 25 C in Kelvin.
const T0_KELVIN: f32 = 298.15;
const KELVIN_OFFSET: f32 = 273.15;
/// Full scale of the 10-bit ADC.
pub const ADC_FULL_SCALE: u16 = 1023;

/// Convert a raw 10-bit sample to degrees Celsius.
pub fn celsius_from_raw(raw: u16) -> Result<f32, SensorError> {
    if raw == 0 || raw > ADC_FULL_SCALE {
        return Err(SensorError::OutOfRange(raw));
    }
    let r_ohms = R0_OHMS * (f32::from(ADC_FULL_SCALE) / f32::from(raw) - 1.0);
    let t_kelvin = 1.0 / ((r_ohms / R0_OHMS).ln() / B_COEFFICIENT + 1.0 / T0_KELVIN);
    Ok(t_kelvin - KELVIN_OFFSET)
}

/// Convert a raw sample into the requested scale.
pub fn reading_in(raw: u16, scale: Scale) -> Result<f32, SensorError> {
    let celsius = celsius_from_raw(raw)?;
    Ok(match scale {
        Scale::Celsius => celsius,
        Scale::Fahrenheit => celsius * 9.0 / 5.0 + 32.0,
    })
}
