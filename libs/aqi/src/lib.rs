//! AQI library
//!
//! This library converts raw particulate-matter concentrations (µg/m³) into
//! EPA Air Quality Index values and severity categories using the published
//! breakpoint tables. It supports both std and no_std environments, but is
//! best used on systems with hardware floating point support.

#![no_std]

#[cfg(feature = "std")]
extern crate std;

pub mod breakpoints;

pub use breakpoints::{
    Breakpoint, BreakpointTable, Category, Color, Pollutant, TableError, PM10_TABLE, PM2_5_TABLE,
};

/// The AQI computed for one concentration reading: the rounded index for
/// display, the matched category, and the unrounded interpolated value for
/// any further arithmetic.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AqiResult {
    pub index: u16,
    pub category: Category,
    pub exact: f32,
}

/// Why a concentration reading could not be converted to an AQI value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AqiError {
    /// The concentration was negative or non-finite.
    InvalidInput,
    /// The concentration exceeds the table's top breakpoint. Reported as a
    /// distinct outcome so it can never be mistaken for a valid category.
    OutOfRange { ceiling: f32 },
}

/// Calculate the AQI for the provided concentration value.
///
/// Scans the table in order and selects the first breakpoint whose inclusive
/// concentration range contains the value, then applies the EPA linear
/// interpolation formula:
///
/// `AQI = ((AQIhigh - AQIlow) / (Chigh - Clow)) * (C - Clow) + AQIlow`
///
/// Pure function of its inputs; safe to call concurrently. These values may
/// be confirmed using the calculator at
/// https://www.airnow.gov/aqi/aqi-calculator-concentration/
///
/// # Arguments
///
/// * `concentration` - The raw concentration from the sensor, in µg/m³
/// * `table` - The breakpoint table for the matching pollutant species
///
/// # Returns
///
/// The computed [`AqiResult`], or an [`AqiError`] when the concentration is
/// negative, non-finite, or above the table's ceiling.
///
/// # Examples
///
/// ```
/// use aqi::{compute, Category, Pollutant};
///
/// let result = compute(35.9, Pollutant::Pm2_5.table()).unwrap();
/// assert_eq!(result.index, 102);
/// assert_eq!(result.category, Category::UnhealthyForSensitiveGroups);
/// ```
pub fn compute(concentration: f32, table: &BreakpointTable) -> Result<AqiResult, AqiError> {
    if !concentration.is_finite() || concentration < 0.0 {
        return Err(AqiError::InvalidInput);
    }

    for bp in table.entries() {
        if concentration >= bp.concentration_low && concentration <= bp.concentration_high {
            let exact = ((bp.index_high - bp.index_low) as f32
                / (bp.concentration_high - bp.concentration_low))
                * (concentration - bp.concentration_low)
                + bp.index_low as f32;
            return Ok(AqiResult {
                index: libm::roundf(exact) as u16,
                category: bp.category,
                exact,
            });
        }
    }

    Err(AqiError::OutOfRange {
        ceiling: table.ceiling(),
    })
}
