//!
//! A single benchmark measurement.
//!

pub mod quantity;

use std::collections::BTreeMap;

use self::quantity::Quantity;

///
/// A single benchmark measurement.
///
/// Measurements have no identifier. Two of them are the same measurement if all
/// their fields are equal, including the unknown ones.
///
#[derive(Debug, Clone, PartialEq, serde::Deserialize)]
pub struct Measurement {
    /// The ASIC core voltage.
    #[serde(rename = "coreVoltage")]
    pub core_voltage: Quantity,
    /// The ASIC frequency.
    #[serde(rename = "frequency")]
    pub frequency: Quantity,
    /// The hash rate averaged over the sample.
    #[serde(rename = "averageHashRate")]
    pub average_hash_rate: Quantity,
    /// The chip temperature averaged over the sample.
    #[serde(rename = "averageTemperature")]
    pub average_temperature: Quantity,
    /// The energy efficiency in joules per terahash.
    #[serde(rename = "efficiencyJTH")]
    pub efficiency_jth: Quantity,
    /// The voltage regulator temperature averaged over the sample.
    #[serde(rename = "averageVRTemp")]
    pub average_vr_temp: Quantity,

    /// Fields not displayed in tables, but still taken into account when comparing.
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl Measurement {
    ///
    /// A shortcut constructor for measurements without extra fields.
    ///
    pub fn new(
        core_voltage: f64,
        frequency: f64,
        average_hash_rate: f64,
        average_temperature: f64,
        efficiency_jth: f64,
        average_vr_temp: f64,
    ) -> Self {
        Self {
            core_voltage: core_voltage.into(),
            frequency: frequency.into(),
            average_hash_rate: average_hash_rate.into(),
            average_temperature: average_temperature.into(),
            efficiency_jth: efficiency_jth.into(),
            average_vr_temp: average_vr_temp.into(),
            extra: BTreeMap::new(),
        }
    }
}
