use serde::{Deserialize, Serialize};

/// Reading returned by `GET /battery`.
///
/// The device reports `{"voltage":null}` when it has no battery monitor.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
pub struct BatteryReading {
	/// Battery voltage in Volts.
	#[serde(default)]
	pub voltage: Option<f64>,
}

/// Text shown in place of a voltage that could not be read.
pub const VOLTAGE_PLACEHOLDER: &str = "-- V";

/// Renders a voltage with two decimals, e.g. `3.70 V`.
pub fn display_voltage(voltage: Option<f64>) -> String {
	match voltage {
		Some(volts) if volts.is_finite() => format!("{volts:.2} V"),
		_ => VOLTAGE_PLACEHOLDER.into(),
	}
}

impl BatteryReading {
	pub fn display(&self) -> String {
		display_voltage(self.voltage)
	}
}

#[cfg(test)]
mod tests {
	use super::{display_voltage, BatteryReading};

	#[test]
	fn renders_two_decimals() {
		assert_eq!(display_voltage(Some(3.7)), "3.70 V");
		assert_eq!(display_voltage(Some(4.196)), "4.20 V");
		assert_eq!(display_voltage(Some(0.0)), "0.00 V");
	}

	#[test]
	fn missing_voltage_renders_placeholder() {
		assert_eq!(display_voltage(None), "-- V");
		assert_eq!(display_voltage(Some(f64::NAN)), "-- V");

		let reading: BatteryReading = serde_json::from_str(r#"{"voltage":null}"#).unwrap();
		assert_eq!(reading.display(), "-- V");

		let reading: BatteryReading = serde_json::from_str("{}").unwrap();
		assert_eq!(reading.display(), "-- V");
	}

	#[test]
	fn non_numeric_voltage_is_rejected() {
		assert!(serde_json::from_str::<BatteryReading>(r#"{"voltage":"3.7"}"#).is_err());
	}
}
