//! # Temperature Units
//!
//! The closed set of scales the converter understands.
//!
//! A unit is a pure label: no magnitude, no lifecycle. The arithmetic
//! lives in [`convert`](crate::core::convert); this module only names
//! the scales and maps them to and from their labels.

/// One of the three supported temperature scales
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TemperatureUnit {
    /// Degrees Fahrenheit
    Fahrenheit,
    /// Degrees Celsius - the pivot unit all conversions route through
    Celsius,
    /// Kelvin
    Kelvin,
}

impl TemperatureUnit {
    /// Every unit, in picker order
    pub const ALL: [TemperatureUnit; 3] = [
        TemperatureUnit::Fahrenheit,
        TemperatureUnit::Celsius,
        TemperatureUnit::Kelvin,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TemperatureUnit::Fahrenheit => "Fahrenheit",
            TemperatureUnit::Celsius => "Celsius",
            TemperatureUnit::Kelvin => "Kelvin",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "fahrenheit" | "f" => Some(TemperatureUnit::Fahrenheit),
            "celsius" | "c" => Some(TemperatureUnit::Celsius),
            "kelvin" | "k" => Some(TemperatureUnit::Kelvin),
            _ => None,
        }
    }
}

impl std::fmt::Display for TemperatureUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_labels() {
        assert_eq!(TemperatureUnit::Fahrenheit.as_str(), "Fahrenheit");
        assert_eq!(TemperatureUnit::Celsius.as_str(), "Celsius");
        assert_eq!(TemperatureUnit::Kelvin.as_str(), "Kelvin");
    }

    #[test]
    fn test_unit_from_str() {
        assert_eq!(
            TemperatureUnit::from_str("Fahrenheit"),
            Some(TemperatureUnit::Fahrenheit)
        );
        assert_eq!(
            TemperatureUnit::from_str("celsius"),
            Some(TemperatureUnit::Celsius)
        );
        assert_eq!(TemperatureUnit::from_str("K"), Some(TemperatureUnit::Kelvin));
        assert_eq!(TemperatureUnit::from_str("f"), Some(TemperatureUnit::Fahrenheit));
    }

    #[test]
    fn test_unit_from_str_unknown() {
        assert_eq!(TemperatureUnit::from_str("Rankine"), None);
        assert_eq!(TemperatureUnit::from_str(""), None);
    }

    #[test]
    fn test_unit_label_round_trip() {
        for unit in TemperatureUnit::ALL {
            assert_eq!(TemperatureUnit::from_str(unit.as_str()), Some(unit));
        }
    }

    #[test]
    fn test_unit_picker_order() {
        assert_eq!(TemperatureUnit::ALL[0], TemperatureUnit::Fahrenheit);
        assert_eq!(TemperatureUnit::ALL[1], TemperatureUnit::Celsius);
        assert_eq!(TemperatureUnit::ALL[2], TemperatureUnit::Kelvin);
    }

    #[test]
    fn test_unit_display() {
        assert_eq!(format!("{}", TemperatureUnit::Kelvin), "Kelvin");
    }
}
