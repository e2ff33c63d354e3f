use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CatalogError;

/// Lowercase and drop separators so "Very good", "very_good" and
/// "VeryGood" compare equal.
fn normalize_label(s: &str) -> String {
    s.trim()
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '_' && *c != '-')
        .flat_map(char::to_lowercase)
        .collect()
}

/// Fuel type of a vehicle
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(try_from = "String")]
pub enum FuelType {
    Gasoline,
    Diesel,
    Hybrid,
    Electric,
}

impl FuelType {
    pub const ALL: [FuelType; 4] = [Self::Gasoline, Self::Diesel, Self::Hybrid, Self::Electric];

    /// Multiplier applied to the depreciated price.
    pub fn price_factor(self) -> f64 {
        match self {
            Self::Gasoline => 1.00,
            Self::Diesel => 0.98,
            Self::Hybrid => 1.05,
            Self::Electric => 1.04,
        }
    }

    /// Label used on the showroom site (Greek).
    pub fn local_label(self) -> &'static str {
        match self {
            Self::Gasoline => "Βενζίνη",
            Self::Diesel => "Diesel",
            Self::Hybrid => "Υβριδικό",
            Self::Electric => "Ηλεκτρικό",
        }
    }
}

impl fmt::Display for FuelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Gasoline => write!(f, "Gasoline"),
            Self::Diesel => write!(f, "Diesel"),
            Self::Hybrid => write!(f, "Hybrid"),
            Self::Electric => write!(f, "Electric"),
        }
    }
}

impl FromStr for FuelType {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_label(s).as_str() {
            "gasoline" | "petrol" | "βενζίνη" => Ok(Self::Gasoline),
            "diesel" => Ok(Self::Diesel),
            "hybrid" | "υβριδικό" => Ok(Self::Hybrid),
            "electric" | "ηλεκτρικό" => Ok(Self::Electric),
            _ => Err(CatalogError::UnknownLabel {
                kind: "fuel type",
                label: s.to_string(),
            }),
        }
    }
}

impl TryFrom<String> for FuelType {
    type Error = CatalogError;

    fn try_from(label: String) -> Result<Self, Self::Error> {
        label.parse()
    }
}

/// Gearbox type
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(try_from = "String")]
pub enum Transmission {
    Automatic,
    Manual,
}

impl Transmission {
    pub fn local_label(self) -> &'static str {
        match self {
            Self::Automatic => "Αυτόματο",
            Self::Manual => "Χειροκίνητο",
        }
    }
}

impl fmt::Display for Transmission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Automatic => write!(f, "Automatic"),
            Self::Manual => write!(f, "Manual"),
        }
    }
}

impl FromStr for Transmission {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_label(s).as_str() {
            "automatic" | "auto" | "αυτόματο" => Ok(Self::Automatic),
            "manual" | "χειροκίνητο" => Ok(Self::Manual),
            _ => Err(CatalogError::UnknownLabel {
                kind: "transmission",
                label: s.to_string(),
            }),
        }
    }
}

impl TryFrom<String> for Transmission {
    type Error = CatalogError;

    fn try_from(label: String) -> Result<Self, Self::Error> {
        label.parse()
    }
}

/// Overall condition, ordered best first
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(try_from = "String")]
pub enum Condition {
    Excellent,
    VeryGood,
    Good,
    Fair,
}

impl Condition {
    pub const ALL: [Condition; 4] = [Self::Excellent, Self::VeryGood, Self::Good, Self::Fair];

    /// Multiplier applied after the fuel factor.
    pub fn price_factor(self) -> f64 {
        match self {
            Self::Excellent => 1.06,
            Self::VeryGood => 1.02,
            Self::Good => 0.96,
            Self::Fair => 0.88,
        }
    }

    pub fn local_label(self) -> &'static str {
        match self {
            Self::Excellent => "Άριστη",
            Self::VeryGood => "Πολύ καλή",
            Self::Good => "Καλή",
            Self::Fair => "Μέτρια",
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Excellent => write!(f, "Excellent"),
            Self::VeryGood => write!(f, "Very good"),
            Self::Good => write!(f, "Good"),
            Self::Fair => write!(f, "Fair"),
        }
    }
}

impl FromStr for Condition {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_label(s).as_str() {
            "excellent" | "άριστη" => Ok(Self::Excellent),
            "verygood" | "πολύκαλή" => Ok(Self::VeryGood),
            "good" | "καλή" => Ok(Self::Good),
            "fair" | "μέτρια" => Ok(Self::Fair),
            _ => Err(CatalogError::UnknownLabel {
                kind: "condition",
                label: s.to_string(),
            }),
        }
    }
}

impl TryFrom<String> for Condition {
    type Error = CatalogError;

    fn try_from(label: String) -> Result<Self, Self::Error> {
        label.parse()
    }
}

/// A vehicle on the showroom floor
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VehicleRecord {
    pub id: u32,
    pub brand: String,
    pub model: String,
    pub year: i32,
    pub odometer_km: u32,
    pub fuel_type: FuelType,
    pub transmission: Transmission,
    pub horsepower: u32,
    pub condition: Condition,
    pub list_price: f64,
    pub tag: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn fuel_type_parses_english_and_local_labels() {
        assert_eq!("Hybrid".parse::<FuelType>().unwrap(), FuelType::Hybrid);
        assert_eq!("Υβριδικό".parse::<FuelType>().unwrap(), FuelType::Hybrid);
        assert_eq!(" petrol ".parse::<FuelType>().unwrap(), FuelType::Gasoline);
        assert_eq!("ΗΛΕΚΤΡΙΚΌ".parse::<FuelType>().unwrap(), FuelType::Electric);
    }

    #[test]
    fn condition_parses_separated_forms() {
        for label in ["VeryGood", "very good", "very_good", "Πολύ καλή"] {
            assert_eq!(label.parse::<Condition>().unwrap(), Condition::VeryGood, "{label}");
        }
    }

    #[test]
    fn unknown_label_is_rejected() {
        assert_matches!(
            "Steam".parse::<FuelType>(),
            Err(CatalogError::UnknownLabel { kind: "fuel type", .. })
        );
        assert_matches!(
            "CVT".parse::<Transmission>(),
            Err(CatalogError::UnknownLabel { kind: "transmission", .. })
        );
    }

    #[test]
    fn deserializes_any_accepted_label() {
        let fuel: FuelType = serde_json::from_str(r#""Υβριδικό""#).unwrap();
        let condition: Condition = serde_json::from_str(r#""Very good""#).unwrap();
        let transmission: Transmission = serde_json::from_str(r#""Χειροκίνητο""#).unwrap();
        assert_eq!(fuel, FuelType::Hybrid);
        assert_eq!(condition, Condition::VeryGood);
        assert_eq!(transmission, Transmission::Manual);

        assert!(serde_json::from_str::<FuelType>(r#""Steam""#).is_err());
        assert_eq!(serde_json::to_string(&Condition::VeryGood).unwrap(), r#""VeryGood""#);
    }

    #[test]
    fn local_labels_round_trip_through_from_str() {
        for fuel in FuelType::ALL {
            assert_eq!(fuel.local_label().parse::<FuelType>().unwrap(), fuel);
        }
        for condition in Condition::ALL {
            assert_eq!(condition.local_label().parse::<Condition>().unwrap(), condition);
        }
    }

    #[test]
    fn conditions_order_best_first() {
        assert!(Condition::Excellent < Condition::VeryGood);
        assert!(Condition::Good < Condition::Fair);
    }

    #[test]
    fn coefficient_tables() {
        assert_eq!(FuelType::Diesel.price_factor(), 0.98);
        assert_eq!(FuelType::Electric.price_factor(), 1.04);
        assert_eq!(Condition::Fair.price_factor(), 0.88);
        assert_eq!(Condition::VeryGood.price_factor(), 1.02);
    }
}
