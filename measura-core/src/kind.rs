//! Quantity kinds - the explicit type tag used to key parsers

use std::fmt;
use serde::{Serialize, Serializer};

/// Identifies a physical quantity type at runtime.
///
/// Built-in kinds cover the standard quantity set. `Custom` lets downstream
/// crates register their own unit enums without touching this list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QuantityKind {
    Temperature,
    Pressure,
    Density,
    DynamicViscosity,
    KinematicViscosity,
    MassFlow,
    VolumetricFlow,
    RelativeHumidity,
    HumidityRatio,
    Angle,
    Mass,
    ThermalConductivity,
    SpecificHeat,
    Power,
    Velocity,
    Custom(&'static str),
}

impl QuantityKind {
    /// All built-in kinds, in declaration order
    pub const BUILT_IN: [QuantityKind; 15] = [
        QuantityKind::Temperature,
        QuantityKind::Pressure,
        QuantityKind::Density,
        QuantityKind::DynamicViscosity,
        QuantityKind::KinematicViscosity,
        QuantityKind::MassFlow,
        QuantityKind::VolumetricFlow,
        QuantityKind::RelativeHumidity,
        QuantityKind::HumidityRatio,
        QuantityKind::Angle,
        QuantityKind::Mass,
        QuantityKind::ThermalConductivity,
        QuantityKind::SpecificHeat,
        QuantityKind::Power,
        QuantityKind::Velocity,
    ];

    /// Human-readable name (e.g. "DynamicViscosity")
    pub fn name(&self) -> &'static str {
        match self {
            QuantityKind::Temperature => "Temperature",
            QuantityKind::Pressure => "Pressure",
            QuantityKind::Density => "Density",
            QuantityKind::DynamicViscosity => "DynamicViscosity",
            QuantityKind::KinematicViscosity => "KinematicViscosity",
            QuantityKind::MassFlow => "MassFlow",
            QuantityKind::VolumetricFlow => "VolumetricFlow",
            QuantityKind::RelativeHumidity => "RelativeHumidity",
            QuantityKind::HumidityRatio => "HumidityRatio",
            QuantityKind::Angle => "Angle",
            QuantityKind::Mass => "Mass",
            QuantityKind::ThermalConductivity => "ThermalConductivity",
            QuantityKind::SpecificHeat => "SpecificHeat",
            QuantityKind::Power => "Power",
            QuantityKind::Velocity => "Velocity",
            QuantityKind::Custom(name) => name,
        }
    }

    pub fn is_custom(&self) -> bool {
        matches!(self, QuantityKind::Custom(_))
    }

    /// Look up a built-in kind by name.
    ///
    /// Case, whitespace, `_` and `-` are ignored, so "mass flow",
    /// "mass_flow" and "MassFlow" all match.
    pub fn from_name(name: &str) -> Option<QuantityKind> {
        let wanted = normalize_name(name);
        Self::BUILT_IN
            .iter()
            .copied()
            .find(|kind| normalize_name(kind.name()) == wanted)
    }

    /// Whether `name` refers to this kind under the same loose matching
    /// rules as [`QuantityKind::from_name`]
    pub fn matches_name(&self, name: &str) -> bool {
        normalize_name(self.name()) == normalize_name(name)
    }
}

fn normalize_name(name: &str) -> String {
    name.chars()
        .filter(|c| !c.is_whitespace() && *c != '_' && *c != '-')
        .flat_map(char::to_lowercase)
        .collect()
}

impl fmt::Display for QuantityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for QuantityKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}
