//! Computations over several validated quantities
//!
//! Every input is checked before anything is computed; all failures are
//! reported together.

use measura_core::prelude::*;

use crate::density::{Density, DensityUnit};
use crate::flow::{MassFlow, MassFlowUnit, VolumetricFlow, VolumetricFlowUnit};
use crate::viscosity::{DynamicViscosity, KinematicViscosity, KinematicViscosityUnit};

/// Smallest density accepted as a divisor, in kg/m³
pub const MIN_DENSITY_KG_PER_M3: f64 = 1e-6;

fn min_density() -> Density {
    Density::new(MIN_DENSITY_KG_PER_M3, DensityUnit::KilogramPerCubicMeter)
}

fn require_density(density: Option<Density>) -> Validated<Density> {
    require_non_null(density, "Density").and_then(|rho| require_not_exceed_minimum(rho, min_density()))
}

/// ν = μ / ρ
pub fn kinematic_viscosity(
    dynamic: Option<DynamicViscosity>,
    density: Option<Density>,
) -> Validated<KinematicViscosity> {
    zip(
        require_non_null(dynamic, "DynamicViscosity").and_then(require_positive),
        require_density(density),
    )
    .map(|(mu, rho)| {
        KinematicViscosity::new(
            mu.base_value() / rho.base_value(),
            KinematicViscosityUnit::SquareMeterPerSecond,
        )
    })
}

/// ṁ = V̇ · ρ
pub fn mass_flow_from_volumetric(flow: Option<VolumetricFlow>, density: Option<Density>) -> Validated<MassFlow> {
    zip(
        require_non_null(flow, "VolumetricFlow").and_then(require_positive),
        require_density(density),
    )
    .map(|(flow, rho)| MassFlow::new(flow.base_value() * rho.base_value(), MassFlowUnit::KilogramPerSecond))
}

/// V̇ = ṁ / ρ
pub fn volumetric_flow_from_mass(flow: Option<MassFlow>, density: Option<Density>) -> Validated<VolumetricFlow> {
    zip(
        require_non_null(flow, "MassFlow").and_then(require_positive),
        require_density(density),
    )
    .map(|(flow, rho)| {
        VolumetricFlow::new(
            flow.base_value() / rho.base_value(),
            VolumetricFlowUnit::CubicMeterPerSecond,
        )
    })
}
