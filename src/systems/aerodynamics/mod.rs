pub mod coefficients;
mod force_calculator;

pub use coefficients::{drag_coefficient, is_stalled, lift_coefficient, stall_factor};
pub use force_calculator::{
    assemble_forces_moments, calculate_air_data, force_calculator_system, ForcesAndMoments,
};
