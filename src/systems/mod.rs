pub mod aerodynamics;
pub mod contact;
mod controls;
pub mod physics;
mod step;
mod telemetry;

pub use aerodynamics::{
    assemble_forces_moments, calculate_air_data, drag_coefficient, force_calculator_system,
    is_stalled, lift_coefficient, ForcesAndMoments,
};
pub use contact::{
    ground_contact_system, resolve_ground_contact, ContactPhase, ContactTransition, CrashReason,
    GroundContactEvent,
};
pub use controls::{apply_control_input_system, reset_control_input_system};
pub use physics::{integrate_free_fall, integrate_state, physics_integrator_system};
pub use step::{FlightModel, TickReport};
pub use telemetry::{advance_clock_system, record_trail_system};
