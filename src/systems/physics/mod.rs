mod integrator;

pub use integrator::{integrate_free_fall, integrate_state, physics_integrator_system};
