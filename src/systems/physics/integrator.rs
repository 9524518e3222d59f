use bevy::prelude::*;
use nalgebra::Vector3;

use crate::components::{AircraftParameters, AircraftState, Attitude, PhysicsComponent};
use crate::resources::PhysicsConfig;
use crate::utils::{floor_magnitude, MIN_COS_PITCH};

/// Advances the aircraft by one fixed step.
///
/// Semi-implicit Euler: velocity first, then position with the new velocity.
/// Body rates are integrated from the moment and the Euler angles follow
/// from the updated rates, each wrapped to [-pi, pi].
///
/// # Arguments
/// - `force`: total force in the world frame.
/// - `moment`: total moment in the body frame.
pub fn integrate_state(
    state: &mut AircraftState,
    params: &AircraftParameters,
    force: &Vector3<f64>,
    moment: &Vector3<f64>,
    dt: f64,
) {
    let acceleration = force / params.mass.mass;
    state.velocity += acceleration * dt;
    state.position += state.velocity * dt;

    let rate_dot = moment.component_div(&params.mass.inertia());
    state.body_rates += rate_dot * dt;

    state.attitude = integrate_attitude(&state.attitude, &state.body_rates, dt);
}

/// Euler-angle kinematics for one step.
fn integrate_attitude(attitude: &Attitude, body_rates: &Vector3<f64>, dt: f64) -> Attitude {
    let (p, q, r) = (body_rates.x, body_rates.y, body_rates.z);
    let (sin_phi, cos_phi) = attitude.roll.sin_cos();
    let (sin_theta, cos_theta) = attitude.pitch.sin_cos();
    let tan_theta = sin_theta / floor_magnitude(cos_theta, MIN_COS_PITCH);
    // Yaw divides by |cos(theta)| so its sign holds past vertical
    let cos_guard = cos_theta.abs().max(MIN_COS_PITCH);

    let phi_dot = p + q * sin_phi * tan_theta + r * cos_phi * tan_theta;
    let theta_dot = q * cos_phi - r * sin_phi;
    let psi_dot = (q * sin_phi + r * cos_phi) / cos_guard;

    Attitude::new(
        attitude.roll + phi_dot * dt,
        attitude.pitch + theta_dot * dt,
        attitude.yaw + psi_dot * dt,
    )
}

/// Gravity-only motion for a crashed aircraft. Attitude and rates are frozen.
pub fn integrate_free_fall(state: &mut AircraftState, gravity: f64, dt: f64) {
    state.velocity.z += gravity * dt;
    state.position += state.velocity * dt;
}

/// System to integrate the net forces of every aircraft over one timestep.
pub fn physics_integrator_system(
    mut query: Query<(&PhysicsComponent, &AircraftParameters, &mut AircraftState)>,
    config: Res<PhysicsConfig>,
) {
    let dt = config.timestep;

    for (physics, params, mut state) in query.iter_mut() {
        if state.crashed {
            integrate_free_fall(&mut state, params.gravity, dt);
        } else {
            integrate_state(
                &mut state,
                params,
                &physics.net_force,
                &physics.net_moment,
                dt,
            );
        }
    }
}
