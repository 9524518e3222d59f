use bevy::prelude::*;
use nalgebra::{Matrix3, Vector3};

use crate::components::{AirData, AircraftParameters, AircraftState, ControlInput, PhysicsComponent};
use crate::resources::{Environment, PhysicsConfig};
use crate::systems::aerodynamics::coefficients::{drag_coefficient, is_stalled, lift_coefficient};
use crate::utils::{
    floor_magnitude, normalize_or, MIN_AIRSPEED_THRESHOLD, MIN_DIRECTION_LENGTH,
    MIN_FORWARD_SPEED,
};

/// Everything the force calculation produces for one tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ForcesAndMoments {
    /// Total force, world frame (N).
    pub force: Vector3<f64>,
    /// Total moment, body frame (N m).
    pub moment: Vector3<f64>,
    /// Lift plus drag, world frame.
    pub aerodynamic_force: Vector3<f64>,
    /// Thrust, world frame.
    pub thrust_force: Vector3<f64>,
    /// Weight, world frame.
    pub weight_force: Vector3<f64>,
    pub air_data: AirData,
}

impl ForcesAndMoments {
    pub fn write_to(&self, physics: &mut PhysicsComponent) {
        physics.net_force = self.force;
        physics.net_moment = self.moment;
        physics.aerodynamic_force = self.aerodynamic_force;
        physics.thrust_force = self.thrust_force;
        physics.weight_force = self.weight_force;
    }
}

/// Air-relative flow quantities for the current state.
///
/// `alpha = atan2(-w, u)` and `beta = atan2(v, u)` on the body-frame
/// relative velocity, with `u` kept away from zero.
pub fn calculate_air_data(
    state: &AircraftState,
    params: &AircraftParameters,
    environment: &Environment,
) -> AirData {
    let wind = environment.wind_at(&state.position);
    let density = environment.density_at(&state.position);

    let relative_world = state.velocity - wind;
    let airspeed = relative_world.norm();
    let relative_body = state.attitude.body_to_world().transpose() * relative_world;

    let u = floor_magnitude(relative_body.x, MIN_FORWARD_SPEED);
    let alpha = (-relative_body.z).atan2(u);
    let beta = relative_body.y.atan2(u);

    AirData {
        true_airspeed: airspeed,
        alpha,
        beta,
        dynamic_pressure: 0.5 * density * airspeed * airspeed,
        density,
        relative_velocity: relative_body,
        wind_velocity: wind,
        stalled: is_stalled(&params.aero_coef, alpha),
    }
}

/// Lift and drag in the body frame.
fn aerodynamic_force_body(params: &AircraftParameters, air_data: &AirData) -> Vector3<f64> {
    let qs = air_data.dynamic_pressure * params.geometry.wing_area;
    let lift = lift_coefficient(&params.aero_coef, air_data.alpha) * qs;
    let drag = drag_coefficient(&params.aero_coef, air_data.alpha) * qs;

    let flow_direction = if air_data.true_airspeed > MIN_AIRSPEED_THRESHOLD {
        air_data.relative_velocity / air_data.true_airspeed
    } else {
        Vector3::x()
    };

    // Flow rotated about body Y, perpendicular in the x-z plane
    let lift_direction = normalize_or(
        Vector3::new(-flow_direction.z, 0.0, flow_direction.x),
        MIN_DIRECTION_LENGTH,
        Vector3::new(0.0, 0.0, -1.0),
    );
    let drag_direction = -flow_direction;

    lift_direction * lift + drag_direction * drag
}

/// Engine thrust along body +X. The brake subtracts a fixed share of the
/// maximum thrust, so braking at idle pushes backwards.
fn thrust_force_body(params: &AircraftParameters, throttle: f64, brake: bool) -> Vector3<f64> {
    let max_thrust = params.propulsion.max_thrust;
    let mut thrust = max_thrust * throttle;
    if brake {
        thrust -= max_thrust * params.propulsion.brake_thrust_fraction;
    }
    Vector3::new(thrust, 0.0, 0.0)
}

/// Control moments in the body frame with linear rate damping.
fn control_moment_body(
    state: &AircraftState,
    params: &AircraftParameters,
    air_data: &AirData,
) -> Vector3<f64> {
    let qs = air_data.dynamic_pressure * params.geometry.wing_area;
    let span = params.geometry.wing_span;
    let chord = params.chord();
    let control = &params.control;
    let surfaces = &state.controls;

    let roll = control.aileron * surfaces.aileron * qs * span * control.roll_scale;
    let pitch = control.elevator * surfaces.elevator * qs * chord * control.pitch_scale;
    let yaw = control.rudder * surfaces.rudder * qs * span * control.yaw_scale;

    Vector3::new(roll, pitch, yaw) - state.body_rates * control.rate_damping
}

/// Computes the world-frame force and body-frame moment acting on the aircraft.
///
/// Pure: reads the state, never mutates it. `_dt` is accepted so every
/// stage of a tick shares one signature.
pub fn assemble_forces_moments(
    state: &AircraftState,
    params: &AircraftParameters,
    environment: &Environment,
    brake: bool,
    _dt: f64,
) -> ForcesAndMoments {
    let air_data = calculate_air_data(state, params, environment);
    let body_to_world: Matrix3<f64> = state.attitude.body_to_world();

    let aerodynamic_force = body_to_world * aerodynamic_force_body(params, &air_data);
    let thrust_force =
        body_to_world * thrust_force_body(params, state.controls.throttle(), brake);
    let weight_force = Vector3::new(0.0, 0.0, params.weight());

    ForcesAndMoments {
        force: aerodynamic_force + thrust_force + weight_force,
        moment: control_moment_body(state, params, &air_data),
        aerodynamic_force,
        thrust_force,
        weight_force,
        air_data,
    }
}

/// Refreshes air data and net forces for every aircraft.
///
/// Crashed aircraft get fresh air data but no forces; the integrator
/// handles their free fall on its own.
pub fn force_calculator_system(
    mut query: Query<(
        &AircraftState,
        &AircraftParameters,
        &ControlInput,
        &mut AirData,
        &mut PhysicsComponent,
    )>,
    environment: Res<Environment>,
    config: Res<PhysicsConfig>,
) {
    for (state, params, input, mut air_data, mut physics) in query.iter_mut() {
        if state.crashed {
            *air_data = calculate_air_data(state, params, &environment);
            physics.clear_forces();
            continue;
        }

        let result =
            assemble_forces_moments(state, params, &environment, input.brake, config.timestep);
        *air_data = result.air_data;
        result.write_to(&mut physics);
    }
}
