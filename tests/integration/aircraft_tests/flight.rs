use approx::assert_relative_eq;
use flyer::{
    components::{AircraftParameters, ControlInput, ThrottleCommand},
    resources::{Environment, GroundContactConfig, PhysicsConfig},
    systems::FlightModel,
};
use nalgebra::Vector3;
use pretty_assertions::assert_eq;

use crate::common::{assert_state_valid, assert_vector_eq, TestAppBuilder};

const DT: f64 = 1.0 / 60.0;

#[test]
fn test_default_flight_stays_finite() {
    let mut app = TestAppBuilder::new().build();

    for _ in 0..600 {
        app.tick();
        assert_state_valid(app.state());
    }
}

#[test]
fn test_aircraft_flies_forward() {
    let mut app = TestAppBuilder::new().build();
    let start = app.state().position;

    app.run_ticks(60);

    assert!(app.state().position.x > start.x + 30.0);
    assert!(app.state().velocity.x > 0.0);
}

#[test]
fn test_input_is_consumed_by_tick() {
    let mut app = TestAppBuilder::new().build();

    app.tick_with(ControlInput::neutral().with_surfaces(1.0, -0.5, 0.25));
    assert_eq!(app.state().controls.elevator, 1.0);
    assert_eq!(app.state().controls.aileron, -0.5);
    assert_eq!(*app.input(), ControlInput::neutral());

    app.tick();
    assert_eq!(app.state().controls.elevator, 0.0);
    assert_eq!(app.state().controls.aileron, 0.0);
    assert_eq!(app.state().controls.rudder, 0.0);
}

#[test]
fn test_throttle_rate_and_clamp() {
    let mut app = TestAppBuilder::new().build();
    assert_eq!(app.state().controls.throttle(), 0.5);

    let throttle_up = ControlInput::neutral().with_throttle(ThrottleCommand::increase());
    app.run_ticks_with(30, throttle_up);
    assert_relative_eq!(app.state().controls.throttle(), 0.8, epsilon = 1e-9);

    app.run_ticks_with(60, throttle_up);
    assert_eq!(app.state().controls.throttle(), 1.0);

    let throttle_down = ControlInput::neutral().with_throttle(ThrottleCommand::decrease());
    app.run_ticks_with(60, throttle_down);
    assert_relative_eq!(app.state().controls.throttle(), 0.4, epsilon = 1e-9);

    // Holding leaves it where it is
    let held = app.state().controls.throttle();
    app.run_ticks(10);
    assert_eq!(app.state().controls.throttle(), held);

    app.tick_with(ControlInput::neutral().with_throttle(ThrottleCommand::Absolute(-3.0)));
    assert_eq!(app.state().controls.throttle(), 0.0);
}

#[test]
fn test_elevator_pitches_nose_up() {
    let mut app = TestAppBuilder::new().build();
    let start_pitch = app.state().attitude.pitch;

    app.run_ticks_with(30, ControlInput::neutral().with_surfaces(1.0, 0.0, 0.0));

    assert!(app.state().body_rates.y > 0.0);
    assert!(app.state().attitude.pitch > start_pitch);
}

#[test]
fn test_aileron_rolls_right() {
    let mut app = TestAppBuilder::new().build();

    app.run_ticks_with(30, ControlInput::neutral().with_surfaces(0.0, 1.0, 0.0));

    assert!(app.state().body_rates.x > 0.0);
    assert!(app.state().attitude.roll > 0.0);
}

#[test]
fn test_headwind_raises_airspeed() {
    let mut app = TestAppBuilder::new()
        .with_environment(Environment::default().with_wind(Vector3::new(-10.0, 0.0, 0.0)))
        .build();

    app.tick();

    assert_relative_eq!(app.air_data().true_airspeed, 50.0, epsilon = 1e-9);
    assert_vector_eq(
        &app.air_data().wind_velocity,
        &Vector3::new(-10.0, 0.0, 0.0),
        1e-12,
    );

    // Swapping the environment between ticks takes effect on the next one
    app.set_environment(Environment::default());
    let ground_velocity = app.state().velocity;
    app.tick();
    assert_relative_eq!(app.air_data().true_airspeed, ground_velocity.norm(), epsilon = 1e-9);
}

#[test]
fn test_clock_and_trail() {
    let physics = PhysicsConfig {
        trail_capacity: 50,
        ..Default::default()
    };
    let mut app = TestAppBuilder::new().with_physics(physics).build();

    app.run_ticks(90);

    let clock = app.clock();
    assert_eq!(clock.ticks, 90);
    assert_relative_eq!(clock.elapsed, 90.0 * DT, epsilon = 1e-9);

    let trail = app.trail();
    assert_eq!(trail.len(), 50);
    let latest = trail.latest().expect("trail should not be empty");
    assert_relative_eq!(latest.time, clock.elapsed);
    assert_eq!(latest.position, app.state().position);
    assert_eq!(latest.airspeed, app.air_data().true_airspeed);

    let oldest = trail.iter().next().expect("trail should not be empty");
    assert_relative_eq!(oldest.time, 41.0 * DT, epsilon = 1e-9);
}

#[test]
fn test_ecs_pipeline_matches_flight_model() {
    let input = ControlInput::neutral()
        .with_throttle(ThrottleCommand::Rate(0.6))
        .with_surfaces(0.3, -0.2, 0.1);
    let environment = Environment::default().with_wind(Vector3::new(2.0, -1.0, 0.0));

    let mut app = TestAppBuilder::new()
        .with_environment(environment)
        .build();
    let model = FlightModel::new(
        AircraftParameters::light_ga(),
        GroundContactConfig::default(),
        &PhysicsConfig::default(),
    )
    .expect("light GA is valid");
    let mut state = app.state().clone();

    for _ in 0..240 {
        app.tick_with(input);
        model.step(&mut state, &input, &environment);
    }

    assert_eq!(app.state(), &state);
}
