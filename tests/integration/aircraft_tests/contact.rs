use approx::assert_relative_eq;
use flyer::{
    components::ContactState,
    systems::{ContactTransition, CrashReason},
    utils::GRAVITY,
};

use crate::common::{
    approach_state, assert_state_valid, brake, full_deflection, runway_state, TestAppBuilder,
};

const DT: f64 = 1.0 / 60.0;

#[test]
fn test_gentle_touchdown_lands() {
    let mut app = TestAppBuilder::new()
        .with_initial_state(approach_state(0.01, 2.0, 40.0))
        .build();

    app.tick();

    let state = app.state();
    assert_eq!(state.contact, ContactState::OnGround);
    assert!(state.landed);
    assert!(!state.crashed);
    assert_eq!(state.velocity.z, 0.0);
    assert!(state.altitude() <= 0.0);
    assert_state_valid(state);
    assert_eq!(app.transitions(), vec![ContactTransition::Touchdown]);

    app.tick();
    assert_eq!(app.state().contact, ContactState::OnGround);
    assert_eq!(app.state().altitude(), 0.0);
}

#[test]
fn test_hard_touchdown_crashes() {
    let mut app = TestAppBuilder::new()
        .with_initial_state(approach_state(0.01, 8.0, 40.0))
        .build();

    app.tick();

    let state = app.state();
    assert!(state.crashed);
    assert!(!state.landed);
    assert!(matches!(
        app.transitions().as_slice(),
        [ContactTransition::Crash(CrashReason::SinkRate(_))]
    ));
}

#[test]
fn test_crashed_aircraft_falls_under_gravity_only() {
    let mut app = TestAppBuilder::new()
        .with_initial_state(approach_state(0.01, 8.0, 40.0))
        .build();
    app.tick();
    assert!(app.state().crashed);

    for _ in 0..10 {
        let before = app.state().clone();
        app.tick_with(full_deflection());
        let after = app.state();

        assert_relative_eq!(after.velocity.z, before.velocity.z + GRAVITY * DT, epsilon = 1e-9);
        assert_eq!(after.velocity.x, before.velocity.x);
        assert_eq!(after.velocity.y, before.velocity.y);
        assert_eq!(after.attitude, before.attitude);
        assert_eq!(after.body_rates, before.body_rates);
    }
}

#[test]
fn test_crash_is_terminal() {
    let mut app = TestAppBuilder::new()
        .with_initial_state(approach_state(0.01, 8.0, 40.0))
        .build();
    app.tick();

    let contact = app.state().contact;
    app.run_ticks_with(10, full_deflection());

    let state = app.state();
    assert!(state.crashed);
    assert!(!state.landed);
    assert_eq!(state.contact, contact);
    // Only the crash itself was reported
    assert_eq!(app.transitions().len(), 1);
}

#[test]
fn test_takeoff_from_runway() {
    let mut app = TestAppBuilder::new()
        .with_initial_state(runway_state(15.0, 0.8))
        .build();

    app.tick();

    let state = app.state();
    assert_eq!(state.contact, ContactState::Airborne);
    assert!(state.altitude() > 0.0);
    assert!(!state.crashed);
    assert_eq!(app.transitions(), vec![ContactTransition::Liftoff]);
}

#[test]
fn test_rollout_keeps_wheels_on_runway() {
    let mut app = TestAppBuilder::new()
        .with_initial_state(runway_state(20.0, 0.2))
        .build();

    for _ in 0..120 {
        app.tick();
        let state = app.state();
        assert_eq!(state.contact, ContactState::OnGround);
        assert_eq!(state.altitude(), 0.0);
        assert_eq!(state.velocity.z, 0.0);
    }
    assert!(app.transitions().is_empty());
}

#[test]
fn test_brake_slows_the_roll() {
    let mut rolling = TestAppBuilder::new()
        .with_initial_state(runway_state(20.0, 0.2))
        .build();
    let mut braking = TestAppBuilder::new()
        .with_initial_state(runway_state(20.0, 0.2))
        .build();

    rolling.run_ticks(60);
    braking.run_ticks_with(60, brake());

    assert!(braking.state().ground_speed() < rolling.state().ground_speed());
    assert!(braking.state().ground_speed() < 20.0);
}
