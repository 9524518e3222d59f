use approx::assert_relative_eq;
use flyer::components::AircraftState;
use nalgebra::Vector3;

/// Assert that every number in the state is finite and the attitude is wrapped
#[track_caller]
pub fn assert_state_valid(state: &AircraftState) {
    assert!(
        state.position.iter().all(|x| x.is_finite()),
        "Position is not finite: {:?}",
        state.position
    );
    assert!(
        state.velocity.iter().all(|x| x.is_finite()),
        "Velocity is not finite: {:?}",
        state.velocity
    );
    assert!(
        state.body_rates.iter().all(|x| x.is_finite()),
        "Body rates are not finite: {:?}",
        state.body_rates
    );
    assert!(
        state.attitude.is_wrapped(),
        "Attitude outside [-pi, pi]: {:?}",
        state.attitude
    );
    assert!(
        (0.0..=1.0).contains(&state.controls.throttle()),
        "Throttle out of range"
    );
}

/// Assert that two vectors are approximately equal
#[track_caller]
pub fn assert_vector_eq(actual: &Vector3<f64>, expected: &Vector3<f64>, epsilon: f64) {
    assert_relative_eq!(actual.x, expected.x, epsilon = epsilon);
    assert_relative_eq!(actual.y, expected.y, epsilon = epsilon);
    assert_relative_eq!(actual.z, expected.z, epsilon = epsilon);
}
