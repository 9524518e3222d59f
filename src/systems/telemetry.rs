use bevy::prelude::*;

use crate::components::{AirData, AircraftSnapshot, AircraftState, FlightTrail};
use crate::resources::{PhysicsConfig, SimulationClock};

pub fn advance_clock_system(mut clock: ResMut<SimulationClock>, config: Res<PhysicsConfig>) {
    clock.advance(config.timestep);
}

/// Samples each aircraft once per tick into its trail.
pub fn record_trail_system(
    mut query: Query<(&AircraftState, &AirData, &mut FlightTrail)>,
    clock: Res<SimulationClock>,
) {
    for (state, air_data, mut trail) in query.iter_mut() {
        let snapshot = AircraftSnapshot::capture(clock.elapsed, state, air_data);
        trace!(
            "t={:.3} alt={:.2} tas={:.1}kt",
            snapshot.time,
            snapshot.altitude,
            air_data.airspeed_knots()
        );
        trail.push(snapshot);
    }
}
