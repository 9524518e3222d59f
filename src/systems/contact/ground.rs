use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::components::{AirData, AircraftState, ContactState};
use crate::resources::GroundContactConfig;
use crate::utils::rad_to_deg;

/// The four logical situations the ground contact logic distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactPhase {
    /// Terminal, nothing to resolve.
    Crashed,
    /// Flying above the ground plane.
    Airborne,
    /// Flying but at or below the ground plane this tick.
    Touchdown,
    /// Rolling on the runway.
    OnGround,
}

impl ContactPhase {
    pub fn classify(state: &AircraftState) -> Self {
        if state.crashed {
            return ContactPhase::Crashed;
        }
        match state.contact {
            ContactState::OnGround => ContactPhase::OnGround,
            ContactState::Airborne if state.altitude() <= 0.0 => ContactPhase::Touchdown,
            ContactState::Airborne => ContactPhase::Airborne,
        }
    }
}

/// First limit exceeded on a touchdown that ended in a crash.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum CrashReason {
    /// Sink rate (m/s).
    SinkRate(f64),
    /// Airspeed (m/s).
    Airspeed(f64),
    /// Bank angle (rad).
    BankAngle(f64),
}

impl fmt::Display for CrashReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CrashReason::SinkRate(v) => write!(f, "sink rate {:.1} m/s", v),
            CrashReason::Airspeed(v) => write!(f, "airspeed {:.1} m/s", v),
            CrashReason::BankAngle(rad) => write!(f, "bank angle {:.1} deg", rad_to_deg(*rad)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ContactTransition {
    Touchdown,
    Crash(CrashReason),
    Liftoff,
}

/// Sent whenever an aircraft lands, crashes or leaves the ground.
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct GroundContactEvent {
    pub entity: Entity,
    pub transition: ContactTransition,
}

fn crash_reason(
    state: &AircraftState,
    airspeed: f64,
    config: &GroundContactConfig,
) -> Option<CrashReason> {
    let sink_rate = state.sink_rate();
    let bank = state.attitude.roll;

    if sink_rate > config.max_sink_rate {
        Some(CrashReason::SinkRate(sink_rate))
    } else if airspeed > config.max_touchdown_airspeed {
        Some(CrashReason::Airspeed(airspeed))
    } else if bank.abs() > config.max_bank_angle {
        Some(CrashReason::BankAngle(bank))
    } else {
        None
    }
}

/// Applies the ground rules to an integrated state.
///
/// `airspeed` is the true airspeed the forces for this tick were computed
/// with. Returns the transition that happened, if any.
pub fn resolve_ground_contact(
    state: &mut AircraftState,
    airspeed: f64,
    config: &GroundContactConfig,
) -> Option<ContactTransition> {
    match ContactPhase::classify(state) {
        ContactPhase::Crashed | ContactPhase::Airborne => None,
        ContactPhase::Touchdown => {
            if let Some(reason) = crash_reason(state, airspeed, config) {
                state.crashed = true;
                return Some(ContactTransition::Crash(reason));
            }

            state.contact = ContactState::OnGround;
            state.landed = true;
            state.velocity.z = 0.0;
            state.velocity.x *= config.touchdown_speed_factor;
            state.velocity.y *= config.touchdown_speed_factor;
            Some(ContactTransition::Touchdown)
        }
        ContactPhase::OnGround => {
            state.set_altitude(0.0);
            state.velocity.z = 0.0;
            state.velocity.x *= config.rolling_friction_factor;
            state.velocity.y *= config.rolling_friction_factor;

            if state.controls.throttle() > config.takeoff_throttle
                && state.ground_speed() > config.takeoff_ground_speed
            {
                state.contact = ContactState::Airborne;
                state.set_altitude(config.liftoff_altitude);
                Some(ContactTransition::Liftoff)
            } else {
                None
            }
        }
    }
}

pub fn ground_contact_system(
    mut query: Query<(Entity, &mut AircraftState, &AirData, Option<&Name>)>,
    config: Res<GroundContactConfig>,
    mut events: EventWriter<GroundContactEvent>,
) {
    for (entity, mut state, air_data, name) in query.iter_mut() {
        let Some(transition) = resolve_ground_contact(&mut state, air_data.true_airspeed, &config)
        else {
            continue;
        };

        let label = name.map(|n| n.as_str()).unwrap_or("aircraft");
        match transition {
            ContactTransition::Touchdown => info!(
                "{} touched down at {:.1} m/s ground speed",
                label,
                state.ground_speed()
            ),
            ContactTransition::Liftoff => info!("{} lifted off", label),
            ContactTransition::Crash(reason) => warn!("{} crashed: {}", label, reason),
        }

        events.send(GroundContactEvent { entity, transition });
    }
}
