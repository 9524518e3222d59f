use bevy::prelude::*;
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

use crate::components::{AirData, AircraftState, Attitude, ContactState};

/// Read-only view of an aircraft after a tick, for HUDs, maps and logs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AircraftSnapshot {
    /// Simulated time at the end of the tick (s).
    pub time: f64,
    pub position: Vector3<f64>,
    pub altitude: f64,
    pub attitude: Attitude,
    pub velocity: Vector3<f64>,
    pub body_rates: Vector3<f64>,
    pub throttle: f64,
    pub contact: ContactState,
    pub landed: bool,
    pub crashed: bool,
    pub airspeed: f64,
    pub alpha: f64,
    pub stalled: bool,
}

impl AircraftSnapshot {
    pub fn capture(time: f64, state: &AircraftState, air_data: &AirData) -> Self {
        Self {
            time,
            position: state.position,
            altitude: state.altitude(),
            attitude: state.attitude,
            velocity: state.velocity,
            body_rates: state.body_rates,
            throttle: state.controls.throttle(),
            contact: state.contact,
            landed: state.landed,
            crashed: state.crashed,
            airspeed: air_data.true_airspeed,
            alpha: air_data.alpha,
            stalled: air_data.stalled,
        }
    }
}

/// Bounded history of snapshots. Oldest samples are dropped once full.
#[derive(Component, Debug, Clone, Serialize, Deserialize)]
pub struct FlightTrail {
    capacity: usize,
    samples: VecDeque<AircraftSnapshot>,
}

impl Default for FlightTrail {
    fn default() -> Self {
        Self::with_capacity(1000)
    }
}

impl FlightTrail {
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            capacity,
            samples: VecDeque::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, snapshot: AircraftSnapshot) {
        if self.samples.len() == self.capacity {
            self.samples.pop_front();
        }
        self.samples.push_back(snapshot);
    }

    pub fn latest(&self) -> Option<&AircraftSnapshot> {
        self.samples.back()
    }

    /// Oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &AircraftSnapshot> {
        self.samples.iter()
    }

    /// Newest first, the order a trail renderer draws in.
    pub fn iter_recent(&self) -> impl Iterator<Item = &AircraftSnapshot> {
        self.samples.iter().rev()
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
