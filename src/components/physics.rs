use bevy::prelude::*;
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

/// Forces and moments acting on an aircraft for the current tick.
///
/// Written by the force calculation, read by the integrator. Forces are in
/// the world (NED) frame; the moment is in the body frame.
#[derive(Component, Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PhysicsComponent {
    pub net_force: Vector3<f64>,
    pub net_moment: Vector3<f64>,
    /// Lift plus drag, world frame.
    pub aerodynamic_force: Vector3<f64>,
    /// Engine thrust, world frame.
    pub thrust_force: Vector3<f64>,
    /// Weight, world frame.
    pub weight_force: Vector3<f64>,
}

impl Default for PhysicsComponent {
    fn default() -> Self {
        Self {
            net_force: Vector3::zeros(),
            net_moment: Vector3::zeros(),
            aerodynamic_force: Vector3::zeros(),
            thrust_force: Vector3::zeros(),
            weight_force: Vector3::zeros(),
        }
    }
}

impl PhysicsComponent {
    pub fn clear_forces(&mut self) {
        *self = Self::default();
    }
}
