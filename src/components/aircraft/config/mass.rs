use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

/// Mass and principal moments of inertia.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MassModel {
    /// Total mass of the aircraft (kg).
    pub mass: f64,
    /// Moment of inertia about the body x-axis, roll (kg·m²).
    pub ixx: f64,
    /// Moment of inertia about the body y-axis, pitch (kg·m²).
    pub iyy: f64,
    /// Moment of inertia about the body z-axis, yaw (kg·m²).
    pub izz: f64,
}

impl MassModel {
    /// Creates a new `MassModel` with the given mass and principal inertias.
    ///
    /// Products of inertia are not modelled; the rotational equations treat
    /// each body axis independently.
    pub fn new(mass: f64, ixx: f64, iyy: f64, izz: f64) -> Self {
        Self {
            mass,
            ixx,
            iyy,
            izz,
        }
    }

    /// Diagonal of the inertia tensor as `(Ix, Iy, Iz)`.
    pub fn inertia(&self) -> Vector3<f64> {
        Vector3::new(self.ixx, self.iyy, self.izz)
    }

    pub fn light_ga() -> Self {
        Self::new(1200.0, 1000.0, 1500.0, 2000.0)
    }
}
