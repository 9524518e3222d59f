use serde::{Deserialize, Serialize};

use crate::utils::deg_to_rad;

/// Lift and drag polar with a smoothed stall.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AeroCoefficients {
    /// Lift coefficient at zero angle of attack.
    pub c_l_0: f64,
    /// Lift curve slope (per radian).
    pub c_l_alpha: f64,
    /// Parasitic drag coefficient.
    pub c_d_0: f64,
    /// Induced drag factor.
    pub k_induced: f64,
    /// Angle of attack where lift starts to collapse (rad).
    pub alpha_stall: f64,
    /// Width of the stall fall-off (rad).
    pub stall_width: f64,
}

impl AeroCoefficients {
    pub fn light_ga() -> Self {
        Self {
            c_l_0: 0.2,
            c_l_alpha: 5.5,
            c_d_0: 0.02,
            k_induced: 0.045,
            alpha_stall: deg_to_rad(15.0),
            stall_width: deg_to_rad(5.0),
        }
    }
}

impl Default for AeroCoefficients {
    fn default() -> Self {
        Self::light_ga()
    }
}
