use crate::components::AeroCoefficients;

/// Fraction of the linear lift that survives near stall.
///
/// A tanh step centred on the stall angle: close to 1 well below it, falling
/// smoothly to 0 over about one `stall_width` beyond it.
pub fn stall_factor(coef: &AeroCoefficients, alpha: f64) -> f64 {
    0.5 * (1.0 - ((alpha.abs() - coef.alpha_stall) / coef.stall_width).tanh())
}

/// Lift coefficient for angle of attack `alpha` (rad).
pub fn lift_coefficient(coef: &AeroCoefficients, alpha: f64) -> f64 {
    (coef.c_l_0 + coef.c_l_alpha * alpha) * stall_factor(coef, alpha)
}

/// Drag coefficient: parasitic plus induced (`K * CL^2`).
pub fn drag_coefficient(coef: &AeroCoefficients, alpha: f64) -> f64 {
    let c_l = lift_coefficient(coef, alpha);
    coef.c_d_0 + coef.k_induced * c_l * c_l
}

pub fn is_stalled(coef: &AeroCoefficients, alpha: f64) -> bool {
    alpha.abs() > coef.alpha_stall
}
