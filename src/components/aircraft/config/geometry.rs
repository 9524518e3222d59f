use serde::{Deserialize, Serialize};

/// Configuration for the geometry of an aircraft.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AircraftGeometry {
    /// The total wing area of the aircraft (m²).
    pub wing_area: f64,
    /// The wingspan of the aircraft (m).
    pub wing_span: f64,
}

impl AircraftGeometry {
    /// Creates a new `AircraftGeometry` instance with the specified parameters.
    ///
    /// # Arguments
    /// * `wing_area` - The total wing area of the aircraft (m²).
    /// * `wing_span` - The wing span of the aircraft (m).
    pub fn new(wing_area: f64, wing_span: f64) -> Self {
        AircraftGeometry {
            wing_area,
            wing_span,
        }
    }

    /// Mean chord, taken as wing area over span (m).
    pub fn chord(&self) -> f64 {
        self.wing_area / self.wing_span
    }

    pub fn light_ga() -> Self {
        Self::new(16.2, 10.0)
    }
}
