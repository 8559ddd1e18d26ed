//! Rounding of coordinates for display, and angle text conversion.

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RoundingBehaviour {
    #[default]
    Round,
    Floor,
    Ceil,
}

impl RoundingBehaviour {
    /// Parse from a string name.
    pub fn from_name(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "round" => Some(Self::Round),
            "floor" => Some(Self::Floor),
            "ceil" => Some(Self::Ceil),
            _ => None,
        }
    }

    fn apply(&self, value: f64) -> f64 {
        match self {
            Self::Round => value.round(),
            Self::Floor => value.floor(),
            Self::Ceil => value.ceil(),
        }
    }
}

/// Round `value` to `max_fraction_digits` decimals.
///
/// Works on the decimal value: 28.55 floored to 2 digits is 28.55, even
/// though `28.55 * 100.0` is just below 2855.
pub fn round_coord(value: f64, behaviour: RoundingBehaviour, max_fraction_digits: u32) -> f64 {
    let factor = 10f64.powi(max_fraction_digits as i32);
    let scaled = value * factor;
    let nearest = scaled.round();
    let scaled = if (scaled - nearest).abs() <= f64::EPSILON * scaled.abs().max(1.0) * 4.0 {
        nearest
    } else {
        scaled
    };
    behaviour.apply(scaled) / factor
}

/// Radians given as text (`"100"`) to degrees. Numbers use [`f64::to_degrees`].
pub fn radians_to_degrees(text: &str) -> Option<f64> {
    text.trim().parse::<f64>().ok().map(f64::to_degrees)
}

/// Degrees given as text to radians. Numbers use [`f64::to_radians`].
pub fn degrees_to_radians(text: &str) -> Option<f64> {
    text.trim().parse::<f64>().ok().map(f64::to_radians)
}
