//! Line weight written into layer records

/// Line weight (group 370)
///
/// Explicit weights are in 1/100 mm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineWeight {
    ByLayer,
    ByBlock,
    /// Use the reader's default weight
    #[default]
    Default,
    Value(i16),
}

impl LineWeight {
    /// Raw group-code value
    pub fn value(&self) -> i16 {
        match self {
            LineWeight::ByLayer => -1,
            LineWeight::ByBlock => -2,
            LineWeight::Default => -3,
            LineWeight::Value(v) => *v,
        }
    }

    /// Line weight from a pen width in millimeters, rounded to 1/100 mm
    pub fn from_millimeters(mm: f64) -> Self {
        LineWeight::Value((mm * 100.0).round().clamp(0.0, 211.0) as i16)
    }
}
