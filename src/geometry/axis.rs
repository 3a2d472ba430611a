use std::fmt::Display;

/// One of the two coordinate axes of the layout plane.
///
/// The partition pipeline runs the same sweep on both axes; `Axis` keeps the
/// per-axis code paths (indexing, bound extraction, error reporting) on a
/// shared vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
}

impl Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::X => write!(f, "x"),
            Self::Y => write!(f, "y"),
        }
    }
}
