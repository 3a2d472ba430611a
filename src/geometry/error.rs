use thiserror::Error;

/// Errors raised while constructing geometric primitives.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum GeometryError {
    #[error("rectangle has inverted bounds: ({llx}, {lly}) - ({urx}, {ury})")]
    InvertedRect {
        llx: f64,
        lly: f64,
        urx: f64,
        ury: f64,
    },

    #[error("rectangle '{name}' has inverted bounds: ({llx}, {lly}) - ({urx}, {ury})")]
    InvertedReach {
        name: String,
        llx: f64,
        lly: f64,
        urx: f64,
        ury: f64,
    },
}
