//! Axis-aligned rectangles: the plain box and the named pin-reach region.

use std::fmt::Display;
use std::hash::{Hash, Hasher};

use qtty::{Quantity, Unit};

use super::axis::Axis;
use super::error::GeometryError;
use super::span::Span;
use crate::SinkName;

/// Axis-aligned box `(llx, lly) - (urx, ury)`.
///
/// Validated at construction: `llx <= urx` and `lly <= ury` always hold for
/// a live value. Rectangles are immutable for the duration of a run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect<U: Unit> {
    llx: Quantity<U>,
    lly: Quantity<U>,
    urx: Quantity<U>,
    ury: Quantity<U>,
}

impl<U: Unit> Rect<U> {
    /// Creates a rectangle, rejecting inverted bounds.
    pub fn new(
        llx: Quantity<U>,
        lly: Quantity<U>,
        urx: Quantity<U>,
        ury: Quantity<U>,
    ) -> Result<Self, GeometryError> {
        if llx.value() > urx.value() || lly.value() > ury.value() {
            return Err(GeometryError::InvertedRect {
                llx: llx.value(),
                lly: lly.value(),
                urx: urx.value(),
                ury: ury.value(),
            });
        }
        Ok(Self { llx, lly, urx, ury })
    }

    pub fn from_f64(llx: f64, lly: f64, urx: f64, ury: f64) -> Result<Self, GeometryError> {
        Self::new(
            Quantity::<U>::new(llx),
            Quantity::<U>::new(lly),
            Quantity::<U>::new(urx),
            Quantity::<U>::new(ury),
        )
    }

    pub const fn llx(&self) -> Quantity<U> {
        self.llx
    }

    pub const fn lly(&self) -> Quantity<U> {
        self.lly
    }

    pub const fn urx(&self) -> Quantity<U> {
        self.urx
    }

    pub const fn ury(&self) -> Quantity<U> {
        self.ury
    }

    pub fn width(&self) -> Quantity<U> {
        self.urx - self.llx
    }

    pub fn height(&self) -> Quantity<U> {
        self.ury - self.lly
    }

    /// Area as a raw scalar, `(urx - llx) * (ury - lly)`.
    pub fn area(&self) -> f64 {
        self.width().value() * self.height().value()
    }

    /// Projection of the box onto the given axis.
    pub fn span(&self, axis: Axis) -> Span<U> {
        match axis {
            Axis::X => Span::new(self.llx, self.urx),
            Axis::Y => Span::new(self.lly, self.ury),
        }
    }

    /// Intersection of two boxes, or `None` if they are disjoint on either
    /// axis. Touching boxes yield a degenerate (zero-area) rectangle.
    pub fn intersection(&self, other: &Rect<U>) -> Option<Rect<U>> {
        let x = self.span(Axis::X).intersection(&other.span(Axis::X))?;
        let y = self.span(Axis::Y).intersection(&other.span(Axis::Y))?;
        Some(Self {
            llx: x.lo(),
            lly: y.lo(),
            urx: x.hi(),
            ury: y.hi(),
        })
    }

    /// Returns the box with x and y coordinates swapped.
    pub fn transposed(&self) -> Rect<U> {
        Self {
            llx: self.lly,
            lly: self.llx,
            urx: self.ury,
            ury: self.urx,
        }
    }
}

impl<U: Unit> Display for Rect<U> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "({:.3}, {:.3}) - ({:.3}, {:.3})",
            self.llx.value(),
            self.lly.value(),
            self.urx.value(),
            self.ury.value()
        )
    }
}

// =============================================================================
// Rect Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<U: Unit> serde::Serialize for Rect<U> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut s = serializer.serialize_struct("Rect", 4)?;
        s.serialize_field("llx", &self.llx.value())?;
        s.serialize_field("lly", &self.lly.value())?;
        s.serialize_field("urx", &self.urx.value())?;
        s.serialize_field("ury", &self.ury.value())?;
        s.end()
    }
}

#[cfg(feature = "serde")]
impl<'de, U: Unit> serde::Deserialize<'de> for Rect<U> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(serde::Deserialize)]
        struct Raw {
            llx: f64,
            lly: f64,
            urx: f64,
            ury: f64,
        }

        let raw = Raw::deserialize(deserializer)?;
        Self::from_f64(raw.llx, raw.lly, raw.urx, raw.ury).map_err(serde::de::Error::custom)
    }
}

// =============================================================================
// Reach
// =============================================================================

/// Named reachable region of one pin.
///
/// Identity, equality, and hashing are defined by the name alone: two
/// reaches with the same name denote the same pin even if their geometry
/// differs (which valid input never produces).
#[derive(Debug, Clone)]
pub struct Reach<U: Unit> {
    name: SinkName,
    rect: Rect<U>,
}

impl<U: Unit> Reach<U> {
    pub fn new(name: impl Into<SinkName>, rect: Rect<U>) -> Self {
        Self {
            name: name.into(),
            rect,
        }
    }

    /// Creates a named reach from raw coordinates, rejecting inverted bounds
    /// with the offending name in the error.
    pub fn from_f64(
        name: impl Into<SinkName>,
        llx: f64,
        lly: f64,
        urx: f64,
        ury: f64,
    ) -> Result<Self, GeometryError> {
        let name = name.into();
        match Rect::from_f64(llx, lly, urx, ury) {
            Ok(rect) => Ok(Self { name, rect }),
            Err(_) => Err(GeometryError::InvertedReach {
                name,
                llx,
                lly,
                urx,
                ury,
            }),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub const fn rect(&self) -> &Rect<U> {
        &self.rect
    }

    pub fn area(&self) -> f64 {
        self.rect.area()
    }

    /// Returns the reach with x and y coordinates swapped, same name.
    pub fn transposed(&self) -> Reach<U> {
        Self {
            name: self.name.clone(),
            rect: self.rect.transposed(),
        }
    }
}

impl<U: Unit> PartialEq for Reach<U> {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl<U: Unit> Eq for Reach<U> {}

impl<U: Unit> Hash for Reach<U> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl<U: Unit> Display for Reach<U> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.name, self.rect)
    }
}
