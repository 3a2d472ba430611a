//! 1-D coordinate span of a rectangle on a single axis.

use std::fmt::Display;

use qtty::{Quantity, Unit};

/// Coordinate range `[lo, hi]` of a rectangle projected onto one axis.
///
/// Stabbing queries treat the span as half-open `[lo, hi)`: a point sitting
/// exactly on the upper edge is outside. The interior test used for bound
/// extraction is fully open.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Span<U: Unit> {
    lo: Quantity<U>,
    hi: Quantity<U>,
}

impl<U: Unit> Span<U> {
    /// Creates the span `[lo, hi]`.
    ///
    /// # Panics
    ///
    /// Panics if `lo > hi`. Spans are only built from rectangles that were
    /// validated at construction, so an inverted span is a programming error.
    pub const fn new(lo: Quantity<U>, hi: Quantity<U>) -> Self {
        assert!(lo.value() <= hi.value(), "Span lo must be <= hi");
        Self { lo, hi }
    }

    pub const fn from_f64(lo: f64, hi: f64) -> Self {
        Self::new(Quantity::<U>::new(lo), Quantity::<U>::new(hi))
    }

    pub const fn lo(&self) -> Quantity<U> {
        self.lo
    }

    pub const fn hi(&self) -> Quantity<U> {
        self.hi
    }

    pub fn length(&self) -> Quantity<U> {
        self.hi - self.lo
    }

    /// Returns true if `position` ∈ `[lo, hi)`.
    pub const fn contains(&self, position: Quantity<U>) -> bool {
        self.lo.value() <= position.value() && position.value() < self.hi.value()
    }

    /// Returns true if `position` ∈ `(lo, hi)`.
    ///
    /// Used to decide whether a sink edge is strictly interior to the source
    /// span and therefore contributes a sweep bound.
    pub const fn strictly_contains(&self, position: Quantity<U>) -> bool {
        self.lo.value() < position.value() && position.value() < self.hi.value()
    }

    /// Checks if this span overlaps another (closed-interval sense).
    pub const fn overlaps(&self, other: &Span<U>) -> bool {
        self.lo.value() <= other.hi.value() && other.lo.value() <= self.hi.value()
    }

    pub fn intersection(&self, other: &Span<U>) -> Option<Span<U>> {
        if self.overlaps(other) {
            let lo = if self.lo.value() > other.lo.value() {
                self.lo
            } else {
                other.lo
            };
            let hi = if self.hi.value() < other.hi.value() {
                self.hi
            } else {
                other.hi
            };
            Some(Span::new(lo, hi))
        } else {
            None
        }
    }
}

impl<U: Unit> Display for Span<U> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:.3}, {:.3}]", self.lo.value(), self.hi.value())
    }
}

// =============================================================================
// Span Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<U: Unit> serde::Serialize for Span<U> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut s = serializer.serialize_struct("Span", 2)?;
        s.serialize_field("lo", &self.lo.value())?;
        s.serialize_field("hi", &self.hi.value())?;
        s.end()
    }
}

#[cfg(feature = "serde")]
impl<'de, U: Unit> serde::Deserialize<'de> for Span<U> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(serde::Deserialize)]
        struct Raw {
            lo: f64,
            hi: f64,
        }

        let raw = Raw::deserialize(deserializer)?;
        Ok(Self::new(
            Quantity::<U>::new(raw.lo),
            Quantity::<U>::new(raw.hi),
        ))
    }
}
