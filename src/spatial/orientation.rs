//! The eight grid orientations reachable by rotation and reflection

use std::fmt;

use crate::spatial::grid::Grid;

/// Values that can be rotated and reflected in place
pub trait Orientable {
    /// Rotate 90 degrees clockwise
    fn apply_rotate90(&mut self);

    /// Mirror by reversing the row order
    fn apply_reflect(&mut self);
}

impl Orientable for Grid {
    fn apply_rotate90(&mut self) {
        *self = self.rotate90();
    }

    fn apply_reflect(&mut self) {
        *self = self.reflect();
    }
}

/// A rotation by some quarter turns, optionally followed by a reflection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Orientation {
    /// Clockwise quarter turns, 0 to 3
    pub quarter_turns: u8,
    /// Whether rows are reversed after rotating
    pub reflected: bool,
}

/// All orientations in search order: identity then reflected, per quarter turn
pub const ORIENTATIONS: [Orientation; 8] = [
    Orientation::new(0, false),
    Orientation::new(0, true),
    Orientation::new(1, false),
    Orientation::new(1, true),
    Orientation::new(2, false),
    Orientation::new(2, true),
    Orientation::new(3, false),
    Orientation::new(3, true),
];

impl Orientation {
    /// Orientation with the given quarter turns (taken modulo 4)
    pub const fn new(quarter_turns: u8, reflected: bool) -> Self {
        Self {
            quarter_turns: quarter_turns % 4,
            reflected,
        }
    }

    /// Transform a value in place
    pub fn apply<T: Orientable>(self, value: &mut T) {
        for _ in 0..self.quarter_turns {
            value.apply_rotate90();
        }
        if self.reflected {
            value.apply_reflect();
        }
    }

    /// Transformed copy of a value
    #[must_use]
    pub fn oriented<T: Orientable + Clone>(self, value: &T) -> T {
        let mut copy = value.clone();
        self.apply(&mut copy);
        copy
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rotated {}°", u16::from(self.quarter_turns) * 90)?;
        if self.reflected {
            write!(f, ", reflected")?;
        }
        Ok(())
    }
}

/// Every orientation of a value paired with the transformed copy
pub fn orientations<T: Orientable + Clone>(value: &T) -> impl Iterator<Item = (Orientation, T)> + '_ {
    ORIENTATIONS
        .into_iter()
        .map(move |orientation| (orientation, orientation.oriented(value)))
}
