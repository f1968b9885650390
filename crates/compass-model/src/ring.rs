//! A single compass ring.
//!
//! Both fields are in units of 60 degrees. Raw values may lie outside the
//! canonical ranges; [`Compass::standardize`](crate::Compass::standardize)
//! reduces all three rings uniformly.

use crate::{RingGroup, POSITIONS};

/// One of the three concentric rings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ring {
    /// Clockwise offset from the target position (0 = on target, 3 = opposite)
    pub location: i64,
    /// Step per rotation; the sign is the direction (negative = counter-clockwise)
    pub speed: i64,
}

impl Ring {
    /// Create a new ring.
    pub const fn new(location: i64, speed: i64) -> Self {
        Self { location, speed }
    }

    /// Location is floor-reduced into `0..6`; speed keeps its sign.
    pub(crate) const fn standardize(&self) -> Self {
        Self {
            location: self.location.rem_euclid(POSITIONS),
            speed: self.speed % POSITIONS,
        }
    }

    /// Advance by one step. Expects a standardized ring.
    pub(crate) const fn step(&self) -> Self {
        Self {
            location: self.location + self.speed,
            speed: self.speed,
        }
    }
}

impl std::fmt::Display for Ring {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{:+}", self.location, self.speed)
    }
}

/// Identifies a ring position on the compass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RingId {
    Outer,
    Middle,
    Inner,
}

impl RingId {
    /// All rings, outermost first.
    pub const ALL: [Self; 3] = [Self::Outer, Self::Middle, Self::Inner];

    /// The single-ring group containing only this ring.
    pub const fn group(self) -> RingGroup {
        match self {
            Self::Outer => RingGroup::OUTER,
            Self::Middle => RingGroup::MIDDLE,
            Self::Inner => RingGroup::INNER,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn location_uses_floor_modulo() {
        assert_eq!(Ring::new(-1, 0).standardize().location, 5);
        assert_eq!(Ring::new(7, 0).standardize().location, 1);
        assert_eq!(Ring::new(-6, 0).standardize().location, 0);
        assert_eq!(Ring::new(i64::MIN, 0).standardize().location, 4);
    }

    #[test]
    fn speed_uses_truncating_remainder() {
        assert_eq!(Ring::new(0, -1).standardize().speed, -1);
        assert_eq!(Ring::new(0, 7).standardize().speed, 1);
        assert_eq!(Ring::new(0, -7).standardize().speed, -1);
        assert_eq!(Ring::new(0, -6).standardize().speed, 0);
    }

    #[test]
    fn display_always_signs_speed() {
        assert_eq!(Ring::new(3, 2).to_string(), "3+2");
        assert_eq!(Ring::new(0, -1).to_string(), "0-1");
        assert_eq!(Ring::new(5, 0).to_string(), "5+0");
    }

    #[test]
    fn step_adds_speed() {
        assert_eq!(Ring::new(4, 3).step(), Ring::new(7, 3));
        assert_eq!(Ring::new(0, -2).step(), Ring::new(-2, -2));
    }

    #[test]
    fn ring_ids_map_to_single_groups() {
        let groups: Vec<_> = RingId::ALL.iter().map(|id| id.group()).collect();
        assert_eq!(groups, vec![RingGroup::OUTER, RingGroup::MIDDLE, RingGroup::INNER]);
    }
}
