//! HKSR Navigation Compass
//!
//! Value model of the three-ring navigation compass puzzle.
//!
//! # Geometry
//!
//! The compass has three concentric rings (outer, middle, inner). Each ring
//! points at one of six positions spaced 60 degrees apart and turns by a fixed
//! signed step whenever it is rotated:
//! - `location` is measured clockwise from the target position, in 60 degree units
//! - `speed` is the step per rotation, positive clockwise, negative counter-clockwise
//!
//! # Ring Groups
//!
//! Rings are never turned one at a time by the player; a control turns a
//! [`RingGroup`], a fixed subset of rings that move together. Each compass
//! lists the groups it supports.
//!
//! # Canonical Form
//!
//! [`Compass::standardize`] reduces every ring to its congruence class and
//! sorts/deduplicates the group list. The canonical string produced by
//! `Display` always goes through that form:
//!
//! ```text
//! 0-1,3+2,5+0/om
//! ```

mod compass;
mod error;
mod group;
mod parse;
mod ring;

pub use compass::{Compass, MaybeCompass};
pub use error::{CompassError, ParseErrorKind, Result};
pub use group::RingGroup;
pub use ring::{Ring, RingId};

/// Number of discrete positions around a ring (one per 60 degrees).
pub const POSITIONS: i64 = 6;

/// Degrees covered by one unit of location or speed.
pub const DEGREES_PER_STEP: i64 = 60;

// One full revolution is six steps
const _: () = assert!(POSITIONS * DEGREES_PER_STEP == 360);
