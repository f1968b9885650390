//! The compass value and its canonical form.
//!
//! Compass values are treated as immutable: [`Compass::standardize`] and
//! [`Compass::rotate`] return fresh values and leave the receiver untouched.
//!
//! Callers holding a possibly-absent compass go through [`MaybeCompass`],
//! which degrades to `false`, `None` or `""` instead of failing.

use crate::{CompassError, Result, Ring, RingGroup, RingId};

/// Three rings plus the groups that can be rotated together.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Compass {
    #[cfg_attr(feature = "serde", serde(default))]
    pub outer_ring: Ring,
    #[cfg_attr(feature = "serde", serde(default))]
    pub middle_ring: Ring,
    #[cfg_attr(feature = "serde", serde(default))]
    pub inner_ring: Ring,
    /// Supported groups. Producers may leave this unsorted or duplicated.
    #[cfg_attr(feature = "serde", serde(default))]
    pub ring_groups: Vec<RingGroup>,
}

impl Compass {
    /// Create a new compass.
    pub fn new(
        outer_ring: Ring,
        middle_ring: Ring,
        inner_ring: Ring,
        ring_groups: Vec<RingGroup>,
    ) -> Self {
        Self {
            outer_ring,
            middle_ring,
            inner_ring,
            ring_groups,
        }
    }

    /// Borrow a ring by id.
    pub fn ring(&self, id: RingId) -> &Ring {
        match id {
            RingId::Outer => &self.outer_ring,
            RingId::Middle => &self.middle_ring,
            RingId::Inner => &self.inner_ring,
        }
    }

    fn ring_mut(&mut self, id: RingId) -> &mut Ring {
        match id {
            RingId::Outer => &mut self.outer_ring,
            RingId::Middle => &mut self.middle_ring,
            RingId::Inner => &mut self.inner_ring,
        }
    }

    /// Check externally supplied data before trusting it.
    ///
    /// Rejects, in order:
    /// - any group whose pattern has no name (first offender reported)
    /// - an empty group list
    ///
    /// Ring values are never rejected; every integer reduces to a valid position.
    pub fn validate(&self) -> Result<()> {
        if let Some(group) = self.ring_groups.iter().find(|g| !g.is_named()) {
            tracing::debug!(bits = group.bits(), "rejected unnamed ring group pattern");
            return Err(CompassError::UnsupportedRingGroupPattern(group.bits()));
        }
        if self.ring_groups.is_empty() {
            tracing::debug!("rejected compass without ring groups");
            return Err(CompassError::EmptyRingGroups);
        }
        Ok(())
    }

    /// Whether `group` is listed among the supported groups.
    pub fn is_ring_group_supported(&self, group: RingGroup) -> bool {
        self.ring_groups.contains(&group)
    }

    /// Canonical copy of this compass.
    ///
    /// Locations are floor-reduced into `0..6`. Speeds use the truncating
    /// remainder, so a negative speed stays negative (its sign is the
    /// direction). Groups are sorted by mask and deduplicated.
    pub fn standardize(&self) -> Compass {
        let mut ring_groups = self.ring_groups.clone();
        ring_groups.sort();
        ring_groups.dedup();

        Compass {
            outer_ring: self.outer_ring.standardize(),
            middle_ring: self.middle_ring.standardize(),
            inner_ring: self.inner_ring.standardize(),
            ring_groups,
        }
    }

    /// Whether this value is already in canonical form.
    pub fn is_standard(&self) -> bool {
        *self == self.standardize()
    }

    /// Turn `group` once: every member ring moves by its own speed.
    ///
    /// The result is standardized.
    pub fn rotate(&self, group: RingGroup) -> Result<Compass> {
        if !self.is_ring_group_supported(group) {
            return Err(CompassError::UnsupportedRingGroup(group));
        }

        let mut next = self.standardize();
        for id in group.rings() {
            let ring = next.ring_mut(id);
            *ring = ring.step().standardize();
        }
        tracing::trace!(?group, from = %self, to = %next, "rotated ring group");
        Ok(next)
    }
}

/// Canonical string: `<loc><±speed>,<loc><±speed>,<loc><±speed>/<codes>`.
///
/// Always rendered from the standardized form. Unnamed groups contribute an
/// empty code, so their separating commas are still emitted.
impl std::fmt::Display for Compass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let std = self.standardize();
        write!(f, "{},{},{}/", std.outer_ring, std.middle_ring, std.inner_ring)?;
        for (i, group) in std.ring_groups.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            f.write_str(group.short_name())?;
        }
        Ok(())
    }
}

/// Absence-tolerant view over an optional compass.
pub trait MaybeCompass {
    /// `false` when there is no compass.
    fn is_ring_group_supported(self, group: RingGroup) -> bool;

    /// `None` when there is no compass.
    fn standardize(self) -> Option<Compass>;

    /// `""` when there is no compass.
    fn to_canonical_string(self) -> String;
}

impl MaybeCompass for Option<&Compass> {
    fn is_ring_group_supported(self, group: RingGroup) -> bool {
        self.is_some_and(|compass| compass.is_ring_group_supported(group))
    }

    fn standardize(self) -> Option<Compass> {
        self.map(Compass::standardize)
    }

    fn to_canonical_string(self) -> String {
        self.map(Compass::to_string).unwrap_or_default()
    }
}
