//! Ring groups as a 3-bit set.
//!
//! One bit per ring: outer = `0b100`, middle = `0b010`, inner = `0b001`.
//! Six patterns are named (three singletons, three pairs). The empty set and
//! the full triple are representable but have no name, and neither do patterns
//! with bits above the low three.
//!
//! Ordering follows the numeric mask and only exists so collections of groups
//! can be put in canonical order.

use std::ops::{BitOr, BitOrAssign};

use crate::RingId;

/// Name lookup: (group, long name, short code).
/// Within a name rings are always listed Outer, Middle, Inner.
static NAMES: [(RingGroup, &str, &str); 6] = [
    (RingGroup::OUTER, "Outer", "o"),
    (RingGroup::MIDDLE, "Middle", "m"),
    (RingGroup::INNER, "Inner", "i"),
    (RingGroup::OUTER_MIDDLE, "OuterMiddle", "om"),
    (RingGroup::OUTER_INNER, "OuterInner", "oi"),
    (RingGroup::MIDDLE_INNER, "MiddleInner", "mi"),
];

/// A set of rings that rotate together.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct RingGroup(u8);

impl RingGroup {
    pub const OUTER: Self = Self(0b100);
    pub const MIDDLE: Self = Self(0b010);
    pub const INNER: Self = Self(0b001);
    pub const OUTER_MIDDLE: Self = Self(Self::OUTER.0 | Self::MIDDLE.0);
    pub const OUTER_INNER: Self = Self(Self::OUTER.0 | Self::INNER.0);
    pub const MIDDLE_INNER: Self = Self(Self::MIDDLE.0 | Self::INNER.0);

    /// Every named group, in ascending mask order.
    pub const ALL: [Self; 6] = [
        Self::INNER,
        Self::MIDDLE,
        Self::MIDDLE_INNER,
        Self::OUTER,
        Self::OUTER_INNER,
        Self::OUTER_MIDDLE,
    ];

    /// Wrap a raw bit pattern. Any value is accepted.
    pub const fn from_bits(bits: u8) -> Self {
        Self(bits)
    }

    /// The raw bit pattern.
    pub const fn bits(self) -> u8 {
        self.0
    }

    fn entry(self) -> Option<&'static (Self, &'static str, &'static str)> {
        NAMES.iter().find(|(group, _, _)| *group == self)
    }

    /// Long name, or `""` if the pattern has no defined name.
    pub fn name(self) -> &'static str {
        self.entry().map_or("", |(_, name, _)| *name)
    }

    /// Short code used in the canonical string, or `""` if undefined.
    pub fn short_name(self) -> &'static str {
        self.entry().map_or("", |(_, _, code)| *code)
    }

    /// Inverse of [`short_name`](Self::short_name).
    pub fn from_short_name(code: &str) -> Option<Self> {
        NAMES
            .iter()
            .find(|(_, _, short)| *short == code)
            .map(|(group, _, _)| *group)
    }

    /// Whether this is one of the six named patterns.
    pub fn is_named(self) -> bool {
        self.entry().is_some()
    }

    pub const fn contains(self, ring: RingId) -> bool {
        self.0 & ring.group().0 != 0
    }

    /// Member rings, outermost first.
    pub fn rings(self) -> impl Iterator<Item = RingId> {
        RingId::ALL.into_iter().filter(move |&ring| self.contains(ring))
    }
}

impl BitOr for RingGroup {
    type Output = Self;

    #[inline]
    fn bitor(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }
}

impl BitOrAssign for RingGroup {
    #[inline]
    fn bitor_assign(&mut self, other: Self) {
        self.0 |= other.0;
    }
}

impl From<RingId> for RingGroup {
    fn from(ring: RingId) -> Self {
        ring.group()
    }
}

impl std::fmt::Display for RingGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::fmt::Debug for RingGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.name() {
            "" => write!(f, "{:#05b}", self.0),
            name => f.write_str(name),
        }
    }
}

/// Named groups serialize as their short code; unnamed patterns as raw bits.
#[cfg(feature = "serde")]
mod serde_impl {
    use super::RingGroup;
    use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

    impl Serialize for RingGroup {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            match self.short_name() {
                "" => serializer.serialize_u8(self.0),
                code => serializer.serialize_str(code),
            }
        }
    }

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Repr {
        Code(String),
        Bits(u8),
    }

    impl<'de> Deserialize<'de> for RingGroup {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            match Repr::deserialize(deserializer)? {
                Repr::Code(code) => RingGroup::from_short_name(&code).ok_or_else(|| {
                    de::Error::custom(format_args!("unknown ring group code `{code}`"))
                }),
                Repr::Bits(bits) => Ok(RingGroup::from_bits(bits)),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constant_bit_patterns() {
        assert_eq!(RingGroup::OUTER.bits(), 0b100);
        assert_eq!(RingGroup::MIDDLE.bits(), 0b010);
        assert_eq!(RingGroup::INNER.bits(), 0b001);
        assert_eq!(RingGroup::OUTER_MIDDLE.bits(), 0b110);
        assert_eq!(RingGroup::OUTER_INNER.bits(), 0b101);
        assert_eq!(RingGroup::MIDDLE_INNER.bits(), 0b011);
    }

    #[test]
    fn names_and_codes() {
        let expected = [
            (RingGroup::OUTER, "Outer", "o"),
            (RingGroup::MIDDLE, "Middle", "m"),
            (RingGroup::INNER, "Inner", "i"),
            (RingGroup::OUTER_MIDDLE, "OuterMiddle", "om"),
            (RingGroup::OUTER_INNER, "OuterInner", "oi"),
            (RingGroup::MIDDLE_INNER, "MiddleInner", "mi"),
        ];
        for (group, name, code) in expected {
            assert_eq!(group.name(), name);
            assert_eq!(group.short_name(), code);
            assert_eq!(group.to_string(), name);
            assert_eq!(RingGroup::from_short_name(code), Some(group));
        }
    }

    #[test]
    fn unnamed_patterns_have_empty_names() {
        for bits in [0b000, 0b111, 0b1000, 0xff] {
            let group = RingGroup::from_bits(bits);
            assert_eq!(group.name(), "");
            assert_eq!(group.short_name(), "");
            assert_eq!(group.to_string(), "");
            assert!(!group.is_named());
        }
        assert_eq!(format!("{:?}", RingGroup::from_bits(0b111)), "0b111");
        assert_eq!(format!("{:?}", RingGroup::OUTER_INNER), "OuterInner");
    }

    #[test]
    fn unknown_code_is_none() {
        assert_eq!(RingGroup::from_short_name(""), None);
        assert_eq!(RingGroup::from_short_name("io"), None);
        assert_eq!(RingGroup::from_short_name("O"), None);
    }

    #[test]
    fn all_is_sorted_and_named() {
        let mut sorted = RingGroup::ALL;
        sorted.sort();
        assert_eq!(sorted, RingGroup::ALL);
        assert!(RingGroup::ALL.iter().all(|g| g.is_named()));
    }

    #[test]
    fn ordering_is_numeric() {
        assert!(RingGroup::INNER < RingGroup::OUTER);
        assert!(RingGroup::MIDDLE_INNER < RingGroup::OUTER);
        assert!(RingGroup::OUTER_INNER < RingGroup::OUTER_MIDDLE);
    }

    #[test]
    fn union_of_singletons() {
        assert_eq!(RingGroup::OUTER | RingGroup::MIDDLE, RingGroup::OUTER_MIDDLE);
        assert_eq!(RingGroup::INNER | RingGroup::OUTER, RingGroup::OUTER_INNER);

        let mut group = RingGroup::MIDDLE;
        group |= RingGroup::INNER;
        assert_eq!(group, RingGroup::MIDDLE_INNER);

        let all = RingGroup::OUTER | RingGroup::MIDDLE | RingGroup::INNER;
        assert_eq!(all.bits(), 0b111);
        assert!(!all.is_named());
    }

    #[test]
    fn membership() {
        let members: Vec<_> = RingGroup::OUTER_INNER.rings().collect();
        assert_eq!(members, vec![RingId::Outer, RingId::Inner]);

        assert!(RingGroup::MIDDLE_INNER.contains(RingId::Middle));
        assert!(!RingGroup::MIDDLE_INNER.contains(RingId::Outer));
        assert_eq!(RingGroup::default().rings().count(), 0);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_uses_short_codes() {
        let groups = vec![RingGroup::OUTER_MIDDLE, RingGroup::from_bits(0b111)];
        let json = serde_json::to_string(&groups).unwrap();
        assert_eq!(json, r#"["om",7]"#);

        let back: Vec<RingGroup> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, groups);

        assert!(serde_json::from_str::<RingGroup>(r#""xyz""#).is_err());
    }
}
