//! Maximum number of testimonials shown by a widget.

use std::fmt;
use std::num::NonZeroU32;
use std::str::FromStr;

use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize, Serializer};

/// Number of testimonials a widget renders: everything, or at most a count.
///
/// On the wire this is either the literal `all` or a positive decimal count.
/// Parsing never fails: `all`, non-numeric text, zero and negative numbers
/// all mean [`ItemLimit::All`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemLimit {
    /// Render every approved testimonial.
    #[default]
    All,
    /// Render at most this many.
    Count(NonZeroU32),
}

impl ItemLimit {
    /// The wire literal for [`ItemLimit::All`].
    pub const ALL: &'static str = "all";

    /// Creates a count limit, or [`ItemLimit::All`] for zero.
    pub const fn count(count: u32) -> Self {
        match NonZeroU32::new(count) {
            Some(count) => Self::Count(count),
            None => Self::All,
        }
    }

    /// Parses the wire form leniently.
    pub fn parse(value: &str) -> Self {
        match value.trim().parse::<u32>() {
            Ok(count) => Self::count(count),
            Err(_) => Self::All,
        }
    }

    /// Returns how many of `item_count` items the widget shows.
    pub fn apply(self, item_count: usize) -> usize {
        match self {
            Self::All => item_count,
            Self::Count(count) => usize::try_from(count.get())
                .map_or(item_count, |count| count.min(item_count)),
        }
    }

    /// Returns the count, if limited.
    #[inline]
    pub const fn as_count(self) -> Option<u32> {
        match self {
            Self::All => None,
            Self::Count(count) => Some(count.get()),
        }
    }
}

impl fmt::Display for ItemLimit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str(Self::ALL),
            Self::Count(count) => write!(f, "{count}"),
        }
    }
}

impl FromStr for ItemLimit {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl From<u32> for ItemLimit {
    fn from(count: u32) -> Self {
        Self::count(count)
    }
}

impl Serialize for ItemLimit {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ItemLimit {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ItemLimitVisitor;

        impl Visitor<'_> for ItemLimitVisitor {
            type Value = ItemLimit;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("\"all\" or a positive integer")
            }

            fn visit_str<E: de::Error>(self, value: &str) -> Result<ItemLimit, E> {
                Ok(ItemLimit::parse(value))
            }

            fn visit_u64<E: de::Error>(self, value: u64) -> Result<ItemLimit, E> {
                Ok(u32::try_from(value).map_or(ItemLimit::All, ItemLimit::count))
            }

            fn visit_i64<E: de::Error>(self, value: i64) -> Result<ItemLimit, E> {
                Ok(u32::try_from(value).map_or(ItemLimit::All, ItemLimit::count))
            }
        }

        deserializer.deserialize_any(ItemLimitVisitor)
    }
}

#[cfg(feature = "schema")]
impl schemars::JsonSchema for ItemLimit {
    fn schema_name() -> std::borrow::Cow<'static, str> {
        "ItemLimit".into()
    }

    fn json_schema(_generator: &mut schemars::SchemaGenerator) -> schemars::Schema {
        schemars::json_schema!({
            "description": "\"all\" or a positive number of testimonials",
            "type": "string",
            "examples": ["all", "10"]
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_sentinel_and_counts() {
        assert_eq!(ItemLimit::parse("all"), ItemLimit::All);
        assert_eq!(ItemLimit::parse("5"), ItemLimit::count(5));
        assert_eq!(ItemLimit::parse("10").as_count(), Some(10));
    }

    #[test]
    fn malformed_values_mean_all() {
        for value in ["", "0", "-3", "ten", "1.5", "99999999999"] {
            assert_eq!(ItemLimit::parse(value), ItemLimit::All, "value {value:?}");
        }
    }

    #[test]
    fn display_matches_wire_form() {
        assert_eq!(ItemLimit::All.to_string(), "all");
        assert_eq!(ItemLimit::count(12).to_string(), "12");
    }

    #[test]
    fn apply_caps_item_count() {
        assert_eq!(ItemLimit::All.apply(7), 7);
        assert_eq!(ItemLimit::count(3).apply(7), 3);
        assert_eq!(ItemLimit::count(10).apply(7), 7);
    }

    #[test]
    fn serde_accepts_strings_and_numbers() {
        let limit: ItemLimit = serde_json::from_str("\"all\"").unwrap();
        assert_eq!(limit, ItemLimit::All);
        let limit: ItemLimit = serde_json::from_str("\"8\"").unwrap();
        assert_eq!(limit, ItemLimit::count(8));
        let limit: ItemLimit = serde_json::from_str("4").unwrap();
        assert_eq!(limit, ItemLimit::count(4));
        let limit: ItemLimit = serde_json::from_str("-1").unwrap();
        assert_eq!(limit, ItemLimit::All);

        assert_eq!(serde_json::to_string(&ItemLimit::count(4)).unwrap(), "\"4\"");
    }
}
