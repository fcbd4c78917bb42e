//! Strategies for code points a code page cannot represent.
//!
//! A [`FallbackPolicy`] is chosen per encoder, independently of the table,
//! so one [`CodePageTable`] serves strict and lenient callers alike.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use crate::table::CodePageTable;
use crate::{Error, Result};

/// Outcome of a fallback for one unmappable unit
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FallbackDecision {
    /// Emit this byte in place of the unit
    ReplaceWithByte(u8),
    /// Stop encoding with [`Error::UnmappableCharacter`]
    Fail,
    /// Encode these units in place of the unit. Empty drops it.
    Substitute(Vec<u16>),
}

impl FallbackDecision {
    /// Substitute the UTF-16 encoding of `text`
    pub fn substitute_str(text: &str) -> Self {
        FallbackDecision::Substitute(text.encode_utf16().collect())
    }
}

/// Caller supplied fallback.
///
/// Units returned through [`FallbackDecision::Substitute`] are re-encoded
/// with the same table but never fall back again.
pub trait FallbackHandler: Send + Sync {
    /// Decide what to emit for `unit`, found at UTF-16 offset `position`
    fn fallback(&self, unit: u16, position: usize) -> FallbackDecision;
}

impl<F> FallbackHandler for F
where
    F: Fn(u16, usize) -> FallbackDecision + Send + Sync,
{
    fn fallback(&self, unit: u16, position: usize) -> FallbackDecision {
        self(unit, position)
    }
}

/// Policy applied when a unit has no byte in the target code page
#[derive(Clone, Default)]
pub enum FallbackPolicy {
    /// Emit the code page's substitute byte
    #[default]
    Replace,
    /// Emit a fixed byte
    ReplaceWith(u8),
    /// Fail with [`Error::UnmappableCharacter`]
    Strict,
    /// Drop the unit
    Ignore,
    /// Replace the unit with an XML numeric character reference (`&#1234;`)
    NcrEscape,
    /// Delegate to a handler
    Custom(Arc<dyn FallbackHandler>),
}

impl FallbackPolicy {
    /// Wrap a handler or closure into a policy
    pub fn custom<H>(handler: H) -> Self
    where
        H: FallbackHandler + 'static,
    {
        FallbackPolicy::Custom(Arc::new(handler))
    }

    /// Resolve the fallback for `unit` at UTF-16 offset `position`
    pub fn resolve(&self, table: &CodePageTable, unit: u16, position: usize) -> FallbackDecision {
        let decision = match self {
            FallbackPolicy::Replace => FallbackDecision::ReplaceWithByte(table.substitute_byte()),
            FallbackPolicy::ReplaceWith(byte) => FallbackDecision::ReplaceWithByte(*byte),
            FallbackPolicy::Strict => FallbackDecision::Fail,
            FallbackPolicy::Ignore => FallbackDecision::Substitute(Vec::new()),
            FallbackPolicy::NcrEscape => FallbackDecision::substitute_str(&format!("&#{unit};")),
            FallbackPolicy::Custom(handler) => handler.fallback(unit, position),
        };
        log::trace!(
            "{}: fallback for U+{:04X} at {}: {:?}",
            table.name(),
            unit,
            position,
            decision
        );
        decision
    }

    /// Resolve the fallback for a whole surrogate pair at `position`.
    ///
    /// Only [`FallbackPolicy::NcrEscape`] works on scalar values; every
    /// other policy returns `None` and each half is resolved on its own.
    pub fn resolve_pair(
        &self,
        table: &CodePageTable,
        high: u16,
        low: u16,
        position: usize,
    ) -> Option<FallbackDecision> {
        let FallbackPolicy::NcrEscape = self else {
            return None;
        };
        let scalar = char::decode_utf16([high, low]).next()?.ok()?;
        let decision = FallbackDecision::substitute_str(&format!("&#{};", u32::from(scalar)));
        log::trace!(
            "{}: fallback for U+{:04X} at {}: {:?}",
            table.name(),
            u32::from(scalar),
            position,
            decision
        );
        Some(decision)
    }

    /// Short name of the policy
    pub fn name(&self) -> &'static str {
        match self {
            FallbackPolicy::Replace => "replace",
            FallbackPolicy::ReplaceWith(_) => "byte",
            FallbackPolicy::Strict => "strict",
            FallbackPolicy::Ignore => "ignore",
            FallbackPolicy::NcrEscape => "ncr",
            FallbackPolicy::Custom(_) => "custom",
        }
    }
}

impl fmt::Debug for FallbackPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FallbackPolicy::Replace => f.write_str("Replace"),
            FallbackPolicy::ReplaceWith(byte) => f.debug_tuple("ReplaceWith").field(byte).finish(),
            FallbackPolicy::Strict => f.write_str("Strict"),
            FallbackPolicy::Ignore => f.write_str("Ignore"),
            FallbackPolicy::NcrEscape => f.write_str("NcrEscape"),
            FallbackPolicy::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

impl fmt::Display for FallbackPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FallbackPolicy::ReplaceWith(byte) => write!(f, "byte:0x{byte:02X}"),
            other => f.write_str(other.name()),
        }
    }
}

impl FromStr for FallbackPolicy {
    type Err = Error;

    /// Parse `replace`, `strict`, `ignore`, `ncr` or `byte:<value>`, where
    /// the value is decimal or `0x`-prefixed hex.
    fn from_str(s: &str) -> Result<Self> {
        let lower = s.trim().to_ascii_lowercase();
        let policy = match lower.as_str() {
            "replace" | "lenient" => FallbackPolicy::Replace,
            "strict" | "fail" => FallbackPolicy::Strict,
            "ignore" | "skip" => FallbackPolicy::Ignore,
            "ncr" | "ncr-escape" => FallbackPolicy::NcrEscape,
            other => {
                let value = other
                    .strip_prefix("byte:")
                    .ok_or_else(|| Error::InvalidFallback(s.to_string()))?;
                let byte = match value.strip_prefix("0x") {
                    Some(hex) => u8::from_str_radix(hex, 16),
                    None => value.parse::<u8>(),
                }
                .map_err(|_| Error::InvalidFallback(s.to_string()))?;
                FallbackPolicy::ReplaceWith(byte)
            }
        };
        Ok(policy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::CodePageRegistry;

    #[test]
    fn test_parse_policies() {
        assert!(matches!("replace".parse::<FallbackPolicy>(), Ok(FallbackPolicy::Replace)));
        assert!(matches!("STRICT".parse::<FallbackPolicy>(), Ok(FallbackPolicy::Strict)));
        assert!(matches!("ignore".parse::<FallbackPolicy>(), Ok(FallbackPolicy::Ignore)));
        assert!(matches!("ncr".parse::<FallbackPolicy>(), Ok(FallbackPolicy::NcrEscape)));
        assert!(matches!("byte:0x6F".parse::<FallbackPolicy>(), Ok(FallbackPolicy::ReplaceWith(0x6F))));
        assert!(matches!("byte:63".parse::<FallbackPolicy>(), Ok(FallbackPolicy::ReplaceWith(63))));
    }

    #[test]
    fn test_parse_rejects_unknown() {
        let err = "byte:0x100".parse::<FallbackPolicy>().unwrap_err();
        assert_eq!(err, Error::InvalidFallback("byte:0x100".to_string()));
        assert!("sometimes".parse::<FallbackPolicy>().is_err());
    }

    #[test]
    fn test_display_round_trips() {
        for text in ["replace", "strict", "ignore", "ncr", "byte:0x3F"] {
            let policy: FallbackPolicy = text.parse().unwrap();
            assert_eq!(policy.to_string(), text);
        }
    }

    #[test]
    fn test_resolve_uses_page_substitute() {
        let registry = CodePageRegistry::global();
        let ibm037 = registry.lookup(37).unwrap();
        let cp437 = registry.lookup(437).unwrap();

        let policy = FallbackPolicy::Replace;
        assert_eq!(policy.resolve(ibm037, 0x2603, 0), FallbackDecision::ReplaceWithByte(0x6F));
        assert_eq!(policy.resolve(cp437, 0x2603, 0), FallbackDecision::ReplaceWithByte(0x3F));
    }

    #[test]
    fn test_resolve_pair_escapes_scalar() {
        let cp437 = CodePageRegistry::global().lookup(437).unwrap();

        assert_eq!(
            FallbackPolicy::NcrEscape.resolve_pair(cp437, 0xD83D, 0xDE00, 0),
            Some(FallbackDecision::substitute_str("&#128512;"))
        );
        // not a pair
        assert_eq!(FallbackPolicy::NcrEscape.resolve_pair(cp437, 0xD83D, 0x0041, 0), None);
        assert_eq!(FallbackPolicy::Replace.resolve_pair(cp437, 0xD83D, 0xDE00, 0), None);
    }

    #[test]
    fn test_resolve_ncr_and_custom() {
        let cp437 = CodePageRegistry::global().lookup(437).unwrap();

        assert_eq!(
            FallbackPolicy::NcrEscape.resolve(cp437, 0x2603, 3),
            FallbackDecision::substitute_str("&#9731;")
        );

        let policy = FallbackPolicy::custom(|unit: u16, position: usize| {
            if position == 0 {
                FallbackDecision::Fail
            } else {
                FallbackDecision::ReplaceWithByte(unit as u8)
            }
        });
        assert_eq!(policy.resolve(cp437, 0x2603, 0), FallbackDecision::Fail);
        assert_eq!(policy.resolve(cp437, 0x2603, 1), FallbackDecision::ReplaceWithByte(0x03));
        assert_eq!(format!("{policy:?}"), "Custom(..)");
    }
}
