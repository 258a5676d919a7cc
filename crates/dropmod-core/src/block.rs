//! # Block Identifiers
//!
//! Normalised, namespaced block keys such as `minecraft:wheat`.
//!
//! Operators type block names loosely (`Stone`, `WHEAT`, `minecraft:dirt`).
//! Every entry point funnels them through [`BlockKey::parse`] so the table,
//! the event path and the command path all agree on one spelling.

use crate::error::{DropError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Namespace applied to bare block names.
pub const DEFAULT_NAMESPACE: &str = "minecraft";

/// A normalised block identifier: lowercase `namespace:path`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct BlockKey(String);

impl BlockKey {
    /// The empty-space block.
    pub const AIR_PATH: &'static str = "air";

    /// Parse and normalise a block identifier.
    ///
    /// The input is lowercased. A bare name gets the `minecraft:` namespace;
    /// an explicit namespace is kept.
    pub fn parse(input: &str) -> Result<Self> {
        let lowered = input.trim().to_lowercase();

        let (namespace, path) = match lowered.split_once(':') {
            Some((ns, path)) => (ns, path),
            None => (DEFAULT_NAMESPACE, lowered.as_str()),
        };

        if namespace.is_empty() || !namespace.chars().all(is_namespace_char) {
            return Err(DropError::InvalidBlock(input.to_string()));
        }
        if path.is_empty() || !path.chars().all(is_path_char) {
            return Err(DropError::InvalidBlock(input.to_string()));
        }

        Ok(Self(format!("{namespace}:{path}")))
    }

    /// Build a key in the default namespace from a trusted path.
    pub(crate) fn vanilla(path: &str) -> Self {
        Self(format!("{DEFAULT_NAMESPACE}:{path}"))
    }

    /// The `minecraft:air` key.
    pub fn air() -> Self {
        Self::vanilla(Self::AIR_PATH)
    }

    /// The full `namespace:path` string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The namespace part.
    pub fn namespace(&self) -> &str {
        self.0.split_once(':').map(|(ns, _)| ns).unwrap_or_default()
    }

    /// The path part.
    pub fn path(&self) -> &str {
        self.0.split_once(':').map(|(_, p)| p).unwrap_or(&self.0)
    }

    /// Whether this key is in the `minecraft` namespace.
    pub fn is_vanilla(&self) -> bool {
        self.namespace() == DEFAULT_NAMESPACE
    }

    /// Whether this is the empty-space block.
    pub fn is_air(&self) -> bool {
        self.is_vanilla() && self.path() == Self::AIR_PATH
    }
}

fn is_namespace_char(c: char) -> bool {
    c.is_ascii_lowercase() || c.is_ascii_digit() || matches!(c, '_' | '-' | '.')
}

fn is_path_char(c: char) -> bool {
    is_namespace_char(c) || c == '/'
}

impl fmt::Display for BlockKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for BlockKey {
    type Err = DropError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for BlockKey {
    type Error = DropError;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl From<BlockKey> for String {
    fn from(key: BlockKey) -> Self {
        key.0
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn bare_name_gets_default_namespace() {
        let key = BlockKey::parse("stone").unwrap();
        assert_eq!(key.as_str(), "minecraft:stone");
        assert!(key.is_vanilla());
    }

    #[test]
    fn input_is_lowercased() {
        assert_eq!(
            BlockKey::parse("Minecraft:WHEAT").unwrap().as_str(),
            "minecraft:wheat"
        );
        assert_eq!(BlockKey::parse("OAK_LOG").unwrap().path(), "oak_log");
    }

    #[test]
    fn foreign_namespace_is_kept() {
        let key = BlockKey::parse("mymod:ruby_ore").unwrap();
        assert_eq!(key.as_str(), "mymod:ruby_ore");
        assert_eq!(key.namespace(), "mymod");
        assert!(!key.is_vanilla());
    }

    #[test]
    fn empty_parts_are_rejected() {
        assert!(BlockKey::parse("").is_err());
        assert!(BlockKey::parse("   ").is_err());
        assert!(BlockKey::parse("minecraft:").is_err());
        assert!(BlockKey::parse(":stone").is_err());
    }

    #[test]
    fn illegal_characters_are_rejected() {
        assert!(BlockKey::parse("grass block").is_err());
        assert!(BlockKey::parse("a:b:c").is_err());
        assert!(BlockKey::parse("stone!").is_err());
    }

    #[test]
    fn air_is_recognised() {
        assert!(BlockKey::air().is_air());
        assert!(BlockKey::parse("AIR").unwrap().is_air());
        assert!(!BlockKey::parse("mymod:air").unwrap().is_air());
    }

    #[test]
    fn string_conversions_normalise() {
        let key: BlockKey = "Dirt".parse().unwrap();
        assert_eq!(String::from(key.clone()), "minecraft:dirt");
        assert_eq!(BlockKey::try_from("DIRT".to_string()).unwrap(), key);
        assert_eq!(key.to_string(), "minecraft:dirt");
    }

    proptest! {
        #[test]
        fn parse_is_idempotent(name in "[A-Za-z0-9_]{1,16}(:[A-Za-z0-9_/]{1,16})?") {
            let once = BlockKey::parse(&name).unwrap();
            let twice = BlockKey::parse(once.as_str()).unwrap();
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn parsed_keys_are_lowercase_and_namespaced(name in "[A-Za-z_]{1,24}") {
            let key = BlockKey::parse(&name).unwrap();
            prop_assert!(key.as_str().contains(':'));
            prop_assert_eq!(key.as_str().to_lowercase(), key.as_str());
        }
    }
}
