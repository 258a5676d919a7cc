//! # Drop Chances
//!
//! Validated probabilities and the block → chance table.
//!
//! Chances are stored as `f64` but never computed on: every rule in this
//! crate is a single comparison against a uniform sample.

use crate::block::BlockKey;
use crate::error::{DropError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

// =============================================================================
// DROP CHANCE
// =============================================================================

/// A probability in `[0, 1]` that a broken block yields its drop.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct DropChance(f64);

impl DropChance {
    /// Never drops.
    pub const NEVER: Self = Self(0.0);
    /// Always drops.
    pub const ALWAYS: Self = Self(1.0);

    /// Validate a raw probability.
    pub fn new(value: f64) -> Result<Self> {
        if value.is_nan() || !(0.0..=1.0).contains(&value) {
            return Err(DropError::ChanceOutOfRange(value));
        }
        Ok(Self(value))
    }

    /// Parse operator input such as `"0.25"`.
    pub fn parse(text: &str) -> Result<Self> {
        let value: f64 = text
            .trim()
            .parse()
            .map_err(|_| DropError::InvalidChance(text.to_string()))?;
        Self::new(value)
    }

    /// The raw probability.
    pub fn value(self) -> f64 {
        self.0
    }

    /// Whether this chance can never pass.
    pub fn is_never(self) -> bool {
        self.0 == 0.0
    }

    /// Whether a uniform sample in `[0, 1)` passes this chance.
    ///
    /// A zero chance never passes, even for a zero sample.
    pub fn passes(self, sample: f64) -> bool {
        !self.is_never() && sample <= self.0
    }

    /// Display band for this chance.
    pub fn tier(self) -> ChanceTier {
        if self.0 < 0.25 {
            ChanceTier::Low
        } else if self.0 < 0.5 {
            ChanceTier::Moderate
        } else if self.0 < 0.75 {
            ChanceTier::High
        } else {
            ChanceTier::Certain
        }
    }
}

impl TryFrom<f64> for DropChance {
    type Error = DropError;

    fn try_from(value: f64) -> Result<Self> {
        Self::new(value)
    }
}

impl From<DropChance> for f64 {
    fn from(chance: DropChance) -> Self {
        chance.0
    }
}

impl fmt::Display for DropChance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Colour band used when showing a chance to an operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChanceTier {
    /// Below 0.25.
    Low,
    /// 0.25 up to 0.5.
    Moderate,
    /// 0.5 up to 0.75.
    High,
    /// 0.75 and above.
    Certain,
}

// =============================================================================
// CHANCE STORE
// =============================================================================

/// Where the `/drops` command and the break handler read and write chances.
///
/// `set_chance` and `remove_chance` only touch memory; `save` persists.
pub trait ChanceStore {
    /// The configured chance for a block, if any.
    fn chance(&self, block: &BlockKey) -> Option<DropChance>;

    /// Set a chance. Returns the previous one.
    fn set_chance(&mut self, block: BlockKey, chance: DropChance) -> Option<DropChance>;

    /// Remove a chance. Returns the removed one.
    fn remove_chance(&mut self, block: &BlockKey) -> Option<DropChance>;

    /// All entries in key order.
    fn entries(&self) -> Vec<(BlockKey, DropChance)>;

    /// Persist the current state.
    fn save(&mut self) -> Result<()>;
}

// =============================================================================
// CHANCE TABLE
// =============================================================================

/// In-memory block → chance mapping with deterministic ordering.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChanceTable {
    blocks: BTreeMap<BlockKey, DropChance>,
}

impl ChanceTable {
    /// Create an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, block: &BlockKey) -> Option<DropChance> {
        self.blocks.get(block).copied()
    }

    pub fn set(&mut self, block: BlockKey, chance: DropChance) -> Option<DropChance> {
        self.blocks.insert(block, chance)
    }

    pub fn remove(&mut self, block: &BlockKey) -> Option<DropChance> {
        self.blocks.remove(block)
    }

    pub fn contains(&self, block: &BlockKey) -> bool {
        self.blocks.contains_key(block)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&BlockKey, DropChance)> {
        self.blocks.iter().map(|(k, v)| (k, *v))
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}

impl FromIterator<(BlockKey, DropChance)> for ChanceTable {
    fn from_iter<I: IntoIterator<Item = (BlockKey, DropChance)>>(iter: I) -> Self {
        Self {
            blocks: iter.into_iter().collect(),
        }
    }
}

impl ChanceStore for ChanceTable {
    fn chance(&self, block: &BlockKey) -> Option<DropChance> {
        self.get(block)
    }

    fn set_chance(&mut self, block: BlockKey, chance: DropChance) -> Option<DropChance> {
        self.set(block, chance)
    }

    fn remove_chance(&mut self, block: &BlockKey) -> Option<DropChance> {
        self.remove(block)
    }

    fn entries(&self) -> Vec<(BlockKey, DropChance)> {
        self.iter().map(|(k, v)| (k.clone(), v)).collect()
    }

    // Memory only.
    fn save(&mut self) -> Result<()> {
        Ok(())
    }
}

// =============================================================================
// TESTS
// =============================================================================
