//! # Break Rules
//!
//! Decides what happens when a block is broken.
//!
//! Two independent checks run against uniform samples in `[0, 1)`:
//!
//! 1. **Block above.** If the block directly above is ageable and has a
//!    configured chance, it is turned into air unless its sample passes.
//!    Breaking the soil under a crop would otherwise pop the crop off as a
//!    free drop, bypassing its own chance.
//! 2. **Broken block.** If the broken block has a configured chance, its
//!    default drop is suppressed unless its sample passes.
//!
//! A sample passes when the chance is non-zero and `sample <= chance`.
//! Samples are drawn only for rules that apply, above-block first.

use crate::block::BlockKey;
use crate::chance::{ChanceStore, DropChance};
use rand::Rng;
use rand::distributions::{Distribution, Standard};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// The block sitting directly on top of the broken one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AboveBlock {
    /// Block type.
    pub key: BlockKey,
    /// Whether the block data has an age property (crops, stems, ...).
    pub ageable: bool,
}

impl AboveBlock {
    pub fn new(key: BlockKey, ageable: bool) -> Self {
        Self { key, ageable }
    }
}

/// Everything the rules need to know about one break.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreakContext {
    /// The block that was broken.
    pub block: BlockKey,
    /// The block above it, if the host reports one.
    pub above: Option<AboveBlock>,
}

impl BreakContext {
    pub fn new(block: BlockKey) -> Self {
        Self { block, above: None }
    }

    #[must_use]
    pub fn with_above(mut self, above: AboveBlock) -> Self {
        self.above = Some(above);
        self
    }
}

/// The decision for one break.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreakOutcome {
    /// Whether the broken block yields its default drop.
    pub drop_items: bool,
    /// Whether the block above becomes air.
    pub clear_above: bool,
}

impl Default for BreakOutcome {
    fn default() -> Self {
        Self {
            drop_items: true,
            clear_above: false,
        }
    }
}

impl BreakOutcome {
    /// Whether nothing needs to change on the host side.
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }
}

/// Evaluate both rules for a break.
pub fn evaluate<S, R>(store: &S, ctx: &BreakContext, rng: &mut R) -> BreakOutcome
where
    S: ChanceStore + ?Sized,
    R: Rng + ?Sized,
{
    let mut outcome = BreakOutcome::default();

    if let Some(above) = ctx.above.as_ref().filter(|above| above.ageable) {
        if let Some(chance) = store.chance(&above.key) {
            let passed = roll(chance, rng);
            debug!(block = %above.key, chance = %chance, passed, "above-block rule");
            outcome.clear_above = !passed;
        }
    }

    if let Some(chance) = store.chance(&ctx.block) {
        let passed = roll(chance, rng);
        debug!(block = %ctx.block, chance = %chance, passed, "drop rule");
        outcome.drop_items = passed;
    }

    outcome
}

fn roll<R: Rng + ?Sized>(chance: DropChance, rng: &mut R) -> bool {
    let sample: f64 = Standard.sample(rng);
    chance.passes(sample)
}

// =============================================================================
// TESTS
// =============================================================================
