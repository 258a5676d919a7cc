//! # DropMod Core
//!
//! Configurable drop-chance rules for block breaking.
//!
//! Operators attach a probability in `[0, 1]` to a block type. When a block
//! of that type is broken the engine draws a uniform sample and decides
//! whether the default item drop happens. A second rule looks at the block
//! directly above: if it is an ageable crop with its own configured chance,
//! it may be turned into air so it cannot pop off as a free drop.
//!
//! ## Layout
//!
//! ```text
//! block     BlockKey (namespaced id normalisation)
//! catalog   Known vanilla blocks + ageable flags (completion, simulation)
//! chance    DropChance, ChanceTable, ChanceStore seam
//! rules     Break evaluation (two threshold checks)
//! command   `/drops` dispatcher: set / get / remove + tab completion
//! plugin    Host traits and the DropModifier lifecycle
//! ```
//!
//! This crate never touches the filesystem. Persistence is reached through
//! [`ChanceStore::save`], implemented by the app layer.

pub mod block;
pub mod catalog;
pub mod chance;
pub mod command;
pub mod error;
pub mod plugin;
pub mod rules;

pub use block::BlockKey;
pub use chance::{ChanceStore, ChanceTable, ChanceTier, DropChance};
pub use command::{
    Color, CommandSender, CommandStatus, DropsCommand, Message, Permission, Span,
};
pub use error::{DropError, Result};
pub use plugin::{BlockBreakEvent, DropModifier, PluginHost, PluginState};
pub use rules::{AboveBlock, BreakContext, BreakOutcome, evaluate};
