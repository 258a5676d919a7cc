//! # Plugin Lifecycle
//!
//! The seam between the rule engine and a game server.
//!
//! The server owns event dispatch and the world. It hands us a
//! [`BlockBreakEvent`] for every broken block, routes `/drops` input to
//! [`DropModifier::dispatch`], and calls the enable/disable hooks.

use crate::block::BlockKey;
use crate::chance::ChanceStore;
use crate::command::{self, COMMAND_NAME, CommandSender, CommandStatus, DropsCommand};
use crate::rules::{self, AboveBlock, BreakContext, BreakOutcome};
use rand::Rng;
use tracing::{debug, error, info};

/// A block-break event as seen by the host.
pub trait BlockBreakEvent {
    /// Type of the broken block.
    fn block(&self) -> BlockKey;

    /// The block directly above, if any.
    fn above(&self) -> Option<AboveBlock>;

    /// Enable or suppress the default item drop.
    fn set_drop_items(&mut self, drop: bool);

    /// Replace the block above with air.
    fn clear_above(&mut self);
}

/// Services the host exposes during enable.
pub trait PluginHost {
    /// Bind a command label to this plugin. Returns false if the host does
    /// not know the label.
    fn register_command(&mut self, name: &str) -> bool;
}

/// Lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PluginState {
    Loaded,
    Enabled,
    Disabled,
}

/// The drop-modifier plugin: a chance store plus lifecycle.
#[derive(Debug)]
pub struct DropModifier<S: ChanceStore> {
    store: S,
    state: PluginState,
}

impl<S: ChanceStore> DropModifier<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            state: PluginState::Loaded,
        }
    }

    pub fn state(&self) -> PluginState {
        self.state
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    /// Register the command. Without it the plugin disables itself.
    pub fn on_enable<H: PluginHost + ?Sized>(&mut self, host: &mut H) -> PluginState {
        info!("DropModifier enabled!");

        if !host.register_command(COMMAND_NAME) {
            error!(command = COMMAND_NAME, "could not get drops command");
            self.state = PluginState::Disabled;
            return self.state;
        }

        self.state = PluginState::Enabled;
        self.state
    }

    pub fn on_disable(&mut self) {
        info!("DropModifier disabled!");
        self.state = PluginState::Disabled;
    }

    /// Apply the break rules to a host event.
    ///
    /// The event is only touched where the outcome differs from the
    /// default. A plugin that is not enabled leaves every event alone.
    pub fn on_block_break<E, R>(&self, event: &mut E, rng: &mut R) -> BreakOutcome
    where
        E: BlockBreakEvent + ?Sized,
        R: Rng + ?Sized,
    {
        if self.state != PluginState::Enabled {
            return BreakOutcome::default();
        }

        let mut ctx = BreakContext::new(event.block());
        ctx.above = event.above();

        let outcome = rules::evaluate(&self.store, &ctx, rng);
        if outcome.clear_above {
            debug!(block = %ctx.block, "clearing block above");
            event.clear_above();
        }
        if !outcome.drop_items {
            debug!(block = %ctx.block, "suppressing drop");
            event.set_drop_items(false);
        }
        outcome
    }

    /// Run `/drops` with the arguments after the label.
    pub fn dispatch<C, A>(&mut self, sender: &mut C, args: &[A]) -> CommandStatus
    where
        C: CommandSender + ?Sized,
        A: AsRef<str>,
    {
        DropsCommand::new(&mut self.store).execute(sender, args)
    }

    /// Tab completions for `/drops`.
    pub fn complete<A: AsRef<str>>(&self, args: &[A]) -> Option<Vec<String>> {
        command::complete(args)
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::chance::{ChanceTable, DropChance};
    use crate::command::{Message, Permission};
    use rand::rngs::mock::StepRng;

    struct Host {
        known: Vec<&'static str>,
        registered: Vec<String>,
    }

    impl PluginHost for Host {
        fn register_command(&mut self, name: &str) -> bool {
            if self.known.iter().any(|known| *known == name) {
                self.registered.push(name.to_string());
                true
            } else {
                false
            }
        }
    }

    #[derive(Default)]
    struct Event {
        block: &'static str,
        above: Option<(&'static str, bool)>,
        drop_items: Option<bool>,
        above_cleared: bool,
    }

    impl BlockBreakEvent for Event {
        fn block(&self) -> BlockKey {
            BlockKey::parse(self.block).unwrap()
        }

        fn above(&self) -> Option<AboveBlock> {
            self.above
                .map(|(name, ageable)| AboveBlock::new(BlockKey::parse(name).unwrap(), ageable))
        }

        fn set_drop_items(&mut self, drop: bool) {
            self.drop_items = Some(drop);
        }

        fn clear_above(&mut self) {
            self.above_cleared = true;
        }
    }

    struct Console(Vec<Message>);

    impl CommandSender for Console {
        fn has_permission(&self, _permission: Permission) -> bool {
            true
        }

        fn send_message(&mut self, message: Message) {
            self.0.push(message);
        }
    }

    fn enabled(table: ChanceTable) -> DropModifier<ChanceTable> {
        let mut plugin = DropModifier::new(table);
        let mut host = Host {
            known: vec!["drops"],
            registered: Vec::new(),
        };
        assert_eq!(plugin.on_enable(&mut host), PluginState::Enabled);
        assert_eq!(host.registered, vec!["drops".to_string()]);
        plugin
    }

    fn table(entries: &[(&str, f64)]) -> ChanceTable {
        entries
            .iter()
            .map(|(name, v)| (BlockKey::parse(name).unwrap(), DropChance::new(*v).unwrap()))
            .collect()
    }

    #[test]
    fn enable_without_command_disables() {
        let mut plugin = DropModifier::new(ChanceTable::new());
        let mut host = Host {
            known: vec![],
            registered: Vec::new(),
        };
        assert_eq!(plugin.on_enable(&mut host), PluginState::Disabled);
        assert_eq!(plugin.state(), PluginState::Disabled);
    }

    #[test]
    fn disable_transitions_state() {
        let mut plugin = enabled(ChanceTable::new());
        plugin.on_disable();
        assert_eq!(plugin.state(), PluginState::Disabled);
    }

    #[test]
    fn break_applies_outcome_to_event() {
        let plugin = enabled(table(&[("farmland", 0.0), ("wheat", 0.0)]));
        let mut event = Event {
            block: "farmland",
            above: Some(("wheat", true)),
            ..Event::default()
        };

        let outcome = plugin.on_block_break(&mut event, &mut StepRng::new(0, 0));
        assert!(!outcome.drop_items);
        assert!(outcome.clear_above);
        assert_eq!(event.drop_items, Some(false));
        assert!(event.above_cleared);
    }

    #[test]
    fn default_outcome_leaves_event_untouched() {
        let plugin = enabled(table(&[("stone", 1.0)]));
        let mut event = Event {
            block: "stone",
            ..Event::default()
        };

        plugin.on_block_break(&mut event, &mut StepRng::new(0, 0));
        assert_eq!(event.drop_items, None);
        assert!(!event.above_cleared);
    }

    #[test]
    fn loaded_plugin_ignores_breaks() {
        let plugin = DropModifier::new(table(&[("stone", 0.0)]));
        let mut event = Event {
            block: "stone",
            ..Event::default()
        };

        let outcome = plugin.on_block_break(&mut event, &mut StepRng::new(0, 0));
        assert!(outcome.is_default());
        assert_eq!(event.drop_items, None);
    }

    #[test]
    fn dispatch_updates_store_used_by_breaks() {
        let mut plugin = enabled(ChanceTable::new());
        let mut console = Console(Vec::new());

        let status = plugin.dispatch(&mut console, &["set", "stone", "0"]);
        assert_eq!(status, CommandStatus::Handled);
        assert_eq!(plugin.store().len(), 1);

        let mut event = Event {
            block: "stone",
            ..Event::default()
        };
        plugin.on_block_break(&mut event, &mut StepRng::new(0, 0));
        assert_eq!(event.drop_items, Some(false));
    }

    #[test]
    fn complete_delegates_to_command() {
        let plugin = enabled(ChanceTable::new());
        assert_eq!(plugin.complete(&["g"]), Some(vec!["get".to_string()]));
    }
}
