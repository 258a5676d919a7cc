//! # `/drops` Command
//!
//! Maps textual subcommands onto a [`ChanceStore`].
//!
//! ```text
//! drops set <block> <chance>    set a chance (0..=1)
//! drops get [block]             show one chance, or all of them
//! drops remove <block>          forget a chance
//! ```
//!
//! Replies are [`Message`]s built from coloured [`Span`]s; the host decides
//! how to render them. Every handler returns a [`CommandStatus`]:
//! `Usage` asks the host to print [`USAGE`], `Handled` means a reply was
//! already sent.

use crate::block::BlockKey;
use crate::catalog;
use crate::chance::{ChanceStore, ChanceTier, DropChance};
use crate::error::DropError;
use tracing::{error, info};

/// Name the command is registered under.
pub const COMMAND_NAME: &str = "drops";

/// Usage line shown when a handler returns [`CommandStatus::Usage`].
pub const USAGE: &str = "/drops <set|get|remove> [block] [chance]";

/// Known subcommands, in completion order.
pub const SUBCOMMANDS: [&str; 3] = ["set", "get", "remove"];

const ERROR_NO_PERMISSION: &str = "You do not have permission to use this command!";
const ERROR_INVALID_SUBCOMMAND: &str = "Invalid subcommand";
const ERROR_PROVIDE_SUBCOMMAND: &str = "Please provide a subcommand";
const ERROR_PROVIDE_BLOCK: &str = "Please provide a block";
const ERROR_PROVIDE_CHANCE: &str = "Please provide a drop chance";
const ERROR_INVALID_CHANCE: &str = "Drop chance must be a number";
const ERROR_CHANCE_RANGE: &str = "Drop chance must be between 0 and 1";
pub const ERROR_NO_CHANCES: &str = "No drop chances have been set";
const MESSAGE_LIST_CHANCES: &str = "Drop chances:";

// =============================================================================
// MESSAGES
// =============================================================================

/// Text colours a host is expected to support.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Red,
    Gold,
    Yellow,
    Green,
}

impl From<ChanceTier> for Color {
    fn from(tier: ChanceTier) -> Self {
        match tier {
            ChanceTier::Low => Color::Red,
            ChanceTier::Moderate => Color::Gold,
            ChanceTier::High => Color::Yellow,
            ChanceTier::Certain => Color::Green,
        }
    }
}

/// A run of text with an optional colour.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    pub color: Option<Color>,
}

/// A chat line sent back to the command sender.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Message {
    pub spans: Vec<Span>,
}

impl Message {
    /// Uncoloured text.
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            spans: vec![Span {
                text: text.into(),
                color: None,
            }],
        }
    }

    /// Text in one colour.
    pub fn colored(text: impl Into<String>, color: Color) -> Self {
        Self {
            spans: vec![Span {
                text: text.into(),
                color: Some(color),
            }],
        }
    }

    /// Red error text.
    pub fn error(text: impl Into<String>) -> Self {
        Self::colored(text, Color::Red)
    }

    /// Append a chance coloured by its tier.
    #[must_use]
    pub fn with_chance(mut self, chance: DropChance) -> Self {
        self.spans.push(Span {
            text: chance.to_string(),
            color: Some(chance.tier().into()),
        });
        self
    }

    /// The text without colours.
    pub fn to_plain(&self) -> String {
        self.spans.iter().map(|s| s.text.as_str()).collect()
    }

    /// Colour of the first span, if any.
    pub fn color(&self) -> Option<Color> {
        self.spans.first().and_then(|s| s.color)
    }
}

// =============================================================================
// SENDER
// =============================================================================

/// Permission nodes checked by the command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Permission {
    Use,
    Set,
    Get,
    Remove,
}

impl Permission {
    /// The permission node string.
    pub fn node(self) -> &'static str {
        match self {
            Permission::Use => "dropmodifier.use",
            Permission::Set => "dropmodifier.set",
            Permission::Get => "dropmodifier.get",
            Permission::Remove => "dropmodifier.remove",
        }
    }

    /// Every permission, for senders that hold them all.
    pub fn all() -> [Permission; 4] {
        [
            Permission::Use,
            Permission::Set,
            Permission::Get,
            Permission::Remove,
        ]
    }
}

/// Whoever issued the command (a player, the console, a test).
pub trait CommandSender {
    fn has_permission(&self, permission: Permission) -> bool;

    fn send_message(&mut self, message: Message);
}

/// Result of dispatching a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandStatus {
    /// A reply was sent; nothing else to do.
    Handled,
    /// The input was malformed; the host should show [`USAGE`].
    Usage,
}

// =============================================================================
// DISPATCHER
// =============================================================================

/// The `/drops` command bound to a store.
pub struct DropsCommand<'a, S: ChanceStore + ?Sized> {
    store: &'a mut S,
}

impl<'a, S: ChanceStore + ?Sized> DropsCommand<'a, S> {
    pub fn new(store: &'a mut S) -> Self {
        Self { store }
    }

    /// Run the command with the arguments after the label.
    pub fn execute<C, A>(&mut self, sender: &mut C, args: &[A]) -> CommandStatus
    where
        C: CommandSender + ?Sized,
        A: AsRef<str>,
    {
        if !sender.has_permission(Permission::Use) {
            sender.send_message(Message::error(ERROR_NO_PERMISSION));
            return CommandStatus::Handled;
        }

        let Some((first, rest)) = args.split_first() else {
            sender.send_message(Message::error(ERROR_PROVIDE_SUBCOMMAND));
            return CommandStatus::Usage;
        };

        let rest: Vec<&str> = rest.iter().map(|arg| arg.as_ref()).collect();
        match first.as_ref().to_lowercase().as_str() {
            "set" => self.handle_set(sender, &rest),
            "get" => self.handle_get(sender, &rest),
            "remove" => self.handle_remove(sender, &rest),
            _ => {
                sender.send_message(Message::error(ERROR_INVALID_SUBCOMMAND));
                CommandStatus::Usage
            }
        }
    }

    /// `set <block> <chance>`
    fn handle_set<C>(&mut self, sender: &mut C, args: &[&str]) -> CommandStatus
    where
        C: CommandSender + ?Sized,
    {
        if !sender.has_permission(Permission::Set) {
            sender.send_message(Message::error(ERROR_NO_PERMISSION));
            return CommandStatus::Handled;
        }

        let Some(raw_block) = args.first() else {
            sender.send_message(Message::error(ERROR_PROVIDE_BLOCK));
            return CommandStatus::Usage;
        };
        let Some(raw_chance) = args.get(1) else {
            sender.send_message(Message::error(ERROR_PROVIDE_CHANCE));
            return CommandStatus::Usage;
        };

        let chance = match DropChance::parse(raw_chance) {
            Ok(chance) => chance,
            Err(DropError::ChanceOutOfRange(_)) => {
                sender.send_message(Message::error(ERROR_CHANCE_RANGE));
                return CommandStatus::Handled;
            }
            Err(_) => {
                sender.send_message(Message::error(ERROR_INVALID_CHANCE));
                return CommandStatus::Handled;
            }
        };

        let Some(block) = parse_block(sender, raw_block) else {
            return CommandStatus::Handled;
        };

        self.store.set_chance(block.clone(), chance);
        if !self.persist(sender) {
            return CommandStatus::Handled;
        }

        info!(block = %block, chance = %chance, "drop chance set");
        sender.send_message(
            Message::plain(format!("Set drop chance for {block} to ")).with_chance(chance),
        );
        CommandStatus::Handled
    }

    /// `get [block]`
    fn handle_get<C>(&mut self, sender: &mut C, args: &[&str]) -> CommandStatus
    where
        C: CommandSender + ?Sized,
    {
        if !sender.has_permission(Permission::Get) {
            sender.send_message(Message::error(ERROR_NO_PERMISSION));
            return CommandStatus::Handled;
        }

        let Some(raw_block) = args.first() else {
            let entries = self.store.entries();
            if entries.is_empty() {
                sender.send_message(Message::error(ERROR_NO_CHANCES));
                return CommandStatus::Handled;
            }

            sender.send_message(Message::colored(MESSAGE_LIST_CHANCES, Color::Gold));
            for (block, chance) in entries {
                sender.send_message(Message::plain(format!(" - {block}: ")).with_chance(chance));
            }
            return CommandStatus::Handled;
        };

        let Some(block) = parse_block(sender, raw_block) else {
            return CommandStatus::Handled;
        };

        match self.store.chance(&block) {
            Some(chance) => sender.send_message(
                Message::plain(format!("Drop chance for {block} is ")).with_chance(chance),
            ),
            None => sender.send_message(no_chance_for(&block)),
        }
        CommandStatus::Handled
    }

    /// `remove <block>`
    fn handle_remove<C>(&mut self, sender: &mut C, args: &[&str]) -> CommandStatus
    where
        C: CommandSender + ?Sized,
    {
        if !sender.has_permission(Permission::Remove) {
            sender.send_message(Message::error(ERROR_NO_PERMISSION));
            return CommandStatus::Handled;
        }

        let Some(raw_block) = args.first() else {
            sender.send_message(Message::error(ERROR_PROVIDE_BLOCK));
            return CommandStatus::Usage;
        };
        let Some(block) = parse_block(sender, raw_block) else {
            return CommandStatus::Handled;
        };

        if self.store.remove_chance(&block).is_none() {
            sender.send_message(no_chance_for(&block));
            return CommandStatus::Handled;
        }
        if !self.persist(sender) {
            return CommandStatus::Handled;
        }

        info!(block = %block, "drop chance removed");
        sender.send_message(Message::colored(
            format!("Removed drop chance for {block}"),
            Color::Green,
        ));
        CommandStatus::Handled
    }

    fn persist<C>(&mut self, sender: &mut C) -> bool
    where
        C: CommandSender + ?Sized,
    {
        match self.store.save() {
            Ok(()) => true,
            Err(err) => {
                error!(error = %err, "failed to save drop chances");
                sender.send_message(Message::error(format!("Could not save drop chances: {err}")));
                false
            }
        }
    }
}

fn parse_block<C>(sender: &mut C, raw: &str) -> Option<BlockKey>
where
    C: CommandSender + ?Sized,
{
    match BlockKey::parse(raw) {
        Ok(block) => Some(block),
        Err(err) => {
            sender.send_message(Message::error(err.to_string()));
            None
        }
    }
}

/// Red reply for a block with no configured chance.
pub fn no_chance_for(block: &BlockKey) -> Message {
    Message::error(format!("No drop chance has been set for: {block}"))
}

/// Tab completions for the argument being typed.
///
/// `args` includes the partial final argument. Returns `None` when there is
/// nothing to offer for that position.
pub fn complete<A: AsRef<str>>(args: &[A]) -> Option<Vec<String>> {
    match args {
        [partial] => {
            let input = partial.as_ref().to_lowercase();
            Some(
                SUBCOMMANDS
                    .iter()
                    .filter(|sub| sub.starts_with(&input))
                    .map(|sub| (*sub).to_string())
                    .collect(),
            )
        }
        [_, partial] => Some(catalog::completions(partial.as_ref())),
        _ => None,
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::chance::ChanceTable;
    use std::collections::BTreeSet;

    /// Sender that records replies.
    struct Recorder {
        granted: BTreeSet<Permission>,
        replies: Vec<Message>,
    }

    impl Recorder {
        fn admin() -> Self {
            Self::with(&Permission::all())
        }

        fn with(permissions: &[Permission]) -> Self {
            Self {
                granted: permissions.iter().copied().collect(),
                replies: Vec::new(),
            }
        }

        fn last(&self) -> String {
            self.replies.last().map(Message::to_plain).unwrap_or_default()
        }

        fn last_color(&self) -> Option<Color> {
            self.replies.last().and_then(Message::color)
        }
    }

    impl CommandSender for Recorder {
        fn has_permission(&self, permission: Permission) -> bool {
            self.granted.contains(&permission)
        }

        fn send_message(&mut self, message: Message) {
            self.replies.push(message);
        }
    }

    /// Store whose saves always fail.
    #[derive(Default)]
    struct ReadOnly(ChanceTable);

    impl ChanceStore for ReadOnly {
        fn chance(&self, block: &BlockKey) -> Option<DropChance> {
            self.0.chance(block)
        }
        fn set_chance(&mut self, block: BlockKey, chance: DropChance) -> Option<DropChance> {
            self.0.set_chance(block, chance)
        }
        fn remove_chance(&mut self, block: &BlockKey) -> Option<DropChance> {
            self.0.remove_chance(block)
        }
        fn entries(&self) -> Vec<(BlockKey, DropChance)> {
            self.0.entries()
        }
        fn save(&mut self) -> crate::Result<()> {
            Err(DropError::Storage("read-only".to_string()))
        }
    }

    fn run(store: &mut ChanceTable, sender: &mut Recorder, args: &[&str]) -> CommandStatus {
        DropsCommand::new(store).execute(sender, args)
    }

    fn key(name: &str) -> BlockKey {
        BlockKey::parse(name).unwrap()
    }

    #[test]
    fn missing_use_permission_is_handled() {
        let mut store = ChanceTable::new();
        let mut sender = Recorder::with(&[Permission::Set]);
        let status = run(&mut store, &mut sender, &["set", "stone", "0.5"]);
        assert_eq!(status, CommandStatus::Handled);
        assert_eq!(sender.last(), ERROR_NO_PERMISSION);
        assert!(store.is_empty());
    }

    #[test]
    fn missing_sub_permission_is_handled() {
        let mut store = ChanceTable::new();
        let mut sender = Recorder::with(&[Permission::Use, Permission::Get]);
        let status = run(&mut store, &mut sender, &["remove", "stone"]);
        assert_eq!(status, CommandStatus::Handled);
        assert_eq!(sender.last(), ERROR_NO_PERMISSION);
        assert_eq!(sender.last_color(), Some(Color::Red));
    }

    #[test]
    fn no_subcommand_shows_usage() {
        let mut store = ChanceTable::new();
        let mut sender = Recorder::admin();
        let status = run(&mut store, &mut sender, &[]);
        assert_eq!(status, CommandStatus::Usage);
        assert_eq!(sender.last(), ERROR_PROVIDE_SUBCOMMAND);
    }

    #[test]
    fn unknown_subcommand_shows_usage() {
        let mut store = ChanceTable::new();
        let mut sender = Recorder::admin();
        let status = run(&mut store, &mut sender, &["explode"]);
        assert_eq!(status, CommandStatus::Usage);
        assert_eq!(sender.last(), ERROR_INVALID_SUBCOMMAND);
    }

    #[test]
    fn set_stores_normalised_block() {
        let mut store = ChanceTable::new();
        let mut sender = Recorder::admin();
        let status = run(&mut store, &mut sender, &["SET", "Stone", "0.8"]);
        assert_eq!(status, CommandStatus::Handled);
        assert_eq!(store.get(&key("minecraft:stone")).map(DropChance::value), Some(0.8));
        assert_eq!(sender.last(), "Set drop chance for minecraft:stone to 0.8");
        // chance span carries the tier colour
        let spans = &sender.replies[0].spans;
        assert_eq!(spans.last().and_then(|s| s.color), Some(Color::Green));
    }

    #[test]
    fn set_requires_block_and_chance() {
        let mut store = ChanceTable::new();
        let mut sender = Recorder::admin();

        assert_eq!(run(&mut store, &mut sender, &["set"]), CommandStatus::Usage);
        assert_eq!(sender.last(), ERROR_PROVIDE_BLOCK);

        assert_eq!(run(&mut store, &mut sender, &["set", "stone"]), CommandStatus::Usage);
        assert_eq!(sender.last(), ERROR_PROVIDE_CHANCE);
    }

    #[test]
    fn set_rejects_bad_chances() {
        let mut store = ChanceTable::new();
        let mut sender = Recorder::admin();

        assert_eq!(
            run(&mut store, &mut sender, &["set", "stone", "half"]),
            CommandStatus::Handled
        );
        assert_eq!(sender.last(), ERROR_INVALID_CHANCE);

        assert_eq!(
            run(&mut store, &mut sender, &["set", "stone", "1.5"]),
            CommandStatus::Handled
        );
        assert_eq!(sender.last(), ERROR_CHANCE_RANGE);

        run(&mut store, &mut sender, &["set", "stone", "-0.5"]);
        assert_eq!(sender.last(), ERROR_CHANCE_RANGE);

        assert!(store.is_empty());
    }

    #[test]
    fn get_single_block() {
        let mut store = ChanceTable::new();
        store.set(key("wheat"), DropChance::new(0.1).unwrap());
        let mut sender = Recorder::admin();

        run(&mut store, &mut sender, &["get", "WHEAT"]);
        assert_eq!(sender.last(), "Drop chance for minecraft:wheat is 0.1");

        run(&mut store, &mut sender, &["get", "carrots"]);
        assert_eq!(sender.last(), "No drop chance has been set for: minecraft:carrots");
        assert_eq!(sender.last_color(), Some(Color::Red));
    }

    #[test]
    fn get_lists_all_blocks() {
        let mut store = ChanceTable::new();
        store.set(key("wheat"), DropChance::new(0.3).unwrap());
        store.set(key("dirt"), DropChance::new(0.6).unwrap());
        let mut sender = Recorder::admin();

        run(&mut store, &mut sender, &["get"]);
        let lines: Vec<String> = sender.replies.iter().map(Message::to_plain).collect();
        assert_eq!(
            lines,
            vec![
                "Drop chances:",
                " - minecraft:dirt: 0.6",
                " - minecraft:wheat: 0.3",
            ]
        );
        assert_eq!(sender.replies[0].color(), Some(Color::Gold));
    }

    #[test]
    fn get_with_empty_table() {
        let mut store = ChanceTable::new();
        let mut sender = Recorder::admin();
        run(&mut store, &mut sender, &["get"]);
        assert_eq!(sender.last(), ERROR_NO_CHANCES);
    }

    #[test]
    fn remove_existing_and_missing() {
        let mut store = ChanceTable::new();
        store.set(key("stone"), DropChance::NEVER);
        let mut sender = Recorder::admin();

        assert_eq!(run(&mut store, &mut sender, &["remove"]), CommandStatus::Usage);
        assert_eq!(sender.last(), ERROR_PROVIDE_BLOCK);

        run(&mut store, &mut sender, &["remove", "stone"]);
        assert_eq!(sender.last(), "Removed drop chance for minecraft:stone");
        assert_eq!(sender.last_color(), Some(Color::Green));
        assert!(store.is_empty());

        run(&mut store, &mut sender, &["remove", "stone"]);
        assert_eq!(sender.last(), "No drop chance has been set for: minecraft:stone");
    }

    #[test]
    fn invalid_block_is_reported() {
        let mut store = ChanceTable::new();
        let mut sender = Recorder::admin();
        let status = run(&mut store, &mut sender, &["set", "a:b:c", "0.5"]);
        assert_eq!(status, CommandStatus::Handled);
        assert!(sender.last().contains("Invalid block"));
        assert!(store.is_empty());
    }

    #[test]
    fn save_failure_is_reported() {
        let mut store = ReadOnly::default();
        let mut sender = Recorder::admin();
        let status = DropsCommand::new(&mut store).execute(&mut sender, &["set", "stone", "0.5"]);
        assert_eq!(status, CommandStatus::Handled);
        assert!(sender.last().starts_with("Could not save drop chances"));
    }

    #[test]
    fn chance_colours_follow_tiers() {
        let color = |v: f64| {
            Message::plain("")
                .with_chance(DropChance::new(v).unwrap())
                .spans
                .last()
                .and_then(|s| s.color)
        };
        assert_eq!(color(0.1), Some(Color::Red));
        assert_eq!(color(0.3), Some(Color::Gold));
        assert_eq!(color(0.6), Some(Color::Yellow));
        assert_eq!(color(0.9), Some(Color::Green));
    }

    #[test]
    fn completes_subcommands() {
        assert_eq!(complete(&["s"]), Some(vec!["set".to_string()]));
        assert_eq!(complete(&["R"]), Some(vec!["remove".to_string()]));
        assert_eq!(complete(&[""]).map(|v| v.len()), Some(3));
        assert_eq!(complete(&["x"]), Some(vec![]));
    }

    #[test]
    fn completes_blocks_for_second_argument() {
        let found = complete(&["set", "carr"]).unwrap();
        assert_eq!(found, vec!["minecraft:carrots".to_string()]);
    }

    #[test]
    fn no_completion_past_second_argument() {
        assert_eq!(complete(&["set", "stone", "0"]), None);
        assert_eq!(complete::<&str>(&[]), None);
    }
}
