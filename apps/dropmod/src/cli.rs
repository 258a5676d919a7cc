//! # CLI
//!
//! Argument definitions and one `cmd_*` function per subcommand.
//!
//! `set`, `get` and `remove` go through the same `/drops` dispatcher a game
//! server would use, with the terminal acting as a console sender that holds
//! every permission.

use crate::config::{DEFAULT_CONFIG, FileStore};
use crate::error::CliError;
use clap::{Parser, Subcommand};
use colored::Colorize;
use dropmod_core::catalog;
use dropmod_core::command::{COMMAND_NAME, ERROR_NO_CHANCES, USAGE, complete, no_chance_for};
use dropmod_core::{
    AboveBlock, BlockBreakEvent, BlockKey, ChanceStore, Color, CommandSender, CommandStatus,
    DropModifier, Message, Permission, PluginHost, PluginState,
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Serialize;
use serde_json::{Map, Value, json};
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

// =============================================================================
// ARGUMENTS
// =============================================================================

#[derive(Debug, Parser)]
#[command(name = "dropmod", version)]
#[command(about = "Configure per-block drop chances and simulate block breaks")]
pub struct Cli {
    /// Path to the drop-chance config file
    #[arg(short, long, global = true, env = "DROPMOD_CONFIG", default_value = DEFAULT_CONFIG)]
    pub config: PathBuf,

    /// Print machine-readable JSON instead of chat-style lines
    #[arg(long, global = true)]
    pub json: bool,

    /// Enable debug logging (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Create an empty config file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Set the drop chance for a block
    Set {
        /// Block id, e.g. `stone` or `minecraft:wheat`
        block: String,
        /// Probability in [0, 1] that the block drops its item
        #[arg(allow_hyphen_values = true)]
        chance: String,
    },

    /// Show the drop chance for a block, or every configured chance
    ///
    /// Exits non-zero when nothing is set, in both chat and --json output.
    Get {
        /// Block id; omit to list all
        block: Option<String>,
    },

    /// Remove the drop chance for a block
    Remove {
        /// Block id
        block: String,
    },

    /// Print tab completions for partial `/drops` arguments
    Complete {
        /// Arguments typed so far, the last one partial
        #[arg(allow_hyphen_values = true)]
        args: Vec<String>,
    },

    /// Simulate breaking a block against the configured chances
    Break {
        /// Block that is broken
        block: String,

        /// Block sitting directly above it
        #[arg(long)]
        above: Option<String>,

        /// Treat the block above as ageable even if the catalog does not
        #[arg(long, requires = "above")]
        ageable: bool,

        /// Number of breaks to simulate
        #[arg(long, default_value_t = 1)]
        rolls: u32,

        /// RNG seed for reproducible runs
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Read `/drops` commands from stdin, one per line
    Console,
}

// =============================================================================
// TERMINAL SENDER
// =============================================================================

/// Console sender writing chat lines to a terminal or buffer.
pub struct TerminalSender<W: Write> {
    out: W,
    errors: Vec<String>,
    io_error: Option<io::Error>,
}

impl<W: Write> TerminalSender<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            errors: Vec::new(),
            io_error: None,
        }
    }

    /// Red replies received since the last call.
    pub fn take_errors(&mut self) -> Vec<String> {
        std::mem::take(&mut self.errors)
    }

    /// Surface the first write failure, if any.
    pub fn finish(&mut self) -> Result<(), CliError> {
        match self.io_error.take() {
            Some(err) => Err(CliError::Output(err)),
            None => Ok(()),
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_line(&mut self, line: &str) {
        if self.io_error.is_some() {
            return;
        }
        if let Err(err) = writeln!(self.out, "{line}") {
            self.io_error = Some(err);
        }
    }
}

impl<W: Write> CommandSender for TerminalSender<W> {
    fn has_permission(&self, _permission: Permission) -> bool {
        true
    }

    fn send_message(&mut self, message: Message) {
        if message.color() == Some(Color::Red) {
            self.errors.push(message.to_plain());
        }
        let line = render(&message);
        self.write_line(&line);
    }
}

/// Render a chat message with terminal colours.
pub fn render(message: &Message) -> String {
    message
        .spans
        .iter()
        .map(|span| match span.color {
            None => span.text.normal().to_string(),
            Some(Color::Red) => span.text.red().to_string(),
            Some(Color::Gold) => span.text.truecolor(255, 170, 0).to_string(),
            Some(Color::Yellow) => span.text.bright_yellow().to_string(),
            Some(Color::Green) => span.text.green().to_string(),
        })
        .collect()
}

// =============================================================================
// DROPS DISPATCH
// =============================================================================

/// Run one `/drops` invocation against the config file.
///
/// Red replies or a usage request turn into `CliError::Command`.
pub fn run_drops<W: Write>(config: &Path, args: &[&str], out: W) -> Result<W, CliError> {
    let mut store = FileStore::open(config)?;
    let mut sender = TerminalSender::new(out);

    let status = dropmod_core::DropsCommand::new(&mut store).execute(&mut sender, args);
    if status == CommandStatus::Usage {
        sender.write_line(&format!("Usage: {USAGE}"));
    }
    sender.finish()?;

    let errors = sender.take_errors();
    if let Some(first) = errors.into_iter().next() {
        return Err(CliError::Command(first));
    }
    if status == CommandStatus::Usage {
        return Err(CliError::Command(format!("Usage: {USAGE}")));
    }
    Ok(sender.into_inner())
}

// =============================================================================
// COMMANDS
// =============================================================================

/// Create an empty config file.
pub fn cmd_init(config: &Path, force: bool) -> Result<(), CliError> {
    let store = FileStore::create(config, force)?;
    info!(path = %store.path().display(), "initialised config");
    println!("Created {}", store.path().display());
    Ok(())
}

/// `/drops set <block> <chance>`
pub fn cmd_set(config: &Path, block: &str, chance: &str) -> Result<(), CliError> {
    run_drops(config, &["set", block, chance], io::stdout().lock())?;
    Ok(())
}

/// `/drops get [block]`, or the table as JSON.
pub fn cmd_get(config: &Path, block: Option<&str>, json_mode: bool) -> Result<(), CliError> {
    if json_mode {
        write_get_json(config, block, io::stdout().lock())?;
        return Ok(());
    }

    let mut args = vec!["get"];
    args.extend(block);
    run_drops(config, &args, io::stdout().lock())?;
    Ok(())
}

/// JSON view of one entry (`null` when unset) or of the whole table.
pub fn get_json(config: &Path, block: Option<&str>) -> Result<Value, CliError> {
    let store = FileStore::open(config)?;

    if let Some(raw) = block {
        let key = BlockKey::parse(raw)?;
        let chance = store.chance(&key).map(|c| c.value());
        return Ok(json!({ "block": key.as_str(), "chance": chance }));
    }

    let blocks: Map<String, Value> = store
        .entries()
        .into_iter()
        .map(|(key, chance)| (key.to_string(), json!(chance.value())))
        .collect();
    Ok(json!({ "blocks": blocks }))
}

/// Print the JSON view of `get`.
///
/// Fails with the same reply as chat mode when the block (or the whole
/// table) has no chance set, after the JSON has been written.
pub fn write_get_json<W: Write>(
    config: &Path,
    block: Option<&str>,
    mut out: W,
) -> Result<W, CliError> {
    let value = get_json(config, block)?;
    writeln!(out, "{}", serde_json::to_string_pretty(&value)?)?;

    match block {
        Some(raw) if value.get("chance").is_none_or(Value::is_null) => {
            let key = BlockKey::parse(raw)?;
            Err(CliError::Command(no_chance_for(&key).to_plain()))
        }
        None if value
            .get("blocks")
            .and_then(Value::as_object)
            .is_none_or(Map::is_empty) =>
        {
            Err(CliError::Command(ERROR_NO_CHANCES.to_string()))
        }
        _ => Ok(out),
    }
}

/// `/drops remove <block>`
pub fn cmd_remove(config: &Path, block: &str) -> Result<(), CliError> {
    run_drops(config, &["remove", block], io::stdout().lock())?;
    Ok(())
}

/// Print completions for partial `/drops` arguments, one per line.
pub fn cmd_complete(args: &[String]) -> Result<Vec<String>, CliError> {
    let completions = complete(args).unwrap_or_default();
    let mut out = io::stdout().lock();
    for line in &completions {
        writeln!(out, "{line}")?;
    }
    Ok(completions)
}

// =============================================================================
// BREAK SIMULATION
// =============================================================================

/// Tally of a simulated break run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BreakSummary {
    pub block: BlockKey,
    pub above: Option<AboveBlock>,
    pub rolls: u32,
    /// Breaks that kept their default drop.
    pub dropped: u32,
    /// Breaks that turned the block above into air.
    pub cleared_above: u32,
}

/// Host stand-in: the binary always knows the `drops` label.
struct CliHost;

impl PluginHost for CliHost {
    fn register_command(&mut self, name: &str) -> bool {
        debug!(command = name, "registered command");
        true
    }
}

/// One simulated break event.
struct SimulatedBreak<'a> {
    block: &'a BlockKey,
    above: Option<&'a AboveBlock>,
    drop_items: bool,
    above_cleared: bool,
}

impl BlockBreakEvent for SimulatedBreak<'_> {
    fn block(&self) -> BlockKey {
        self.block.clone()
    }

    fn above(&self) -> Option<AboveBlock> {
        self.above.cloned()
    }

    fn set_drop_items(&mut self, drop: bool) {
        self.drop_items = drop;
    }

    fn clear_above(&mut self) {
        self.above_cleared = true;
    }
}

/// Break `block` `rolls` times against the configured chances.
///
/// Without `--ageable` the catalog decides whether the block above is a crop.
pub fn simulate_breaks(
    config: &Path,
    block: &str,
    above: Option<&str>,
    force_ageable: bool,
    rolls: u32,
    seed: Option<u64>,
) -> Result<BreakSummary, CliError> {
    let block = BlockKey::parse(block)?;
    let above = above
        .map(|raw| -> Result<AboveBlock, CliError> {
            let key = BlockKey::parse(raw)?;
            let ageable = force_ageable || catalog::is_ageable(&key);
            Ok(AboveBlock::new(key, ageable))
        })
        .transpose()?;

    let mut plugin = DropModifier::new(FileStore::open(config)?);
    if plugin.on_enable(&mut CliHost) != PluginState::Enabled {
        return Err(CliError::Command("plugin failed to enable".to_string()));
    }

    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut summary = BreakSummary {
        block: block.clone(),
        above: above.clone(),
        rolls,
        dropped: 0,
        cleared_above: 0,
    };

    for _ in 0..rolls {
        let mut event = SimulatedBreak {
            block: &block,
            above: above.as_ref(),
            drop_items: true,
            above_cleared: false,
        };
        plugin.on_block_break(&mut event, &mut rng);
        if event.drop_items {
            summary.dropped += 1;
        }
        if event.above_cleared {
            summary.cleared_above += 1;
        }
    }

    plugin.on_disable();
    Ok(summary)
}

/// Simulate breaks and print the tally.
pub fn cmd_break(
    config: &Path,
    block: &str,
    above: Option<&str>,
    force_ageable: bool,
    rolls: u32,
    seed: Option<u64>,
    json_mode: bool,
) -> Result<BreakSummary, CliError> {
    let summary = simulate_breaks(config, block, above, force_ageable, rolls, seed)?;

    if json_mode {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(summary);
    }

    println!(
        "Broke {} x{}: {} dropped, {} suppressed",
        summary.block,
        summary.rolls,
        summary.dropped.to_string().green(),
        (summary.rolls - summary.dropped).to_string().red(),
    );
    if let Some(above) = &summary.above {
        let kind = if above.ageable { "ageable" } else { "not ageable" };
        println!(
            "Block above {} ({kind}): cleared {} time(s)",
            above.key,
            summary.cleared_above.to_string().yellow(),
        );
    }
    Ok(summary)
}

// =============================================================================
// CONSOLE
// =============================================================================

/// Dispatch `/drops` lines from `input` until EOF or `exit`.
///
/// Accepts `drops set stone 0.5`, `/drops set stone 0.5` or just
/// `set stone 0.5`. `complete <args..>` prints completions. Returns the
/// number of commands dispatched.
pub fn cmd_console<R: BufRead, W: Write>(
    config: &Path,
    input: R,
    out: W,
) -> Result<usize, CliError> {
    let mut plugin = DropModifier::new(FileStore::open(config)?);
    if plugin.on_enable(&mut CliHost) != PluginState::Enabled {
        return Err(CliError::Command("plugin failed to enable".to_string()));
    }

    let mut sender = TerminalSender::new(out);
    let mut dispatched = 0;

    for line in input.lines() {
        let line = line?;
        let mut words: Vec<&str> = line.split_whitespace().collect();

        if let Some(first) = words.first() {
            let label = first.trim_start_matches('/');
            if label.eq_ignore_ascii_case(COMMAND_NAME) {
                words.remove(0);
            }
        }

        match words.first().map(|w| w.to_lowercase()).as_deref() {
            None => continue,
            Some("exit" | "quit") => break,
            Some("complete") => {
                let completions = plugin.complete(&words[1..]).unwrap_or_default();
                for completion in completions {
                    sender.write_line(&completion);
                }
            }
            Some(_) => {
                dispatched += 1;
                if plugin.dispatch(&mut sender, &words[..]) == CommandStatus::Usage {
                    sender.write_line(&format!("Usage: {USAGE}"));
                }
                // errors were already shown to the operator
                sender.take_errors();
            }
        }
        sender.finish()?;
    }

    plugin.on_disable();
    Ok(dispatched)
}
