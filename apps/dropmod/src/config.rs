//! # Config File
//!
//! JSON-backed [`ChanceStore`].
//!
//! ```json
//! {
//!   "blocks": {
//!     "minecraft:stone": 0.5,
//!     "minecraft:wheat": 0.25
//!   }
//! }
//! ```
//!
//! Loading is forgiving: keys are normalised and entries that are not a
//! number in `[0, 1]` are skipped with a warning. Saving is strict and
//! always writes normalised, sorted keys.

use crate::error::CliError;
use dropmod_core::{BlockKey, ChanceStore, ChanceTable, DropChance, DropError};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Config path used when neither `--config` nor `DROPMOD_CONFIG` is set.
pub const DEFAULT_CONFIG: &str = "dropmod.json";

/// On-disk shape while reading. Values stay untyped so one bad entry does
/// not reject the whole file.
#[derive(Debug, Default, Deserialize)]
struct RawConfig {
    #[serde(default)]
    blocks: Map<String, Value>,
}

/// On-disk shape while writing.
#[derive(Debug, Serialize)]
struct ConfigFile<'a> {
    blocks: &'a ChanceTable,
}

/// Parse config text into a table, skipping invalid entries.
pub fn parse_table(text: &str, path: &Path) -> Result<ChanceTable, CliError> {
    let raw: RawConfig = serde_json::from_str(text).map_err(|source| CliError::Config {
        path: path.to_path_buf(),
        source,
    })?;

    let mut table = ChanceTable::new();
    for (name, value) in raw.blocks {
        let key = match BlockKey::parse(&name) {
            Ok(key) => key,
            Err(err) => {
                warn!(entry = %name, error = %err, "skipping config entry");
                continue;
            }
        };
        let Some(number) = value.as_f64() else {
            warn!(entry = %name, value = %value, "skipping non-numeric drop chance");
            continue;
        };
        let chance = match DropChance::new(number) {
            Ok(chance) => chance,
            Err(err) => {
                warn!(entry = %name, error = %err, "skipping config entry");
                continue;
            }
        };
        if table.set(key.clone(), chance).is_some() {
            warn!(block = %key, "duplicate entry after normalisation, last one wins");
        }
    }
    Ok(table)
}

/// Render a table in the on-disk format.
pub fn render_table(table: &ChanceTable) -> Result<String, CliError> {
    let mut text = serde_json::to_string_pretty(&ConfigFile { blocks: table })?;
    text.push('\n');
    Ok(text)
}

/// A chance table bound to a JSON file.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    table: ChanceTable,
}

impl FileStore {
    /// Load the file, or start empty if it does not exist yet.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, CliError> {
        let path = path.into();

        if !path.exists() {
            debug!(path = %path.display(), "config file missing, starting empty");
            return Ok(Self {
                path,
                table: ChanceTable::new(),
            });
        }

        let text = fs::read_to_string(&path).map_err(|e| CliError::io(&path, e))?;
        let table = parse_table(&text, &path)?;
        info!(path = %path.display(), entries = table.len(), "loaded drop chances");
        Ok(Self { path, table })
    }

    /// Write a fresh, empty config file.
    pub fn create(path: impl Into<PathBuf>, force: bool) -> Result<Self, CliError> {
        let path = path.into();
        if path.exists() && !force {
            return Err(CliError::AlreadyExists(path));
        }

        let store = Self {
            path,
            table: ChanceTable::new(),
        };
        store.write()?;
        Ok(store)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn table(&self) -> &ChanceTable {
        &self.table
    }

    /// Write the table through a sibling temp file and rename it into place.
    pub fn write(&self) -> Result<(), CliError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| CliError::io(parent, e))?;
        }

        let text = render_table(&self.table)?;
        let tmp = temp_path(&self.path);
        fs::write(&tmp, text).map_err(|e| CliError::io(&tmp, e))?;
        if let Err(e) = fs::rename(&tmp, &self.path) {
            if let Err(cleanup) = fs::remove_file(&tmp) {
                warn!(path = %tmp.display(), error = %cleanup, "could not remove temp file");
            }
            return Err(CliError::io(&self.path, e));
        }

        debug!(path = %self.path.display(), entries = self.table.len(), "saved drop chances");
        Ok(())
    }
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_else(|| DEFAULT_CONFIG.into());
    name.push(".tmp");
    path.with_file_name(name)
}

impl ChanceStore for FileStore {
    fn chance(&self, block: &BlockKey) -> Option<DropChance> {
        self.table.get(block)
    }

    fn set_chance(&mut self, block: BlockKey, chance: DropChance) -> Option<DropChance> {
        self.table.set(block, chance)
    }

    fn remove_chance(&mut self, block: &BlockKey) -> Option<DropChance> {
        self.table.remove(block)
    }

    fn entries(&self) -> Vec<(BlockKey, DropChance)> {
        self.table.entries()
    }

    fn save(&mut self) -> dropmod_core::Result<()> {
        self.write()
            .map_err(|err| DropError::Storage(err.to_string()))
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn key(name: &str) -> BlockKey {
        BlockKey::parse(name).unwrap()
    }

    #[test]
    fn parse_normalises_keys() {
        let text = r#"{"blocks": {"Stone": 0.5, "minecraft:WHEAT": 1}}"#;
        let table = parse_table(text, Path::new("test.json")).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.get(&key("stone")).map(DropChance::value), Some(0.5));
        assert_eq!(table.get(&key("wheat")).map(DropChance::value), Some(1.0));
    }

    #[test]
    fn parse_skips_invalid_entries() {
        let text = r#"{"blocks": {
            "stone": 2.0,
            "dirt": "lots",
            "bad name": 0.5,
            "sand": -1,
            "gravel": 0.25
        }}"#;
        let table = parse_table(text, Path::new("test.json")).unwrap();
        assert_eq!(table.len(), 1);
        assert!(table.contains(&key("gravel")));
    }

    #[test]
    fn parse_accepts_missing_blocks_section() {
        let table = parse_table("{}", Path::new("test.json")).unwrap();
        assert!(table.is_empty());
    }

    #[test]
    fn parse_rejects_malformed_json() {
        let result = parse_table("blocks: [", Path::new("test.json"));
        assert!(matches!(result, Err(CliError::Config { .. })));
    }

    #[test]
    fn render_writes_sorted_normalised_keys() {
        let table: ChanceTable = [
            (key("wheat"), DropChance::new(0.25).unwrap()),
            (key("dirt"), DropChance::ALWAYS),
        ]
        .into_iter()
        .collect();

        let text = render_table(&table).unwrap();
        let dirt = text.find("minecraft:dirt").unwrap();
        let wheat = text.find("minecraft:wheat").unwrap();
        assert!(dirt < wheat);

        let back = parse_table(&text, Path::new("test.json")).unwrap();
        assert_eq!(back, table);
    }

    #[test]
    fn temp_path_is_a_sibling() {
        let tmp = temp_path(Path::new("/srv/plugins/dropmod.json"));
        assert_eq!(tmp, PathBuf::from("/srv/plugins/dropmod.json.tmp"));
    }

    #[test]
    fn failed_rename_leaves_no_temp_file() {
        let dir = tempfile::tempdir().unwrap();
        // a non-empty directory in place of the config cannot be replaced
        let target = dir.path().join("dropmod.json");
        fs::create_dir(&target).unwrap();
        fs::write(target.join("keep"), "").unwrap();

        let store = FileStore {
            path: target.clone(),
            table: ChanceTable::new(),
        };
        assert!(matches!(store.write(), Err(CliError::Io { .. })));
        assert!(!temp_path(&target).exists());
        assert!(target.join("keep").exists());
    }
}
