//! Named rule-set storage with a fallback chain and per-process caching.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, PoisonError, RwLock};

use tracing::{debug, warn};

use scrub_model::Rule;

use crate::error::RulesError;

/// Environment variable for overriding the rules directory.
pub const RULES_DIR_ENV_VAR: &str = "SCRUB_RULES_DIR";

/// Terminal fallback rule-set name.
pub const DEFAULT_RULE_SET: &str = "default";

/// Get the rules root directory.
///
/// Resolution order:
/// 1. `SCRUB_RULES_DIR` environment variable
/// 2. `rules/` directory relative to workspace root
pub fn rules_root() -> PathBuf {
    if let Ok(root) = std::env::var(RULES_DIR_ENV_VAR) {
        return PathBuf::from(root);
    }
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../rules")
}

/// Rule-set store backed by a directory of `<name>_rules.json` files.
///
/// Loads are cached under the originally requested name, so repeated calls
/// never re-read storage. The cache has no eviction — the set of known
/// rule-set names is small and fixed, and a restart clears it. Ownership of
/// the cache lives here rather than in ambient global state to keep test
/// isolation straightforward.
#[derive(Debug, Default)]
pub struct RuleStore {
    dir: PathBuf,
    cache: RwLock<BTreeMap<String, Arc<[Rule]>>>,
}

impl RuleStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            cache: RwLock::new(BTreeMap::new()),
        }
    }

    /// Store rooted at the conventional rules directory.
    pub fn open_default() -> Self {
        Self::new(rules_root())
    }

    /// File path a rule-set name resolves to.
    pub fn rule_set_path(&self, name: &str) -> PathBuf {
        self.dir.join(format!("{name}_rules.json"))
    }

    /// Load a named rule set.
    ///
    /// Fallback chain: `<name>_rules.json`, then `default_rules.json`, then
    /// an empty rule set with a logged warning. The outcome (including the
    /// empty one) is cached under `name`. Malformed JSON propagates as
    /// `RulesError::Json` and is not cached, so a fixed file is picked up on
    /// the next call.
    ///
    /// Concurrent first-callers for the same name may each perform the read;
    /// the reads are idempotent and the first insert wins, so all callers
    /// agree on one result.
    pub fn load(&self, name: &str) -> Result<Arc<[Rule]>, RulesError> {
        {
            let cache = self
                .cache
                .read()
                .unwrap_or_else(PoisonError::into_inner);
            if let Some(cached) = cache.get(name) {
                debug!(rule_set = name, "rule-set cache hit");
                return Ok(Arc::clone(cached));
            }
        }

        let loaded = self.read_with_fallback(name)?;
        let mut cache = self
            .cache
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        let entry = cache.entry(name.to_string()).or_insert(loaded);
        Ok(Arc::clone(entry))
    }

    fn read_with_fallback(&self, name: &str) -> Result<Arc<[Rule]>, RulesError> {
        let primary = self.rule_set_path(name);
        if let Some(rules) = read_rule_set(&primary)? {
            debug!(rule_set = name, rules = rules.len(), "loaded rule set");
            return Ok(rules.into());
        }

        if name != DEFAULT_RULE_SET {
            let fallback = self.rule_set_path(DEFAULT_RULE_SET);
            if let Some(rules) = read_rule_set(&fallback)? {
                debug!(
                    rule_set = name,
                    fallback = DEFAULT_RULE_SET,
                    rules = rules.len(),
                    "rule set not found, using default"
                );
                return Ok(rules.into());
            }
        }

        warn!(
            rule_set = name,
            dir = %self.dir.display(),
            "no rule set found, evaluating with an empty rule list"
        );
        Ok(Vec::new().into())
    }
}

/// Read and parse one rule-set file.
///
/// `Ok(None)` means the file does not exist (triggers the fallback chain);
/// any other I/O failure or a parse failure is an error.
fn read_rule_set(path: &Path) -> Result<Option<Vec<Rule>>, RulesError> {
    let text = match std::fs::read_to_string(path) {
        Ok(text) => text,
        Err(source) if source.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(source) => {
            return Err(RulesError::Io {
                path: path.to_path_buf(),
                source,
            });
        }
    };
    serde_json::from_str(&text)
        .map(Some)
        .map_err(|source| RulesError::Json {
            path: path.to_path_buf(),
            source,
        })
}
