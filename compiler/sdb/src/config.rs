//! Session configuration.

use sdb_ir::Word;
use sdb_isa::MemoryConfig;

/// Environment variable holding the guest memory base.
pub const PMEM_BASE_VAR: &str = "SDB_PMEM_BASE";
/// Environment variable holding the guest memory size in bytes.
pub const PMEM_SIZE_VAR: &str = "SDB_PMEM_SIZE";
/// Log filter directives, read the same way `tracing_subscriber` would.
pub const LOG_FILTER_VAR: &str = "RUST_LOG";

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{var}={value:?} is not a decimal or 0x-prefixed hex number")]
    InvalidNumber { var: &'static str, value: String },
    #[error("{var} must be non-zero")]
    ZeroSize { var: &'static str },
    #[error("guest memory at {base:#x} with size {size:#x} wraps the address space")]
    Overflow { base: Word, size: usize },
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SdbConfig {
    pub memory: MemoryConfig,
    /// `EnvFilter` directives; `None` leaves tracing uninitialized.
    pub log_filter: Option<String>,
}

impl SdbConfig {
    /// Read the process environment, falling back to defaults for unset
    /// variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Like [`from_env`](Self::from_env) with a custom variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = SdbConfig::default();

        if let Some(value) = lookup(PMEM_BASE_VAR) {
            config.memory.base = parse_number(PMEM_BASE_VAR, &value)?;
        }
        if let Some(value) = lookup(PMEM_SIZE_VAR) {
            let size = parse_number(PMEM_SIZE_VAR, &value)?;
            config.memory.size = usize::try_from(size).map_err(|_| ConfigError::InvalidNumber {
                var: PMEM_SIZE_VAR,
                value: value.clone(),
            })?;
            if config.memory.size == 0 {
                return Err(ConfigError::ZeroSize { var: PMEM_SIZE_VAR });
            }
        }
        let fits = Word::try_from(config.memory.size)
            .ok()
            .and_then(|size| config.memory.base.checked_add(size))
            .is_some();
        if !fits {
            return Err(ConfigError::Overflow {
                base: config.memory.base,
                size: config.memory.size,
            });
        }

        config.log_filter = lookup(LOG_FILTER_VAR).filter(|f| !f.trim().is_empty());
        tracing::debug!(?config, "configuration loaded");
        Ok(config)
    }
}

fn parse_number(var: &'static str, value: &str) -> Result<Word, ConfigError> {
    let text = value.trim();
    let parsed = match text.strip_prefix("0x").or_else(|| text.strip_prefix("0X")) {
        Some(hex) => Word::from_str_radix(hex, 16),
        None => text.parse::<Word>(),
    };
    parsed.map_err(|_| ConfigError::InvalidNumber {
        var,
        value: value.to_owned(),
    })
}
