//! config.rs
//!
//! Precedence: CLI flag, then environment, then built-in default.

use std::path::PathBuf;

use crate::error::GenError;

pub const DEFAULT_SEED: u64 = 24;
pub const SEED_ENV: &str = "SEQBR_SEED";
pub const QUIET_ENV: &str = "SEQBR_QUIET";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub seed: u64,
    pub quiet: bool,
    pub out_dir: PathBuf,
}

impl Settings {
    pub fn resolve(
        seed: Option<u64>,
        quiet: bool,
        out_dir: Option<PathBuf>,
    ) -> Result<Self, GenError> {
        Self::resolve_with(seed, quiet, out_dir, &|k| std::env::var(k).ok())
    }

    fn resolve_with(
        seed: Option<u64>,
        quiet: bool,
        out_dir: Option<PathBuf>,
        env: &dyn Fn(&str) -> Option<String>,
    ) -> Result<Self, GenError> {
        let seed = match seed {
            Some(s) => s,
            None => match env(SEED_ENV) {
                Some(raw) => raw
                    .trim()
                    .parse()
                    .map_err(|_| GenError::InvalidSeed(raw.clone()))?,
                None => DEFAULT_SEED,
            },
        };

        Ok(Self {
            seed,
            quiet: quiet || truthy(env(QUIET_ENV), false),
            out_dir: out_dir.unwrap_or_else(|| PathBuf::from(".")),
        })
    }
}

fn truthy(val: Option<String>, default: bool) -> bool {
    match val {
        Some(val) => {
            let v = val.to_ascii_lowercase();
            matches!(v.as_str(), "1" | "true" | "yes" | "on")
        }
        None => default,
    }
}
