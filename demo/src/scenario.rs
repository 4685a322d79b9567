//! Scenario configuration.
//!
//! A scenario names the keys to insert and the keys to delete afterwards. It
//! can come from a YAML file, from the command line, or from both, with the
//! command line taking precedence.

use anyhow::{Context, Result};
use clap::Args;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Keys inserted when nothing else is configured.
pub const REFERENCE_INSERT: [i64; 8] = [29, 8, 20, 3, 9, 21, 2, 13];

/// Keys deleted when nothing else is configured.
pub const REFERENCE_DELETE: [i64; 2] = [9, 13];

/// Arguments selecting the scenario to run
#[derive(Args, Debug, Default)]
pub struct ScenarioArgs {
    /// Scenario YAML file path
    #[arg(long, short = 's')]
    pub scenario: Option<PathBuf>,

    /// Keys to insert, in order (overrides the scenario file)
    #[arg(long, short = 'i', value_delimiter = ',', allow_negative_numbers = true)]
    pub insert: Option<Vec<i64>>,

    /// Keys to delete after inserting, in order (overrides the scenario file)
    #[arg(long, short = 'd', value_delimiter = ',', allow_negative_numbers = true)]
    pub delete: Option<Vec<i64>>,
}

/// Scenario configuration from YAML
#[derive(Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ScenarioConfig {
    pub name: Option<String>,
    pub insert: Option<Vec<i64>>,
    pub delete: Option<Vec<i64>>,
}

/// A fully resolved scenario
#[derive(Debug, PartialEq, Eq)]
pub struct Scenario {
    pub name: String,
    pub insert: Vec<i64>,
    pub delete: Vec<i64>,
}

impl ScenarioConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read scenario file: {}", path.display()))?;
        Self::parse(&content)
            .with_context(|| format!("Failed to parse scenario file: {}", path.display()))
    }

    pub fn parse(content: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(content)?)
    }
}

impl Scenario {
    /// Merges the command line over the scenario file over the reference dataset.
    pub fn resolve(args: ScenarioArgs) -> Result<Self> {
        let config = match &args.scenario {
            Some(path) => ScenarioConfig::load(path)?,
            None => ScenarioConfig::default(),
        };
        Ok(Self::merge(args, config))
    }

    fn merge(args: ScenarioArgs, config: ScenarioConfig) -> Self {
        let from_command_line = args.insert.is_some() || args.delete.is_some();
        let name = match (config.name, from_command_line) {
            (_, true) => "command-line".to_string(),
            (Some(name), false) => name,
            (None, false) => "reference".to_string(),
        };
        Self {
            name,
            insert: args
                .insert
                .or(config.insert)
                .unwrap_or_else(|| REFERENCE_INSERT.to_vec()),
            delete: args
                .delete
                .or(config.delete)
                .unwrap_or_else(|| REFERENCE_DELETE.to_vec()),
        }
    }
}
