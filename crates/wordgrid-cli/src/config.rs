use crate::cli::GenerateArgs;
use crate::error::{CliError, Result};
use serde::Deserialize;
use std::path::Path;
use std::str::FromStr;
use tracing::debug;
use wordgrid::engine::config as core_config;
use wordgrid::engine::config::DirectionSet;

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
struct PartialGridConfig {
    min_size: Option<usize>,
    max_size: Option<usize>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
struct PartialPlacementConfig {
    attempt_budget: Option<usize>,
    directions: Option<DirectionSet>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
struct PartialGrowthConfig {
    max_steps: Option<usize>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
pub struct PartialGenerationConfig {
    seed: Option<u64>,
    grid: Option<PartialGridConfig>,
    placement: Option<PartialPlacementConfig>,
    growth: Option<PartialGrowthConfig>,
}

impl PartialGenerationConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading configuration from file: {:?}", path);
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })
    }

    /// Resolves the final engine configuration.
    ///
    /// Precedence, highest first: dedicated CLI flags, `--set` values, the
    /// config file, engine defaults.
    pub fn merge_with_cli(mut self, args: &GenerateArgs) -> Result<core_config::GenerationConfig> {
        self.apply_set_values(&args.set_values)?;

        let grid = self.grid.take().unwrap_or_default();
        let placement = self.placement.take().unwrap_or_default();
        let growth = self.growth.take().unwrap_or_default();

        let directions = if args.reversed {
            DirectionSet::WithReversed
        } else {
            placement.directions.unwrap_or_default()
        };

        core_config::GenerationConfigBuilder::new()
            .min_size(args.min_size.or(grid.min_size).unwrap_or(0))
            .max_size(args.max_size.or(grid.max_size))
            .attempt_budget(
                args.attempt_budget
                    .or(placement.attempt_budget)
                    .unwrap_or(core_config::DEFAULT_ATTEMPT_BUDGET),
            )
            .max_growth_steps(
                args.max_growth_steps
                    .or(growth.max_steps)
                    .unwrap_or(core_config::DEFAULT_MAX_GROWTH_STEPS),
            )
            .directions(directions)
            .seed(args.seed.or(self.seed))
            .build()
            .map_err(|e| CliError::Config(e.to_string()))
    }

    fn apply_set_values(&mut self, set_values: &[String]) -> Result<()> {
        for kv_pair in set_values {
            let Some((key, value_str)) = kv_pair.split_once('=') else {
                return Err(CliError::Config(format!(
                    "Invalid --set format: '{}'. Expected KEY=VALUE.",
                    kv_pair
                )));
            };

            match key {
                "seed" => {
                    self.seed = Some(parse_value(key, value_str)?);
                }
                "grid.min-size" => {
                    self.grid.get_or_insert_with(Default::default).min_size =
                        Some(parse_value(key, value_str)?);
                }
                "grid.max-size" => {
                    self.grid.get_or_insert_with(Default::default).max_size =
                        Some(parse_value(key, value_str)?);
                }
                "placement.attempt-budget" => {
                    self.placement
                        .get_or_insert_with(Default::default)
                        .attempt_budget = Some(parse_value(key, value_str)?);
                }
                "placement.directions" => {
                    let set = match value_str {
                        "forward" => DirectionSet::Forward,
                        "with-reversed" => DirectionSet::WithReversed,
                        other => {
                            return Err(CliError::Config(format!(
                                "Invalid value for {}: '{}'. Expected 'forward' or 'with-reversed'.",
                                key, other
                            )));
                        }
                    };
                    self.placement.get_or_insert_with(Default::default).directions = Some(set);
                }
                "growth.max-steps" => {
                    self.growth.get_or_insert_with(Default::default).max_steps =
                        Some(parse_value(key, value_str)?);
                }
                _ => {
                    return Err(CliError::Config(format!(
                        "Unsupported configuration key for --set: '{}'",
                        key
                    )));
                }
            }
        }
        Ok(())
    }
}

fn parse_value<T: FromStr>(key: &str, value_str: &str) -> Result<T> {
    value_str.trim().parse().map_err(|_| {
        CliError::Config(format!(
            "Invalid integer value for {}: {}",
            key, value_str
        ))
    })
}
