//! CLI argument merging with config

use crate::domain::{Config, SortMode};
use std::path::PathBuf;

#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub output: Option<PathBuf>,
    pub sort: Option<SortMode>,
    pub follow_symlinks: Option<bool>,
}

pub fn merge_cli_with_config(mut base_config: Config, cli: CliOverrides) -> Config {
    if let Some(output) = cli.output {
        base_config.output = output;
    }
    if let Some(sort) = cli.sort {
        base_config.sort = sort;
    }
    if let Some(follow_symlinks) = cli.follow_symlinks {
        base_config.follow_symlinks = follow_symlinks;
    }

    base_config
}

#[cfg(test)]
mod tests {
    use super::{merge_cli_with_config, CliOverrides};
    use crate::domain::{Config, SortMode};
    use std::path::PathBuf;

    #[test]
    fn cli_overrides_replace_base_values() {
        let base = Config { sort: SortMode::Type, output: PathBuf::from("a.txt"), ..Config::default() };

        let cli = CliOverrides {
            output: Some(PathBuf::from("b.txt")),
            sort: Some(SortMode::Abc),
            ..CliOverrides::default()
        };

        let merged = merge_cli_with_config(base, cli);
        assert_eq!(merged.output, PathBuf::from("b.txt"));
        assert_eq!(merged.sort, SortMode::Abc);
        assert!(!merged.follow_symlinks);
    }

    #[test]
    fn absent_overrides_keep_config_values() {
        let base = Config { sort: SortMode::Type, follow_symlinks: true, ..Config::default() };
        let merged = merge_cli_with_config(base.clone(), CliOverrides::default());
        assert_eq!(merged, base);
    }
}
