use clap::Parser;
use report::chart::{DEFAULT_PANEL_SIZE, MAX_PANEL_SIZE};
use report::Locale;
use std::path::PathBuf;
use world_stats::{ConfigError, WorldConfig};

#[derive(Parser, Debug)]
#[command(
    name = "world-analyzer",
    about = "Count the map blocks of a world and chart where they are"
)]
pub struct Cli {
    /// World directory holding map.sqlite and world.mt [default: .]
    pub world: Option<PathBuf>,
    /// JSON file with the world settings, WORLD and --map-file override it
    #[arg(long, short)]
    pub config: Option<PathBuf>,
    /// Name of the map database inside the world directory [default: map.sqlite]
    #[arg(long)]
    pub map_file: Option<String>,
    /// Where to save the charts
    #[arg(long, short, default_value = "world_analysis.png")]
    pub output: PathBuf,
    /// Skip the charts
    #[arg(long)]
    pub no_image: bool,
    /// Also write the stats as JSON, `-` for stdout
    #[arg(long)]
    pub json: Option<PathBuf>,
    /// Language of the text report: en or ru
    #[arg(long, default_value = "en")]
    pub locale: Locale,
    /// Side of each chart in pixels, at most 4096
    #[arg(long, default_value_t = DEFAULT_PANEL_SIZE, value_parser = clap::value_parser!(u32).range(1..=MAX_PANEL_SIZE as i64))]
    pub panel_size: u32,
}

impl Cli {
    pub fn world_config(&self) -> Result<WorldConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => WorldConfig::load(path)?,
            None => WorldConfig::default(),
        };
        if let Some(world) = &self.world {
            config.world_path = world.clone();
        }
        if let Some(map_file) = &self.map_file {
            config.map_file = map_file.clone();
        }
        Ok(config)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::path::Path;

    #[test]
    pub fn defaults() {
        let cli = Cli::try_parse_from(["world-analyzer"]).unwrap();
        assert_eq!(cli.world_config().unwrap(), WorldConfig::default());
        assert_eq!(cli.output, PathBuf::from("world_analysis.png"));
        assert_eq!(cli.locale, Locale::En);
        assert!(!cli.no_image);
        assert_eq!(cli.json, None);
    }

    #[test]
    pub fn world_and_map_file() {
        let cli = Cli::try_parse_from([
            "world-analyzer",
            "worlds/alpha",
            "--map-file",
            "old.sqlite",
            "--locale",
            "ru",
            "--no-image",
            "--json",
            "-",
        ])
        .unwrap();
        let config = cli.world_config().unwrap();
        assert_eq!(config.map_path(), Path::new("worlds/alpha").join("old.sqlite"));
        assert_eq!(cli.locale, Locale::Ru);
        assert!(cli.no_image);
        assert_eq!(cli.json, Some(PathBuf::from("-")));
    }

    #[test]
    pub fn panel_size_is_bounded() {
        let cli = Cli::try_parse_from(["world-analyzer", "--panel-size", "4096"]).unwrap();
        assert_eq!(cli.panel_size, MAX_PANEL_SIZE);
        assert!(Cli::try_parse_from(["world-analyzer", "--panel-size", "4097"]).is_err());
        assert!(Cli::try_parse_from(["world-analyzer", "--panel-size", "0"]).is_err());
        assert!(Cli::try_parse_from(["world-analyzer", "--panel-size", "2147483647"]).is_err());
    }

    #[test]
    pub fn bad_locale_is_rejected() {
        assert!(Cli::try_parse_from(["world-analyzer", "--locale", "xx"]).is_err());
    }

    #[test]
    pub fn config_file_is_overridden_by_arguments() {
        let path = std::env::temp_dir().join(format!("analyzer_cli_{}.json", std::process::id()));
        std::fs::write(&path, r#"{ "world_path": "/srv/world", "map_file": "a.sqlite" }"#).unwrap();

        let cli = Cli::try_parse_from(["world-analyzer", "--config", path.to_str().unwrap(), "--map-file", "b.sqlite"]).unwrap();
        let config = cli.world_config();
        std::fs::remove_file(&path).unwrap();

        let config = config.unwrap();
        assert_eq!(config.world_path, PathBuf::from("/srv/world"));
        assert_eq!(config.map_file, "b.sqlite");
    }
}
