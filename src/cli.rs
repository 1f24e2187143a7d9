use crate::config::Config;
use crate::state::Destination;
use crate::styles::ThemeType;
use crate::utils::get_config_path;
use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::io::Write;
use std::path::PathBuf;

/// A self-help companion for keeping betting in check
#[derive(Parser, Debug)]
#[command(name = "mindfulbet", version, about, long_about = None)]
pub struct Cli {
    /// Config file to use instead of the default location
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Color theme for this run (overrides the config file)
    #[arg(long, value_enum)]
    pub theme: Option<ThemeArg>,

    /// Disable all UI colors (same as NO_COLOR=1)
    #[arg(long)]
    pub no_colors: bool,

    /// Route of the screen to open first (see `mindfulbet routes`)
    #[arg(long, value_name = "ROUTE")]
    pub start: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// List the screens and their routes
    Routes,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ThemeArg {
    Dark,
    Light,
    #[value(name = "nocolor", alias = "no-color")]
    NoColor,
}

impl From<ThemeArg> for ThemeType {
    fn from(arg: ThemeArg) -> Self {
        match arg {
            ThemeArg::Dark => ThemeType::Dark,
            ThemeArg::Light => ThemeType::Light,
            ThemeArg::NoColor => ThemeType::NoColor,
        }
    }
}

impl Cli {
    pub fn config_path(&self) -> PathBuf {
        self.config.clone().unwrap_or_else(get_config_path)
    }

    /// Load the config file and apply command line overrides on top of it.
    pub fn load_config(&self) -> Result<Config> {
        let path = self.config_path();
        let mut config = Config::load_or_create(&path)
            .with_context(|| format!("Failed to load configuration from {:?}", path))?;
        if let Some(theme) = self.theme {
            config.theme = ThemeType::from(theme).to_config_string().to_string();
        }
        Ok(config)
    }

    /// The theme to install: `--no-colors` wins, then the config (which
    /// already carries `--theme` and `NO_COLOR`).
    pub fn theme_type(&self, config: &Config) -> ThemeType {
        if self.no_colors {
            ThemeType::NoColor
        } else {
            config.theme_type()
        }
    }
}

/// Print one `route<TAB>title` line per destination, in navigation bar order.
pub fn print_routes(out: &mut impl Write) -> Result<()> {
    for dest in Destination::ALL {
        writeln!(out, "{}\t{}", dest.route(), dest.title())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_flags() {
        let cli = Cli::parse_from([
            "mindfulbet",
            "--theme",
            "light",
            "--start",
            "journal",
            "--no-colors",
        ]);
        assert_eq!(cli.theme, Some(ThemeArg::Light));
        assert_eq!(cli.start.as_deref(), Some("journal"));
        assert!(cli.no_colors);
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_parse_routes_subcommand() {
        let cli = Cli::parse_from(["mindfulbet", "routes"]);
        assert_eq!(cli.command, Some(Commands::Routes));
    }

    #[test]
    fn test_nocolor_theme_value() {
        let cli = Cli::parse_from(["mindfulbet", "--theme", "nocolor"]);
        assert_eq!(cli.theme, Some(ThemeArg::NoColor));
    }

    #[test]
    fn test_print_routes() {
        let mut out = Vec::new();
        print_routes(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0], "dashboard\tDashboard");
        assert_eq!(lines[3], "panicButton\tPânico");
    }

    #[test]
    fn test_theme_override_is_applied() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        let cli = Cli::parse_from([
            "mindfulbet",
            "--config",
            path.to_str().unwrap(),
            "--theme",
            "light",
        ]);
        let config = cli.load_config().unwrap();
        assert_eq!(config.theme, "light");
    }
}
