//! Command-line arguments.

use clap::{Parser, Subcommand};

use crate::report::Warning;

#[derive(Debug, Parser)]
#[command(name = "tui-life")]
#[command(version)]
#[command(about = "Conway's Game of Life in the terminal")]
#[command(
    long_about = "Runs Conway's Game of Life in the terminal. Optionally pass a pattern and a \
                  rate in generations per second, or create a configuration file which can also \
                  set colors.\n\nKeys: p pause/resume, space step while paused, q/Esc/Ctrl-C quit."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<CliCommand>,

    /// Starting pattern (see the `patterns` subcommand)
    pub pattern: Option<String>,

    /// Generations per second
    pub fps: Option<String>,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// List available patterns
    #[command(visible_alias = "p")]
    Patterns,

    /// Print the configuration directory path
    #[command(name = "config-location", visible_alias = "cl")]
    ConfigLocation,
}

impl Cli {
    /// Overrides for the configuration file. An FPS that is not a
    /// non-negative integer is ignored with a warning.
    pub fn overrides(&self, warnings: &mut Vec<Warning>) -> (Option<String>, Option<u32>) {
        let fps = self.fps.as_deref().and_then(|raw| match raw.trim().parse::<u32>() {
            Ok(fps) => Some(fps),
            Err(_) => {
                warnings.push(Warning::new(
                    format!("Cannot parse FPS '{}'. Continued without it.", raw),
                    "Pass the rate as a whole number, for example `tui-life glider 30`.",
                ));
                None
            }
        });
        (self.pattern.clone(), fps)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("tui-life").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn pattern_and_fps_positionals() {
        let cli = parse(&["glider", "30"]);
        assert!(cli.command.is_none());
        let mut warnings = Vec::new();
        assert_eq!(cli.overrides(&mut warnings), (Some("glider".into()), Some(30)));
        assert!(warnings.is_empty());
    }

    #[test]
    fn no_arguments() {
        let cli = parse(&[]);
        assert_eq!(cli.overrides(&mut Vec::new()), (None, None));
    }

    #[test]
    fn bad_fps_is_ignored_with_warning() {
        let cli = parse(&["toad", "fast"]);
        let mut warnings = Vec::new();
        assert_eq!(cli.overrides(&mut warnings), (Some("toad".into()), None));
        assert_eq!(warnings.len(), 1);
    }

    #[test]
    fn subcommands_and_aliases() {
        assert!(matches!(parse(&["patterns"]).command, Some(CliCommand::Patterns)));
        assert!(matches!(parse(&["config-location"]).command, Some(CliCommand::ConfigLocation)));
        assert!(matches!(parse(&["cl"]).command, Some(CliCommand::ConfigLocation)));
    }
}
