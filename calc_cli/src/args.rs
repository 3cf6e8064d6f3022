//! CLI argument definitions using clap derive

use std::path::PathBuf;

use calc_core::{BeamForm, Dimension, SectionForm};
use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

#[derive(Parser, Debug)]
#[command(name = "fieldcalc")]
#[command(author, version, about = "Unit converter and beam bending calculator")]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub global: GlobalOpts,
}

#[derive(clap::Args, Clone, Debug)]
pub struct GlobalOpts {
    /// Config file (default: ./fieldcalc.json)
    #[arg(long, global = true, env = "FIELDCALC_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output format (default: from config, else text)
    #[arg(long, short = 'f', global = true, value_enum)]
    pub format: Option<OutputFormat>,

    /// Enable debug logging on stderr
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Convert a value between two units of one dimension
    Convert(ConvertArgs),

    /// List the units of one or all dimensions
    Units(UnitsArgs),

    /// Bending stress and deflection of a center-loaded simple beam
    Beam(BeamArgs),

    /// Evaluate a JSON array of calculation items ("-" reads stdin)
    Run(RunArgs),

    /// Prompt for beam inputs
    Interactive,

    /// Show or create the config file
    #[command(subcommand)]
    Config(ConfigCommands),
}

#[derive(clap::Args, Debug)]
pub struct ConvertArgs {
    /// length, weight, temperature or torque
    pub dimension: Dimension,

    /// Value to convert
    #[arg(allow_hyphen_values = true)]
    pub value: String,

    /// Source unit symbol (e.g. m, lb, c, lbft)
    pub from: String,

    /// Target unit symbol
    pub to: String,
}

#[derive(clap::Args, Debug)]
pub struct UnitsArgs {
    /// Only list this dimension
    pub dimension: Option<Dimension>,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum SectionKind {
    Rectangular,
    Circular,
}

#[derive(clap::Args, Debug)]
pub struct BeamArgs {
    /// Point load at midspan (N)
    #[arg(long, allow_hyphen_values = true)]
    pub load: String,

    /// Span between supports (m)
    #[arg(long, allow_hyphen_values = true)]
    pub span: String,

    /// Young's modulus (GPa)
    #[arg(long = "e-gpa", allow_hyphen_values = true)]
    pub youngs_modulus_gpa: String,

    /// Yield strength (MPa)
    #[arg(long = "yield-mpa", allow_hyphen_values = true)]
    pub yield_strength_mpa: String,

    /// Cross-section shape
    #[arg(long, value_enum, default_value_t = SectionKind::Rectangular)]
    pub section: SectionKind,

    /// Section width (m), rectangular only
    #[arg(long, allow_hyphen_values = true)]
    pub width: Option<String>,

    /// Section height (m), rectangular only
    #[arg(long, allow_hyphen_values = true)]
    pub height: Option<String>,

    /// Section diameter (m), circular only
    #[arg(long, allow_hyphen_values = true)]
    pub diameter: Option<String>,
}

impl BeamArgs {
    /// Fill a beam form from the arguments; absent section fields stay blank.
    pub fn to_form(&self) -> BeamForm {
        let field = |v: &Option<String>| v.clone().unwrap_or_default();
        let section = match self.section {
            SectionKind::Rectangular => SectionForm::Rectangular {
                width: field(&self.width),
                height: field(&self.height),
            },
            SectionKind::Circular => SectionForm::Circular {
                diameter: field(&self.diameter),
            },
        };
        BeamForm {
            load: self.load.clone(),
            length: self.span.clone(),
            youngs_modulus_gpa: self.youngs_modulus_gpa.clone(),
            yield_strength_mpa: self.yield_strength_mpa.clone(),
            section,
        }
    }
}

#[derive(clap::Args, Debug)]
pub struct RunArgs {
    /// JSON file with an array of calculation items
    pub file: PathBuf,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Print the effective configuration
    Show,

    /// Write a config file with default settings
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert_negative_value() {
        let cli = Cli::try_parse_from(["fieldcalc", "convert", "temperature", "-40", "c", "f"]).unwrap();
        match cli.command {
            Commands::Convert(args) => {
                assert_eq!(args.dimension, Dimension::Temperature);
                assert_eq!(args.value, "-40");
                assert_eq!(args.from, "c");
                assert_eq!(args.to, "f");
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_unknown_dimension_rejected() {
        assert!(Cli::try_parse_from(["fieldcalc", "convert", "volume", "1", "l", "ml"]).is_err());
    }

    #[test]
    fn test_beam_to_form() {
        let cli = Cli::try_parse_from([
            "fieldcalc", "beam", "--load", "1000", "--span", "2", "--e-gpa", "200", "--yield-mpa", "250",
            "--section", "circular", "--diameter", "0.05",
        ])
        .unwrap();
        let Commands::Beam(args) = cli.command else {
            panic!("expected beam command");
        };
        let form = args.to_form();
        assert_eq!(form.length, "2");
        assert_eq!(
            form.section,
            SectionForm::Circular {
                diameter: "0.05".to_string()
            }
        );
    }

    #[test]
    fn test_beam_missing_height_is_blank() {
        let cli = Cli::try_parse_from([
            "fieldcalc", "beam", "--load", "1", "--span", "1", "--e-gpa", "1", "--yield-mpa", "1", "--width", "0.1",
        ])
        .unwrap();
        let Commands::Beam(args) = cli.command else {
            panic!("expected beam command");
        };
        assert_eq!(
            args.to_form().section,
            SectionForm::Rectangular {
                width: "0.1".to_string(),
                height: String::new()
            }
        );
    }

    #[test]
    fn test_global_format_after_subcommand() {
        let cli = Cli::try_parse_from(["fieldcalc", "units", "length", "--format", "json"]).unwrap();
        assert_eq!(cli.global.format, Some(OutputFormat::Json));
    }

    #[test]
    fn test_config_init_force() {
        let cli = Cli::try_parse_from(["fieldcalc", "config", "init", "--force"]).unwrap();
        assert!(matches!(cli.command, Commands::Config(ConfigCommands::Init { force: true })));
    }
}
