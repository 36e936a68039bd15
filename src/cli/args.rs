//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::gpunit::ParamType;
use crate::lint::OutputFormat;

/// gplint - Validate GenePattern module artifacts.
#[derive(Debug, Parser)]
#[command(name = "gplint")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to settings file (overrides ./.gplint.yml)
    #[arg(long, global = true, env = "GPLINT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Report format
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Log progress of each check
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Validate a module manifest
    Manifest(ManifestArgs),

    /// Validate a GPUnit test file or a directory of them
    Gpunit(GpunitArgs),

    /// Validate a paramgroups.json file
    Paramgroups(ParamgroupsArgs),

    /// Validate, build and run a Dockerfile
    Dockerfile(DockerfileArgs),

    /// Validate module documentation (file or URL)
    Documentation(DocumentationArgs),

    /// Validate a wrapper script
    Wrapper(WrapperArgs),

    /// List the checks a format runs, in run order
    Checks(ChecksArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Artifact formats known to gplint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ArtifactFormat {
    Manifest,
    Gpunit,
    Paramgroups,
    Dockerfile,
    Documentation,
    Wrapper,
}

/// Arguments for the `manifest` command.
#[derive(Debug, Clone, clap::Args)]
pub struct ManifestArgs {
    /// Manifest file, or a directory containing one
    pub path: PathBuf,
}

/// Arguments for the `gpunit` command.
#[derive(Debug, Clone, clap::Args)]
pub struct GpunitArgs {
    /// GPUnit .yml file, or a directory of them
    pub path: PathBuf,

    /// Module name or LSID the tests should target
    #[arg(long)]
    pub module: Option<String>,

    /// Parameter names the tests should set
    #[arg(long, num_args = 1..)]
    pub parameters: Option<Vec<String>>,

    /// Expected type of each parameter, in --parameters order
    #[arg(long, num_args = 1.., value_enum)]
    pub types: Option<Vec<ParamType>>,
}

/// Arguments for the `paramgroups` command.
#[derive(Debug, Clone, clap::Args)]
pub struct ParamgroupsArgs {
    /// paramgroups.json, or a directory containing one
    pub path: PathBuf,

    /// Parameter names every group assignment must cover
    #[arg(long, num_args = 1..)]
    pub parameters: Option<Vec<String>>,
}

/// Arguments for the `dockerfile` command.
#[derive(Debug, Clone, clap::Args)]
pub struct DockerfileArgs {
    /// Dockerfile, or a directory containing one
    pub path: PathBuf,

    /// Image tag to build (defaults to a generated one)
    #[arg(short, long)]
    pub tag: Option<String>,

    /// Command to run in the built image
    #[arg(short = 'c', long = "cmd")]
    pub cmd: Option<String>,

    /// Keep the built image
    #[arg(long)]
    pub no_cleanup: bool,

    /// Skip the build and runtime checks
    #[arg(long)]
    pub no_build: bool,
}

/// Arguments for the `documentation` command.
#[derive(Debug, Clone, clap::Args)]
pub struct DocumentationArgs {
    /// Local path or http(s) URL
    pub input: String,

    /// Module name or LSID the documentation should mention
    #[arg(long)]
    pub module: Option<String>,

    /// Parameter names the documentation should mention
    #[arg(long, num_args = 1..)]
    pub parameters: Option<Vec<String>>,
}

/// Arguments for the `wrapper` command.
#[derive(Debug, Clone, clap::Args)]
pub struct WrapperArgs {
    /// Wrapper script
    pub path: PathBuf,

    /// Parameter names the script should reference
    #[arg(long, num_args = 1..)]
    pub parameters: Option<Vec<String>>,
}

/// Arguments for the `checks` command.
#[derive(Debug, Clone, clap::Args)]
pub struct ChecksArgs {
    /// Format whose checks to list
    #[arg(value_enum, value_name = "FORMAT")]
    pub artifact: ArtifactFormat,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_manifest_path() {
        let cli = Cli::try_parse_from(["gplint", "manifest", "mod/manifest"]).unwrap();
        match cli.command {
            Commands::Manifest(args) => assert_eq!(args.path, PathBuf::from("mod/manifest")),
            other => panic!("unexpected command: {:?}", other),
        }
        assert_eq!(cli.format, OutputFormat::Text);
    }

    #[test]
    fn parses_multi_value_parameters() {
        let cli = Cli::try_parse_from([
            "gplint",
            "gpunit",
            "tests",
            "--module",
            "Kallisto",
            "--parameters",
            "input",
            "threads",
            "--types",
            "file",
            "number",
        ])
        .unwrap();
        let Commands::Gpunit(args) = cli.command else {
            panic!("expected gpunit");
        };
        assert_eq!(args.module.as_deref(), Some("Kallisto"));
        assert_eq!(
            args.parameters,
            Some(vec!["input".to_string(), "threads".to_string()])
        );
        assert_eq!(args.types, Some(vec![ParamType::File, ParamType::Number]));
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "gplint",
            "paramgroups",
            "pg.json",
            "--format",
            "json",
            "--no-color",
        ])
        .unwrap();
        assert_eq!(cli.format, OutputFormat::Json);
        assert!(cli.no_color);
    }

    #[test]
    fn dockerfile_short_flags() {
        let cli =
            Cli::try_parse_from(["gplint", "dockerfile", ".", "-t", "gp/x:1", "-c", "echo hi"])
                .unwrap();
        let Commands::Dockerfile(args) = cli.command else {
            panic!("expected dockerfile");
        };
        assert_eq!(args.tag.as_deref(), Some("gp/x:1"));
        assert_eq!(args.cmd.as_deref(), Some("echo hi"));
        assert!(!args.no_build);
    }

    #[test]
    fn checks_requires_known_format() {
        assert!(Cli::try_parse_from(["gplint", "checks", "yaml"]).is_err());
        assert!(Cli::try_parse_from(["gplint", "checks", "wrapper"]).is_ok());
    }

    #[test]
    fn subcommand_is_required() {
        assert!(Cli::try_parse_from(["gplint"]).is_err());
    }
}
