use clap::{CommandFactory, Parser, ValueEnum};
use clap_complete::Shell;

/// Trigger CircleCI builds from the command line
#[derive(Parser)]
#[command(name = "overture")]
#[command(version)]
#[command(about = "Trigger CircleCI builds from the command line")]
pub struct Cli {
    /// Project identifier, as [vcs/]username/project (vcs: gh, github, bb, bitbucket)
    #[arg(value_name = "PROJECT", required_unless_present = "completions")]
    pub project: Option<String>,

    /// Build the HEAD of this branch
    #[arg(long, value_name = "BRANCH")]
    pub branch: Option<String>,

    /// Build this revision (commit hash, tag, or branch tip)
    #[arg(long = "ref", value_name = "REF")]
    pub reference: Option<String>,

    /// Build this tag
    #[arg(long, value_name = "TAG")]
    pub tag: Option<String>,

    /// Re-run the build with this number
    #[arg(long, value_name = "NUM")]
    pub build: Option<String>,

    /// Enable SSH on the re-run build
    #[arg(long)]
    pub ssh: bool,

    /// Build parameter passed to the triggered build (repeatable)
    #[arg(long = "params", value_name = "KEY=VALUE")]
    pub params: Vec<String>,

    /// CircleCI API token
    #[arg(long, env = "CIRCLE_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// CircleCI API host
    #[arg(long, env = "CIRCLE_HOST", value_name = "HOST")]
    pub host: Option<String>,

    /// Output format for the triggered build
    #[arg(short, long, value_enum, default_value = "pretty")]
    pub output: OutputFormat,

    /// Generate shell completions and exit
    #[arg(long, value_enum, value_name = "SHELL")]
    pub completions: Option<Shell>,
}

/// Output format options
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Just the build URL, with human context on stderr
    #[default]
    Pretty,
    /// JSON output for scripting
    Json,
}

impl Cli {
    /// Print completions for the given shell to stdout
    pub fn print_completions(shell: Shell) {
        let mut cmd = Cli::command();
        let name = cmd.get_name().to_string();
        clap_complete::generate(shell, &mut cmd, name, &mut std::io::stdout());
    }
}
