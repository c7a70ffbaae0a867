use clap::Parser;
use colored::{control::set_override, Colorize};
use is_terminal::IsTerminal;

use overture::circle::{parse_params, CircleClient, ProjectId, PUBLIC_HOST};
use overture::cli::{Action, Cli, OutputFormat, TriggerInputs};
use overture::config::Config;
use overture::error::{OvertureError, Result};
use overture::output;

fn main() {
    // Respect NO_COLOR environment variable (https://no-color.org/)
    // Also disable colors when stdout is not a terminal (for piping)
    if std::env::var("NO_COLOR").is_ok() || !std::io::stdout().is_terminal() {
        set_override(false);
    }

    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(e.exit_code());
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    // Handle completions early (no config or client needed)
    if let Some(shell) = cli.completions {
        Cli::print_completions(shell);
        return Ok(());
    }

    let config = Config::load()?;

    // Flag and environment values win over the config file
    let token = cli.token.clone().or(config.api.token).ok_or_else(|| {
        OvertureError::config_missing("no CIRCLE_TOKEN in working environment")
    })?;
    let host = cli
        .host
        .clone()
        .or(config.api.host)
        .unwrap_or_else(|| PUBLIC_HOST.to_string());

    // All local validation happens before any network traffic
    let Some(name) = cli.project.as_deref() else {
        unreachable!() // clap requires the positional without --completions
    };
    let project: ProjectId = name.parse()?;

    let params = parse_params(&cli.params)?;

    let action = Action::select(TriggerInputs {
        branch: cli.branch.clone(),
        reference: cli.reference.clone(),
        tag: cli.tag.clone(),
        build: cli.build.clone(),
        ssh: cli.ssh,
        params,
    })?;

    let client = CircleClient::with_host(&token, &host)?;

    // Human context goes to stderr so stdout stays pipeable
    if cli.output == OutputFormat::Pretty {
        eprintln!(
            "{} {} for {}",
            "->".cyan(),
            action.describe(),
            project.to_string().bold()
        );
    }

    let response = action.dispatch(&client, &project)?;

    if cli.output == OutputFormat::Pretty {
        if let Some(num) = response.build_num {
            eprintln!("{} Build #{} queued", "✓".green(), num.to_string().bold());
        }
    }

    println!("{}", output::format_response(&response, cli.output)?);

    Ok(())
}
