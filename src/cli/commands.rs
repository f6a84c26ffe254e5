//! Command dispatch

use std::io;
use std::path::PathBuf;
use std::sync::Arc;

use clap::CommandFactory;
use tracing::{debug, instrument};

use crate::application::{parse_timestamp, InterpretationRequest, IoResultExt};
use crate::cli::args::{Cli, Commands, ConfigCommands};
use crate::cli::render::{caption, hexagram_lines, trigram_pattern};
use crate::cli::{output, CliError, CliResult};
use crate::config::{global_config_path, local_config_path, ClockSource, OutputFormat, Settings};
use crate::domain::{score, DivinationResult, Hexagram, MovingLine, TRIGRAMS};
use crate::infrastructure::di::ServiceContainer;
use crate::infrastructure::traits::FixedClock;
use crate::infrastructure::InfraError;

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    match &cli.command {
        Some(Commands::Cast {
            identifier,
            number,
            at,
            json,
            utc,
        }) => cast(identifier, number, at.as_deref(), *json, *utc),
        Some(Commands::Prompt {
            identifier,
            number,
            at,
            json,
        }) => prompt(identifier, number, at.as_deref(), *json),
        Some(Commands::Score { identifier }) => score_identifier(identifier),
        Some(Commands::Trigrams) => trigrams(),
        Some(Commands::Config { command }) => config(command),
        Some(Commands::Completion { shell }) => completion(*shell),
        None => Cli::command()
            .print_help()
            .map_err(|e| InfraError::io("print help", e).into()),
    }
}

fn current_dir() -> CliResult<PathBuf> {
    std::env::current_dir().map_err(|e| InfraError::io("read current directory", e).into())
}

fn load_settings() -> CliResult<Settings> {
    let cwd = current_dir()?;
    Ok(Settings::load(Some(&cwd))?)
}

/// Wire services, freezing the clock when a timestamp is given.
fn build_container(settings: Settings, at: Option<&str>) -> CliResult<ServiceContainer> {
    let container = match at {
        Some(raw) => {
            let instant = parse_timestamp(raw)?;
            debug!("using fixed clock at {}", instant.to_rfc3339());
            ServiceContainer::with_deps(settings, Arc::new(FixedClock(instant)))?
        }
        None => ServiceContainer::new(settings)?,
    };
    Ok(container)
}

fn cast_with(
    settings: Settings,
    identifier: &str,
    number: &str,
    at: Option<&str>,
) -> CliResult<(Arc<Settings>, DivinationResult)> {
    let container = build_container(settings, at)?;
    let result = container.divination_service().cast_raw(identifier, number)?;
    Ok((Arc::clone(&container.settings), result))
}

#[instrument]
fn cast(identifier: &str, number: &str, at: Option<&str>, json: bool, utc: bool) -> CliResult<()> {
    let mut settings = load_settings()?;
    if utc {
        settings.clock = ClockSource::Utc;
    }
    let (settings, result) = cast_with(settings, identifier, number, at)?;

    if json || settings.format == OutputFormat::Json {
        let text = serde_json::to_string_pretty(&result)
            .map_err(|e| CliError::Output(format!("serialize result: {e}")))?;
        output::info(&text);
        return Ok(());
    }

    print_result(&result, settings.show_nuclear);
    Ok(())
}

fn print_result(result: &DivinationResult, show_nuclear: bool) {
    output::header(&format!(
        "梅花易數 {}",
        result.timestamp.format("%Y-%m-%d %H:%M:%S %:z")
    ));
    output::detail(&format!(
        "identifier {:?} (score {}), number {}, moving line {}",
        result.identifier,
        score(&result.identifier),
        result.user_number,
        result.moving_line
    ));

    print_hexagram("本卦 Original", &result.original, Some(result.moving_line));
    if show_nuclear {
        print_hexagram("互卦 Nuclear", &result.nuclear, None);
    }
    print_hexagram("變卦 Changed", &result.changed, None);

    let body_use = result.body_use();
    output::info("");
    output::detail(&format!(
        "body (體) {} {} [{}], use (用) {} {} [{}]: {}",
        body_use.ti.display_name,
        body_use.ti.name,
        body_use.ti.phase,
        body_use.yong.display_name,
        body_use.yong.name,
        body_use.yong.phase,
        body_use.relation
    ));
}

fn print_hexagram(title: &str, hexagram: &Hexagram, moving: Option<MovingLine>) {
    output::info("");
    output::header(&format!("{title}  {}", caption(hexagram)));
    for line in hexagram_lines(hexagram, moving) {
        if line.moving {
            output::highlight(&line.text);
        } else {
            output::detail(&line.text);
        }
    }
}

#[instrument]
fn prompt(identifier: &str, number: &str, at: Option<&str>, json: bool) -> CliResult<()> {
    let settings = load_settings()?;
    let (_, result) = cast_with(settings, identifier, number, at)?;
    let request = InterpretationRequest::from_result(&result);

    if json {
        let text = request
            .to_json()
            .map_err(|e| CliError::Output(format!("serialize request: {e}")))?;
        output::info(&text);
    } else {
        output::info(&request.render_prompt());
    }
    Ok(())
}

#[instrument]
fn score_identifier(identifier: &str) -> CliResult<()> {
    output::info(&score(identifier));
    Ok(())
}

fn trigrams() -> CliResult<()> {
    for trigram in &TRIGRAMS {
        output::info(&format!(
            "{}  {:<5} {}  {:<9} {:<6} {}",
            trigram.id,
            trigram.name,
            trigram.display_name,
            trigram.element.to_string(),
            trigram.phase.to_string(),
            trigram_pattern(trigram)
        ));
    }
    Ok(())
}

#[instrument]
fn config(command: &ConfigCommands) -> CliResult<()> {
    match command {
        ConfigCommands::Show => {
            let settings = load_settings()?;
            output::info(&settings.to_toml()?);
        }
        ConfigCommands::Init { global } => {
            let path = if *global {
                global_config_path().ok_or_else(|| {
                    CliError::Usage("cannot determine global config directory".into())
                })?
            } else {
                local_config_path(&current_dir()?)
            };
            if path.exists() {
                return Err(CliError::Usage(format!(
                    "config already exists: {}",
                    path.display()
                )));
            }
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent).with_path_context("create config dir", parent)?;
            }
            std::fs::write(&path, Settings::template()).with_path_context("write config", &path)?;
            output::action("Created", &path.display());
        }
        ConfigCommands::Path => {
            match global_config_path() {
                Some(path) => print_config_path("global", &path),
                None => output::warning("cannot determine global config directory"),
            }
            print_config_path("local", &local_config_path(&current_dir()?));
        }
    }
    Ok(())
}

fn print_config_path(label: &str, path: &std::path::Path) {
    let state = if path.exists() { "" } else { " (not found)" };
    output::info(&format!("{label}: {}{state}", path.display()));
}

fn completion(shell: clap_complete::Shell) -> CliResult<()> {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    clap_complete::generate(shell, &mut cmd, name, &mut io::stdout());
    Ok(())
}
