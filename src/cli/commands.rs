//! Command dispatch

use std::io;
use std::path::{Path, PathBuf};

use clap::CommandFactory;
use clap_complete::generate;
use tracing::{debug, instrument};

use crate::application::ApplicationResult;
use crate::cli::args::{Cli, Commands, ConfigCommands};
use crate::cli::error::{application_exit_code, CliError, CliResult};
use crate::cli::output;
use crate::config::{global_config_path, RawSettings, Settings};
use crate::infrastructure::di::ServiceContainer;
use crate::infrastructure::traits::FileSystem;
use crate::util::path::expand_sources;

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    match &cli.command {
        Some(Commands::Render {
            sources,
            output_dir,
        }) => cmd_render(&container(cli)?, sources, output_dir.as_deref()),
        Some(Commands::Tree { sources }) => cmd_tree(&container(cli)?, sources),
        Some(Commands::Check { sources }) => cmd_check(&container(cli)?, sources),
        Some(Commands::Config { command }) => cmd_config(cli, command),
        Some(Commands::Completion { shell }) => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            generate(*shell, &mut cmd, name, &mut io::stdout());
            Ok(())
        }
        None => Ok(()),
    }
}

/// Effective settings: config layers, then command line flags.
pub fn load_settings(cli: &Cli) -> CliResult<Settings> {
    let settings = Settings::load(cli.config.as_deref())?;
    Ok(settings.merge_with(&RawSettings {
        verbose: cli.verbose.then_some(true),
        depth_marks: cli.marks,
        short_rows: cli.short_rows,
    }))
}

fn container(cli: &Cli) -> CliResult<ServiceContainer> {
    let settings = load_settings(cli)?;
    debug!("settings: {:?}", settings);
    Ok(ServiceContainer::new(settings))
}

/// Run `step` for every source in order.
///
/// A failing source is reported and skipped; the remaining sources still
/// run. The first failure decides the exit code.
pub fn for_each_source<F>(fs: &dyn FileSystem, sources: &[PathBuf], mut step: F) -> CliResult<()>
where
    F: FnMut(&Path) -> ApplicationResult<()>,
{
    let sources = expand_sources(fs, sources)?;
    if sources.is_empty() {
        return Err(CliError::InvalidArgs("no grid sources found".to_string()));
    }

    let mut failed = 0;
    let mut code = None;
    for source in &sources {
        if let Err(e) = step(source) {
            output::error(&e);
            failed += 1;
            code.get_or_insert_with(|| application_exit_code(&e));
        }
    }

    match code {
        Some(code) => Err(CliError::SourcesFailed {
            failed,
            total: sources.len(),
            code,
        }),
        None => Ok(()),
    }
}

#[instrument(skip(container))]
fn cmd_render(
    container: &ServiceContainer,
    sources: &[PathBuf],
    output_dir: Option<&Path>,
) -> CliResult<()> {
    for_each_source(container.fs.as_ref(), sources, |source| {
        let report = container.boxes.process(source)?;
        if container.settings.verbose {
            output::block(&format!("{}:", source.display()), &report.analysis.input);
            output::block("boxes:", &report.analysis.tree.to_termtree());
        }
        match output_dir {
            Some(dir) => {
                let target = container.boxes.write_rendered(&report, dir)?;
                output::action("Rendered", &target.display());
            }
            None => output::grid(&report.rendered),
        }
        Ok(())
    })
}

#[instrument(skip(container))]
fn cmd_tree(container: &ServiceContainer, sources: &[PathBuf]) -> CliResult<()> {
    for_each_source(container.fs.as_ref(), sources, |source| {
        let analysis = container.boxes.analyze(source)?;
        output::header(&source.display());
        output::info(&analysis.tree.to_termtree());
        Ok(())
    })
}

#[instrument(skip(container))]
fn cmd_check(container: &ServiceContainer, sources: &[PathBuf]) -> CliResult<()> {
    for_each_source(container.fs.as_ref(), sources, |source| {
        let analysis = container.boxes.analyze(source)?;
        output::success(&format!(
            "{}: {}x{}, {} boxes, depth {}",
            source.display(),
            analysis.input.height(),
            analysis.input.width(),
            analysis.tree.len(),
            analysis.tree.depth()
        ));
        Ok(())
    })
}

fn cmd_config(cli: &Cli, command: &ConfigCommands) -> CliResult<()> {
    match command {
        ConfigCommands::Show => {
            let settings = load_settings(cli)?;
            output::info(&settings.to_toml()?);
        }
        ConfigCommands::Path => match global_config_path() {
            Some(path) => {
                output::info(&path.display());
                if !path.exists() {
                    output::warning("global config file does not exist");
                }
            }
            None => output::warning("no config directory available on this platform"),
        },
        ConfigCommands::Template => output::info(&Settings::template()),
    }
    Ok(())
}
