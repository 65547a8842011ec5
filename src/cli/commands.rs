//! Command dispatch: settings, services, then one façade call per command

use std::io;
use std::path::Path;

use clap::CommandFactory;
use clap_complete::generate;
use tracing::{debug, instrument};

use crate::application::commands::{
    CompileOptions, CoreInstallOptions, LibInstallOptions, UploadOptions,
};
use crate::application::{ApplicationResult, ArduinoCli};
use crate::cli::args::{
    BoardCommands, Cli, Commands, CoreCommands, LibCommands, SettingsCommands, SettingsOverrides,
    SketchCommands,
};
use crate::cli::error::{CliError, CliResult};
use crate::cli::output;
use crate::config::{global_config_path, RawSettings, Settings};
use crate::domain::InvocationResult;
use crate::infrastructure::di::ServiceContainer;
use crate::infrastructure::InfraError;

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    match &cli.command {
        Commands::Settings { command } => return settings_command(cli, command),
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            generate(*shell, &mut cmd, "duinocli", &mut io::stdout());
            return Ok(());
        }
        _ => {}
    }

    let settings = load_settings(cli.settings.as_deref(), &cli.overrides)?;
    let container = ServiceContainer::new(settings);

    match &cli.command {
        Commands::Locate => locate(&container),
        Commands::Install => install(&container),
        command => {
            let arduino = container.arduino_cli()?;
            let result = run_arduino(&arduino, command)?;
            output::invocation(&result);
            Ok(())
        }
    }
}

/// Layered settings with command-line flags on top.
pub fn load_settings(explicit: Option<&Path>, overrides: &SettingsOverrides) -> CliResult<Settings> {
    let settings = Settings::load(explicit)?;
    Ok(settings.merge_with(&overrides_to_raw(overrides)))
}

fn overrides_to_raw(overrides: &SettingsOverrides) -> RawSettings {
    RawSettings {
        cli_path: overrides.cli_path.clone(),
        install_dir: overrides.install_dir.clone(),
        config_file: overrides.config_file.clone(),
        additional_urls: (!overrides.additional_urls.is_empty())
            .then(|| overrides.additional_urls.clone()),
        log_file: overrides.log_file.clone(),
        log_format: overrides.log_format.clone(),
        log_level: overrides.log_level.clone(),
        no_color: overrides.no_color.then_some(true),
        manage_directories: None,
    }
}

#[instrument(skip(container))]
fn locate(container: &ServiceContainer) -> CliResult<()> {
    let path = container.locator().resolve(&container.settings.cli_path)?;
    output::info(&path.display());
    Ok(())
}

#[instrument(skip(container))]
fn install(container: &ServiceContainer) -> CliResult<()> {
    let path = container
        .installer()
        .install(&container.settings.install_dir)?;
    output::action("Installed", &path.display());
    Ok(())
}

#[instrument(skip(arduino))]
fn run_arduino(arduino: &ArduinoCli, command: &Commands) -> CliResult<InvocationResult> {
    let result = match command {
        Commands::Version => arduino.version().run(),
        Commands::Board { command } => board(arduino, command),
        Commands::Core { command } => core(arduino, command),
        Commands::Lib { command } => lib(arduino, command),
        Commands::Compile {
            sketch,
            fqbn,
            output_dir,
            export_binaries,
        } => {
            let options = CompileOptions {
                fqbn: fqbn.clone(),
                output_dir: output_dir.clone(),
                export_binaries: *export_binaries,
                ..CompileOptions::default()
            };
            arduino.compile().run(Some(sketch.as_path()), &options)
        }
        Commands::Upload {
            sketch,
            fqbn,
            port,
            verify,
        } => {
            let options = UploadOptions {
                fqbn: fqbn.clone(),
                port: port.clone(),
                verify: *verify,
                ..UploadOptions::default()
            };
            arduino.upload().run(Some(sketch.as_path()), &options)
        }
        Commands::Sketch { command } => match command {
            SketchCommands::New { name, overwrite } => arduino.sketch().new_sketch(name, *overwrite),
            SketchCommands::Archive {
                sketch_path,
                archive_path,
                include_build_dir,
                overwrite,
            } => arduino.sketch().archive(
                sketch_path,
                archive_path.as_deref(),
                *include_build_dir,
                *overwrite,
            ),
        },
        Commands::Exec { args } => {
            debug!("exec: {:?}", args);
            arduino.exec_raw(args)
        }
        Commands::Locate
        | Commands::Install
        | Commands::Settings { .. }
        | Commands::Completions { .. } => {
            return Err(CliError::Usage(format!(
                "{command:?} does not run arduino-cli"
            )))
        }
    };
    Ok(result?)
}

fn board(arduino: &ArduinoCli, command: &BoardCommands) -> ApplicationResult<InvocationResult> {
    let board = arduino.board();
    match command {
        BoardCommands::List {
            discovery_timeout,
            fqbn,
        } => board.list(discovery_timeout.as_deref(), fqbn.as_deref(), false),
        BoardCommands::Listall {
            boards,
            show_hidden,
        } => board.listall(&as_strs(boards), *show_hidden),
        BoardCommands::Details {
            fqbn,
            full,
            list_programmers,
        } => board.details(fqbn, *full, *list_programmers, &[]),
        BoardCommands::Search {
            boards,
            show_hidden,
        } => board.search(&as_strs(boards), *show_hidden),
    }
}

fn core(arduino: &ArduinoCli, command: &CoreCommands) -> ApplicationResult<InvocationResult> {
    let core = arduino.core();
    match command {
        CoreCommands::List { all, updatable } => core.list(*all, *updatable),
        CoreCommands::Search { keywords, all } => core.search(&as_strs(keywords), *all),
        CoreCommands::Install {
            cores,
            run_post_install,
            skip_post_install,
            no_overwrite,
        } => core.install(
            &as_strs(cores),
            &CoreInstallOptions {
                run_post_install: *run_post_install,
                skip_post_install: *skip_post_install,
                no_overwrite: *no_overwrite,
            },
        ),
        CoreCommands::Uninstall { cores } => core.uninstall(&as_strs(cores)),
        CoreCommands::UpdateIndex => core.update_index(),
        CoreCommands::Upgrade {
            cores,
            run_post_install,
            skip_post_install,
        } => core.upgrade(&as_strs(cores), *run_post_install, *skip_post_install),
    }
}

fn lib(arduino: &ArduinoCli, command: &LibCommands) -> ApplicationResult<InvocationResult> {
    let lib = arduino.lib();
    match command {
        LibCommands::List {
            library,
            all,
            updatable,
            fqbn,
        } => lib.list(library.as_deref(), *all, *updatable, fqbn.as_deref()),
        LibCommands::Search {
            keywords,
            names,
            omit_releases_details,
        } => lib.search(&as_strs(keywords), *names, *omit_releases_details),
        LibCommands::Install {
            libraries,
            git_url,
            zip_path,
            no_deps,
            no_overwrite,
        } => lib.install(
            &as_strs(libraries),
            &LibInstallOptions {
                git_url: *git_url,
                zip_path: *zip_path,
                no_deps: *no_deps,
                no_overwrite: *no_overwrite,
            },
        ),
        LibCommands::Uninstall { libraries } => lib.uninstall(&as_strs(libraries)),
        LibCommands::UpdateIndex => lib.update_index(),
        LibCommands::Upgrade { libraries } => lib.upgrade(&as_strs(libraries)),
        LibCommands::Deps {
            library,
            no_overwrite,
        } => lib.deps(library, *no_overwrite),
    }
}

fn settings_command(cli: &Cli, command: &SettingsCommands) -> CliResult<()> {
    match command {
        SettingsCommands::Show => {
            let settings = load_settings(cli.settings.as_deref(), &cli.overrides)?;
            output::info(&settings.to_toml()?);
            Ok(())
        }
        SettingsCommands::Path => {
            output::header("Settings files");
            match global_config_path() {
                Some(path) => output::detail(&format!(
                    "global:   {} ({})",
                    path.display(),
                    exists_label(&path)
                )),
                None => output::detail(&"global:   <no config directory>"),
            }
            if let Some(path) = &cli.settings {
                output::detail(&format!(
                    "explicit: {} ({})",
                    path.display(),
                    exists_label(path)
                ));
            }
            Ok(())
        }
        SettingsCommands::Init { force } => init_settings(*force),
    }
}

fn init_settings(force: bool) -> CliResult<()> {
    let path = global_config_path()
        .ok_or_else(|| CliError::Usage("cannot determine config directory".into()))?;
    if path.exists() && !force {
        return Err(CliError::Usage(format!(
            "{} already exists (use --force to overwrite)",
            path.display()
        )));
    }
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir)
            .map_err(|e| InfraError::io(format!("create {}", dir.display()), e))?;
    }
    std::fs::write(&path, Settings::template())
        .map_err(|e| InfraError::io(format!("write {}", path.display()), e))?;
    output::action("Created", &path.display());
    Ok(())
}

fn exists_label(path: &Path) -> &'static str {
    if path.exists() {
        "exists"
    } else {
        "missing"
    }
}

fn as_strs(values: &[String]) -> Vec<&str> {
    values.iter().map(String::as_str).collect()
}
