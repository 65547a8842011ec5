//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueHint};

/// Locate or install arduino-cli and run its subcommands with JSON output
#[derive(Parser, Debug)]
#[command(name = "duinocli")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Debug level: -d info, -dd debug, -ddd trace
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub debug: u8,

    /// Settings file layered over the global one
    #[arg(long, global = true, value_hint = ValueHint::FilePath)]
    pub settings: Option<PathBuf>,

    #[command(flatten)]
    pub overrides: SettingsOverrides,

    #[command(subcommand)]
    pub command: Commands,
}

/// Command-line overrides for individual settings
#[derive(Args, Debug, Default, Clone)]
pub struct SettingsOverrides {
    /// arduino-cli executable to use when it exists
    #[arg(long, global = true, value_hint = ValueHint::FilePath)]
    pub cli_path: Option<PathBuf>,

    /// Installation directory used when the executable is missing
    #[arg(long, global = true, value_hint = ValueHint::DirPath)]
    pub install_dir: Option<PathBuf>,

    /// arduino-cli config file (--config-file)
    #[arg(long, global = true, value_hint = ValueHint::FilePath)]
    pub config_file: Option<PathBuf>,

    /// Extra board manager URLs, comma-separated
    #[arg(long, global = true, value_delimiter = ',')]
    pub additional_urls: Vec<String>,

    /// arduino-cli log file (--log-file)
    #[arg(long, global = true, value_hint = ValueHint::FilePath)]
    pub log_file: Option<PathBuf>,

    /// arduino-cli log format (--log-format)
    #[arg(long, global = true)]
    pub log_format: Option<String>,

    /// arduino-cli log level (--log-level)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Disable colored arduino-cli output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Resolve the arduino-cli executable (installing it if needed) and print its path
    Locate,

    /// Install arduino-cli into the installation directory
    Install,

    /// arduino-cli version
    Version,

    /// Boards
    Board {
        #[command(subcommand)]
        command: BoardCommands,
    },

    /// Platforms (cores)
    Core {
        #[command(subcommand)]
        command: CoreCommands,
    },

    /// Libraries
    Lib {
        #[command(subcommand)]
        command: LibCommands,
    },

    /// Compile a sketch
    Compile {
        /// Sketch directory
        #[arg(value_hint = ValueHint::DirPath)]
        sketch: PathBuf,
        /// Fully qualified board name
        #[arg(short = 'b', long)]
        fqbn: Option<String>,
        /// Copy build artifacts here
        #[arg(long, value_hint = ValueHint::DirPath)]
        output_dir: Option<PathBuf>,
        /// Export binaries into the sketch folder
        #[arg(short, long)]
        export_binaries: bool,
    },

    /// Upload a compiled sketch
    Upload {
        /// Sketch directory
        #[arg(value_hint = ValueHint::DirPath)]
        sketch: PathBuf,
        /// Fully qualified board name
        #[arg(short = 'b', long)]
        fqbn: Option<String>,
        /// Upload port, e.g. /dev/ttyACM0
        #[arg(short, long)]
        port: Option<String>,
        /// Verify uploaded binary
        #[arg(short = 't', long)]
        verify: bool,
    },

    /// Sketches
    Sketch {
        #[command(subcommand)]
        command: SketchCommands,
    },

    /// Pass raw arguments to arduino-cli after the global flags
    Exec {
        #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },

    /// Manage duinocli settings
    Settings {
        #[command(subcommand)]
        command: SettingsCommands,
    },

    /// Generate shell completions
    Completions {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum BoardCommands {
    /// Connected boards
    List {
        #[arg(long)]
        discovery_timeout: Option<String>,
        #[arg(short = 'b', long)]
        fqbn: Option<String>,
    },

    /// Boards of installed platforms
    Listall {
        /// Filter by board name
        boards: Vec<String>,
        #[arg(short = 'a', long)]
        show_hidden: bool,
    },

    /// Board details
    Details {
        #[arg(short = 'b', long)]
        fqbn: String,
        /// Include tools and required properties
        #[arg(short, long)]
        full: bool,
        #[arg(long)]
        list_programmers: bool,
    },

    /// Search boards, installed or not
    Search {
        boards: Vec<String>,
        #[arg(short = 'a', long)]
        show_hidden: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum CoreCommands {
    /// Installed platforms
    List {
        #[arg(long)]
        all: bool,
        #[arg(long)]
        updatable: bool,
    },

    /// Search platforms
    Search {
        keywords: Vec<String>,
        #[arg(short = 'a', long)]
        all: bool,
    },

    /// Install platforms (vendor:arch[@version])
    Install {
        #[arg(required = true)]
        cores: Vec<String>,
        #[arg(long)]
        run_post_install: bool,
        #[arg(long)]
        skip_post_install: bool,
        #[arg(long)]
        no_overwrite: bool,
    },

    /// Uninstall platforms
    Uninstall {
        #[arg(required = true)]
        cores: Vec<String>,
    },

    /// Refresh the platform index
    UpdateIndex,

    /// Upgrade platforms (all when none given)
    Upgrade {
        cores: Vec<String>,
        #[arg(long)]
        run_post_install: bool,
        #[arg(long)]
        skip_post_install: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum LibCommands {
    /// Installed libraries
    List {
        library: Option<String>,
        #[arg(long)]
        all: bool,
        #[arg(long)]
        updatable: bool,
        #[arg(short = 'b', long)]
        fqbn: Option<String>,
    },

    /// Search libraries
    Search {
        keywords: Vec<String>,
        /// Names only
        #[arg(long)]
        names: bool,
        #[arg(long)]
        omit_releases_details: bool,
    },

    /// Install libraries (name[@version], git URL or zip path)
    Install {
        #[arg(required = true)]
        libraries: Vec<String>,
        #[arg(long, conflicts_with = "zip_path")]
        git_url: bool,
        #[arg(long)]
        zip_path: bool,
        #[arg(long)]
        no_deps: bool,
        #[arg(long)]
        no_overwrite: bool,
    },

    /// Uninstall libraries
    Uninstall {
        #[arg(required = true)]
        libraries: Vec<String>,
    },

    /// Refresh the library index
    UpdateIndex,

    /// Upgrade libraries (all when none given)
    Upgrade { libraries: Vec<String> },

    /// Dependency status of a library
    Deps {
        library: String,
        #[arg(long)]
        no_overwrite: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum SketchCommands {
    /// Create a new sketch
    New {
        name: String,
        #[arg(long)]
        overwrite: bool,
    },

    /// Zip a sketch
    Archive {
        #[arg(value_hint = ValueHint::DirPath)]
        sketch_path: PathBuf,
        #[arg(value_hint = ValueHint::FilePath)]
        archive_path: Option<PathBuf>,
        #[arg(long)]
        include_build_dir: bool,
        #[arg(short, long)]
        overwrite: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum SettingsCommands {
    /// Show merged settings
    Show,

    /// Show settings paths
    Path,

    /// Create the global settings template
    Init {
        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },
}
