use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod commands;
mod emit;
mod host;

/// Girder build-target planner.
///
/// Girder decides which build artifacts a module produces for a target
/// platform and toolchain mode, and writes the resulting plan for the
/// build-graph writer to consume.
///
/// EXAMPLES:
///     girder plan                        Plan for the host platform
///     girder plan --platform ios         Plan for an iOS cross build
///     girder plan --monolithic --json    One combined test binary, JSON out
///     girder init obj                    Write a starter girder.toml
///
/// ENVIRONMENT VARIABLES:
///     GIRDER_JSON   Set to '1' for JSON output by default
///     NO_COLOR      Set to disable colored output
#[derive(Parser)]
#[command(name = "girder")]
#[command(version)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Plan build artifacts for a target platform
    ///
    /// Loads the project manifest, resolves platform and toolchain facts,
    /// and writes the ordered artifact plan.
    ///
    /// EXAMPLES:
    ///     girder plan                           Plan for the host
    ///     girder plan -p android                Plan for Android
    ///     girder plan --submodule               Library artifact only
    ///     girder plan --config debug --config release
    #[command(visible_alias = "p")]
    Plan {
        /// Path to the project manifest
        #[arg(long, default_value = "girder.toml")]
        manifest: PathBuf,
        /// Target platform (desktop, macos, ios, android, tizen); defaults to the host
        #[arg(long, short = 'p')]
        platform: Option<String>,
        /// Toolchain links all test cases into one binary
        #[arg(long)]
        monolithic: bool,
        /// Plan as a submodule of another build (library artifact only)
        #[arg(long)]
        submodule: bool,
        /// Build configuration offered by the toolchain (repeatable)
        #[arg(long = "config", value_name = "NAME")]
        configs: Vec<String>,
        /// Header search path for test binaries (repeatable)
        #[arg(long = "include-path", value_name = "DIR")]
        include_paths: Vec<PathBuf>,
        /// Output plan file
        #[arg(long, short = 'o', default_value = "girder-plan.json")]
        output: PathBuf,
        /// Print the plan as JSON to stdout instead of writing the plan file
        #[arg(long, env = "GIRDER_JSON")]
        json: bool,
        /// Quiet output (errors only)
        #[arg(long, short = 'q')]
        quiet: bool,
    },

    /// Write a starter girder.toml for a new module
    ///
    /// EXAMPLES:
    ///     girder init obj              Create girder.toml for module obj
    ///     girder init obj --dir lib    Create it inside ./lib
    Init {
        /// Module name
        module: String,
        /// Directory to initialize (defaults to the current directory)
        #[arg(long)]
        dir: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Plan {
            manifest,
            platform,
            monolithic,
            submodule,
            configs,
            include_paths,
            output,
            json,
            quiet,
        } => {
            commands::plan::run(commands::plan::PlanArgs {
                manifest,
                platform,
                monolithic,
                submodule,
                configs,
                include_paths,
                output,
                json,
                quiet,
            })?;
        }
        Commands::Init { module, dir } => {
            commands::init::run(&module, dir)?;
        }
    }

    Ok(())
}
