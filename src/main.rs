use clap::{Parser, Subcommand};
use git_trainer::commands::*;
use git_trainer::core::{error::Result, print_error};
use std::env;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "git-trainer")]
#[command(about = "Practice git commit, branch and merge in a terminal simulator")]
#[command(version)]
struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List available exercises
    List,
    /// Solve an exercise interactively
    Play {
        /// Exercise id (e.g. "commit", "merge")
        scenario: String,
    },
    /// Submit commands to an exercise without prompting
    Run {
        /// Exercise id (e.g. "commit", "merge")
        scenario: String,
        /// Commands to submit in order (e.g. "git add ." "git commit -m done")
        commands: Vec<String>,
        /// Read additional commands from a file, one per line
        #[arg(short, long)]
        script: Option<PathBuf>,
        /// Print the final session as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show the starting commit graph of an exercise
    Graph {
        /// Exercise id (e.g. "commit", "merge")
        scenario: String,
        /// Print events and layout as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    // Configure logging based on --debug flag
    if cli.debug {
        env::set_var("RUST_LOG", "debug");
    } else if env::var_os("RUST_LOG").is_none() {
        env::set_var("RUST_LOG", "warn");
    }
    env_logger::init();

    let result = match cli.command {
        Commands::List => execute_list(),
        Commands::Play { scenario } => execute_play(&scenario),
        Commands::Run {
            scenario,
            commands,
            script,
            json,
        } => execute_run(&scenario, commands, script.as_deref(), json),
        Commands::Graph { scenario, json } => execute_graph(&scenario, json),
    };

    exit_on_error(result);
}

fn exit_on_error(result: Result<()>) {
    if let Err(e) = result {
        print_error(&e.to_string());
        std::process::exit(1);
    }
}
