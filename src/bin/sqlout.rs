//! sqlout: render SQL ASTs for a target dialect
//!
//! # Usage
//!
//! ```bash
//! # Render a JSON-encoded statement for H2
//! sqlout render upsert.json --dialect h2
//!
//! # From stdin, with placeholders
//! cat stmts.json | sqlout render --dialect mysql --parameterized
//!
//! # List dialects
//! sqlout dialects
//! ```

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use serde::Deserialize;
use sqlout::prelude::*;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "sqlout")]
#[command(version)]
#[command(about = "Render SQL syntax trees as dialect-specific SQL", long_about = None)]
#[command(after_help = "EXAMPLES:
    sqlout render upsert.json --dialect h2
    sqlout render --dialect mysql --parameterized < stmts.json
    sqlout dialects")]
struct Cli {
    /// Verbose logging (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render JSON-encoded statements as SQL
    Render {
        /// Input file; reads stdin when omitted
        file: Option<PathBuf>,

        /// Target dialect (overrides the config file)
        #[arg(short, long, env = "SQLOUT_DIALECT")]
        dialect: Option<String>,

        /// Emit keywords in lower case
        #[arg(long)]
        lowercase: bool,

        /// Replace literals with `?` and list them after each statement
        #[arg(short, long)]
        parameterized: bool,

        /// Config file (defaults to ./sqlout.toml, then the user config dir)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// List supported dialects
    Dialects,
}

/// One statement or a list of them.
#[derive(Deserialize)]
#[serde(untagged)]
enum Input {
    Many(Vec<Statement>),
    One(Box<Statement>),
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Render {
            file,
            dialect,
            lowercase,
            parameterized,
            config,
        } => render_command(file.as_deref(), dialect.as_deref(), lowercase, parameterized, config.as_deref()),
        Commands::Dialects => {
            list_dialects();
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("{} {:#}", "Error:".red().bold(), e);
        std::process::exit(1);
    }
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "sqlout=warn",
        1 => "sqlout=debug",
        _ => "sqlout=trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn render_command(
    file: Option<&Path>,
    dialect: Option<&str>,
    lowercase: bool,
    parameterized: bool,
    config_path: Option<&Path>,
) -> Result<()> {
    let mut config = match config_path {
        Some(path) => RenderConfig::load(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => RenderConfig::discover()?,
    };
    if let Some(dialect) = dialect {
        config.dialect = dialect.parse()?;
    }
    if lowercase {
        config.uppercase = false;
    }
    if parameterized {
        config.parameterized = true;
    }

    let content = read_input(file)?;
    let statements = match serde_json::from_str::<Input>(&content).context("Invalid statement JSON")? {
        Input::Many(statements) => statements,
        Input::One(statement) => vec![*statement],
    };
    tracing::debug!(count = statements.len(), dialect = %config.dialect, "rendering input");

    for (i, statement) in statements.iter().enumerate() {
        if i != 0 {
            println!(";");
        }
        let mut sql = String::new();
        let mut renderer = Renderer::from_config(&mut sql, &config);
        renderer.render(statement)?;
        let parameters = renderer.into_parameters();
        print!("{}", sql);
        if config.parameterized && !parameters.is_empty() {
            let list: Vec<String> = parameters.iter().map(|p| p.to_string()).collect();
            print!("\n-- parameters: {}", list.join(", "));
        }
    }
    println!();
    Ok(())
}

fn read_input(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) => {
            fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
        }
        None => {
            let mut content = String::new();
            io::stdin()
                .read_to_string(&mut content)
                .context("Failed to read stdin")?;
            Ok(content)
        }
    }
}

fn list_dialects() {
    println!("{}", "Supported dialects:".cyan().bold());
    for dialect in Dialect::all() {
        println!("  {}", dialect.name().green());
    }
}
