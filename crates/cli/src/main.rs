use anyhow::Result;
use clap::{Parser, Subcommand};
use planar::{Fields, TransformSession};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::fmt::SubscriberBuilder;

mod repl;
mod state;

#[derive(Parser)]
#[command(name = "planar")]
#[command(about = "Transform points, lines and functions in the plane", version = planar::VERSION)]
struct Cmd {
    /// Emit JSON instead of plain text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Render one field state and exit
    Render {
        /// JSON file with field values; missing keys use defaults
        #[arg(long)]
        state: Option<PathBuf>,
        /// Field override, repeatable (e.g. --set transform_kind=rotate)
        #[arg(long = "set", value_name = "KEY=VALUE")]
        overrides: Vec<String>,
    },
    /// Read commands from stdin and re-render after each change
    Session {
        #[arg(long)]
        state: Option<PathBuf>,
    },
    /// Print the built-in default field state
    Defaults,
    /// List accepted field keys
    Keys,
}

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(io::stderr)
        .init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Render { state, overrides } => render(state, overrides, cmd.json),
        Action::Session { state } => session(state, cmd.json),
        Action::Defaults => defaults(),
        Action::Keys => {
            println!("{}", Fields::KEYS.join("\n"));
            Ok(())
        }
    }
}

fn initial_fields(state: Option<PathBuf>) -> Result<Fields> {
    match state {
        Some(path) => state::load_fields(&path),
        None => Ok(Fields::default()),
    }
}

fn render(state: Option<PathBuf>, overrides: Vec<String>, json: bool) -> Result<()> {
    let mut fields = initial_fields(state)?;
    state::apply_overrides(&mut fields, &overrides)?;
    tracing::info!(
        object = fields.object_kind.as_str(),
        transform = fields.transform_kind.as_str(),
        overrides = overrides.len(),
        "render"
    );
    let session = TransformSession::new(fields);
    repl::write_rendered(&mut io::stdout().lock(), session.last_render(), json)
}

fn session(state: Option<PathBuf>, json: bool) -> Result<()> {
    let fields = initial_fields(state)?;
    tracing::info!("session start");
    let stdin = io::stdin();
    repl::run(fields, stdin.lock(), &mut io::stdout().lock(), json)
}

fn defaults() -> Result<()> {
    println!("{}", serde_json::to_string_pretty(&Fields::default())?);
    Ok(())
}
