/// Spindle - command line audio CD player
use anyhow::Context;
use clap::Parser;
use spindle_cli::{batch, interactive, Dispatcher, OutputFormat};
use spindle_control::{DeviceConfig, DeviceSession};
use spindle_drive::MemoryDrive;
use std::io::{self, IsTerminal};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "spindle")]
#[command(about = "Play audio CDs from the command line", long_about = None)]
#[command(after_help = "Run `spindle help` for the list of player commands.")]
struct Cli {
    /// CD-ROM device (overrides the config file, SPINDLE_DEVICE and CDAUDIO)
    #[arg(long, value_name = "PATH")]
    device: Option<PathBuf>,

    /// Configuration file (TOML)
    #[arg(long, value_name = "PATH", env = "SPINDLE_CONFIG")]
    config: Option<PathBuf>,

    /// Read commands from a prompt instead of the command line
    #[arg(short = 'I', long)]
    interactive: bool,

    /// Print query results as JSON
    #[arg(long)]
    json: bool,

    /// Debug logging on stderr
    #[arg(long)]
    verbose: bool,

    /// Use an in-memory drive holding a disc of the given layout (e.g. DDADA)
    #[arg(long, value_name = "LAYOUT", hide = true)]
    simulate: Option<String>,

    /// Player commands and track numbers
    #[arg(
        value_name = "COMMAND",
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    commands: Vec<String>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let config = DeviceConfig::load(cli.config.as_deref())
        .context("Failed to load configuration")?
        .with_device_override(cli.device.clone());

    let session = match &cli.simulate {
        Some(layout) => DeviceSession::open(MemoryDrive::from_layout(layout)?, config),
        None => DeviceSession::open(spindle_drive::system_opener(), config),
    }
    .context("Failed to initialize CD device")?;

    let format = if cli.json {
        OutputFormat::Json
    } else {
        OutputFormat::Text
    };

    let stdout = io::stdout();
    let mut dispatcher = Dispatcher::new(&session, stdout.lock(), format);

    if cli.interactive {
        let stdin = io::stdin();
        if stdin.is_terminal() {
            let mut prompt = interactive::Prompt::new()?;
            interactive::run(&mut dispatcher, &mut prompt, &mut io::stderr())?;
        } else {
            let mut script = interactive::Script::new(stdin.lock());
            interactive::run(&mut dispatcher, &mut script, &mut io::stderr())?;
        }
    } else {
        batch::run(&mut dispatcher, &cli.commands)?;
    }

    Ok(())
}
