use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use classroom_offline::export;

#[derive(Parser)]
#[command(name = "classroom-offline")]
#[command(about = "Offline classroom management for teachers")]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Open the application window (default)
    Run {
        /// Colour theme of the window
        #[cfg(feature = "gui")]
        #[arg(long, value_enum, default_value_t)]
        theme: classroom_offline::gui::ThemeChoice,
    },
    /// Write the built-in sample data to a JSON file and exit
    Export {
        #[arg(value_name = "PATH")]
        path: PathBuf,
    },
}

fn init_tracing(verbose: bool) {
    let fallback = if verbose {
        "classroom_offline=debug"
    } else {
        "classroom_offline=info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| fallback.into()))
        .with_target(true)
        .init();
}

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();
    init_tracing(args.verbose);

    match args.command {
        Some(Command::Export { path }) => {
            let runtime = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()?;
            let snapshot = runtime.block_on(export::export_to(&path))?;
            println!("Wrote {} to {}", snapshot.summary(), path.display());
            Ok(())
        }
        #[cfg(feature = "gui")]
        Some(Command::Run { theme }) => run_gui(theme),
        #[cfg(feature = "gui")]
        None => run_gui(Default::default()),
        #[cfg(not(feature = "gui"))]
        Some(Command::Run {}) | None => {
            anyhow::bail!("classroom-offline was built without the `gui` feature")
        }
    }
}

#[cfg(feature = "gui")]
fn run_gui(theme: classroom_offline::gui::ThemeChoice) -> anyhow::Result<()> {
    use classroom_offline::gui::{GuiOptions, run};

    tracing::info!("Starting ClassroomOffline v{}", env!("CARGO_PKG_VERSION"));
    run(GuiOptions { theme }).map_err(|e| anyhow::anyhow!("GUI failed: {}", e))
}
