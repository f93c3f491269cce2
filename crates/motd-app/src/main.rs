use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::JoinHandle;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use crossterm::{
    cursor::MoveTo,
    execute,
    terminal::{Clear, ClearType},
};

use motd_config::MotdConfig;
use motd_core::engine::{Engine, RenderSettings};
use motd_core::{logging, term};

/// Render the message of the day from a widget configuration file.
#[derive(Debug, Parser)]
#[command(name = "motd", version, about)]
struct Args {
    /// Path to the config file (default: ~/.config/motd/motd.json,
    /// then ./config/motd.json)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the configured line width
    #[arg(long)]
    width: Option<u16>,

    /// Skip the loading spinner
    #[arg(long)]
    no_spinner: bool,

    /// Don't clear the screen before printing
    #[arg(long)]
    no_clear: bool,
}

const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Spinner on stderr that animates until stopped.
///
/// Lives entirely in the entry point; the engine below it is synchronous and
/// never sees this thread.
struct Spinner {
    stop: Arc<AtomicBool>,
    handle: JoinHandle<()>,
}

impl Spinner {
    fn start() -> Self {
        let stop = Arc::new(AtomicBool::new(false));
        let stop_flag = stop.clone();

        let handle = std::thread::spawn(move || {
            let mut i = 0;
            while !stop_flag.load(Ordering::Relaxed) {
                let frame = SPINNER_FRAMES[i % SPINNER_FRAMES.len()];
                eprint!("\r  {frame} Loading MOTD...");
                let _ = io::stderr().flush();
                i += 1;
                std::thread::sleep(Duration::from_millis(80));
            }
            // Clear the spinner line.
            eprint!("\r{}\r", " ".repeat(30));
            let _ = io::stderr().flush();
        });

        Self { stop, handle }
    }

    fn stop(self) {
        self.stop.store(true, Ordering::Relaxed);
        let _ = self.handle.join();
    }
}

fn default_config_path() -> PathBuf {
    if let Some(config_dir) = dirs::config_dir() {
        let candidate = config_dir.join("motd").join("motd.json");
        if candidate.exists() {
            return candidate;
        }
    }
    PathBuf::from("config/motd.json")
}

fn main() -> Result<()> {
    logging::init();

    let args = Args::parse();
    let config_path = args.config.unwrap_or_else(default_config_path);
    tracing::info!(config = %config_path.display(), "rendering MOTD");

    let config = MotdConfig::from_path(&config_path)?;

    let settings = RenderSettings {
        spacing: config.settings.spacing,
        width: args
            .width
            .or(config.settings.width)
            .unwrap_or_else(term::detect_width),
    };

    if !args.no_clear {
        let _ = execute!(io::stdout(), Clear(ClearType::All), MoveTo(0, 0));
    }

    let spinner = if args.no_spinner {
        None
    } else {
        Some(Spinner::start())
    };

    let registry = motd_widgets::builtin_registry()?;
    let engine = Engine::new(&registry, settings);
    let motd = engine.assemble(&config.widgets);

    if let Some(spinner) = spinner {
        spinner.stop();
    }

    println!("{motd}");
    Ok(())
}
