//! livecue: type what you want Live to do.
//!
//! Reads one instruction per line (or a single `-c` instruction), interprets
//! it, and sends the resulting OSC messages to Live.

use std::io::{self, BufRead, Write};

use clap::Parser;
use log::LevelFilter;

use livecue::ai;
use livecue::command::CommandInterpreter;
use livecue::live::{Dispatcher, LiveConfig, LiveSink, OscSender, PrintSink};

#[derive(Parser, Debug)]
#[command(name = "livecue", version, about = "Natural-language control for Ableton Live")]
struct Cli {
    /// Host running AbletonOSC (overrides ~/.livecue/live.yaml).
    #[arg(long)]
    host: Option<String>,
    /// AbletonOSC UDP port (overrides ~/.livecue/live.yaml).
    #[arg(long)]
    port: Option<u16>,
    /// Seed for bassline variation; random when omitted.
    #[arg(long)]
    seed: Option<u64>,
    /// Print commands and OSC messages instead of sending them.
    #[arg(long)]
    dry_run: bool,
    /// Skip the language-model stage even if configured.
    #[arg(long)]
    no_ai: bool,
    /// Debug-level logging.
    #[arg(short, long)]
    verbose: bool,
    /// Run a single instruction and exit.
    #[arg(short = 'c', long = "command")]
    command: Option<String>,
}

fn init_logging(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    env_logger::builder()
        .filter_level(level)
        .parse_default_env()
        .init();
}

/// Interpret and execute one line.
fn run_line(
    interpreter: &CommandInterpreter,
    dispatcher: &mut Dispatcher,
    sink: &mut dyn LiveSink,
    line: &str,
    dry_run: bool,
) -> Result<(), livecue::Error> {
    let command = interpreter.interpret(line)?;
    if dry_run {
        match serde_json::to_string(&command) {
            Ok(json) => println!("{json}"),
            Err(_) => println!("{command}"),
        }
    }
    dispatcher.execute(&command, sink)?;
    log::info!("processed: {command}");
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut live_config = LiveConfig::load().unwrap_or_default();
    if let Some(host) = cli.host {
        live_config.host = host;
    }
    if let Some(port) = cli.port {
        live_config.port = port;
    }

    let ai_config = if cli.no_ai { None } else { ai::config::load_config() };
    let interpreter = CommandInterpreter::from_config(ai_config.as_ref());

    let mut sink: Box<dyn LiveSink> = if cli.dry_run {
        Box::new(PrintSink::stdout())
    } else {
        match OscSender::connect(&live_config) {
            Ok(sender) => Box::new(sender),
            Err(e) => {
                eprintln!("failed to reach Live at {}: {e}", live_config.address());
                std::process::exit(1);
            }
        }
    };

    let mut dispatcher = match cli.seed {
        Some(seed) => Dispatcher::new(live_config, seed),
        None => Dispatcher::from_entropy(live_config),
    };

    if let Some(line) = cli.command {
        if let Err(e) = run_line(&interpreter, &mut dispatcher, sink.as_mut(), &line, cli.dry_run) {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
        return;
    }

    println!(
        "livecue v{}: type an instruction, 'exit' to quit",
        env!("CARGO_PKG_VERSION")
    );
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("> ");
        let _ = io::stdout().flush();

        let Some(Ok(line)) = lines.next() else {
            break;
        };
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line.eq_ignore_ascii_case("exit") || line.eq_ignore_ascii_case("quit") {
            break;
        }

        if let Err(e) = run_line(&interpreter, &mut dispatcher, sink.as_mut(), line, cli.dry_run) {
            log::error!("{line}: {e}");
            eprintln!("error: {e}");
        }
    }
    log::info!("bye");
}
