use std::{
    fs::File,
    io::{self, BufRead, BufReader},
    path::PathBuf,
    sync::Arc,
    thread,
    time::Duration,
};

use anyhow::Context;
use clap::Parser;
use mediabutton_core::{MediaSession, SessionConfig, SessionEvent};

mod demo;
mod script;

use demo::{DemoLibrary, LoggingPlayer};
use script::{ScriptStep, parse_line};

/// Replay a script of transport events through a media session
#[derive(Debug, Parser)]
#[command(name = "mediabutton", version, about)]
struct Args {
    /// Event script; reads stdin when omitted
    script: Option<PathBuf>,

    /// TOML session config
    #[arg(long)]
    config: Option<PathBuf>,

    /// Gesture window length, overrides the config file
    #[arg(long)]
    timeout_ms: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => SessionConfig::load(path)
            .with_context(|| format!("failed to load config {:?}", path))?,
        None => SessionConfig::default(),
    };
    if let Some(timeout_ms) = args.timeout_ms {
        config = config.with_click_timeout_ms(timeout_ms);
    }
    let settle = config.click_timeout() + Duration::from_millis(100);

    let (session, handle) =
        MediaSession::new(config, Arc::new(LoggingPlayer::new()), Arc::new(DemoLibrary::new()))?;
    let worker = session.spawn()?;

    let input: Box<dyn BufRead> = match &args.script {
        Some(path) => Box::new(BufReader::new(
            File::open(path).with_context(|| format!("cannot open script {:?}", path))?,
        )),
        None => Box::new(BufReader::new(io::stdin())),
    };

    for (number, line) in input.lines().enumerate() {
        let line = line.context("failed to read script")?;
        let step = match parse_line(&line) {
            Ok(Some(step)) => step,
            Ok(None) => continue,
            Err(e) => {
                log::warn!("line {}: {}", number + 1, e);
                continue;
            }
        };

        match step {
            ScriptStep::Sleep(duration) => thread::sleep(duration),
            ScriptStep::Event(SessionEvent::MediaButton(event)) => {
                if !handle.media_button_event(event)? {
                    log::info!("line {}: media button not handled", number + 1);
                }
            }
            ScriptStep::Event(event) => handle.send(event)?,
        }
    }

    // let any open gesture window and pending play requests finish
    thread::sleep(settle);
    handle.shutdown()?;
    worker
        .join()
        .map_err(|_| anyhow::anyhow!("media session thread panicked"))?;

    Ok(())
}
