//! Quote Client — mounts the quote rotator in a terminal and renders every change of the
//! quote section to stdout. The rotator refreshes the quote immediately and then on a
//! fixed interval, fading it out while each request is in flight. Ctrl+C (or `--run-secs`)
//! tears it down.
//!
//! Usage example (CLI):
//! ```bash
//! quote_client --interval-ms 10000 --overlap cancel-on-next-tick
//! quote_client --once --strict --url http://localhost:9000/quote
//! ```
//!
//! Log verbosity follows `RUST_LOG` and defaults to `info`.
#![warn(missing_docs)]
mod args;
mod view;

use std::sync::Arc;
use std::thread;

use crate::args::Args;
use clap::Parser;
use crossbeam_channel::Receiver;
use log::{error, info};
use quote_common::{Quote, QuoteError, Result};
use quote_rotator::{
    CycleController, FadeIntent, FadeReducer, FadeState, HttpQuoteSource, QuoteRotator,
    RotatorConfig, RotatorEvent,
};
use tokio::sync::mpsc::{UnboundedReceiver, unbounded_channel};

/// Prints a frame for every state change until the rotator shuts down.
fn spawn_renderer(events: Receiver<RotatorEvent>) -> thread::JoinHandle<()> {
    thread::spawn(move || {
        let mut last_frame = String::new();
        for event in events.iter() {
            match event {
                RotatorEvent::State(state) => {
                    let frame = view::render(&state);
                    if frame != last_frame {
                        println!("{}\n", frame);
                        last_frame = frame;
                    }
                }
                RotatorEvent::Shutdown => break,
            }
        }
        info!("Renderer stopping...");
    })
}

/// Mount the rotator and keep it running until Ctrl+C or the optional run time elapses.
async fn run_rotator(
    config: RotatorConfig,
    args: &Args,
    mut stop: UnboundedReceiver<()>,
) -> Result<()> {
    let source = Arc::new(HttpQuoteSource::from_config(&config)?);
    let mut rotator = QuoteRotator::new(config, source)?;
    let renderer = spawn_renderer(rotator.subscribe());
    let mut handle = rotator.mount();

    match args.run_for() {
        Some(run_for) => {
            tokio::select! {
                _ = stop.recv() => {}
                _ = tokio::time::sleep(run_for) => {
                    info!("Run time of {:?} elapsed", run_for);
                }
            }
        }
        None => {
            stop.recv().await;
        }
    }

    handle.teardown().await?;
    if renderer.join().is_err() {
        error!("Renderer thread panicked");
    }
    Ok(())
}

/// Run cycle 1 to completion, or return `None` if a stop arrives first.
async fn fetch_once(
    controller: &CycleController,
    strict: bool,
    stop: &mut UnboundedReceiver<()>,
) -> Result<Option<Quote>> {
    let cycle = async {
        if strict {
            controller.fetch_strict(1).await
        } else {
            Ok(controller.run_cycle(1).await)
        }
    };
    tokio::select! {
        quote = cycle => quote.map(Some),
        Some(()) = stop.recv() => Ok(None),
    }
}

/// Run a single cycle and print the resulting section.
async fn run_once(
    config: RotatorConfig,
    strict: bool,
    mut stop: UnboundedReceiver<()>,
) -> Result<()> {
    let source = Arc::new(HttpQuoteSource::from_config(&config)?);
    let controller = CycleController::new(source, config.settle_delay);
    let Some(quote) = fetch_once(&controller, strict, &mut stop).await? else {
        info!("Stopped before the quote arrived");
        return Ok(());
    };
    let started = FadeReducer::reduce(FadeState::default(), FadeIntent::CycleStarted(1));
    let state = FadeReducer::reduce(started, FadeIntent::FetchSettled(1, quote));
    println!("{}", view::render(&state));
    Ok(())
}

fn main() -> Result<()> {
    init_logger();
    let args = Args::parse();
    let config = args.rotator_config();
    config.validate()?;

    let (stop_tx, stop_rx) = unbounded_channel::<()>();
    ctrlc::set_handler(move || {
        info!("Ctrl+C received. Stopping...");
        let _ = stop_tx.send(());
    })
    .map_err(|e| QuoteError::Signal(e.to_string()))?;

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    if args.once {
        return runtime.block_on(run_once(config, args.strict, stop_rx));
    }
    runtime.block_on(run_rotator(config, &args, stop_rx))
}

fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();
}
