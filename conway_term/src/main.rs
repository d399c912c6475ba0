// main.rs - Conway's Game of Life in the terminal
//
// The engine computes generations; this binary only drives the loop, draws
// each generation with escape sequences and restores the terminal on exit.

use std::io::{self, BufWriter};
use std::pin::Pin;

use anyhow::Context;
use clap::Parser;
use sparse_life::coro::{CoroError, evolve_concurrent};
use sparse_life::patterns::PATTERNS;
use sparse_life::{Game, Generation, Render, Tick};
use tokio::time::MissedTickBehavior;
use tracing::{debug, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;
mod error;
mod render;
mod term;

use config::Config;
use render::TerminalRenderer;
use term::TerminalGuard;

fn main() -> anyhow::Result<()> {
    let config = Config::parse();
    init_tracing(config.verbose);

    if config.list_patterns {
        for pattern in PATTERNS {
            println!("{}", pattern.name);
        }
        return Ok(());
    }

    config.validate()?;
    let start = config.initial_generation()?;
    info!(population = start.len(), delay_ms = config.delay_ms, "starting");

    let runtime = tokio::runtime::Runtime::new().context("failed to start tokio runtime")?;
    runtime.block_on(run(&config, start))
}

fn init_tracing(verbose: bool) {
    // stderr, so log lines stay out of the frames drawn on stdout
    let filter = if verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()))
        .with(tracing_subscriber::fmt::layer().without_time().with_writer(io::stderr))
        .init();
}

/// Render, wait, step; until interrupted, out of generations or cycling.
async fn run(config: &Config, start: Generation) -> anyhow::Result<()> {
    let mut game = Game::new(start);

    // install the handler before the terminal is touched
    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);
    let mut listening = true;
    match arm(ctrl_c.as_mut()).await {
        None => {}
        Some(Ok(())) => {
            info!("interrupted before start");
            return Ok(());
        }
        Some(Err(err)) => {
            warn!(error = %err, "cannot listen for ctrl-c, stop with --generations");
            listening = false;
        }
    }

    let guard = TerminalGuard::enter().context("failed to prepare terminal")?;
    let stdout = io::stdout();
    let mut renderer = TerminalRenderer::new(BufWriter::new(stdout.lock()), config.viewport());

    let mut interval = tokio::time::interval(config.delay());
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
    interval.tick().await; // first tick is immediate

    renderer.render(game.number(), game.generation())?;
    loop {
        tokio::select! {
            signal = &mut ctrl_c, if listening => match signal {
                Ok(()) => {
                    info!(generation = game.number(), "interrupted");
                    break;
                }
                Err(err) => {
                    warn!(error = %err, "ctrl-c listener failed");
                    listening = false;
                    continue;
                }
            },
            _ = interval.tick() => {}
        }

        let tick = step(&mut game, config.workers).await?;
        renderer.render(tick.number, game.generation())?;

        if config.generations.is_some_and(|limit| tick.number >= limit) {
            debug!(generation = tick.number, "generation limit reached");
            break;
        }
        if config.stop_on_cycle && tick.cycle {
            info!(generation = tick.number, population = tick.population, "cycle detected");
            break;
        }
    }

    drop(renderer);
    drop(guard);
    Ok(())
}

/// Poll a listener exactly once. `None` while it is still pending.
async fn arm<F>(listener: Pin<&mut F>) -> Option<io::Result<()>>
where
    F: Future<Output = io::Result<()>>,
{
    tokio::select! {
        biased;
        signal = listener => Some(signal),
        _ = std::future::ready(()) => None,
    }
}

/// One generation, counted inline or split across `workers` tasks.
async fn step(game: &mut Game, workers: usize) -> Result<Tick, CoroError> {
    if workers <= 1 {
        return Ok(game.tick());
    }
    let chunk_size = game.population().div_ceil(workers);
    let next = evolve_concurrent(game.generation(), chunk_size).await?;
    Ok(game.advance(next))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::task::Poll;

    #[tokio::test]
    async fn arming_polls_a_pending_listener_once() {
        let polls = Cell::new(0);
        let listener = std::future::poll_fn(|_| {
            polls.set(polls.get() + 1);
            Poll::<io::Result<()>>::Pending
        });
        tokio::pin!(listener);
        assert!(arm(listener.as_mut()).await.is_none());
        assert_eq!(polls.get(), 1);
    }

    #[tokio::test]
    async fn arming_reports_a_finished_listener() {
        let failed = std::future::ready(Err::<(), _>(io::Error::other("no signals")));
        tokio::pin!(failed);
        assert!(matches!(arm(failed.as_mut()).await, Some(Err(_))));

        let fired = std::future::ready(Ok::<(), io::Error>(()));
        tokio::pin!(fired);
        assert!(matches!(arm(fired.as_mut()).await, Some(Ok(()))));
    }
}
