//! Example running many simulated tasks over a fixed number of gauges.
//!
//! At most `TASKS` tasks run at once. Each one borrows a free gauge, reports
//! its progress on it, logs a message when done and hands the gauge back.
//!
//! Run with `RUST_LOG=progress_grid=debug` to see the library's logs.

use color_eyre::eyre::eyre;
use color_eyre::Result;
use console::style;
use futures::stream::{self, StreamExt};
use progress_grid::{percent::perc_int, ProgressBuilder, ProgressManager};
use rand::Rng;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tracing_subscriber::EnvFilter;

/// Number of concurrent tasks, and of gauges.
const TASKS: usize = 10;
/// Number of tasks to run overall.
const TOTAL: usize = 100;

/// Gauges not used by any running task.
type FreeSlots = Arc<Mutex<Vec<usize>>>;

async fn run_task(n: usize, progress: Arc<ProgressManager>, free: FreeSlots) -> Result<()> {
    let steps: i32 = rand::rng().random_range(0..10);

    let item = free
        .lock()
        .map_err(|_| eyre!("slot pool poisoned"))?
        .pop()
        .ok_or_else(|| eyre!("no free slot for task {n}"))?;

    progress.set_color(item, "green")?;
    for i in 0..steps {
        if i > 0 {
            tokio::time::sleep(Duration::from_millis(250)).await;
        }
        progress.set(item, format!("Task {n} Sleep {}", steps - i), perc_int(i, steps))?;
    }

    progress.set(item, format!("Task {n} Done!"), 100)?;
    progress.set_color(item, "cyan")?;
    progress.add_message_fmt(format_args!("Task {n} Done!"))?;

    free.lock().map_err(|_| eyre!("slot pool poisoned"))?.push(item);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let progress = Arc::new(
        ProgressBuilder::new(TASKS)
            .border(true)
            .header(2)
            .messages(10)
            .build()?,
    );
    progress.set_header_fmt(format_args!(
        "Example application\n{TOTAL} tasks, {TASKS} at a time"
    ))?;

    let free: FreeSlots = Arc::new(Mutex::new((0..TASKS).rev().collect()));

    let results = stream::iter(0..TOTAL)
        .map(|n| run_task(n, Arc::clone(&progress), Arc::clone(&free)))
        .buffer_unordered(TASKS)
        .collect::<Vec<_>>()
        .await;

    progress.finish()?;

    let failed = results.iter().filter(|r| r.is_err()).count();
    println!("{}", style("Messages").bold());
    println!("{}", progress.messages().join("\n"));
    println!(
        "\n{} tasks completed, {} failed.",
        style(TOTAL - failed).green(),
        style(failed).red()
    );

    results.into_iter().collect::<Result<Vec<_>>>()?;
    Ok(())
}
