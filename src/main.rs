// Sortscope CLI
//
// Wires the engine to a terminal renderer: generate an array, pick an
// algorithm, run one animated sort to completion.

use std::sync::Arc;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use env_logger::{Builder, Env};

use sortscope_client::{AnsiRenderer, JsonRenderer};
use sortscope_engine::{AnimationDriver, DEFAULT_SIZE};
use sortscope_utils::{Algorithm, PaceSource, Renderer, DEFAULT_SPEED};

#[derive(Parser, Debug)]
#[clap(
    name = "sortscope",
    version,
    about = "Animate sorting algorithms as a terminal bar chart"
)]
struct Args {
    /// Algorithm to run: bubble, selection, insertion, merge, quick, heap,
    /// radix, shell, bucket or counting
    #[clap(short, long, default_value = "bubble")]
    algorithm: String,

    /// Number of values to generate
    #[clap(short, long, default_value_t = DEFAULT_SIZE)]
    size: usize,

    /// Animation speed in [1, 100]; the per-step delay is 105 - speed ms
    #[clap(long, default_value_t = DEFAULT_SPEED)]
    speed: u8,

    /// Output mode: "ansi" bar chart or "json" snapshot lines
    #[clap(short, long, default_value = "ansi")]
    output: String,
}

fn main() -> Result<()> {
    Builder::from_env(Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    let algorithm: Algorithm = args
        .algorithm
        .parse()
        .with_context(|| format!("unrecognized algorithm '{}'", args.algorithm))?;

    let renderer: Arc<dyn Renderer> = match args.output.as_str() {
        "ansi" => Arc::new(AnsiRenderer::new()),
        "json" => Arc::new(JsonRenderer::new()),
        other => return Err(anyhow!("unknown output mode '{}'", other)),
    };

    let complexity = algorithm.complexity();
    log::info!(
        "{}: best case {}, worst case {}",
        algorithm,
        complexity.best,
        complexity.worst
    );

    let driver = AnimationDriver::new(renderer, PaceSource::new(args.speed));
    driver.generate(args.size);

    let worker = driver
        .start(algorithm)
        .ok_or_else(|| anyhow!("a sort is already in progress"))?;
    worker.join().map_err(|_| anyhow!("sort worker panicked"))?;

    println!(
        "{} finished: best case {}, worst case {}",
        algorithm, complexity.best, complexity.worst
    );
    Ok(())
}
