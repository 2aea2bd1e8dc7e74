use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use curve_visualiser_core::{
    parse_points_json, points_to_json, static_chain, store, Decomposer, PlaybackConfig,
    PlaybackController, DEFAULT_SIGNIFICANCE_THRESHOLD,
};
use tracing_subscriber::EnvFilter;

fn main() -> curve_visualiser_core::Result<()> {
    init_tracing();

    let cli = Cli::parse();

    match cli.command {
        Commands::Decompose {
            input,
            output,
            threshold,
        } => run_decompose(&input, &output, threshold),
        Commands::Animate {
            input,
            frames,
            speed,
            trajectory_out,
        } => run_animate(&input, frames, speed, trajectory_out.as_deref()),
        Commands::Table { input } => run_table(&input),
    }
}

fn run_decompose(input: &Path, output: &Path, threshold: f64) -> curve_visualiser_core::Result<()> {
    tracing::info!(?input, ?output, threshold, "decomposing sampled curve");

    let points = parse_points_json(&fs::read_to_string(input)?)?;
    let set = Decomposer::with_threshold(threshold).decompose(&points)?;
    store::save(&set, output)?;

    tracing::info!(
        points = points.len(),
        components = set.len(),
        "wrote epicycle file"
    );
    Ok(())
}

fn run_animate(
    input: &Path,
    frames: u64,
    speed: f64,
    trajectory_out: Option<&Path>,
) -> curve_visualiser_core::Result<()> {
    tracing::info!(?input, frames, speed, "starting playback");

    let set = store::load(input)?;
    let mut controller = PlaybackController::new(set);
    controller.set_speed(speed)?;

    // Stand-in for the fixed-interval scheduler that would pace a renderer.
    for _ in 0..frames {
        let frame = controller.advance_frame();
        if let Some(tip) = frame.chain.last() {
            tracing::debug!(x = tip.x, y = tip.y, traced = frame.trajectory.len(), "tick");
        }
    }

    tracing::info!(
        frames = controller.frame_index(),
        traced = controller.trajectory().len(),
        "playback finished"
    );

    if let Some(path) = trajectory_out {
        fs::write(path, points_to_json(controller.trajectory())?)?;
        tracing::info!(?path, "wrote traced trajectory");
    }
    Ok(())
}

fn run_table(input: &Path) -> curve_visualiser_core::Result<()> {
    let set = store::load(input)?;

    println!(
        "{:>5} {:>10} {:>10} {:>14} {:>14} {:>14} {:>14}",
        "index", "freq", "rel freq", "radius", "phase (deg)", "center x", "center y"
    );
    for record in static_chain(&set) {
        println!(
            "{:>5} {:>10} {:>10} {:>14.6} {:>14.3} {:>14.6} {:>14.6}",
            record.index,
            record.frequency,
            record.relative_frequency,
            record.radius,
            record.phase_degrees,
            record.center_x,
            record.center_y
        );
    }
    Ok(())
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .try_init();
}

#[derive(Parser, Debug)]
#[command(author, version, about = "Epicycle decomposition and playback for sampled curves", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Decompose a sampled curve into its ranked epicycle components.
    Decompose {
        /// JSON file holding the sampled points.
        input: PathBuf,
        /// Output path for the epicycle text file.
        #[arg(default_value = "epicycles.txt")]
        output: PathBuf,
        /// Minimum radius a component must exceed to be kept.
        #[arg(short, long, default_value_t = DEFAULT_SIGNIFICANCE_THRESHOLD)]
        threshold: f64,
    },
    /// Replay a decomposition, tracing the reconstructed curve.
    Animate {
        /// Epicycle file produced by `decompose`.
        input: PathBuf,
        /// Number of scheduler ticks to run.
        #[arg(long, default_value_t = 1000)]
        frames: u64,
        /// Playback speed factor.
        #[arg(long, default_value_t = PlaybackConfig::default().initial_speed)]
        speed: f64,
        /// Optional output path for the traced trajectory as JSON points.
        #[arg(long)]
        trajectory_out: Option<PathBuf>,
    },
    /// Print the static per-component coordinate table.
    Table {
        /// Epicycle file produced by `decompose`.
        input: PathBuf,
    },
}
