use anyhow::{ensure, Context, Result};
use clap::Parser;
use shoal_cli::{boundary_from_mode, load_settings, spawn_population, Runner};
use shoal_core::{FlockStd, Vector2D};
use shoal_shared::{BoundaryMode, Position, SimulationSettings};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "Headless flocking/schooling simulation", long_about = None)]
struct Args {
    /// Number of boids in the population
    #[arg(short = 'n', long, default_value_t = 50)]
    count: usize,

    /// Cohesion strength multiplier
    #[arg(long, default_value_t = 1.0)]
    cohesion: f32,

    /// Separation strength multiplier
    #[arg(long, default_value_t = 1.0)]
    separation: f32,

    /// Alignment strength multiplier
    #[arg(long, default_value_t = 1.0)]
    alignment: f32,

    /// Goal attraction strength multiplier
    #[arg(long, default_value_t = 1.0)]
    attraction: f32,

    /// World width
    #[arg(long, default_value_t = 1200.0)]
    width: f32,

    /// World height
    #[arg(long, default_value_t = 700.0)]
    height: f32,

    /// Number of ticks to simulate
    #[arg(short, long, default_value_t = 1000)]
    ticks: u64,

    /// Wrap around the world edges instead of bouncing off them
    #[arg(short, long)]
    wrapped: bool,

    /// Goal x coordinate (defaults to the world center)
    #[arg(long)]
    goal_x: Option<f32>,

    /// Goal y coordinate (defaults to the world center)
    #[arg(long)]
    goal_y: Option<f32>,

    /// JSON settings file; overrides the strength and boundary flags
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print the run summary as JSON
    #[arg(long)]
    json: bool,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

impl Args {
    fn settings(&self) -> Result<SimulationSettings> {
        if let Some(path) = &self.config {
            return load_settings(path);
        }
        Ok(SimulationSettings {
            cohesion_strength: self.cohesion,
            separation_strength: self.separation,
            alignment_strength: self.alignment,
            attraction_strength: self.attraction,
            boundary: if self.wrapped {
                BoundaryMode::Toroidal
            } else {
                BoundaryMode::Reflective
            },
        })
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.debug {
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Debug)
            .init();
    } else {
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();
    }

    ensure!(args.count > 0, "population must not be empty");
    ensure!(
        args.width > 0.0 && args.height > 0.0,
        "world extent must be positive"
    );

    let settings = args.settings().context("failed to resolve settings")?;
    let extent = Vector2D::new(args.width, args.height);

    log::info!(
        "Starting {} boids in a {}x{} {:?} world for {} ticks",
        args.count,
        args.width,
        args.height,
        settings.boundary,
        args.ticks
    );

    let boids = spawn_population(args.count, &settings, extent);
    let flock = FlockStd::new(boids, boundary_from_mode(settings.boundary), extent);
    let mut runner = Runner::new(flock);
    if let (Some(x), Some(y)) = (args.goal_x, args.goal_y) {
        runner.set_goal(Position::new(x, y));
    }

    let summary = runner.run(args.ticks);

    if args.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&summary).context("failed to serialize summary")?
        );
    } else {
        println!(
            "{} ticks, {} boids, {} respawned, mean speed {:.3}, mean position ({:.1}, {:.1})",
            summary.ticks,
            summary.boid_count,
            summary.respawned,
            summary.mean_speed,
            summary.mean_position.x,
            summary.mean_position.y
        );
    }

    Ok(())
}
