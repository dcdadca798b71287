use anyhow::{Context, Result};
use rand::Rng;
use shoal_core::{Boid, Boundary, FlockStd, Vector2D};
use shoal_shared::{BoundaryMode, GoalUpdate, Position, RunSummary, SimulationSettings};
use std::path::Path;

/// Half-width of the spawn box around the world center
const SPAWN_SPREAD: f32 = 100.0;
/// Initial per-axis speed, heading outward from the center
const SPAWN_SPEED: f32 = 3.0;

pub fn boundary_from_mode(mode: BoundaryMode) -> Boundary {
    match mode {
        BoundaryMode::Reflective => Boundary::Reflective,
        BoundaryMode::Toroidal => Boundary::Toroidal,
    }
}

/// Load simulation settings from a JSON file.
pub fn load_settings(path: &Path) -> Result<SimulationSettings> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read settings file {}", path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("settings file {} is not valid JSON", path.display()))
}

/// Spawn a population at random positions in a box around the world center,
/// each boid initially heading outward at a fixed per-axis speed.
pub fn spawn_population(
    count: usize,
    settings: &SimulationSettings,
    extent: Vector2D,
) -> Vec<Boid> {
    let mut rng = rand::thread_rng();
    let center = extent / 2.0;
    let min_x = (center.x - SPAWN_SPREAD).max(0.0);
    let max_x = (center.x + SPAWN_SPREAD).min(extent.x);
    let min_y = (center.y - SPAWN_SPREAD).max(0.0);
    let max_y = (center.y + SPAWN_SPREAD).min(extent.y);

    (0..count)
        .map(|_| {
            let position = Vector2D::new(rng.gen_range(min_x..max_x), rng.gen_range(min_y..max_y));
            let velocity = Vector2D::new(
                SPAWN_SPEED.copysign(position.x - center.x),
                SPAWN_SPEED.copysign(position.y - center.y),
            );
            Boid::new(
                position,
                velocity,
                settings.cohesion_strength,
                settings.separation_strength,
                settings.alignment_strength,
                settings.attraction_strength,
                extent,
            )
        })
        .collect()
}

/// Headless simulation driver: owns the flock and the current goal, advances
/// ticks, and keeps running statistics for the final summary.
pub struct Runner {
    flock: FlockStd,
    goal: Vector2D,
    default_goal: Vector2D,
    ticks_run: u64,
    respawned: u64,
}

impl Runner {
    /// Create a runner with the goal at the world center.
    pub fn new(flock: FlockStd) -> Self {
        let default_goal = flock.extent / 2.0;
        Self {
            flock,
            goal: default_goal,
            default_goal,
            ticks_run: 0,
            respawned: 0,
        }
    }

    pub fn set_goal(&mut self, goal: Position) {
        self.goal = Vector2D::new(goal.x, goal.y);
    }

    /// Apply an externally produced goal update; no position means free
    /// flight, which falls back to the world center.
    pub fn apply_goal_update(&mut self, update: GoalUpdate) {
        self.goal = match update.position {
            Some(position) => Vector2D::new(position.x, position.y),
            None => self.default_goal,
        };
    }

    pub fn goal(&self) -> Position {
        Position::new(self.goal.x, self.goal.y)
    }

    pub fn boids(&self) -> &[Boid] {
        &self.flock.boids
    }

    /// Advance one tick toward the current goal.
    pub fn tick(&mut self) {
        let respawned = self.flock.tick(self.goal);
        if respawned > 0 {
            log::debug!(
                "tick {}: respawned {} boid(s) after wall collision",
                self.ticks_run,
                respawned
            );
        }
        self.respawned += respawned as u64;
        self.ticks_run += 1;
    }

    /// Run for `ticks` ticks and return the final summary.
    pub fn run(&mut self, ticks: u64) -> RunSummary {
        for _ in 0..ticks {
            self.tick();
            if self.ticks_run % 100 == 0 {
                let summary = self.summary();
                log::info!(
                    "tick {}: mean speed {:.3}, mean position ({:.1}, {:.1}), {} respawned so far",
                    self.ticks_run,
                    summary.mean_speed,
                    summary.mean_position.x,
                    summary.mean_position.y,
                    summary.respawned
                );
            }
        }
        self.summary()
    }

    pub fn summary(&self) -> RunSummary {
        let count = self.flock.boids.len();
        let (mut speed_sum, mut position_sum) = (0.0, Vector2D::zero());
        for boid in &self.flock.boids {
            speed_sum += boid.velocity.magnitude();
            position_sum += boid.position;
        }
        let divisor = count.max(1) as f32;
        RunSummary {
            ticks: self.ticks_run,
            boid_count: count,
            respawned: self.respawned,
            mean_speed: speed_sum / divisor,
            mean_position: Position::new(position_sum.x / divisor, position_sum.y / divisor),
        }
    }
}
