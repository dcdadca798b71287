#![cfg_attr(not(feature = "std"), no_std)]

use serde::{Deserialize, Serialize};

/// A 2D position in world coordinates
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

impl Position {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another position
    pub fn distance_to(&self, other: &Position) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        libm::sqrtf(dx * dx + dy * dy)
    }
}

/// Which boundary resolution the simulation uses
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BoundaryMode {
    /// Walled world, boids bounce off the edges
    Reflective,
    /// Wrap-around world, boids reappear at the opposite edge
    Toroidal,
}

/// Simulation configuration, loadable from a JSON settings file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationSettings {
    pub cohesion_strength: f32,
    pub separation_strength: f32,
    pub alignment_strength: f32,
    pub attraction_strength: f32,
    pub boundary: BoundaryMode,
}

impl Default for SimulationSettings {
    fn default() -> Self {
        Self {
            cohesion_strength: 1.0,
            separation_strength: 1.0,
            alignment_strength: 1.0,
            attraction_strength: 1.0,
            boundary: BoundaryMode::Reflective,
        }
    }
}

/// Externally supplied goal update (None means free flight, no goal)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoalUpdate {
    pub position: Option<Position>,
}

/// Summary of a finished headless run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunSummary {
    pub ticks: u64,
    pub boid_count: usize,
    pub respawned: u64,
    pub mean_speed: f32,
    pub mean_position: Position,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_distance() {
        let p1 = Position::new(0.0, 0.0);
        let p2 = Position::new(3.0, 4.0);
        assert_eq!(p1.distance_to(&p2), 5.0);
    }

    #[test]
    fn test_settings_default_is_reflective() {
        let settings = SimulationSettings::default();
        assert_eq!(settings.boundary, BoundaryMode::Reflective);
        assert_eq!(settings.cohesion_strength, 1.0);
    }

    #[cfg(feature = "std")]
    #[test]
    fn test_settings_from_json() {
        let json = r#"{
            "cohesion_strength": 0.5,
            "separation_strength": 2.0,
            "alignment_strength": 1.0,
            "attraction_strength": 0.0,
            "boundary": "toroidal"
        }"#;
        let settings: SimulationSettings = serde_json::from_str(json).unwrap();
        assert_eq!(settings.boundary, BoundaryMode::Toroidal);
        assert_eq!(settings.separation_strength, 2.0);
    }
}
