#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "std")]
use rand::Rng;

/// A 2D vector used for positions, velocities and accelerations
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vector2D {
    pub x: f32,
    pub y: f32,
}

impl Vector2D {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn zero() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    pub fn magnitude(&self) -> f32 {
        #[cfg(feature = "std")]
        {
            (self.x * self.x + self.y * self.y).sqrt()
        }
        #[cfg(not(feature = "std"))]
        {
            libm::sqrtf(self.x * self.x + self.y * self.y)
        }
    }

    pub fn dot(&self, other: &Vector2D) -> f32 {
        self.x * other.x + self.y * other.y
    }

    pub fn distance(&self, other: &Vector2D) -> f32 {
        (*self - *other).magnitude()
    }

    /// Unit vector in the same direction. The zero vector has no direction
    /// and normalizes to zero; callers relying on a direction must check
    /// the magnitude first.
    pub fn normalize(&self) -> Self {
        let mag = self.magnitude();
        if mag > 0.0 {
            Self {
                x: self.x / mag,
                y: self.y / mag,
            }
        } else {
            Self::zero()
        }
    }
}

impl core::ops::Add for Vector2D {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }
}

impl core::ops::Sub for Vector2D {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }
}

impl core::ops::Mul<f32> for Vector2D {
    type Output = Self;

    fn mul(self, scalar: f32) -> Self {
        Self {
            x: self.x * scalar,
            y: self.y * scalar,
        }
    }
}

impl core::ops::Div<f32> for Vector2D {
    type Output = Self;

    fn div(self, scalar: f32) -> Self {
        Self {
            x: self.x / scalar,
            y: self.y / scalar,
        }
    }
}

impl core::ops::AddAssign for Vector2D {
    fn add_assign(&mut self, other: Self) {
        self.x += other.x;
        self.y += other.y;
    }
}

/// Boundary resolution applied to every boid of a simulation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Boundary {
    /// World edges are elastic walls; a step can fail near corners
    Reflective,
    /// World edges wrap around (torus); a step never fails
    Toroidal,
}

/// Failure of a single boid's step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepError {
    /// One reflection was not enough to bring the boid back inside the
    /// world. Happens at high speed or very close to a corner. The driver
    /// recovers by respawning the boid; the simulation itself never aborts.
    OutOfWorld,
}

impl core::fmt::Display for StepError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            StepError::OutOfWorld => write!(f, "boid left the world and could not be reflected back"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for StepError {}

/// A single boid. Immutable per tick: stepping produces a new value.
#[derive(Debug, Clone)]
pub struct Boid {
    pub position: Vector2D,
    pub velocity: Vector2D,
    pub cohesion_strength: f32,
    pub separation_strength: f32,
    pub alignment_strength: f32,
    pub attraction_strength: f32,
    /// Upper corner of the world rectangle; the lower corner is the origin
    pub world_extent: Vector2D,
}

impl Boid {
    pub fn new(
        position: Vector2D,
        velocity: Vector2D,
        cohesion_strength: f32,
        separation_strength: f32,
        alignment_strength: f32,
        attraction_strength: f32,
        world_extent: Vector2D,
    ) -> Self {
        Self {
            position,
            velocity,
            cohesion_strength,
            separation_strength,
            alignment_strength,
            attraction_strength,
            world_extent,
        }
    }

    /// Replacement boid after an [`StepError::OutOfWorld`]: random in-world
    /// position, zero velocity, same behavior strengths.
    #[cfg(feature = "std")]
    pub fn respawned(&self) -> Self {
        let mut rng = rand::thread_rng();
        let position = Vector2D::new(
            rng.gen_range(0.0..self.world_extent.x),
            rng.gen_range(0.0..self.world_extent.y),
        );
        Self::new(
            position,
            Vector2D::zero(),
            self.cohesion_strength,
            self.separation_strength,
            self.alignment_strength,
            self.attraction_strength,
            self.world_extent,
        )
    }

    /// Sum of the four behavior accelerations, each scaled by its strength.
    /// Setting a strength to zero disables that behavior entirely.
    pub fn composite_acceleration(&self, others: &[Boid], goal: Vector2D) -> Vector2D {
        behavior::cohesion(self, others.iter()) * self.cohesion_strength
            + behavior::separation(self, others.iter()) * self.separation_strength
            + behavior::alignment(self, others.iter()) * self.alignment_strength
            + behavior::attraction(self, goal) * self.attraction_strength
    }

    /// Advance one tick in a walled world.
    ///
    /// Integrates acceleration and drag with a unit timestep, then resolves
    /// wall contact as an a posteriori elastic collision: the overshoot is
    /// mirrored about the violated edge and that axis's velocity component
    /// is negated. A single reflection is not always enough at high speed or
    /// very close to a corner, in which case the step fails and the caller
    /// decides what to do with the boid.
    pub fn step(&self, others: &[Boid], goal: Vector2D) -> Result<Boid, StepError> {
        let acceleration = self.composite_acceleration(others, goal);
        let mut velocity = self.velocity + acceleration + behavior::stokes_drag(self.velocity);
        let mut position = self.position + velocity;

        if position.x < 0.0 {
            position.x = -position.x;
            velocity.x = -velocity.x;
        } else if position.x > self.world_extent.x {
            position.x = 2.0 * self.world_extent.x - position.x;
            velocity.x = -velocity.x;
        }
        if position.y < 0.0 {
            position.y = -position.y;
            velocity.y = -velocity.y;
        } else if position.y > self.world_extent.y {
            position.y = 2.0 * self.world_extent.y - position.y;
            velocity.y = -velocity.y;
        }

        if position.x < 0.0
            || position.x > self.world_extent.x
            || position.y < 0.0
            || position.y > self.world_extent.y
        {
            return Err(StepError::OutOfWorld);
        }

        Ok(Boid::new(
            position,
            velocity,
            self.cohesion_strength,
            self.separation_strength,
            self.alignment_strength,
            self.attraction_strength,
            self.world_extent,
        ))
    }

    /// Advance one tick on a torus: coordinates past an edge reappear at the
    /// opposite edge, velocity is left alone. Never fails.
    ///
    /// Assumes per-tick displacement stays below one world extent per axis,
    /// so a single wrap restores validity.
    pub fn wrapped_step(&self, others: &[Boid], goal: Vector2D, max_x: f32, max_y: f32) -> Boid {
        let acceleration = self.composite_acceleration(others, goal);
        let velocity = self.velocity + acceleration + behavior::stokes_drag(self.velocity);
        let mut position = self.position + velocity;

        if position.x > max_x {
            position.x -= max_x;
        } else if position.x < 0.0 {
            position.x += max_x;
        }
        if position.y > max_y {
            position.y -= max_y;
        } else if position.y < 0.0 {
            position.y += max_y;
        }

        Boid::new(
            position,
            velocity,
            self.cohesion_strength,
            self.separation_strength,
            self.alignment_strength,
            self.attraction_strength,
            self.world_extent,
        )
    }
}

/// The behavior accelerations acting on a boid.
///
/// Cohesion and alignment weight each neighbor by a perception factor that
/// decays with distance; separation and goal attraction use their own
/// distance laws. All functions take the neighbor set excluding the boid
/// itself; that exclusion is the caller's responsibility.
pub mod behavior {
    use super::*;

    /// Falloff exponent for perception, a compromise between sound/light
    /// propagation in water (r^3, fish) and in air (r^2, birds)
    pub const PERCEPTION_FALLOFF: f32 = 2.75;
    /// Separation scale: two boids 10 units apart feel unit repulsion
    pub const COLLISION_SCALE: f32 = 100.0;
    /// Goal attraction decay; smaller means the goal is felt from further away
    pub const GOAL_PERCEPTION_DECAY: f32 = 0.1;
    /// Stokes (laminar flow) drag coefficient
    pub const DRAG_COEFFICIENT: f32 = 0.005;

    fn powf(base: f32, exp: f32) -> f32 {
        #[cfg(feature = "std")]
        {
            base.powf(exp)
        }
        #[cfg(not(feature = "std"))]
        {
            libm::powf(base, exp)
        }
    }

    /// How well a neighbor at `dist` is perceived: `min(1, 1/dist^2.75)`.
    /// Never exceeds 1, so anything closer than one unit is fully perceived.
    pub fn perception_weight(dist: f32) -> f32 {
        let falloff = powf(dist, PERCEPTION_FALLOFF);
        if falloff <= 0.0 {
            // coincident neighbor, fully perceived
            return 1.0;
        }
        (1.0 / falloff).min(1.0)
    }

    /// Pull toward the perception-weighted centroid of the neighbors.
    ///
    /// The pull is the raw offset to the centroid, so a farther centroid
    /// pulls harder. No neighbors means no centroid and zero acceleration.
    pub fn cohesion<'a, I>(boid: &Boid, others: I) -> Vector2D
    where
        I: Iterator<Item = &'a Boid>,
    {
        let mut weighted = Vector2D::zero();
        let mut total_weight = 0.0;

        for other in others {
            let weight = perception_weight(boid.position.distance(&other.position));
            weighted += other.position * weight;
            total_weight += weight;
        }

        if total_weight <= 0.0 {
            return Vector2D::zero();
        }

        let centroid = weighted / total_weight;
        centroid - boid.position
    }

    /// Push away from every neighbor, inverse-square in distance. Not
    /// perception-weighted: distant boids barely matter through the square
    /// law alone, and very close ones must dominate. Coincident neighbors
    /// have no away direction and are skipped.
    pub fn separation<'a, I>(boid: &Boid, others: I) -> Vector2D
    where
        I: Iterator<Item = &'a Boid>,
    {
        let mut acc = Vector2D::zero();

        for other in others {
            let away = boid.position - other.position;
            let dist = away.magnitude();
            if dist <= 0.0 {
                continue;
            }
            acc += away.normalize() * (COLLISION_SCALE / (dist * dist));
        }

        acc
    }

    /// Accelerate toward the perception-weighted average velocity of the
    /// neighbors, closing the mismatch rather than matching instantly.
    pub fn alignment<'a, I>(boid: &Boid, others: I) -> Vector2D
    where
        I: Iterator<Item = &'a Boid>,
    {
        let mut weighted = Vector2D::zero();
        let mut total_weight = 0.0;

        for other in others {
            let weight = perception_weight(boid.position.distance(&other.position));
            weighted += other.velocity * weight;
            total_weight += weight;
        }

        if total_weight <= 0.0 {
            return Vector2D::zero();
        }

        let common_velocity = weighted / total_weight;
        common_velocity - boid.velocity
    }

    /// Accelerate toward the goal with magnitude `1/(1 + 0.1*dist)`:
    /// saturating near the goal, decaying smoothly, never zero at range.
    /// A goal exactly at the boid's position has no direction and yields
    /// zero acceleration.
    pub fn attraction(boid: &Boid, goal: Vector2D) -> Vector2D {
        let toward = goal - boid.position;
        let dist = toward.magnitude();
        if dist <= 0.0 {
            return Vector2D::zero();
        }
        toward.normalize() * (1.0 / (1.0 + GOAL_PERCEPTION_DECAY * dist))
    }

    /// Viscous drag opposing the current velocity, proportional to speed
    /// (laminar flow; turbulent flow would give Newton drag instead).
    pub fn stokes_drag(velocity: Vector2D) -> Vector2D {
        // No movement, no drag. Short-circuit rather than normalize zero.
        if velocity == Vector2D::zero() {
            return Vector2D::zero();
        }
        velocity * -DRAG_COEFFICIENT
    }
}

/// A fixed-capacity population for no_std environments. Toroidal boundary
/// only: wrapping never fails, so no RNG is needed for respawns.
pub struct Flock<const N: usize> {
    pub boids: heapless::Vec<Boid, N>,
    pub extent: Vector2D,
}

impl<const N: usize> Flock<N> {
    pub fn new(extent: Vector2D) -> Self {
        Self {
            boids: heapless::Vec::new(),
            extent,
        }
    }

    pub fn add_boid(&mut self, boid: Boid) -> Result<(), Boid> {
        self.boids.push(boid)
    }

    /// Advance the whole population one tick. Every boid is stepped against
    /// the previous tick's snapshot, then the population is replaced at once.
    pub fn tick(&mut self, goal: Vector2D) {
        let mut next = heapless::Vec::<Boid, N>::new();

        for (i, boid) in self.boids.iter().enumerate() {
            let mut others = heapless::Vec::<Boid, N>::new();
            for (j, other) in self.boids.iter().enumerate() {
                if j != i {
                    let _ = others.push(other.clone());
                }
            }
            let _ = next.push(boid.wrapped_step(&others, goal, self.extent.x, self.extent.y));
        }

        self.boids = next;
    }
}

/// A heap-allocated population for std environments.
#[cfg(feature = "std")]
pub struct FlockStd {
    pub boids: Vec<Boid>,
    pub boundary: Boundary,
    pub extent: Vector2D,
}

#[cfg(feature = "std")]
impl FlockStd {
    pub fn new(boids: Vec<Boid>, boundary: Boundary, extent: Vector2D) -> Self {
        Self {
            boids,
            boundary,
            extent,
        }
    }

    /// Advance the whole population one tick toward `goal`.
    ///
    /// Every boid sees the previous tick's population (minus itself) and
    /// never a neighbor's already-updated state; the new population replaces
    /// the old one only after all boids have been stepped. Under the
    /// reflective boundary a failed boid is respawned at a random position
    /// with zero velocity, keeping its strengths. Returns how many boids
    /// were respawned this tick.
    pub fn tick(&mut self, goal: Vector2D) -> usize {
        let mut next = Vec::with_capacity(self.boids.len());
        let mut respawned = 0;

        for (i, boid) in self.boids.iter().enumerate() {
            let others: Vec<Boid> = self
                .boids
                .iter()
                .enumerate()
                .filter(|&(j, _)| j != i)
                .map(|(_, other)| other.clone())
                .collect();

            let successor = match self.boundary {
                Boundary::Toroidal => {
                    boid.wrapped_step(&others, goal, self.extent.x, self.extent.y)
                }
                Boundary::Reflective => match boid.step(&others, goal) {
                    Ok(next_boid) => next_boid,
                    Err(StepError::OutOfWorld) => {
                        respawned += 1;
                        boid.respawned()
                    }
                },
            };
            next.push(successor);
        }

        self.boids = next;
        respawned
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WORLD: Vector2D = Vector2D { x: 100.0, y: 100.0 };

    fn plain_boid(position: Vector2D, velocity: Vector2D) -> Boid {
        Boid::new(position, velocity, 0.0, 0.0, 0.0, 0.0, WORLD)
    }

    #[test]
    fn test_vector2d_magnitude() {
        let v = Vector2D::new(3.0, 4.0);
        assert_eq!(v.magnitude(), 5.0);
    }

    #[test]
    fn test_vector2d_dot() {
        let v1 = Vector2D::new(1.0, 2.0);
        let v2 = Vector2D::new(3.0, 4.0);
        assert_eq!(v1.dot(&v2), 11.0);
    }

    #[test]
    fn test_vector2d_normalize() {
        let v = Vector2D::new(3.0, 4.0);
        let normalized = v.normalize();
        assert!((normalized.magnitude() - 1.0).abs() < 1e-4);
    }

    #[test]
    fn test_vector2d_normalize_zero_is_zero() {
        assert_eq!(Vector2D::zero().normalize(), Vector2D::zero());
    }

    #[test]
    fn test_vector2d_operations() {
        let v1 = Vector2D::new(1.0, 2.0);
        let v2 = Vector2D::new(3.0, 4.0);

        assert_eq!(v1 + v2, Vector2D::new(4.0, 6.0));
        assert_eq!(v2 - v1, Vector2D::new(2.0, 2.0));
        assert_eq!(v1 * 2.0, Vector2D::new(2.0, 4.0));
        assert_eq!(v2 / 2.0, Vector2D::new(1.5, 2.0));
    }

    #[test]
    fn test_drag_is_exactly_zero_at_rest() {
        assert_eq!(behavior::stokes_drag(Vector2D::zero()), Vector2D::zero());
    }

    #[test]
    fn test_drag_opposes_motion() {
        let drag = behavior::stokes_drag(Vector2D::new(10.0, 0.0));
        assert!((drag.x + 10.0 * behavior::DRAG_COEFFICIENT).abs() < 1e-6);
        assert_eq!(drag.y, 0.0);
    }

    #[test]
    fn test_perception_weight_caps_at_one() {
        assert_eq!(behavior::perception_weight(0.0), 1.0);
        assert_eq!(behavior::perception_weight(0.5), 1.0);
        assert!(behavior::perception_weight(2.0) < 1.0);
        assert!(behavior::perception_weight(10.0) < behavior::perception_weight(2.0));
    }

    #[test]
    fn test_lone_boid_at_goal_feels_nothing() {
        let boid = Boid::new(
            Vector2D::new(50.0, 50.0),
            Vector2D::zero(),
            1.0,
            1.0,
            1.0,
            1.0,
            WORLD,
        );
        // No neighbors and a goal at the boid's own position: every term
        // hits its degenerate guard and the composite must be exactly zero.
        let acc = boid.composite_acceleration(&[], boid.position);
        assert_eq!(acc, Vector2D::zero());
    }

    #[test]
    fn test_separation_pair_at_distance_ten() {
        let a = plain_boid(Vector2D::new(0.0, 0.0), Vector2D::zero());
        let b = plain_boid(Vector2D::new(10.0, 0.0), Vector2D::zero());

        let acc_a = behavior::separation(&a, [&b].into_iter());
        let acc_b = behavior::separation(&b, [&a].into_iter());

        // 100 / 10^2 = 1, directed away from the other boid.
        assert!((acc_a.magnitude() - 1.0).abs() < 1e-5);
        assert!((acc_a.x + 1.0).abs() < 1e-5);
        assert!((acc_b.x - 1.0).abs() < 1e-5);
        assert!(acc_a.y.abs() < 1e-6);
    }

    #[test]
    fn test_separation_skips_coincident_neighbor() {
        let a = plain_boid(Vector2D::new(5.0, 5.0), Vector2D::zero());
        let b = plain_boid(Vector2D::new(5.0, 5.0), Vector2D::zero());
        let acc = behavior::separation(&a, [&b].into_iter());
        assert_eq!(acc, Vector2D::zero());
    }

    #[test]
    fn test_cohesion_pulls_by_centroid_distance() {
        let a = plain_boid(Vector2D::new(0.0, 0.0), Vector2D::zero());
        let b = plain_boid(Vector2D::new(10.0, 0.0), Vector2D::zero());

        // One neighbor: the weighted centroid is that neighbor's position,
        // and the pull magnitude equals the distance to it.
        let acc = behavior::cohesion(&a, [&b].into_iter());
        assert!((acc.x - 10.0).abs() < 1e-4);
        assert!(acc.y.abs() < 1e-6);
    }

    #[test]
    fn test_cohesion_empty_neighbors_is_zero() {
        let a = plain_boid(Vector2D::new(0.0, 0.0), Vector2D::zero());
        assert_eq!(behavior::cohesion(&a, std::iter::empty()), Vector2D::zero());
        assert_eq!(behavior::alignment(&a, std::iter::empty()), Vector2D::zero());
    }

    #[test]
    fn test_alignment_closes_velocity_mismatch() {
        let a = plain_boid(Vector2D::new(0.0, 0.0), Vector2D::new(1.0, 0.0));
        let b = plain_boid(Vector2D::new(3.0, 0.0), Vector2D::new(5.0, 0.0));

        let acc = behavior::alignment(&a, [&b].into_iter());
        // One neighbor: the common velocity is the neighbor's, and the
        // acceleration is the remaining mismatch.
        assert!((acc.x - 4.0).abs() < 1e-5);
        assert!(acc.y.abs() < 1e-6);

        let matched = plain_boid(Vector2D::new(0.0, 0.0), Vector2D::new(5.0, 0.0));
        let acc = behavior::alignment(&matched, [&b].into_iter());
        assert!(acc.magnitude() < 1e-6);
    }

    #[test]
    fn test_attraction_saturates_with_distance() {
        let a = plain_boid(Vector2D::new(0.0, 0.0), Vector2D::zero());

        let near = behavior::attraction(&a, Vector2D::new(10.0, 0.0));
        assert!((near.magnitude() - 0.5).abs() < 1e-5);
        assert!(near.x > 0.0);

        let far = behavior::attraction(&a, Vector2D::new(90.0, 0.0));
        assert!(far.magnitude() < near.magnitude());
        assert!(far.magnitude() > 0.0);
    }

    #[test]
    fn test_reflective_bounce_conserves_speed() {
        // Head-on approach to the x = 100 wall, all behaviors off.
        let boid = plain_boid(Vector2D::new(95.0, 50.0), Vector2D::new(10.0, 0.0));
        let next = boid.step(&[], Vector2D::new(50.0, 50.0)).unwrap();

        let vx = 10.0 * (1.0 - behavior::DRAG_COEFFICIENT);
        assert!((next.position.x - (200.0 - (95.0 + vx))).abs() < 1e-3);
        assert!((next.position.y - 50.0).abs() < 1e-6);
        assert!((next.velocity.x + vx).abs() < 1e-4);
        assert!((next.velocity.magnitude() - vx).abs() < 1e-4);
    }

    #[test]
    fn test_reflective_corner_overshoot_fails() {
        // Sitting on the corner, heading outward faster than the world is
        // wide: one reflection cannot restore validity.
        let boid = plain_boid(Vector2D::new(100.0, 100.0), Vector2D::new(150.0, 150.0));
        let result = boid.step(&[], Vector2D::new(50.0, 50.0));
        assert_eq!(result.unwrap_err(), StepError::OutOfWorld);
    }

    #[test]
    fn test_wrapped_step_stays_in_range() {
        let boid = plain_boid(Vector2D::new(99.0, 1.0), Vector2D::new(5.0, -5.0));
        let next = boid.wrapped_step(&[], Vector2D::new(50.0, 50.0), WORLD.x, WORLD.y);

        assert!(next.position.x >= 0.0 && next.position.x <= WORLD.x);
        assert!(next.position.y >= 0.0 && next.position.y <= WORLD.y);
        // Wrapping leaves the velocity alone (only drag acted on it).
        let speed = Vector2D::new(5.0, -5.0).magnitude() * (1.0 - behavior::DRAG_COEFFICIENT);
        assert!((next.velocity.magnitude() - speed).abs() < 1e-4);
    }

    #[test]
    fn test_toroidal_flock_never_leaves_world() {
        let extent = Vector2D::new(60.0, 60.0);
        let positions = [
            Vector2D::new(5.0, 5.0),
            Vector2D::new(55.0, 30.0),
            Vector2D::new(30.0, 55.0),
            Vector2D::new(12.0, 40.0),
        ];
        let boids = positions
            .iter()
            .map(|&p| Boid::new(p, Vector2D::new(2.0, -1.5), 0.02, 0.2, 0.5, 0.5, extent))
            .collect();
        let mut flock = FlockStd::new(boids, Boundary::Toroidal, extent);

        for _ in 0..50 {
            flock.tick(Vector2D::new(30.0, 30.0));
            for boid in &flock.boids {
                assert!(boid.position.x >= 0.0 && boid.position.x <= extent.x);
                assert!(boid.position.y >= 0.0 && boid.position.y <= extent.y);
            }
        }
    }

    #[test]
    fn test_reflective_flock_respawns_failed_boid() {
        let runaway = Boid::new(
            Vector2D::new(100.0, 100.0),
            Vector2D::new(150.0, 150.0),
            0.25,
            0.5,
            0.75,
            0.0,
            WORLD,
        );
        let mut flock = FlockStd::new(vec![runaway], Boundary::Reflective, WORLD);

        let respawned = flock.tick(Vector2D::new(50.0, 50.0));
        assert_eq!(respawned, 1);

        let replacement = &flock.boids[0];
        assert_eq!(replacement.velocity, Vector2D::zero());
        assert!(replacement.position.x >= 0.0 && replacement.position.x <= WORLD.x);
        assert!(replacement.position.y >= 0.0 && replacement.position.y <= WORLD.y);
        // Strengths survive the respawn.
        assert_eq!(replacement.cohesion_strength, 0.25);
        assert_eq!(replacement.separation_strength, 0.5);
        assert_eq!(replacement.alignment_strength, 0.75);
        assert_eq!(replacement.attraction_strength, 0.0);
    }

    #[test]
    fn test_cohesion_only_flock_contracts_toward_centroid() {
        let extent = Vector2D::new(200.0, 200.0);
        let positions = [
            Vector2D::new(90.0, 90.0),
            Vector2D::new(110.0, 90.0),
            Vector2D::new(100.0, 110.0),
        ];
        let centroid = (positions[0] + positions[1] + positions[2]) / 3.0;
        let boids = positions
            .iter()
            .map(|&p| Boid::new(p, Vector2D::zero(), 0.002, 0.0, 0.0, 0.0, extent))
            .collect();
        let mut flock = FlockStd::new(boids, Boundary::Reflective, extent);

        let mean_distance = |flock: &FlockStd| {
            flock
                .boids
                .iter()
                .map(|b| b.position.distance(&centroid))
                .sum::<f32>()
                / flock.boids.len() as f32
        };

        let mut previous = mean_distance(&flock);
        for _ in 0..10 {
            assert_eq!(flock.tick(centroid), 0);
            let current = mean_distance(&flock);
            assert!(current < previous);
            previous = current;
        }
    }

    #[test]
    fn test_heapless_flock_tick() {
        let extent = Vector2D::new(50.0, 50.0);
        let mut flock: Flock<4> = Flock::new(extent);
        for &p in &[Vector2D::new(10.0, 10.0), Vector2D::new(40.0, 40.0)] {
            flock
                .add_boid(Boid::new(p, Vector2D::new(1.0, 1.0), 1.0, 1.0, 1.0, 0.0, extent))
                .ok()
                .unwrap();
        }

        flock.tick(Vector2D::new(25.0, 25.0));

        assert_eq!(flock.boids.len(), 2);
        for boid in &flock.boids {
            assert!(boid.position.x >= 0.0 && boid.position.x <= extent.x);
            assert!(boid.position.y >= 0.0 && boid.position.y <= extent.y);
        }
    }
}
