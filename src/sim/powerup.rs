//! Falling pickups spawned by destroyed chunks

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::hooks::{BallSpeedControl, BarControl, PowerupSpawner};
use super::palette::{self, Rgba};
use super::transform::Transform2D;
use crate::consts::*;
use crate::tuning::Tuning;

/// Effect a powerup applies when caught
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PowerupKind {
    FasterBall,
    SlowerBall,
    SlowerBar,
    FasterBar,
}

/// Spawn table, picked uniformly
const POWERUP_TABLE: [(PowerupKind, Rgba); 4] = [
    (PowerupKind::FasterBall, palette::MEDIUM_PURPLE),
    (PowerupKind::SlowerBall, palette::MISTY_ROSE),
    (PowerupKind::SlowerBar, palette::POWDER_BLUE),
    (PowerupKind::FasterBar, palette::PURPLE),
];

/// Source of uniform integers for spawn rolls
pub trait RandomSource: std::fmt::Debug {
    /// Uniform value in `0..n`. `n` is never zero.
    fn next_below(&mut self, n: u32) -> u32;
}

impl RandomSource for Pcg32 {
    fn next_below(&mut self, n: u32) -> u32 {
        self.random_range(0..n)
    }
}

/// A falling pickup. `activated` marks it consumed (caught or expired).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Powerup {
    transform: Transform2D,
    radius: f32,
    velocity: Vec2,
    color: Rgba,
    kind: PowerupKind,
    activated: bool,
}

impl Powerup {
    pub fn new(position: Vec2, velocity: Vec2, kind: PowerupKind, color: Rgba) -> Self {
        Self {
            transform: Transform2D::at(position),
            radius: POWERUP_RADIUS,
            velocity,
            color,
            kind,
            activated: false,
        }
    }

    pub fn transform(&self) -> &Transform2D {
        &self.transform
    }

    pub fn position(&self) -> Vec2 {
        self.transform.position
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    pub fn color(&self) -> Rgba {
        self.color
    }

    pub fn kind(&self) -> PowerupKind {
        self.kind
    }

    pub fn is_activated(&self) -> bool {
        self.activated
    }

    pub fn update(&mut self, dt: f32) {
        self.transform.translate(self.velocity * dt);
    }
}

/// Owns live powerups in spawn order
#[derive(Debug)]
pub struct PowerupManager {
    powerups: Vec<Powerup>,
    rng: Box<dyn RandomSource>,
    fall_speed: f32,
    spawn_one_in: u32,
}

impl PowerupManager {
    pub fn new(tuning: &Tuning, rng: Box<dyn RandomSource>) -> Self {
        Self {
            powerups: Vec::new(),
            rng,
            fall_speed: tuning.powerup_fall_speed,
            spawn_one_in: tuning.powerup_spawn_one_in.max(1),
        }
    }

    pub fn powerups(&self) -> &[Powerup] {
        &self.powerups
    }

    pub fn len(&self) -> usize {
        self.powerups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.powerups.is_empty()
    }

    /// Place a powerup of a random kind at `origin`
    pub fn spawn_powerup(&mut self, origin: Vec2) {
        let pick = self.rng.next_below(POWERUP_TABLE.len() as u32) as usize;
        let (kind, color) = POWERUP_TABLE[pick % POWERUP_TABLE.len()];
        self.powerups
            .push(Powerup::new(origin, Vec2::new(0.0, -self.fall_speed), kind, color));
        log::debug!("Spawned {:?} at ({}, {})", kind, origin.x, origin.y);
    }

    /// Advance, catch and expire powerups, then drop the consumed ones
    pub fn update(&mut self, dt: f32, bar: &mut dyn BarControl, ball: &mut dyn BallSpeedControl) {
        for powerup in self.powerups.iter_mut().filter(|p| !p.activated) {
            powerup.update(dt);
        }

        self.check_bar_collision(bar, ball);
        self.check_expired();

        self.powerups.retain(|p| !p.activated);
    }

    fn check_bar_collision(&mut self, bar: &mut dyn BarControl, ball: &mut dyn BallSpeedControl) {
        let upper = bar.bar_upper_y();

        for powerup in self.powerups.iter_mut().filter(|p| !p.activated) {
            let position = powerup.position();
            if position.y + POWERUP_HEIGHT > upper {
                continue;
            }
            if !bar.handle_powerup_collision(position, POWERUP_WIDTH) {
                continue;
            }

            powerup.activated = true;
            log::debug!("Caught {:?} at x={}", powerup.kind, position.x);

            match powerup.kind {
                PowerupKind::FasterBar => bar.increase_bar_velocity(),
                PowerupKind::SlowerBar => bar.decrease_bar_velocity(),
                PowerupKind::FasterBall => ball.increase_ball_velocity(),
                PowerupKind::SlowerBall => ball.decrease_ball_velocity(),
            }
        }
    }

    fn check_expired(&mut self) {
        for powerup in self.powerups.iter_mut().filter(|p| !p.activated) {
            if powerup.position().y <= POWERUP_EXPIRY_Y {
                powerup.activated = true;
                log::debug!("{:?} expired", powerup.kind);
            }
        }
    }
}

impl PowerupSpawner for PowerupManager {
    fn powerup_spawn_check(&mut self, origin: Vec2) {
        if self.rng.next_below(self.spawn_one_in) == 0 {
            self.spawn_powerup(origin);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    /// Replays a fixed sequence of rolls
    #[derive(Debug)]
    struct Sequence {
        values: Vec<u32>,
        next: usize,
    }

    impl Sequence {
        fn boxed(values: &[u32]) -> Box<dyn RandomSource> {
            Box::new(Self {
                values: values.to_vec(),
                next: 0,
            })
        }
    }

    impl RandomSource for Sequence {
        fn next_below(&mut self, n: u32) -> u32 {
            let value = self.values[self.next % self.values.len()];
            self.next += 1;
            value % n
        }
    }

    /// Paddle stub: catches anything within its x range, counts effects
    struct StubBar {
        x: f32,
        faster: u32,
        slower: u32,
    }

    impl StubBar {
        fn at(x: f32) -> Self {
            Self {
                x,
                faster: 0,
                slower: 0,
            }
        }
    }

    impl BarControl for StubBar {
        fn handle_powerup_collision(&self, position: Vec2, width: f32) -> bool {
            let center = position.x + width / 2.0;
            (self.x - BAR_HALF_WIDTH..=self.x + BAR_HALF_WIDTH).contains(&center)
        }
        fn bar_upper_y(&self) -> f32 {
            BAR_Y
        }
        fn increase_bar_velocity(&mut self) {
            self.faster += 1;
        }
        fn decrease_bar_velocity(&mut self) {
            self.slower += 1;
        }
    }

    #[derive(Default)]
    struct StubBall {
        faster: u32,
        slower: u32,
    }

    impl BallSpeedControl for StubBall {
        fn increase_ball_velocity(&mut self) {
            self.faster += 1;
        }
        fn decrease_ball_velocity(&mut self) {
            self.slower += 1;
        }
    }

    fn manager(rolls: &[u32]) -> PowerupManager {
        PowerupManager::new(&Tuning::default(), Sequence::boxed(rolls))
    }

    #[test]
    fn test_spawn_gate_is_one_in_four() {
        // Gate roll, then kind roll
        let mut powerups = manager(&[1, 0, 3, 2]);

        powerups.powerup_spawn_check(Vec2::new(0.0, 82.0));
        assert!(powerups.is_empty());

        powerups.powerup_spawn_check(Vec2::new(0.0, 82.0));
        assert_eq!(powerups.len(), 1);
        let spawned = &powerups.powerups()[0];
        assert_eq!(spawned.kind(), PowerupKind::FasterBar);
        assert_eq!(spawned.color(), palette::PURPLE);
        assert_eq!(spawned.velocity(), Vec2::new(0.0, -10.0));
        assert!(!spawned.is_activated());
    }

    #[test]
    fn test_spawn_picks_from_table() {
        let mut powerups = manager(&[0, 1]);
        powerups.spawn_powerup(Vec2::new(9.0, 85.0));
        powerups.spawn_powerup(Vec2::new(9.0, 85.0));

        let kinds: Vec<_> = powerups.powerups().iter().map(Powerup::kind).collect();
        assert_eq!(kinds, vec![PowerupKind::FasterBall, PowerupKind::SlowerBall]);
        assert_eq!(powerups.powerups()[1].color(), palette::MISTY_ROSE);
    }

    #[test]
    fn test_caught_powerup_dispatches_once() {
        let mut powerups = manager(&[2]);
        // SlowerBar just above the catch line
        powerups.spawn_powerup(Vec2::new(-1.5, 13.1));

        let mut bar = StubBar::at(0.0);
        let mut ball = StubBall::default();

        powerups.update(1.0 / 60.0, &mut bar, &mut ball);
        assert_eq!(bar.slower, 1);
        assert!(powerups.is_empty());

        powerups.update(1.0 / 60.0, &mut bar, &mut ball);
        assert_eq!(bar.slower, 1);
        assert_eq!(bar.faster + ball.faster + ball.slower, 0);
    }

    #[test]
    fn test_each_kind_hits_its_target() {
        let mut bar = StubBar::at(0.0);
        let mut ball = StubBall::default();

        for roll in 0..4 {
            let mut powerups = manager(&[roll]);
            powerups.spawn_powerup(Vec2::new(-1.5, 12.0));
            powerups.update(0.0, &mut bar, &mut ball);
        }

        assert_eq!((ball.faster, ball.slower), (1, 1));
        assert_eq!((bar.faster, bar.slower), (1, 1));
    }

    #[test]
    fn test_missed_powerup_expires_without_effect() {
        let mut powerups = manager(&[0]);
        powerups.spawn_powerup(Vec2::new(30.0, 82.0));

        let mut bar = StubBar::at(-40.0);
        let mut ball = StubBall::default();

        // 82 units at 10/s
        for _ in 0..(9 * 60) {
            powerups.update(1.0 / 60.0, &mut bar, &mut ball);
        }

        assert!(powerups.is_empty());
        assert_eq!(ball.faster + ball.slower + bar.faster + bar.slower, 0);
    }

    #[test]
    fn test_high_powerup_is_not_caught() {
        let mut powerups = manager(&[0]);
        powerups.spawn_powerup(Vec2::new(-1.5, 40.0));

        let mut bar = StubBar::at(0.0);
        let mut ball = StubBall::default();
        powerups.update(1.0 / 60.0, &mut bar, &mut ball);

        assert_eq!(powerups.len(), 1);
        assert_eq!(ball.faster, 0);
    }

    #[test]
    fn test_seeded_rng_is_reproducible() {
        let rolls = |seed| {
            let mut rng = Pcg32::seed_from_u64(seed);
            (0..32).map(|_| rng.next_below(4)).collect::<Vec<_>>()
        };
        assert_eq!(rolls(7), rolls(7));
        assert!(rolls(7).iter().all(|&r| r < 4));
    }
}
