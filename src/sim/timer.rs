//! Fixed timestep driver
//!
//! Converts variable host frame times into a whole number of simulation
//! steps of constant length.

use crate::consts::{MAX_FRAME_DT, MAX_SUBSTEPS, SIM_DT};

#[derive(Debug, Clone)]
pub struct StepTimer {
    target_dt: f32,
    max_frame_dt: f32,
    max_substeps: u32,
    accumulator: f32,
    frame_count: u64,
}

impl Default for StepTimer {
    fn default() -> Self {
        Self::new(SIM_DT)
    }
}

impl StepTimer {
    pub fn new(target_dt: f32) -> Self {
        debug_assert!(target_dt > 0.0, "step length must be positive");
        Self {
            target_dt,
            max_frame_dt: MAX_FRAME_DT,
            max_substeps: MAX_SUBSTEPS,
            accumulator: 0.0,
            frame_count: 0,
        }
    }

    pub fn target_dt(&self) -> f32 {
        self.target_dt
    }

    /// Steps run since creation
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Unconsumed time carried to the next frame
    pub fn accumulator(&self) -> f32 {
        self.accumulator
    }

    /// Drop any banked time, e.g. after the host was suspended
    pub fn reset(&mut self) {
        self.accumulator = 0.0;
    }

    /// Bank `elapsed` seconds and run `step` once per whole step available.
    ///
    /// Elapsed time is clamped so a long stall cannot trigger a burst of
    /// catch-up steps; at most `max_substeps` run per call. Returns the
    /// number of steps run.
    pub fn tick(&mut self, elapsed: f32, mut step: impl FnMut(f32)) -> u32 {
        self.accumulator += elapsed.clamp(0.0, self.max_frame_dt);

        let mut substeps = 0;
        while self.accumulator >= self.target_dt && substeps < self.max_substeps {
            step(self.target_dt);
            self.accumulator -= self.target_dt;
            self.frame_count += 1;
            substeps += 1;
        }
        substeps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whole_steps_only() {
        let mut timer = StepTimer::default();
        let mut steps = 0;

        assert_eq!(timer.tick(SIM_DT * 0.5, |_| steps += 1), 0);
        assert_eq!(timer.tick(SIM_DT * 0.6, |_| steps += 1), 1);
        assert_eq!(steps, 1);
        assert_eq!(timer.frame_count(), 1);
        assert!(timer.accumulator() < SIM_DT);
    }

    #[test]
    fn test_steps_use_target_dt() {
        let mut timer = StepTimer::new(0.01);
        let mut seen = Vec::new();
        timer.tick(0.035, |dt| seen.push(dt));
        assert_eq!(seen, vec![0.01, 0.01, 0.01]);
    }

    #[test]
    fn test_long_stall_is_clamped() {
        let mut stalled = StepTimer::default();
        let mut capped = StepTimer::default();

        // A 5 s stall counts as a 0.1 s frame
        let run = stalled.tick(5.0, |_| {});
        assert_eq!(run, capped.tick(MAX_FRAME_DT, |_| {}));
        assert!(run <= 6);
        assert_eq!(stalled.accumulator(), capped.accumulator());
    }

    #[test]
    fn test_substeps_are_capped() {
        let mut timer = StepTimer::new(0.001);
        assert_eq!(timer.tick(0.1, |_| {}), MAX_SUBSTEPS);
        assert!(timer.accumulator() > 0.0);

        timer.reset();
        assert_eq!(timer.accumulator(), 0.0);
    }

    #[test]
    fn test_negative_elapsed_is_ignored() {
        let mut timer = StepTimer::default();
        assert_eq!(timer.tick(-1.0, |_| {}), 0);
        assert_eq!(timer.accumulator(), 0.0);
    }
}
