//! Frame clock for the Tessera engine
//!
//! Tracks scaled frame delta, total elapsed time and the fixed-timestep accumulator
//! that decides how many fixed steps a frame has to run.

use serde::{Deserialize, Serialize};

/// Configuration for game time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimeConfig {
    /// How many in-game seconds pass per real second
    pub time_scale: f32,
    /// Whether to pause when window loses focus
    pub pause_on_unfocus: bool,
    /// Fixed timestep for the step phase (in seconds)
    pub fixed_timestep: f32,
    /// Maximum delta time to prevent spiral of death
    pub max_delta_time: f32,
    /// Upper bound on fixed steps run for a single frame
    pub max_steps_per_frame: u32,
}

impl Default for TimeConfig {
    fn default() -> Self {
        Self {
            time_scale: 1.0,
            pause_on_unfocus: true,
            fixed_timestep: 1.0 / 60.0,
            max_delta_time: 0.25,
            max_steps_per_frame: 8,
        }
    }
}

/// Game time tracking
#[derive(Debug, Clone, Default)]
pub struct GameTime {
    /// Configuration
    pub config: TimeConfig,
    /// Time since start in seconds
    pub total_time: f64,
    /// Delta time for this frame (clamped and scaled)
    pub delta_time: f32,
    /// Clamped but unscaled delta time
    pub unscaled_delta_time: f32,
    /// Frame counter
    pub frame_count: u64,
    /// Whether the clock is paused
    pub paused: bool,
    fixed_accumulator: f32,
}

impl GameTime {
    /// Create a new game time with custom config
    pub fn new(config: TimeConfig) -> Self {
        Self {
            config,
            ..Default::default()
        }
    }

    /// Update the game time with the raw delta from the previous frame
    pub fn update(&mut self, raw_delta: f32) {
        // `max` discards NaN, so a bad config or delta degrades to a zero-length frame.
        let max_delta = self.config.max_delta_time.max(0.0);
        self.unscaled_delta_time = raw_delta.max(0.0).min(max_delta);
        self.frame_count += 1;

        if self.paused {
            self.delta_time = 0.0;
            return;
        }

        self.delta_time = self.unscaled_delta_time * self.config.time_scale.max(0.0);
        self.total_time += self.delta_time as f64;
        self.fixed_accumulator += self.delta_time;
    }

    /// Drain the accumulator and return the number of fixed steps to run this frame.
    ///
    /// At most `max_steps_per_frame` steps are returned; any backlog beyond that is dropped
    /// so a long stall does not snowball into ever longer frames.
    pub fn fixed_steps(&mut self) -> u32 {
        let step = self.config.fixed_timestep;
        if !(step > 0.0 && step.is_finite()) {
            return 0;
        }
        if !self.fixed_accumulator.is_finite() {
            self.fixed_accumulator = 0.0;
            return 0;
        }

        let available = (self.fixed_accumulator / step).floor();
        let limit = self.config.max_steps_per_frame;
        if available > limit as f32 {
            tracing::warn!(
                "dropping {:.0} fixed steps (limit {} per frame)",
                available - limit as f32,
                limit
            );
            self.fixed_accumulator %= step;
            return limit;
        }

        let steps = available as u32;
        self.fixed_accumulator = (self.fixed_accumulator - steps as f32 * step).max(0.0);
        steps
    }

    /// Get the interpolation factor for rendering between fixed steps
    pub fn fixed_interpolation(&self) -> f32 {
        let step = self.config.fixed_timestep;
        if !(step > 0.0 && step.is_finite()) {
            return 0.0;
        }
        self.fixed_accumulator / step
    }

    /// Pause the clock
    pub fn pause(&mut self) {
        self.paused = true;
    }

    /// Resume the clock
    pub fn resume(&mut self) {
        self.paused = false;
    }

    /// Toggle pause state
    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
    }

    /// Set the time scale (0.0 = frozen, 1.0 = normal, 2.0 = double speed)
    pub fn set_time_scale(&mut self, scale: f32) {
        self.config.time_scale = scale.max(0.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quarter_step_clock() -> GameTime {
        GameTime::new(TimeConfig {
            fixed_timestep: 0.25,
            max_delta_time: 1.0,
            ..Default::default()
        })
    }

    #[test]
    fn test_game_time() {
        let mut time = GameTime::default();
        time.update(0.016);

        assert!(time.delta_time > 0.0);
        assert_eq!(time.frame_count, 1);

        time.pause();
        time.update(0.016);
        assert_eq!(time.delta_time, 0.0);
        assert_eq!(time.frame_count, 2);
    }

    #[test]
    fn delta_is_clamped() {
        let mut time = GameTime::default();
        time.update(5.0);
        assert_eq!(time.unscaled_delta_time, 0.25);

        time.update(-1.0);
        assert_eq!(time.delta_time, 0.0);
    }

    #[test]
    fn fixed_steps_drain_accumulator() {
        let mut time = quarter_step_clock();
        time.update(0.5);
        assert_eq!(time.fixed_steps(), 2);
        assert_eq!(time.fixed_steps(), 0);

        time.update(0.125);
        assert_eq!(time.fixed_steps(), 0);
        assert_eq!(time.fixed_interpolation(), 0.5);
        time.update(0.125);
        assert_eq!(time.fixed_steps(), 1);
    }

    #[test]
    fn fixed_steps_are_capped() {
        let mut time = GameTime::new(TimeConfig {
            fixed_timestep: 0.125,
            max_delta_time: 1.0,
            max_steps_per_frame: 3,
            ..Default::default()
        });
        time.update(1.0);
        assert_eq!(time.fixed_steps(), 3);
        assert_eq!(time.fixed_steps(), 0);
    }

    #[test]
    fn bad_delta_limits_do_not_panic() {
        let mut time = GameTime::new(TimeConfig {
            max_delta_time: -1.0,
            ..Default::default()
        });
        time.update(0.016);
        assert_eq!(time.delta_time, 0.0);
        assert_eq!(time.frame_count, 1);

        time.config.max_delta_time = f32::NAN;
        time.update(0.016);
        assert_eq!(time.delta_time, 0.0);

        time.config.max_delta_time = 0.25;
        time.update(f32::NAN);
        assert_eq!(time.delta_time, 0.0);
    }

    #[test]
    fn tiny_fixed_timestep_is_capped() {
        let mut time = GameTime::new(TimeConfig {
            fixed_timestep: 1e-9,
            ..Default::default()
        });
        time.update(0.25);
        assert_eq!(time.fixed_steps(), 8);
        assert!(time.fixed_steps() <= 1);
    }

    #[test]
    fn degenerate_fixed_timestep_runs_no_steps() {
        for step in [0.0, -0.5, f32::NAN, f32::INFINITY] {
            let mut time = GameTime::new(TimeConfig {
                fixed_timestep: step,
                ..Default::default()
            });
            time.update(0.25);
            assert_eq!(time.fixed_steps(), 0);
        }
    }

    #[test]
    fn negative_time_scale_from_config_freezes() {
        let mut time = GameTime::new(TimeConfig {
            time_scale: -2.0,
            fixed_timestep: 0.25,
            ..Default::default()
        });
        time.update(0.25);
        assert_eq!(time.delta_time, 0.0);
        assert_eq!(time.fixed_steps(), 0);
    }

    #[test]
    fn time_scale() {
        let mut time = quarter_step_clock();
        time.set_time_scale(2.0);
        time.update(0.25);
        assert_eq!(time.delta_time, 0.5);
        assert_eq!(time.fixed_steps(), 2);

        time.set_time_scale(-3.0);
        assert_eq!(time.config.time_scale, 0.0);
    }

    #[test]
    fn paused_clock_accumulates_nothing() {
        let mut time = quarter_step_clock();
        time.toggle_pause();
        time.update(0.5);
        assert_eq!(time.fixed_steps(), 0);
        assert_eq!(time.total_time, 0.0);

        time.resume();
        time.update(0.5);
        assert_eq!(time.fixed_steps(), 2);
    }
}
