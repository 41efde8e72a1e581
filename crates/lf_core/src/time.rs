use std::time::Instant;

/// Simulation step duration in seconds (~60 Hz).
pub const FIXED_TIMESTEP: f32 = 0.0166666;

const FPS_SAMPLE_COUNT: usize = 60;

pub struct TimeState {
    pub fixed_dt: f64,
    pub max_accumulator: f64,
    accumulator: f64,
    pub total_time: f64,
    pub fixed_step_count: u64,
    pub frame_count: u64,
    pub steps_this_frame: u32,
    pub real_dt: f64,
    last_instant: Instant,
    pub interpolation_alpha: f64,

    fps_samples: [f64; FPS_SAMPLE_COUNT],
    fps_sample_index: usize,
    pub smoothed_fps: f64,
    pub smoothed_frame_time_ms: f64,
}

impl TimeState {
    pub fn new() -> Self {
        Self {
            fixed_dt: FIXED_TIMESTEP as f64,
            max_accumulator: 0.25,
            accumulator: 0.0,
            total_time: 0.0,
            fixed_step_count: 0,
            frame_count: 0,
            steps_this_frame: 0,
            real_dt: 0.0,
            last_instant: Instant::now(),
            interpolation_alpha: 0.0,
            fps_samples: [FIXED_TIMESTEP as f64; FPS_SAMPLE_COUNT],
            fps_sample_index: 0,
            smoothed_fps: 60.0,
            smoothed_frame_time_ms: 16.667,
        }
    }

    pub fn begin_frame(&mut self) {
        let now = Instant::now();
        let real_dt = now.duration_since(self.last_instant).as_secs_f64();
        self.last_instant = now;
        self.accumulate(real_dt);
    }

    /// Feeds one frame's worth of wall-clock time into the accumulator.
    /// Split out of `begin_frame` so the stepper can be driven without a clock.
    pub fn accumulate(&mut self, dt: f64) {
        self.real_dt = dt;

        // Clamp long stalls so catch-up stepping stays bounded.
        if self.real_dt > self.max_accumulator {
            log::warn!(
                "Frame took {:.1}ms, capping accumulator to {}ms",
                self.real_dt * 1000.0,
                self.max_accumulator * 1000.0
            );
            self.real_dt = self.max_accumulator;
        }

        self.accumulator += self.real_dt;
        self.steps_this_frame = 0;
        self.frame_count += 1;

        // FPS smoothing
        self.fps_samples[self.fps_sample_index] = self.real_dt;
        self.fps_sample_index = (self.fps_sample_index + 1) % FPS_SAMPLE_COUNT;
        let avg_dt: f64 = self.fps_samples.iter().sum::<f64>() / FPS_SAMPLE_COUNT as f64;
        self.smoothed_frame_time_ms = avg_dt * 1000.0;
        self.smoothed_fps = if avg_dt > 0.0 { 1.0 / avg_dt } else { 0.0 };
    }

    pub fn should_step(&mut self) -> bool {
        if self.accumulator >= self.fixed_dt {
            self.accumulator -= self.fixed_dt;
            self.total_time += self.fixed_dt;
            self.fixed_step_count += 1;
            self.steps_this_frame += 1;
            true
        } else {
            false
        }
    }

    pub fn end_frame(&mut self) {
        self.interpolation_alpha = self.accumulator / self.fixed_dt;
    }

    pub fn accumulator(&self) -> f64 {
        self.accumulator
    }
}

impl Default for TimeState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn drain(time: &mut TimeState) -> u32 {
        let mut steps = 0;
        while time.should_step() {
            steps += 1;
        }
        steps
    }

    #[test]
    fn sub_step_delta_runs_zero_steps_and_keeps_all_time() {
        let mut time = TimeState::new();
        let dt = time.fixed_dt * 0.6;
        time.accumulate(dt);
        assert_eq!(drain(&mut time), 0);
        assert!((time.accumulator() - dt).abs() < EPS);
    }

    #[test]
    fn whole_steps_plus_remainder_drain_exactly() {
        let mut time = TimeState::new();
        let ft = time.fixed_dt;
        let remainder = ft * 0.25;
        time.accumulate(3.0 * ft + remainder);
        assert_eq!(drain(&mut time), 3);
        assert!((time.accumulator() - remainder).abs() < EPS);
        assert_eq!(time.fixed_step_count, 3);
        assert_eq!(time.steps_this_frame, 3);
    }

    #[test]
    fn leftover_time_carries_into_the_next_frame() {
        let mut time = TimeState::new();
        let ft = time.fixed_dt;

        time.accumulate(0.6 * ft);
        assert_eq!(drain(&mut time), 0);

        time.accumulate(0.6 * ft);
        assert_eq!(drain(&mut time), 1);
        assert!((time.accumulator() - 0.2 * ft).abs() < EPS);
    }

    #[test]
    fn oversized_delta_clamps_to_max_accumulator() {
        let mut time = TimeState::new();
        time.accumulate(10.0);
        assert!((time.accumulator() - time.max_accumulator).abs() < EPS);
        let expected = (time.max_accumulator / time.fixed_dt) as u32;
        assert_eq!(drain(&mut time), expected);
    }

    #[test]
    fn steps_this_frame_resets_on_accumulate() {
        let mut time = TimeState::new();
        time.accumulate(2.5 * time.fixed_dt);
        assert_eq!(drain(&mut time), 2);
        assert_eq!(time.steps_this_frame, 2);

        time.accumulate(0.0);
        assert_eq!(time.steps_this_frame, 0);
        assert_eq!(time.fixed_step_count, 2);
    }

    #[test]
    fn end_frame_alpha_is_the_leftover_fraction() {
        let mut time = TimeState::new();
        time.accumulate(1.5 * time.fixed_dt);
        drain(&mut time);
        time.end_frame();
        assert!((time.interpolation_alpha - 0.5).abs() < 1e-6);
    }
}
