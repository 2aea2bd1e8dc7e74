use crate::{
    config::PlaybackConfig, reconstruct::positions_at, CurveVizError, EpicycleSet, Point, Result,
};

/// Frame emission handed to the renderer: the rotating-vector skeleton and
/// the trajectory traced by its tip so far.
#[derive(Debug, Clone, Copy)]
pub struct RenderedFrame<'a> {
    pub chain: &'a [Point],
    pub trajectory: &'a [Point],
}

/// Frame-driven animation state machine.
///
/// An external fixed-interval scheduler calls [`advance_frame`] once per
/// tick. Pause, speed and trajectory state are explicit fields rather than
/// ambient globals, so transitions are deterministic under test and several
/// controllers can run independently. The controller starts in the playing
/// state and has no terminal state; stopping it is the scheduler's concern.
///
/// [`advance_frame`]: PlaybackController::advance_frame
#[derive(Debug, Clone)]
pub struct PlaybackController {
    epicycles: EpicycleSet,
    time_scale: f64,
    speed_factor: f64,
    paused: bool,
    frame_index: u64,
    chain: Vec<Point>,
    trajectory: Vec<Point>,
}

impl PlaybackController {
    /// Creates a controller with the default playback configuration.
    pub fn new(epicycles: EpicycleSet) -> Self {
        Self::with_config(epicycles, &PlaybackConfig::default())
    }

    pub fn with_config(epicycles: EpicycleSet, config: &PlaybackConfig) -> Self {
        Self {
            epicycles,
            time_scale: config.time_scale(),
            speed_factor: config.initial_speed,
            paused: false,
            frame_index: 0,
            chain: Vec::new(),
            trajectory: Vec::new(),
        }
    }

    /// Returns the epicycle set driving the animation.
    pub fn epicycles(&self) -> &EpicycleSet {
        &self.epicycles
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn speed_factor(&self) -> f64 {
        self.speed_factor
    }

    pub fn frame_index(&self) -> u64 {
        self.frame_index
    }

    /// Returns the trajectory traced so far.
    pub fn trajectory(&self) -> &[Point] {
        &self.trajectory
    }

    /// Switches between playing and paused; returns the new paused flag.
    pub fn toggle_pause(&mut self) -> bool {
        self.paused = !self.paused;
        self.paused
    }

    /// Advances one scheduler tick.
    ///
    /// While playing, this steps the frame counter, reconstructs the chain
    /// at `t = frame_index · time_scale · speed_factor` and appends the
    /// chain tip to the trajectory. While paused it is a no-op that emits
    /// the last rendered frame unchanged, so a paused animation shows a
    /// frozen picture.
    pub fn advance_frame(&mut self) -> RenderedFrame<'_> {
        if !self.paused {
            self.frame_index += 1;
            let t = self.frame_index as f64 * self.time_scale * self.speed_factor;
            self.chain = positions_at(&self.epicycles, t);
            if let Some(&tip) = self.chain.last() {
                self.trajectory.push(tip);
            }
        }
        self.rendered()
    }

    /// Applies a new speed factor.
    ///
    /// The factor is validated before any state changes; a rejected request
    /// leaves the trajectory intact. A changed factor empties the
    /// trajectory, and the frame emitted for this transition carries the
    /// frozen chain with that empty trajectory so the drawn trail resets
    /// instead of jumping. Re-applying the current factor changes nothing.
    pub fn set_speed(&mut self, speed_factor: f64) -> Result<RenderedFrame<'_>> {
        if !speed_factor.is_finite() || speed_factor <= 0.0 {
            return Err(CurveVizError::InvalidSpeed(speed_factor));
        }
        if speed_factor != self.speed_factor {
            self.speed_factor = speed_factor;
            self.trajectory.clear();
        }
        Ok(self.rendered())
    }

    /// Empties the traced trajectory, independent of pause or speed state.
    pub fn clear_trajectory(&mut self) {
        self.trajectory.clear();
    }

    fn rendered(&self) -> RenderedFrame<'_> {
        RenderedFrame {
            chain: &self.chain,
            trajectory: &self.trajectory,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{store, Decomposer, Epicycle};
    use approx::assert_relative_eq;

    fn unit_circle() -> EpicycleSet {
        EpicycleSet::from(vec![Epicycle {
            frequency: 1,
            radius: 1.0,
            phase: 0.0,
        }])
    }

    fn snapshot(frame: RenderedFrame<'_>) -> (Vec<Point>, Vec<Point>) {
        (frame.chain.to_vec(), frame.trajectory.to_vec())
    }

    #[test]
    fn trajectory_grows_by_one_point_per_frame() {
        let mut controller = PlaybackController::new(unit_circle());

        for expected in 1..=10 {
            let frame = controller.advance_frame();
            assert_eq!(frame.trajectory.len(), expected);
        }
        assert_eq!(controller.frame_index(), 10);
    }

    #[test]
    fn changing_speed_clears_the_trajectory_on_that_frame() {
        let mut controller = PlaybackController::new(unit_circle());
        for _ in 0..10 {
            controller.advance_frame();
        }
        let chain_before = controller.advance_frame().chain.to_vec();

        let frame = controller.set_speed(2.0).unwrap();
        assert!(frame.trajectory.is_empty());
        assert_eq!(frame.chain, chain_before.as_slice());
        assert_relative_eq!(controller.speed_factor(), 2.0);
    }

    #[test]
    fn reapplying_the_current_speed_keeps_the_trajectory() {
        let mut controller = PlaybackController::new(unit_circle());
        controller.advance_frame();
        controller.advance_frame();

        let frame = controller.set_speed(controller.speed_factor()).unwrap();
        assert_eq!(frame.trajectory.len(), 2);
    }

    #[test]
    fn rejected_speed_changes_leave_state_untouched() {
        let mut controller = PlaybackController::new(unit_circle());
        controller.advance_frame();
        let speed_before = controller.speed_factor();

        for bad in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let err = controller.set_speed(bad).unwrap_err();
            assert!(matches!(err, CurveVizError::InvalidSpeed(_)));
        }

        assert_eq!(controller.trajectory().len(), 1);
        assert_relative_eq!(controller.speed_factor(), speed_before);
    }

    #[test]
    fn paused_frames_are_idempotent() {
        let mut controller = PlaybackController::new(unit_circle());
        for _ in 0..3 {
            controller.advance_frame();
        }

        assert!(controller.toggle_pause());
        let first = snapshot(controller.advance_frame());
        let second = snapshot(controller.advance_frame());

        assert_eq!(first, second);
        assert_eq!(controller.frame_index(), 3);
        assert_eq!(first.1.len(), 3);
    }

    #[test]
    fn resuming_continues_from_the_frozen_frame() {
        let mut controller = PlaybackController::new(unit_circle());
        controller.advance_frame();
        controller.toggle_pause();
        controller.advance_frame();

        assert!(!controller.toggle_pause());
        controller.advance_frame();
        assert_eq!(controller.frame_index(), 2);
        assert_eq!(controller.trajectory().len(), 2);
    }

    #[test]
    fn clear_empties_the_trajectory_even_while_paused() {
        let mut controller = PlaybackController::new(unit_circle());
        controller.advance_frame();
        controller.toggle_pause();

        controller.clear_trajectory();
        let frame = controller.advance_frame();
        assert!(frame.trajectory.is_empty());
        assert!(!frame.chain.is_empty());
    }

    #[test]
    fn full_sweep_returns_to_the_first_sample() {
        // Decompose, persist, reload, then play one full parameter sweep.
        let square = vec![
            Point::new(1.0, 0.0),
            Point::new(0.0, 1.0),
            Point::new(-1.0, 0.0),
            Point::new(0.0, -1.0),
        ];
        let set = Decomposer::new().decompose(&square).unwrap();
        let set = store::deserialize(&store::serialize(&set)).unwrap();

        let config = PlaybackConfig::default();
        let mut controller = PlaybackController::with_config(set, &config);
        controller.set_speed(1.0).unwrap();

        let mut tip = None;
        for _ in 0..config.frames_per_sweep {
            tip = controller.advance_frame().chain.last().copied();
        }

        let tip = tip.unwrap();
        assert_relative_eq!(tip.x, 1.0, epsilon = 1e-9);
        assert_relative_eq!(tip.y, 0.0, epsilon = 1e-9);
        assert_eq!(
            controller.trajectory().len(),
            config.frames_per_sweep as usize
        );
    }
}
