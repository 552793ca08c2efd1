//! Time-based eased scrolling towards an in-page target.

/// Quadratic ease-in-out over `duration`.
///
/// `t` is elapsed time, `start` the initial value and `distance` the total
/// change, the classic Penner signature.
pub fn ease_in_out_quad(t: f64, start: f64, distance: f64, duration: f64) -> f64 {
    let mut t = t / (duration / 2.0);
    if t < 1.0 {
        return distance / 2.0 * t * t + start;
    }
    t -= 1.0;
    -distance / 2.0 * (t * (t - 2.0) - 1.0) + start
}

/// Where the page should scroll to so `target_top` lands just below the
/// fixed header.
pub fn destination_for(target_top: f64, header_height: f64, gap: f64) -> f64 {
    (target_top - header_height - gap).max(0.0)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AnimationStep {
    /// Scroll here and wait for the next frame.
    InFlight(f64),
    /// Scroll here and stop; always the exact destination.
    Finished(f64),
}

/// A single run from `start` to `start + distance`.
#[derive(Debug, Clone, PartialEq)]
pub struct ScrollAnimation {
    start: f64,
    distance: f64,
    duration: f64,
    started_at: Option<f64>,
}

impl ScrollAnimation {
    pub fn new(start: f64, destination: f64, duration: f64) -> Self {
        Self {
            start,
            distance: destination - start,
            duration,
            started_at: None,
        }
    }

    pub fn destination(&self) -> f64 {
        self.start + self.distance
    }

    /// Eased position `elapsed` ms into the run, clamped to the run's span.
    pub fn position_at(&self, elapsed: f64) -> f64 {
        if self.duration <= 0.0 {
            return self.destination();
        }
        let elapsed = elapsed.clamp(0.0, self.duration);
        ease_in_out_quad(elapsed, self.start, self.distance, self.duration)
    }

    /// Advances to a frame timestamp. The first call pins the start time.
    pub fn step(&mut self, timestamp: f64) -> AnimationStep {
        let started_at = *self.started_at.get_or_insert(timestamp);
        let elapsed = timestamp - started_at;
        if elapsed >= self.duration {
            AnimationStep::Finished(self.destination())
        } else {
            AnimationStep::InFlight(self.position_at(elapsed))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ease_hits_start_midpoint_and_end() {
        assert_eq!(ease_in_out_quad(0.0, 0.0, 1000.0, 1200.0), 0.0);
        assert_eq!(ease_in_out_quad(600.0, 0.0, 1000.0, 1200.0), 500.0);
        assert_eq!(ease_in_out_quad(1200.0, 0.0, 1000.0, 1200.0), 1000.0);
    }

    #[test]
    fn ease_is_symmetric_around_midpoint() {
        let early = ease_in_out_quad(300.0, 0.0, 1000.0, 1200.0);
        let late = ease_in_out_quad(900.0, 0.0, 1000.0, 1200.0);
        assert!((early + late - 1000.0).abs() < 1e-9);
        assert_eq!(early, 125.0);
    }

    #[test]
    fn ease_handles_upward_scrolls() {
        assert_eq!(ease_in_out_quad(600.0, 800.0, -400.0, 1200.0), 600.0);
    }

    #[test]
    fn destination_sits_below_header() {
        assert_eq!(destination_for(1500.0, 80.0, 20.0), 1400.0);
        assert_eq!(destination_for(50.0, 80.0, 20.0), 0.0);
    }

    #[test]
    fn first_frame_is_start_position() {
        let mut run = ScrollAnimation::new(200.0, 1200.0, 1200.0);
        assert_eq!(run.step(5_000.0), AnimationStep::InFlight(200.0));
        assert_eq!(run.step(5_600.0), AnimationStep::InFlight(700.0));
    }

    #[test]
    fn final_frame_snaps_to_destination() {
        let mut run = ScrollAnimation::new(0.0, 1000.0, 1200.0);
        run.step(0.0);
        run.step(1_190.0);
        assert_eq!(run.step(1_233.7), AnimationStep::Finished(1000.0));
    }

    #[test]
    fn position_is_monotonic_for_downward_runs() {
        let run = ScrollAnimation::new(0.0, 1000.0, 1200.0);
        let mut last = run.position_at(0.0);
        for ms in (16..=1200).step_by(16) {
            let next = run.position_at(ms as f64);
            assert!(next >= last);
            last = next;
        }
        assert_eq!(run.position_at(5_000.0), 1000.0);
    }

    #[test]
    fn zero_duration_jumps() {
        let mut run = ScrollAnimation::new(10.0, 90.0, 0.0);
        assert_eq!(run.step(1.0), AnimationStep::Finished(90.0));
    }
}
