/// Linear opacity tween sampled once per frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Fade {
    start: f32,
    target: f32,
    duration: f32,
    elapsed: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FadeStep {
    pub alpha: f32,
    pub finished: bool,
}

impl Fade {
    pub fn new(start: f32, target: f32, duration: f32) -> Self {
        Self {
            start,
            target,
            duration,
            elapsed: 0.0,
        }
    }

    pub fn target(&self) -> f32 {
        self.target
    }

    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }

    /// Advance by one frame. The final step always lands exactly on `target`.
    pub fn advance(&mut self, delta: f32) -> FadeStep {
        self.elapsed += delta;
        if self.is_finished() {
            return FadeStep {
                alpha: self.target,
                finished: true,
            };
        }

        let t = (self.elapsed / self.duration).clamp(0.0, 1.0);
        FadeStep {
            alpha: self.start + (self.target - self.start) * t,
            finished: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interpolates_linearly() {
        let mut fade = Fade::new(0.0, 1.0, 1.0);
        let step = fade.advance(0.25);
        assert!((step.alpha - 0.25).abs() < 1e-6);
        assert!(!step.finished);
        let step = fade.advance(0.25);
        assert!((step.alpha - 0.5).abs() < 1e-6);
    }

    #[test]
    fn snaps_to_target_despite_drift() {
        // Summed frame deltas rarely land exactly on the duration; the last frame still hits the target.
        let mut fade = Fade::new(1.0, 0.2, 0.3);
        let mut last = fade.advance(0.1);
        while !last.finished {
            last = fade.advance(0.1);
        }
        assert_eq!(last.alpha, 0.2);
        assert!(fade.is_finished());
    }

    #[test]
    fn overshooting_frame_finishes_at_target() {
        let mut fade = Fade::new(0.0, 0.8, 0.5);
        let step = fade.advance(2.0);
        assert_eq!(step, FadeStep { alpha: 0.8, finished: true });
    }

    #[test]
    fn zero_duration_completes_on_first_frame() {
        let mut fade = Fade::new(0.3, 0.0, 0.0);
        assert_eq!(fade.advance(0.0), FadeStep { alpha: 0.0, finished: true });
    }

    #[test]
    fn fading_up_and_down_is_symmetric() {
        let mut down = Fade::new(1.0, 0.0, 2.0);
        let mut up = Fade::new(0.0, 1.0, 2.0);
        let d = down.advance(0.5).alpha;
        let u = up.advance(0.5).alpha;
        assert!((d + u - 1.0).abs() < 1e-6);
        assert_eq!(up.target(), 1.0);
    }
}
