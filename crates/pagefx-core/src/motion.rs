/// User's motion preference as reported by `prefers-reduced-motion`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MotionPreference {
    Full,
    Reduced,
}

impl MotionPreference {
    #[inline]
    pub fn from_reduce_matches(matches: bool) -> Self {
        if matches {
            MotionPreference::Reduced
        } else {
            MotionPreference::Full
        }
    }

    /// Particle field and parallax only run with full motion.
    #[inline]
    pub fn animations_enabled(self) -> bool {
        self == MotionPreference::Full
    }
}

/// Page side of the motion-gated effects.
pub trait MotionHost {
    /// Drop the particle canvas from the page.
    fn remove_canvas(&mut self);
    fn start_particles(&mut self);
    fn start_parallax(&mut self);
}

/// Start the particle field and parallax loops, or with reduced motion remove
/// the canvas and start nothing.
pub fn install_motion_effects<H: MotionHost + ?Sized>(motion: MotionPreference, host: &mut H) {
    if motion.animations_enabled() {
        host.start_particles();
        host.start_parallax();
    } else {
        host.remove_canvas();
    }
}
