// Shared tuning constants for the page effects.

// Particle field
pub const PARTICLE_TARGET_COUNT: usize = 80;
pub const POINTER_SPAWN_COUNT: usize = 6; // per mousemove event
pub const TOUCH_SPAWN_COUNT: usize = 4; // per touchmove event

pub const PARTICLE_RADIUS_MIN: f64 = 1.0;
pub const PARTICLE_RADIUS_SPAN: f64 = 3.0; // radius in [min, min + span)
pub const PARTICLE_SPEED_SPAN: f64 = 0.6; // per-axis velocity in [-span/2, span/2)
pub const PARTICLE_INITIAL_OPACITY: f64 = 1.0;
pub const PARTICLE_OPACITY_DECAY: f64 = 0.005; // per frame

// Palette: teal and amber, picked 50/50
pub const HUE_TEAL: u16 = 172;
pub const HUE_AMBER: u16 = 43;
pub const PARTICLE_SATURATION_PCT: u8 = 70;
pub const PARTICLE_LIGHTNESS_PCT: u8 = 65;
pub const PARTICLE_GLOW_BLUR: f64 = 12.0;

// Parallax
pub const PARALLAX_SPEED_GEOMETRY: f64 = 0.08;
pub const PARALLAX_SPEED_DEFAULT: f64 = 0.05;

// Reveal-on-view
pub const REVEAL_THRESHOLD: f64 = 0.2;
