use crate::constants::*;
use crate::params::FieldParams;
use glam::DVec2;
use rand::Rng;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Hue {
    Teal,
    Amber,
}

impl Hue {
    #[inline]
    pub fn degrees(self) -> u16 {
        match self {
            Hue::Teal => HUE_TEAL,
            Hue::Amber => HUE_AMBER,
        }
    }

    pub fn random<R: Rng>(rng: &mut R) -> Self {
        if rng.gen_bool(0.5) {
            Hue::Teal
        } else {
            Hue::Amber
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub pos: DVec2,
    pub vel: DVec2,
    pub radius: f64,
    pub opacity: f64,
    pub hue: Hue,
}

impl Particle {
    /// Spawn a particle at `pos` with random radius, drift and hue.
    pub fn spawn<R: Rng>(pos: DVec2, params: &FieldParams, rng: &mut R) -> Self {
        let half = params.speed_span * 0.5;
        Self {
            pos,
            vel: DVec2::new(
                rng.gen::<f64>() * params.speed_span - half,
                rng.gen::<f64>() * params.speed_span - half,
            ),
            radius: params.radius_min + rng.gen::<f64>() * params.radius_span,
            opacity: PARTICLE_INITIAL_OPACITY,
            hue: Hue::random(rng),
        }
    }

    /// Integrate one frame. Returns `false` once the particle has faded out.
    #[inline]
    pub fn step(&mut self, opacity_decay: f64) -> bool {
        self.pos += self.vel;
        self.opacity -= opacity_decay;
        self.opacity > 0.0
    }

    /// CSS color used for both fill and glow.
    pub fn css_color(&self) -> String {
        format!(
            "hsla({}, {}%, {}%, {})",
            self.hue.degrees(),
            PARTICLE_SATURATION_PCT,
            PARTICLE_LIGHTNESS_PCT,
            self.opacity
        )
    }
}
