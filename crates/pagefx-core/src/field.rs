//! Particle field state shared by the frame loop and the input handlers.
//!
//! The web front-end owns one [`ParticleField`] behind an `Rc<RefCell<_>>`.
//! Input handlers translate browser events into [`FieldInput`] and call
//! [`ParticleField::handle`]; the animation frame calls
//! [`ParticleField::advance`] with a [`ParticleSink`] that draws to the canvas.

use crate::params::FieldParams;
use crate::particle::Particle;
use glam::DVec2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Input events the particle field reacts to.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FieldInput {
    PointerMove { x: f64, y: f64 },
    /// First active touch point, `None` when the event carried no touches.
    TouchMove(Option<(f64, f64)>),
    Resize { width: f64, height: f64 },
}

/// Drawing surface for one frame of particles.
pub trait ParticleSink {
    fn clear(&mut self, width: f64, height: f64);
    fn draw(&mut self, particle: &Particle, glow_blur: f64);
}

/// Per-frame bookkeeping returned by [`ParticleField::advance`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameStats {
    pub drawn: usize,
    pub culled: usize,
    pub replenished: bool,
}

pub struct ParticleField {
    pub particles: Vec<Particle>,
    pub pointer: DVec2,
    pub width: f64,
    pub height: f64,
    params: FieldParams,
    rng: StdRng,
}

impl ParticleField {
    /// Create a field sized to the viewport and seed it with the target
    /// population at random positions.
    pub fn new(params: FieldParams, width: f64, height: f64, seed: u64) -> Self {
        let mut field = Self {
            particles: Vec::with_capacity(params.target_count * 2),
            pointer: DVec2::new(width * 0.5, height * 0.5),
            width,
            height,
            params,
            rng: StdRng::seed_from_u64(seed),
        };
        for _ in 0..field.params.target_count {
            field.spawn_ambient();
        }
        log::debug!(
            "[field] seeded {} particles in {:.0}x{:.0}",
            field.particles.len(),
            width,
            height
        );
        field
    }

    #[inline]
    pub fn params(&self) -> &FieldParams {
        &self.params
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Apply one input event. Returns the number of particles spawned.
    pub fn handle(&mut self, input: FieldInput) -> usize {
        match input {
            FieldInput::PointerMove { x, y } => {
                self.pointer = DVec2::new(x, y);
                self.spawn_burst(self.pointer, self.params.pointer_spawn)
            }
            FieldInput::TouchMove(Some((x, y))) => {
                self.pointer = DVec2::new(x, y);
                self.spawn_burst(self.pointer, self.params.touch_spawn)
            }
            FieldInput::TouchMove(None) => 0,
            FieldInput::Resize { width, height } => {
                self.width = width;
                self.height = height;
                0
            }
        }
    }

    /// Run one animation frame: clear, integrate, cull faded particles, draw
    /// the survivors and top the population up by one ambient particle.
    pub fn advance<S: ParticleSink + ?Sized>(&mut self, sink: &mut S) -> FrameStats {
        sink.clear(self.width, self.height);
        let decay = self.params.opacity_decay;
        let glow = self.params.glow_blur;
        let before = self.particles.len();
        self.particles.retain_mut(|p| {
            let alive = p.step(decay);
            if alive {
                sink.draw(p, glow);
            }
            alive
        });
        let drawn = self.particles.len();
        let replenished = drawn < self.params.target_count;
        if replenished {
            self.spawn_ambient();
        }
        FrameStats {
            drawn,
            culled: before - drawn,
            replenished,
        }
    }

    fn spawn_burst(&mut self, at: DVec2, count: usize) -> usize {
        for _ in 0..count {
            let p = Particle::spawn(at, &self.params, &mut self.rng);
            self.particles.push(p);
        }
        count
    }

    fn spawn_ambient(&mut self) {
        let at = DVec2::new(
            self.rng.gen::<f64>() * self.width,
            self.rng.gen::<f64>() * self.height,
        );
        let p = Particle::spawn(at, &self.params, &mut self.rng);
        self.particles.push(p);
    }
}
