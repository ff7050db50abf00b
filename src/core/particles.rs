use super::constants::*;
use super::surface::{Rgba, Surface};
use glam::DVec2;
use rand::prelude::*;
use std::f64::consts::TAU;

/// Which of the two accent hues a particle is drawn in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Accent {
    Primary,
    Secondary,
}

impl Accent {
    /// Fill color of the particle's core disc.
    pub fn core(self) -> Rgba {
        match self {
            Accent::Primary => Rgba::new(PRIMARY_RGB, PRIMARY_CORE_ALPHA),
            Accent::Secondary => Rgba::new(SECONDARY_RGB, SECONDARY_CORE_ALPHA),
        }
    }

    /// Fill color of the halo drawn around the core disc.
    pub fn glow(self) -> Rgba {
        match self {
            Accent::Primary => Rgba::new(PRIMARY_RGB, PRIMARY_GLOW_ALPHA),
            Accent::Secondary => Rgba::new(SECONDARY_RGB, SECONDARY_GLOW_ALPHA),
        }
    }
}

/// Tuning for a [`ParticleField`].
///
/// Defaults reproduce the page background. `seed` makes population
/// deterministic; `max_particles` caps the O(n²) link pass on very large
/// surfaces and is unset by default.
#[derive(Clone, Debug)]
pub struct FieldConfig {
    pub area_per_particle: f64,
    pub max_speed: f64,
    pub radius_range: (f64, f64),
    pub link_distance: f64,
    pub link_max_alpha: f64,
    pub link_width: f64,
    pub clock_step: f64,
    pub pointer_radius: f64,
    pub pointer_pull: f64,
    pub max_particles: Option<usize>,
    pub seed: Option<u64>,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            area_per_particle: AREA_PER_PARTICLE,
            max_speed: MAX_INITIAL_SPEED,
            radius_range: (RADIUS_MIN, RADIUS_MAX),
            link_distance: LINK_DISTANCE,
            link_max_alpha: LINK_MAX_ALPHA,
            link_width: LINK_WIDTH,
            clock_step: CLOCK_STEP,
            pointer_radius: POINTER_RADIUS,
            pointer_pull: POINTER_PULL,
            max_particles: None,
            seed: None,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Particle {
    pub pos: DVec2,
    pub vel: DVec2,
    pub radius: f64,
    pub color: Accent,
    pub phase: f64,
}

impl Particle {
    fn random(rng: &mut StdRng, size: DVec2, config: &FieldConfig) -> Self {
        let s = config.max_speed;
        let (r_min, r_max) = config.radius_range;
        Self {
            pos: DVec2::new(rng.gen::<f64>() * size.x, rng.gen::<f64>() * size.y),
            vel: DVec2::new(rng.gen_range(-s..=s), rng.gen_range(-s..=s)),
            radius: rng.gen_range(r_min..=r_max),
            color: if rng.gen_bool(0.5) {
                Accent::Primary
            } else {
                Accent::Secondary
            },
            phase: rng.gen_range(0.0..TAU),
        }
    }

    /// Size multiplier in `[0.5, 1.5]` at animation time `clock`.
    #[inline]
    pub fn pulse(&self, clock: f64) -> f64 {
        (clock * PULSE_RATE + self.phase).sin() * PULSE_AMPLITUDE + 1.0
    }

    /// Advance one frame: integrate, drift toward the pointer, bounce off walls.
    ///
    /// Walls only flip the velocity; the position is left where it landed, so
    /// a particle can sit just outside the bounds for a frame.
    pub fn step(&mut self, pointer: DVec2, bounds: DVec2, config: &FieldConfig) {
        self.pos += self.vel;

        let to_pointer = pointer - self.pos;
        let dist = to_pointer.length();
        if dist > 0.0 && dist < config.pointer_radius {
            self.pos += to_pointer * config.pointer_pull;
        }

        if self.pos.x < 0.0 || self.pos.x > bounds.x {
            self.vel.x = -self.vel.x;
        }
        if self.pos.y < 0.0 || self.pos.y > bounds.y {
            self.vel.y = -self.vel.y;
        }
    }
}

/// Number of particles for a `width × height` surface.
pub fn particle_count(width: f64, height: f64, config: &FieldConfig) -> usize {
    if !(width > 0.0 && height > 0.0) {
        return 0;
    }
    let n = (width * height / config.area_per_particle).floor() as usize;
    match config.max_particles {
        Some(cap) => n.min(cap),
        None => n,
    }
}

/// Link opacity for two particles `distance` apart; zero at and past the
/// link distance.
#[inline]
pub fn link_alpha(distance: f64, config: &FieldConfig) -> f64 {
    if distance >= config.link_distance {
        return 0.0;
    }
    config.link_max_alpha * (1.0 - distance / config.link_distance)
}

/// Animated field of pulsing points joined by proximity links.
///
/// The host owns scheduling: call [`ParticleField::resize`] whenever the
/// surface changes size, [`ParticleField::set_pointer`] on pointer moves, and
/// [`ParticleField::tick`] once per displayed frame.
pub struct ParticleField {
    config: FieldConfig,
    rng: StdRng,
    size: DVec2,
    particles: Vec<Particle>,
    pointer: DVec2,
    clock: f64,
}

impl ParticleField {
    pub fn new(config: FieldConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            config,
            rng,
            size: DVec2::ZERO,
            particles: Vec::new(),
            pointer: DVec2::ZERO,
            clock: 0.0,
        }
    }

    /// Adopt a new surface size and regenerate every particle.
    ///
    /// Regeneration also happens when the size is unchanged (e.g. a mobile
    /// browser chrome toggling); positions are not preserved across calls.
    pub fn resize(&mut self, width: f64, height: f64) {
        if self.size == DVec2::new(width, height) && !self.particles.is_empty() {
            log::debug!("[field] resize to same size {}x{}, regenerating", width, height);
        }
        self.size = DVec2::new(width.max(0.0), height.max(0.0));
        self.populate();
    }

    /// Replace the collection with a fresh random population for the current size.
    pub fn populate(&mut self) {
        let count = particle_count(self.size.x, self.size.y, &self.config);
        let size = self.size;
        let config = &self.config;
        let rng = &mut self.rng;
        self.particles = (0..count)
            .map(|_| Particle::random(rng, size, config))
            .collect();
        log::debug!(
            "[field] populated {} particles for {}x{}",
            count,
            size.x,
            size.y
        );
    }

    pub fn set_pointer(&mut self, x: f64, y: f64) {
        self.pointer = DVec2::new(x, y);
    }

    /// Render one frame onto `surface`, then advance every particle.
    pub fn tick<S: Surface + ?Sized>(&mut self, surface: &mut S) {
        surface.clear(self.size.x, self.size.y);
        self.clock += self.config.clock_step;

        self.draw_links(surface);

        let clock = self.clock;
        let pointer = self.pointer;
        let bounds = self.size;
        for p in &mut self.particles {
            let r = p.radius * p.pulse(clock);
            surface.fill_disc(p.pos, r, p.color.core());
            surface.fill_disc(p.pos, r * GLOW_SCALE, p.color.glow());
            p.step(pointer, bounds, &self.config);
        }
    }

    fn draw_links<S: Surface + ?Sized>(&self, surface: &mut S) {
        let primary = Rgba::new(PRIMARY_RGB, 1.0);
        let secondary = Rgba::new(SECONDARY_RGB, 1.0);
        for (i, a) in self.particles.iter().enumerate() {
            for b in &self.particles[i + 1..] {
                let d = a.pos.distance(b.pos);
                if d < self.config.link_distance {
                    let alpha = link_alpha(d, &self.config);
                    surface.stroke_gradient_line(
                        a.pos,
                        b.pos,
                        primary.with_alpha(alpha),
                        secondary.with_alpha(alpha),
                        self.config.link_width,
                    );
                }
            }
        }
    }

    pub fn width(&self) -> f64 {
        self.size.x
    }

    pub fn height(&self) -> f64 {
        self.size.y
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Direct access to the population, used by tests to place particles.
    pub fn particles_mut(&mut self) -> &mut Vec<Particle> {
        &mut self.particles
    }

    pub fn pointer(&self) -> DVec2 {
        self.pointer
    }

    pub fn clock(&self) -> f64 {
        self.clock
    }
}
