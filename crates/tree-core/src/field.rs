//! Particle layout generation.
//!
//! Every particle carries two fixed targets: a point inside a tapered cone
//! (the merged "tree") and a point on a thick spherical shell (scattered).
//! The animation loop only ever moves `current` between them.

use glam::Vec3;
use rand::prelude::*;
use std::f32::consts::TAU;

use crate::constants::*;

/// Base palette entry of a particle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ParticleColor {
    GoldBright,
    GoldWarm,
    WhiteLight,
}

impl ParticleColor {
    pub const ALL: [ParticleColor; 3] = [
        ParticleColor::GoldBright,
        ParticleColor::GoldWarm,
        ParticleColor::WhiteLight,
    ];

    /// Pick a palette entry from a uniform draw in `[0, 1)`.
    pub fn from_draw(r: f32) -> Self {
        if r > PALETTE_BRIGHT_ABOVE {
            ParticleColor::GoldBright
        } else if r > PALETTE_WARM_ABOVE {
            ParticleColor::GoldWarm
        } else {
            ParticleColor::WhiteLight
        }
    }

    pub fn hex(self) -> u32 {
        match self {
            ParticleColor::GoldBright => GOLD_BRIGHT_HEX,
            ParticleColor::GoldWarm => GOLD_WARM_HEX,
            ParticleColor::WhiteLight => WHITE_LIGHT_HEX,
        }
    }

    pub fn linear_rgb(self) -> Vec3 {
        hex_to_linear(self.hex())
    }
}

#[derive(Clone, Debug)]
pub struct Particle {
    initial: Vec3,
    scatter: Vec3,
    current: Vec3,
    rotation: Vec3,
    scale: f32,
    color: ParticleColor,
    rgb: Vec3,
}

impl Particle {
    pub fn new(
        initial: Vec3,
        scatter: Vec3,
        rotation: Vec3,
        scale: f32,
        color: ParticleColor,
    ) -> Self {
        Self {
            initial,
            scatter,
            current: initial,
            rotation,
            scale,
            color,
            rgb: color.linear_rgb(),
        }
    }

    /// Merged (tree) target.
    #[inline]
    pub fn initial(&self) -> Vec3 {
        self.initial
    }

    /// Scattered (shell) target.
    #[inline]
    pub fn scatter(&self) -> Vec3 {
        self.scatter
    }

    #[inline]
    pub fn current(&self) -> Vec3 {
        self.current
    }

    #[inline]
    pub(crate) fn current_mut(&mut self) -> &mut Vec3 {
        &mut self.current
    }

    #[inline]
    pub fn rotation(&self) -> Vec3 {
        self.rotation
    }

    #[inline]
    pub fn scale(&self) -> f32 {
        self.scale
    }

    #[inline]
    pub fn color(&self) -> ParticleColor {
        self.color
    }

    /// Linear RGB of the palette entry, cached at creation.
    #[inline]
    pub fn rgb(&self) -> Vec3 {
        self.rgb
    }
}

#[derive(Clone, Debug)]
pub struct FieldParams {
    pub count: usize,
    pub tree_height: f32,
    pub base_radius: f32,
    pub taper_exponent: f32,
    pub scatter_min: f32,
    pub scatter_max: f32,
    pub scale_min: f32,
    pub scale_span: f32,
}

impl Default for FieldParams {
    fn default() -> Self {
        Self {
            count: PARTICLE_COUNT,
            tree_height: TREE_HEIGHT,
            base_radius: TREE_BASE_RADIUS,
            taper_exponent: TREE_TAPER_EXPONENT,
            scatter_min: SCATTER_RADIUS_MIN,
            scatter_max: SCATTER_RADIUS_MAX,
            scale_min: PARTICLE_SCALE_MIN,
            scale_span: PARTICLE_SCALE_SPAN,
        }
    }
}

impl FieldParams {
    /// Largest cone radius allowed at height `y`.
    pub fn tree_radius_at(&self, y: f32) -> f32 {
        let half = self.tree_height * 0.5;
        let normalized_y = ((y + half) / self.tree_height).clamp(0.0, 1.0);
        self.base_radius * (1.0 - normalized_y).powf(self.taper_exponent)
    }

    /// Point inside the tapered cone. Square-root radial sampling keeps the
    /// cross-section evenly filled instead of clustering at the axis.
    pub fn sample_tree<R: Rng>(&self, rng: &mut R) -> Vec3 {
        let half = self.tree_height * 0.5;
        let y = rng.gen::<f32>() * self.tree_height - half;
        let max_radius = self.tree_radius_at(y);
        let dist = rng.gen::<f32>().sqrt() * max_radius;
        let angle = rng.gen::<f32>() * TAU;
        Vec3::new(angle.cos() * dist, y, angle.sin() * dist)
    }

    /// Point on a shell between `scatter_min` and `scatter_max`, with a
    /// direction uniform over the sphere.
    pub fn sample_scatter<R: Rng>(&self, rng: &mut R) -> Vec3 {
        let radius = self.scatter_min + rng.gen::<f32>() * (self.scatter_max - self.scatter_min);
        let theta = rng.gen::<f32>() * TAU;
        let phi = (2.0 * rng.gen::<f32>() - 1.0).clamp(-1.0, 1.0).acos();
        Vec3::new(
            radius * phi.sin() * theta.cos(),
            radius * phi.sin() * theta.sin(),
            radius * phi.cos(),
        )
    }

    pub fn sample_particle<R: Rng>(&self, rng: &mut R) -> Particle {
        let initial = self.sample_tree(rng);
        let scatter = self.sample_scatter(rng);
        let color = ParticleColor::from_draw(rng.gen());
        let rotation = Vec3::new(rng.gen(), rng.gen(), rng.gen());
        let scale = self.scale_min + rng.gen::<f32>() * self.scale_span;
        Particle::new(initial, scatter, rotation, scale, color)
    }
}

/// Fixed-size set of particles owned for the whole session.
#[derive(Clone, Debug)]
pub struct ParticleField {
    particles: Vec<Particle>,
    seed: u64,
}

impl ParticleField {
    pub fn generate(params: &FieldParams, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let particles = (0..params.count)
            .map(|_| params.sample_particle(&mut rng))
            .collect::<Vec<_>>();
        log::debug!("[field] generated {} particles (seed={seed})", particles.len());
        Self { particles, seed }
    }

    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    // Length is fixed; only per-particle dynamic state may change.
    pub(crate) fn particles_mut(&mut self) -> &mut [Particle] {
        &mut self.particles
    }
}
