//! Per-frame particle update.
//!
//! Each frame pulls every particle's `current` position toward the target of
//! the active mode and derives the rendered transform and colour. Particles
//! never read each other, so the update order does not matter.

use glam::{Vec2, Vec3};

use crate::constants::*;
use crate::field::{Particle, ParticleField};
use crate::gesture::HandSample;
use crate::mode::TreeMode;

/// GPU instance record for one particle. Colour may exceed 1.0.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ParticleInstance {
    pub position: [f32; 3],
    pub scale: f32,
    pub rotation: [f32; 3],
    pub _pad: f32,
    pub color: [f32; 4],
}

#[derive(Clone, Debug)]
pub struct AnimationParams {
    pub merge_lerp: f32,
    pub scatter_lerp: f32,
    pub hover_frequency: f32,
    pub hover_amplitude: f32,
    pub breathe_frequency: f32,
    pub breathe_amplitude: f32,
    pub spin_rate: f32,
    pub scattered_scale: f32,
    pub twinkle_frequency: f32,
    pub twinkle_base: f32,
    pub twinkle_amplitude: f32,
    pub opacity: f32,
    pub pointer_world_scale: f32,
    pub repulsion_radius: f32,
    pub repulsion_strength: f32,
}

impl Default for AnimationParams {
    fn default() -> Self {
        Self {
            merge_lerp: MERGE_LERP,
            scatter_lerp: SCATTER_LERP,
            hover_frequency: HOVER_FREQUENCY,
            hover_amplitude: HOVER_AMPLITUDE,
            breathe_frequency: BREATHE_FREQUENCY,
            breathe_amplitude: BREATHE_AMPLITUDE,
            spin_rate: SPIN_RATE,
            scattered_scale: SCATTERED_SCALE_BOOST,
            twinkle_frequency: TWINKLE_FREQUENCY,
            twinkle_base: TWINKLE_BASE,
            twinkle_amplitude: TWINKLE_AMPLITUDE,
            opacity: PARTICLE_OPACITY,
            pointer_world_scale: POINTER_WORLD_SCALE,
            repulsion_radius: REPULSION_RADIUS,
            repulsion_strength: REPULSION_STRENGTH,
        }
    }
}

impl AnimationParams {
    #[inline]
    pub fn lerp_speed(&self, mode: TreeMode) -> f32 {
        if mode.is_merged() {
            self.merge_lerp
        } else {
            self.scatter_lerp
        }
    }

    /// Vertical bob added to the rendered position only.
    #[inline]
    pub fn hover(&self, time: f32, phase: f32) -> f32 {
        (time * self.hover_frequency + phase).sin() * self.hover_amplitude
    }

    #[inline]
    pub fn breathe(&self, time: f32, phase: f32) -> f32 {
        1.0 + (time * self.breathe_frequency + phase).sin() * self.breathe_amplitude
    }

    /// Colour multiplier for the twinkle effect; unclamped.
    #[inline]
    pub fn twinkle(&self, time: f32, phase: f32) -> f32 {
        self.twinkle_base + (time * self.twinkle_frequency + phase).sin() * self.twinkle_amplitude
    }

    /// Planar push away from the hand pointer, in world units.
    ///
    /// Linear falloff from `repulsion_strength` at the pointer to zero at
    /// `repulsion_radius`. A particle sitting exactly on the pointer has no
    /// defined direction and is left alone.
    pub fn repulsion(&self, position: Vec3, pointer: Vec2) -> Vec2 {
        let offset = position.truncate() - pointer * self.pointer_world_scale;
        let dist_sq = offset.length_squared();
        let radius = self.repulsion_radius;
        if dist_sq >= radius * radius || dist_sq <= 0.0 {
            return Vec2::ZERO;
        }
        let dist = dist_sq.sqrt();
        let force = (radius - dist) / radius;
        offset / dist * force * self.repulsion_strength
    }
}

/// Explicit per-frame inputs; nothing is read from ambient state.
#[derive(Clone, Copy, Debug, Default)]
pub struct FrameInput {
    /// Seconds since the session started.
    pub time: f32,
    pub mode: TreeMode,
    pub hand: Option<HandSample>,
}

/// One exponential smoothing step toward `target`.
#[inline]
pub fn approach(current: Vec3, target: Vec3, speed: f32) -> Vec3 {
    current + (target - current) * speed
}

/// Advance every particle one frame and write its rendered instance.
///
/// `out` is resized to the field length and fully overwritten.
pub fn animate(
    field: &mut ParticleField,
    input: &FrameInput,
    params: &AnimationParams,
    out: &mut Vec<ParticleInstance>,
) {
    out.resize(field.len(), ParticleInstance::default());
    let speed = params.lerp_speed(input.mode);
    let scale_mode = if input.mode.is_merged() {
        1.0
    } else {
        params.scattered_scale
    };
    let pointer = input.hand.as_ref().map(HandSample::pointer);

    for (i, (p, inst)) in field
        .particles_mut()
        .iter_mut()
        .zip(out.iter_mut())
        .enumerate()
    {
        let phase = i as f32;
        let target = if input.mode.is_merged() {
            p.initial()
        } else {
            p.scatter()
        };
        let current = p.current_mut();
        *current = approach(*current, target, speed);
        *inst = render_particle(p, phase, input.time, scale_mode, pointer, params);
    }
}

fn render_particle(
    p: &Particle,
    phase: f32,
    time: f32,
    scale_mode: f32,
    pointer: Option<Vec2>,
    params: &AnimationParams,
) -> ParticleInstance {
    let current = p.current();
    let push = pointer
        .map(|ptr| params.repulsion(current, ptr))
        .unwrap_or(Vec2::ZERO);
    let position = Vec3::new(
        current.x + push.x,
        current.y + params.hover(time, phase) + push.y,
        current.z,
    );
    let rot = p.rotation();
    let rotation = Vec3::new(rot.x, rot.y + time * params.spin_rate, rot.z);
    let scale = p.scale() * scale_mode * params.breathe(time, phase);
    let color = p.rgb() * params.twinkle(time, phase);
    ParticleInstance {
        position: position.to_array(),
        scale,
        rotation: rotation.to_array(),
        _pad: 0.0,
        color: color.extend(params.opacity).to_array(),
    }
}
