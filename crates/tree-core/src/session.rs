use crate::animation::{animate, AnimationParams, FrameInput, ParticleInstance};
use crate::field::{FieldParams, ParticleField};
use crate::gesture::{GestureThresholds, HandSample};
use crate::mode::{ModeController, TreeMode};

#[derive(Clone, Debug, Default)]
pub struct SessionConfig {
    /// Field seed; a random one is drawn when absent.
    pub seed: Option<u64>,
    pub field: FieldParams,
    pub animation: AnimationParams,
    pub gesture: GestureThresholds,
}

/// Top-level controller: owns the field and the mode, and turns the latest
/// hand sample plus elapsed time into one frame of particle instances.
pub struct Session {
    field: ParticleField,
    mode: ModeController,
    animation: AnimationParams,
    gesture: GestureThresholds,
    instances: Vec<ParticleInstance>,
}

impl Session {
    pub fn new(config: SessionConfig) -> Self {
        let seed = config.seed.unwrap_or_else(rand::random);
        let field = ParticleField::generate(&config.field, seed);
        log::info!("[session] {} particles, seed={seed}", field.len());
        let instances = Vec::with_capacity(field.len());
        Self {
            field,
            mode: ModeController::default(),
            animation: config.animation,
            gesture: config.gesture,
            instances,
        }
    }

    #[inline]
    pub fn mode(&self) -> TreeMode {
        self.mode.mode()
    }

    #[inline]
    pub fn transitions(&self) -> u64 {
        self.mode.transitions()
    }

    pub fn field(&self) -> &ParticleField {
        &self.field
    }

    pub fn gesture_thresholds(&self) -> &GestureThresholds {
        &self.gesture
    }

    pub fn animation_params(&self) -> &AnimationParams {
        &self.animation
    }

    /// Apply the mode rule to one hand sample.
    pub fn observe(&mut self, sample: Option<&HandSample>) -> Option<TreeMode> {
        self.mode.observe(sample)
    }

    /// Evaluate the latest sample, advance all particles, and return the
    /// rendered instances for this frame.
    pub fn frame(&mut self, time: f32, hand: Option<HandSample>) -> &[ParticleInstance] {
        self.mode.observe(hand.as_ref());
        let input = FrameInput {
            time,
            mode: self.mode.mode(),
            hand,
        };
        animate(&mut self.field, &input, &self.animation, &mut self.instances);
        &self.instances
    }

    /// Instances produced by the last call to [`Session::frame`].
    pub fn instances(&self) -> &[ParticleInstance] {
        &self.instances
    }
}
