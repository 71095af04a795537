use glam::Vec3;

// Shared visual tuning constants used by both web and native frontends.

// Field layout
pub const PARTICLE_COUNT: usize = 2200;
pub const TREE_HEIGHT: f32 = 9.0; // merged cone spans y in [-H/2, H/2]
pub const TREE_BASE_RADIUS: f32 = 4.2;
pub const TREE_TAPER_EXPONENT: f32 = 1.1;
pub const SCATTER_RADIUS_MIN: f32 = 15.0;
pub const SCATTER_RADIUS_MAX: f32 = 70.0;
pub const PARTICLE_SCALE_MIN: f32 = 0.1;
pub const PARTICLE_SCALE_SPAN: f32 = 0.2;

// Palette thresholds: r > BRIGHT -> bright gold, r > WARM -> warm gold, else white
pub const PALETTE_BRIGHT_ABOVE: f32 = 0.6;
pub const PALETTE_WARM_ABOVE: f32 = 0.2;

// Gesture classification (normalized image units)
pub const FIST_DISTANCE_BELOW: f32 = 0.2;
pub const OPEN_DISTANCE_ABOVE: f32 = 0.35;

// Animation
pub const MERGE_LERP: f32 = 0.08; // merging snaps faster than scattering
pub const SCATTER_LERP: f32 = 0.06;
pub const HOVER_FREQUENCY: f32 = 0.4;
pub const HOVER_AMPLITUDE: f32 = 0.04;
pub const BREATHE_FREQUENCY: f32 = 2.2;
pub const BREATHE_AMPLITUDE: f32 = 0.2;
pub const SPIN_RATE: f32 = 0.1; // radians per second around y
pub const SCATTERED_SCALE_BOOST: f32 = 1.8;
pub const TWINKLE_FREQUENCY: f32 = 3.0;
pub const TWINKLE_BASE: f32 = 1.2;
pub const TWINKLE_AMPLITUDE: f32 = 0.6;
pub const PARTICLE_OPACITY: f32 = 0.95;

// Hand repulsion
pub const POINTER_WORLD_SCALE: f32 = 12.0; // maps [-1, 1] pointer to world units
pub const REPULSION_RADIUS: f32 = 6.0;
pub const REPULSION_STRENGTH: f32 = 3.5;

// Camera
pub const CAMERA_EYE: [f32; 3] = [0.0, 1.0, 26.0];
pub const CAMERA_FOV_DEGREES: f32 = 30.0;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 400.0;
pub const AUTO_ROTATE_SPEED_MERGED: f32 = 0.5;
pub const AUTO_ROTATE_SPEED_SCATTERED: f32 = 2.5;

// Lighting
pub const AMBIENT_INTENSITY: f32 = 0.7;
pub const POINT_INTENSITY_MERGED: f32 = 3.0;
pub const POINT_INTENSITY_SCATTERED: f32 = 0.5;
pub const SPOT_INTENSITY_MERGED: f32 = 8.0;
pub const SPOT_INTENSITY_SCATTERED: f32 = 1.0;

// Group float
pub const FLOAT_SPEED: f32 = 1.5;
pub const FLOAT_ROTATION_INTENSITY: f32 = 0.1;
pub const FLOAT_INTENSITY: f32 = 0.4;

// Background and fog
pub const BACKGROUND_HEX: u32 = 0x051505;
pub const FOG_NEAR: f32 = 25.0;
pub const FOG_FAR: f32 = 85.0;

// Palette (sRGB hex)
pub const GOLD_BRIGHT_HEX: u32 = 0xFDE68A;
pub const GOLD_WARM_HEX: u32 = 0xD97706;
pub const WHITE_LIGHT_HEX: u32 = 0xFFFFFF;

#[inline]
pub fn camera_eye_vec3() -> Vec3 {
    Vec3::from(CAMERA_EYE)
}

/// Decode a `0xRRGGBB` sRGB colour into linear RGB.
pub fn hex_to_linear(hex: u32) -> Vec3 {
    let channel = |shift: u32| srgb_to_linear(((hex >> shift) & 0xFF) as f32 / 255.0);
    Vec3::new(channel(16), channel(8), channel(0))
}

#[inline]
pub fn srgb_to_linear(c: f32) -> f32 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}
