//! Scene-side state shared with the frontends.
//!
//! These types avoid platform APIs; renderers consume them to build camera
//! matrices, fog, and a brightness level for the current mode.

use glam::{EulerRot, Mat4, Quat, Vec3};
use std::f32::consts::TAU;

use crate::constants::*;
use crate::mode::TreeMode;

/// Camera circling the y axis at a fixed height, looking at the origin.
#[derive(Clone, Debug)]
pub struct OrbitCamera {
    pub radius: f32,
    pub height: f32,
    /// Angle around y in radians; 0 places the eye on +z.
    pub azimuth: f32,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        let eye = camera_eye_vec3();
        Self {
            radius: Vec3::new(eye.x, 0.0, eye.z).length(),
            height: eye.y,
            azimuth: 0.0,
            aspect: 16.0 / 9.0,
            fovy_radians: CAMERA_FOV_DEGREES.to_radians(),
            znear: CAMERA_ZNEAR,
            zfar: CAMERA_ZFAR,
        }
    }
}

impl OrbitCamera {
    /// Auto-rotate speed; one unit is a full turn per minute.
    pub fn auto_rotate_speed(mode: TreeMode) -> f32 {
        if mode.is_merged() {
            AUTO_ROTATE_SPEED_MERGED
        } else {
            AUTO_ROTATE_SPEED_SCATTERED
        }
    }

    pub fn advance(&mut self, dt_sec: f32, mode: TreeMode) {
        let omega = TAU / 60.0 * Self::auto_rotate_speed(mode);
        self.azimuth = (self.azimuth - omega * dt_sec).rem_euclid(TAU);
    }

    pub fn set_viewport(&mut self, width: u32, height: u32) {
        self.aspect = width.max(1) as f32 / height.max(1) as f32;
    }

    pub fn eye(&self) -> Vec3 {
        Vec3::new(
            self.radius * self.azimuth.sin(),
            self.height,
            self.radius * self.azimuth.cos(),
        )
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye(), Vec3::ZERO, Vec3::Y)
    }

    pub fn view_proj(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// World-space right and up axes of the view, for billboarding.
    pub fn billboard_axes(&self) -> (Vec3, Vec3) {
        let forward = (Vec3::ZERO - self.eye()).normalize();
        let right = forward.cross(Vec3::Y).normalize();
        let up = right.cross(forward);
        (right, up)
    }
}

/// Light intensities per mode. The tree glows warmly when merged and dims
/// when scattered.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SceneLighting {
    pub ambient: f32,
    pub point: f32,
    pub spot: f32,
}

impl SceneLighting {
    pub fn for_mode(mode: TreeMode) -> Self {
        if mode.is_merged() {
            Self {
                ambient: AMBIENT_INTENSITY,
                point: POINT_INTENSITY_MERGED,
                spot: SPOT_INTENSITY_MERGED,
            }
        } else {
            Self {
                ambient: AMBIENT_INTENSITY,
                point: POINT_INTENSITY_SCATTERED,
                spot: SPOT_INTENSITY_SCATTERED,
            }
        }
    }

    /// Brightness multiplier in `[0.6, 1.0]`, 1.0 for the merged rig.
    pub fn brightness(&self) -> f32 {
        let full = AMBIENT_INTENSITY + POINT_INTENSITY_MERGED + SPOT_INTENSITY_MERGED;
        let level = ((self.ambient + self.point + self.spot) / full).clamp(0.0, 1.0);
        0.6 + 0.4 * level
    }
}

/// Slow sway of the whole particle group.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FloatMotion {
    pub speed: f32,
    pub rotation_intensity: f32,
    pub float_intensity: f32,
}

impl Default for FloatMotion {
    fn default() -> Self {
        Self {
            speed: FLOAT_SPEED,
            rotation_intensity: FLOAT_ROTATION_INTENSITY,
            float_intensity: FLOAT_INTENSITY,
        }
    }
}

impl FloatMotion {
    pub fn model_matrix(&self, time: f32) -> Mat4 {
        let phase = time / 4.0 * self.speed;
        let rx = phase.cos() / 8.0 * self.rotation_intensity;
        let ry = phase.sin() / 8.0 * self.rotation_intensity;
        let rz = phase.sin() / 20.0 * self.rotation_intensity;
        let lift = phase.sin() / 10.0 * self.float_intensity;
        Mat4::from_rotation_translation(
            Quat::from_euler(EulerRot::XYZ, rx, ry, rz),
            Vec3::new(0.0, lift, 0.0),
        )
    }
}

/// Linear distance fog toward the background colour.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Fog {
    pub color: Vec3,
    pub near: f32,
    pub far: f32,
}

impl Default for Fog {
    fn default() -> Self {
        Self {
            color: hex_to_linear(BACKGROUND_HEX),
            near: FOG_NEAR,
            far: FOG_FAR,
        }
    }
}

impl Fog {
    /// 0 before `near`, 1 beyond `far`.
    pub fn factor(&self, distance: f32) -> f32 {
        ((distance - self.near) / (self.far - self.near)).clamp(0.0, 1.0)
    }
}

/// Uniform block consumed by `PARTICLES_WGSL`.
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SceneUniforms {
    pub view_proj: [[f32; 4]; 4],
    pub model: [[f32; 4]; 4],
    pub camera_right: [f32; 4],
    pub camera_up: [f32; 4],
    pub eye: [f32; 4],
    pub fog_color: [f32; 4],
    /// near, far, brightness, unused
    pub fog_params: [f32; 4],
}

impl SceneUniforms {
    pub fn new(
        camera: &OrbitCamera,
        float: &FloatMotion,
        fog: &Fog,
        lighting: &SceneLighting,
        time: f32,
    ) -> Self {
        let (right, up) = camera.billboard_axes();
        Self {
            view_proj: camera.view_proj().to_cols_array_2d(),
            model: float.model_matrix(time).to_cols_array_2d(),
            camera_right: right.extend(0.0).to_array(),
            camera_up: up.extend(0.0).to_array(),
            eye: camera.eye().extend(1.0).to_array(),
            fog_color: fog.color.extend(1.0).to_array(),
            fog_params: [fog.near, fog.far, lighting.brightness(), 0.0],
        }
    }
}
