use glam::{Vec3, Vec4};
use std::mem::size_of;
use tree_core::*;

#[test]
fn camera_starts_at_configured_eye() {
    let camera = OrbitCamera::default();
    let eye = camera.eye();
    assert!((eye - Vec3::new(0.0, 1.0, 26.0)).length() < 1e-4);
    assert!((camera.fovy_radians.to_degrees() - 30.0).abs() < 1e-4);
}

#[test]
fn scattered_mode_rotates_five_times_faster() {
    let mut merged = OrbitCamera::default();
    let mut scattered = OrbitCamera::default();
    merged.advance(1.0, TreeMode::Merged);
    scattered.advance(1.0, TreeMode::Scattered);
    let a = std::f32::consts::TAU - merged.azimuth;
    let b = std::f32::consts::TAU - scattered.azimuth;
    assert!((b / a - 5.0).abs() < 1e-3, "ratio {}", b / a);
}

#[test]
fn azimuth_stays_wrapped() {
    let mut camera = OrbitCamera::default();
    for _ in 0..10_000 {
        camera.advance(0.5, TreeMode::Scattered);
        assert!(camera.azimuth >= 0.0 && camera.azimuth <= std::f32::consts::TAU);
    }
    assert!((camera.eye().y - 1.0).abs() < 1e-6);
}

#[test]
fn origin_projects_to_screen_centre() {
    let mut camera = OrbitCamera::default();
    camera.set_viewport(1280, 720);
    camera.advance(3.0, TreeMode::Merged);
    let clip = camera.view_proj() * Vec4::new(0.0, 0.0, 0.0, 1.0);
    let ndc = clip / clip.w;
    assert!(ndc.x.abs() < 1e-4);
    assert!(ndc.z > 0.0 && ndc.z < 1.0);
}

#[test]
fn billboard_axes_are_orthonormal_and_face_the_eye() {
    let mut camera = OrbitCamera::default();
    camera.advance(7.0, TreeMode::Scattered);
    let (right, up) = camera.billboard_axes();
    let toward_eye = camera.eye().normalize();
    assert!((right.length() - 1.0).abs() < 1e-4);
    assert!((up.length() - 1.0).abs() < 1e-4);
    assert!(right.dot(up).abs() < 1e-4);
    assert!(right.dot(toward_eye).abs() < 1e-4);
    assert!(up.y > 0.0);
}

#[test]
fn zero_sized_viewport_keeps_finite_aspect() {
    let mut camera = OrbitCamera::default();
    camera.set_viewport(0, 0);
    assert_eq!(camera.aspect, 1.0);
}

#[test]
fn lighting_dims_when_scattered() {
    let merged = SceneLighting::for_mode(TreeMode::Merged);
    let scattered = SceneLighting::for_mode(TreeMode::Scattered);
    assert_eq!(merged.brightness(), 1.0);
    assert!(scattered.brightness() < merged.brightness());
    assert!(scattered.brightness() >= 0.6);
    assert_eq!(merged.ambient, scattered.ambient);
}

#[test]
fn fog_ramps_between_near_and_far() {
    let fog = Fog::default();
    assert_eq!(fog.factor(0.0), 0.0);
    assert_eq!(fog.factor(fog.near), 0.0);
    assert_eq!(fog.factor(fog.far), 1.0);
    assert_eq!(fog.factor(500.0), 1.0);
    let mid = fog.factor((fog.near + fog.far) / 2.0);
    assert!((mid - 0.5).abs() < 1e-5);
}

#[test]
fn float_motion_is_neutral_at_rest_and_small_later() {
    let float = FloatMotion::default();
    let at_rest = float.model_matrix(0.0);
    assert!(at_rest.w_axis.y.abs() < 1e-6);

    for i in 0..200 {
        let m = float.model_matrix(i as f32 * 0.1);
        assert!(m.w_axis.y.abs() <= float.float_intensity / 10.0 + 1e-6);
        let moved = m.transform_point3(Vec3::new(0.0, 9.0, 0.0));
        assert!((moved - Vec3::new(0.0, 9.0, 0.0)).length() < 0.2);
    }
}

#[test]
fn uniform_layouts_match_shader() {
    assert_eq!(size_of::<SceneUniforms>(), 208);
    assert_eq!(size_of::<ParticleInstance>(), 48);
    assert_eq!(size_of::<SceneUniforms>() % 16, 0);
}

#[test]
fn uniforms_carry_fog_and_brightness() {
    let camera = OrbitCamera::default();
    let fog = Fog::default();
    let lighting = SceneLighting::for_mode(TreeMode::Scattered);
    let u = SceneUniforms::new(&camera, &FloatMotion::default(), &fog, &lighting, 1.0);
    assert_eq!(u.fog_params[0], FOG_NEAR);
    assert_eq!(u.fog_params[1], FOG_FAR);
    assert_eq!(u.fog_params[2], lighting.brightness());
    assert_eq!(u.eye[3], 1.0);
    assert_eq!(u.camera_right[3], 0.0);
}

#[test]
fn shader_declares_both_entry_points() {
    assert!(PARTICLES_WGSL.contains("fn vs_main"));
    assert!(PARTICLES_WGSL.contains("fn fs_main"));
}
