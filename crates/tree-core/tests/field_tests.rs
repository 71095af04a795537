use glam::Vec3;
use tree_core::*;

const EPS: f32 = 1e-4;

#[test]
fn generates_fixed_count_with_current_at_initial() {
    let field = ParticleField::generate(&FieldParams::default(), 11);
    assert_eq!(field.len(), PARTICLE_COUNT);
    for p in field.particles() {
        assert_eq!(p.current(), p.initial());
        assert_ne!(p.initial(), p.scatter());
    }
}

#[test]
fn same_seed_same_field() {
    let params = FieldParams::default();
    let a = ParticleField::generate(&params, 99);
    let b = ParticleField::generate(&params, 99);
    let c = ParticleField::generate(&params, 100);
    for (pa, pb) in a.particles().iter().zip(b.particles()) {
        assert_eq!(pa.initial(), pb.initial());
        assert_eq!(pa.scatter(), pb.scatter());
        assert_eq!(pa.color(), pb.color());
    }
    let differs = a
        .particles()
        .iter()
        .zip(c.particles())
        .any(|(pa, pc)| pa.initial() != pc.initial());
    assert!(differs);
}

#[test]
fn tree_layout_stays_inside_tapered_cone() {
    let params = FieldParams::default();
    let field = ParticleField::generate(&params, 3);
    let half = params.tree_height / 2.0;
    for p in field.particles() {
        let pos = p.initial();
        assert!(pos.y >= -half - EPS && pos.y <= half + EPS, "y={}", pos.y);
        let r = Vec3::new(pos.x, 0.0, pos.z).length();
        assert!(r <= params.tree_radius_at(pos.y) + EPS, "r={r} at y={}", pos.y);
    }
}

#[test]
fn tree_radius_tapers_from_base_to_tip() {
    let params = FieldParams::default();
    assert!((params.tree_radius_at(-4.5) - 4.2).abs() < EPS);
    assert!(params.tree_radius_at(4.5).abs() < EPS);
    assert!(params.tree_radius_at(0.0) < params.tree_radius_at(-2.0));
}

#[test]
fn scatter_layout_lies_on_thick_shell() {
    let field = ParticleField::generate(&FieldParams::default(), 5);
    for p in field.particles() {
        let r = p.scatter().length();
        assert!(r >= 15.0 - 1e-3 && r <= 70.0 + 1e-3, "r={r}");
    }
}

#[test]
fn scatter_directions_do_not_cluster_at_poles() {
    let field = ParticleField::generate(&FieldParams::default(), 21);
    let n = field.len() as f32;
    // Uniform on the sphere: P(|cos phi| > 0.9) = 0.1
    let polar = field
        .particles()
        .iter()
        .filter(|p| (p.scatter().z / p.scatter().length()).abs() > 0.9)
        .count() as f32;
    let frac = polar / n;
    assert!(frac > 0.06 && frac < 0.14, "polar fraction {frac}");
}

#[test]
fn per_particle_seeds_are_in_range() {
    let field = ParticleField::generate(&FieldParams::default(), 8);
    for p in field.particles() {
        assert!(p.scale() >= 0.1 && p.scale() < 0.3 + EPS, "scale={}", p.scale());
        for c in p.rotation().to_array() {
            assert!((0.0..1.0).contains(&c));
        }
    }
}

#[test]
fn palette_split_is_roughly_forty_forty_twenty() {
    let field = ParticleField::generate(&FieldParams::default(), 1234);
    let n = field.len() as f32;
    let share = |c: ParticleColor| {
        field.particles().iter().filter(|p| p.color() == c).count() as f32 / n
    };
    let bright = share(ParticleColor::GoldBright);
    let warm = share(ParticleColor::GoldWarm);
    let white = share(ParticleColor::WhiteLight);
    assert!((bright - 0.4).abs() < 0.05, "bright={bright}");
    assert!((warm - 0.4).abs() < 0.05, "warm={warm}");
    assert!((white - 0.2).abs() < 0.05, "white={white}");
}

#[test]
fn palette_draw_boundaries() {
    assert_eq!(ParticleColor::from_draw(0.61), ParticleColor::GoldBright);
    assert_eq!(ParticleColor::from_draw(0.6), ParticleColor::GoldWarm);
    assert_eq!(ParticleColor::from_draw(0.21), ParticleColor::GoldWarm);
    assert_eq!(ParticleColor::from_draw(0.2), ParticleColor::WhiteLight);
    assert_eq!(ParticleColor::from_draw(0.0), ParticleColor::WhiteLight);
}

#[test]
fn palette_colours_decode_to_linear() {
    let white = ParticleColor::WhiteLight.linear_rgb();
    assert!((white - Vec3::ONE).length() < 1e-5);
    let warm = ParticleColor::GoldWarm.linear_rgb();
    assert!(warm.x > warm.y && warm.y > warm.z);
    for c in ParticleColor::ALL {
        let rgb = c.linear_rgb();
        assert!(rgb.min_element() >= 0.0 && rgb.max_element() <= 1.0);
    }
}
