//! Integration tests for vela-sim.

use vela_math::Vec3;
use vela_sim::springs::{accumulate_spring_forces, SpringLayout};
use vela_sim::{Sheet, SheetConfig, SimulationContext};

fn zero_gravity() -> SimulationContext {
    SimulationContext {
        gravity: [0.0, 0.0, 0.0],
        dt: 1.0e-3,
    }
}

// ─── Config Tests ─────────────────────────────────────────────

#[test]
fn config_default_is_valid() {
    let config = SheetConfig::default();
    assert!(config.validate().is_ok());
    assert_eq!(config.patches_x, 10);
    assert!((config.total_mass - 0.2).abs() < 1e-6);
}

#[test]
fn config_rejects_zero_resolution() {
    let config = SheetConfig {
        patches_x: 0,
        ..Default::default()
    };
    assert!(config.validate().is_err());
    assert!(Sheet::new(&config).is_err());
}

#[test]
fn config_rejects_non_positive_mass() {
    let config = SheetConfig {
        total_mass: 0.0,
        ..Default::default()
    };
    assert!(config.validate().is_err());

    let config = SheetConfig {
        total_mass: f32::NAN,
        ..Default::default()
    };
    assert!(config.validate().is_err(), "NaN mass must not validate");
}

#[test]
fn config_toml_round_trip() {
    let config = SheetConfig::default();
    let text = toml::to_string(&config).unwrap();
    let recovered: SheetConfig = toml::from_str(&text).unwrap();
    assert_eq!(recovered.patches_x, config.patches_x);
    assert!((recovered.width - config.width).abs() < 1e-6);
}

#[test]
fn context_toml_round_trip() {
    let ctx = SimulationContext::default();
    let text = toml::to_string(&ctx).unwrap();
    let recovered: SimulationContext = toml::from_str(&text).unwrap();
    assert!((recovered.dt - ctx.dt).abs() < 1e-9);
    assert!((recovered.gravity_vec().y + 9.81).abs() < 1e-4);
}

// ─── Spring Layout Tests ──────────────────────────────────────

#[test]
fn layout_rest_lengths_from_patch_size() {
    let layout = SpringLayout::from_patch_size(0.08, 0.06);
    assert!((layout.x_stretch.rest_length - 0.08).abs() < 1e-6);
    assert!((layout.y_stretch.rest_length - 0.06).abs() < 1e-6);
    assert!((layout.shear.rest_length - 0.1).abs() < 1e-6); // 3-4-5
    assert!((layout.x_bend.rest_length - 0.16).abs() < 1e-6);
    assert!((layout.y_bend.rest_length - 0.12).abs() < 1e-6);
    assert_eq!(layout.x_stretch.stiffness, 50.0);
    assert_eq!(layout.shear.stiffness, 10.0);
}

// ─── Equilibrium ──────────────────────────────────────────────

#[test]
fn flat_sheet_at_rest_stays_put() {
    // At exactly rest-length spacing, no gravity, no wind, no initial
    // velocity: stepping must not move anything.
    let mut sheet = Sheet::new(&SheetConfig::default()).unwrap();
    let ctx = zero_gravity();

    let initial: Vec<Vec3> = sheet.grid().particles().iter().map(|p| p.position()).collect();
    for _ in 0..5 {
        sheet.step(&ctx, Vec3::ZERO);
    }
    for (p, &before) in sheet.grid().particles().iter().zip(&initial) {
        assert!(
            (p.position() - before).length() < 1e-6,
            "particle drifted from {before:?} to {:?}",
            p.position()
        );
    }
}

// ─── Force Symmetry ───────────────────────────────────────────

#[test]
fn spring_pass_sums_to_zero_net_force() {
    let mut sheet = Sheet::new(&SheetConfig::default()).unwrap();
    // Deform the sheet so springs actually carry load.
    sheet.grid_mut().particle_mut(4, 5).point.position += Vec3::new(0.03, -0.02, 0.08);
    sheet.grid_mut().particle_mut(7, 2).point.position += Vec3::new(-0.05, 0.01, -0.04);

    let layout = sheet.springs().clone();
    let skipped = accumulate_spring_forces(sheet.grid_mut(), &layout);
    assert_eq!(skipped, 0);

    let net: Vec3 = sheet
        .grid()
        .particles()
        .iter()
        .map(|p| p.internal_force)
        .sum();
    assert!(net.length() < 1e-4, "net internal force {net:?}");
}

#[test]
fn coincident_particles_skip_springs_without_nan() {
    let mut sheet = Sheet::new(&SheetConfig::default()).unwrap();
    // Collapse a particle onto its right neighbor.
    let target = sheet.grid().particle(3, 4).position();
    sheet.grid_mut().particle_mut(3, 5).point.position = target;

    let ctx = zero_gravity();
    let report = sheet.step(&ctx, Vec3::ZERO);
    assert!(report.springs_skipped > 0);
    assert!(!sheet.grid().has_non_finite());
}

// ─── Pinning ──────────────────────────────────────────────────

#[test]
fn pinned_particles_are_bit_identical_after_stepping() {
    let mut sheet = Sheet::new(&SheetConfig::default()).unwrap();
    let ctx = SimulationContext::default();

    let before: Vec<(Vec3, Vec3)> = (0..sheet.grid().rows())
        .map(|i| {
            let p = sheet.grid().particle(i, 0);
            (p.position(), p.velocity)
        })
        .collect();

    for _ in 0..50 {
        sheet.step(&ctx, Vec3::new(0.3, 0.0, 0.1));
    }

    for (i, &(pos, vel)) in before.iter().enumerate() {
        let p = sheet.grid().particle(i, 0);
        assert_eq!(p.position(), pos, "pinned particle {i} moved");
        assert_eq!(p.velocity, vel, "pinned particle {i} gained velocity");
    }
}

// ─── Wind Model ───────────────────────────────────────────────

#[test]
fn normal_wind_pushes_free_particles() {
    let mut sheet = Sheet::new(&SheetConfig::default()).unwrap();
    let ctx = zero_gravity();
    // Flat sheet faces +Z; wind along +Z should push it.
    sheet.step(&ctx, Vec3::new(0.0, 0.0, 1.0));

    for i in 0..sheet.grid().rows() {
        for j in 1..sheet.grid().cols() {
            assert!(
                sheet.grid().particle(i, j).velocity.z > 0.0,
                "particle ({i}, {j}) ignored the wind"
            );
        }
    }
}

#[test]
fn tangential_wind_produces_no_force() {
    let mut sheet = Sheet::new(&SheetConfig::default()).unwrap();
    let ctx = zero_gravity();
    // Wind parallel to the flat sheet has zero normal projection.
    sheet.step(&ctx, Vec3::new(1.0, 0.0, 0.0));

    // Tolerance allows the rounding noise of rest-length springs; a
    // working wind force would be three orders of magnitude larger.
    for p in sheet.grid().particles() {
        assert!(p.velocity.length() < 1e-5, "tangential wind moved a particle");
    }
}

#[test]
fn accumulators_are_clear_after_a_step() {
    let mut sheet = Sheet::new(&SheetConfig::default()).unwrap();
    let ctx = SimulationContext::default();
    sheet.step(&ctx, Vec3::new(0.2, 0.0, 0.4));

    // The integrator clears both accumulators every tick; wind does
    // not carry over.
    for p in sheet.grid().particles() {
        assert_eq!(p.internal_force, Vec3::ZERO);
        assert_eq!(p.external_force, Vec3::ZERO);
    }
}

// ─── Scenario: Hanging Sheet Under Gravity ────────────────────

#[test]
fn hanging_sheet_falls_without_nan() {
    let config = SheetConfig {
        total_mass: 1.0,
        total_damping: 0.0,
        width: 1.0,
        height: 1.0,
        patches_x: 3,
        patches_y: 3,
        wind_drag: 1.0,
    };
    let mut sheet = Sheet::new(&config).unwrap();
    let ctx = SimulationContext {
        gravity: [0.0, -9.81, 0.0],
        dt: 1.0e-3,
    };

    let initial_fixed_y: Vec<f32> = (0..sheet.grid().rows())
        .map(|i| sheet.grid().particle(i, 0).position().y)
        .collect();
    let initial_mean_y = mean_free_height(&sheet);

    for _ in 0..1000 {
        sheet.step(&ctx, Vec3::ZERO);
    }

    assert!(!sheet.grid().has_non_finite(), "NaN leaked into the state");
    let mean_y = mean_free_height(&sheet);
    assert!(
        mean_y < initial_mean_y,
        "free particles should sag: {mean_y} vs {initial_mean_y}"
    );
    for (i, &y0) in initial_fixed_y.iter().enumerate() {
        assert_eq!(
            sheet.grid().particle(i, 0).position().y,
            y0,
            "pinned row {i} drifted"
        );
    }
}

fn mean_free_height(sheet: &Sheet) -> f32 {
    let free: Vec<f32> = sheet
        .grid()
        .particles()
        .iter()
        .filter(|p| !p.pinned)
        .map(|p| p.position().y)
        .collect();
    free.iter().sum::<f32>() / free.len() as f32
}

// ─── Energy ───────────────────────────────────────────────────

#[test]
fn kinetic_energy_tracks_motion() {
    let mut sheet = Sheet::new(&SheetConfig::default()).unwrap();
    assert_eq!(sheet.kinetic_energy(), 0.0);

    let ctx = SimulationContext::default();
    sheet.step(&ctx, Vec3::ZERO);
    assert!(sheet.kinetic_energy() > 0.0, "gravity should start motion");
}

#[test]
fn healthy_step_reports_no_guards() {
    let mut sheet = Sheet::new(&SheetConfig::default()).unwrap();
    let ctx = SimulationContext::default();
    let report = sheet.step(&ctx, Vec3::new(0.1, 0.0, 0.2));
    assert_eq!(report.springs_skipped, 0);
    assert_eq!(report.normals_skipped, 0);
    assert!(report.wall_time >= 0.0);
}
