mod common;

use common::{assert_close, fake_world};
use gravitas::config::SimulationConfig;
use gravitas::core::{
    BodyEntry, BodyRegistry, Material, RegistryError, ShapeDesc, ShapeError, ShapeKind,
};
use gravitas::physics::{BodyType, PhysicsError, PhysicsWorld};
use gravitas::prefabs::{ARENA_EDGES, ArenaPrefab, BodySpec, Prefab};
use gravitas::utils::{ExtentError, SCREEN_RATIO, WorldExtent};
use gravitas::world::BodyError;

fn ball(name: &str) -> BodySpec {
    BodySpec::builder()
        .name(name)
        .shape(ShapeKind::Circle)
        .width(10.0)
        .build()
}

#[test]
fn landscape_screen_keeps_height() {
    let extent = WorldExtent::from_screen(1920.0, 1080.0);
    assert_close(extent.height, 1080.0, 1e-4);
    assert_close(extent.width, 1080.0 * SCREEN_RATIO, 1e-4);
    assert_close(extent.width, 607.5, 1e-4);
}

#[test]
fn portrait_screen_keeps_width() {
    let extent = WorldExtent::from_screen(1080.0, 1920.0);
    assert_close(extent.width, 1080.0, 1e-4);
    assert_close(extent.height, 1920.0, 1e-3);
}

#[test]
fn degenerate_screen_is_rejected() {
    assert_eq!(
        WorldExtent::try_from_screen(0.0, 1080.0),
        Err(ExtentError::InvalidScreen {
            width: 0.0,
            height: 1080.0
        })
    );
    assert!(WorldExtent::try_from_screen(1920.0, f32::NAN).is_err());
    assert!(WorldExtent::try_from_screen(1920.0, 1080.0).is_ok());
}

#[test]
fn shape_kind_parses_case_insensitively() {
    assert_eq!("circle".parse::<ShapeKind>(), Ok(ShapeKind::Circle));
    assert_eq!("BOX".parse::<ShapeKind>(), Ok(ShapeKind::Box));
    assert_eq!("Circle".parse::<ShapeKind>(), Ok(ShapeKind::Circle));
    assert_eq!(
        "triangle".parse::<ShapeKind>(),
        Err(ShapeError::UnknownShape {
            kind: "triangle".to_string()
        })
    );
}

#[test]
fn circle_width_is_its_diameter() {
    let shape = ShapeDesc::new(ShapeKind::Circle, 12.0, 99.0).unwrap();
    assert_eq!(shape, ShapeDesc::Circle { radius: 6.0 });

    let shape = ShapeDesc::new(ShapeKind::Box, 4.0, 2.0).unwrap();
    assert_eq!(
        shape,
        ShapeDesc::Box {
            half_width: 2.0,
            half_height: 1.0
        }
    );
}

#[test]
fn negative_dimensions_are_rejected() {
    assert!(matches!(
        ShapeDesc::new(ShapeKind::Circle, -1.0, 0.0),
        Err(ShapeError::InvalidDimension { dimension: "width", .. })
    ));
    assert!(matches!(
        ShapeDesc::new(ShapeKind::Box, 1.0, f32::INFINITY),
        Err(ShapeError::InvalidDimension { dimension: "height", .. })
    ));
    // zero-thickness walls are allowed
    assert!(ShapeDesc::new(ShapeKind::Box, 100.0, 0.0).is_ok());
}

#[test]
fn material_ranges() {
    assert!(Material::new(1.0, 0.0, 1000.0).is_ok());
    assert!(Material::new(0.0, 0.0, 1.0).is_err());
    assert!(Material::new(1.0, -0.1, 1.0).is_err());
    assert!(Material::new(1.0, 0.0, 1000.5).is_err());
    assert!(Material::new(1.0, 0.0, f32::NAN).is_err());
}

#[test]
fn registry_keeps_first_entry_on_duplicate() {
    let mut registry = BodyRegistry::new();
    let entry = |handle| BodyEntry {
        name: "ball".to_string(),
        handle,
        shape: ShapeDesc::Circle { radius: 1.0 },
        material: Material::default(),
        body_type: BodyType::Dynamic,
    };

    registry.insert(entry(1usize)).unwrap();
    assert_eq!(
        registry.insert(entry(2)),
        Err(RegistryError::DuplicateName {
            name: "ball".to_string()
        })
    );
    assert_eq!(registry.handle("ball"), Some(1));
    assert_eq!(registry.len(), 1);

    registry.remove("ball").unwrap();
    registry.insert(entry(3)).unwrap();
    assert_eq!(registry.handle("ball"), Some(3));
}

#[test]
fn registry_remove_keeps_order_and_lookup() {
    let mut registry = BodyRegistry::new();
    for (i, name) in ["a", "b", "c"].into_iter().enumerate() {
        registry
            .insert(BodyEntry {
                name: name.to_string(),
                handle: i,
                shape: ShapeDesc::Circle { radius: 1.0 },
                material: Material::default(),
                body_type: BodyType::Dynamic,
            })
            .unwrap();
    }

    registry.remove("a");

    let names: Vec<_> = registry.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, ["b", "c"]);
    assert_eq!(registry.handle("c"), Some(2));
    assert!(!registry.contains("a"));
}

#[test]
fn duplicate_body_name_is_rejected_without_touching_the_engine() {
    let mut world = fake_world(SimulationConfig::default());
    let first = world.create_body(&ball("ball0")).unwrap();

    let err = world.create_body(&ball("ball0")).unwrap_err();

    assert!(matches!(err, BodyError::Registry { .. }));
    assert_eq!(world.handle("ball0"), Some(first));
    assert_eq!(world.physics.bodies.len(), 1);
}

#[test]
fn invalid_description_is_rejected_before_the_engine() {
    let mut world = fake_world(SimulationConfig::default());
    let spec = BodySpec::builder()
        .name("bad")
        .shape(ShapeKind::Box)
        .width(-2.0)
        .build();

    let err = world.create_body(&spec).unwrap_err();

    assert!(matches!(err, BodyError::Shape { ref name, .. } if name == "bad"));
    assert!(world.physics.bodies.is_empty());
    assert!(world.bodies.is_empty());
}

#[test]
fn engine_failure_leaves_nothing_behind() {
    let mut world = fake_world(SimulationConfig::default());
    world.physics.reject_fixtures = true;

    let err = world.create_body(&ball("ball0")).unwrap_err();

    assert!(matches!(
        err,
        BodyError::Engine {
            source: PhysicsError::InvalidShape { .. },
            ..
        }
    ));
    assert_eq!(world.physics.body_count(), 0);
    assert!(!world.bodies.contains("ball0"));
}

#[test]
fn height_defaults_to_width() {
    let spec = BodySpec::builder()
        .name("square")
        .shape(ShapeKind::Box)
        .width(3.0)
        .build();
    assert_eq!(
        spec.shape_desc().unwrap(),
        ShapeDesc::Box {
            half_width: 1.5,
            half_height: 1.5
        }
    );
}

#[test]
fn arena_surrounds_the_extent() {
    let mut world = fake_world(SimulationConfig::default());
    ArenaPrefab::default().spawn(&mut world).unwrap();

    let extent = world.extent();
    for name in ARENA_EDGES {
        let entry = world.bodies.get(name).unwrap();
        assert_eq!(entry.body_type, BodyType::Static);
    }

    let bottom = world.handle("bottom_edge").unwrap();
    let right = world.handle("right_edge").unwrap();
    assert_eq!(world.physics.position(bottom).unwrap().y, -extent.height / 2.0);
    assert_eq!(world.physics.position(right).unwrap().x, extent.width / 2.0);
}

#[test]
fn static_bodies_do_not_move() {
    let mut world = fake_world(SimulationConfig::default());
    ArenaPrefab::default().spawn(&mut world).unwrap();
    let bottom = world.handle("bottom_edge").unwrap();
    let before = world.physics.position(bottom);

    world.physics.apply_force_to_center(bottom, nalgebra::Vector2::new(1e6, 1e6), true);
    world.frame().unwrap();

    assert_eq!(world.physics.position(bottom), before);
}

#[test]
fn dispose_releases_every_body() {
    let mut world = fake_world(SimulationConfig::default());
    ArenaPrefab::default().spawn(&mut world).unwrap();
    world.gravity.add_participant("bottom_edge");

    world.dispose();

    assert!(world.bodies.is_empty());
    assert!(world.gravity.participants().is_empty());
    assert_eq!(world.physics.body_count(), 0);

    // a second dispose is a no-op
    world.dispose();
}

#[test]
fn frame_clock_averages_the_recent_window() {
    use gravitas::clock::{CLOCK_WINDOW, FrameClock};
    use std::time::Duration;

    let mut clock = FrameClock::new();
    assert_eq!(clock.fps(), 0);
    assert_eq!(clock.delta(), Duration::ZERO);

    // slow frames fall out of the window once it is full of fast ones
    for _ in 0..CLOCK_WINDOW {
        clock.record(Duration::from_secs(1));
    }
    for _ in 0..CLOCK_WINDOW {
        clock.record(Duration::from_millis(500));
    }

    assert_eq!(clock.mean_delta(), Duration::from_millis(500));
    assert_eq!(clock.delta(), Duration::from_millis(500));
    assert_eq!(clock.fps(), 2);
}

#[test]
fn frames_are_counted() {
    let mut world = fake_world(SimulationConfig::default());
    for _ in 0..3 {
        world.frame().unwrap();
    }
    assert_eq!(world.frame_index(), 3);
    assert!(!world.is_shutting_down());
    world.shutdown();
    assert!(world.is_shutting_down());
}
