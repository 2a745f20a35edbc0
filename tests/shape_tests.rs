use softblob::template::{self, BlobConfig, Material, RectConfig};
use softblob::{Axis, Color, PhysicsError, ShapeId, Vec2, World, WorldConfig};

fn world_with_blob(points: usize) -> (World<f64>, ShapeId) {
    let mut world = World::with_config(WorldConfig::new().with_gravity_scale(0.0));
    let blob = template::blob(&BlobConfig {
        center: Vec2::new(0.0, 0.0),
        radius: 50.0,
        points,
        material: Material { hardness: 2.0, ..Material::default() },
        color: Some(Color::rgb(10, 20, 30)),
    })
    .unwrap();
    let id = blob.shapes[0].id();
    world.add(blob).unwrap();
    (world, id)
}

#[test]
fn middle_point_is_plain_average() {
    let (world, id) = world_with_blob(8);
    let mid = world.shape(id).unwrap().middle_point().unwrap();
    assert!(mid.x.abs() < 1e-9, "mid.x = {}", mid.x);
    assert!(mid.y.abs() < 1e-9, "mid.y = {}", mid.y);
}

#[test]
fn outline_is_closed_and_pushed_outward() {
    let (world, id) = world_with_blob(6);
    let view = world.shape(id).unwrap();
    let verts = view.render_vertices();
    assert_eq!(verts.len(), 7);
    assert_eq!(verts[6], verts[0]);
    for v in &verts {
        // Particles sit 50 from the centre, pushed out by half of radius 25.
        let r = v.pos.length();
        assert!((r - 62.5).abs() < 1e-9, "outline radius = {}", r);
        assert_eq!(v.radius, 25.0);
    }
    assert_eq!(view.shape().color(), Some(Color::rgb(10, 20, 30)));
}

#[test]
fn outline_after_removal_closes_on_first_point() {
    let (mut world, id) = world_with_blob(3);
    let last = world.shapes()[0].members()[2];
    let removed = world.remove_particle(last).unwrap();
    assert_eq!(removed.shape(), None);

    let view = world.shape(id).unwrap();
    let verts = view.render_vertices();
    assert_eq!(verts.len(), 3);
    assert_eq!(verts[2], verts[0]);
    assert_eq!(verts[2].radius, view.points()[0].radius());
}

#[test]
fn removal_keeps_rest_table_consistent() {
    let (mut world, id) = world_with_blob(4);
    let members = world.shapes()[0].members().to_vec();
    let d02 = world.shapes()[0].rest_length(0, 2);
    let d23 = world.shapes()[0].rest_length(2, 3);

    world.remove_particle(members[1]).unwrap();

    let shape = &world.shapes()[0];
    assert_eq!(shape.len(), 3);
    assert_eq!(shape.rest_table().len(), 3);
    assert_eq!(shape.members(), &[members[0], members[2], members[3]]);
    assert_eq!(shape.rest_length(0, 1), d02);
    assert_eq!(shape.rest_length(1, 2), d23);

    for (slot, pid) in shape.members().iter().enumerate() {
        let m = world.particle(*pid).unwrap().membership().unwrap();
        assert_eq!(m.shape, id);
        assert_eq!(m.slot, slot);
    }

    // Still steps fine with the shrunken shape.
    for _ in 0..10 {
        world.update();
    }
    assert_eq!(world.shape(id).unwrap().points().len(), 3);
}

#[test]
fn shape_velocity_applies_valid_axis() {
    let (mut world, id) = world_with_blob(5);
    world.set_shape_velocity(id, 1.5, -2.0).unwrap();
    for p in world.shape(id).unwrap().points() {
        assert_eq!(p.velocity(), Vec2::new(1.5, -2.0));
    }

    let err = world.set_shape_velocity(id, f64::NAN, 3.0).unwrap_err();
    assert_eq!(err, PhysicsError::NotANumber { setter: "Shape::set_velocity", axis: Axis::X });
    for p in world.shape(id).unwrap().points() {
        assert_eq!(p.velocity(), Vec2::new(1.5, 3.0));
    }
}

#[test]
fn unknown_shape_is_reported() {
    let (mut world, _) = world_with_blob(3);
    let other = template::blob(&BlobConfig {
        center: Vec2::new(0.0, 0.0),
        radius: 1.0,
        points: 1,
        material: Material::default(),
        color: None,
    })
    .unwrap();
    let stray = other.shapes[0].id();
    assert!(world.shape(stray).is_none());
    assert_eq!(
        world.set_shape_velocity(stray, 0.0, 0.0).unwrap_err(),
        PhysicsError::UnknownShape(stray)
    );
}

#[test]
fn stretched_point_is_pulled_back() {
    let (mut world, _) = world_with_blob(6);
    let first = world.shapes()[0].members()[0];
    // Slot 0 rests at (0, 50); drag it further out along +y.
    world.particle_mut(first).unwrap().set_position(0.0, 120.0).unwrap();
    world.update();
    let v = world.particle(first).unwrap().velocity();
    assert!(v.y < 0.0, "springs should pull toward the body, vy = {}", v.y);
    assert!(v.x.abs() < 1e-9, "pull is symmetric about the y axis, vx = {}", v.x);
}

#[test]
fn rectangle_registers_as_one_shape() {
    let mut world: World<f32> = World::new();
    world.add(
        template::rectangle(&RectConfig {
            origin: Vec2::new(10.0, 10.0),
            columns: 4,
            rows: 3,
            spacing: Vec2::new(20.0, 20.0),
            material: Material::default(),
            color: None,
        })
        .unwrap(),
    ).unwrap();
    assert_eq!(world.shapes().len(), 1);
    assert_eq!(world.particles().len(), 14);
    let id = world.shapes()[0].id();
    let mid = world.shape(id).unwrap().middle_point().unwrap();
    assert!((mid.x - 50.0).abs() < 1e-4, "mid.x = {}", mid.x);
    assert!((mid.y - 40.0).abs() < 1e-4, "mid.y = {}", mid.y);
}
