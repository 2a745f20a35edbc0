//! 2D soft-body particle simulation.
//!
//! `softblob` simulates point masses grouped into deformable shapes inside a
//! bounded world with static rectangular obstacles. A renderer reads particle
//! positions and shape outlines every frame; this crate owns the physics.
//!
//! # Features
//!
//! - **Soft bodies**: blobs and rectangles held together by rest-length springs
//! - **Cross-shape repulsion**: overlapping bodies push each other apart
//! - **Obstacles**: axis-aligned rectangles that block movement per axis
//! - **Bounded world**: optional box with inelastic edge bounce
//! - **Observable**: monitor steps via the `StepObserver` trait
//! - **`no_std` compatible**: needs only `alloc` and pointer-sized atomics (WASM, most embedded targets)
//!
//! # Example
//!
//! ```
//! use softblob::{World, template, template::{BlobConfig, Material}, Vec2};
//!
//! let mut world: World<f32> = World::new();
//! world.set_bounds(0.0, 0.0, 800.0, 600.0);
//! world.add(template::blob(&BlobConfig {
//!     center: Vec2::new(400.0, 200.0),
//!     radius: 50.0,
//!     points: 12,
//!     material: Material::default(),
//!     color: None,
//! }).unwrap()).unwrap();
//! world.add(template::obstacle(0.0, 500.0, 800.0, 100.0)).unwrap();
//!
//! for _ in 0..60 {
//!     world.update();
//! }
//! let outline = world.shape(world.shapes()[0].id()).unwrap().render_vertices();
//! assert_eq!(outline.len(), 13);
//! ```

#![no_std]

extern crate alloc;

pub mod float;
pub mod vec;
pub mod geometry;
pub mod id;
pub mod bounds;
pub mod obstacle;
pub mod particle;
pub mod shape;
pub mod composite;
pub mod template;
pub mod world;
pub mod observer;
pub mod config;
pub mod error;

// Re-export primary API
pub use float::Float;
pub use vec::Vec2;
pub use id::{ParticleId, ShapeId};
pub use bounds::Bounds;
pub use obstacle::Obstacle;
pub use particle::{Particle, Membership};
pub use shape::{Color, RenderVertex, RestTable, Shape, ShapeView};
pub use composite::Composite;
pub use world::World;
pub use config::WorldConfig;
pub use observer::{StepObserver, NoOpStepObserver, StepCounter};
pub use error::{Axis, PhysicsError};
