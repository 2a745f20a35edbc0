//! Unique identifiers for particles and shapes.
//!
//! Ids come from process-wide monotonic counters, so two particles (or two
//! shapes) never share an id even when built by different templates. The
//! counters are pointer-sized atomics, which any target with `alloc` and
//! atomic read-modify-write support provides.

use core::sync::atomic::{AtomicUsize, Ordering};

static NEXT_PARTICLE: AtomicUsize = AtomicUsize::new(0);
static NEXT_SHAPE: AtomicUsize = AtomicUsize::new(0);

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ParticleId(usize);

impl ParticleId {
    pub(crate) fn next() -> Self {
        ParticleId(NEXT_PARTICLE.fetch_add(1, Ordering::Relaxed))
    }

    pub fn raw(self) -> usize {
        self.0
    }
}

/// Tag grouping particles into one deformable body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ShapeId(usize);

impl ShapeId {
    pub(crate) fn next() -> Self {
        ShapeId(NEXT_SHAPE.fetch_add(1, Ordering::Relaxed))
    }

    pub fn raw(self) -> usize {
        self.0
    }
}
