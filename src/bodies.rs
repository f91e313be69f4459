/*

    Declare solid primitives: Sphere, Cuboid, Cylinder
    and the Compound group nesting them.

    Bodies are immutable once built; trees are assembled
    bottom-up and shared as Arc<dyn Body>. All operations
    (bounding box, containment, boxify) are read-only.

    @date: 30 Nov, 2025
    @author: bartu
*/

use std::fmt::Debug;

use crate::bbox::{enclosing, Bounded};
use crate::interval::Interval;
use crate::prelude::*;

pub type HeapAllocatedBody = Arc<dyn Body>;
pub type BodyList = Vec<HeapAllocatedBody>;


// =======================================================================================================
// Body Trait
// =======================================================================================================
pub trait Body : Debug + Send + Sync + Bounded {
    /// Local origin of the body. For Compound this is derived at
    /// construction as the center of its parts' enclosing box.
    fn position(&self) -> Vector3;

    /// True iff `point` lies inside the body, boundary inclusive.
    fn contains(&self, point: Vector3) -> bool;

    /// New tree of the same nesting structure where every leaf
    /// has been replaced by its own bounding box.
    fn boxify(&self) -> HeapAllocatedBody;
}


// =======================================================================================================
// Sphere (impl Body + Bounded)
// =======================================================================================================
#[derive(Debug, Clone)]
pub struct Sphere {
    pub position: Vector3,
    pub radius: Float,
}

impl Sphere {
    pub fn new(position: Vector3, radius: Float) -> Self {
        debug_assert!(radius >= 0., "Sphere radius must be non-negative");
        Self { position, radius }
    }
}

impl Body for Sphere {
    fn position(&self) -> Vector3 {
        self.position
    }

    fn contains(&self, point: Vector3) -> bool {
        (point - self.position).length_squared() <= self.radius * self.radius
    }

    fn boxify(&self) -> HeapAllocatedBody {
        Arc::new(self.bounding_box())
    }
}

impl Bounded for Sphere {
    fn bounding_box(&self) -> Cuboid {
        Cuboid::new(self.position, self.radius * 2., self.radius * 2., self.radius * 2.)
    }
}


// =======================================================================================================
// Cuboid (impl Body + Bounded)
// =======================================================================================================

// Axis-aligned, sizes are full extents: the solid spans position ± size/2 per axis
#[derive(Debug, Clone)]
pub struct Cuboid {
    pub position: Vector3,
    pub size_x: Float,
    pub size_y: Float,
    pub size_z: Float,
}

impl Cuboid {
    pub fn new(position: Vector3, size_x: Float, size_y: Float, size_z: Float) -> Self {
        debug_assert!(size_x >= 0. && size_y >= 0. && size_z >= 0., "Cuboid sizes must be non-negative");
        Self { position, size_x, size_y, size_z }
    }

    pub fn half_extents(&self) -> Vector3 {
        Vector3::new(self.size_x, self.size_y, self.size_z) / 2.
    }

    pub fn min_corner(&self) -> Vector3 {
        self.position - self.half_extents()
    }

    pub fn max_corner(&self) -> Vector3 {
        self.position + self.half_extents()
    }
}

impl Body for Cuboid {
    fn position(&self) -> Vector3 {
        self.position
    }

    fn contains(&self, point: Vector3) -> bool {
        point.cmpge(self.min_corner()).all() && point.cmple(self.max_corner()).all()
    }

    fn boxify(&self) -> HeapAllocatedBody {
        Arc::new(self.clone()) // A cuboid is its own bounding box
    }
}

impl Bounded for Cuboid {
    fn bounding_box(&self) -> Cuboid {
        self.clone()
    }
}


// =======================================================================================================
// Cylinder (impl Body + Bounded)
// =======================================================================================================

// Axis parallel to Z; spans position.z ± height/2
#[derive(Debug, Clone)]
pub struct Cylinder {
    pub position: Vector3,
    pub height: Float,
    pub radius: Float,
}

impl Cylinder {
    pub fn new(position: Vector3, height: Float, radius: Float) -> Self {
        debug_assert!(height >= 0. && radius >= 0., "Cylinder height and radius must be non-negative");
        Self { position, height, radius }
    }

    fn z_span(&self) -> Interval {
        Interval::centered(self.position.z, self.height)
    }
}

impl Body for Cylinder {
    fn position(&self) -> Vector3 {
        self.position
    }

    fn contains(&self, point: Vector3) -> bool {
        let dx = point.x - self.position.x;
        let dy = point.y - self.position.y;
        dx * dx + dy * dy <= self.radius * self.radius && self.z_span().contains(point.z)
    }

    fn boxify(&self) -> HeapAllocatedBody {
        Arc::new(self.bounding_box())
    }
}

impl Bounded for Cylinder {
    fn bounding_box(&self) -> Cuboid {
        Cuboid::new(self.position, self.radius * 2., self.radius * 2., self.height)
    }
}


// =======================================================================================================
// Compound (impl Body + Bounded)
// =======================================================================================================
#[derive(Debug)]
pub struct Compound {
    position: Vector3, // derived from parts, so not publicly writable
    parts: BodyList,
}

impl Compound {
    /// Panics if `parts` is empty (see enclosing( ) in bbox.rs).
    /// Document loading rejects empty part lists before this point.
    pub fn new(parts: BodyList) -> Self {
        let position = enclosing(&parts).position;
        Self { position, parts }
    }

    pub fn parts(&self) -> &[HeapAllocatedBody] {
        &self.parts
    }
}

impl Body for Compound {
    fn position(&self) -> Vector3 {
        self.position
    }

    fn contains(&self, point: Vector3) -> bool {
        self.parts.iter().any(|part| part.contains(point))
    }

    fn boxify(&self) -> HeapAllocatedBody {
        let parts: BodyList = self.parts.iter().map(|part| part.boxify()).collect();
        Arc::new(Compound::new(parts))
    }
}

impl Bounded for Compound {
    fn bounding_box(&self) -> Cuboid {
        // Same enclosing( ) that fixed self.position at construction
        enclosing(&self.parts)
    }
}
