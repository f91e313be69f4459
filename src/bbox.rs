/*

    Axis Aligned Bounding Box computation over solid bodies.

    Every body reports the minimal axis-aligned cuboid enclosing
    itself through the Bounded trait. The same enclosing( ) used
    for compound bounding boxes also fixes a Compound's position
    at construction time, so the two can never drift apart.

    @author: bartu
    @date: 30 Nov, 2025
*/


use crate::prelude::*;

use crate::interval::Interval;
use crate::bodies::{Body, Cuboid, HeapAllocatedBody};

pub trait Bounded {
    fn bounding_box(&self) -> Cuboid;
}

impl Cuboid {
    pub fn new_from(xint: &Interval, yint: &Interval, zint: &Interval) -> Self {

        assert!(xint.validate() && yint.validate() && zint.validate(), "Invalid interval, found max < min");
        Self {
            position: Vector3::new(xint.center(), yint.center(), zint.center()),
            size_x: xint.size(),
            size_y: yint.size(),
            size_z: zint.size(),
        }
    }

    pub fn x_interval(&self) -> Interval {
        Interval::centered(self.position.x, self.size_x)
    }

    pub fn y_interval(&self) -> Interval {
        Interval::centered(self.position.y, self.size_y)
    }

    pub fn z_interval(&self) -> Interval {
        Interval::centered(self.position.z, self.size_z)
    }
}

/// Minimal axis-aligned cuboid enclosing all given bodies.
///
/// Panics on an empty slice; an enclosing box of nothing has no
/// defined extents. Callers constructing bodies from documents
/// reject empty part lists before reaching here.
pub fn enclosing(parts: &[HeapAllocatedBody]) -> Cuboid {
    assert!(!parts.is_empty(), "enclosing( ) requires at least one body");

    let (mut xint, mut yint, mut zint) = (Interval::EMPTY, Interval::EMPTY, Interval::EMPTY);
    for part in parts { // using & to borrow instead of move
        let bbox = part.bounding_box();
        let pos = part.position();

        xint.expand(pos.x - bbox.size_x / 2.);
        xint.expand(pos.x + bbox.size_x / 2.);
        yint.expand(pos.y - bbox.size_y / 2.);
        yint.expand(pos.y + bbox.size_y / 2.);
        zint.expand(pos.z - bbox.size_z / 2.);
        zint.expand(pos.z + bbox.size_z / 2.);
    }

    Cuboid::new_from(&xint, &yint, &zint)
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::bodies::Sphere;

    #[test]
    fn test_new_from_intervals() {
        let bbox = Cuboid::new_from(
            &Interval::new(-1.0, 3.0),
            &Interval::new(0.0, 2.0),
            &Interval::new(-5.0, 5.0),
        );
        assert_eq!(bbox.position, Vector3::new(1.0, 1.0, 0.0));
        assert_eq!(bbox.size_x, 4.0);
        assert_eq!(bbox.size_y, 2.0);
        assert_eq!(bbox.size_z, 10.0);
    }

    #[test]
    #[should_panic(expected = "Invalid interval")]
    fn test_new_from_rejects_flipped_interval() {
        let flipped = Interval::new(1.0, -1.0);
        let _ = Cuboid::new_from(&flipped, &flipped, &flipped);
    }

    #[test]
    fn test_enclosing_two_spheres() {
        let parts: Vec<HeapAllocatedBody> = vec![
            Arc::new(Sphere::new(Vector3::new(-3.0, 0.0, 0.0), 1.0)),
            Arc::new(Sphere::new(Vector3::new(3.0, 0.0, 0.0), 1.0)),
        ];
        let bbox = enclosing(&parts);
        assert_eq!(bbox.position, Vector3::ZERO);
        assert_eq!(bbox.size_x, 8.0);
        assert_eq!(bbox.size_y, 2.0);
        assert_eq!(bbox.size_z, 2.0);
    }

    #[test]
    fn test_enclosing_matches_single_part_bbox() {
        let sphere = Sphere::new(Vector3::new(1.0, 2.0, 3.0), 0.5);
        let expected = sphere.bounding_box();

        let parts: Vec<HeapAllocatedBody> = vec![Arc::new(sphere)];
        let bbox = enclosing(&parts);
        assert_eq!(bbox.position, expected.position);
        assert_eq!(bbox.size_x, expected.size_x);
        assert_eq!(bbox.size_y, expected.size_y);
        assert_eq!(bbox.size_z, expected.size_z);
    }

    #[test]
    #[should_panic(expected = "at least one body")]
    fn test_enclosing_rejects_empty_slice() {
        let _ = enclosing(&[]);
    }
}
