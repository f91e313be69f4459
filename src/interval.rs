/*

    Responsible for creating a struct that represents
    ranges from a to b and functionality to check if
    x is in range [a,b].

    See also associated constants of Interval class:
    - EMPTY: (inf, -inf)
    - UNIVERSE: (-inf, inf)

    @author: Bartu
    @date: Sept 2025

*/

use crate::numeric::Float;

#[derive(Debug, Clone, Copy)]
pub struct Interval {
    pub min: Float,
    pub max: Float,
}

impl Interval {

    pub const EMPTY: Self = Self {
        min: Float::INFINITY,
        max: Float::NEG_INFINITY,
    };

    pub const UNIVERSE: Self = Self {
        min: Float::NEG_INFINITY,
        max: Float::INFINITY,
    };

    pub fn validate(&self) -> bool {
        self.max >= self.min
    }

    pub fn new(min: Float, max: Float) -> Self {
        Self {
            min,
            max,
        }
    }

    /// Interval spanning `size` around `center`, i.e. [center - size/2, center + size/2]
    pub fn centered(center: Float, size: Float) -> Self {
        Self {
            min: center - size / 2.,
            max: center + size / 2.,
        }
    }

    pub fn size(&self) -> Float {
        self.max - self.min
    }

    pub fn center(&self) -> Float {
        (self.min + self.max) / 2.
    }

    pub fn contains(&self, x: Float) -> bool {
        self.min <= x && x <= self.max
    }

    pub fn expand(&mut self, x: Float) {
        if x < self.min { self.min = x; }
        if x > self.max { self.max = x; }
    }

}
