use std::f64::consts::PI;
use std::fmt;

use crate::shapes::{Shape, ShapeError};

/// A circle stored by its radius.
///
/// The diameter is a derived view over the radius: reading it returns
/// `2 * radius`, writing it updates the radius after validation. A negative
/// write is rejected and leaves the radius untouched.
pub struct Circle {
    radius: f64,
}

impl Circle {
    pub fn new(radius: f64) -> Self {
        Circle { radius }
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn diameter(&self) -> f64 {
        2.0 * self.radius
    }

    /// Set the radius through the diameter view.
    ///
    /// * `diameter` - The new diameter, must not be negative
    pub fn set_diameter(&mut self, diameter: f64) -> Result<(), ShapeError> {
        if diameter < 0.0 {
            return Err(ShapeError::NegativeDiameter { value: diameter });
        }
        self.radius = diameter / 2.0;
        Ok(())
    }
}

impl Shape for Circle {
    fn area(&self) -> f64 {
        PI * self.radius * self.radius
    }

    fn perimeter(&self) -> f64 {
        2.0 * PI * self.radius
    }
}

impl fmt::Display for Circle {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Circle(radius = {})", self.radius)
    }
}
