use std::fmt;

use crate::shapes::Shape;

/// A rectangle with two side lengths.
///
/// Side lengths are expected to be positive but are not validated, the
/// formulas accept any numeric input.
pub struct Rectangle {
    length: f64,
    width: f64,
}

impl Rectangle {
    pub fn new(length: f64, width: f64) -> Self {
        Rectangle { length, width }
    }

    pub fn length(&self) -> f64 {
        self.length
    }

    pub fn width(&self) -> f64 {
        self.width
    }
}

impl Shape for Rectangle {
    fn area(&self) -> f64 {
        self.length * self.width
    }

    fn perimeter(&self) -> f64 {
        2.0 * (self.length + self.width)
    }
}

impl fmt::Display for Rectangle {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Rectangle({} x {})", self.length, self.width)
    }
}

/// A square is a rectangle with both sides equal to a single side value.
///
/// Holds a `Rectangle` and delegates to it, so the area and perimeter
/// formulas live in one place.
pub struct Square {
    rect: Rectangle,
}

impl Square {
    pub fn new(side: f64) -> Self {
        Square {
            rect: Rectangle::new(side, side),
        }
    }

    pub fn side(&self) -> f64 {
        self.rect.length()
    }

    pub fn length(&self) -> f64 {
        self.rect.length()
    }

    pub fn width(&self) -> f64 {
        self.rect.width()
    }
}

impl Shape for Square {
    fn area(&self) -> f64 {
        self.rect.area()
    }

    fn perimeter(&self) -> f64 {
        self.rect.perimeter()
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Square({})", self.side())
    }
}
