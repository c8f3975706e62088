pub mod rectangle;
pub mod circle;

pub use rectangle::{Rectangle, Square};
pub use circle::Circle;

use thiserror::Error;

/// Errors raised by shape accessors that validate their input.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ShapeError {
    #[error("diameter must not be negative, got {value}")]
    NegativeDiameter { value: f64 },
}

/// Contract that every concrete shape has to supply.
///
/// `area` and `perimeter` have no default body, so the contract cannot be
/// used on its own. `label` is provided and falls back to the concrete
/// type's name.
pub trait Shape {
    fn area(&self) -> f64;
    fn perimeter(&self) -> f64;

    fn label(&self) -> &'static str
    where
        Self: Sized,
    {
        let full = std::any::type_name::<Self>();
        full.rsplit("::").next().unwrap_or(full)
    }
}
