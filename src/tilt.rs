//! Pointer-driven 3D tilt for hoverable cards.

const TILT_DAMPING: f64 = 30.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tilt {
    pub rotate_x: f64,
    pub rotate_y: f64,
}

impl Tilt {
    /// Tilt for a pointer at (`x`, `y`) relative to the card's top-left
    /// corner on a `width` by `height` card.
    pub fn from_pointer(x: f64, y: f64, width: f64, height: f64) -> Self {
        let center_x = width / 2.0;
        let center_y = height / 2.0;
        Self {
            rotate_x: (y - center_y) / TILT_DAMPING,
            rotate_y: (center_x - x) / TILT_DAMPING,
        }
    }

    pub fn transform(&self) -> String {
        format!(
            "perspective(1000px) rotateX({}deg) rotateY({}deg) translateY(-8px)",
            self.rotate_x, self.rotate_y
        )
    }
}
