/// A point on the complex plane in full `f64` precision.
///
/// Only used to describe regions; the escape-time kernel works on split
/// `f32` lanes instead.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Complex {
    pub real: f64,
    pub imag: f64,
}

impl Complex {
    #[must_use]
    pub const fn new(real: f64, imag: f64) -> Self {
        Self { real, imag }
    }
}
