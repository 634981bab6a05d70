use crate::core::data::complex_rect::ComplexRect;
use std::error::Error;
use std::fmt;

/// Largest drift, in units of `dy`, still treated as a mirror-symmetric row
/// layout by [`Viewport::is_vertically_symmetric`].
const SYMMETRY_TOLERANCE: f64 = 1e-9;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ViewportError {
    GridTooSmall { width: usize, height: usize },
}

impl fmt::Display for ViewportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::GridTooSmall { width, height } => {
                write!(f, "grid must be at least 2x2 pixels: {}x{}", width, height)
            }
        }
    }
}

impl Error for ViewportError {}

/// The canonical Mandelbrot display rectangle, centred on the real axis.
#[must_use]
pub const fn canonical_region() -> ComplexRect {
    ComplexRect::CANONICAL
}

/// Affine pixel-to-plane mapping.
///
/// Pixel `(row, col)` maps to `(x_start + col * dx, y_start + row * dy)`.
/// The parameters are kept in `f64`; lookups hand back the `f32` values the
/// escape-time kernel iterates on, always rounded the same way so every
/// tiling strategy sees identical coordinates.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Viewport {
    x_start: f64,
    y_start: f64,
    dx: f64,
    dy: f64,
}

impl Viewport {
    #[must_use]
    pub const fn new(x_start: f64, y_start: f64, dx: f64, dy: f64) -> Self {
        Self {
            x_start,
            y_start,
            dx,
            dy,
        }
    }

    /// Spreads `width x height` samples over `region`, the first and last
    /// sample of each axis landing on the region's edges.
    pub fn from_region(
        region: ComplexRect,
        width: usize,
        height: usize,
    ) -> Result<Self, ViewportError> {
        if width < 2 || height < 2 {
            return Err(ViewportError::GridTooSmall { width, height });
        }

        Ok(Self {
            x_start: region.top_left().real,
            y_start: region.top_left().imag,
            dx: region.width() / (width - 1) as f64,
            dy: region.height() / (height - 1) as f64,
        })
    }

    pub fn canonical(width: usize, height: usize) -> Result<Self, ViewportError> {
        Self::from_region(canonical_region(), width, height)
    }

    #[must_use]
    pub fn x_start(&self) -> f64 {
        self.x_start
    }

    #[must_use]
    pub fn y_start(&self) -> f64 {
        self.y_start
    }

    #[must_use]
    pub fn dx(&self) -> f64 {
        self.dx
    }

    #[must_use]
    pub fn dy(&self) -> f64 {
        self.dy
    }

    #[inline]
    #[must_use]
    pub fn re_at(&self, col: usize) -> f32 {
        self.x_start as f32 + col as f32 * self.dx as f32
    }

    #[inline]
    #[must_use]
    pub fn im_at(&self, row: usize) -> f32 {
        self.y_start as f32 + row as f32 * self.dy as f32
    }

    #[inline]
    #[must_use]
    pub fn plane_coord(&self, row: usize, col: usize) -> (f32, f32) {
        (self.re_at(col), self.im_at(row))
    }

    /// Whether row `r` and row `height - 1 - r` sample conjugate points.
    ///
    /// Holds exactly when the sampled rows are centred on the real axis, that
    /// is when `2 * y_start + (height - 1) * dy` vanishes.
    #[must_use]
    pub fn is_vertically_symmetric(&self, height: usize) -> bool {
        if height < 2 {
            return true;
        }

        let drift = 2.0 * self.y_start + (height - 1) as f64 * self.dy;

        drift.abs() <= SYMMETRY_TOLERANCE * self.dy.abs()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::complex::Complex;

    #[test]
    fn test_canonical_corners_land_on_region_edges() {
        let viewport = Viewport::canonical(4, 4).unwrap();

        assert_eq!(viewport.plane_coord(0, 0), (-2.0, -1.5));
        assert_eq!(viewport.plane_coord(3, 3), (1.0, 1.5));
    }

    #[test]
    fn test_canonical_deltas() {
        let viewport = Viewport::canonical(4, 7).unwrap();

        assert_eq!(viewport.dx(), 1.0);
        assert_eq!(viewport.dy(), 0.5);
        assert_eq!(viewport.x_start(), -2.0);
        assert_eq!(viewport.y_start(), -1.5);
    }

    #[test]
    fn test_plane_coord_is_affine() {
        let viewport = Viewport::new(0.5, -1.0, 0.25, 0.125);

        assert_eq!(viewport.plane_coord(0, 0), (0.5, -1.0));
        assert_eq!(viewport.plane_coord(8, 2), (1.0, 0.0));
        assert_eq!(viewport.re_at(4), 1.5);
        assert_eq!(viewport.im_at(4), -0.5);
    }

    #[test]
    fn test_grid_must_be_at_least_two_pixels_each_way() {
        assert_eq!(
            Viewport::canonical(1, 1),
            Err(ViewportError::GridTooSmall {
                width: 1,
                height: 1
            })
        );
        assert_eq!(
            Viewport::canonical(0, 8),
            Err(ViewportError::GridTooSmall {
                width: 0,
                height: 8
            })
        );
        assert!(Viewport::canonical(2, 2).is_ok());
    }

    #[test]
    fn test_canonical_viewport_is_vertically_symmetric() {
        for size in [2, 3, 4, 5, 64, 127, 1000, 4096] {
            let viewport = Viewport::canonical(size, size).unwrap();

            assert!(viewport.is_vertically_symmetric(size), "size {}", size);
        }
    }

    #[test]
    fn test_shifted_viewport_is_not_vertically_symmetric() {
        let region = ComplexRect::new(Complex::new(-2.0, -1.0), Complex::new(1.0, 1.5)).unwrap();
        let viewport = Viewport::from_region(region, 16, 16).unwrap();

        assert!(!viewport.is_vertically_symmetric(16));
    }
}
