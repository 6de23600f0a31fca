// src/surface.rs

//! Defines the `Surface` snapshot: an N×N grid of measured heights plus
//! the scan metadata (rms reference, correlation lengths) that rides along
//! into the rendered text header.
//!
//! A `Surface` is a plain value. Encoders clone it on construction and on
//! rebind, so nothing downstream ever mutates a caller's copy.

use log::warn;

use crate::error::EncodeError;

/// One measured grid point: its position in the natural scan order and
/// the height sampled there.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SamplePoint {
    /// Position in the surface's scan order (row-major over the grid).
    pub index: usize,
    /// Measured height at this point.
    pub height: f64,
}

/// An N×N grid of height samples with its scan metadata.
///
/// `clx`/`cly` are correlation-length parameters carried through to the
/// rendered header unchanged; the encoding core never interprets them.
#[derive(Debug, Clone, PartialEq)]
pub struct Surface {
    n: usize,
    rms: f64,
    clx: f64,
    cly: f64,
    points: Vec<SamplePoint>,
}

impl Surface {
    /// Builds a surface from row-major heights. `heights.len()` must equal
    /// `n * n`; scan indices are assigned in input order.
    pub fn new(n: usize, rms: f64, clx: f64, cly: f64, heights: Vec<f64>) -> Result<Self, EncodeError> {
        let expected = n * n;
        if n == 0 || heights.len() != expected {
            return Err(EncodeError::GridMismatch {
                n,
                expected,
                got: heights.len(),
            });
        }
        let points = heights
            .into_iter()
            .enumerate()
            .map(|(index, height)| SamplePoint { index, height })
            .collect();
        Ok(Surface {
            n,
            rms,
            clx,
            cly,
            points,
        })
    }

    /// Grid side length N (total sample count is N²).
    pub fn side_len(&self) -> usize {
        self.n
    }

    /// Total number of samples.
    pub fn total(&self) -> usize {
        self.points.len()
    }

    /// Root-mean-square reference height.
    pub fn rms(&self) -> f64 {
        self.rms
    }

    /// Correlation length along x (opaque metadata).
    pub fn clx(&self) -> f64 {
        self.clx
    }

    /// Correlation length along y (opaque metadata).
    pub fn cly(&self) -> f64 {
        self.cly
    }

    /// Samples in natural scan order.
    pub fn points(&self) -> &[SamplePoint] {
        &self.points
    }

    /// Heights sorted ascending. Feeds the equal-population-by-height
    /// boundary walk.
    pub fn sorted_heights(&self) -> Vec<f64> {
        let mut heights: Vec<f64> = self.points.iter().map(|p| p.height).collect();
        heights.sort_by(f64::total_cmp);
        heights
    }

    /// Absolute deviations `|height − rms|` sorted ascending. Feeds the
    /// equal-population-by-deviation boundary walk.
    pub fn sorted_deviations(&self) -> Vec<f64> {
        let mut devs: Vec<f64> = self
            .points
            .iter()
            .map(|p| (p.height - self.rms).abs())
            .collect();
        devs.sort_by(f64::total_cmp);
        devs
    }

    /// Rescales every height by `new_rms / rms` and adopts `new_rms` as
    /// the reference. With a zero reference there is no meaningful scale
    /// factor, so only the reference is replaced.
    pub fn rescale(&mut self, new_rms: f64) {
        if self.rms == 0.0 {
            warn!("rescale on surface with rms 0: heights left unchanged");
            self.rms = new_rms;
            return;
        }
        let factor = new_rms / self.rms;
        for p in self.points.iter_mut() {
            p.height *= factor;
        }
        self.rms = new_rms;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(n: usize, heights: Vec<f64>) -> Surface {
        Surface::new(n, 1.0, 0.5, 0.5, heights).expect("valid test grid")
    }

    #[test]
    fn test_grid_shape_enforced() {
        let err = Surface::new(2, 1.0, 0.0, 0.0, vec![1.0, 2.0, 3.0]).unwrap_err();
        assert!(matches!(err, EncodeError::GridMismatch { n: 2, expected: 4, got: 3 }));

        let err = Surface::new(0, 1.0, 0.0, 0.0, vec![]).unwrap_err();
        assert!(matches!(err, EncodeError::GridMismatch { n: 0, .. }));
    }

    #[test]
    fn test_scan_order_preserved() {
        let s = grid(2, vec![4.0, -1.0, 0.0, 2.5]);
        let indices: Vec<usize> = s.points().iter().map(|p| p.index).collect();
        assert_eq!(indices, vec![0, 1, 2, 3]);
        assert_eq!(s.points()[1].height, -1.0);
        assert_eq!(s.total(), 4);
        assert_eq!(s.side_len(), 2);
    }

    #[test]
    fn test_sorted_heights() {
        let s = grid(2, vec![4.0, -1.0, 0.0, 2.5]);
        assert_eq!(s.sorted_heights(), vec![-1.0, 0.0, 2.5, 4.0]);
        // original scan order untouched
        assert_eq!(s.points()[0].height, 4.0);
    }

    #[test]
    fn test_sorted_deviations() {
        let s = grid(2, vec![4.0, -1.0, 1.0, 2.5]); // rms = 1.0
        assert_eq!(s.sorted_deviations(), vec![0.0, 1.5, 2.0, 3.0]);
    }

    #[test]
    fn test_rescale() {
        let mut s = grid(2, vec![4.0, -1.0, 0.0, 2.5]); // rms = 1.0
        s.rescale(10.0);
        assert_eq!(s.rms(), 10.0);
        assert_eq!(s.points()[0].height, 40.0);
        assert_eq!(s.points()[1].height, -10.0);
    }

    #[test]
    fn test_rescale_zero_rms() {
        let mut s = Surface::new(1, 0.0, 0.0, 0.0, vec![3.0]).unwrap();
        s.rescale(2.0);
        assert_eq!(s.rms(), 2.0);
        assert_eq!(s.points()[0].height, 3.0);
    }
}
