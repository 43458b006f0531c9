//! Rasterizing a noise field into heightmaps and curves.
//!
//! Rows are filled in parallel. Sampling is pure, so the output is identical
//! to calling [`ValueNoise::sample_2d`] cell by cell.

use std::time::Instant;

use glam::DVec2;
use rayon::prelude::*;

use crate::error::NoiseError;
use crate::sampler::ValueNoise;

/// A row-major 2D raster of noise values.
#[derive(Debug, Clone, PartialEq)]
pub struct NoiseGrid {
    width: usize,
    height: usize,
    values: Vec<f64>,
}

impl NoiseGrid {
    /// Width in cells.
    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Height in cells.
    #[must_use]
    pub const fn height(&self) -> usize {
        self.height
    }

    /// All values, row by row.
    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Consumes the grid, returning its row-major values.
    #[must_use]
    pub fn into_values(self) -> Vec<f64> {
        self.values
    }

    /// The value at column `x`, row `y`, or `None` outside the grid.
    #[must_use]
    pub fn get(&self, x: usize, y: usize) -> Option<f64> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.values.get(y * self.width + x).copied()
    }

    /// The smallest and largest values in the grid.
    #[must_use]
    pub fn min_max(&self) -> (f64, f64) {
        self.values
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(min, max), &v| {
                (min.min(v), max.max(v))
            })
    }
}

impl ValueNoise {
    /// Fill a `width` x `height` grid where cell `(i, j)` samples
    /// `origin + (i, j) * spacing`.
    ///
    /// Fails if the grid is empty or any corner lies outside the sampler's
    /// coordinate range.
    #[tracing::instrument(level = "trace", skip(self))]
    pub fn fill_grid(
        &self,
        origin: DVec2,
        spacing: f64,
        width: usize,
        height: usize,
    ) -> Result<NoiseGrid, NoiseError> {
        let len = width
            .checked_mul(height)
            .filter(|&len| len > 0)
            .ok_or(NoiseError::InvalidGrid { width, height })?;
        let far = origin + DVec2::new((width - 1) as f64, (height - 1) as f64) * spacing;
        for coord in [origin.x, origin.y, far.x, far.y] {
            self.check_coordinate(coord)?;
        }

        let start = Instant::now();
        let mut values = vec![0.0; len];
        values
            .par_chunks_mut(width)
            .enumerate()
            .for_each(|(row, cells)| {
                let y = origin.y + row as f64 * spacing;
                for (col, cell) in cells.iter_mut().enumerate() {
                    *cell = self.sample_2d(origin.x + col as f64 * spacing, y);
                }
            });
        tracing::debug!(width, height, elapsed = ?start.elapsed(), "Noise grid filled");

        Ok(NoiseGrid {
            width,
            height,
            values,
        })
    }

    /// Sample `len` points of the 1D field starting at `start`, `step` apart.
    ///
    /// Fails if either end of the line lies outside the sampler's coordinate
    /// range.
    pub fn fill_line(&self, start: f64, step: f64, len: usize) -> Result<Vec<f64>, NoiseError> {
        if len > 0 {
            self.check_coordinate(start)?;
            self.check_coordinate(start + (len - 1) as f64 * step)?;
        }
        Ok((0..len)
            .into_par_iter()
            .map(|i| self.sample_1d(start + i as f64 * step))
            .collect())
    }
}
