//! Binary raster mask.

/// Row-major binary mask, `data.len() == width * height`, values 0 or 1.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Mask {
    pub width: usize,
    pub height: usize,
    pub data: Vec<u8>,
}

impl Mask {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            data: vec![0; width * height],
        }
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height && self.data[y * self.width + x] != 0
    }

    #[inline]
    pub fn set(&mut self, x: usize, y: usize) {
        if x < self.width && y < self.height {
            self.data[y * self.width + x] = 1;
        }
    }

    /// Set pixels `x0..x1` of row `y`; the span must already be clamped.
    #[inline]
    pub(crate) fn set_span(&mut self, y: usize, x0: usize, x1: usize) {
        let row = y * self.width;
        self.data[row + x0..row + x1].fill(1);
    }

    /// Number of set pixels.
    pub fn count(&self) -> usize {
        self.data.iter().filter(|&&v| v != 0).count()
    }

    /// Pixel-wise AND. Panics in debug builds on mismatched extents.
    pub fn and(&self, other: &Mask) -> Mask {
        debug_assert_eq!((self.width, self.height), (other.width, other.height));
        Mask {
            width: self.width,
            height: self.height,
            data: self
                .data
                .iter()
                .zip(&other.data)
                .map(|(a, b)| a & b)
                .collect(),
        }
    }

    /// `self.and(other).count()` without allocating.
    pub fn and_count(&self, other: &Mask) -> usize {
        debug_assert_eq!((self.width, self.height), (other.width, other.height));
        self.data
            .iter()
            .zip(&other.data)
            .filter(|(a, b)| **a & **b != 0)
            .count()
    }
}
