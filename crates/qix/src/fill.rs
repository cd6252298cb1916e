//! Scratch copy of the captured state used to size each side of a new wire.

/// Boolean snapshot of a square grid. Out-of-bounds reads count as captured.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaptureMask {
    size: usize,
    bits: Vec<bool>,
}

impl CaptureMask {
    #[must_use]
    pub fn new(size: usize, bits: Vec<bool>) -> Self {
        debug_assert_eq!(bits.len(), size * size);
        Self { size, bits }
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        let in_bounds = x >= 0 && (x as usize) < self.size && y >= 0 && (y as usize) < self.size;
        in_bounds.then(|| y as usize * self.size + x as usize)
    }

    #[must_use]
    pub fn is_set(&self, x: i32, y: i32) -> bool {
        match self.index(x, y) {
            Some(i) => self.bits[i],
            None => true,
        }
    }

    /// Marks every clear cell 4-connected to `(x, y)`. Stops at set cells.
    ///
    /// Uses an explicit stack so fill depth is bounded by heap, not call depth.
    pub fn flood_fill(&mut self, x: i32, y: i32) {
        let mut stack = vec![(x, y)];
        while let Some((cx, cy)) = stack.pop() {
            let Some(i) = self.index(cx, cy) else {
                continue;
            };
            if self.bits[i] {
                continue;
            }
            self.bits[i] = true;
            stack.push((cx - 1, cy));
            stack.push((cx + 1, cy));
            stack.push((cx, cy - 1));
            stack.push((cx, cy + 1));
        }
    }

    #[must_use]
    pub fn count(&self) -> usize {
        self.bits.iter().filter(|&&b| b).count()
    }

    #[must_use]
    pub fn into_bits(self) -> Vec<bool> {
        self.bits
    }
}
