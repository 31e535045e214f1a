/// One row of a threshold table. Scores up to and including `upper` map to
/// `value`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Band<T> {
    pub upper: f64,
    pub value: T,
}

/// An ordered threshold table with inclusive upper bounds.
///
/// Rows are evaluated in ascending order and the first row whose bound is
/// not exceeded wins. Scores above every bound (and NaN) land in
/// `otherwise`. Every calculator in the workspace classifies through one of
/// these, so the tables are plain `static` data that tests can inspect
/// directly.
#[derive(Debug, Clone, Copy)]
pub struct BandTable<T: 'static> {
    pub bands: &'static [Band<T>],
    pub otherwise: T,
}

impl<T: 'static> BandTable<T> {
    pub const fn new(bands: &'static [Band<T>], otherwise: T) -> Self {
        Self { bands, otherwise }
    }

    /// Map a score to the value of its band.
    pub fn classify(&self, score: f64) -> &T {
        self.bands
            .iter()
            .find(|band| score <= band.upper)
            .map(|band| &band.value)
            .unwrap_or(&self.otherwise)
    }

    /// Bounds must strictly increase, otherwise later rows are unreachable.
    pub fn is_ascending(&self) -> bool {
        self.bands.windows(2).all(|w| w[0].upper < w[1].upper)
    }

    /// All values in evaluation order, `otherwise` last.
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.bands
            .iter()
            .map(|band| &band.value)
            .chain(std::iter::once(&self.otherwise))
    }

    /// Position of the band a score falls into, `bands.len()` for `otherwise`.
    /// Useful for comparing how serious two scores are without comparing labels.
    pub fn rank(&self, score: f64) -> usize {
        self.bands
            .iter()
            .position(|band| score <= band.upper)
            .unwrap_or(self.bands.len())
    }
}
