use rand::Rng;

/// Source of uniformly distributed choices for fleet placement and computer
/// targeting.
pub trait RandomSource {
    /// A uniformly chosen integer in `min..=max`.
    fn uniform_int(&mut self, min: u8, max: u8) -> u8;
}

impl<R: Rng + ?Sized> RandomSource for R {
    fn uniform_int(&mut self, min: u8, max: u8) -> u8 {
        self.random_range(min..=max)
    }
}
