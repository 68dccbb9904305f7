use super::SumTree;
use crate::error::TreeError;
use crate::priority::Priority;
use rand::distributions::{Distribution, Standard};
use rand::Rng;

impl<P: Priority> SumTree<P>
where
    Standard: Distribution<P>,
{
    /// Draws a slot with probability proportional to its priority.
    pub fn sample<R>(&self, rng: &mut R) -> Result<(usize, P), TreeError>
    where
        R: Rng,
    {
        self.find(rng.gen::<P>())
    }

    /// Draws a slot from the cumulative-priority stratum
    /// `[range_start, range_end)`, both given as fractions of the total.
    pub fn sample_from_range<R>(
        &self,
        range_start: P,
        range_end: P,
        rng: &mut R,
    ) -> Result<(usize, P), TreeError>
    where
        R: Rng,
    {
        let fraction = range_start + rng.gen::<P>() * (range_end - range_start);
        self.find(fraction)
    }
}
