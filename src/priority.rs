use crate::traits::Zero;
use std::ops::{Add, Mul, Sub, SubAssign};

pub trait Priority:
    Zero + Copy + PartialOrd + Add<Output = Self> + Sub<Output = Self> + SubAssign + Mul<Output = Self>
{
}
impl<P> Priority for P where
    P: Zero + Copy + PartialOrd + Add<Output = Self> + Sub<Output = Self> + SubAssign + Mul<Output = Self>
{
}
