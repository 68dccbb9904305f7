pub trait Zero {
    fn zero() -> Self;
}

pub trait NegativeInfinity {
    fn negative_infinity() -> Self;
}

impl Zero for f64 {
    fn zero() -> Self {
        0.0
    }
}

impl Zero for f32 {
    fn zero() -> Self {
        0.0
    }
}
