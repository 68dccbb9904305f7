// wrapper type giving the max tree a minimal "unset" value
// without borrowing an actual -inf sentinel from the priority
// type, which may not have one

use crate::traits::NegativeInfinity;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct MaxNode<P>(Option<P>);

impl<P> NegativeInfinity for MaxNode<P> {
    fn negative_infinity() -> Self {
        MaxNode(None)
    }
}

impl<P: PartialEq> PartialEq for MaxNode<P> {
    fn eq(&self, other: &Self) -> bool {
        match (&self.0, &other.0) {
            (None, None) => true,
            (Some(lhs), Some(rhs)) => lhs == rhs,
            _ => false,
        }
    }
}

impl<P: PartialOrd> PartialOrd for MaxNode<P> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (&self.0, &other.0) {
            (None, None) => Some(Ordering::Equal),
            (Some(lhs), Some(rhs)) => lhs.partial_cmp(rhs),
            (None, Some(_)) => Some(Ordering::Less),
            (Some(_), None) => Some(Ordering::Greater),
        }
    }
}

impl<P> From<MaxNode<P>> for Option<P> {
    fn from(value: MaxNode<P>) -> Self {
        value.0
    }
}

impl<P> From<P> for MaxNode<P> {
    fn from(value: P) -> Self {
        MaxNode(Some(value))
    }
}
