use crate::*;
pub use fixed::*;
pub use random::*;

mod fixed;
mod random;

/// Source of the secretly correct label for each new round.
pub trait TargetGenerator {
    fn generate(&mut self) -> Label;
}

impl<G: TargetGenerator + ?Sized> TargetGenerator for &mut G {
    fn generate(&mut self) -> Label {
        (**self).generate()
    }
}
