use alloc::vec::Vec;

use super::*;

/// Replays a fixed list of targets, cycling when exhausted.
#[derive(Clone, Debug, PartialEq)]
pub struct FixedTargetGenerator {
    targets: Vec<Label>,
    next: usize,
}

impl FixedTargetGenerator {
    pub fn new(targets: impl IntoIterator<Item = Label>) -> Self {
        let mut targets: Vec<Label> = targets.into_iter().collect();
        if targets.is_empty() {
            log::warn!("No fixed targets given, fallback to {}", Label::MIN);
            targets.push(Label::MIN);
        }
        Self { targets, next: 0 }
    }

    pub fn single(target: Label) -> Self {
        Self::new([target])
    }
}

impl TargetGenerator for FixedTargetGenerator {
    fn generate(&mut self) -> Label {
        let target = self.targets[self.next % self.targets.len()];
        self.next = (self.next + 1) % self.targets.len();
        target
    }
}
