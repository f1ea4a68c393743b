//! Transient view state of the card and its two-state machine.

use super::evasion::{self, ButtonPlacement, ContainerSize, EvasionBox};
use crate::rng::RandomSource;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Question,
    Accepted,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct CardState {
    accepted: bool,
    placement: ButtonPlacement,
    evasion_count: u32,
}

impl CardState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> Phase {
        if self.accepted { Phase::Accepted } else { Phase::Question }
    }

    pub fn is_accepted(&self) -> bool {
        self.accepted
    }

    pub fn placement(&self) -> ButtonPlacement {
        self.placement
    }

    pub fn evasion_count(&self) -> u32 {
        self.evasion_count
    }

    /// Move the "No" button and bump the counter. Returns the new placement, or
    /// `None` (state untouched) when the container has not been measured.
    pub fn evade(
        &mut self,
        container: Option<ContainerSize>,
        geom: EvasionBox,
        rng: &mut dyn RandomSource,
    ) -> Option<ButtonPlacement> {
        let container = container?;
        self.placement = evasion::place_button(container, geom, rng);
        self.evasion_count = self.evasion_count.saturating_add(1);
        Some(self.placement)
    }

    /// Question -> Accepted. Returns `false` when already accepted, in which
    /// case nothing changes and no celebration should start.
    pub fn accept(&mut self) -> bool {
        if self.accepted {
            return false;
        }
        self.accepted = true;
        true
    }

    /// Back to the pristine question view.
    pub fn replay(&mut self) {
        *self = Self::default();
    }
}
