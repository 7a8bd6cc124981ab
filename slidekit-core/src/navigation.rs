//! Boundary button and dot indicator state.

use slidekit_model::NavControl;

/// Presentation flags derived from the current slide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavState {
    pub left_disabled: bool,
    pub right_disabled: bool,
    pub active_dot: usize,
}

impl NavState {
    pub fn derive(current_slide: usize, size: usize) -> Self {
        Self {
            left_disabled: current_slide == 0,
            right_disabled: current_slide == size.saturating_sub(1),
            active_dot: current_slide,
        }
    }

    pub fn is_disabled(&self, control: NavControl) -> bool {
        match control {
            NavControl::Left => self.left_disabled,
            NavControl::Right => self.right_disabled,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundaries_disable_their_control() {
        let first = NavState::derive(0, 4);
        assert!(first.left_disabled);
        assert!(!first.right_disabled);

        let middle = NavState::derive(2, 4);
        assert!(!middle.is_disabled(NavControl::Left));
        assert!(!middle.is_disabled(NavControl::Right));

        let last = NavState::derive(3, 4);
        assert!(!last.left_disabled);
        assert!(last.right_disabled);
        assert_eq!(last.active_dot, 3);
    }

    #[test]
    fn both_disabled_only_for_single_slide() {
        for size in 1..6 {
            for current in 0..size {
                let nav = NavState::derive(current, size);
                assert_eq!(
                    nav.left_disabled && nav.right_disabled,
                    size == 1,
                    "current={current} size={size}"
                );
            }
        }
    }
}
