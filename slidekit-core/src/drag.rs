//! Pointer drag gesture: elastic offset tracking and the swipe decision made
//! when the pointer is released.

/// Drag distance is divided by this to get the rubber-band allowance past
/// either end of the track.
pub const EASING_DIVISOR: f32 = 5.0;

/// Direction of a committed swipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    /// Pointer moved right; reveal the previous slide.
    Backward,
    /// Pointer moved left; reveal the next slide.
    Forward,
}

impl SwipeDirection {
    pub fn apply(self, index: usize) -> usize {
        match self {
            SwipeDirection::Backward => index.saturating_sub(1),
            SwipeDirection::Forward => index + 1,
        }
    }
}

/// Offset for a drag of `drag_shift` pixels starting at `start_x`. Inside
/// the track it follows the pointer; past either end it is held to a fifth
/// of the drag distance beyond the boundary.
pub fn elastic_offset(start_x: f32, drag_shift: f32, maximum_x: f32) -> f32 {
    let easing = drag_shift / EASING_DIVISOR;
    (start_x + drag_shift).min(easing).max(maximum_x + easing)
}

/// State of one pointer-down .. pointer-up gesture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    click_x: f32,
    start_x: f32,
    drag_shift: f32,
    committed: bool,
}

impl DragSession {
    pub fn begin(pointer_x: f32, offset: f32) -> Self {
        Self {
            click_x: pointer_x,
            start_x: offset,
            drag_shift: 0.0,
            committed: false,
        }
    }

    pub fn click_x(&self) -> f32 {
        self.click_x
    }

    pub fn start_x(&self) -> f32 {
        self.start_x
    }

    pub fn drag_shift(&self) -> f32 {
        self.drag_shift
    }

    pub fn committed(&self) -> bool {
        self.committed
    }

    /// Track the pointer and return the new offset.
    pub fn update(&mut self, pointer_x: f32, maximum_x: f32) -> f32 {
        self.drag_shift = pointer_x - self.click_x;
        elastic_offset(self.start_x, self.drag_shift, maximum_x)
    }

    /// Re-base the session after the track geometry changed mid-drag. The
    /// accumulated shift is kept so the release decision is unaffected.
    pub fn rebase(&mut self, start_x: f32) {
        self.start_x = start_x;
    }

    /// Decide whether the gesture moves the carousel. At most one
    /// direction is ever returned per session.
    pub fn resolve(
        &mut self,
        current_slide: usize,
        size: usize,
        sensitivity: f32,
    ) -> Option<SwipeDirection> {
        if self.committed {
            return None;
        }
        let direction = if self.drag_shift > sensitivity && current_slide > 0
        {
            Some(SwipeDirection::Backward)
        } else if self.drag_shift < -sensitivity
            && current_slide + 1 < size
        {
            Some(SwipeDirection::Forward)
        } else {
            None
        };
        if direction.is_some() {
            self.committed = true;
        }
        direction
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn move_inside_track_follows_pointer() {
        let mut session = DragSession::begin(100.0, 0.0);
        let x = session.update(40.0, -300.0);
        assert_eq!(session.drag_shift(), -60.0);
        assert_eq!(x, -60.0);
    }

    #[test]
    fn pulling_past_start_is_softened() {
        let mut session = DragSession::begin(0.0, 0.0);
        assert_eq!(session.update(100.0, -300.0), 20.0);
    }

    #[test]
    fn pulling_past_end_is_softened() {
        let mut session = DragSession::begin(500.0, -300.0);
        // shift -100, easing -20: lower bound is -320
        assert_eq!(session.update(400.0, -300.0), -320.0);
    }

    #[test]
    fn swipe_left_past_threshold_moves_forward() {
        let mut session = DragSession::begin(100.0, 0.0);
        session.update(50.0, -420.0);
        assert_eq!(session.resolve(0, 3, 40.0), Some(SwipeDirection::Forward));
        assert!(session.committed());
    }

    #[test]
    fn shift_equal_to_sensitivity_does_not_commit() {
        let mut forward = DragSession::begin(100.0, 0.0);
        forward.update(60.0, -620.0);
        assert_eq!(forward.drag_shift(), -40.0);
        assert_eq!(forward.resolve(0, 3, 40.0), None);

        let mut backward = DragSession::begin(100.0, -310.0);
        backward.update(140.0, -620.0);
        assert_eq!(backward.drag_shift(), 40.0);
        assert_eq!(backward.resolve(1, 3, 40.0), None);
        assert!(!backward.committed());
    }

    #[test]
    fn short_swipe_is_ignored() {
        let mut session = DragSession::begin(100.0, 0.0);
        session.update(70.0, -420.0);
        assert_eq!(session.resolve(0, 3, 40.0), None);
        assert!(!session.committed());
    }

    #[test]
    fn swipe_right_on_first_slide_is_ignored() {
        let mut session = DragSession::begin(0.0, 0.0);
        session.update(90.0, -420.0);
        assert_eq!(session.resolve(0, 3, 40.0), None);
    }

    #[test]
    fn swipe_right_moves_backward() {
        let mut session = DragSession::begin(0.0, -210.0);
        session.update(90.0, -420.0);
        assert_eq!(
            session.resolve(1, 3, 40.0),
            Some(SwipeDirection::Backward)
        );
        assert_eq!(SwipeDirection::Backward.apply(1), 0);
    }

    #[test]
    fn session_commits_at_most_once() {
        let mut session = DragSession::begin(100.0, 0.0);
        session.update(0.0, -420.0);
        assert!(session.resolve(0, 3, 40.0).is_some());
        assert_eq!(session.resolve(1, 3, 40.0), None);
    }

    #[test]
    fn swipe_forward_on_last_slide_is_ignored() {
        let mut session = DragSession::begin(100.0, -420.0);
        session.update(0.0, -420.0);
        assert_eq!(session.resolve(2, 3, 40.0), None);
    }
}
