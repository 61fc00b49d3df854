// Copyright 2025 the Bedplan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag gesture state: where the object was grabbed.
//!
//! ## Usage
//!
//! 1) Start a gesture with [`DragGesture::start`], passing the offset from the
//!    object's on-screen top-left to the pointer.
//! 2) On each move, use [`DragGesture::grab_offset`] to place the object under
//!    the pointer.
//! 3) End the gesture with [`DragGesture::end`].
//!
//! The grab offset is captured once and reused for the whole gesture so the
//! object does not jump to put its corner under the pointer.
//!
//! ```
//! use kurbo::Vec2;
//! use bedplan_layout::DragGesture;
//!
//! let mut drag = DragGesture::default();
//! drag.start(Vec2::new(8.0, 12.0));
//! assert!(drag.is_dragging());
//! assert_eq!(drag.grab_offset(), Some(Vec2::new(8.0, 12.0)));
//!
//! drag.end();
//! assert!(!drag.is_dragging());
//! ```

use kurbo::Vec2;

/// Tracks one pointer or touch drag of the object.
#[derive(Debug, Clone, Default, Copy)]
pub struct DragGesture {
    grab: Option<Vec2>,
}

impl DragGesture {
    /// Starts a gesture holding the object at `grab` from its on-screen top-left.
    pub fn start(&mut self, grab: Vec2) {
        self.grab = Some(grab);
    }

    /// The grab offset captured at the start of the gesture.
    pub fn grab_offset(&self) -> Option<Vec2> {
        self.grab
    }

    /// Ends the gesture and forgets its state.
    pub fn end(&mut self) {
        *self = Self::default();
    }

    /// Returns `true` while a gesture is active.
    pub fn is_dragging(&self) -> bool {
        self.grab.is_some()
    }
}

#[cfg(test)]
mod tests {
    use kurbo::Vec2;

    use super::DragGesture;

    #[test]
    fn idle_gesture_reports_nothing() {
        let drag = DragGesture::default();
        assert!(!drag.is_dragging());
        assert_eq!(drag.grab_offset(), None);
    }

    #[test]
    fn restart_replaces_grab_offset() {
        let mut drag = DragGesture::default();
        drag.start(Vec2::new(1.0, 2.0));
        drag.start(Vec2::new(3.0, 4.0));
        assert_eq!(drag.grab_offset(), Some(Vec2::new(3.0, 4.0)));
    }

    #[test]
    fn end_clears_grab_offset() {
        let mut drag = DragGesture::default();
        drag.start(Vec2::new(1.0, 1.0));
        drag.end();
        assert!(!drag.is_dragging());
        assert_eq!(drag.grab_offset(), None);
    }
}
