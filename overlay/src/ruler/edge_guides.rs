// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{InlineString, InlineVec, inline_string};

/// Shift+click within this many units of an existing guide removes it.
pub const GUIDE_HIT_TOLERANCE: f64 = 6.0;

/// A vertical marker line across the ruler at `position` (ruler local `x`).
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeGuide {
    pub position: f64,
    /// Always pixels, eg: `"123px"`.
    pub label: InlineString,
}

impl EdgeGuide {
    #[must_use]
    pub fn new(position: f64) -> Self {
        Self {
            position,
            label: inline_string!("{position:.0}px"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuideToggle {
    Added,
    Removed,
}

/// Guides live for the session only, they are not persisted.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EdgeGuides {
    guides: InlineVec<EdgeGuide>,
}

impl EdgeGuides {
    /// Remove the first guide within [`GUIDE_HIT_TOLERANCE`] of `position`, or add one
    /// there if there is none.
    pub fn toggle_at(&mut self, position: f64) -> GuideToggle {
        let hit = self
            .guides
            .iter()
            .position(|it| (it.position - position).abs() <= GUIDE_HIT_TOLERANCE);

        match hit {
            Some(index) => {
                self.guides.remove(index);
                GuideToggle::Removed
            }
            None => {
                self.guides.push(EdgeGuide::new(position));
                GuideToggle::Added
            }
        }
    }

    pub fn clear(&mut self) { self.guides.clear(); }

    #[must_use]
    pub fn as_slice(&self) -> &[EdgeGuide] { &self.guides }

    #[must_use]
    pub fn len(&self) -> usize { self.guides.len() }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.guides.is_empty() }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_eq2;

    #[test]
    fn test_toggle() {
        let mut guides = EdgeGuides::default();
        assert_eq2!(guides.toggle_at(120.4), GuideToggle::Added);
        assert_eq2!(guides.as_slice()[0].label, "120px");

        assert_eq2!(guides.toggle_at(200.0), GuideToggle::Added);
        // Within 6 of 120.4.
        assert_eq2!(guides.toggle_at(126.0), GuideToggle::Removed);
        assert_eq2!(guides.len(), 1);
        assert_eq2!(guides.as_slice()[0].position, 200.0);

        // 7 away, so a new guide.
        assert_eq2!(guides.toggle_at(207.0), GuideToggle::Added);
        guides.clear();
        assert!(guides.is_empty());
    }
}
