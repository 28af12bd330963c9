//! View state controller.
//!
//! Holds the only mutable state of the dashboard: which top-level view is
//! shown and which story step is current. Every operation is total and keeps
//! `1 <= current_step <= STORY_STEP_COUNT`.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::dataset::STORY_STEP_COUNT;

pub const FIRST_STEP: usize = 1;
pub const LAST_STEP: usize = STORY_STEP_COUNT;

/// Top-level view selected in the navigation bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum View {
    #[default]
    Story,
    Overview,
}

impl View {
    /// Navigation bar order.
    pub fn all() -> &'static [View] {
        &[View::Story, View::Overview]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Story => "story",
            Self::Overview => "overview",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Story => "🎤 3-Min Story",
            Self::Overview => "📊 Overview",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "story" => Some(Self::Story),
            "overview" => Some(Self::Overview),
            _ => None,
        }
    }
}

impl fmt::Display for View {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Direction of a single-step move through the story.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StepDirection {
    Previous,
    Next,
}

impl StepDirection {
    fn apply(
        self,
        step: usize,
    ) -> usize {
        match self {
            Self::Previous => step.saturating_sub(1),
            Self::Next => step.saturating_add(1),
        }
        .clamp(FIRST_STEP, LAST_STEP)
    }
}

/// Current navigation state.
///
/// ```
/// use wine_core::navigation::{StepDirection, View, ViewState};
///
/// let mut state = ViewState::default();
/// state.advance_step(StepDirection::Next);
/// state.select_view(View::Overview);
///
/// assert_eq!(state.current_step(), 2);
/// assert_eq!(state.selected_view(), View::Overview);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ViewState {
    selected_view: View,
    current_step: usize,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            selected_view: View::Story,
            current_step: FIRST_STEP,
        }
    }
}

impl ViewState {
    /// Creates a state for the given view and step; the step is clamped.
    pub fn new(
        view: View,
        step: usize,
    ) -> Self {
        let mut state = Self {
            selected_view: view,
            ..Self::default()
        };
        state.go_to_step(step);
        state
    }

    pub fn selected_view(&self) -> View {
        self.selected_view
    }

    /// 1-based step number.
    pub fn current_step(&self) -> usize {
        self.current_step
    }

    /// 0-based index into the story steps.
    pub fn step_index(&self) -> usize {
        self.current_step - FIRST_STEP
    }

    pub fn select_view(
        &mut self,
        view: View,
    ) {
        if self.selected_view != view {
            debug!(from = %self.selected_view, to = %view, "view selected");
        }
        self.selected_view = view;
    }

    /// Jumps straight to step `n`, clamping into `[1, STORY_STEP_COUNT]`.
    pub fn go_to_step(
        &mut self,
        n: usize,
    ) {
        let clamped = n.clamp(FIRST_STEP, LAST_STEP);
        if clamped != n {
            warn!(requested = n, clamped, "story step out of range");
        }
        if clamped != self.current_step {
            debug!(from = self.current_step, to = clamped, "story step changed");
        }
        self.current_step = clamped;
    }

    /// Moves one step; a no-op at either end of the story.
    pub fn advance_step(
        &mut self,
        direction: StepDirection,
    ) {
        let next = direction.apply(self.current_step);
        if next == self.current_step {
            debug!(step = self.current_step, ?direction, "already at story boundary");
            return;
        }
        debug!(from = self.current_step, to = next, "story step advanced");
        self.current_step = next;
    }

    /// Whether [`advance_step`](Self::advance_step) would change anything.
    pub fn can_advance(
        &self,
        direction: StepDirection,
    ) -> bool {
        direction.apply(self.current_step) != self.current_step
    }

    pub fn can_go_previous(&self) -> bool {
        self.can_advance(StepDirection::Previous)
    }

    pub fn can_go_next(&self) -> bool {
        self.can_advance(StepDirection::Next)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn default_is_story_at_step_one() {
        let state = ViewState::default();

        assert_eq!(state.selected_view(), View::Story);
        assert_eq!(state.current_step(), 1);
        assert_eq!(state.step_index(), 0);
    }

    #[test]
    fn new_clamps_step() {
        assert_eq!(ViewState::new(View::Overview, 0).current_step(), 1);
        assert_eq!(ViewState::new(View::Overview, 9).current_step(), 4);
        assert_eq!(ViewState::new(View::Story, 3).current_step(), 3);
    }

    #[test]
    fn go_to_step_clamps_out_of_range_values() {
        let mut state = ViewState::default();

        state.go_to_step(0);
        assert_eq!(state.current_step(), 1);

        state.go_to_step(usize::MAX);
        assert_eq!(state.current_step(), 4);
    }

    #[test]
    fn advance_step_saturates_at_both_ends() {
        let mut state = ViewState::default();
        state.advance_step(StepDirection::Previous);
        assert_eq!(state.current_step(), 1);

        state.go_to_step(4);
        state.advance_step(StepDirection::Next);
        assert_eq!(state.current_step(), 4);
    }

    #[test]
    fn affordances_disable_at_boundaries() {
        let mut state = ViewState::default();
        assert!(!state.can_go_previous());
        assert!(state.can_go_next());

        state.go_to_step(2);
        assert!(state.can_go_previous());
        assert!(state.can_go_next());

        state.go_to_step(4);
        assert!(state.can_go_previous());
        assert!(!state.can_go_next());
    }

    #[test]
    fn select_view_leaves_step_alone() {
        let mut state = ViewState::new(View::Story, 3);
        state.select_view(View::Overview);

        assert_eq!(state, ViewState::new(View::Overview, 3));
    }

    #[test]
    fn view_parse_is_case_insensitive() {
        assert_eq!(View::parse("Story"), Some(View::Story));
        assert_eq!(View::parse(" OVERVIEW "), Some(View::Overview));
        assert_eq!(View::parse("charts"), None);
    }

    #[test]
    fn view_deserializes_from_lowercase() {
        #[derive(Deserialize)]
        struct Wrapper {
            view: View,
        }

        let parsed: Wrapper = toml::from_str("view = \"overview\"").unwrap();
        assert_eq!(parsed.view, View::Overview);
    }
}
