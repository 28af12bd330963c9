use std::fmt;

use serde::{Deserialize, Serialize};

/// Which visual accompanies a story step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VisualKind {
    #[default]
    Problem,
    Discovery,
    Proof,
    Impact,
}

impl VisualKind {
    /// The order in which the narrative presents the visuals.
    pub fn all() -> &'static [VisualKind] {
        &[
            VisualKind::Problem,
            VisualKind::Discovery,
            VisualKind::Proof,
            VisualKind::Impact,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Problem => "problem",
            Self::Discovery => "discovery",
            Self::Proof => "proof",
            Self::Impact => "impact",
        }
    }
}

impl fmt::Display for VisualKind {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One page of the narrated presentation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoryStep {
    pub title: String,
    pub subtitle: String,
    pub content: String,
    pub stats_text: String,
    pub visual: VisualKind,
}
