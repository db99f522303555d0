// ABOUTME: Read-only presentation of a set item (completed summary, labels, input visibility)
// ABOUTME: Each variant decides which of weight, reps, and tiers it shows
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftlog Contributors

use super::{SetItem, SetKind};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;

/// Visual weight of a text fragment
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Emphasis {
    /// Headline value (the load)
    Primary,
    /// Supporting value (reps, tiers)
    Secondary,
}

/// One piece of a completed set's summary line
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum DisplayFragment {
    /// Plain text
    Text {
        /// Rendered text
        text: String,
        /// Visual weight
        emphasis: Emphasis,
    },
    /// Completion time
    Timestamp {
        /// When the set was completed
        time: DateTime<Utc>,
    },
}

impl DisplayFragment {
    fn primary(text: String) -> Self {
        Self::Text {
            text,
            emphasis: Emphasis::Primary,
        }
    }

    fn secondary(text: String) -> Self {
        Self::Text {
            text,
            emphasis: Emphasis::Secondary,
        }
    }
}

impl fmt::Display for DisplayFragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text { text, .. } => f.write_str(text),
            Self::Timestamp { time } => write!(f, "{}", time.format("%H:%M")),
        }
    }
}

impl SetItem {
    /// Summary fragments shown once the set is completed
    #[must_use]
    pub fn completed_display(&self) -> Vec<DisplayFragment> {
        let mut display = Vec::new();
        match &self.kind {
            SetKind::Warmup { .. } => {}
            SetKind::Normal { weight, reps } => {
                if let Some(w) = weight.filter(|w| !self.is_bodyweight && *w != 0.0) {
                    display.push(DisplayFragment::primary(format!("{w} kg")));
                }
                display.push(DisplayFragment::secondary(format!("{reps} reps")));
            }
            SetKind::Bodyweight { reps } => {
                display.push(DisplayFragment::secondary(format!("{reps} reps")));
            }
            SetKind::Dropdown { tiers } => {
                display.extend(tiers.iter().map(|tier| {
                    DisplayFragment::secondary(format!("{}kg x {}", tier.weight, tier.reps))
                }));
            }
        }
        if let Some(time) = self.completed_at {
            display.push(DisplayFragment::Timestamp { time });
        }
        display
    }

    /// Row label: "W" for warmups, otherwise the set number
    #[must_use]
    pub fn set_display_label(&self) -> String {
        match self.kind {
            SetKind::Warmup { .. } => "W".to_owned(),
            _ => self.set_number.to_string(),
        }
    }

    /// Short badge naming the variant (empty for plain working sets)
    #[must_use]
    pub const fn badge_label(&self) -> &'static str {
        match self.kind {
            SetKind::Warmup { .. } => "Warmup",
            SetKind::Normal { .. } => "",
            SetKind::Bodyweight { .. } => "BW",
            SetKind::Dropdown { .. } => "Dropdown",
        }
    }

    /// Whether the editor offers a weight field
    #[must_use]
    pub const fn shows_weight_input(&self) -> bool {
        match self.kind {
            SetKind::Warmup { .. } | SetKind::Bodyweight { .. } => false,
            SetKind::Normal { .. } | SetKind::Dropdown { .. } => !self.is_bodyweight,
        }
    }

    /// Whether the editor offers a reps field
    #[must_use]
    pub const fn shows_reps_input(&self) -> bool {
        !matches!(self.kind, SetKind::Warmup { .. })
    }
}
