// ABOUTME: Edit-form and last-used payloads exchanged between the set list and its editor
// ABOUTME: Dropdown forms carry one weight/reps pair per tier
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftlog Contributors

use super::DropTier;
use crate::constants::prescription::DEFAULT_REPS;
use serde::{Deserialize, Serialize};

/// Weight/reps of one dropdown tier inside a form
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct TierForm {
    /// Tier load (kg)
    pub weight: f64,
    /// Tier reps
    pub reps: u32,
}

impl From<&DropTier> for TierForm {
    fn from(tier: &DropTier) -> Self {
        Self {
            weight: tier.weight,
            reps: tier.reps,
        }
    }
}

/// Values entered when completing a set
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SetForm {
    /// Load (kg); ignored for bodyweight sets
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    /// Repetitions
    pub reps: u32,
    /// Per-tier values for dropdown sets
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_sets: Option<Vec<TierForm>>,
}

impl SetForm {
    /// Form for a weighted set
    #[must_use]
    pub const fn weighted(weight: f64, reps: u32) -> Self {
        Self {
            weight: Some(weight),
            reps,
            sub_sets: None,
        }
    }

    /// Form for a set without load
    #[must_use]
    pub const fn reps_only(reps: u32) -> Self {
        Self {
            weight: None,
            reps,
            sub_sets: None,
        }
    }

    /// Form for a dropdown set; weight/reps mirror the first tier
    #[must_use]
    pub fn tiers(tiers: Vec<TierForm>) -> Self {
        let first = tiers.first().copied();
        Self {
            weight: first.map(|t| t.weight),
            reps: first.map_or(DEFAULT_REPS, |t| t.reps),
            sub_sets: Some(tiers),
        }
    }
}

impl Default for SetForm {
    fn default() -> Self {
        Self::reps_only(DEFAULT_REPS)
    }
}

/// Per-exercise values remembered to pre-fill future sets
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LastUsedData {
    /// Last load (kg)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    /// Last reps
    pub reps: u32,
    /// Last per-tier values of a dropdown set
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_sets: Option<Vec<TierForm>>,
}
