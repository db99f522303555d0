// ABOUTME: Exercise catalog entry with category, muscle groups, and equipment
// ABOUTME: Decides whether an exercise is logged as bodyweight (no external load)
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftlog Contributors

use crate::constants::BODYWEIGHT_EQUIPMENT;
use serde::{Deserialize, Serialize};

/// Movement category of an exercise
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum ExerciseCategory {
    /// Multi-joint lift
    #[default]
    Compound,
    /// Single-joint lift
    Isolation,
    /// Conditioning work
    Cardio,
}

/// Muscle group targeted by an exercise
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum MuscleGroup {
    /// Chest
    Chest,
    /// Back
    Back,
    /// Shoulders
    Shoulders,
    /// Biceps
    Biceps,
    /// Triceps
    Triceps,
    /// Forearms
    Forearms,
    /// Abdominals
    Abs,
    /// Obliques
    Obliques,
    /// Quadriceps
    Quads,
    /// Hamstrings
    Hamstrings,
    /// Glutes
    Glutes,
    /// Calves
    Calves,
    /// Trapezius
    Traps,
    /// Latissimus dorsi
    Lats,
    /// Any group this client does not know about
    #[serde(other)]
    Other,
}

/// Immutable exercise catalog entry
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Exercise {
    /// Catalog identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Movement category
    #[serde(default)]
    pub category: ExerciseCategory,
    /// Targeted muscle groups
    #[serde(default)]
    pub muscle_groups: Vec<MuscleGroup>,
    /// Required equipment labels
    #[serde(default)]
    pub equipment: Vec<String>,
    /// Step-by-step instructions
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub instructions: Vec<String>,
    /// Explicit bodyweight marker (pull-ups, push-ups, dips)
    #[serde(default)]
    pub bodyweight: bool,
}

impl Exercise {
    /// Create a weighted exercise using a single piece of equipment
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        category: ExerciseCategory,
        equipment: &[&str],
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category,
            muscle_groups: Vec::new(),
            equipment: equipment.iter().map(|e| (*e).to_owned()).collect(),
            instructions: Vec::new(),
            bodyweight: false,
        }
    }

    /// Whether sets of this exercise are logged without an external load
    ///
    /// True when explicitly flagged, when no equipment is listed, or when the
    /// only equipment listed is "bodyweight".
    #[must_use]
    pub fn is_bodyweight(&self) -> bool {
        if self.bodyweight {
            return true;
        }
        match self.equipment.as_slice() {
            [] => true,
            [only] => only.eq_ignore_ascii_case(BODYWEIGHT_EQUIPMENT),
            _ => false,
        }
    }
}
