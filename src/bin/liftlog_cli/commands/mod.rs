// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftlog Contributors
// ABOUTME: Re-exports command modules for the liftlog CLI
// ABOUTME: Provides planning, active workout, and state pointer commands

pub mod plan;
pub mod state;
pub mod workout;
