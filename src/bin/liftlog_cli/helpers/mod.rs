// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftlog Contributors
// ABOUTME: Re-exports helper modules for the liftlog CLI
// ABOUTME: Provides input loading and output formatting

pub mod display;
pub mod input;
