// SPDX-License-Identifier: MPL-2.0
//! Centralized styles for all section views.

pub mod button;
pub mod container;
pub mod input;
