// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Tool invocation status badges
//!
//! Turns a record of an assistant's editor or file-manager tool call into a
//! short status sentence, a representative icon, and an in-progress or
//! completed treatment. The classifier and lifecycle selector are pure; the
//! renderer and CLI sit on top of them.
//!
#![doc = include_str!("../docs/USAGE.md")]

pub mod classify;
pub mod filename;
pub mod icon;
pub mod invocation;
pub mod lifecycle;
pub mod render;
pub mod tools;

// Internal modules - pub for binary access, hidden from docs
#[doc(hidden)]
pub mod cli;
#[doc(hidden)]
pub mod config;
#[doc(hidden)]
pub mod env;
#[doc(hidden)]
pub mod input;
#[doc(hidden)]
pub mod output;
#[doc(hidden)]
pub mod output_diagnostic;
#[doc(hidden)]
pub mod pipeline;

pub use classify::{classify, DisplayDescriptor};
pub use filename::extract_filename;
pub use icon::Icon;
pub use invocation::{InvocationState, ToolInvocation};
pub use lifecycle::{select_treatment, Treatment};
pub use render::BadgeView;
pub use tools::args::ToolArgs;
