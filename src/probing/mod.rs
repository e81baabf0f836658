//! Capability check implementation submodule.
//!
//! Internal building blocks behind [`probe`](crate::probe):
//!
//! - `find_runtime`: PATH-based interpreter lookup with fallbacks
//! - `check_version`: async version query with a bounded timeout
//! - `parse_version`: regex-based version extraction from CLI output
//! - `check_gui_module`: toolkit import check in a throwaway subprocess

mod gui;
mod parser;
mod path_finder;
mod version;

pub(crate) use gui::check_gui_module;
pub(crate) use parser::parse_version;
pub(crate) use path_finder::{find_runtime, RUNTIME_CANDIDATES};
pub(crate) use version::check_version;
