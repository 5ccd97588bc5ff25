// Copyright (c) 2020-2024 the svgen developers

//! A model generation framework for SystemVerilog.

// Re-export everything from the common crate.
pub extern crate svgen_common as common;
pub use crate::common::*;

// Pull in subcrates.
pub extern crate svgen_svlog as svlog;
