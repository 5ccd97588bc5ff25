// Copyright (c) 2020-2024 the svgen developers

//! This crate contains the fundamental utilities used by the rest of the
//! svgen model generation framework.

pub mod errors;
pub mod util;
