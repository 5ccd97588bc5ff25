// Copyright (c) 2020-2024 the svgen developers

//! This crate implements the SystemVerilog constant-declaration model of the
//! svgen framework.
//!
//! The nodes in this crate are immutable value objects assembled by the
//! generation layer as part of a module's parameter list. Two independent
//! textual surfaces exist for them: the `Display` implementations produce a
//! tagged diagnostic form for logs and test fixtures, while the [`Emit`]
//! trait produces the SystemVerilog source text itself.

#[macro_use]
extern crate log;

pub mod ast;
pub mod emit;
pub mod ty;
pub mod value;

pub use crate::ast::*;
pub use crate::emit::Emit;
pub use crate::ty::*;
pub use crate::value::*;

pub use svgen_common::errors::{AstError, AstResult};
pub use svgen_common::util::HasDesc;

/// Items commonly used within the crate.
mod crate_prelude {
    pub use svgen_common::errors::{AstError, AstResult};
    pub use svgen_common::util::HasDesc;

    pub use crate::ast::*;
    pub use crate::emit::Emit;
    pub use crate::ty::*;
    pub use crate::value::*;
}
