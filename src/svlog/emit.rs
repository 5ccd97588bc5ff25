// Copyright (c) 2020-2024 the svgen developers

//! Emission of declaration nodes as SystemVerilog source text.
//!
//! This is a separate surface from the `Display` implementations: those
//! produce a tagged diagnostic form, while [`Emit`] produces the text that
//! lands in generated source files. Both are total and deterministic.

use crate::crate_prelude::*;
use itertools::Itertools;
use std::fmt::{self, Write};

/// Support for SystemVerilog source emission.
pub trait Emit {
    /// Write the SystemVerilog form of this node to `f`.
    fn emit(&self, f: &mut impl Write) -> fmt::Result;

    /// Return the SystemVerilog form of this node as a string.
    fn emit_string(&self) -> String {
        let mut s = String::new();
        self.emit(&mut s).unwrap();
        s
    }
}

impl Emit for DataType {
    fn emit(&self, f: &mut impl Write) -> fmt::Result {
        match *self {
            DataType::Implicit => Ok(()),
            ref dtype => write!(f, "{}", dtype),
        }
    }
}

impl Emit for Value {
    // The literal forms coincide with the diagnostic rendering.
    fn emit(&self, f: &mut impl Write) -> fmt::Result {
        write!(f, "{}", self)
    }
}

impl Emit for Parameter {
    fn emit(&self, f: &mut impl Write) -> fmt::Result {
        debug!("emitting {}", self.desc_full());
        write!(f, "parameter ")?;
        emit_dtype_prefix(self.dtype(), f)?;
        write!(f, "{}", self.name())?;
        if let Some(default) = self.default() {
            write!(f, " = ")?;
            default.emit(f)?;
        }
        write!(f, ";")
    }
}

impl Emit for ParameterDeclaration {
    fn emit(&self, f: &mut impl Write) -> fmt::Result {
        debug!("emitting {}", self.desc_full());
        write!(f, "parameter ")?;
        emit_dtype_prefix(self.parameter().dtype(), f)?;
        // Each name repeats the shared default; the language has no shorthand
        // for assigning one default to a whole name list.
        let assigns = match self.parameter().default() {
            Some(default) => self
                .names()
                .iter()
                .map(|name| format!("{} = {}", name, default))
                .join(", "),
            None => self.names().join(", "),
        };
        write!(f, "{};", assigns)
    }
}

impl Emit for LocalParam {
    fn emit(&self, f: &mut impl Write) -> fmt::Result {
        debug!("emitting {}", self.desc_full());
        write!(f, "localparam ")?;
        emit_dtype_prefix(self.dtype(), f)?;
        write!(f, "{} = ", self.name())?;
        self.value().emit(f)?;
        write!(f, ";")?;
        emit_comment_suffix(self.comment(), f)
    }
}

impl Emit for LocalParamDeclaration {
    fn emit(&self, f: &mut impl Write) -> fmt::Result {
        debug!("emitting {}", self.desc_full());
        write!(f, "localparam ")?;
        emit_dtype_prefix(self.localparam().dtype(), f)?;
        let assigns = self
            .names()
            .iter()
            .map(|name| format!("{} = {}", name, self.localparam().value()))
            .join(", ");
        write!(f, "{};", assigns)?;
        emit_comment_suffix(self.localparam().comment(), f)
    }
}

/// Write the type position of a declaration, followed by a space. Implicit
/// types emit nothing at all.
fn emit_dtype_prefix(dtype: &DataType, f: &mut impl Write) -> fmt::Result {
    if !dtype.is_implicit() {
        dtype.emit(f)?;
        write!(f, " ")?;
    }
    Ok(())
}

/// Write a trailing ` // comment` annotation, if a comment is present.
fn emit_comment_suffix(comment: Option<&str>, f: &mut impl Write) -> fmt::Result {
    match comment {
        Some(comment) => write!(f, " // {}", comment),
        None => Ok(()),
    }
}
