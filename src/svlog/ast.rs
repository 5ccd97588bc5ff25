// Copyright (c) 2020-2024 the svgen developers

//! The AST nodes for constant declarations.
//!
//! Four node variants exist: [`Parameter`] and [`LocalParam`] describe a
//! single named constant, while [`ParameterDeclaration`] and
//! [`LocalParamDeclaration`] group multiple names under one shared
//! descriptor, mirroring the target language's compact multi-name
//! declaration syntax.
//!
//! All nodes are immutable after construction. The `Display` implementations
//! render a tagged diagnostic form; the SystemVerilog source form lives in
//! the [`emit`](crate::emit) module.

use crate::crate_prelude::*;
use std::fmt;

/// An overridable compile-time constant declared at module scope.
///
/// ```text
/// "parameter" [type_or_implicit] ident ["=" expr]
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Parameter {
    name: String,
    dtype: DataType,
    default: Option<Value>,
}

impl Parameter {
    /// Create a new parameter.
    ///
    /// Returns an `InvalidArgument` error if `name` is empty.
    pub fn new<S: Into<String>>(name: S, dtype: DataType) -> AstResult<Parameter> {
        let name = name.into();
        if name.is_empty() {
            return Err(AstError::invalid_argument("parameter name cannot be empty"));
        }
        Ok(Parameter {
            name,
            dtype,
            default: None,
        })
    }

    /// Attach a default value.
    pub fn with_default(self, default: Value) -> Parameter {
        Parameter {
            default: Some(default),
            ..self
        }
    }

    /// Return the parameter name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Return the declared data type.
    pub fn dtype(&self) -> &DataType {
        &self.dtype
    }

    /// Return the default value, if any.
    pub fn default(&self) -> Option<&Value> {
        self.default.as_ref()
    }

    /// Parameters are compile-time constants by definition.
    pub fn is_constant(&self) -> bool {
        true
    }
}

impl HasDesc for Parameter {
    fn desc(&self) -> &'static str {
        "parameter"
    }

    fn desc_full(&self) -> String {
        format!("parameter `{}`", self.name)
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Parameter({}: {}", self.name, self.dtype)?;
        if let Some(ref default) = self.default {
            write!(f, " = {}", default)?;
        }
        write!(f, ")")
    }
}

/// A single declaration statement covering multiple parameter names that
/// share one type and default.
///
/// ```text
/// "parameter" [type_or_implicit] ident {"," ident} ["=" expr]
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParameterDeclaration {
    names: Vec<String>,
    parameter: Parameter,
}

impl ParameterDeclaration {
    /// Create a new parameter declaration.
    ///
    /// Returns an `InvalidArgument` error if `names` is empty or contains an
    /// empty identifier.
    pub fn new(names: Vec<String>, parameter: Parameter) -> AstResult<ParameterDeclaration> {
        check_names(&names, "parameter")?;
        Ok(ParameterDeclaration { names, parameter })
    }

    /// Return the declared names, in declaration order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Return the shared parameter descriptor.
    pub fn parameter(&self) -> &Parameter {
        &self.parameter
    }
}

impl HasDesc for ParameterDeclaration {
    fn desc(&self) -> &'static str {
        "parameter declaration"
    }

    fn desc_full(&self) -> String {
        format!("parameter declaration `{}`", self.names.join(", "))
    }
}

impl fmt::Display for ParameterDeclaration {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "ParameterDeclaration([{}], {})",
            self.names.join(", "),
            self.parameter
        )
    }
}

/// A module-internal compile-time constant, not overridable from outside.
///
/// ```text
/// "localparam" [type_or_implicit] ident "=" expr
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LocalParam {
    name: String,
    dtype: DataType,
    value: Value,
    comment: Option<String>,
}

impl LocalParam {
    /// Create a new local parameter.
    ///
    /// Returns an `InvalidArgument` error if `name` is empty.
    pub fn new<S: Into<String>>(name: S, dtype: DataType, value: Value) -> AstResult<LocalParam> {
        let name = name.into();
        if name.is_empty() {
            return Err(AstError::invalid_argument(
                "localparam name cannot be empty",
            ));
        }
        Ok(LocalParam {
            name,
            dtype,
            value,
            comment: None,
        })
    }

    /// Attach a comment describing the constant's purpose.
    pub fn with_comment<S: Into<String>>(self, comment: S) -> LocalParam {
        LocalParam {
            comment: Some(comment.into()),
            ..self
        }
    }

    /// Return the local parameter name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Return the declared data type.
    pub fn dtype(&self) -> &DataType {
        &self.dtype
    }

    /// Return the assigned value.
    pub fn value(&self) -> &Value {
        &self.value
    }

    /// Return the comment, if any.
    pub fn comment(&self) -> Option<&str> {
        self.comment.as_deref()
    }

    /// Local parameters are compile-time constants by definition.
    pub fn is_constant(&self) -> bool {
        true
    }
}

impl HasDesc for LocalParam {
    fn desc(&self) -> &'static str {
        "localparam"
    }

    fn desc_full(&self) -> String {
        format!("localparam `{}`", self.name)
    }
}

impl fmt::Display for LocalParam {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "LocalParam({}: {} = {})", self.name, self.dtype, self.value)?;
        if let Some(ref comment) = self.comment {
            write!(f, " // {}", comment)?;
        }
        Ok(())
    }
}

/// A single declaration statement covering multiple localparam names that
/// share one type, value, and comment.
///
/// ```text
/// "localparam" [type_or_implicit] ident {"," ident} "=" expr
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LocalParamDeclaration {
    names: Vec<String>,
    localparam: LocalParam,
}

impl LocalParamDeclaration {
    /// Create a new localparam declaration.
    ///
    /// Returns an `InvalidArgument` error if `names` is empty or contains an
    /// empty identifier.
    pub fn new(names: Vec<String>, localparam: LocalParam) -> AstResult<LocalParamDeclaration> {
        check_names(&names, "localparam")?;
        Ok(LocalParamDeclaration { names, localparam })
    }

    /// Return the declared names, in declaration order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Return the shared localparam descriptor.
    pub fn localparam(&self) -> &LocalParam {
        &self.localparam
    }
}

impl HasDesc for LocalParamDeclaration {
    fn desc(&self) -> &'static str {
        "localparam declaration"
    }

    fn desc_full(&self) -> String {
        format!("localparam declaration `{}`", self.names.join(", "))
    }
}

impl fmt::Display for LocalParamDeclaration {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "LocalParamDeclaration([{}], {})",
            self.names.join(", "),
            self.localparam
        )
    }
}

/// Check that a declaration name list is non-empty and contains no empty
/// identifiers.
fn check_names(names: &[String], kind: &str) -> AstResult<()> {
    if names.is_empty() {
        return Err(AstError::invalid_argument(format!(
            "{} declaration requires at least one name",
            kind
        )));
    }
    if names.iter().any(|name| name.is_empty()) {
        return Err(AstError::invalid_argument(format!(
            "{} name cannot be empty",
            kind
        )));
    }
    Ok(())
}
