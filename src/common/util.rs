// Copyright (c) 2020-2024 the svgen developers

//! A collection of utility traits shared across the framework.

#![deny(missing_docs)]

/// Describes model nodes.
pub trait HasDesc {
    /// Obtain a human-readable descriptive name for this node.
    fn desc(&self) -> &'static str;

    /// Obtain a human-readable description for this node, possibly containing
    /// the node's name.
    fn desc_full(&self) -> String {
        self.desc().into()
    }
}
