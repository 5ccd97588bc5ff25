// Copyright (c) 2020-2024 the svgen developers

//! Data types as they appear in constant declarations.
//!
//! This is deliberately restricted to the type shapes that occur in
//! `parameter` and `localparam` declarations. Declaration nodes exclusively
//! own their type descriptors; the descriptors themselves never change after
//! construction and are freely shareable by cloning.

use std::fmt::{self, Display, Formatter};

/// A SystemVerilog data type.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum DataType {
    /// An implicit type. Nothing is emitted for the type position.
    Implicit,
    /// A single bit type.
    Bit(Domain),
    /// An integer type of the given bit width.
    Int(usize, Domain),
    /// A packed bit vector type.
    BitVector {
        /// Two- or four-valued.
        domain: Domain,
        /// Signedness of the vector.
        sign: Sign,
        /// The `[a:b]` part of the type.
        range: Range,
    },
    /// The `string` type.
    String,
    /// A named type, such as a typedef or an enum name.
    Named(std::string::String),
}

/// The number of values each bit of a type can assume.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Domain {
    /// Two-valued types such as `bit` or `int`.
    TwoValued,
    /// Four-valued types such as `logic` or `integer`.
    FourValued,
}

/// Whether a type is signed or unsigned.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum Sign {
    Signed,
    Unsigned,
}

/// The `[a:b]` part in a vector type such as `logic [a:b]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Range {
    /// The total number of bits, given as `|a-b|+1`.
    pub size: usize,
    /// The direction of the vector, i.e. whether `a > b` or `a < b`.
    pub dir: RangeDir,
    /// The starting offset of the range.
    pub offset: isize,
}

/// Which side is greater in a range `[a:b]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RangeDir {
    /// `a < b`
    Up,
    /// `a > b`
    Down,
}

impl DataType {
    /// Check if this is the implicit type.
    pub fn is_implicit(&self) -> bool {
        match *self {
            DataType::Implicit => true,
            _ => false,
        }
    }

    /// Return the domain of the type, if it has one.
    pub fn get_value_domain(&self) -> Option<Domain> {
        match *self {
            DataType::Bit(d) => Some(d),
            DataType::Int(_, d) => Some(d),
            DataType::BitVector { domain, .. } => Some(domain),
            _ => None,
        }
    }

    /// Create a `logic [size-1:0]` vector type.
    pub fn logic_vector(size: usize) -> DataType {
        DataType::BitVector {
            domain: Domain::FourValued,
            sign: Sign::Unsigned,
            range: Range {
                size,
                dir: RangeDir::Down,
                offset: 0,
            },
        }
    }
}

impl Domain {
    /// Return the single-bit name for this domain (`bit` or `logic`).
    pub fn bit_name(&self) -> &'static str {
        match *self {
            Domain::TwoValued => "bit",
            Domain::FourValued => "logic",
        }
    }
}

impl Display for DataType {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match *self {
            DataType::Implicit => write!(f, "<implicit>"),
            DataType::Bit(Domain::TwoValued) => write!(f, "bit"),
            DataType::Bit(Domain::FourValued) => write!(f, "logic"),
            DataType::Int(8, Domain::TwoValued) => write!(f, "byte"),
            DataType::Int(16, Domain::TwoValued) => write!(f, "shortint"),
            DataType::Int(32, Domain::TwoValued) => write!(f, "int"),
            DataType::Int(64, Domain::TwoValued) => write!(f, "longint"),
            DataType::Int(32, Domain::FourValued) => write!(f, "integer"),
            DataType::Int(width, Domain::TwoValued) => write!(f, "int<{}>", width),
            DataType::Int(width, Domain::FourValued) => write!(f, "integer<{}>", width),
            DataType::BitVector { domain, sign, range } => {
                write!(f, "{}", domain.bit_name())?;
                if sign != Sign::Unsigned {
                    write!(f, " {}", sign)?;
                }
                write!(f, " {}", range)
            }
            DataType::String => write!(f, "string"),
            DataType::Named(ref name) => write!(f, "{}", name),
        }
    }
}

impl Display for Sign {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match *self {
            Sign::Signed => write!(f, "signed"),
            Sign::Unsigned => write!(f, "unsigned"),
        }
    }
}

impl Display for Range {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        let lo = self.offset;
        let hi = lo + self.size as isize - 1;
        let (lhs, rhs) = match self.dir {
            RangeDir::Up => (lo, hi),
            RangeDir::Down => (hi, lo),
        };
        write!(f, "[{}:{}]", lhs, rhs)
    }
}

/// The implicit type.
pub static IMPLICIT_TYPE: DataType = DataType::Implicit;

/// The `bit` type.
pub static BIT_TYPE: DataType = DataType::Bit(Domain::TwoValued);

/// The `logic` type.
pub static LOGIC_TYPE: DataType = DataType::Bit(Domain::FourValued);

/// The `int` type.
pub static INT_TYPE: DataType = DataType::Int(32, Domain::TwoValued);

/// The `integer` type.
pub static INTEGER_TYPE: DataType = DataType::Int(32, Domain::FourValued);

/// The `string` type.
pub static STRING_TYPE: DataType = DataType::String;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_type_names() {
        assert_eq!(format!("{}", BIT_TYPE), "bit");
        assert_eq!(format!("{}", LOGIC_TYPE), "logic");
        assert_eq!(format!("{}", INT_TYPE), "int");
        assert_eq!(format!("{}", INTEGER_TYPE), "integer");
        assert_eq!(format!("{}", STRING_TYPE), "string");
        assert_eq!(format!("{}", DataType::Int(8, Domain::TwoValued)), "byte");
        assert_eq!(
            format!("{}", DataType::Int(16, Domain::TwoValued)),
            "shortint"
        );
        assert_eq!(
            format!("{}", DataType::Int(64, Domain::TwoValued)),
            "longint"
        );
    }

    #[test]
    fn vector_type_names() {
        assert_eq!(format!("{}", DataType::logic_vector(8)), "logic [7:0]");
        assert_eq!(
            format!(
                "{}",
                DataType::BitVector {
                    domain: Domain::TwoValued,
                    sign: Sign::Signed,
                    range: Range {
                        size: 16,
                        dir: RangeDir::Down,
                        offset: 0,
                    },
                }
            ),
            "bit signed [15:0]"
        );
        assert_eq!(
            format!(
                "{}",
                DataType::BitVector {
                    domain: Domain::FourValued,
                    sign: Sign::Unsigned,
                    range: Range {
                        size: 4,
                        dir: RangeDir::Up,
                        offset: 2,
                    },
                }
            ),
            "logic [2:5]"
        );
    }

    #[test]
    fn named_type_names() {
        let ty = DataType::Named("addr_t".to_string());
        assert_eq!(format!("{}", ty), "addr_t");
        assert_eq!(ty.get_value_domain(), None);
    }
}
