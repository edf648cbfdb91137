//! Expression tree for replacement formulas.
//!
//! The operation set is closed: every node is one of the tagged variants
//! below, so there is no path from a formula to arbitrary code.

use list2d_core::Value;

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Literal(Value),
    Unary {
        op: UnaryOp,
        operand: Box<Expr>,
    },
    Binary {
        op: BinaryOp,
        lhs: Box<Expr>,
        rhs: Box<Expr>,
    },
    Call {
        function: Function,
        args: Vec<Expr>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOp {
    Neg,
    Pos,
}

impl UnaryOp {
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Neg => "unary -",
            Self::Pos => "unary +",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    FloorDiv,
    Mod,
    Pow,
}

impl BinaryOp {
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::FloorDiv => "//",
            Self::Mod => "%",
            Self::Pow => "**",
        }
    }
}

/// Built-in functions callable from a formula.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Function {
    Str,
    Len,
    Int,
    Float,
    Abs,
    Upper,
    Lower,
    Strip,
    Min,
    Max,
    Round,
}

impl Function {
    pub fn from_name(name: &str) -> Option<Self> {
        Some(match name {
            "str" => Self::Str,
            "len" => Self::Len,
            "int" => Self::Int,
            "float" => Self::Float,
            "abs" => Self::Abs,
            "upper" => Self::Upper,
            "lower" => Self::Lower,
            "strip" => Self::Strip,
            "min" => Self::Min,
            "max" => Self::Max,
            "round" => Self::Round,
            _ => return None,
        })
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Str => "str",
            Self::Len => "len",
            Self::Int => "int",
            Self::Float => "float",
            Self::Abs => "abs",
            Self::Upper => "upper",
            Self::Lower => "lower",
            Self::Strip => "strip",
            Self::Min => "min",
            Self::Max => "max",
            Self::Round => "round",
        }
    }

    /// Accepted argument counts as `(min, max)`; `None` means unbounded.
    pub fn arity(self) -> (usize, Option<usize>) {
        match self {
            Self::Min | Self::Max => (2, None),
            Self::Round => (1, Some(2)),
            _ => (1, Some(1)),
        }
    }

    /// Human-readable arity for error messages.
    pub fn expected_args(self) -> &'static str {
        match self {
            Self::Min | Self::Max => "at least 2",
            Self::Round => "1 or 2",
            _ => "1",
        }
    }

    pub fn accepts(self, count: usize) -> bool {
        let (min, max) = self.arity();
        count >= min && max.map_or(true, |max| count <= max)
    }
}
