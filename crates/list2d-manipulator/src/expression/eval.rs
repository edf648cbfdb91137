//! Evaluation of compiled formulas.
//!
//! Arithmetic follows scripting-language conventions: `/` always yields a
//! float, `//` and `%` floor toward negative infinity, booleans act as 0/1,
//! and integer overflow is an error rather than a wrap.

use smallvec::SmallVec;

use list2d_core::{ExpressionError, NormalizeError, Value};

use super::ast::{BinaryOp, Expr, Function, UnaryOp};
use crate::normalize::{float_to_int, try_value_to_int};

/// Longest text a formula may build through repetition.
const MAX_TEXT_LEN: usize = 1 << 20;

pub fn evaluate(expr: &Expr) -> Result<Value, ExpressionError> {
    match expr {
        Expr::Literal(v) => Ok(v.clone()),
        Expr::Unary { op, operand } => unary(*op, evaluate(operand)?),
        Expr::Binary { op, lhs, rhs } => binary(*op, evaluate(lhs)?, evaluate(rhs)?),
        Expr::Call { function, args } => {
            let args = args
                .iter()
                .map(evaluate)
                .collect::<Result<SmallVec<[Value; 2]>, _>>()?;
            call(*function, &args)
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum Num {
    Int(i64),
    Float(f64),
}

impl Num {
    fn of(v: &Value) -> Option<Self> {
        match v {
            Value::Int(i) => Some(Self::Int(*i)),
            Value::Bool(b) => Some(Self::Int(i64::from(*b))),
            Value::Float(f) => Some(Self::Float(*f)),
            _ => None,
        }
    }

    fn as_f64(self) -> f64 {
        match self {
            Self::Int(i) => i as f64,
            Self::Float(f) => f,
        }
    }
}

fn mismatch(op: BinaryOp, lhs: &Value, rhs: &Value) -> ExpressionError {
    ExpressionError::TypeMismatch {
        op: op.symbol(),
        lhs: lhs.kind(),
        rhs: rhs.kind(),
    }
}

fn overflow(op: BinaryOp) -> ExpressionError {
    ExpressionError::Overflow { op: op.symbol() }
}

fn unary(op: UnaryOp, v: Value) -> Result<Value, ExpressionError> {
    let num = Num::of(&v).ok_or(ExpressionError::BadOperand {
        op: op.symbol(),
        kind: v.kind(),
    })?;
    Ok(match (op, num) {
        (UnaryOp::Pos, Num::Int(i)) => Value::Int(i),
        (UnaryOp::Pos, Num::Float(f)) => Value::Float(f),
        (UnaryOp::Neg, Num::Int(i)) => Value::Int(
            i.checked_neg()
                .ok_or(ExpressionError::Overflow { op: op.symbol() })?,
        ),
        (UnaryOp::Neg, Num::Float(f)) => Value::Float(-f),
    })
}

fn binary(op: BinaryOp, lhs: Value, rhs: Value) -> Result<Value, ExpressionError> {
    match (&lhs, &rhs) {
        (Value::Text(a), Value::Text(b)) if op == BinaryOp::Add => {
            return Ok(Value::Text(format!("{a}{b}")));
        }
        (Value::Text(s), other) | (other, Value::Text(s)) if op == BinaryOp::Mul => {
            return match Num::of(other) {
                Some(Num::Int(n)) => repeat(s, n),
                _ => Err(mismatch(op, &lhs, &rhs)),
            };
        }
        _ => {}
    }

    let (Some(a), Some(b)) = (Num::of(&lhs), Num::of(&rhs)) else {
        return Err(mismatch(op, &lhs, &rhs));
    };

    match (a, b) {
        (Num::Int(a), Num::Int(b)) => int_op(op, a, b),
        (a, b) => float_op(op, a.as_f64(), b.as_f64()),
    }
}

fn repeat(s: &str, n: i64) -> Result<Value, ExpressionError> {
    let times = usize::try_from(n).unwrap_or(0);
    match s.len().checked_mul(times) {
        Some(total) if total <= MAX_TEXT_LEN => Ok(Value::Text(s.repeat(times))),
        _ => Err(overflow(BinaryOp::Mul)),
    }
}

fn int_op(op: BinaryOp, a: i64, b: i64) -> Result<Value, ExpressionError> {
    let result = match op {
        BinaryOp::Add => a.checked_add(b),
        BinaryOp::Sub => a.checked_sub(b),
        BinaryOp::Mul => a.checked_mul(b),
        BinaryOp::Div => {
            if b == 0 {
                return Err(ExpressionError::DivisionByZero);
            }
            return Ok(Value::Float(a as f64 / b as f64));
        }
        BinaryOp::FloorDiv => {
            if b == 0 {
                return Err(ExpressionError::DivisionByZero);
            }
            a.checked_div(b).map(|q| {
                if (a % b != 0) && ((a < 0) != (b < 0)) {
                    q - 1
                } else {
                    q
                }
            })
        }
        BinaryOp::Mod => {
            if b == 0 {
                return Err(ExpressionError::DivisionByZero);
            }
            a.checked_rem(b)
                .map(|r| if r != 0 && ((r < 0) != (b < 0)) { r + b } else { r })
        }
        BinaryOp::Pow => {
            if b < 0 {
                if a == 0 {
                    return Err(ExpressionError::DivisionByZero);
                }
                return Ok(Value::Float((a as f64).powf(b as f64)));
            }
            u32::try_from(b).ok().and_then(|exp| a.checked_pow(exp))
        }
    };
    result.map(Value::Int).ok_or(overflow(op))
}

fn float_op(op: BinaryOp, a: f64, b: f64) -> Result<Value, ExpressionError> {
    let divides = matches!(op, BinaryOp::Div | BinaryOp::FloorDiv | BinaryOp::Mod);
    if divides && b == 0.0 {
        return Err(ExpressionError::DivisionByZero);
    }
    let result = match op {
        BinaryOp::Add => a + b,
        BinaryOp::Sub => a - b,
        BinaryOp::Mul => a * b,
        BinaryOp::Div => a / b,
        BinaryOp::FloorDiv => (a / b).floor(),
        BinaryOp::Mod => {
            let r = a % b;
            if r != 0.0 && ((r < 0.0) != (b < 0.0)) {
                r + b
            } else {
                r
            }
        }
        BinaryOp::Pow => {
            if a == 0.0 && b < 0.0 {
                return Err(ExpressionError::DivisionByZero);
            }
            a.powf(b)
        }
    };
    Ok(Value::Float(result))
}

fn call(function: Function, args: &[Value]) -> Result<Value, ExpressionError> {
    let name = function.name();
    // The parser checks arity too, but an `Expr` can be built by hand.
    if !function.accepts(args.len()) {
        return Err(ExpressionError::Arity {
            function: name,
            expected: function.expected_args(),
            found: args.len(),
        });
    }
    let invalid = |v: &Value| ExpressionError::InvalidArgument {
        function: name,
        kind: v.kind(),
    };

    match function {
        Function::Str => Ok(Value::Text(args[0].to_string())),
        Function::Len => match &args[0] {
            Value::Text(s) => Ok(Value::from_count(s.chars().count())),
            other => Err(invalid(other)),
        },
        Function::Int => try_value_to_int(&args[0]).map(Value::Int).map_err(|e| match e {
            NormalizeError::OutOfRange(_) => ExpressionError::Overflow { op: name },
            NormalizeError::NotNumeric(s) => ExpressionError::InvalidLiteral {
                function: name,
                literal: s,
            },
            NormalizeError::Blank => ExpressionError::InvalidLiteral {
                function: name,
                literal: args[0].to_string(),
            },
            NormalizeError::Absent | NormalizeError::NotText { .. } => invalid(&args[0]),
        }),
        Function::Float => match &args[0] {
            Value::Text(s) => s.trim().parse::<f64>().map(Value::Float).map_err(|_| {
                ExpressionError::InvalidLiteral {
                    function: name,
                    literal: s.clone(),
                }
            }),
            other => Num::of(other)
                .map(|n| Value::Float(n.as_f64()))
                .ok_or_else(|| invalid(other)),
        },
        Function::Abs => match Num::of(&args[0]) {
            Some(Num::Int(i)) => i
                .checked_abs()
                .map(Value::Int)
                .ok_or(ExpressionError::Overflow { op: name }),
            Some(Num::Float(f)) => Ok(Value::Float(f.abs())),
            None => Err(invalid(&args[0])),
        },
        Function::Upper | Function::Lower | Function::Strip => match &args[0] {
            Value::Text(s) => Ok(Value::Text(match function {
                Function::Upper => s.to_uppercase(),
                Function::Lower => s.to_lowercase(),
                _ => s.trim().to_string(),
            })),
            other => Err(invalid(other)),
        },
        Function::Min | Function::Max => extreme(function, args),
        Function::Round => round(args),
    }
}

/// `min` / `max`: returns the first extreme argument.
fn extreme(function: Function, args: &[Value]) -> Result<Value, ExpressionError> {
    let want_max = function == Function::Max;
    let mut best = &args[0];
    for candidate in &args[1..] {
        let ordering = compare(best, candidate).ok_or(ExpressionError::TypeMismatch {
            op: function.name(),
            lhs: best.kind(),
            rhs: candidate.kind(),
        })?;
        let better = if want_max {
            ordering == std::cmp::Ordering::Less
        } else {
            ordering == std::cmp::Ordering::Greater
        };
        if better {
            best = candidate;
        }
    }
    Ok(best.clone())
}

fn compare(a: &Value, b: &Value) -> Option<std::cmp::Ordering> {
    match (a, b) {
        (Value::Text(x), Value::Text(y)) => Some(x.cmp(y)),
        _ => match (Num::of(a)?, Num::of(b)?) {
            (Num::Int(x), Num::Int(y)) => Some(x.cmp(&y)),
            (x, y) => x.as_f64().partial_cmp(&y.as_f64()),
        },
    }
}

/// `round(x)` rounds half to even and returns an int; `round(x, n)` keeps the input type.
fn round(args: &[Value]) -> Result<Value, ExpressionError> {
    let name = Function::Round.name();
    let num = Num::of(&args[0]).ok_or(ExpressionError::InvalidArgument {
        function: name,
        kind: args[0].kind(),
    })?;

    let Some(digits_arg) = args.get(1) else {
        return match num {
            Num::Int(i) => Ok(Value::Int(i)),
            Num::Float(f) => float_to_int(f.round_ties_even())
                .map(Value::Int)
                .map_err(|_| ExpressionError::Overflow { op: name }),
        };
    };

    let digits = match digits_arg {
        Value::Int(d) => *d,
        Value::Bool(b) => i64::from(*b),
        other => {
            return Err(ExpressionError::InvalidArgument {
                function: name,
                kind: other.kind(),
            })
        }
    };

    match num {
        Num::Int(i) if digits >= 0 => Ok(Value::Int(i)),
        Num::Int(i) => {
            let exp = u32::try_from(digits.unsigned_abs()).unwrap_or(u32::MAX);
            let Some(step) = 10i64.checked_pow(exp) else {
                return Ok(Value::Int(0));
            };
            let q = i.div_euclid(step);
            let r = i.rem_euclid(step);
            let twice = 2 * i128::from(r);
            let up = twice > i128::from(step) || (twice == i128::from(step) && q % 2 != 0);
            let q = if up { q + 1 } else { q };
            q.checked_mul(step)
                .map(Value::Int)
                .ok_or(ExpressionError::Overflow { op: name })
        }
        Num::Float(f) => {
            let exp = i32::try_from(digits).unwrap_or(if digits < 0 { i32::MIN } else { i32::MAX });
            let scale = 10f64.powi(exp);
            if !scale.is_finite() || scale == 0.0 {
                return Ok(Value::Float(if scale == 0.0 { 0.0 } else { f }));
            }
            let scaled = f * scale;
            if !scaled.is_finite() {
                return Ok(Value::Float(f));
            }
            Ok(Value::Float(scaled.round_ties_even() / scale))
        }
    }
}
