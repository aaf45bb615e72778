//! Elementwise operators over a matrix's non-zero entries
//!
//! Every operator lives in a static table and flows through one of three
//! generic application paths: scalar application rewrites each non-zero
//! through the transform-iteration contract, matrix application merges the
//! other matrix's non-zeros into the receiver through `get`+`set`, and unary
//! application rewrites each non-zero in place. The named methods on
//! [`SparseMatrix`] and the non-mutating free functions in this module are
//! thin entry points into those paths, stamped out by macros.

use num_traits::Float;

use crate::error::{Error, Result};
use crate::matrix::{SparseMatrix, Visit};

/// Scalar-or-matrix right-hand side accepted by the dispatching methods
pub enum Operand<'a, T> {
    /// Apply against a single number
    Scalar(T),
    /// Combine with another matrix's non-zero entries
    Matrix(&'a SparseMatrix<T>),
}

impl<'a, T: Float> From<T> for Operand<'a, T> {
    fn from(value: T) -> Self {
        Operand::Scalar(value)
    }
}

impl<'a, T: Float> From<&'a SparseMatrix<T>> for Operand<'a, T> {
    fn from(matrix: &'a SparseMatrix<T>) -> Self {
        Operand::Matrix(matrix)
    }
}

/// Binary elementwise operators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Rem,
    And,
    Or,
    Xor,
    LeftShift,
    SignPropagatingRightShift,
    ZeroFillRightShift,
}

/// Unary elementwise operators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOp {
    Not,
    Abs,
    Acos,
    Acosh,
    Asin,
    Asinh,
    Atan,
    Atanh,
    Cbrt,
    Ceil,
    Clz32,
    Cos,
    Cosh,
    Exp,
    ExpM1,
    Floor,
    Fround,
    Ln,
    Ln1p,
    Log10,
    Log2,
    Round,
    Signum,
    Sin,
    Sinh,
    Sqrt,
    Tan,
    Tanh,
    Trunc,
}

/// Either arity, for the table-driven application path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementOp {
    Unary(UnaryOp),
    Binary(BinaryOp),
}

/// One row of the operator table
pub struct OperatorEntry {
    /// Operator symbol, or the function name for the transcendental family
    pub symbol: &'static str,
    /// Method names, primary first
    pub names: &'static [&'static str],
    /// The operator itself
    pub op: ElementOp,
}

/// The full elementwise operator table
///
/// This is data, not code generation: the named methods below are the only
/// entry points, and [`operator_by_name`] resolves a name back to its
/// operator for the table-driven [`SparseMatrix::apply`] path.
pub const OPERATOR_TABLE: &[OperatorEntry] = &[
    // Arithmetic operators
    OperatorEntry { symbol: "+", names: &["add"], op: ElementOp::Binary(BinaryOp::Add) },
    OperatorEntry { symbol: "-", names: &["sub", "subtract"], op: ElementOp::Binary(BinaryOp::Sub) },
    OperatorEntry { symbol: "*", names: &["mul", "multiply"], op: ElementOp::Binary(BinaryOp::Mul) },
    OperatorEntry { symbol: "/", names: &["div", "divide"], op: ElementOp::Binary(BinaryOp::Div) },
    OperatorEntry { symbol: "%", names: &["rem", "modulus"], op: ElementOp::Binary(BinaryOp::Rem) },
    // Bitwise operators (32-bit integer view of the value)
    OperatorEntry { symbol: "&", names: &["and"], op: ElementOp::Binary(BinaryOp::And) },
    OperatorEntry { symbol: "|", names: &["or"], op: ElementOp::Binary(BinaryOp::Or) },
    OperatorEntry { symbol: "^", names: &["xor"], op: ElementOp::Binary(BinaryOp::Xor) },
    OperatorEntry { symbol: "<<", names: &["left_shift"], op: ElementOp::Binary(BinaryOp::LeftShift) },
    OperatorEntry { symbol: ">>", names: &["sign_propagating_right_shift"], op: ElementOp::Binary(BinaryOp::SignPropagatingRightShift) },
    OperatorEntry { symbol: ">>>", names: &["zero_fill_right_shift", "right_shift"], op: ElementOp::Binary(BinaryOp::ZeroFillRightShift) },
    OperatorEntry { symbol: "~", names: &["not"], op: ElementOp::Unary(UnaryOp::Not) },
    // Unary transcendental and rounding functions
    OperatorEntry { symbol: "abs", names: &["abs"], op: ElementOp::Unary(UnaryOp::Abs) },
    OperatorEntry { symbol: "acos", names: &["acos"], op: ElementOp::Unary(UnaryOp::Acos) },
    OperatorEntry { symbol: "acosh", names: &["acosh"], op: ElementOp::Unary(UnaryOp::Acosh) },
    OperatorEntry { symbol: "asin", names: &["asin"], op: ElementOp::Unary(UnaryOp::Asin) },
    OperatorEntry { symbol: "asinh", names: &["asinh"], op: ElementOp::Unary(UnaryOp::Asinh) },
    OperatorEntry { symbol: "atan", names: &["atan"], op: ElementOp::Unary(UnaryOp::Atan) },
    OperatorEntry { symbol: "atanh", names: &["atanh"], op: ElementOp::Unary(UnaryOp::Atanh) },
    OperatorEntry { symbol: "cbrt", names: &["cbrt"], op: ElementOp::Unary(UnaryOp::Cbrt) },
    OperatorEntry { symbol: "ceil", names: &["ceil"], op: ElementOp::Unary(UnaryOp::Ceil) },
    OperatorEntry { symbol: "clz32", names: &["clz32"], op: ElementOp::Unary(UnaryOp::Clz32) },
    OperatorEntry { symbol: "cos", names: &["cos"], op: ElementOp::Unary(UnaryOp::Cos) },
    OperatorEntry { symbol: "cosh", names: &["cosh"], op: ElementOp::Unary(UnaryOp::Cosh) },
    OperatorEntry { symbol: "exp", names: &["exp"], op: ElementOp::Unary(UnaryOp::Exp) },
    OperatorEntry { symbol: "exp_m1", names: &["exp_m1"], op: ElementOp::Unary(UnaryOp::ExpM1) },
    OperatorEntry { symbol: "floor", names: &["floor"], op: ElementOp::Unary(UnaryOp::Floor) },
    OperatorEntry { symbol: "fround", names: &["fround"], op: ElementOp::Unary(UnaryOp::Fround) },
    OperatorEntry { symbol: "ln", names: &["ln"], op: ElementOp::Unary(UnaryOp::Ln) },
    OperatorEntry { symbol: "ln_1p", names: &["ln_1p"], op: ElementOp::Unary(UnaryOp::Ln1p) },
    OperatorEntry { symbol: "log10", names: &["log10"], op: ElementOp::Unary(UnaryOp::Log10) },
    OperatorEntry { symbol: "log2", names: &["log2"], op: ElementOp::Unary(UnaryOp::Log2) },
    OperatorEntry { symbol: "round", names: &["round"], op: ElementOp::Unary(UnaryOp::Round) },
    OperatorEntry { symbol: "signum", names: &["signum"], op: ElementOp::Unary(UnaryOp::Signum) },
    OperatorEntry { symbol: "sin", names: &["sin"], op: ElementOp::Unary(UnaryOp::Sin) },
    OperatorEntry { symbol: "sinh", names: &["sinh"], op: ElementOp::Unary(UnaryOp::Sinh) },
    OperatorEntry { symbol: "sqrt", names: &["sqrt"], op: ElementOp::Unary(UnaryOp::Sqrt) },
    OperatorEntry { symbol: "tan", names: &["tan"], op: ElementOp::Unary(UnaryOp::Tan) },
    OperatorEntry { symbol: "tanh", names: &["tanh"], op: ElementOp::Unary(UnaryOp::Tanh) },
    OperatorEntry { symbol: "trunc", names: &["trunc"], op: ElementOp::Unary(UnaryOp::Trunc) },
];

/// Looks up a table entry by any of its method names
pub fn operator_by_name(name: &str) -> Option<&'static OperatorEntry> {
    OPERATOR_TABLE
        .iter()
        .find(|entry| entry.names.iter().any(|candidate| *candidate == name))
}

impl ElementOp {
    /// Primary method name of this operator
    pub fn name(self) -> &'static str {
        OPERATOR_TABLE
            .iter()
            .find(|entry| entry.op == self)
            .map(|entry| entry.names[0])
            .unwrap_or("unknown")
    }
}

/// Truncating 32-bit integer view of a float; non-finite values become 0
fn to_int32<T: Float>(value: T) -> i32 {
    match value.to_f64() {
        Some(v) if v.is_finite() => (v.trunc() as i64) as i32,
        _ => 0,
    }
}

/// Shift counts use only the low five bits of the right-hand side
fn shift_amount<T: Float>(value: T) -> u32 {
    (to_int32(value) as u32) & 31
}

fn from_int32<T: Float>(value: i32) -> T {
    T::from(value).unwrap_or_else(T::zero)
}

fn from_uint32<T: Float>(value: u32) -> T {
    T::from(value).unwrap_or_else(T::zero)
}

impl BinaryOp {
    /// Evaluates the operator on a pair of values
    pub fn eval<T: Float>(self, left: T, right: T) -> T {
        match self {
            BinaryOp::Add => left + right,
            BinaryOp::Sub => left - right,
            BinaryOp::Mul => left * right,
            BinaryOp::Div => left / right,
            BinaryOp::Rem => left % right,
            BinaryOp::And => from_int32(to_int32(left) & to_int32(right)),
            BinaryOp::Or => from_int32(to_int32(left) | to_int32(right)),
            BinaryOp::Xor => from_int32(to_int32(left) ^ to_int32(right)),
            BinaryOp::LeftShift => from_int32(to_int32(left) << shift_amount(right)),
            BinaryOp::SignPropagatingRightShift => {
                from_int32(to_int32(left) >> shift_amount(right))
            }
            BinaryOp::ZeroFillRightShift => {
                from_uint32((to_int32(left) as u32) >> shift_amount(right))
            }
        }
    }
}

impl UnaryOp {
    /// Evaluates the operator on a single value
    pub fn eval<T: Float>(self, value: T) -> T {
        match self {
            UnaryOp::Not => from_int32(!to_int32(value)),
            UnaryOp::Abs => value.abs(),
            UnaryOp::Acos => value.acos(),
            UnaryOp::Acosh => value.acosh(),
            UnaryOp::Asin => value.asin(),
            UnaryOp::Asinh => value.asinh(),
            UnaryOp::Atan => value.atan(),
            UnaryOp::Atanh => value.atanh(),
            UnaryOp::Cbrt => value.cbrt(),
            UnaryOp::Ceil => value.ceil(),
            UnaryOp::Clz32 => from_uint32((to_int32(value) as u32).leading_zeros()),
            UnaryOp::Cos => value.cos(),
            UnaryOp::Cosh => value.cosh(),
            UnaryOp::Exp => value.exp(),
            UnaryOp::ExpM1 => value.exp_m1(),
            UnaryOp::Floor => value.floor(),
            UnaryOp::Fround => match value.to_f64() {
                Some(v) => T::from(v as f32).unwrap_or_else(T::nan),
                None => T::nan(),
            },
            UnaryOp::Ln => value.ln(),
            UnaryOp::Ln1p => value.ln_1p(),
            UnaryOp::Log10 => value.log10(),
            UnaryOp::Log2 => value.log2(),
            UnaryOp::Round => value.round(),
            UnaryOp::Signum => value.signum(),
            UnaryOp::Sin => value.sin(),
            UnaryOp::Sinh => value.sinh(),
            UnaryOp::Sqrt => value.sqrt(),
            UnaryOp::Tan => value.tan(),
            UnaryOp::Tanh => value.tanh(),
            UnaryOp::Trunc => value.trunc(),
        }
    }
}

impl<T: Float> SparseMatrix<T> {
    /// Applies a binary operator against a scalar, rewriting every non-zero
    pub fn apply_binary_scalar(&mut self, op: BinaryOp, scalar: T) -> &mut Self {
        self.visit_non_zeros(|_, _, value| Visit::SetTo(op.eval(value, scalar)))
    }

    /// Combines another matrix into this one with a binary operator
    ///
    /// For every non-zero `(i, j, v)` of `other`, stores
    /// `op(self.get(i, j), v)` at `(i, j)`. Positions where `other` is zero
    /// are left untouched.
    pub fn apply_binary_matrix(&mut self, op: BinaryOp, other: &SparseMatrix<T>) -> &mut Self {
        other.for_each_non_zero(|i, j, value| {
            let merged = op.eval(self.get(i, j), value);
            self.set(i, j, merged);
        });
        self
    }

    /// Applies a binary operator against a scalar or matrix operand
    pub fn apply_binary(&mut self, op: BinaryOp, rhs: Operand<'_, T>) -> &mut Self {
        match rhs {
            Operand::Scalar(scalar) => self.apply_binary_scalar(op, scalar),
            Operand::Matrix(matrix) => self.apply_binary_matrix(op, matrix),
        }
    }

    /// Applies a unary operator to every non-zero in place
    pub fn apply_unary(&mut self, op: UnaryOp) -> &mut Self {
        self.visit_non_zeros(|_, _, value| Visit::SetTo(op.eval(value)))
    }

    /// Table-driven application of any operator
    ///
    /// The operand must match the operator's arity: binary operators require
    /// one, unary operators take none. A mismatch fails with
    /// `Error::InvalidOperand` before any entry is touched.
    pub fn apply(&mut self, op: ElementOp, operand: Option<Operand<'_, T>>) -> Result<&mut Self> {
        match (op, operand) {
            (ElementOp::Binary(binary), Some(rhs)) => Ok(self.apply_binary(binary, rhs)),
            (ElementOp::Binary(_), None) => Err(Error::InvalidOperand {
                op: op.name(),
                expected: "a scalar or matrix right-hand side",
            }),
            (ElementOp::Unary(unary), None) => Ok(self.apply_unary(unary)),
            (ElementOp::Unary(_), Some(_)) => Err(Error::InvalidOperand {
                op: op.name(),
                expected: "no operand",
            }),
        }
    }
}

macro_rules! binary_operators {
    ($(($variant:ident, $name:ident, $scalar_name:ident, $matrix_name:ident)),* $(,)?) => {
        impl<T: Float> SparseMatrix<T> {
            $(
                #[doc = concat!("Applies `", stringify!($name), "` in place against a scalar or matrix")]
                pub fn $name<'a>(&mut self, rhs: impl Into<Operand<'a, T>>) -> &mut Self
                where
                    T: 'a,
                {
                    self.apply_binary(BinaryOp::$variant, rhs.into())
                }

                #[doc = concat!("Applies `", stringify!($name), "` in place against a scalar")]
                pub fn $scalar_name(&mut self, scalar: T) -> &mut Self {
                    self.apply_binary_scalar(BinaryOp::$variant, scalar)
                }

                #[doc = concat!("Applies `", stringify!($name), "` in place against another matrix")]
                pub fn $matrix_name(&mut self, other: &SparseMatrix<T>) -> &mut Self {
                    self.apply_binary_matrix(BinaryOp::$variant, other)
                }
            )*
        }

        $(
            #[doc = concat!("Non-mutating `", stringify!($name), "`: clones the matrix before applying")]
            pub fn $name<'a, T: Float>(
                matrix: &SparseMatrix<T>,
                rhs: impl Into<Operand<'a, T>>,
            ) -> SparseMatrix<T>
            where
                T: 'a,
            {
                let mut result = matrix.clone();
                result.apply_binary(BinaryOp::$variant, rhs.into());
                result
            }
        )*
    };
}

macro_rules! unary_operators {
    ($(($variant:ident, $name:ident)),* $(,)?) => {
        impl<T: Float> SparseMatrix<T> {
            $(
                #[doc = concat!("Applies `", stringify!($name), "` to every non-zero entry in place")]
                pub fn $name(&mut self) -> &mut Self {
                    self.apply_unary(UnaryOp::$variant)
                }
            )*
        }

        $(
            #[doc = concat!("Non-mutating `", stringify!($name), "`: clones the matrix before applying")]
            pub fn $name<T: Float>(matrix: &SparseMatrix<T>) -> SparseMatrix<T> {
                let mut result = matrix.clone();
                result.apply_unary(UnaryOp::$variant);
                result
            }
        )*
    };
}

binary_operators![
    (Add, add, add_scalar, add_matrix),
    (Sub, sub, sub_scalar, sub_matrix),
    (Mul, mul, mul_scalar, mul_matrix),
    (Div, div, div_scalar, div_matrix),
    (Rem, rem, rem_scalar, rem_matrix),
    (And, and, and_scalar, and_matrix),
    (Or, or, or_scalar, or_matrix),
    (Xor, xor, xor_scalar, xor_matrix),
    (LeftShift, left_shift, left_shift_scalar, left_shift_matrix),
    (
        SignPropagatingRightShift,
        sign_propagating_right_shift,
        sign_propagating_right_shift_scalar,
        sign_propagating_right_shift_matrix
    ),
    (
        ZeroFillRightShift,
        zero_fill_right_shift,
        zero_fill_right_shift_scalar,
        zero_fill_right_shift_matrix
    ),
];

unary_operators![
    (Not, not),
    (Abs, abs),
    (Acos, acos),
    (Acosh, acosh),
    (Asin, asin),
    (Asinh, asinh),
    (Atan, atan),
    (Atanh, atanh),
    (Cbrt, cbrt),
    (Ceil, ceil),
    (Clz32, clz32),
    (Cos, cos),
    (Cosh, cosh),
    (Exp, exp),
    (ExpM1, exp_m1),
    (Floor, floor),
    (Fround, fround),
    (Ln, ln),
    (Ln1p, ln_1p),
    (Log10, log10),
    (Log2, log2),
    (Round, round),
    (Signum, signum),
    (Sin, sin),
    (Sinh, sinh),
    (Sqrt, sqrt),
    (Tan, tan),
    (Tanh, tanh),
    (Trunc, trunc),
];

impl<T: Float> SparseMatrix<T> {
    /// Alias for [`sub`](Self::sub)
    pub fn subtract<'a>(&mut self, rhs: impl Into<Operand<'a, T>>) -> &mut Self
    where
        T: 'a,
    {
        self.sub(rhs)
    }

    /// Alias for [`mul`](Self::mul)
    pub fn multiply<'a>(&mut self, rhs: impl Into<Operand<'a, T>>) -> &mut Self
    where
        T: 'a,
    {
        self.mul(rhs)
    }

    /// Alias for [`div`](Self::div)
    pub fn divide<'a>(&mut self, rhs: impl Into<Operand<'a, T>>) -> &mut Self
    where
        T: 'a,
    {
        self.div(rhs)
    }

    /// Alias for [`rem`](Self::rem)
    pub fn modulus<'a>(&mut self, rhs: impl Into<Operand<'a, T>>) -> &mut Self
    where
        T: 'a,
    {
        self.rem(rhs)
    }

    /// Alias for [`zero_fill_right_shift`](Self::zero_fill_right_shift)
    pub fn right_shift<'a>(&mut self, rhs: impl Into<Operand<'a, T>>) -> &mut Self
    where
        T: 'a,
    {
        self.zero_fill_right_shift(rhs)
    }
}
