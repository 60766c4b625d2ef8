//! Seam to an external constant-expression evaluator.
//!
//! The scanner only finds where initializers are; computing their
//! values needs the host language's full expression grammar, which is
//! the [`Evaluator`]'s job. [`LiteralEvaluator`] covers plain integer
//! literals, enough for most hand-written enumerations.

/// Error produced while evaluating an initializer expression.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EvalError {
    /// The initializer has no expression after `=`.
    #[error("empty initializer expression")]
    Empty,
    /// The evaluator does not understand the expression.
    #[error("cannot evaluate '{0}'")]
    Unsupported(String),
    /// The value does not fit in 128 bits.
    #[error("'{0}' overflows")]
    Overflow(String),
}

/// Evaluates the text of an explicit initializer to an integer.
pub trait Evaluator {
    /// Evaluate `expr`, the trimmed text after `=`.
    ///
    /// # Errors
    ///
    /// Returns `EvalError` when the expression cannot be evaluated.
    fn evaluate(&self, expr: &str) -> Result<i128, EvalError>;
}

impl<F> Evaluator for F
where
    F: Fn(&str) -> Result<i128, EvalError>,
{
    fn evaluate(&self, expr: &str) -> Result<i128, EvalError> {
        self(expr)
    }
}

/// Rejects every expression. Useful when all explicit values are
/// supplied up front.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoEvaluator;

impl Evaluator for NoEvaluator {
    fn evaluate(&self, expr: &str) -> Result<i128, EvalError> {
        Err(EvalError::Unsupported(expr.to_string()))
    }
}

/// Evaluates integer literals: optional sign, `0x`/`0b`/`0` prefixes,
/// `'` digit separators and `u`/`l` suffixes.
#[derive(Debug, Clone, Copy, Default)]
pub struct LiteralEvaluator;

impl Evaluator for LiteralEvaluator {
    fn evaluate(&self, expr: &str) -> Result<i128, EvalError> {
        parse_literal(expr)
    }
}

fn parse_literal(expr: &str) -> Result<i128, EvalError> {
    let text = expr.trim();
    if text.is_empty() {
        return Err(EvalError::Empty);
    }

    let (negative, unsigned) = match text.as_bytes()[0] {
        b'-' => (true, text[1..].trim_start()),
        b'+' => (false, text[1..].trim_start()),
        _ => (false, text),
    };

    let body = unsigned.trim_end_matches(['u', 'U', 'l', 'L']);
    let digits: String = body.chars().filter(|&c| c != '\'').collect();

    let (radix, digits) = if let Some(hex) = digits
        .strip_prefix("0x")
        .or_else(|| digits.strip_prefix("0X"))
    {
        (16, hex)
    } else if let Some(bin) = digits
        .strip_prefix("0b")
        .or_else(|| digits.strip_prefix("0B"))
    {
        (2, bin)
    } else if digits.len() > 1 && digits.starts_with('0') {
        (8, &digits[1..])
    } else {
        (10, digits.as_str())
    };

    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
        return Err(EvalError::Unsupported(text.to_string()));
    }

    let magnitude = i128::from_str_radix(digits, radix)
        .map_err(|_| EvalError::Overflow(text.to_string()))?;

    if negative {
        magnitude
            .checked_neg()
            .ok_or_else(|| EvalError::Overflow(text.to_string()))
    } else {
        Ok(magnitude)
    }
}
