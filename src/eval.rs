//! Arithmetic evaluation seam. The keypad never parses expressions itself;
//! it hands the buffer to an `Evaluator` and only consumes success/failure.

use anyhow::{bail, Context, Result};

/// Collaborator contract for evaluating a finished expression string.
pub trait Evaluator {
    fn evaluate(&self, expr: &str) -> Result<f64>;
}

/// Default evaluator backed by the `meval` expression parser.
///
/// Supports `+ - * /`, parentheses, and whatever else meval accepts; the
/// calculator treats any error uniformly, so the exact grammar is meval's
/// contract, not ours.
#[derive(Debug, Default, Clone, Copy)]
pub struct ExprEvaluator;

impl Evaluator for ExprEvaluator {
    fn evaluate(&self, expr: &str) -> Result<f64> {
        let value = meval::eval_str(expr)
            .map_err(|err| anyhow::anyhow!("{err}"))
            .with_context(|| format!("expression {expr:?} did not evaluate"))?;
        if !value.is_finite() {
            // IEEE division by zero yields inf/NaN; surface it as a failure
            // so the user sees the error state instead of "inf".
            bail!("expression {expr:?} has no finite value");
        }
        Ok(value)
    }
}

/// Render an evaluation result as the display string.
/// Whole numbers drop the fractional part; everything else is trimmed to a
/// reasonable precision without trailing zeros.
pub fn format_result(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{value:.10}")
            .trim_end_matches('0')
            .trim_end_matches('.')
            .to_string()
    }
}
