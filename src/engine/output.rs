//! Snapshot of the engine's displayed values.
//!
//! `RegressionSummary` gathers the numbers the view layer reads: the best fit
//! equation and correlation, My Line's equation, and both sums of squared
//! residuals. Its `Display` renders a plain text report.

use core::fmt;
use num_traits::Float;

use crate::algorithms::fit::FitResult;
use crate::algorithms::line::LineModel;

/// Point-in-time copy of the engine outputs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegressionSummary<T> {
    /// Number of points on the graph.
    pub point_count: usize,
    /// Best fit parameters, `None` when undefined.
    pub fit: Option<FitResult<T>>,
    /// My Line in slope-intercept form.
    pub my_line: LineModel<T>,
    /// Sum of squared residuals against My Line.
    pub my_line_ssr: T,
    /// Sum of squared residuals against the best fit, `None` when undefined.
    pub best_fit_ssr: Option<T>,
}

impl<T: Float> fmt::Display for RegressionSummary<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Summary:")?;
        writeln!(f, "  Data points: {}", self.point_count)?;
        writeln!(f)?;

        writeln!(f, "My Line:")?;
        writeln!(
            f,
            "  Equation:   y = {:.6} x {}",
            num(self.my_line.slope),
            signed(self.my_line.intercept)
        )?;
        writeln!(f, "  Sum of squared residuals: {:.6}", num(self.my_line_ssr))?;
        writeln!(f)?;

        writeln!(f, "Best Fit Line:")?;
        match self.fit {
            Some(fit) => {
                writeln!(
                    f,
                    "  Equation:   y = {:.6} x {}",
                    num(fit.slope),
                    signed(fit.intercept)
                )?;
                match fit.pearson {
                    Some(r) => writeln!(f, "  Pearson r:  {:.6}", num(r))?,
                    None => writeln!(f, "  Pearson r:  undefined")?,
                }
                if let Some(ssr) = self.best_fit_ssr {
                    writeln!(f, "  Sum of squared residuals: {:.6}", num(ssr))?;
                }
            }
            None => writeln!(f, "  Undefined")?,
        }
        Ok(())
    }
}

#[inline]
fn num<T: Float>(v: T) -> f64 {
    v.to_f64().unwrap_or(f64::NAN)
}

fn signed<T: Float>(v: T) -> SignedTerm {
    SignedTerm(num(v))
}

struct SignedTerm(f64);

impl fmt::Display for SignedTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 < 0.0 {
            write!(f, "- {:.6}", -self.0)
        } else {
            write!(f, "+ {:.6}", self.0)
        }
    }
}
