//! Money-weighted return (XIRR) and compound annual growth rate.

use super::cash_flow::{self, CashFlow};
use super::error::NesteggError;

const INITIAL_GUESS: f64 = 0.10;
const CONVERGENCE_TOLERANCE: f64 = 1e-7;
const DERIVATIVE_EPSILON: f64 = 1e-10;
const MAX_ITERATIONS: usize = 100;

/// Annualized money-weighted return, tagged with whether the root search
/// actually converged. `rate_pct` is always populated: on a derivative
/// bail-out or iteration cap it holds the best-effort estimate.
#[derive(Debug, Clone, PartialEq)]
pub struct MoneyWeightedReturn {
    pub rate_pct: f64,
    pub converged: bool,
    pub iterations: usize,
}

impl MoneyWeightedReturn {
    fn degenerate() -> Self {
        MoneyWeightedReturn {
            rate_pct: 0.0,
            converged: true,
            iterations: 0,
        }
    }
}

/// Solves `Σ amount_i / (1+r)^t_i = 0` for the annualized rate `r` via
/// Newton-Raphson, where `t_i` is the time of flow `i` in 365.25-day years
/// since the earliest flow. Outflows must be negative, inflows positive.
///
/// Fewer than two flows yields a 0% rate. A series whose amounts all share
/// one sign has no root; the solver then reports its best-effort rate with
/// `converged == false`.
pub fn money_weighted_return(flows: &[CashFlow]) -> Result<MoneyWeightedReturn, NesteggError> {
    for flow in flows {
        NesteggError::ensure_finite(flow.amount, "cash flow amount")?;
    }

    if flows.len() < 2 {
        return Ok(MoneyWeightedReturn::degenerate());
    }

    let sorted = cash_flow::sorted_by_date(flows);
    let origin = sorted[0].date;
    let series: Vec<(f64, f64)> = sorted
        .iter()
        .map(|f| (f.amount, cash_flow::years_since(origin, f.date)))
        .collect();

    let mut rate = INITIAL_GUESS;

    for iteration in 0..MAX_ITERATIONS {
        let (npv, derivative) = npv_and_derivative(&series, rate);

        if derivative.abs() < DERIVATIVE_EPSILON {
            // Numerically unstable region; stop with what we have.
            return Ok(MoneyWeightedReturn {
                rate_pct: rate * 100.0,
                converged: false,
                iterations: iteration,
            });
        }

        let next = rate - npv / derivative;

        if (next - rate).abs() < CONVERGENCE_TOLERANCE {
            return Ok(MoneyWeightedReturn {
                rate_pct: next * 100.0,
                converged: true,
                iterations: iteration + 1,
            });
        }

        rate = next;
    }

    Ok(MoneyWeightedReturn {
        rate_pct: rate * 100.0,
        converged: false,
        iterations: MAX_ITERATIONS,
    })
}

fn npv_and_derivative(series: &[(f64, f64)], rate: f64) -> (f64, f64) {
    let mut npv = 0.0;
    let mut derivative = 0.0;
    for &(amount, years) in series {
        npv += amount * (1.0 + rate).powf(-years);
        derivative += -years * amount * (1.0 + rate).powf(-years - 1.0);
    }
    (npv, derivative)
}

/// Compound annual growth rate between two point-in-time values, as a
/// percentage. Zero when `beginning <= 0` or `years <= 0`, which would
/// otherwise hit a division or root-of-negative domain error.
pub fn cagr(beginning: f64, ending: f64, years: f64) -> Result<f64, NesteggError> {
    NesteggError::ensure_finite(beginning, "beginning value")?;
    NesteggError::ensure_finite(ending, "ending value")?;
    NesteggError::ensure_finite(years, "years")?;

    if beginning <= 0.0 || years <= 0.0 {
        return Ok(0.0);
    }

    Ok(((ending / beginning).powf(1.0 / years) - 1.0) * 100.0)
}
