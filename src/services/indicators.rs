//! Point indicators over a NAV value series.
//!
//! Every function here is total over non-empty input: short series get
//! neutral sentinels (momentum 0, RSI 50) instead of NaN.

/// Below this magnitude the quadratic normal-equation system is treated as singular.
pub const SINGULAR_DETERMINANT: f64 = 1e-10;

/// Difference between the last two values, 0 when there is only one.
fn last_step(values: &[f64]) -> f64 {
    match values {
        [.., prev, last] => last - prev,
        _ => 0.0,
    }
}

/// Linear regression trend line for y-values using x = 0..n-1
/// Returns (slope m, intercept b) for y = m*x + b
///
/// Uses iterator folds rather than mutable loops.
pub fn regression_trend(values: &[f64]) -> (f64, f64) {
    let n = values.len();
    if n == 0 {
        return (0.0, 0.0);
    }
    if n == 1 {
        return (0.0, values[0]);
    }

    let n_f = n as f64;

    let (sum_x, sum_y, sum_xy, sum_x2) = values
        .iter()
        .enumerate()
        .fold((0.0, 0.0, 0.0, 0.0), |(sx, sy, sxy, sx2), (i, &y)| {
            let x = i as f64;
            (sx + x, sy + y, sxy + x * y, sx2 + x * x)
        });

    let denom = n_f * sum_x2 - sum_x * sum_x;
    if denom == 0.0 {
        // fallback: horizontal line at mean
        return (0.0, sum_y / n_f);
    }

    let m = (n_f * sum_xy - sum_x * sum_y) / denom;
    let b = (sum_y - m * sum_x) / n_f;

    (m, b)
}

/// Extrapolate the least-squares line one step past the end (x = n).
pub fn linear_regression_forecast(values: &[f64]) -> f64 {
    let (slope, intercept) = regression_trend(values);
    slope * values.len() as f64 + intercept
}

fn det3(m: &[[f64; 3]; 3]) -> f64 {
    m[0][0] * (m[1][1] * m[2][2] - m[1][2] * m[2][1])
        - m[0][1] * (m[1][0] * m[2][2] - m[1][2] * m[2][0])
        + m[0][2] * (m[1][0] * m[2][1] - m[1][1] * m[2][0])
}

/// Quadratic least-squares fit `y = a + b*x + c*x^2`, evaluated at x = n.
///
/// The normal equations are built from the power sums Σx^k (k ≤ 4) and
/// Σx^k·y (k ≤ 2) and solved with Cramer's rule. Falls back to
/// [`linear_regression_forecast`] when the system is singular or when there
/// are too few points to leave any residual (n ≤ 3, where the quadratic
/// would just interpolate the input).
pub fn polynomial_regression_forecast(values: &[f64]) -> f64 {
    let n = values.len();
    if n <= 3 {
        return linear_regression_forecast(values);
    }

    // s[k] = Σx^k, t[k] = Σx^k·y
    let (s, t) = values.iter().enumerate().fold(
        ([0.0_f64; 5], [0.0_f64; 3]),
        |(mut s, mut t), (i, &y)| {
            let x = i as f64;
            let mut xk = 1.0;
            for k in 0..5 {
                s[k] += xk;
                if k < 3 {
                    t[k] += xk * y;
                }
                xk *= x;
            }
            (s, t)
        },
    );

    let matrix = [
        [s[0], s[1], s[2]],
        [s[1], s[2], s[3]],
        [s[2], s[3], s[4]],
    ];

    let det = det3(&matrix);
    if det.abs() < SINGULAR_DETERMINANT {
        return linear_regression_forecast(values);
    }

    // Cramer's rule: replace column `col` with the right-hand side
    let solve = |col: usize| {
        let mut replaced = matrix;
        for (row, rhs) in t.iter().enumerate() {
            replaced[row][col] = *rhs;
        }
        det3(&replaced) / det
    };

    let (a, b, c) = (solve(0), solve(1), solve(2));
    let x = n as f64;

    a + b * x + c * x * x
}

/// Weighted Moving Average over the trailing `period` values plus a trend term.
///
/// Weights run 1 (oldest) to m (newest) where m = min(period, n). The last
/// first-difference, scaled by 1.5, is added as a one-step extrapolation.
pub fn wma_forecast(values: &[f64], period: usize) -> f64 {
    if values.is_empty() {
        return 0.0;
    }

    let window = period.clamp(1, values.len());
    let recent = &values[values.len() - window..];

    let (weighted_sum, weight_total) = recent
        .iter()
        .enumerate()
        .fold((0.0, 0.0), |(ws, wt), (i, &v)| {
            let weight = (i + 1) as f64;
            (ws + weight * v, wt + weight)
        });

    weighted_sum / weight_total + 1.5 * last_step(values)
}

/// Exponential Moving Average over the full series, nudged forward by one step.
///
/// Seeded at `values[0]` with smoothing factor k = 2 / (period + 1); the
/// forecast adds k times the last first-difference.
pub fn ema_forecast(values: &[f64], period: usize) -> f64 {
    let Some((&first, rest)) = values.split_first() else {
        return 0.0;
    };

    let k = 2.0 / (period as f64 + 1.0);
    let ema = rest.iter().fold(first, |prev, &v| v * k + prev * (1.0 - k));

    ema + k * last_step(values)
}

/// Raw change over a lookback window: `values[n-1] - values[n-lookback]`.
///
/// Returns 0 when fewer than `lookback` values exist.
pub fn momentum(values: &[f64], lookback: usize) -> f64 {
    let n = values.len();
    if lookback == 0 || n < lookback {
        return 0.0;
    }
    values[n - 1] - values[n - lookback]
}

/// Relative Strength Index (RSI)
///
/// Simple-average form over the last `period` first-differences:
/// 1. gains = Σ positive changes, losses = Σ |negative changes|
/// 2. RS = (gains / period) / (losses / period)
/// 3. RSI = 100 - (100 / (1 + RS))
///
/// Returns 100 when there were no losses and the neutral 50 when fewer than
/// `period + 1` values exist.
pub fn rsi(values: &[f64], period: usize) -> f64 {
    if period == 0 || values.len() < period + 1 {
        return 50.0;
    }

    let window = &values[values.len() - period - 1..];
    let (gains, losses) = window
        .windows(2)
        .map(|w| w[1] - w[0])
        .fold((0.0, 0.0), |(g, l), change| {
            if change > 0.0 {
                (g + change, l)
            } else {
                (g, l - change)
            }
        });

    let avg_gain = gains / period as f64;
    let avg_loss = losses / period as f64;

    if avg_loss == 0.0 {
        return 100.0;
    }

    let rs = avg_gain / avg_loss;
    100.0 - (100.0 / (1.0 + rs))
}

/// Population standard deviation of the raw values (not of returns)
pub fn volatility(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }

    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
    variance.sqrt()
}
