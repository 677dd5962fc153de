//! Numerical primitives on the unit-spaced station grid
//!
//! Every array handled here is indexed by station, with a spacing of one unit
//! of beam-axis length between neighbouring entries.

/// Cumulative trapezoidal integral of `values` over a unit-spaced grid.
///
/// The result has the same length as the input and starts at zero, so
/// `out[x]` is the integral from station 0 to station `x`.
///
/// # Example
/// ```
/// use beammech::math::cumulative_trapezoid;
///
/// let out = cumulative_trapezoid(&[0.0, 1.0, 2.0]);
/// assert_eq!(out, vec![0.0, 0.5, 2.0]);
/// ```
pub fn cumulative_trapezoid(values: &[f64]) -> Vec<f64> {
    let mut out = Vec::with_capacity(values.len());
    let mut sum = 0.0;
    if let Some(&first) = values.first() {
        out.push(0.0);
        let mut prev = first;
        for &v in &values[1..] {
            sum += (prev + v) / 2.0;
            out.push(sum);
            prev = v;
        }
    }
    out
}

/// Add `amount` to every station from `from` onward (a step function).
pub fn add_step(values: &mut [f64], from: usize, amount: f64) {
    if let Some(tail) = values.get_mut(from..) {
        for v in tail {
            *v += amount;
        }
    }
}

/// Add `slope * (x - from)` to every station `x >= from` (the exact integral of a step).
pub fn add_ramp(values: &mut [f64], from: usize, slope: f64) {
    if let Some(tail) = values.get_mut(from..) {
        for (i, v) in tail.iter_mut().enumerate() {
            *v += slope * i as f64;
        }
    }
}

/// Build a per-station array of `length + 1` entries by linear interpolation
/// between `(x, value)` breakpoints.
///
/// Breakpoints are sorted by `x` first. Stations before the first breakpoint
/// take its value, stations after the last take the last value. Two
/// breakpoints at the same `x` make a step; the later one wins from that
/// station onward. An empty breakpoint list yields zeros.
pub fn interpolate(points: &[(f64, f64)], length: usize) -> Vec<f64> {
    let mut sorted = points.to_vec();
    sorted.sort_by(|a, b| a.0.total_cmp(&b.0));

    (0..=length)
        .map(|station| {
            let x = station as f64;
            let Some(&(x_first, v_first)) = sorted.first() else {
                return 0.0;
            };
            if x <= x_first {
                // Last of any duplicates at the first breakpoint
                return sorted
                    .iter()
                    .take_while(|p| p.0 == x_first)
                    .last()
                    .map_or(v_first, |p| p.1);
            }
            for pair in sorted.windows(2) {
                let (x0, v0) = pair[0];
                let (x1, v1) = pair[1];
                if x >= x0 && x < x1 {
                    return v0 + (v1 - v0) * (x - x0) / (x1 - x0);
                }
            }
            sorted.last().map_or(0.0, |p| p.1)
        })
        .collect()
}
