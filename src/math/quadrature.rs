/// Composite Simpson integration of uniformly spaced samples.
///
/// Applies Simpson's rule over consecutive pairs of intervals and closes a
/// leftover odd interval with a trapezoid. Returns `0.0` for fewer than two
/// samples (an empty or single-point domain has no extent).
#[must_use]
pub fn simpson_uniform(samples: &[f64], step: f64) -> f64 {
    if samples.len() < 2 {
        return 0.0;
    }

    let mut total = 0.0;
    let mut i = 0;
    while i + 2 < samples.len() {
        total += step / 3.0 * (samples[i] + 4.0 * samples[i + 1] + samples[i + 2]);
        i += 2;
    }
    if i + 1 < samples.len() {
        // Odd interval count: trapezoid over the final interval.
        total += step / 2.0 * (samples[i] + samples[i + 1]);
    }
    total
}
