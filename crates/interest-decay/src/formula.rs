/// Exponential decay factor `e^(-dt / τ)` for `dt` elapsed seconds.
///
/// Range: (0.0, 1.0]. Non-positive `dt` returns 1.0 (no decay, no growth).
pub fn decay_factor(dt_secs: f64, tau_secs: f64) -> f64 {
    if dt_secs <= 0.0 || tau_secs <= 0.0 {
        return 1.0;
    }
    (-dt_secs / tau_secs).exp()
}

/// Score after `dt` seconds without a mention. Clamped at zero.
pub fn decayed_score(score: f64, dt_secs: f64, tau_secs: f64) -> f64 {
    (score * decay_factor(dt_secs, tau_secs)).max(0.0)
}
