/// Wall-clock seconds since the Unix epoch. Not monotonic; only used for rough
/// load and export timings, where [`elapsed_ms`] clamps a clock step back to zero.
#[cfg(not(target_arch = "wasm32"))]
pub fn current_time_secs() -> f64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs_f64()
}

/// Seconds since page load, from the browser's high resolution timer.
#[cfg(target_arch = "wasm32")]
pub fn current_time_secs() -> f64 {
    web_sys::window()
        .and_then(|window| window.performance())
        .map(|perf| perf.now() / 1000.0)
        .unwrap_or(0.0)
}

/// Milliseconds elapsed since `started`, a value from [`current_time_secs`].
pub fn elapsed_ms(started: f64) -> f64 {
    (current_time_secs() - started).max(0.0) * 1000.0
}
