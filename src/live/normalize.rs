//! Conversions from spoken values to the ranges Live expects.

/// Tempo range Live accepts, in BPM.
pub const TEMPO_RANGE: (f64, f64) = (20.0, 999.0);

/// Spoken track/clip numbers start at 1; Live indices start at 0.
pub fn index_from_spoken(n: f64) -> u32 {
    if !n.is_finite() || n < 1.0 {
        return 0;
    }
    (n.trunc() as u32).saturating_sub(1)
}

/// 0–100 reads as a percentage; anything else is taken as a raw level.
/// Result is clamped to 0.0–1.0.
pub fn volume(value: f64) -> f64 {
    let v = if (0.0..=100.0).contains(&value) {
        value / 100.0
    } else {
        value
    };
    v.clamp(0.0, 1.0)
}

/// -100–100 reads as a percentage. Result is clamped to -1.0–1.0.
pub fn pan(value: f64) -> f64 {
    let v = if (-100.0..=100.0).contains(&value) {
        value / 100.0
    } else {
        value
    };
    v.clamp(-1.0, 1.0)
}

pub fn tempo(bpm: f64) -> f64 {
    bpm.clamp(TEMPO_RANGE.0, TEMPO_RANGE.1)
}
