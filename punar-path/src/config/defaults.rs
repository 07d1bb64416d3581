//! Default value functions for serde deserialization.

pub fn window_half_size() -> f64 {
    0.2
}

pub fn angle_threshold_deg() -> f64 {
    10.0
}

pub fn teach_color() -> String {
    "#44dd44".to_string()
}

/// Cycled through for repeat runs that do not set a colour.
pub const REPEAT_COLORS: [&str; 4] = ["#4444dd", "#dd4444", "#dddd44", "#44dddd"];

pub fn output_dir() -> String {
    "./results".to_string()
}

pub fn enabled() -> bool {
    true
}

pub fn arrow_stride() -> usize {
    1
}
