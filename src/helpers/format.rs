//! Number formatting shared by location copy.

/// `12345` -> `"12,345"`.
pub fn format_number(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Fraction to whole percent: `0.684` -> `"68%"`.
pub fn format_percent(fraction: f64) -> String {
    format!("{}%", (fraction * 100.0).round() as i64)
}

/// Fixed decimals with ties rounded away from zero: `2.25` -> `"2.3"`.
///
/// `{:.N}` alone rounds exact ties to even.
pub fn format_fixed(value: f64, decimals: u32) -> String {
    let scale = 10f64.powi(decimals as i32);
    let rounded = (value * scale).round() / scale;
    format!("{:.*}", decimals as usize, rounded)
}
