use serde_json::Value;

pub(crate) const KB_PER_GB: f64 = 1_048_576.0;

/// Numeric value of an attribute. Strings such as `"16432844kB"` yield their leading number.
pub(crate) fn parse_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => parse_leading_number(text),
        _ => None,
    }
}

pub(crate) fn parse_leading_number(text: &str) -> Option<f64> {
    let trimmed = text.trim_start();
    let mut end = 0;
    let mut seen_dot = false;

    for (index, c) in trimmed.char_indices() {
        match c {
            '0'..='9' => end = index + 1,
            '.' if !seen_dot => seen_dot = true,
            '-' | '+' if index == 0 => {}
            _ => break,
        }
    }

    if end == 0 {
        return None;
    }

    trimmed[..end].parse::<f64>().ok()
}

pub(crate) fn kb_to_gb(kilobytes: f64) -> f64 {
    kilobytes / KB_PER_GB
}

pub(crate) fn ceil_gb(gigabytes: f64) -> i64 {
    gigabytes.ceil() as i64
}
