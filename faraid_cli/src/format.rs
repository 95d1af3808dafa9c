//! Currency rendering for the console front end.
//!
//! Monetary values display in the fixed regional format of the original
//! tool: Rupee symbol, two fixed decimal digits, Indian-system grouping
//! (the last three digits, then groups of two). The core stays
//! currency-agnostic; only this boundary knows about rupees.

/// Format a monetary value as Indian Rupees, e.g. `900000.0` -> `₹9,00,000.00`.
pub fn format_inr(value: f64) -> String {
    let magnitude = format!("{:.2}", value.abs());
    let (int_part, frac_part) = match magnitude.split_once('.') {
        Some(parts) => parts,
        None => (magnitude.as_str(), "00"),
    };
    let sign = if value < 0.0 { "-" } else { "" };
    format!("{}₹{}.{}", sign, group_indian(int_part), frac_part)
}

/// Apply Indian digit grouping: `1234567` -> `12,34,567`.
fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }
    let (head, tail) = digits.split_at(digits.len() - 3);

    let mut pairs: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 2 {
        pairs.push(&head[end - 2..end]);
        end -= 2;
    }
    pairs.push(&head[..end]);
    pairs.reverse();

    format!("{},{}", pairs.join(","), tail)
}
