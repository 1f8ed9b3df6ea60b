use crate::types::Cost;

// Format currency
pub fn format_currency(value: f64) -> String {
    Cost::new(value).to_formatted_string()
}

// Format percentage with two decimals
pub fn format_percent(value: f64) -> String {
    format!("{:.2}%", value)
}

// Format large counts compactly (e.g., 1.50M)
pub fn format_compact(n: f64) -> String {
    if n >= 1_000_000_000.0 {
        format!("{:.2}B", n / 1_000_000_000.0)
    } else if n >= 1_000_000.0 {
        format!("{:.2}M", n / 1_000_000.0)
    } else if n >= 1_000.0 {
        format!("{:.2}K", n / 1_000.0)
    } else {
        format!("{:.0}", n)
    }
}

// Format number with thousands separator
pub fn format_number_with_commas(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::new();
    let mut count = 0;

    for c in s.chars().rev() {
        if count == 3 {
            result.push(',');
            count = 0;
        }
        result.push(c);
        count += 1;
    }

    result.chars().rev().collect()
}
