//! Indian rupee formatting for the presentation boundary
//!
//! Compact amounts use crore (1e7), lakh (1e5) and thousand suffixes. Full
//! amounts use Indian digit grouping: the last three digits, then pairs
//! (`12,34,567`).

pub const CURRENCY_SYMBOL: &str = "₹";
pub const CURRENCY_CODE: &str = "INR";

const CRORE: f64 = 10_000_000.0;
const LAKH: f64 = 100_000.0;
const THOUSAND: f64 = 1_000.0;

/// Group an unsigned integer string the Indian way
fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }
    let (head, tail) = digits.split_at(digits.len() - 3);

    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();
    format!("{},{}", groups.join(","), tail)
}

fn sign(amount: f64) -> &'static str {
    if amount < 0.0 {
        "-"
    } else {
        ""
    }
}

/// Full amount with grouping and a fixed number of decimals, rounding
/// half away from zero
fn format_grouped(amount: f64, decimals: usize) -> String {
    let scale = 10f64.powi(decimals as i32);
    let rounded = (amount.abs() * scale).round() / scale;
    // Avoid "-₹0" for amounts that round to zero
    let sign = if rounded == 0.0 { "" } else { sign(amount) };

    let text = format!("{:.*}", decimals, rounded);
    let (whole, fraction) = match text.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (text.as_str(), None),
    };

    match fraction {
        Some(fraction) => format!(
            "{}{}{}.{}",
            sign,
            CURRENCY_SYMBOL,
            group_indian(whole),
            fraction
        ),
        None => format!("{}{}{}", sign, CURRENCY_SYMBOL, group_indian(whole)),
    }
}

fn compact(amount: f64, unit: f64, suffix: &str) -> String {
    let scaled = ((amount.abs() / unit) * 10.0).round() / 10.0;
    format!("{}{}{:.1}{}", sign(amount), CURRENCY_SYMBOL, scaled, suffix)
}

/// Format an amount in rupees.
///
/// With `compact`, amounts of a thousand or more collapse to `₹x.yK`,
/// `₹x.yL` or `₹x.yCr`. Everything else renders whole rupees with Indian
/// grouping. Non-finite amounts render as `₹0`.
pub fn format_inr(amount: f64, compact_form: bool) -> String {
    if !amount.is_finite() {
        return format!("{}0", CURRENCY_SYMBOL);
    }

    if compact_form {
        let magnitude = amount.abs();
        if magnitude >= CRORE {
            return compact(amount, CRORE, "Cr");
        } else if magnitude >= LAKH {
            return compact(amount, LAKH, "L");
        } else if magnitude >= THOUSAND {
            return compact(amount, THOUSAND, "K");
        }
    }

    format_grouped(amount, 0)
}

/// Format a full amount with grouping and either no decimals or two
pub fn format_inr_detailed(amount: f64, show_decimals: bool) -> String {
    if !amount.is_finite() {
        return format!("{}0", CURRENCY_SYMBOL);
    }
    format_grouped(amount, if show_decimals { 2 } else { 0 })
}

/// Parse a formatted amount back into rupees.
///
/// Strips the symbol, commas and whitespace and honours `Cr`, `L` and `K`
/// suffixes. Anything unparseable is 0.
pub fn parse_inr_amount(text: &str) -> f64 {
    let cleaned: String = text
        .chars()
        .filter(|c| !c.is_whitespace() && *c != ',' && *c != '₹')
        .collect();

    let (number, multiplier) = if let Some(n) = cleaned.strip_suffix("Cr") {
        (n, CRORE)
    } else if let Some(n) = cleaned.strip_suffix('L') {
        (n, LAKH)
    } else if let Some(n) = cleaned.strip_suffix('K') {
        (n, THOUSAND)
    } else {
        (cleaned.as_str(), 1.0)
    };

    number
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite())
        .map(|n| n * multiplier)
        .unwrap_or(0.0)
}
