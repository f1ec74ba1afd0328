// logtally - core/totals.rs
//
// Extraction and summation of decimal numbers embedded in prose, e.g.
// amounts reported inside log messages ("payout 27.45 received").
//
// Grammar: a number is a whitespace-delimited token of the form
// `\d+\.\d+` (terminating decimal, digits on both sides of the dot).
// Integers, signed numbers and punctuation-attached numbers such as
// "(3.5)" or "1.5," are not counted.

use regex::Regex;
use std::sync::OnceLock;

fn decimal_token() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\d+\.\d+$").expect("decimal_token: invalid regex"))
}

/// Iterate over the decimal numbers embedded in `text`, in order of
/// appearance.
pub fn extract_decimals(text: &str) -> impl Iterator<Item = f64> + '_ {
    let re = decimal_token();
    text.split_whitespace()
        .filter(|token| re.is_match(token))
        // Token shape guarantees a parseable float.
        .filter_map(|token| token.parse::<f64>().ok())
}

/// Sum of all embedded decimal numbers in `text`. 0.0 when none occur.
pub fn sum_decimals(text: &str) -> f64 {
    extract_decimals(text).sum()
}
