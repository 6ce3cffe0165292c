//! Bank SMS text parsing
//!
//! Best-effort extraction of spend details from free-form SMS text:
//! the first decimal number becomes the amount, a `upi` substring marks
//! the payment method, and a fixed keyword list identifies well-known
//! merchants. Anything that cannot be extracted is left as `None`.

use once_cell::sync::Lazy;
use regex::Regex;

static AMOUNT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\d+[.,]?\d*)").unwrap());

/// Merchants recognized by keyword match, lowercase
const MERCHANT_KEYWORDS: &[&str] = &[
    "amazon", "zomato", "uber", "ola", "swiggy", "myntra", "flipkart",
];

/// Fields extracted from an SMS body
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedSms {
    /// First decimal number found in the text, commas stripped
    pub amount: Option<f64>,
    /// Title-cased merchant, when a known keyword matched
    pub merchant: Option<String>,
    /// Payment method, currently only `UPI` detection
    pub method: Option<String>,
}

/// Parse a bank SMS body into its spend fields
pub fn parse_sms(text: &str) -> ParsedSms {
    let mut parsed = ParsedSms::default();

    if let Some(m) = AMOUNT_RE.find(text) {
        parsed.amount = m.as_str().replace(',', "").parse::<f64>().ok();
    }

    let lower = text.to_lowercase();
    if lower.contains("upi") {
        parsed.method = Some("UPI".to_string());
    }
    for keyword in MERCHANT_KEYWORDS {
        if lower.contains(keyword) {
            parsed.merchant = Some(title_case(keyword));
            break;
        }
    }

    parsed
}

fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
