//! Loan instalment estimate and price display helpers.

/// Share of the price financed by the loan (20% down payment).
pub const LOAN_TO_VALUE: f64 = 0.8;
/// Annual interest rate assumed for the estimate.
pub const ANNUAL_RATE: f64 = 0.085;
/// Loan tenure in months (20 years).
pub const TENURE_MONTHS: i32 = 240;

const CRORE: f64 = 10_000_000.0;
const LAKH: f64 = 100_000.0;

/// Estimated monthly instalment (EMI) for buying at `price`.
pub fn monthly_payment(price: f64) -> f64 {
    let principal = price * LOAN_TO_VALUE;
    let rate = ANNUAL_RATE / 12.0;
    let growth = (1.0 + rate).powi(TENURE_MONTHS);
    principal * rate * growth / (growth - 1.0)
}

/// Format a rupee amount the way listing cards show it: crores and lakhs to
/// two decimals, smaller amounts with thousands separators.
pub fn format_price(price: f64) -> String {
    if price >= CRORE {
        format!("₹ {:.2} Cr", price / CRORE)
    } else if price >= LAKH {
        format!("₹ {:.2} L", price / LAKH)
    } else {
        format!("₹ {}", group_thousands(price.round() as i64))
    }
}

fn group_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if value < 0 {
        grouped.insert(0, '-');
    }
    grouped
}
