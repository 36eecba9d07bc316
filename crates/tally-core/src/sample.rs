//! Bundled sample statement used by `tally demo` and tests

use crate::models::RawLine;

const SAMPLE: [[&str; 4]; 7] = [
    [
        "2022-01-17",
        "Branch Transaction SERVICE CHARGE CAPPED MONTHLY FEE$16.95 RECORD-KEEPING N/A",
        "16.99",
        "",
    ],
    [
        "2022-01-17",
        "Electronic Funds Transfer PREAUTHORIZED DEBIT BANK BANK MORTGAGE DEPT (PAY)",
        "100.00",
        "",
    ],
    [
        "2022-03-17",
        "Internet Banking INTERNET BILL PAY 0000001 PANDA MOBILE",
        "1000.00",
        "",
    ],
    [
        "2022-04-17",
        "Point of Sale - Interac RETAIL PURCHASE 0000012 S-MART #0001",
        "400.00",
        "",
    ],
    [
        "2022-04-17",
        "Internet Banking E-TRANSFER 000000001234 JOHN SMITH",
        "",
        "250.00",
    ],
    [
        "2022-04-17",
        "Electronic Funds Transfer PAY PAYROLL PAYROLL",
        "",
        "6000.00",
    ],
    // Upstream sample books this Subshop purchase as a 16.00 debit. Here it is
    // a refund credit so the statement splits four debits to three credits.
    [
        "2022-05-17",
        "Point of Sale - Interac RETAIL PURCHASE D3ADB33F0000 Subshop 00001",
        "",
        "16.00",
    ],
];

/// Seven statement rows covering fees, bill payments, purchases,
/// e-transfers, payroll and a refund (four debits, three credits)
pub fn sample_rows() -> Vec<RawLine> {
    SAMPLE
        .iter()
        .map(|[date, description, debit, credit]| RawLine::new(*date, *description, *debit, *credit))
        .collect()
}
