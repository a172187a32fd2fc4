//! Cross-component integration tests.

mod multiply_flows;

use primitive_types::U256;

/// Independent big-multiply reference: parse both operands, take the full
/// 512-bit product, render as minimal uppercase hex.
pub(crate) fn oracle_product(a: &str, b: &str) -> String {
    let a = U256::from_str_radix(a, 16).expect("oracle operand a");
    let b = U256::from_str_radix(b, 16).expect("oracle operand b");
    format!("{:x}", a.full_mul(b)).to_uppercase()
}
