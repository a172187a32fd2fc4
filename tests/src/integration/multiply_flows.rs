//! End-to-end multiplication flows over both worker executors.

use hexmul::adapters::inline::InlineWorkerPool;
use hexmul::adapters::stdio;
use hexmul::adapters::task_pool::TaskWorkerPool;
use hexmul::{HexMultiplyApi, MultiplierService, MultiplyError, OperandPair};
use rand::Rng;
use std::io::Cursor;

use super::oracle_product;

fn random_operand(len: usize) -> String {
    let mut rng = rand::thread_rng();
    (0..len)
        .map(|_| char::from_digit(rng.gen_range(0..16), 16).expect("digit in range"))
        .collect()
}

async fn multiply_task_pool(a: &str, b: &str) -> Result<String, MultiplyError> {
    let service = MultiplierService::new(TaskWorkerPool::new());
    let pair = OperandPair::parse(a, b)?;
    Ok(service.multiply(pair).await?.as_str().to_string())
}

#[tokio::test(flavor = "multi_thread")]
async fn test_task_pool_matches_oracle_on_16_digits() {
    let a = random_operand(16);
    let b = random_operand(16);
    let product = multiply_task_pool(&a, &b).await.unwrap();
    assert_eq!(product, oracle_product(&a, &b), "operands {a} * {b}");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_executors_agree() {
    let a = random_operand(8);
    let b = random_operand(8);

    let from_tasks = multiply_task_pool(&a, &b).await.unwrap();

    let inline = MultiplierService::new(InlineWorkerPool::new());
    let pair = OperandPair::parse(&a, &b).unwrap();
    let from_inline = inline.multiply(pair).await.unwrap();

    assert_eq!(from_tasks, from_inline.as_str());
}

#[tokio::test(flavor = "multi_thread")]
async fn test_reruns_are_deterministic() {
    // Worker completion order varies across runs; the combined product
    // must not.
    let a = random_operand(16);
    let b = random_operand(16);
    let first = multiply_task_pool(&a, &b).await.unwrap();
    for _ in 0..7 {
        assert_eq!(multiply_task_pool(&a, &b).await.unwrap(), first);
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn test_commutativity_through_task_pool() {
    let a = random_operand(8);
    let b = random_operand(8);
    assert_eq!(
        multiply_task_pool(&a, &b).await.unwrap(),
        multiply_task_pool(&b, &a).await.unwrap()
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn test_zero_operand_gives_single_zero_digit() {
    let b = random_operand(16);
    let product = multiply_task_pool(&"0".repeat(16), &b).await.unwrap();
    assert_eq!(product, "0");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_malformed_inputs_rejected_before_any_output() {
    // Unequal lengths
    assert!(matches!(
        multiply_task_pool("FF", "FFFF").await,
        Err(MultiplyError::MalformedOperand { .. })
    ));
    // Odd length other than 1
    assert!(matches!(
        multiply_task_pool("FFF", "FFF").await,
        Err(MultiplyError::MalformedOperand { .. })
    ));
    // Invalid digit
    assert!(matches!(
        multiply_task_pool("FG", "FF").await,
        Err(MultiplyError::InvalidDigit { found: 'G' })
    ));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_stdio_line_protocol_round_trip() {
    let pair = stdio::read_operand_pair(Cursor::new("00FF\n00FF\n")).unwrap();

    let service = MultiplierService::new(TaskWorkerPool::new());
    let product = service.multiply(pair).await.unwrap();

    let mut out = Vec::new();
    stdio::write_product(&mut out, &product).unwrap();
    assert_eq!(out, b"FE01\n");
}
