//! Tests for fixed-size batching

use super::*;
use pretty_assertions::assert_eq;
use test_case::test_case;

#[test_case(0, 10, 0 ; "empty input submits nothing")]
#[test_case(9, 10, 1 ; "single partial group")]
#[test_case(10, 10, 1 ; "exactly one full group")]
#[test_case(20, 10, 2 ; "two full groups")]
#[test_case(23, 10, 3 ; "two full groups and a remainder")]
#[test_case(5, 1, 5 ; "batch size one")]
fn test_group_count(n: usize, batch_size: usize, expected_groups: usize) {
    let mut groups = 0;
    for_each_batch(0..n, batch_size, |_| {
        groups += 1;
        Ok(())
    })
    .unwrap();
    assert_eq!(groups, expected_groups);
}

#[test]
fn test_groups_preserve_order_and_sizes() {
    let mut seen: Vec<Vec<u32>> = Vec::new();
    for_each_batch(1..=23u32, METRIC_DATA_BATCH, |group| {
        seen.push(group);
        Ok(())
    })
    .unwrap();

    assert_eq!(seen.len(), 3);
    assert_eq!(seen[0], (1..=10).collect::<Vec<_>>());
    assert_eq!(seen[1], (11..=20).collect::<Vec<_>>());
    assert_eq!(seen[2], vec![21, 22, 23]);

    // Concatenating the submitted groups reproduces the input exactly.
    let flattened: Vec<u32> = seen.into_iter().flatten().collect();
    assert_eq!(flattened, (1..=23).collect::<Vec<_>>());
}

#[test]
fn test_failure_aborts_remaining_groups() {
    let mut calls = 0;
    let result = for_each_batch(0..30, 10, |_| {
        calls += 1;
        if calls == 2 {
            Err(Error::submit(1, "throttled"))
        } else {
            Ok(())
        }
    });

    // First group submitted, second failed, third never attempted.
    assert_eq!(calls, 2);
    let err = result.unwrap_err();
    assert!(matches!(err, Error::Submit { group: 1, .. }));
}

#[test]
fn test_zero_batch_size_rejected_before_any_submission() {
    let mut calls = 0;
    let result = for_each_batch(0..5, 0, |_| {
        calls += 1;
        Ok(())
    });

    assert_eq!(calls, 0);
    assert!(matches!(
        result.unwrap_err(),
        Error::InvalidBatchSize { size: 0 }
    ));
}

#[test]
fn test_final_group_smaller_than_batch_size() {
    let mut sizes = Vec::new();
    for_each_batch(0..7, 3, |group: Vec<i32>| {
        sizes.push(group.len());
        Ok(())
    })
    .unwrap();
    assert_eq!(sizes, vec![3, 3, 1]);
}

// ============================================================================
// Async Tests
// ============================================================================

#[tokio::test]
async fn test_async_groups_in_order() {
    let mut seen: Vec<Vec<u32>> = Vec::new();
    for_each_batch_async(1..=5u32, 2, |group| {
        seen.push(group);
        async { Ok(()) }
    })
    .await
    .unwrap();

    assert_eq!(seen, vec![vec![1, 2], vec![3, 4], vec![5]]);
}

#[tokio::test]
async fn test_async_failure_propagates() {
    let mut calls = 0;
    let result = for_each_batch_async(0..10, 5, |_| {
        calls += 1;
        let fail = calls == 1;
        async move {
            if fail {
                Err(Error::submit(0, "rejected"))
            } else {
                Ok(())
            }
        }
    })
    .await;

    assert_eq!(calls, 1);
    assert!(result.is_err());
}

#[tokio::test]
async fn test_async_zero_batch_size_rejected() {
    let result = for_each_batch_async(0..3, 0, |_| async { Ok(()) }).await;
    assert!(matches!(
        result.unwrap_err(),
        Error::InvalidBatchSize { size: 0 }
    ));
}
