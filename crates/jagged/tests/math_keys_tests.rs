#![cfg(feature = "dev")]
//! Tests for row key reducers.
//!
//! ## Test Organization
//!
//! 1. **Sum** - Normal, empty, absent and overflowing rows
//! 2. **Max** - Normal, negative, empty and absent rows
//! 3. **Dispatch** - `KeyReducer::key`

use jagged::internals::math::keys::{key_max, key_sum, KeyReducer};

// ============================================================================
// Sum Tests
// ============================================================================

/// Test sum of a present row.
#[test]
fn test_sum_basic() {
    assert_eq!(key_sum(&vec![3, 1]), 4);
    assert_eq!(key_sum(&vec![5, 5, 5]), 15);
    assert_eq!(key_sum(&vec![-4, 4, -1]), -1);
}

/// Test empty and absent rows sum to zero.
#[test]
fn test_sum_empty_and_absent() {
    let empty: Vec<i32> = vec![];
    let absent: Option<Vec<i32>> = None;

    assert_eq!(key_sum(&empty), 0);
    assert_eq!(key_sum(&absent), 0);
}

/// Test sums wrap on overflow instead of panicking.
#[test]
fn test_sum_wraps_on_overflow() {
    assert_eq!(key_sum(&vec![i32::MAX, 1]), i32::MIN);
    assert_eq!(key_sum(&vec![i32::MIN, -1]), i32::MAX);
    assert_eq!(key_sum(&vec![i32::MAX, 1, -1]), i32::MAX);
}

// ============================================================================
// Max Tests
// ============================================================================

/// Test max of a present row.
#[test]
fn test_max_basic() {
    assert_eq!(key_max(&vec![3, 1]), 3);
    assert_eq!(key_max(&vec![1]), 1);
    assert_eq!(key_max(&vec![-7, -2, -9]), -2);
}

/// Test empty and absent rows key as `i32::MIN`.
#[test]
fn test_max_empty_and_absent() {
    let empty: Vec<i32> = vec![];
    let absent: Option<Vec<i32>> = None;

    assert_eq!(key_max(&empty), i32::MIN);
    assert_eq!(key_max(&absent), i32::MIN);
}

/// Test a row holding only `i32::MIN` ties with an empty row.
#[test]
fn test_max_min_value_ties_sentinel() {
    assert_eq!(key_max(&vec![i32::MIN]), key_max(&Vec::<i32>::new()));
}

// ============================================================================
// Dispatch Tests
// ============================================================================

/// Test `KeyReducer::key` dispatches to the matching reducer.
#[test]
fn test_reducer_dispatch() {
    let row = vec![2, 9, -4];

    assert_eq!(KeyReducer::Sum.key(&row), 7);
    assert_eq!(KeyReducer::Max.key(&row), 9);
    assert_eq!(KeyReducer::default(), KeyReducer::Sum);
    assert_eq!(KeyReducer::Max.name(), "max");
}
