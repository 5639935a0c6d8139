/// Column transaction tests
///
/// Tests for transaction staging (transaction, commit, rollback) on a single column
/// Run with: cargo test --test column_transaction_tests

use memcolumn::{Change, Column, DbError, TransactionState};
use std::collections::{BTreeMap, HashMap};

fn temperature() -> Column {
    let mut col = Column::new("temperature");
    col.insert(HashMap::from([(10, 10), (20, 11), (30, 9)])).unwrap();
    col
}

#[test]
fn test_walkthrough() {
    let mut col = temperature();
    assert_eq!(col.mean().unwrap(), 10.0);
    assert_eq!(col.value(20).unwrap(), 11);

    // Queued changes are invisible
    col.transaction();
    col.insert([(40, 19), (50, 21)]).unwrap();
    col.delete([10]);
    assert_eq!(col.mean().unwrap(), 10.0);

    // Discard everything
    col.rollback();
    assert_eq!(col.mean().unwrap(), 10.0);
    assert_eq!(col.committed(), &BTreeMap::from([(10, 10), (20, 11), (30, 9)]));

    col.transaction();
    col.insert([(40, 0), (50, 2)]).unwrap();
    col.delete([20, 30]);
    assert_eq!(col.mean().unwrap(), 10.0);

    col.commit();
    assert_eq!(col.committed(), &BTreeMap::from([(10, 10), (40, 0), (50, 2)]));
    assert_eq!(col.mean().unwrap(), 4.0);

    let err = col.insert([(10, 20)]).unwrap_err();
    assert!(matches!(err, DbError::OverwriteNotAllowed { key: 10, .. }));
    assert_eq!(col.get(10), Some(10));
}

#[test]
fn test_insert_visible_immediately_without_transaction() {
    let mut col = Column::new("c");
    col.insert([(1, 3), (2, 5)]).unwrap();

    assert_eq!(col.get(1), Some(3));
    assert_eq!(col.get(2), Some(5));
    assert_eq!(col.mean().unwrap(), 4.0);
}

#[test]
fn test_rejected_batch_is_all_or_nothing() {
    let mut col = temperature();
    let before = col.committed().clone();

    let result = col.insert([(1, 1), (2, 2), (30, 3), (4, 4)]);
    assert!(matches!(result, Err(DbError::OverwriteNotAllowed { key: 30, .. })));
    assert_eq!(col.committed(), &before);
}

#[test]
fn test_rejected_batch_inside_transaction_stages_nothing() {
    let mut col = temperature();
    col.transaction();

    assert!(col.insert([(60, 1), (20, 2)]).is_err());
    assert!(col.staged_changes().is_empty());

    col.commit();
    assert_eq!(col.get(60), None);
}

#[test]
fn test_staged_inserts_do_not_change_mean() {
    let mut col = temperature();
    col.transaction();
    col.insert([(40, 1000)]).unwrap();
    assert_eq!(col.mean().unwrap(), 10.0);
    assert!(col.is_in_transaction());
}

#[test]
fn test_reinsert_staged_key_overwrites() {
    let mut col = temperature();
    col.transaction();
    col.insert([(40, 19)]).unwrap();
    assert!(col.insert([(40, 7)]).is_ok());
    assert_eq!(col.staged_changes(), vec![Change::Insert { key: 40, value: 7 }]);

    col.commit();
    assert_eq!(col.get(40), Some(7));
}

#[test]
fn test_delete_of_staged_insert_never_commits() {
    let mut col = temperature();
    col.transaction();
    col.insert([(40, 19)]).unwrap();
    col.delete([40]);
    col.commit();

    assert!(!col.contains_key(40));
    assert_eq!(col.len(), 3);
}

#[test]
fn test_commit_applies_net_effect() {
    let mut col = temperature();
    col.transaction();
    col.insert([(40, 1), (50, 2)]).unwrap();
    col.delete([10, 50, 99]);

    assert_eq!(
        col.staged_changes(),
        vec![Change::Insert { key: 40, value: 1 }, Change::Delete { key: 10 }]
    );

    col.commit();
    assert_eq!(col.committed(), &BTreeMap::from([(20, 11), (30, 9), (40, 1)]));
    assert_eq!(col.state(), TransactionState::Idle);
    assert!(col.staged_changes().is_empty());
}

#[test]
fn test_repeated_transaction_is_idempotent() {
    let mut col = temperature();
    col.transaction();
    col.insert([(40, 1)]).unwrap();
    col.delete([10]);
    col.transaction();

    assert_eq!(col.staged_changes().len(), 2);
    col.commit();
    assert_eq!(col.get(40), Some(1));
    assert_eq!(col.get(10), None);
}

#[test]
fn test_rollback_then_new_transaction_starts_clean() {
    let mut col = temperature();
    col.transaction();
    col.insert([(40, 1)]).unwrap();
    col.rollback();
    assert!(!col.is_in_transaction());

    col.transaction();
    assert!(col.staged_changes().is_empty());
    col.commit();
    assert_eq!(col.len(), 3);
}

#[test]
fn test_idle_commit_and_rollback_do_nothing() {
    let mut col = temperature();
    let before = col.committed().clone();
    col.commit();
    col.rollback();
    assert_eq!(col.committed(), &before);
    assert_eq!(col.state(), TransactionState::Idle);
}

#[test]
fn test_delete_outside_transaction() {
    let mut col = temperature();
    col.delete([10, 11]);
    assert_eq!(col.committed(), &BTreeMap::from([(20, 11), (30, 9)]));
}

#[test]
fn test_mean_after_deleting_everything() {
    let mut col = temperature();
    col.delete([10, 20, 30]);
    assert!(col.is_empty());
    assert_eq!(col.mean(), Err(DbError::EmptyColumn("temperature".to_string())));
}

#[test]
fn test_deleting_same_key_twice_in_transaction() {
    let mut col = temperature();
    col.transaction();
    col.delete([10, 10]);
    col.delete([10]);
    assert_eq!(col.staged_changes(), vec![Change::Delete { key: 10 }]);

    col.commit();
    assert_eq!(col.committed(), &BTreeMap::from([(20, 11), (30, 9)]));
    assert!(!col.is_in_transaction());
}
