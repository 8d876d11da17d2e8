//! Integration tests for declaration identity

use std::collections::HashSet;

use tessera_foundation::{DeclId, IdAllocator};

#[test]
fn allocator_counts_up_from_zero() {
    let ids = IdAllocator::new();
    assert_eq!(ids.allocate(), DeclId::new(0));
    assert_eq!(ids.allocate(), DeclId::new(1));
    assert_eq!(ids.peek(), 2);
}

#[test]
fn allocator_resumes_where_told() {
    let ids = IdAllocator::starting_at(40);
    assert_eq!(ids.allocate().index(), 40);
    assert_eq!(ids.peek(), 41);
}

#[test]
fn tokens_are_unique() {
    let ids = IdAllocator::new();
    let tokens: HashSet<_> = (0..500).map(|_| ids.allocate()).collect();
    assert_eq!(tokens.len(), 500);
}

#[test]
fn token_display() {
    assert_eq!(DeclId::new(7).to_string(), "#7");
    assert_eq!(format!("{:?}", DeclId::new(7)), "DeclId(7)");
}
