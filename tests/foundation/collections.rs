//! Integration tests for persistent collections
//!
//! Tests PVec with structural sharing and immutability.

use tessera_foundation::PVec;

#[test]
fn vector_immutability() {
    let v1 = PVec::new().push_back(1);
    let v2 = v1.push_back(2);

    assert_eq!(v1.len(), 1);
    assert_eq!(v2.len(), 2);
}

#[test]
fn push_front_prepends() {
    let v = PVec::from(vec![2, 3]).push_front(1);
    assert_eq!(v.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
}

#[test]
fn insert_at_end_appends() {
    let v = PVec::from(vec![1, 2]);
    assert_eq!(v.insert(2, 3).unwrap().last(), Some(&3));
    assert!(v.insert(3, 4).is_none());
}

#[test]
fn update_and_remove_leave_original() {
    let v = PVec::from(vec![1, 2, 3]);
    let updated = v.update(1, 20).unwrap();
    let (removed, value) = v.remove(0).unwrap();

    assert_eq!(v.get(1), Some(&2));
    assert_eq!(updated.get(1), Some(&20));
    assert_eq!(value, 1);
    assert_eq!(removed.first(), Some(&2));
}

#[test]
fn structural_sharing() {
    let mut v = PVec::new();
    for i in 0..1000 {
        v = v.push_back(i);
    }

    let v2 = v.clone();
    let v3 = v2.push_back(1000);
    assert_eq!(v.len(), 1000);
    assert_eq!(v3.len(), 1001);
    assert_eq!(v.position(|&x| x == 999), Some(999));
}
