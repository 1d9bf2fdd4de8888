use dynamic_cover::indexed_set::IndexedSet;

#[test]
fn insert_remove_contains() {
    let mut s = IndexedSet::new(10);
    assert!(s.is_empty());
    assert!(s.insert(3));
    assert!(s.insert(7));
    assert!(!s.insert(3), "double insert must be a no-op");
    assert_eq!(s.len(), 2);
    assert!(s.contains(3) && s.contains(7) && !s.contains(0));
    assert!(s.remove(3));
    assert!(!s.remove(3), "double remove must be a no-op");
    assert!(!s.contains(3));
    assert_eq!(s.as_slice(), &[7]);
}

#[test]
fn removal_swaps_with_last() {
    let mut s = IndexedSet::new(5);
    for v in [0, 1, 2, 3, 4] {
        s.insert(v);
    }
    // Removing from the middle pulls the last member into the hole.
    s.remove(1);
    assert_eq!(s.as_slice(), &[0, 4, 2, 3]);
    s.remove(4);
    assert_eq!(s.as_slice(), &[0, 3, 2]);
    // Back-pointers must survive the swaps.
    for v in [0, 2, 3] {
        assert!(s.contains(v));
        assert!(s.remove(v));
    }
    assert!(s.is_empty());
}

#[test]
fn top_is_lifo_for_stack_usage() {
    let mut s = IndexedSet::new(4);
    assert_eq!(s.top(), None);
    s.insert(2);
    s.insert(0);
    s.insert(1);
    assert_eq!(s.top(), Some(1));
    s.remove(1);
    assert_eq!(s.top(), Some(0));
    s.remove(0);
    assert_eq!(s.top(), Some(2));
}

#[test]
fn reinsertion_after_removal() {
    let mut s = IndexedSet::new(3);
    s.insert(0);
    s.insert(1);
    s.remove(0);
    assert!(s.insert(0));
    assert_eq!(s.len(), 2);
    let mut members: Vec<_> = s.iter().collect();
    members.sort_unstable();
    assert_eq!(members, [0, 1]);
}
