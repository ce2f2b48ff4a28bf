use std::collections::HashSet;
use crate::Id;

#[test]
fn test_random() {
    let id1 = Id::random();
    let id2 = Id::random();
    assert_ne!(id1, id2);
    assert_eq!(id1.clone(), id1);

    let ids = (0..64).map(|_| Id::random()).collect::<HashSet<Id>>();
    assert_eq!(ids.len(), 64);
}

#[test]
fn test_display() {
    let id = Id::random();
    let bs58 = id.to_base58();
    assert_eq!(id.to_string(), bs58);
    assert!(!bs58.is_empty());
    assert!(bs58.chars().all(|c| c.is_ascii_alphanumeric()));
    assert!(!bs58.contains(['0', 'O', 'I', 'l']));
}

#[test]
fn test_abbr_str() {
    let id = Id::random();
    let abbr = id.to_abbr_str();
    let full = id.to_base58();
    assert!(abbr.starts_with(&full[..4]));
    assert!(abbr.ends_with(&full[full.len() - 4..]));
    assert!(abbr.contains("..."));
    assert_eq!(abbr.len(), 11);
}
