use contacts::{
    Error,
    Contact,
    ContactBuilder,
};

/*  APIs for testcase
 - ContactBuilder::new()
 - with_name(..)
 - with_phone(..)
 - with_email(..)
 - build()
 - Contact::new(..)
 - name()/phone()/email()
 - matches(..)
 */

#[test]
fn test_builder() {
    let contact = ContactBuilder::new()
        .with_name("Ann")
        .with_phone("1")
        .with_email("a@x.com")
        .build()
        .unwrap();
    assert_eq!(contact, Contact::new("Ann", "1", "a@x.com"));
}

#[test]
fn test_builder_rejects_blank_name() {
    let result = ContactBuilder::new()
        .with_name(" \t ")
        .build();
    match result {
        Err(Error::Argument(msg)) => assert!(msg.contains("name")),
        _ => panic!("blank name must be rejected"),
    }
}

#[test]
fn test_case_insensitive_match() {
    let contact = Contact::new("Ann", "1", "a@x.com");
    assert!(contact.matches("an"));
    assert!(contact.matches("ANN"));
    assert!(!contact.matches("bob"));
    assert!(!contact.matches("a@x"));
}
