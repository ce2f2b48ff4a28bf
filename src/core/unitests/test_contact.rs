use crate::{
    Error,
    core::contact::{Contact, ContactBuilder},
};

#[test]
fn test_build_contact() {
    let result = ContactBuilder::new()
        .with_name("  Alice  ")
        .with_phone(" 0123 456 ")
        .with_email("alice@example.com ")
        .build();

    assert!(result.is_ok());
    let contact = result.unwrap();
    assert_eq!(contact.name(), "Alice");
    assert_eq!(contact.phone(), "0123 456");
    assert_eq!(contact.email(), "alice@example.com");
    assert_eq!(contact, Contact::new("Alice", "0123 456", "alice@example.com"));
}

#[test]
fn test_build_without_name() {
    let result = ContactBuilder::new()
        .with_phone("1")
        .build();
    assert!(matches!(result, Err(Error::Argument(_))));

    let result = ContactBuilder::new()
        .with_name("   ")
        .with_email("a@x.com")
        .build();
    assert!(matches!(result, Err(Error::Argument(_))));
}

#[test]
fn test_optional_fields() {
    let contact = ContactBuilder::new()
        .with_name("Bob")
        .build()
        .unwrap();
    assert_eq!(contact.phone(), "");
    assert_eq!(contact.email(), "");
}

#[test]
fn test_setters() {
    let mut contact = Contact::new("Ann", "1", "a@x.com");
    contact.set_name("Anna");
    contact.set_phone("2");
    contact.set_email("anna@x.com");
    assert_eq!(contact.name(), "Anna");
    assert_eq!(contact.phone(), "2");
    assert_eq!(contact.email(), "anna@x.com");
    assert_eq!(contact.to_string(), "Anna, 2, anna@x.com");
}

#[test]
fn test_matches() {
    let contact = Contact::new("Nguyễn Văn An", "090", "an@x.vn");
    assert!(contact.matches("an"));
    assert!(contact.matches("AN"));
    assert!(contact.matches("văn"));
    assert!(contact.matches("VĂN"));
    assert!(contact.matches(""));
    assert!(!contact.matches("090"));
    assert!(!contact.matches("bob"));
}

#[test]
fn test_json_keys() {
    let contact = Contact::new("Ann", "1", "a@x.com");
    let value = serde_json::to_value(&contact).unwrap();
    let obj = value.as_object().unwrap();
    assert_eq!(obj.len(), 3);
    assert_eq!(obj["name"], "Ann");
    assert_eq!(obj["phone"], "1");
    assert_eq!(obj["email"], "a@x.com");
}

#[test]
fn test_json_non_ascii() {
    let contacts = vec![
        Contact::new("Trần Thị Bình", "+84 90 123", "bình@ví.dụ"),
        Contact::new("Zoë Ørsted", "", "zoe@x.dk"),
        Contact::new("山田太郎", "03-1234", ""),
    ];
    let data = serde_json::to_string(&contacts).unwrap();
    assert!(data.contains("Trần Thị Bình"));

    let decoded: Vec<Contact> = serde_json::from_str(&data).unwrap();
    assert_eq!(decoded, contacts);
}
