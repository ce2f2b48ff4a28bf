use crate::{
    Contact,
    ContactBuilder,
    error::Result,
};

/// Transient editing fields bound to the name, phone and email inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    name:   String,
    phone:  String,
    email:  String,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: &str) -> &mut Self {
        self.name = name.to_string();
        self
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn set_phone(&mut self, phone: &str) -> &mut Self {
        self.phone = phone.to_string();
        self
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn set_email(&mut self, email: &str) -> &mut Self {
        self.email = email.to_string();
        self
    }

    pub fn fill(&mut self, contact: &Contact) {
        self.name = contact.name().to_string();
        self.phone = contact.phone().to_string();
        self.email = contact.email().to_string();
    }

    pub fn clear(&mut self) {
        self.name.clear();
        self.phone.clear();
        self.email.clear();
    }

    pub fn to_contact(&self) -> Result<Contact> {
        ContactBuilder::new()
            .with_name(&self.name)
            .with_phone(&self.phone)
            .with_email(&self.email)
            .build()
    }
}
