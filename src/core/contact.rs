use std::fmt;
use serde::{Serialize, Deserialize};

use crate::{
    Error,
    error::Result,
};

pub struct ContactBuilder {
    name        : Option<String>,
    phone       : Option<String>,
    email       : Option<String>,
}

impl ContactBuilder {
    pub fn new() -> Self {
        Self {
            name        : None,
            phone       : None,
            email       : None,
        }
    }

    pub fn with_name(&mut self, name: &str) -> &mut Self {
        self.name = Some(name.trim().to_string());
        self
    }

    pub fn with_phone(&mut self, phone: &str) -> &mut Self {
        self.phone = Some(phone.trim().to_string());
        self
    }

    pub fn with_email(&mut self, email: &str) -> &mut Self {
        self.email = Some(email.trim().to_string());
        self
    }

    pub fn check_valid(&self) -> bool {
        self.name.as_ref().map(|v| !v.is_empty()).unwrap_or(false)
    }

    pub fn build(&mut self) -> Result<Contact> {
        if !self.check_valid() {
            return Err(Error::Argument("Contact name is required".into()));
        }

        Ok(Contact {
            name:   self.name.take().unwrap_or_default(),
            phone:  self.phone.take().unwrap_or_default(),
            email:  self.email.take().unwrap_or_default(),
        })
    }
}

impl Default for ContactBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// One address book entry, serialized as `{"name", "phone", "email"}`.
///
/// Constructing a contact directly performs no validation; the required
/// name rule is enforced by `ContactBuilder`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    #[serde(rename = "name")]
    name:   String,
    #[serde(rename = "phone")]
    phone:  String,
    #[serde(rename = "email")]
    email:  String,
}

impl Contact {
    pub fn new(name: &str, phone: &str, email: &str) -> Self {
        Self {
            name:   name.to_string(),
            phone:  phone.to_string(),
            email:  email.to_string(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: &str) {
        self.name = name.to_string();
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn set_phone(&mut self, phone: &str) {
        self.phone = phone.to_string();
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn set_email(&mut self, email: &str) {
        self.email = email.to_string();
    }

    // Case-insensitive substring match on the name only.
    pub fn matches(&self, keyword: &str) -> bool {
        self.name.to_lowercase().contains(&keyword.to_lowercase())
    }
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}, {}", self.name, self.phone, self.email)
    }
}
