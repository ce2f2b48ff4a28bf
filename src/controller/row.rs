use crate::{
    Id,
    Contact,
};

/// One visible line of the contact list, keyed by the record's store id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    id: Id,
    contact: Contact,
}

impl Row {
    pub(crate) fn new(id: Id, contact: Contact) -> Self {
        Self { id, contact }
    }

    pub fn id(&self) -> &Id {
        &self.id
    }

    pub fn contact(&self) -> &Contact {
        &self.contact
    }

    pub fn name(&self) -> &str {
        self.contact.name()
    }

    pub fn phone(&self) -> &str {
        self.contact.phone()
    }

    pub fn email(&self) -> &str {
        self.contact.email()
    }
}
