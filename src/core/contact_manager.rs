use crate::{
    Id,
    error::Result,
};
use super::contact::Contact;

/// Ordered contact collection addressed by position or by `Id`.
///
/// Positions are only meaningful until the next mutation; ids stay valid for
/// the lifetime of the manager.
pub trait ContactManager {
    fn load(&mut self) -> Vec<Contact>;

    fn len(&self) -> usize;
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn contacts(&self) -> Vec<Contact>;
    fn entries(&self) -> Vec<(Id, Contact)>;

    fn contact(&self, index: usize) -> Option<&Contact>;
    fn contact_by_id(&self, id: &Id) -> Option<&Contact>;

    fn exists(&self, id: &Id) -> bool {
        self.contact_by_id(id).is_some()
    }

    fn add(&mut self, contact: Contact) -> Result<Id>;

    fn update(&mut self, index: usize, contact: Contact) -> Result<()>;
    fn update_by_id(&mut self, id: &Id, contact: Contact) -> Result<()>;

    fn delete(&mut self, index: usize) -> Result<()>;
    fn remove_by_id(&mut self, id: &Id) -> Result<()>;

    fn search_entries(&self, keyword: &str) -> Vec<(Id, Contact)>;

    fn search(&self, keyword: &str) -> Vec<Contact> {
        self.search_entries(keyword)
            .into_iter()
            .map(|(_, c)| c)
            .collect()
    }
}
