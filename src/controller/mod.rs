mod form;
mod notice;
mod row;

pub use form::ContactForm;
pub use notice::Notice;
pub use row::Row;

use log::debug;

use crate::{
    Id,
    Error,
    ContactManager,
    error::Result,
};

/// Thin adapter between user intents and a contact manager.
///
/// The controller keeps only transient view state: the form fields, the
/// selected record and an optional name filter. Rows carry the record's id,
/// so a selection made in a filtered view still addresses the right record.
/// Every mutation re-renders the full, unfiltered list.
pub struct Controller<M: ContactManager> {
    manager: M,
    form: ContactForm,
    rows: Vec<Row>,
    selected: Option<Id>,
    filter: Option<String>,
}

impl<M: ContactManager> Controller<M> {
    pub fn new(manager: M) -> Self {
        let mut controller = Self {
            manager,
            form: ContactForm::new(),
            rows: Vec::new(),
            selected: None,
            filter: None,
        };
        controller.render();
        controller
    }

    pub fn manager(&self) -> &M {
        &self.manager
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn form(&self) -> &ContactForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut ContactForm {
        &mut self.form
    }

    pub fn filter(&self) -> Option<&str> {
        self.filter.as_deref()
    }

    pub fn selected(&self) -> Option<&Id> {
        self.selected.as_ref()
    }

    pub fn selected_row(&self) -> Option<usize> {
        let id = self.selected.as_ref()?;
        self.rows.iter().position(|r| r.id() == id)
    }

    pub fn clear_fields(&mut self) {
        self.form.clear();
    }

    pub fn add(&mut self) -> Result<Notice> {
        let contact = match self.form.to_contact() {
            Ok(v) => v,
            Err(Error::Argument(_)) => return Ok(Notice::MissingInformation),
            Err(e) => return Err(e),
        };

        let id = self.manager.add(contact)?;
        debug!("Added contact {}", id.to_abbr_str());

        self.filter = None;
        self.render();
        self.form.clear();
        Ok(Notice::Added)
    }

    pub fn edit(&mut self) -> Result<Notice> {
        let Some(id) = self.selected.clone() else {
            return Ok(Notice::NoSelection);
        };

        let contact = match self.form.to_contact() {
            Ok(v) => v,
            Err(Error::Argument(_)) => return Ok(Notice::MissingInformation),
            Err(e) => return Err(e),
        };

        self.manager.update_by_id(&id, contact)?;
        debug!("Updated contact {}", id.to_abbr_str());

        self.filter = None;
        self.render();
        Ok(Notice::Updated)
    }

    pub fn delete(&mut self) -> Result<Notice> {
        let Some(id) = self.selected.clone() else {
            return Ok(Notice::NoSelection);
        };

        self.manager.remove_by_id(&id)?;
        debug!("Deleted contact {}", id.to_abbr_str());

        self.selected = None;
        self.filter = None;
        self.render();
        self.form.clear();
        Ok(Notice::Deleted)
    }

    pub fn select(&mut self, row: usize) -> Notice {
        let Some(item) = self.rows.get(row) else {
            return Notice::NoSuchRow(row);
        };

        self.selected = Some(item.id().clone());
        self.form.fill(item.contact());
        Notice::Selected(row)
    }

    pub fn select_first(&mut self) -> Notice {
        match self.rows.is_empty() {
            true => Notice::Empty,
            false => self.select(0),
        }
    }

    pub fn search(&mut self, keyword: &str) -> Notice {
        let keyword = keyword.trim().to_lowercase();
        if keyword.is_empty() {
            return Notice::MissingKeyword;
        }

        self.filter = Some(keyword);
        self.render();
        Notice::Filtered(self.rows.len())
    }

    pub fn reset(&mut self) -> Notice {
        self.filter = None;
        self.render();
        Notice::Reset(self.rows.len())
    }

    fn render(&mut self) {
        let entries = match self.filter.as_deref() {
            Some(keyword) => self.manager.search_entries(keyword),
            None => self.manager.entries(),
        };

        self.rows = entries.into_iter()
            .map(|(id, contact)| Row::new(id, contact))
            .collect();

        if self.selected_row().is_none() {
            self.selected = None;
        }
    }
}
