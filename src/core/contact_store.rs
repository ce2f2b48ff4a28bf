use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use log::{debug, info, warn, error};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use crate::{
    create_dirs,
    Id,
    Error,
    error::Result,
    core::config::Config,
};

use super::{
    contact::Contact,
    contact_manager::ContactManager,
};

pub const DEFAULT_FILE_NAME: &str = "contacts.json";

pub type SharedContactStore = Arc<Mutex<ContactStore>>;

pub struct ContactStoreBuilder<'a> {
    dir: Option<&'a str>,
    file_name: Option<&'a str>,
    path: Option<PathBuf>,
}

impl<'a> ContactStoreBuilder<'a> {
    pub fn new() -> Self {
        Self {
            dir: None,
            file_name: None,
            path: None,
        }
    }

    pub fn with_dir(&mut self, dir: &'a str) -> &mut Self {
        self.dir = Some(dir);
        self
    }

    pub fn with_file_name(&mut self, name: &'a str) -> &mut Self {
        self.file_name = Some(name);
        self
    }

    // A full path takes precedence over the directory and file name.
    pub fn with_path(&mut self, path: &'a str) -> &mut Self {
        self.path = Some(PathBuf::from(path));
        self
    }

    pub fn with_config(&mut self, cfg: &dyn Config) -> &mut Self {
        self.path = Some(cfg.storage_path());
        self
    }

    pub fn build(&self) -> Result<ContactStore> {
        let path = match self.path.as_ref() {
            Some(path) => path.clone(),
            None => Path::new(self.dir.unwrap_or("."))
                .join(self.file_name.unwrap_or(DEFAULT_FILE_NAME)),
        };

        if path.file_name().is_none() {
            return Err(Error::Argument(format!(
                "Contact store path {} has no file name",
                path.display()
            )));
        }

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                create_dirs(parent)?;
            }
        }

        Ok(ContactStore::open(path))
    }
}

impl<'a> Default for ContactStoreBuilder<'a> {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone)]
struct Record {
    id: Id,
    contact: Contact,
}

impl Record {
    fn new(contact: Contact) -> Self {
        Self {
            id: Id::random(),
            contact,
        }
    }
}

/// Contact sequence mirrored write-through into a JSON file.
///
/// Every mutation serializes the whole candidate sequence, replaces the
/// backing file, and only then commits the sequence in memory. A failed
/// write leaves both the file and the in-memory view untouched.
///
/// A backing file that exists but cannot be read is never overwritten:
/// mutations fail with `Error::Io` until a later `load()` reads it cleanly.
#[derive(Debug)]
pub struct ContactStore {
    path: PathBuf,
    records: Vec<Record>,
    load_error: Option<String>,
}

impl ContactStore {
    pub fn open<P: AsRef<Path>>(path: P) -> Self {
        let mut store = Self {
            path: path.as_ref().to_path_buf(),
            records: Vec::new(),
            load_error: None,
        };
        store.load();
        store
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn id_at(&self, index: usize) -> Option<&Id> {
        self.records.get(index).map(|r| &r.id)
    }

    pub fn index_of(&self, id: &Id) -> Option<usize> {
        self.records.iter().position(|r| &r.id == id)
    }

    pub fn is_writable(&self) -> bool {
        self.load_error.is_none()
    }

    // Err carries the reason an existing file could not be read.
    fn load_internal(&self) -> std::result::Result<Vec<Contact>, String> {
        let data = match fs::read(&self.path) {
            Ok(data) => data,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                info!("No contacts file at {}, starting with an empty address book.", self.path.display());
                return Ok(Vec::new());
            },
            Err(e) => {
                error!("Failed to read contacts file {} with error: {e}, the file will not be written.",
                    self.path.display());
                return Err(e.to_string());
            }
        };

        match serde_json::from_slice::<Vec<Contact>>(&data) {
            Ok(contacts) => Ok(contacts),
            Err(e) => {
                warn!("Failed to parse contacts file {} with error: {e} - contacts file might be broken",
                    self.path.display());
                Ok(Vec::new())
            }
        }
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self.path.file_name()
            .map(|v| v.to_os_string())
            .unwrap_or_else(|| DEFAULT_FILE_NAME.into());
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    fn store_internal(&self, records: &[Record]) -> Result<()> {
        let contacts = records.iter()
            .map(|r| &r.contact)
            .collect::<Vec<&Contact>>();

        let mut buf = Vec::new();
        let mut ser = serde_json::Serializer::with_formatter(
            &mut buf,
            PrettyFormatter::with_indent(b"    ")
        );
        contacts.serialize(&mut ser)?;

        let tmp = self.tmp_path();
        fs::write(&tmp, &buf).map_err(|e| {
            error!("Failed to write contacts file {} with error: {e}", tmp.display());
            Error::Io(format!("Writing contacts file {} error: {e}", tmp.display()))
        })?;

        fs::rename(&tmp, &self.path).map_err(|e| {
            error!("Failed to replace contacts file {} with error: {e}", self.path.display());
            _ = fs::remove_file(&tmp);
            Error::Io(format!("Replacing contacts file {} error: {e}", self.path.display()))
        })?;

        debug!("Persisted {} contacts into {}", records.len(), self.path.display());
        Ok(())
    }

    fn commit(&mut self, records: Vec<Record>) -> Result<()> {
        if let Some(reason) = self.load_error.as_ref() {
            error!("Refused to overwrite unreadable contacts file {}", self.path.display());
            return Err(Error::Io(format!(
                "Contacts file {} could not be read ({reason}), refusing to overwrite it",
                self.path.display()
            )));
        }

        self.store_internal(&records)?;
        self.records = records;
        Ok(())
    }

    fn not_found(&self, what: String) -> Error {
        warn!("{}", what);
        Error::NotFound(what)
    }
}

impl Default for ContactStore {
    fn default() -> Self {
        Self::open(DEFAULT_FILE_NAME)
    }
}

impl ContactManager for ContactStore {
    fn load(&mut self) -> Vec<Contact> {
        let contacts = match self.load_internal() {
            Ok(contacts) => {
                self.load_error = None;
                contacts
            },
            Err(reason) => {
                self.load_error = Some(reason);
                Vec::new()
            }
        };
        info!("Loaded {} contacts from {}", contacts.len(), self.path.display());

        self.records = contacts.iter()
            .cloned()
            .map(Record::new)
            .collect();
        contacts
    }

    fn len(&self) -> usize {
        self.records.len()
    }

    fn contacts(&self) -> Vec<Contact> {
        self.records.iter()
            .map(|r| r.contact.clone())
            .collect()
    }

    fn entries(&self) -> Vec<(Id, Contact)> {
        self.records.iter()
            .map(|r| (r.id.clone(), r.contact.clone()))
            .collect()
    }

    fn contact(&self, index: usize) -> Option<&Contact> {
        self.records.get(index).map(|r| &r.contact)
    }

    fn contact_by_id(&self, id: &Id) -> Option<&Contact> {
        self.records.iter()
            .find(|r| &r.id == id)
            .map(|r| &r.contact)
    }

    fn add(&mut self, contact: Contact) -> Result<Id> {
        let record = Record::new(contact);
        let id = record.id.clone();

        let mut records = self.records.clone();
        records.push(record);
        self.commit(records)?;
        Ok(id)
    }

    fn update(&mut self, index: usize, contact: Contact) -> Result<()> {
        if index >= self.records.len() {
            return Err(self.not_found(format!(
                "No contact at position {index}, {} contacts in store", self.records.len()
            )));
        }

        let mut records = self.records.clone();
        records[index].contact = contact;
        self.commit(records)
    }

    fn update_by_id(&mut self, id: &Id, contact: Contact) -> Result<()> {
        let Some(index) = self.index_of(id) else {
            return Err(self.not_found(format!("No contact with id {id}")));
        };
        self.update(index, contact)
    }

    fn delete(&mut self, index: usize) -> Result<()> {
        if index >= self.records.len() {
            return Err(self.not_found(format!(
                "No contact at position {index}, {} contacts in store", self.records.len()
            )));
        }

        let mut records = self.records.clone();
        records.remove(index);
        self.commit(records)
    }

    fn remove_by_id(&mut self, id: &Id) -> Result<()> {
        let Some(index) = self.index_of(id) else {
            return Err(self.not_found(format!("No contact with id {id}")));
        };
        self.delete(index)
    }

    fn search_entries(&self, keyword: &str) -> Vec<(Id, Contact)> {
        self.records.iter()
            .filter(|r| r.contact.matches(keyword))
            .map(|r| (r.id.clone(), r.contact.clone()))
            .collect()
    }
}
