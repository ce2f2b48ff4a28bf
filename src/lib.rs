pub mod core;
pub mod controller;

pub use crate::core::{
    id::{
        self,
        Id,
        ID_BYTES,
    },

    error::{self, Error},
    contact::{self, Contact, ContactBuilder},
    contact_manager::{self, ContactManager},
    contact_store::{
        self,
        ContactStore,
        ContactStoreBuilder,
        SharedContactStore,
        DEFAULT_FILE_NAME,
    },

    config::{self, Config},
    default_configuration as configuration,
    logger,
};

pub use crate::controller::{
    Controller,
    ContactForm,
    Notice,
    Row,
};

use std::path::Path;
use rand::Rng;

fn create_dirs(path: &Path) -> crate::core::Result<()> {
    if path.exists() {
        return Ok(())
    }

    std::fs::create_dir_all(path).map_err(|e|
         Error::Io(format!("Creating directory path {} error: {e}", path.display()))
    )
}

fn randomize_bytes<const N: usize>(array: &mut [u8; N]) {
    rand::thread_rng().fill(&mut array[..]);
}

#[cfg(test)]
mod unitests;
