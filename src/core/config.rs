use std::path::{Path, PathBuf};
use log::LevelFilter;

pub trait Config {
    fn data_dir(&self) -> &str;
    fn file_name(&self) -> &str;

    fn storage_path(&self) -> PathBuf {
        Path::new(self.data_dir()).join(self.file_name())
    }

    fn log_level(&self) -> LevelFilter;
    fn log_file(&self) -> Option<&str>;

    #[cfg(feature = "inspect")]
    fn dump(&self);
}
