#[cfg(test)]
mod core {
    mod contact;
    mod contact_store;
    mod config;
}


// helper functions
fn write_file(dir: &std::path::Path, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    if let Err(e) = std::fs::write(&path, content) {
        panic!("Failed to write file {}: {}", path.display(), e);
    }
    path
}
