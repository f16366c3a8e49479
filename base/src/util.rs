use eyre::{eyre, Result};
use std::fs::create_dir_all;
use std::io;
use std::path::Path;

pub fn path_to_str(path: &Path) -> Result<String> {
    Ok(String::from(path.to_str().ok_or_else(|| {
        eyre!("Could not convert path to string: {:?}", path)
    })?))
}

pub fn mkdirp<P: AsRef<Path>>(path: P) -> io::Result<()> {
    if let Err(e) = create_dir_all(path) {
        if e.kind() != io::ErrorKind::AlreadyExists {
            return Err(e);
        }
    }
    Ok(())
}
