//! Writing module files to disk.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use log::{debug, info};

use crate::descriptor::ModuleDescriptor;
use crate::error::{ModfileError, ModfileResult};

/// Writes `<name>.mod` files into their destination directory.
///
/// The write is not atomic: the target is truncated first, so a failure
/// halfway through leaves a partial file behind. Concurrent writers of the
/// same path race and the last one wins.
#[derive(Debug, Default, Clone, Copy)]
pub struct ModuleFileWriter;

impl ModuleFileWriter {
    pub fn new() -> Self {
        Self
    }

    /// Write the module file described by `descriptor`.
    ///
    /// Creates the destination directory (with parents) when missing and
    /// returns the path of the written file.
    pub fn write(&self, descriptor: &ModuleDescriptor) -> ModfileResult<PathBuf> {
        descriptor.validate()?;

        let dir = &descriptor.destination_dir;
        info!(
            "Creating module description file for {} in {}",
            descriptor.name,
            dir.display()
        );

        if !dir.exists() {
            debug!("Creating directory {}", dir.display());
            fs::create_dir_all(dir).map_err(|source| ModfileError::CreateDirectory {
                path: dir.to_path_buf(),
                source,
            })?;
        }

        let path = descriptor.file_path();
        let write_err = |source: std::io::Error| ModfileError::WriteFile {
            path: path.clone(),
            source,
        };

        let file = File::create(&path).map_err(write_err)?;
        let mut out = BufWriter::new(file);

        writeln!(out, "{}", descriptor.header()).map_err(write_err)?;
        for (directive, value) in descriptor.directives() {
            debug!("{} += {}", directive, value);
            writeln!(out, "{}", directive.line(value)).map_err(write_err)?;
        }
        out.flush().map_err(write_err)?;

        Ok(path)
    }
}
