//! # maya-modfile
//!
//! Generates Maya module description files (`.mod`).
//!
//! A module file registers a plugin module with Maya and extends its search
//! path environment variables:
//!
//! ```text
//! + shaders 2.1.0 /opt/shaders
//! ARNOLD_PLUGIN_PATH +:= /opt/shaders/bin
//! MTOA_TEMPLATES_PATH +:= /opt/shaders/mtoa
//! MAYA_CUSTOM_TEMPLATE_PATH +:= /opt/shaders/ae
//! ```
//!
//! ## Example
//!
//! ```no_run
//! use maya_modfile::{ModuleDescriptor, ModuleFileWriter};
//!
//! let descriptor = ModuleDescriptor::new("shaders", "build/modules")?
//!     .with_version("2.1.0")
//!     .with_arnold_plugin_path("/opt/shaders/bin");
//!
//! let path = ModuleFileWriter::new().write(&descriptor)?;
//! println!("wrote {}", path.display());
//! # Ok::<(), maya_modfile::ModfileError>(())
//! ```

pub mod cli;
pub mod config;
pub mod descriptor;
pub mod error;
pub mod writer;

pub use descriptor::{EnvDirective, ModuleDescriptor};
pub use error::{ModfileError, ModfileResult};
pub use writer::ModuleFileWriter;
