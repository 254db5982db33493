//! In-memory description of a Maya module file.
//!
//! A module file consists of a header line followed by optional directive
//! lines, each appending a path to an environment variable of the host:
//!
//! ```text
//! + <name> <version> <path>
//! ARNOLD_PLUGIN_PATH +:= <path>
//! MTOA_TEMPLATES_PATH +:= <path>
//! MAYA_CUSTOM_TEMPLATE_PATH +:= <path>
//! ```

use std::fmt;
use std::path::PathBuf;

use crate::error::{ModfileError, ModfileResult};

/// Extension of generated module files.
pub const MODULE_FILE_EXTENSION: &str = "mod";

/// Version token used when none is given.
pub const DEFAULT_VERSION: &str = "any";

/// Module root path token used when none is given.
pub const DEFAULT_MODULE_PATH: &str = ".";

/// Environment variable extended by a directive line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EnvDirective {
    ArnoldPluginPath,
    MtoaTemplatesPath,
    MayaCustomTemplatePath,
}

impl EnvDirective {
    /// All directives in the order they appear in a module file.
    pub const ALL: [EnvDirective; 3] = [
        EnvDirective::ArnoldPluginPath,
        EnvDirective::MtoaTemplatesPath,
        EnvDirective::MayaCustomTemplatePath,
    ];

    /// Name of the environment variable.
    pub fn variable(self) -> &'static str {
        match self {
            EnvDirective::ArnoldPluginPath => "ARNOLD_PLUGIN_PATH",
            EnvDirective::MtoaTemplatesPath => "MTOA_TEMPLATES_PATH",
            EnvDirective::MayaCustomTemplatePath => "MAYA_CUSTOM_TEMPLATE_PATH",
        }
    }

    /// Render the directive line for `value`, without the line terminator.
    pub fn line(self, value: &str) -> String {
        format!("{} +:= {}", self.variable(), value)
    }
}

impl fmt::Display for EnvDirective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.variable())
    }
}

/// Parameters of a single module file.
///
/// Values are written verbatim: no escaping and no validation of paths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleDescriptor {
    /// Module name, also the base name of the output file
    pub name: String,
    /// Version token
    pub version: String,
    /// Module root path token
    pub module_path: String,
    /// Directory receiving `<name>.mod`
    pub destination_dir: PathBuf,
    pub arnold_plugin_path: Option<String>,
    pub mtoa_templates_path: Option<String>,
    pub maya_custom_template_path: Option<String>,
}

impl ModuleDescriptor {
    /// Create a descriptor with default version and module path.
    pub fn new(name: impl Into<String>, destination_dir: impl Into<PathBuf>) -> ModfileResult<Self> {
        let descriptor = Self {
            name: name.into(),
            version: DEFAULT_VERSION.to_string(),
            module_path: DEFAULT_MODULE_PATH.to_string(),
            destination_dir: destination_dir.into(),
            arnold_plugin_path: None,
            mtoa_templates_path: None,
            maya_custom_template_path: None,
        };
        descriptor.validate()?;
        Ok(descriptor)
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    pub fn with_module_path(mut self, module_path: impl Into<String>) -> Self {
        self.module_path = module_path.into();
        self
    }

    pub fn with_arnold_plugin_path(mut self, path: impl Into<String>) -> Self {
        self.arnold_plugin_path = Some(path.into());
        self
    }

    pub fn with_mtoa_templates_path(mut self, path: impl Into<String>) -> Self {
        self.mtoa_templates_path = Some(path.into());
        self
    }

    pub fn with_maya_custom_template_path(mut self, path: impl Into<String>) -> Self {
        self.maya_custom_template_path = Some(path.into());
        self
    }

    /// Check the invariants a descriptor must hold before being written.
    pub fn validate(&self) -> ModfileResult<()> {
        if self.name.is_empty() {
            return Err(ModfileError::EmptyModuleName);
        }
        if self.destination_dir.as_os_str().is_empty() {
            return Err(ModfileError::EmptyDestination);
        }
        Ok(())
    }

    /// Value of an optional directive field, if any.
    pub fn directive_value(&self, directive: EnvDirective) -> Option<&str> {
        let value = match directive {
            EnvDirective::ArnoldPluginPath => &self.arnold_plugin_path,
            EnvDirective::MtoaTemplatesPath => &self.mtoa_templates_path,
            EnvDirective::MayaCustomTemplatePath => &self.maya_custom_template_path,
        };
        value.as_deref()
    }

    /// Directives to emit, in file order. Empty values are skipped.
    pub fn directives(&self) -> impl Iterator<Item = (EnvDirective, &str)> + '_ {
        EnvDirective::ALL.into_iter().filter_map(move |directive| {
            self.directive_value(directive)
                .filter(|value| !value.is_empty())
                .map(|value| (directive, value))
        })
    }

    /// First line of the file: `+ <name> <version> <path>`.
    pub fn header(&self) -> String {
        format!("+ {} {} {}", self.name, self.version, self.module_path)
    }

    /// `<name>.mod`
    pub fn file_name(&self) -> String {
        format!("{}.{}", self.name, MODULE_FILE_EXTENSION)
    }

    /// Full path of the module file.
    pub fn file_path(&self) -> PathBuf {
        self.destination_dir.join(self.file_name())
    }
}

/// Renders the exact module file content.
impl fmt::Display for ModuleDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.header())?;
        for (directive, value) in self.directives() {
            writeln!(f, "{}", directive.line(value))?;
        }
        Ok(())
    }
}
