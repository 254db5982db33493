//! Descriptor file handling.
//!
//! A descriptor file is a TOML document whose keys mirror the command-line
//! flags. Every key is optional; values given on the command line take
//! precedence over the file.
//!
//! ```toml
//! module_name = "shaders"
//! module_version = "2.1.0"
//! dst_dirpath = "build/modules"
//! arnold_plugin_path = "/opt/shaders/bin"
//! ```

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::descriptor::{ModuleDescriptor, DEFAULT_MODULE_PATH, DEFAULT_VERSION};
use crate::error::{ModfileError, ModfileResult};

/// Partially specified module parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DescriptorFile {
    #[serde(default)]
    pub module_name: Option<String>,

    #[serde(default)]
    pub module_version: Option<String>,

    #[serde(default)]
    pub module_path: Option<String>,

    /// Relative paths resolve against the working directory
    #[serde(default)]
    pub dst_dirpath: Option<PathBuf>,

    #[serde(default)]
    pub arnold_plugin_path: Option<String>,

    #[serde(default)]
    pub mtoa_templates_path: Option<String>,

    #[serde(default)]
    pub maya_custom_template_path: Option<String>,
}

impl DescriptorFile {
    /// Load a descriptor file.
    pub fn load(path: impl AsRef<Path>) -> ModfileResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ModfileError::ReadDescriptor {
            path: path.to_path_buf(),
            source,
        })?;

        Self::parse(&content).map_err(|message| ModfileError::ParseDescriptor {
            path: path.to_path_buf(),
            message,
        })
    }

    fn parse(content: &str) -> Result<Self, String> {
        toml::from_str(content).map_err(|e| e.to_string())
    }

    /// Overlay `overrides` on top of `self`; set fields in `overrides` win.
    pub fn merge(self, overrides: DescriptorFile) -> Self {
        Self {
            module_name: overrides.module_name.or(self.module_name),
            module_version: overrides.module_version.or(self.module_version),
            module_path: overrides.module_path.or(self.module_path),
            dst_dirpath: overrides.dst_dirpath.or(self.dst_dirpath),
            arnold_plugin_path: overrides.arnold_plugin_path.or(self.arnold_plugin_path),
            mtoa_templates_path: overrides.mtoa_templates_path.or(self.mtoa_templates_path),
            maya_custom_template_path: overrides
                .maya_custom_template_path
                .or(self.maya_custom_template_path),
        }
    }

    /// Build a descriptor, applying defaults for version and module path.
    pub fn into_descriptor(self) -> ModfileResult<ModuleDescriptor> {
        let name = self
            .module_name
            .ok_or(ModfileError::MissingArgument("module_name"))?;
        let dst = self
            .dst_dirpath
            .filter(|dst| !dst.as_os_str().is_empty())
            .ok_or(ModfileError::MissingArgument("dst_dirpath"))?;

        Ok(ModuleDescriptor {
            version: self
                .module_version
                .unwrap_or_else(|| DEFAULT_VERSION.to_string()),
            module_path: self
                .module_path
                .unwrap_or_else(|| DEFAULT_MODULE_PATH.to_string()),
            arnold_plugin_path: self.arnold_plugin_path,
            mtoa_templates_path: self.mtoa_templates_path,
            maya_custom_template_path: self.maya_custom_template_path,
            ..ModuleDescriptor::new(name, dst)?
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_load_descriptor_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("shaders.toml");
        fs::write(
            &path,
            r#"
module_name = "shaders"
module_version = "2.1.0"
dst_dirpath = "build/modules"
mtoa_templates_path = "/opt/shaders/mtoa"
"#,
        )
        .unwrap();

        let file = DescriptorFile::load(&path).unwrap();
        assert_eq!(file.module_name.as_deref(), Some("shaders"));
        assert_eq!(file.dst_dirpath, Some(PathBuf::from("build/modules")));
        assert_eq!(file.arnold_plugin_path, None);
    }

    #[test]
    fn test_missing_file() {
        let dir = tempdir().unwrap();
        let result = DescriptorFile::load(dir.path().join("absent.toml"));
        assert!(matches!(result, Err(ModfileError::ReadDescriptor { .. })));
    }

    #[test]
    fn test_unknown_key_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        fs::write(&path, "module_nam = \"typo\"\n").unwrap();

        let result = DescriptorFile::load(&path);
        assert!(matches!(result, Err(ModfileError::ParseDescriptor { .. })));
    }

    #[test]
    fn test_parse_error_reports_location() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        fs::write(&path, "module_name = \"foo\"\nmodule_version = [\n").unwrap();

        let err = DescriptorFile::load(&path).unwrap_err();
        assert!(err.to_string().contains("line 2"), "{}", err);
    }

    #[test]
    fn test_merge_prefers_overrides() {
        let base = DescriptorFile {
            module_name: Some("base".to_string()),
            module_version: Some("1.0".to_string()),
            arnold_plugin_path: Some("/base/arnold".to_string()),
            ..Default::default()
        };
        let overrides = DescriptorFile {
            module_name: Some("cli".to_string()),
            dst_dirpath: Some(PathBuf::from("out")),
            ..Default::default()
        };

        let merged = base.merge(overrides);
        assert_eq!(merged.module_name.as_deref(), Some("cli"));
        assert_eq!(merged.module_version.as_deref(), Some("1.0"));
        assert_eq!(merged.arnold_plugin_path.as_deref(), Some("/base/arnold"));
        assert_eq!(merged.dst_dirpath, Some(PathBuf::from("out")));
    }

    #[test]
    fn test_into_descriptor_defaults() {
        let file = DescriptorFile {
            module_name: Some("foo".to_string()),
            dst_dirpath: Some(PathBuf::from("/tmp/out")),
            ..Default::default()
        };

        let descriptor = file.into_descriptor().unwrap();
        assert_eq!(descriptor, ModuleDescriptor::new("foo", "/tmp/out").unwrap());
    }

    #[test]
    fn test_into_descriptor_missing_fields() {
        let no_name = DescriptorFile {
            dst_dirpath: Some(PathBuf::from("out")),
            ..Default::default()
        };
        assert!(matches!(
            no_name.into_descriptor(),
            Err(ModfileError::MissingArgument("module_name"))
        ));

        let no_dst = DescriptorFile {
            module_name: Some("foo".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            no_dst.into_descriptor(),
            Err(ModfileError::MissingArgument("dst_dirpath"))
        ));
    }

    #[test]
    fn test_empty_dst_dirpath_is_missing() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("module.toml");
        fs::write(&path, "module_name = \"foo\"\ndst_dirpath = \"\"\n").unwrap();

        let file = DescriptorFile::load(&path).unwrap();
        assert!(matches!(
            file.into_descriptor(),
            Err(ModfileError::MissingArgument("dst_dirpath"))
        ));
    }

    #[test]
    fn test_into_descriptor_empty_name() {
        let file = DescriptorFile {
            module_name: Some(String::new()),
            dst_dirpath: Some(PathBuf::from("out")),
            ..Default::default()
        };
        assert!(matches!(
            file.into_descriptor(),
            Err(ModfileError::EmptyModuleName)
        ));
    }
}
