//! Command-line surface.

use clap::Parser;
use std::path::PathBuf;

use crate::config::DescriptorFile;
use crate::descriptor::ModuleDescriptor;
use crate::error::ModfileResult;

/// Generate Maya module description file for a given project.
#[derive(Parser, Debug)]
#[command(name = "maya-modfile")]
#[command(version)]
#[command(about = "Generate Maya module description file for a given project.", long_about = None)]
pub struct Cli {
    /// Name of the module to create (without extension)
    #[arg(long = "module_name", required_unless_present = "descriptor")]
    pub module_name: Option<String>,

    /// Version of the module to create [default: any]
    #[arg(long = "module_version")]
    pub module_version: Option<String>,

    /// Path to the module folder [default: .]
    #[arg(long = "module_path")]
    pub module_path: Option<String>,

    /// Path to the destination folder
    #[arg(long = "dst_dirpath", required_unless_present = "descriptor")]
    pub dst_dirpath: Option<PathBuf>,

    /// Path to the Arnold plugin folder, appended to ARNOLD_PLUGIN_PATH
    #[arg(long = "arnold_plugin_path")]
    pub arnold_plugin_path: Option<String>,

    /// Path to the MtoA templates folder, appended to MTOA_TEMPLATES_PATH
    #[arg(long = "mtoa_templates_path")]
    pub mtoa_templates_path: Option<String>,

    /// Path to the Maya custom template folder, appended to MAYA_CUSTOM_TEMPLATE_PATH
    #[arg(long = "maya_custom_template_path")]
    pub maya_custom_template_path: Option<String>,

    /// TOML file providing values for the options above
    #[arg(long, value_name = "FILE")]
    pub descriptor: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Quiet mode
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Resolve the final descriptor: descriptor file first, flags on top.
    pub fn into_descriptor(self) -> ModfileResult<ModuleDescriptor> {
        let base = match &self.descriptor {
            Some(path) => DescriptorFile::load(path)?,
            None => DescriptorFile::default(),
        };

        let flags = DescriptorFile {
            module_name: self.module_name,
            module_version: self.module_version,
            module_path: self.module_path,
            dst_dirpath: self.dst_dirpath,
            arnold_plugin_path: self.arnold_plugin_path,
            mtoa_templates_path: self.mtoa_templates_path,
            maya_custom_template_path: self.maya_custom_template_path,
        };

        base.merge(flags).into_descriptor()
    }
}
