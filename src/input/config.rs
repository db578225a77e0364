use std::fs::File;
use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Deserialize;

use crate::input::toml_input::{Class, Instructor, Template};
use crate::utils;

#[derive(Debug, Clone, Deserialize)]
struct ConfigFile {
    instructor: Instructor,
    class: Class,
    template: Template,
}

pub struct Config {
    instructor: Instructor,
    class: Class,
    template: Template,
    base: PathBuf,
}

impl Config {
    pub fn try_from_toml(document: &str, base: impl Into<PathBuf>) -> anyhow::Result<Self> {
        let file: ConfigFile = toml::from_str(document)?;

        Ok(Self {
            instructor: file.instructor,
            class: file.class,
            template: file.template,
            base: base.into(),
        })
    }

    pub fn try_from_toml_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();

        let file: ConfigFile = utils::toml_from_reader(
            File::open(path).with_context(|| format!("failed to open `{}`", path.display()))?,
        )
        .with_context(|| format!("failed to parse `{}`", path.display()))?;

        // template and output files are relative to the configuration file
        let base = dunce::canonicalize(path)?
            .parent()
            .ok_or_else(|| anyhow::anyhow!("configuration file should have a parent directory"))?
            .to_path_buf();

        Ok(Self {
            instructor: file.instructor,
            class: file.class,
            template: file.template,
            base,
        })
    }

    pub fn instructor(&self) -> &Instructor {
        &self.instructor
    }

    pub fn class(&self) -> &Class {
        &self.class
    }

    pub fn template(&self) -> &Template {
        &self.template
    }

    /// The directory the configuration file was loaded from.
    pub fn base(&self) -> &Path {
        &self.base
    }

    pub fn template_path(&self) -> PathBuf {
        self.base.join(self.template.file())
    }
}
