use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use log::trace;
use serde::de::DeserializeOwned;

pub fn toml_from_reader<R, T>(reader: R) -> anyhow::Result<T>
where
    R: Read,
    T: DeserializeOwned,
{
    let mut reader = BufReader::new(reader);
    let mut data = String::with_capacity(1024);
    reader.read_to_string(&mut data)?;
    Ok(toml::from_str(&data)?)
}

pub trait StrExt {
    fn split_exact<const N: usize>(&self, pat: &str) -> [Option<&str>; N];
}

impl StrExt for str {
    fn split_exact<const N: usize>(&self, pat: &str) -> [Option<&str>; N] {
        let mut split = self.splitn(N, pat);
        [(); N].map(|_| split.next())
    }
}

/// Returns `file` if nothing exists at that path, otherwise the first variant
/// with a `_1`, `_2`, ... suffix before the extension that is still free.
#[must_use]
pub fn free_file_name(file: &Path) -> PathBuf {
    if !file.exists() {
        return file.to_path_buf();
    }

    let stem = file.file_stem().unwrap_or_default().to_string_lossy();
    let extension = file.extension().map(|ext| ext.to_string_lossy());

    (1..)
        .map(|i| {
            let name = match &extension {
                Some(extension) => format!("{}_{}.{}", stem, i, extension),
                None => format!("{}_{}", stem, i),
            };

            trace!("checking for collision: {}", name);
            file.with_file_name(name)
        })
        .find(|candidate| !candidate.exists())
        .expect("the suffix search is unbounded")
}
