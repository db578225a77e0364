use std::collections::HashSet;
use std::path::Path;

use anyhow::Context;
use indexmap::IndexMap;
use log::{debug, warn};
use lopdf::{Document, Object, ObjectId, StringFormat};

/// A PDF document with an interactive form (an "AcroForm").
///
/// This only supports what the billing template needs: setting the value of
/// named text fields and writing the result back to disk.
pub struct PdfForm {
    document: Document,
}

/// PDF text strings are either latin-like one-byte strings or UTF-16BE with
/// a byte order mark. Everything the form usually holds is ASCII, so the
/// UTF-16 variant is only used when necessary.
fn encode_text(value: &str) -> Vec<u8> {
    if value.is_ascii() {
        value.as_bytes().to_vec()
    } else {
        let mut bytes = vec![0xFE, 0xFF];
        for unit in value.encode_utf16() {
            bytes.extend_from_slice(&unit.to_be_bytes());
        }

        bytes
    }
}

impl PdfForm {
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let document = Document::load(path)
            .with_context(|| format!("failed to read the template `{}`", path.display()))?;

        Ok(Self { document })
    }

    /// Sets the value of every field named in `values`.
    ///
    /// Field names that do not exist in the form are logged and skipped, so a
    /// template update does not silently produce an empty document.
    pub fn set_fields(&mut self, values: &IndexMap<String, String>) {
        let mut filled = HashSet::new();

        for object in self.document.objects.values_mut() {
            let Object::Dictionary(dict) = object else {
                continue;
            };

            let name = match dict.get(b"T") {
                Ok(Object::String(bytes, _)) => String::from_utf8_lossy(bytes).into_owned(),
                _ => continue,
            };

            if let Some(value) = values.get(&name) {
                debug!("{} = \"{}\"", name, value);
                dict.set("V", Object::String(encode_text(value), StringFormat::Literal));
                // the appearance stream would keep showing the old value
                dict.remove(b"AP");
                filled.insert(name);
            }
        }

        for name in values.keys() {
            if !filled.contains(name) {
                warn!("the form has no field named \"{}\"", name);
            }
        }
    }

    /// Tells viewers to regenerate the field appearances, so the values set by
    /// `set_fields` become visible.
    pub fn enable_need_appearances(&mut self) -> anyhow::Result<()> {
        let catalog_id = self
            .document
            .trailer
            .get(b"Root")
            .and_then(Object::as_reference)
            .context("the template has no document catalog")?;

        let acro_form: Option<ObjectId> = {
            let catalog = self.document.get_object(catalog_id)?.as_dict()?;

            match catalog.get(b"AcroForm") {
                Ok(Object::Reference(id)) => Some(*id),
                Ok(Object::Dictionary(_)) => None,
                _ => anyhow::bail!("the template has no form to fill"),
            }
        };

        let form_dict = match acro_form {
            Some(id) => self.document.get_object_mut(id)?.as_dict_mut()?,
            None => self
                .document
                .get_object_mut(catalog_id)?
                .as_dict_mut()?
                .get_mut(b"AcroForm")?
                .as_dict_mut()?,
        };

        form_dict.set("NeedAppearances", Object::Boolean(true));

        Ok(())
    }

    pub fn save(&mut self, path: impl AsRef<Path>) -> anyhow::Result<()> {
        let path = path.as_ref();
        self.document
            .save(path)
            .with_context(|| format!("failed to write `{}`", path.display()))?;

        Ok(())
    }
}
