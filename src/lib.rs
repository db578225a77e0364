mod pdf_form;
mod pdf_generator;
mod utils;

pub mod bill;
pub mod input;
pub mod time;

use std::path::PathBuf;

use log::info;

use crate::bill::Bill;
use crate::input::Config;
use crate::pdf_generator::PdfGenerator;

/// Fills the template with the bill and writes the result next to the
/// configuration file, under a name that is not taken yet.
///
/// Returns the path of the written file.
pub fn generate_bill(config: &Config, bill: &Bill) -> anyhow::Result<PathBuf> {
    info!(
        "billing {} sessions: {} hours",
        bill.records().count(),
        bill.total_hours()
    );

    let output = utils::free_file_name(
        &config
            .base()
            .join(format!("{}.pdf", bill.default_file_name_stem())),
    );
    anyhow::ensure!(
        !output.exists(),
        "output file `{}` already exists",
        output.display()
    );

    let generator = PdfGenerator::new(config, bill);
    generator.generate(&output)?;

    Ok(output)
}
