use std::path::Path;

use indexmap::IndexMap;
use log::info;

use crate::bill::Bill;
use crate::input::Config;
use crate::pdf_form::PdfForm;
use crate::time::Date;

/// Formats a number the way the form expects it: with a decimal comma and
/// at least one decimal digit (`72.0` becomes `"72,0"`).
#[must_use]
fn format_number(value: f64) -> String {
    let formatted = if value.fract() == 0.0 {
        format!("{:.1}", value)
    } else {
        value.to_string()
    };

    formatted.replace('.', ",")
}

pub struct PdfGenerator<'a> {
    config: &'a Config,
    bill: &'a Bill<'a>,
}

impl<'a> PdfGenerator<'a> {
    pub fn new(config: &'a Config, bill: &'a Bill<'a>) -> Self {
        Self { config, bill }
    }

    /// The values for the fields of the 2023-10-24 Sportzentrum template.
    ///
    /// May have to be changed if the template is updated.
    #[must_use]
    pub fn field_values(&self, signature_date: Date) -> IndexMap<String, String> {
        let instructor = self.config.instructor();
        let class = self.config.class();
        let period = self.bill.period();
        let fee_tier = self.config.template().fee_tier();

        let mut fields = IndexMap::new();

        // instructor data (the name field really is called "Monat")
        fields.insert("Monat".to_string(), instructor.name().to_string());
        for (i, line) in instructor.address().iter().enumerate() {
            fields.insert((i + 1).to_string(), line.clone());
        }
        fields.insert("3".to_string(), instructor.iban().to_string());

        // bill data
        fields.insert("sportart".to_string(), class.name().to_string());
        fields.insert("undefined".to_string(), period.to_string());

        // totals
        fields.insert("summe".to_string(), format_number(self.bill.total_hours()));
        fields.insert(
            fee_tier.total_fee_field().to_string(),
            format_number(self.bill.total_fee()),
        );

        // signature
        fields.insert(
            "Braunschweig den".to_string(),
            signature_date.formatted("{day}.{month}.{year}"),
        );

        // individual records
        for (i, record) in self.bill.records().enumerate() {
            let row = i + 1;

            fields.insert(
                format!("DatumRow{}", row),
                format!("{}.{}.{}", record.day(), period.month(), period.year()),
            );
            fields.insert(
                format!("ArbeitszeitRow{}", row),
                format!("{} - {}", class.time().start(), class.time().end()),
            );
            fields.insert(format!("StdRow{}", row), format_number(record.hours()));
            fields.insert(fee_tier.fee_row(row), format_number(record.fee()));
            fields.insert(
                format!("Teil nehmerRow{}", row),
                record.participant_count().to_string(),
            );
        }

        fields
    }

    pub fn generate(self, outpath: impl AsRef<Path>) -> anyhow::Result<()> {
        let template = self.config.template_path();

        info!("reading {}", template.display());
        let mut form = PdfForm::load(&template)?;

        form.set_fields(&self.field_values(Date::today()));
        form.enable_need_appearances()?;

        info!("writing {}", outpath.as_ref().display());
        form.save(outpath)?;

        Ok(())
    }
}
