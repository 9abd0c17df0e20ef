use klub_model::CanonicalField;

use crate::error::ExportError;
use crate::render::finish_csv;

/// A fill-in template for one entity: exactly the canonical header row,
/// no data rows. Re-importing an untouched template is a clean no-op.
pub fn template<F: CanonicalField>() -> Result<String, ExportError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(F::ALL.iter().map(|field| field.header()))?;
    finish_csv(writer)
}
