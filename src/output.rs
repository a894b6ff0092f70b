use crate::error::Result;
use crate::selection::SelectedObject;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

pub const HEADER: [&str; 5] = ["ID", "RA", "DEC", "Brightness (mag)", "Distance (rad)"];

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Csv,
    Json,
}

impl OutputFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Csv => "csv",
            OutputFormat::Json => "json",
        }
    }
}

/// `<unix seconds>.<extension>`, e.g. 1700000000.csv
pub fn default_file_name(format: OutputFormat) -> String {
    format!("{}.{}", chrono::Utc::now().timestamp(), format.extension())
}

/// one comma separated line per object under the HEADER line, a missing magnitude is left empty
pub fn write_csv<W: Write>(writer: W, selection: &[SelectedObject]) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(HEADER)?;
    for selected in selection {
        let object = selected.object;
        let magnitude = object.magnitude.map(|m| m.to_string()).unwrap_or_default();
        csv_writer.write_record([
            object.id.clone(),
            object.ra.to_string(),
            object.dec.to_string(),
            magnitude,
            selected.distance.to_string(),
        ])?;
    }
    csv_writer.flush()?;
    Ok(())
}

pub fn write_json<W: Write>(writer: W, selection: &[SelectedObject]) -> Result<()> {
    serde_json::to_writer_pretty(writer, selection)?;
    Ok(())
}

pub fn write_selection_file<P: AsRef<Path>>(
    path: P,
    format: OutputFormat,
    selection: &[SelectedObject],
) -> Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    match format {
        OutputFormat::Csv => write_csv(&mut writer, selection)?,
        OutputFormat::Json => write_json(&mut writer, selection)?,
    }
    writer.flush()?;
    Ok(())
}
