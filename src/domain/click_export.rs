//! CSV rendering of mapped clicks.

use std::io::Write;

use crate::domain::entities::ClickView;

/// Column order of exported files.
pub const CSV_HEADER: [&str; 5] = ["link", "date", "time", "path", "city"];

/// UTF-8 byte order mark, so spreadsheet tools pick the right encoding for
/// non-ASCII city names.
pub const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Writes `views` as CSV with a header row.
///
/// The header is written even when there are no rows.
///
/// # Errors
///
/// Returns [`csv::Error`] if the underlying writer fails.
pub fn write_csv<W: Write>(views: &[ClickView], writer: W) -> Result<(), csv::Error> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);

    wtr.write_record(CSV_HEADER)?;
    for view in views {
        wtr.serialize(view)?;
    }
    wtr.flush()?;

    Ok(())
}

/// Renders `views` into an in-memory CSV document prefixed with a BOM.
///
/// # Errors
///
/// Returns [`csv::Error`] if serialization fails.
pub fn to_csv_bytes(views: &[ClickView]) -> Result<Vec<u8>, csv::Error> {
    let mut buf = UTF8_BOM.to_vec();
    write_csv(views, &mut buf)?;
    Ok(buf)
}
