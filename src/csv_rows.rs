use crate::{Error, Row};

/// Reads every line of a csv file as a [Row]
///
/// The first line is the header. Values are trimmed and blank values are unset:
/// csv has no way to tell an empty string from a missing value.
/// Lines shorter than the header leave the remaining columns absent, extra values are ignored.
pub fn read_rows<R: std::io::Read>(reader: R, file_name: &str) -> Result<Vec<Row>, Error> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::Fields)
        .from_reader(reader);
    // cloned, since reading the records borrows the reader
    let headers = reader
        .headers()
        .map_err(|e| Error::CSVError {
            file_name: file_name.to_owned(),
            source: e,
        })?
        .clone();

    let mut res = Vec::new();
    for rec in reader.records() {
        let r = rec.map_err(|e| Error::CSVError {
            file_name: file_name.to_owned(),
            source: e,
        })?;
        let mut row = Row::new();
        for (name, value) in headers.iter().zip(r.iter()) {
            row.set(name, Some(value.to_owned()).filter(|v| !v.is_empty()));
        }
        res.push(row);
    }

    Ok(res)
}

/// Writes the header then one line per row. Unset values are written blank
///
/// Columns of a row that are not part of `columns` are not written.
pub fn write_rows<W: std::io::Write>(
    writer: W,
    columns: &[&str],
    rows: &[Row],
) -> Result<(), Error> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(columns).map_err(std::io::Error::from)?;
    for row in rows {
        wtr.write_record(columns.iter().map(|c| row.get(c).unwrap_or_default()))
            .map_err(std::io::Error::from)?;
    }
    wtr.flush()?;
    Ok(())
}
