use calamine::{Data, DataType, Reader, Xlsx, XlsxError};
use chrono::Timelike;
use rust_xlsxwriter::{Format, Workbook};
use std::io::{Read, Seek};

use crate::error::{AppError, Result};
use crate::local_storage::issue_tables::IssueTable;
use crate::models::IssueRecord;

/// Written past the last column of a record whose fields are all empty, so the
/// row still counts as used. Columns beyond the schema are ignored on read.
const EMPTY_ROW_MARKER: &str = "(empty)";

/// Writes the header row followed by one row per record, every cell as a string.
///
/// Empty fields are left as blank cells, which read back as "".
pub fn encode_records(records: &[IssueRecord]) -> Result<Vec<u8>> {
    let mut workbook = Workbook::new();
    let header_format = Format::new().set_bold();

    let worksheet = workbook.add_worksheet();
    worksheet.set_name(IssueTable::SHEET_NAME)?;

    for (col, name) in IssueTable::COLUMNS.iter().enumerate() {
        worksheet.write_string_with_format(0, col as u16, *name, &header_format)?;
    }

    for (index, record) in records.iter().enumerate() {
        let row = u32::try_from(index + 1)
            .map_err(|_| AppError::Export(format!("Too many rows: {}", records.len())))?;

        let fields = record.to_fields();
        for (col, value) in fields.iter().enumerate() {
            if value.is_empty() {
                continue;
            }
            worksheet.write_string(row, col as u16, *value)?;
        }
        if fields.iter().all(|value| value.is_empty()) {
            worksheet.write_string(row, fields.len() as u16, EMPTY_ROW_MARKER)?;
        }
    }

    Ok(workbook.save_to_buffer()?)
}

/// Parses the first worksheet of a workbook back into records.
pub fn decode_records<RS: Read + Seek>(reader: RS) -> Result<Vec<IssueRecord>> {
    let mut workbook: Xlsx<RS> = Xlsx::new(reader).map_err(map_read_error)?;

    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| AppError::MalformedStore("Workbook has no worksheets".into()))?
        .map_err(map_read_error)?;

    let mut rows = range.rows();
    let mut header: Vec<String> = rows
        .next()
        .ok_or_else(|| AppError::MalformedStore("Worksheet has no header row".into()))?
        .iter()
        .map(cell_text)
        .collect();

    while header.last().is_some_and(|name| name.is_empty()) {
        header.pop();
    }

    if !IssueTable::matches_header(&header) {
        return Err(AppError::MalformedStore(format!(
            "Unexpected columns: {:?}",
            header
        )));
    }

    let records = rows
        .map(|row| {
            let fields: [String; 12] =
                std::array::from_fn(|col| row.get(col).map(cell_text).unwrap_or_default());
            IssueRecord::from_fields(fields)
        })
        .collect();

    Ok(records)
}

fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => unescape_cell_string(s),
        Data::DateTime(_) => match cell.as_datetime() {
            Some(dt) if dt.num_seconds_from_midnight() == 0 => dt.format("%Y-%m-%d").to_string(),
            Some(dt) => dt.format("%Y-%m-%d %H:%M:%S").to_string(),
            None => cell.to_string(),
        },
        other => other.to_string(),
    }
}

/// Undoes the `_xHHHH_` escapes the writer uses for control characters
/// (`\r` becomes `_x000D_`) and for literal escape-like text (`_x005F_`).
fn unescape_cell_string(s: &str) -> String {
    if !s.contains("_x") {
        return s.to_string();
    }

    let mut out = String::with_capacity(s.len());
    let mut rest = s;
    while let Some(pos) = rest.find("_x") {
        out.push_str(&rest[..pos]);
        let candidate = &rest[pos..];
        match decode_escape(candidate) {
            Some(ch) => {
                out.push(ch);
                rest = &candidate[7..];
            }
            None => {
                out.push_str("_x");
                rest = &candidate[2..];
            }
        }
    }
    out.push_str(rest);
    out
}

fn decode_escape(s: &str) -> Option<char> {
    if s.as_bytes().get(6) != Some(&b'_') {
        return None;
    }
    let hex = s.get(2..6)?;
    if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    u32::from_str_radix(hex, 16).ok().and_then(char::from_u32)
}

fn map_read_error(err: XlsxError) -> AppError {
    match err {
        XlsxError::Io(e) => AppError::StorageUnavailable(e.to_string()),
        other => AppError::MalformedStore(other.to_string()),
    }
}
