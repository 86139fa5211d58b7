// src/csv.rs
use std::io::{self, Write};

use crate::record::RecordSet;

fn needs_quotes(field: &str, sep: char) -> bool {
    field.contains(sep) || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// Write a single CSV row to any writer.
pub fn write_row<W: Write, S: AsRef<str>>(mut w: W, row: &[S], sep: char) -> io::Result<()> {
    let mut first = true;
    for cell in row {
        let cell = cell.as_ref();
        if !first { write!(w, "{}", sep)?; } else { first = false; }
        if needs_quotes(cell, sep) {
            let escaped = cell.replace('"', "\"\"");
            write!(w, "\"{}\"", escaped)?;
        } else {
            write!(w, "{}", cell)?;
        }
    }
    writeln!(w)
}

/// Header row of field names, then one row per record. Placeholders are
/// written verbatim.
pub fn write_records<W: Write>(mut w: W, set: &RecordSet) -> io::Result<()> {
    write_row(&mut w, &set.headers(), ',')?;
    for record in set {
        write_row(&mut w, &record.display_row(), ',')?;
    }
    Ok(())
}

pub fn to_csv_string(set: &RecordSet) -> String {
    let mut buf: Vec<u8> = Vec::new();
    let _ = write_records(&mut buf, set);

    match String::from_utf8(buf) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(&e.into_bytes()).into_owned(),
    }
}
