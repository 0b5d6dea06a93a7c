// src/csv.rs
// Row shaping for export, plus a reader for files we wrote.
// The extern crate is spelled `::csv` throughout to keep it apart from this module.

use std::io::{Read, Write};

use crate::config::consts::NOT_AVAILABLE;
use crate::store::{JobRecord, ResultSet};

/// Leading blank cell is the row-index column.
pub const HEADERS: [&str; 10] = [
    "", "Date", "Time", "Posted", "Job Title", "Salary", "Company", "Location", "Job Description", "Job URL",
];

/// Absent detail fields become `N/A` here and nowhere else.
pub fn render(field: Option<&str>) -> &str {
    field.unwrap_or(NOT_AVAILABLE)
}

/// One export row: id, then the nine data columns.
pub fn build_export_row(rec: &JobRecord) -> Vec<String> {
    let mut row = Vec::with_capacity(HEADERS.len());
    row.push(rec.id.to_string());
    row.push(rec.scrape_date.clone());
    row.push(rec.scrape_time.clone());
    row.push(rec.posted.clone());
    row.extend(rec.detail.fields().into_iter().map(|f| s!(render(f))));
    row.push(rec.url.clone());
    row
}

/// Header plus every record, in insertion order.
pub fn write_rows<W: Write>(w: W, set: &ResultSet) -> ::csv::Result<()> {
    let mut out = ::csv::WriterBuilder::new().has_headers(false).from_writer(w);
    out.write_record(HEADERS)?;
    for rec in set {
        out.write_record(build_export_row(rec))?;
    }
    out.flush()?;
    Ok(())
}

/// Split a file written by [`write_rows`] into header and data rows.
pub fn read_rows<R: Read>(r: R) -> ::csv::Result<(Vec<String>, Vec<Vec<String>>)> {
    let mut rdr = ::csv::ReaderBuilder::new().has_headers(true).from_reader(r);
    let headers = rdr.headers()?.iter().map(String::from).collect();
    let mut rows = Vec::new();
    for rec in rdr.records() {
        rows.push(rec?.iter().map(String::from).collect());
    }
    Ok((headers, rows))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::specs::detail::JobDetail;

    #[test]
    fn absent_fields_render_as_sentinel() {
        let rec = JobRecord {
            id: 7,
            scrape_date: s!("01/02/2024"),
            scrape_time: s!("10:00:00"),
            posted: s!("Today"),
            detail: JobDetail { company: Some(s!("Acme")), ..JobDetail::default() },
            url: s!("https://uk.indeed.com/rc/clk?jk=7"),
        };
        let row = build_export_row(&rec);
        assert_eq!(row.len(), HEADERS.len());
        assert_eq!(&row[..4], ["7", "01/02/2024", "10:00:00", "Today"]);
        assert_eq!(&row[4..9], ["N/A", "N/A", "Acme", "N/A", "N/A"]);
        assert_eq!(row[9], "https://uk.indeed.com/rc/clk?jk=7");
    }

    #[test]
    fn quoted_fields_survive_a_read_back() {
        let ctx = crate::store::RunContext::now();
        let mut agg = crate::store::Aggregator::new(&ctx);
        agg.push(
            crate::specs::results::ListingStub { url: s!("https://x/a"), posted: s!("1 day ago") },
            JobDetail { description: Some(s!("Line one,\n\"quoted\" line two")), ..JobDetail::default() },
        );
        let set = agg.finish();

        let mut buf = Vec::new();
        write_rows(&mut buf, &set).unwrap();
        let (headers, rows) = read_rows(buf.as_slice()).unwrap();
        assert_eq!(headers, HEADERS);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0][8], "Line one,\n\"quoted\" line two");
    }
}
