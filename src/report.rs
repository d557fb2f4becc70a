// Spreadsheet report of term counts per matching file
use rust_xlsxwriter::{ColNum, Format, Workbook};

use crate::config::{REPORT_FILENAME_HEADER, REPORT_SHEET_NAME};
use crate::types::{MatchResult, Result, TriageError};

/// Builds a single-sheet XLSX: header `Arquivo, term_1, .., term_n`, then
/// one row per match with the count of each term (0 when absent).
pub fn build_report(matches: &[MatchResult<'_>], terms: &[String]) -> Result<Vec<u8>> {
    let columns = terms.len() + 1;
    if ColNum::try_from(columns).is_err() {
        return Err(TriageError::ReportTooWide(columns));
    }

    let mut workbook = Workbook::new();
    let header = Format::new().set_bold();
    let sheet = workbook.add_worksheet();
    sheet.set_name(REPORT_SHEET_NAME)?;

    sheet.write_string_with_format(0, 0, REPORT_FILENAME_HEADER, &header)?;
    for (col, term) in (1..).zip(terms) {
        sheet.write_string_with_format(0, col, term.as_str(), &header)?;
    }

    for (row, result) in (1..).zip(matches) {
        sheet.write_string(row, 0, result.filename)?;
        for (col, term) in (1..).zip(terms) {
            sheet.write_number(row, col, result.count_for(term) as f64)?;
        }
    }

    let buffer = workbook.save_to_buffer()?;
    tracing::debug!(rows = matches.len(), columns, "report built");
    Ok(buffer)
}
