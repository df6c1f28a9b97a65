//! Spreadsheet reading backed by calamine
//!
//! Produces a `SheetMatrix` of the first worksheet anchored at A1.

use std::fmt::Debug;
use std::io::Cursor;

use calamine::{Data, Ods, Range, Reader, Xls, Xlsx};
use tracing::debug;

use crate::infrastructure::parsing::SheetMatrix;
use crate::infrastructure::parsing_error::{ParsingError, ParsingResult};
use crate::infrastructure::source_format::SourceFormat;

type Workbook = Cursor<Vec<u8>>;

#[derive(Debug, Clone, Copy, Default)]
pub struct SpreadsheetReader;

impl SpreadsheetReader {
    pub fn new() -> Self {
        Self
    }

    /// Read the first worksheet of a workbook held in memory
    pub fn read(&self, format: SourceFormat, bytes: Vec<u8>) -> ParsingResult<SheetMatrix> {
        match format {
            SourceFormat::Xlsx | SourceFormat::Xlsm => first_sheet::<Xlsx<Workbook>>(bytes),
            SourceFormat::Xls => first_sheet::<Xls<Workbook>>(bytes),
            SourceFormat::Ods => first_sheet::<Ods<Workbook>>(bytes),
            SourceFormat::Html => Err(ParsingError::malformed_spreadsheet("HTML is not a spreadsheet format")),
        }
    }
}

fn first_sheet<R>(bytes: Vec<u8>) -> ParsingResult<SheetMatrix>
where
    R: Reader<Workbook>,
    R::Error: Debug,
{
    let mut workbook = R::new(Cursor::new(bytes)).map_err(|e| ParsingError::malformed_spreadsheet(format!("{e:?}")))?;

    let name = workbook
        .sheet_names()
        .into_iter()
        .next()
        .ok_or_else(|| ParsingError::malformed_spreadsheet("workbook has no worksheet"))?;

    let range = workbook
        .worksheet_range(&name)
        .map_err(|e| ParsingError::malformed_spreadsheet(format!("{e:?}")))?;

    debug!("Reading worksheet '{}' ({:?})", name, range.get_size());
    Ok(to_matrix(&range))
}

/// Materialize leading empty rows and columns so indices count from A1
fn to_matrix(range: &Range<Data>) -> SheetMatrix {
    let Some((start_row, start_col)) = range.start() else {
        return Vec::new();
    };
    let (start_row, start_col) = (start_row as usize, start_col as usize);
    let width = start_col + range.width();

    let mut matrix: SheetMatrix = vec![vec![None; width]; start_row];
    matrix.extend(range.rows().map(|row| {
        let mut values = vec![None; start_col];
        values.extend(row.iter().map(cell_value));
        values
    }));
    matrix
}

fn cell_value(data: &Data) -> Option<String> {
    match data {
        Data::Empty => None,
        Data::String(text) => Some(text.clone()),
        other => Some(other.to_string()),
    }
}
