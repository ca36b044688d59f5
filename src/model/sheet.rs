//! Spreadsheet types for the grid and value-range payload shapes.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::value::{cell_text, kind, string_field};
use crate::error::{Error, Result};

/// A spreadsheet payload, resolved once from its shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SheetPayload {
    /// `spreadsheets.get` with grid data: sheets, data blocks, rows, cells
    Grid(Spreadsheet),

    /// `values.batchGet` / `values.get`: ranges of raw value rows
    Ranges(ValueRanges),
}

impl SheetPayload {
    /// Build a sheet payload from the JSON returned by the API.
    ///
    /// A `valueRanges` array selects the range form, a `sheets` array the
    /// grid form. A lone `values` array (a single-range response) is read as
    /// a range form with one range. Anything else, non-object payloads
    /// included, is [`Error::MissingPayload`].
    pub fn from_json(value: &Value) -> Result<Self> {
        if !value.is_object() {
            log::debug!("spreadsheet payload is {}, not an object", kind(value));
            return Err(Error::MissingPayload("sheets"));
        }

        if let Some(ranges) = value.get("valueRanges").and_then(Value::as_array) {
            return Ok(SheetPayload::Ranges(ValueRanges::from_json(ranges)));
        }
        if let Some(sheets) = value.get("sheets").and_then(Value::as_array) {
            return Ok(SheetPayload::Grid(Spreadsheet::from_json(value, sheets)));
        }
        if value.get("values").is_some_and(Value::is_array) {
            let range = ValueRange::from_json(value, 0)?;
            return Ok(SheetPayload::Ranges(ValueRanges {
                ranges: vec![range],
            }));
        }

        Err(Error::MissingPayload("sheets"))
    }

    /// Total number of rows across all sheets or ranges.
    pub fn row_count(&self) -> usize {
        match self {
            SheetPayload::Grid(grid) => grid.rows().count(),
            SheetPayload::Ranges(ranges) => ranges.rows().count(),
        }
    }

    /// Total number of cells across all rows.
    pub fn cell_count(&self) -> usize {
        match self {
            SheetPayload::Grid(grid) => grid.rows().map(|row| row.cells.len()).sum(),
            SheetPayload::Ranges(ranges) => ranges.rows().map(|row| row.len()).sum(),
        }
    }

    /// Number of sheets (grid form) or ranges (range form).
    pub fn sheet_count(&self) -> usize {
        match self {
            SheetPayload::Grid(grid) => grid.sheets.len(),
            SheetPayload::Ranges(ranges) => ranges.ranges.len(),
        }
    }
}

/// A spreadsheet in grid form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Spreadsheet {
    /// Spreadsheet title (`properties.title`)
    pub title: Option<String>,

    /// Sheets in tab order
    pub sheets: Vec<Sheet>,
}

impl Spreadsheet {
    /// Create a new empty spreadsheet.
    pub fn new() -> Self {
        Self::default()
    }

    fn from_json(value: &Value, sheets: &[Value]) -> Self {
        let mut spreadsheet = Spreadsheet {
            title: value
                .get("properties")
                .and_then(|p| string_field(p, "title")),
            sheets: Vec::with_capacity(sheets.len()),
        };
        for (index, sheet) in sheets.iter().enumerate() {
            match Sheet::from_json(sheet, index) {
                Ok(sheet) => spreadsheet.sheets.push(sheet),
                Err(err) => log::debug!("skipping sheet: {}", err),
            }
        }
        spreadsheet
    }

    /// Add a sheet.
    pub fn add_sheet(&mut self, sheet: Sheet) {
        self.sheets.push(sheet);
    }

    /// Iterate over every row of every sheet and data block, in order.
    pub fn rows(&self) -> impl Iterator<Item = &GridRow> {
        self.sheets
            .iter()
            .flat_map(|sheet| &sheet.data)
            .flat_map(|data| &data.rows)
    }
}

/// One sheet (tab) of a spreadsheet.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Sheet {
    /// Sheet title (`properties.title`)
    pub title: Option<String>,

    /// Grid data blocks, one per requested range
    pub data: Vec<GridData>,
}

impl Sheet {
    /// Create a sheet holding a single data block with `rows`.
    pub fn with_rows(rows: Vec<GridRow>) -> Self {
        Self {
            title: None,
            data: vec![GridData { rows }],
        }
    }

    fn from_json(sheet: &Value, index: usize) -> Result<Self> {
        let path = format!("sheets[{}]", index);
        if !sheet.is_object() {
            return Err(Error::malformed_element(&path, format!("found {}", kind(sheet))));
        }

        // Sheets without grid data are legal and contribute no rows.
        let data = match sheet.get("data").and_then(Value::as_array) {
            Some(blocks) => blocks
                .iter()
                .enumerate()
                .filter_map(|(i, block)| {
                    GridData::from_json(block, &format!("{}.data[{}]", path, i))
                        .map_err(|err| log::debug!("skipping data block: {}", err))
                        .ok()
                })
                .collect(),
            None => Vec::new(),
        };

        Ok(Sheet {
            title: sheet
                .get("properties")
                .and_then(|p| string_field(p, "title")),
            data,
        })
    }
}

/// A block of grid data.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GridData {
    /// Rows in the block
    pub rows: Vec<GridRow>,
}

impl GridData {
    fn from_json(block: &Value, path: &str) -> Result<Self> {
        if !block.is_object() {
            return Err(Error::malformed_element(path, format!("found {}", kind(block))));
        }

        // The API omits rowData for an empty grid.
        let Some(rows) = block.get("rowData").and_then(Value::as_array) else {
            return Ok(GridData::default());
        };

        let mut data = GridData {
            rows: Vec::with_capacity(rows.len()),
        };
        for (index, row) in rows.iter().enumerate() {
            match GridRow::from_json(row) {
                Some(row) => data.rows.push(row),
                None => log::debug!(
                    "skipping row at {}.rowData[{}]: found {}",
                    path,
                    index,
                    kind(row)
                ),
            }
        }
        Ok(data)
    }
}

/// A row of grid cells.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GridRow {
    /// Cells in column order
    pub cells: Vec<GridCell>,
}

impl GridRow {
    /// Create a row from text values.
    pub fn from_strings<S: Into<String>>(values: impl IntoIterator<Item = S>) -> Self {
        Self {
            cells: values.into_iter().map(GridCell::text).collect(),
        }
    }

    fn from_json(row: &Value) -> Option<Self> {
        if !row.is_object() {
            return None;
        }
        // Rows of empty cells come back without a values array.
        let cells = row
            .get("values")
            .and_then(Value::as_array)
            .map(|cells| cells.iter().map(GridCell::from_json).collect())
            .unwrap_or_default();
        Some(GridRow { cells })
    }

    /// Get plain text representation (tab-separated).
    pub fn plain_text(&self) -> String {
        self.cells
            .iter()
            .map(GridCell::as_str)
            .collect::<Vec<_>>()
            .join("\t")
    }
}

/// A grid cell.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridCell {
    /// Display-ready value of the cell
    pub formatted_value: Option<String>,
}

impl GridCell {
    /// Create a cell with a formatted value.
    pub fn text(value: impl Into<String>) -> Self {
        Self {
            formatted_value: Some(value.into()),
        }
    }

    /// Create a cell with no value.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Cells of any shape are kept so column positions never shift.
    fn from_json(cell: &Value) -> Self {
        let formatted_value = cell
            .get("formattedValue")
            .filter(|value| !value.is_null())
            .map(|value| cell_text(value).into_owned());
        Self { formatted_value }
    }

    /// Cell text; a missing value is the empty string.
    pub fn as_str(&self) -> &str {
        self.formatted_value.as_deref().unwrap_or("")
    }
}

/// A spreadsheet in range form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ValueRanges {
    /// Ranges in request order
    pub ranges: Vec<ValueRange>,
}

impl ValueRanges {
    /// Create a new empty range list.
    pub fn new() -> Self {
        Self::default()
    }

    fn from_json(ranges: &[Value]) -> Self {
        let mut out = ValueRanges {
            ranges: Vec::with_capacity(ranges.len()),
        };
        for (index, range) in ranges.iter().enumerate() {
            match ValueRange::from_json(range, index) {
                Ok(range) => out.ranges.push(range),
                Err(err) => log::debug!("skipping value range: {}", err),
            }
        }
        out
    }

    /// Add a range.
    pub fn add_range(&mut self, range: ValueRange) {
        self.ranges.push(range);
    }

    /// Iterate over every row of every range that has values, in order.
    pub fn rows(&self) -> impl Iterator<Item = &Vec<Value>> {
        self.ranges
            .iter()
            .filter_map(|range| range.values.as_ref())
            .flatten()
    }
}

/// One range of raw cell values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ValueRange {
    /// A1 notation of the range, e.g. `Sheet1!A1:C10`
    pub range: Option<String>,

    /// Rows of raw values; `None` when the range holds no data
    pub values: Option<Vec<Vec<Value>>>,
}

impl ValueRange {
    /// Create a range from rows of values.
    pub fn with_values(values: Vec<Vec<Value>>) -> Self {
        Self {
            range: None,
            values: Some(values),
        }
    }

    fn from_json(range: &Value, index: usize) -> Result<Self> {
        let path = format!("valueRanges[{}]", index);
        if !range.is_object() {
            return Err(Error::malformed_element(&path, format!("found {}", kind(range))));
        }

        let values = range.get("values").and_then(Value::as_array).map(|rows| {
            rows.iter()
                .enumerate()
                .filter_map(|(i, row)| match row.as_array() {
                    Some(cells) => Some(cells.clone()),
                    None => {
                        log::debug!(
                            "skipping row at {}.values[{}]: found {}",
                            path,
                            i,
                            kind(row)
                        );
                        None
                    }
                })
                .collect()
        });

        Ok(ValueRange {
            range: string_field(range, "range"),
            values,
        })
    }

    /// Get plain text representation (tab-separated rows, newline-terminated).
    pub fn plain_text(&self) -> String {
        let mut text = String::new();
        for row in self.values.iter().flatten() {
            let cells: Vec<_> = row.iter().map(cell_text).collect();
            text.push_str(&cells.join("\t"));
            text.push('\n');
        }
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_grid_from_json() {
        let payload = json!({
            "properties": {"title": "Budget"},
            "sheets": [{
                "properties": {"title": "Q1"},
                "data": [{"rowData": [
                    {"values": [{"formattedValue": "a"}, {"formattedValue": "b"}]},
                    {"values": [{"formattedValue": "c"}]}
                ]}]
            }]
        });

        let SheetPayload::Grid(grid) = SheetPayload::from_json(&payload).unwrap() else {
            panic!("expected grid form");
        };
        assert_eq!(grid.title.as_deref(), Some("Budget"));
        assert_eq!(grid.sheets[0].title.as_deref(), Some("Q1"));

        let rows: Vec<_> = grid.rows().collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].plain_text(), "a\tb");
        assert_eq!(rows[1].plain_text(), "c");
    }

    #[test]
    fn test_grid_keeps_cells_without_values() {
        let payload = json!({"sheets": [{"data": [{"rowData": [
            {"values": [{"formattedValue": "x"}, {}, {"effectiveValue": {"numberValue": 3}}]},
            {}
        ]}]}]});

        let payload = SheetPayload::from_json(&payload).unwrap();
        assert_eq!(payload.row_count(), 2);
        assert_eq!(payload.cell_count(), 3);

        let SheetPayload::Grid(grid) = payload else {
            panic!("expected grid form");
        };
        let first = grid.rows().next().unwrap();
        assert_eq!(first.cells[1], GridCell::empty());
        assert_eq!(first.plain_text(), "x\t\t");
    }

    #[test]
    fn test_sheet_without_data() {
        let payload = json!({"sheets": [{"properties": {"title": "Empty"}}]});
        let payload = SheetPayload::from_json(&payload).unwrap();
        assert_eq!(payload.sheet_count(), 1);
        assert_eq!(payload.row_count(), 0);
    }

    #[test]
    fn test_ranges_from_json() {
        let payload = json!({"valueRanges": [
            {"range": "Sheet1!A1:B1", "values": [["x", 2]]},
            {"range": "Sheet1!C1:C1"},
            {"values": [["y"], "bad row", [true]]}
        ]});

        let SheetPayload::Ranges(ranges) = SheetPayload::from_json(&payload).unwrap() else {
            panic!("expected range form");
        };
        assert_eq!(ranges.ranges.len(), 3);
        assert_eq!(ranges.ranges[0].range.as_deref(), Some("Sheet1!A1:B1"));
        assert!(ranges.ranges[1].values.is_none());
        assert_eq!(ranges.rows().count(), 3);
        assert_eq!(ranges.ranges[0].plain_text(), "x\t2\n");
        assert_eq!(ranges.ranges[1].plain_text(), "");
    }

    #[test]
    fn test_single_range_response() {
        let payload = json!({"range": "Sheet1!A1:B2", "majorDimension": "ROWS", "values": [["1", "2"]]});
        let payload = SheetPayload::from_json(&payload).unwrap();
        assert!(matches!(payload, SheetPayload::Ranges(_)));
        assert_eq!(payload.cell_count(), 2);
    }

    #[test]
    fn test_value_ranges_take_precedence() {
        let payload = json!({"sheets": [], "valueRanges": [{"values": [["v"]]}]});
        assert!(matches!(
            SheetPayload::from_json(&payload).unwrap(),
            SheetPayload::Ranges(_)
        ));
    }

    #[test]
    fn test_missing_and_non_object_payloads() {
        for payload in [json!({}), Value::Null, json!("sheet"), json!(42), json!([1, 2])] {
            assert!(SheetPayload::from_json(&payload)
                .unwrap_err()
                .is_missing_payload());
        }
    }
}
