use dbdo_types::RawValue;

/// One value of a result row, as reported by the database.
#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    /// Declared column type, or the storage class when there is none
    pub type_name: String,
    pub value: RawValue,
}

pub type Row = Vec<Cell>;

/// Rows produced by a statement, with a stable column order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ResultSet {
    pub columns: Vec<String>,
    pub rows: Vec<Row>,
}

impl ResultSet {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Pair every cell with its column name, row by row.
    pub fn labeled_rows(&self) -> impl Iterator<Item = Vec<(&str, &Cell)>> + '_ {
        self.rows.iter().map(move |row| {
            self.columns
                .iter()
                .map(String::as_str)
                .zip(row.iter())
                .collect()
        })
    }
}
