//! Column model for the tabular data browser.
//!
//! A table is described by an ordered list of [`ColumnDescriptor`]s. Each
//! descriptor names a field of the row type through the row's own key enum
//! ([`Row::Key`]), so a column can only ever point at a field that exists.
//! Rendering is a pure function of `(columns, rows)`: see [`render_grid`].

use std::fmt;

use chrono::NaiveDate;

/// A record that can be shown in a table.
pub trait Row {
    /// Identifies one readable field of the row.
    type Key: Copy + Eq + fmt::Debug + 'static;

    /// Reads the raw value of a field.
    fn value(&self, key: Self::Key) -> CellValue;
}

/// Key enum of a [`Row`], tied back to the row it reads from.
///
/// Lets `ColumnDescriptor::new(header, key)` infer the row type from the key
/// alone, so custom cell closures need no annotations.
pub trait Field: Copy + Eq + fmt::Debug + 'static {
    type Row: Row<Key = Self>;
}

/// Raw value read from a row field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CellValue {
    Text(String),
    Integer(i64),
    Date(NaiveDate),
    Empty,
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.write_str(text),
            Self::Integer(value) => write!(f, "{value}"),
            Self::Date(date) => write!(f, "{}", date.format("%Y-%m-%d")),
            Self::Empty => f.write_str("—"),
        }
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<i64> for CellValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<NaiveDate> for CellValue {
    fn from(value: NaiveDate) -> Self {
        Self::Date(value)
    }
}

impl<V: Into<Self>> From<Option<V>> for CellValue {
    fn from(value: Option<V>) -> Self {
        value.map_or(Self::Empty, Into::into)
    }
}

/// Visual emphasis for badge cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tone {
    #[default]
    Neutral,
    Positive,
    Warning,
    Critical,
}

/// Rendered content of a single cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cell {
    /// Plain rendering of a raw field value.
    Value(CellValue),
    /// Short status label drawn with a colored tone.
    Badge { label: String, tone: Tone },
    /// Identifier-like text drawn in a monospace font.
    Monospace(String),
}

impl Cell {
    /// Text content of the cell, regardless of styling.
    pub fn text(&self) -> String {
        match self {
            Self::Value(value) => value.to_string(),
            Self::Badge { label, .. } => label.clone(),
            Self::Monospace(text) => text.clone(),
        }
    }
}

/// Custom cell renderer; receives the full row.
pub type CellRenderer<T> = Box<dyn Fn(&T) -> Cell + Send + Sync>;

/// Describes how one field of a row is labeled and rendered.
pub struct ColumnDescriptor<T: Row> {
    header: String,
    accessor_key: T::Key,
    cell: Option<CellRenderer<T>>,
}

impl<T: Row> ColumnDescriptor<T> {
    /// A column that renders the raw value at `accessor_key`.
    pub fn new<K>(header: impl Into<String>, accessor_key: K) -> Self
    where
        K: Field<Row = T>,
        T: Row<Key = K>,
    {
        Self {
            header: header.into(),
            accessor_key,
            cell: None,
        }
    }

    /// Replaces the raw value with a custom rendering of the full row.
    pub fn with_cell(mut self, render: impl Fn(&T) -> Cell + Send + Sync + 'static) -> Self {
        self.cell = Some(Box::new(render));
        self
    }

    pub fn header(&self) -> &str {
        &self.header
    }

    pub fn accessor_key(&self) -> T::Key {
        self.accessor_key
    }

    pub fn has_custom_cell(&self) -> bool {
        self.cell.is_some()
    }

    /// Renders this column's cell for `row`.
    pub fn render(&self, row: &T) -> Cell {
        match &self.cell {
            Some(render) => render(row),
            None => Cell::Value(row.value(self.accessor_key)),
        }
    }
}

impl<T: Row> fmt::Debug for ColumnDescriptor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColumnDescriptor")
            .field("header", &self.header)
            .field("accessor_key", &self.accessor_key)
            .field("cell", &self.cell.is_some())
            .finish()
    }
}

/// Headers plus one rendered cell per column for every row.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Grid {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<Cell>>,
}

impl Grid {
    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Renders `rows` through `columns`, preserving the order of both.
pub fn render_grid<T: Row>(columns: &[ColumnDescriptor<T>], rows: &[T]) -> Grid {
    let headers = columns
        .iter()
        .map(|column| column.header().to_owned())
        .collect();
    let rows = rows
        .iter()
        .map(|row| columns.iter().map(|column| column.render(row)).collect())
        .collect();

    Grid { headers, rows }
}
