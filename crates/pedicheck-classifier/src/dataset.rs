use serde_json::Value;

use crate::error::ClassifierError;

/// One table cell as read from the source.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Number(f64),
    Text(String),
    Empty,
}

impl Cell {
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Cell::Number(n) if n.is_finite() => Some(*n),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Cell::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl From<f64> for Cell {
    fn from(n: f64) -> Self {
        Cell::Number(n)
    }
}

impl From<&str> for Cell {
    fn from(s: &str) -> Self {
        Cell::Text(s.to_string())
    }
}

/// Historical cases in tabular form: named columns, rows of cells.
///
/// Loading is the caller's business; the classifier only checks shape and
/// types when it trains.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    columns: Vec<String>,
    rows: Vec<Vec<Cell>>,
}

impl Dataset {
    pub fn new<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            columns: columns.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    pub fn with_row(mut self, row: Vec<Cell>) -> Result<Self, ClassifierError> {
        if row.len() != self.columns.len() {
            return Err(ClassifierError::DatasetSchema(format!(
                "row {} has {} cells, expected {}",
                self.rows.len(),
                row.len(),
                self.columns.len()
            )));
        }
        self.rows.push(row);
        Ok(self)
    }

    /// Read a JSON array of flat objects, one object per case. Columns are
    /// the union of keys in first-seen order; absent keys become
    /// [`Cell::Empty`].
    pub fn from_json_records(json: &str) -> Result<Self, ClassifierError> {
        let value: Value = serde_json::from_str(json)?;
        let records = value.as_array().ok_or_else(|| {
            ClassifierError::DatasetSchema("expected a JSON array of records".to_string())
        })?;

        let mut columns: Vec<String> = Vec::new();
        for (i, record) in records.iter().enumerate() {
            let object = record.as_object().ok_or_else(|| {
                ClassifierError::DatasetSchema(format!("record {i} is not an object"))
            })?;
            for key in object.keys() {
                if !columns.contains(key) {
                    columns.push(key.clone());
                }
            }
        }

        let mut rows = Vec::with_capacity(records.len());
        for (i, record) in records.iter().enumerate() {
            let mut row = Vec::with_capacity(columns.len());
            for column in &columns {
                let cell = match record.get(column) {
                    None | Some(Value::Null) => Cell::Empty,
                    Some(Value::Number(n)) => n.as_f64().map(Cell::Number).unwrap_or(Cell::Empty),
                    Some(Value::String(s)) => Cell::Text(s.clone()),
                    Some(Value::Bool(b)) => Cell::Text(b.to_string()),
                    Some(_) => {
                        return Err(ClassifierError::DatasetSchema(format!(
                            "record {i} column '{column}' holds a nested value"
                        )));
                    }
                };
                row.push(cell);
            }
            rows.push(row);
        }

        Ok(Self { columns, rows })
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }
}
