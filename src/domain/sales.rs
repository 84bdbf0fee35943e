// Sales domain model
use serde::Serialize;

/// Header columns every accepted dataset must carry.
pub const REQUIRED_COLUMNS: [&str; 4] = ["date", "region", "product", "sales"];

/// One CSV row. `sales` is `None` when the cell was blank.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SalesRecord {
    pub date: String,
    pub region: String,
    pub product: String,
    pub sales: Option<f64>,
}

impl SalesRecord {
    pub fn new(
        date: impl Into<String>,
        region: impl Into<String>,
        product: impl Into<String>,
        sales: impl Into<Option<f64>>,
    ) -> Self {
        Self {
            date: date.into(),
            region: region.into(),
            product: product.into(),
            sales: sales.into(),
        }
    }
}

/// Parsed sales data in file order. `columns` is the header as it appeared,
/// including columns the dashboard ignores.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SalesTable {
    columns: Vec<String>,
    records: Vec<SalesRecord>,
}

impl SalesTable {
    pub fn new(columns: Vec<String>, records: Vec<SalesRecord>) -> Self {
        Self { columns, records }
    }

    #[cfg(test)]
    pub fn from_records(records: Vec<SalesRecord>) -> Self {
        let columns = REQUIRED_COLUMNS.iter().map(|c| c.to_string()).collect();
        Self { columns, records }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn records(&self) -> &[SalesRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    #[cfg(test)]
    pub fn has_column(&self, name: &str) -> bool {
        self.columns.iter().any(|c| c == name)
    }

    /// Rows matching `predicate`, in file order.
    pub fn filter<P>(&self, predicate: P) -> Vec<&SalesRecord>
    where
        P: Fn(&SalesRecord) -> bool,
    {
        self.records.iter().filter(|r| predicate(r)).collect()
    }
}
