// Dropdown options and filter selection
use super::sales::{SalesRecord, SalesTable};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DropdownOption {
    pub label: String,
    pub value: String,
}

impl DropdownOption {
    pub fn new(value: &str) -> Self {
        Self {
            label: value.to_string(),
            value: value.to_string(),
        }
    }
}

/// Option lists for the three dropdowns plus the value each one starts on.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterOptions {
    pub region_options: Vec<DropdownOption>,
    pub region_default: Option<String>,
    pub date_options: Vec<DropdownOption>,
    pub date_default: Option<String>,
    pub product_options: Vec<DropdownOption>,
    pub product_default: Option<String>,
}

impl FilterOptions {
    /// Distinct values per field, sorted ascending; the default is the first one.
    pub fn derive(table: &SalesTable) -> Self {
        let region_options = distinct_sorted(table, |r| &r.region);
        let date_options = distinct_sorted(table, |r| &r.date);
        let product_options = distinct_sorted(table, |r| &r.product);

        Self {
            region_default: first_value(&region_options),
            date_default: first_value(&date_options),
            product_default: first_value(&product_options),
            region_options,
            date_options,
            product_options,
        }
    }
}

fn distinct_sorted<F>(table: &SalesTable, field: F) -> Vec<DropdownOption>
where
    F: Fn(&SalesRecord) -> &String,
{
    table
        .records()
        .iter()
        .map(|r| field(r).as_str())
        .collect::<BTreeSet<&str>>()
        .into_iter()
        .map(DropdownOption::new)
        .collect()
}

fn first_value(options: &[DropdownOption]) -> Option<String> {
    options.first().map(|o| o.value.clone())
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSelection {
    pub region: Option<String>,
    pub date: Option<String>,
    pub product: Option<String>,
}

impl FilterSelection {
    #[cfg(test)]
    pub fn new(
        region: impl Into<String>,
        date: impl Into<String>,
        product: impl Into<String>,
    ) -> Self {
        Self {
            region: Some(region.into()),
            date: Some(date.into()),
            product: Some(product.into()),
        }
    }

    pub fn from_defaults(options: &FilterOptions) -> Self {
        Self {
            region: options.region_default.clone(),
            date: options.date_default.clone(),
            product: options.product_default.clone(),
        }
    }

    /// A cleared dropdown arrives as an empty query value.
    pub fn normalized(self) -> Self {
        let keep = |v: Option<String>| v.filter(|s| !s.is_empty());
        Self {
            region: keep(self.region),
            date: keep(self.date),
            product: keep(self.product),
        }
    }

    /// All three values, or `None` if any is missing.
    pub fn complete(&self) -> Option<(&str, &str, &str)> {
        match (&self.region, &self.date, &self.product) {
            (Some(region), Some(date), Some(product)) => {
                Some((region.as_str(), date.as_str(), product.as_str()))
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(options: &[DropdownOption]) -> Vec<&str> {
        options.iter().map(|o| o.value.as_str()).collect()
    }

    #[test]
    fn test_derive_sorts_and_picks_first() {
        let table = SalesTable::from_records(vec![
            SalesRecord::new("2024-01-02", "West", "Widget", 10.0),
            SalesRecord::new("2024-01-01", "East", "Gadget", 20.0),
            SalesRecord::new("2024-01-02", "West", "Gadget", 30.0),
        ]);

        let options = FilterOptions::derive(&table);

        assert_eq!(values(&options.region_options), vec!["East", "West"]);
        assert_eq!(options.region_default.as_deref(), Some("East"));
        assert_eq!(values(&options.date_options), vec!["2024-01-01", "2024-01-02"]);
        assert_eq!(options.date_default.as_deref(), Some("2024-01-01"));
        assert_eq!(values(&options.product_options), vec!["Gadget", "Widget"]);
        assert_eq!(options.product_default.as_deref(), Some("Gadget"));
        assert!(options.region_options.iter().all(|o| o.label == o.value));
    }

    #[test]
    fn test_derive_empty_table() {
        let options = FilterOptions::derive(&SalesTable::default());

        assert_eq!(options, FilterOptions::default());
        assert_eq!(FilterSelection::from_defaults(&options).complete(), None);
    }

    #[test]
    fn test_sorting_is_lexicographic() {
        let table = SalesTable::from_records(vec![
            SalesRecord::new("d", "north", "p", 1.0),
            SalesRecord::new("d", "North", "p", 1.0),
            SalesRecord::new("d", "East", "p", 1.0),
        ]);

        let options = FilterOptions::derive(&table);
        assert_eq!(values(&options.region_options), vec!["East", "North", "north"]);
    }

    #[test]
    fn test_normalized_drops_empty_values() {
        let selection = FilterSelection {
            region: Some("East".to_string()),
            date: Some(String::new()),
            product: None,
        }
        .normalized();

        assert_eq!(selection.region.as_deref(), Some("East"));
        assert_eq!(selection.date, None);
        assert_eq!(selection.complete(), None);
    }
}
