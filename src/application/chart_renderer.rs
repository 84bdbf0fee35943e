// Chart renderer - Filters the table and describes the bar, pie and line charts
use crate::domain::chart::{
    ChartDescription, ChartKind, ChartSet, Series, ACCENT_COLOR, NO_DATA_AVAILABLE,
    NO_DATA_FOR_SELECTION, QUALITATIVE_PALETTE,
};
use crate::domain::filters::FilterSelection;
use crate::domain::sales::{SalesRecord, SalesTable};

const DATE_LABEL: &str = "Date";
const SALES_LABEL: &str = "Sales ($)";
const LINE_WIDTH: f64 = 2.0;

/// Build the three charts for a selection.
///
/// Bar and pie use the rows matching region and date. The line chart uses the
/// rows matching region and product across every date, so the trend ignores
/// the date dropdown.
pub fn render(selection: &FilterSelection, table: &SalesTable) -> ChartSet {
    let Some((region, date, product)) = selection.complete() else {
        return ChartSet::placeholders(NO_DATA_AVAILABLE);
    };
    if table.is_empty() {
        return ChartSet::placeholders(NO_DATA_AVAILABLE);
    }

    let point_filtered = table.filter(|r| r.region == region && r.date == date);
    if point_filtered.is_empty() {
        return ChartSet::placeholders(NO_DATA_FOR_SELECTION);
    }

    let line_filtered = table.filter(|r| r.region == region && r.product == product);

    ChartSet {
        bar: bar_chart(region, date, &point_filtered),
        pie: pie_chart(region, date, &point_filtered),
        line: line_chart(region, product, &line_filtered),
    }
}

fn bar_chart(region: &str, date: &str, rows: &[&SalesRecord]) -> ChartDescription {
    let series = group_by_product(rows)
        .into_iter()
        .enumerate()
        .map(|(i, (product, group))| {
            let (x, y) = points(&group);
            Series::new(product.to_string(), x, y, Some(palette_color(i)))
        })
        .collect();

    ChartDescription::new(ChartKind::Bar, format!("Sales in {} on {}", region, date), series)
        .with_axis_labels(DATE_LABEL, SALES_LABEL)
        .with_colorway(&QUALITATIVE_PALETTE)
}

fn pie_chart(region: &str, date: &str, rows: &[&SalesRecord]) -> ChartDescription {
    let (labels, values): (Vec<String>, Vec<f64>) = group_by_product(rows)
        .into_iter()
        .map(|(product, group)| (product.to_string(), group.iter().filter_map(|r| r.sales).sum::<f64>()))
        .unzip();

    let slices = Series::new("product".to_string(), labels, values, None);

    ChartDescription::new(
        ChartKind::Pie,
        format!("Sales Distribution in {} on {}", region, date),
        vec![slices],
    )
    .with_colorway(&QUALITATIVE_PALETTE)
}

fn line_chart(region: &str, product: &str, rows: &[&SalesRecord]) -> ChartDescription {
    let (x, y) = points(rows);
    let trend = Series::new(product.to_string(), x, y, Some(ACCENT_COLOR.to_string()));

    ChartDescription::new(
        ChartKind::Line,
        format!("Sales Trend for {} in {}", product, region),
        vec![trend],
    )
    .with_axis_labels(DATE_LABEL, SALES_LABEL)
    .with_line_width(LINE_WIDTH)
}

/// Rows grouped per product, groups in order of first appearance.
fn group_by_product<'a>(rows: &[&'a SalesRecord]) -> Vec<(&'a str, Vec<&'a SalesRecord>)> {
    let mut groups: Vec<(&str, Vec<&SalesRecord>)> = Vec::new();
    for &row in rows {
        match groups.iter_mut().find(|(p, _)| *p == row.product) {
            Some((_, group)) => group.push(row),
            None => groups.push((row.product.as_str(), vec![row])),
        }
    }
    groups
}

/// (date, sales) pairs, skipping rows whose sales value is missing.
fn points(rows: &[&SalesRecord]) -> (Vec<String>, Vec<f64>) {
    rows.iter()
        .filter_map(|r| r.sales.map(|sales| (r.date.clone(), sales)))
        .unzip()
}

fn palette_color(index: usize) -> String {
    QUALITATIVE_PALETTE[index % QUALITATIVE_PALETTE.len()].to_string()
}
