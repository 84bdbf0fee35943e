// Mapper to convert chart descriptions to Plotly figure JSON
use crate::domain::chart::{ChartDescription, ChartKind, ChartSet, Series};
use serde_json::{json, Value};

pub fn chart_set_to_plotly(charts: &ChartSet) -> Value {
    json!({
        "bar": chart_to_plotly(&charts.bar),
        "pie": chart_to_plotly(&charts.pie),
        "line": chart_to_plotly(&charts.line),
    })
}

pub fn chart_to_plotly(chart: &ChartDescription) -> Value {
    let data: Vec<Value> = match chart.kind {
        ChartKind::Bar => chart.series.iter().map(bar_trace).collect(),
        ChartKind::Pie => chart
            .series
            .iter()
            .map(|s| pie_trace(s, &chart.colorway))
            .collect(),
        ChartKind::Line => chart
            .series
            .iter()
            .map(|s| line_trace(s, chart.line_width))
            .collect(),
    };

    json!({
        "data": data,
        "layout": layout(chart),
    })
}

fn bar_trace(series: &Series) -> Value {
    json!({
        "type": "bar",
        "name": series.name,
        "legendgroup": series.name,
        "x": series.x,
        "y": series.y,
        "marker": { "color": series.color },
    })
}

fn pie_trace(series: &Series, colorway: &[String]) -> Value {
    let colors: Vec<&String> = colorway.iter().cycle().take(series.x.len()).collect();
    json!({
        "type": "pie",
        "labels": series.x,
        "values": series.y,
        "marker": { "colors": colors },
    })
}

fn line_trace(series: &Series, width: Option<f64>) -> Value {
    json!({
        "type": "scatter",
        "mode": "lines",
        "name": series.name,
        "x": series.x,
        "y": series.y,
        "line": { "color": series.color, "width": width },
    })
}

fn layout(chart: &ChartDescription) -> Value {
    let theme = &chart.theme;
    let mut layout = json!({
        "title": { "text": chart.title, "font": { "color": theme.title_color } },
        "plot_bgcolor": theme.plot_background,
        "paper_bgcolor": theme.paper_background,
        "font": { "color": theme.font_color },
        "margin": {
            "l": theme.margin.left,
            "r": theme.margin.right,
            "t": theme.margin.top,
            "b": theme.margin.bottom,
        },
    });

    if let Some(label) = &chart.x_label {
        layout["xaxis"] = json!({ "title": { "text": label } });
    }
    if let Some(label) = &chart.y_label {
        layout["yaxis"] = json!({ "title": { "text": label } });
    }
    if chart.kind == ChartKind::Bar {
        layout["barmode"] = json!("relative");
        layout["legend"] = json!({ "title": { "text": "product" } });
    }
    if !chart.colorway.is_empty() {
        layout["colorway"] = json!(chart.colorway);
    }

    layout
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::chart_renderer::render;
    use crate::domain::chart::NO_DATA_AVAILABLE;
    use crate::domain::filters::FilterSelection;
    use crate::domain::sales::{SalesRecord, SalesTable};

    #[test]
    fn test_placeholder_has_no_traces_but_keeps_theme() {
        let figures = chart_set_to_plotly(&ChartSet::placeholders(NO_DATA_AVAILABLE));

        for key in ["bar", "pie", "line"] {
            assert_eq!(figures[key]["data"], json!([]));
            assert_eq!(figures[key]["layout"]["title"]["text"], NO_DATA_AVAILABLE);
            assert_eq!(figures[key]["layout"]["paper_bgcolor"], "#0f3460");
            assert_eq!(figures[key]["layout"]["margin"]["t"], 50);
        }
    }

    #[test]
    fn test_rendered_figures() {
        let table = SalesTable::from_records(vec![
            SalesRecord::new("2024-01-01", "East", "Widget", 100.0),
            SalesRecord::new("2024-01-01", "East", "Gadget", 60.0),
            SalesRecord::new("2024-01-02", "East", "Widget", 150.0),
        ]);
        let charts = render(&FilterSelection::new("East", "2024-01-01", "Widget"), &table);

        let bar = chart_to_plotly(&charts.bar);
        assert_eq!(bar["data"].as_array().unwrap().len(), 2);
        assert_eq!(bar["data"][1]["name"], "Gadget");
        assert_eq!(bar["data"][1]["marker"]["color"], "#EF553B");
        assert_eq!(bar["layout"]["yaxis"]["title"]["text"], "Sales ($)");
        assert_eq!(bar["layout"]["xaxis"]["title"]["text"], "Date");

        let pie = chart_to_plotly(&charts.pie);
        assert_eq!(pie["data"][0]["labels"], json!(["Widget", "Gadget"]));
        assert_eq!(pie["data"][0]["values"], json!([100.0, 60.0]));
        assert_eq!(pie["data"][0]["marker"]["colors"], json!(["#636EFA", "#EF553B"]));

        let line = chart_to_plotly(&charts.line);
        assert_eq!(line["data"][0]["y"], json!([100.0, 150.0]));
        assert_eq!(line["data"][0]["line"]["color"], "#00ff85");
        assert_eq!(line["data"][0]["line"]["width"], 2.0);
        assert_eq!(line["layout"]["title"]["font"]["color"], "#00ff85");
    }
}
