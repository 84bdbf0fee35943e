// Chart description domain models

pub const NO_DATA_AVAILABLE: &str = "No Data Available";
pub const NO_DATA_FOR_SELECTION: &str = "No Data for Selection";

/// Plotly's default qualitative sequence.
pub const QUALITATIVE_PALETTE: [&str; 10] = [
    "#636EFA", "#EF553B", "#00CC96", "#AB63FA", "#FFA15A", "#19D3F3", "#FF6692", "#B6E880",
    "#FF97FF", "#FECB52",
];

pub const ACCENT_COLOR: &str = "#00ff85";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    Bar,
    Pie,
    Line,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub name: String,
    pub x: Vec<String>,
    pub y: Vec<f64>,
    pub color: Option<String>,
}

impl Series {
    pub fn new(name: String, x: Vec<String>, y: Vec<f64>, color: Option<String>) -> Self {
        Self { name, x, y, color }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Margin {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub plot_background: &'static str,
    pub paper_background: &'static str,
    pub font_color: &'static str,
    pub title_color: &'static str,
    pub margin: Margin,
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            plot_background: "#0f3460",
            paper_background: "#0f3460",
            font_color: "#e0e0e0",
            title_color: ACCENT_COLOR,
            margin: Margin {
                left: 20,
                right: 20,
                top: 50,
                bottom: 20,
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartDescription {
    pub kind: ChartKind,
    pub title: String,
    pub series: Vec<Series>,
    pub x_label: Option<String>,
    pub y_label: Option<String>,
    pub colorway: Vec<String>,
    pub line_width: Option<f64>,
    pub theme: Theme,
}

impl ChartDescription {
    pub fn new(kind: ChartKind, title: String, series: Vec<Series>) -> Self {
        Self {
            kind,
            title,
            series,
            x_label: None,
            y_label: None,
            colorway: Vec::new(),
            line_width: None,
            theme: Theme::dark(),
        }
    }

    /// Titled chart with no data.
    pub fn placeholder(kind: ChartKind, title: &str) -> Self {
        Self::new(kind, title.to_string(), Vec::new())
    }

    pub fn with_axis_labels(mut self, x_label: &str, y_label: &str) -> Self {
        self.x_label = Some(x_label.to_string());
        self.y_label = Some(y_label.to_string());
        self
    }

    pub fn with_colorway(mut self, colors: &[&str]) -> Self {
        self.colorway = colors.iter().map(|c| c.to_string()).collect();
        self
    }

    pub fn with_line_width(mut self, width: f64) -> Self {
        self.line_width = Some(width);
        self
    }

    pub fn is_placeholder(&self) -> bool {
        self.series.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartSet {
    pub bar: ChartDescription,
    pub pie: ChartDescription,
    pub line: ChartDescription,
}

impl ChartSet {
    pub fn placeholders(title: &str) -> Self {
        Self {
            bar: ChartDescription::placeholder(ChartKind::Bar, title),
            pie: ChartDescription::placeholder(ChartKind::Pie, title),
            line: ChartDescription::placeholder(ChartKind::Line, title),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &ChartDescription> {
        [&self.bar, &self.pie, &self.line].into_iter()
    }
}
