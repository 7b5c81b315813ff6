//! Plotly-backed chart widgets.
//!
//! Widgets are stateless: they get a normalized series, a palette and a layout,
//! and redraw whenever any of those change. Building the plot description is
//! kept separate from drawing it so it can be tested without a browser.

use crm_common::{ChartSeriesPoint, Palette};
use plotly::common::{Line, LineShape, Marker, Mode, Orientation as TraceOrientation};
use plotly::{Bar, Scatter};
use serde::Serialize;
use serde_json::{json, Value};
use wasm_bindgen::prelude::*;
use web_sys::HtmlElement;
use yew::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(catch, js_namespace = Plotly, js_name = newPlot)]
    fn new_plot(root: &HtmlElement, data: JsValue, layout: JsValue, config: JsValue) -> Result<JsValue, JsValue>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    #[default]
    Vertical,
    Horizontal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    Bar,
    Line,
    Pie,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartLayout {
    pub height: u32,
    pub orientation: Orientation,
    /// Counts only: suppress fractional ticks on the value axis.
    pub integer_ticks: bool,
}

impl Default for ChartLayout {
    fn default() -> Self {
        Self {
            height: 200,
            orientation: Orientation::Vertical,
            integer_ticks: false,
        }
    }
}

impl ChartLayout {
    pub fn integer_ticks(mut self) -> Self {
        self.integer_ticks = true;
        self
    }

    pub fn horizontal(mut self) -> Self {
        self.orientation = Orientation::Horizontal;
        self
    }
}

/// Everything `Plotly.newPlot` needs besides the target element.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotSpec {
    pub data: Value,
    pub layout: Value,
    pub config: Value,
}

fn split(series: &[ChartSeriesPoint]) -> (Vec<String>, Vec<u64>) {
    series.iter().map(|p| (p.name.clone(), p.value)).unzip()
}

pub fn bar_trace(series: &[ChartSeriesPoint], palette: &Palette, orientation: Orientation) -> serde_json::Result<Value> {
    let (names, values) = split(series);
    let marker = Marker::new().color_array(palette.colors_for(series.len()));

    match orientation {
        Orientation::Vertical => serde_json::to_value(Bar::new(names, values).marker(marker)),
        Orientation::Horizontal => serde_json::to_value(
            Bar::new(values, names)
                .orientation(TraceOrientation::Horizontal)
                .marker(marker),
        ),
    }
}

pub fn line_trace(series: &[ChartSeriesPoint], palette: &Palette) -> serde_json::Result<Value> {
    let (names, values) = split(series);
    let trace = Scatter::new(names, values)
        .mode(Mode::LinesMarkers)
        .line(Line::new().color(palette.color_at(0).to_string()).shape(LineShape::Spline));

    serde_json::to_value(trace)
}

pub fn pie_trace(series: &[ChartSeriesPoint], palette: &Palette) -> Value {
    let (names, values) = split(series);
    json!({
        "type": "pie",
        "labels": names,
        "values": values,
        "sort": false,
        "textinfo": "percent",
        "marker": { "colors": palette.colors_for(series.len()) },
    })
}

const MAX_VALUE_TICKS: u64 = 5;

/// Whole-number tick step giving at most five intervals up to the largest value.
fn integer_dtick(series: &[ChartSeriesPoint]) -> u64 {
    let max = series.iter().map(|p| p.value).max().unwrap_or(0);
    max.div_ceil(MAX_VALUE_TICKS).max(1)
}

fn layout_json(kind: ChartKind, layout: &ChartLayout, series: &[ChartSeriesPoint]) -> Value {
    let mut base = json!({
        "height": layout.height,
        "margin": {"t": 10, "r": 10, "l": 50, "b": 30},
        "paper_bgcolor": "rgba(0,0,0,0)",
        "plot_bgcolor": "rgba(0,0,0,0)",
    });

    if kind == ChartKind::Pie {
        base["showlegend"] = json!(true);
        base["legend"] = json!({"orientation": "h", "y": -0.1});
        return base;
    }

    let mut value_axis = json!({"showgrid": true, "gridcolor": "#eee", "rangemode": "tozero"});
    if layout.integer_ticks {
        value_axis["tickformat"] = json!("d");
        value_axis["tick0"] = json!(0);
        value_axis["dtick"] = json!(integer_dtick(series));
    }

    let (x_axis, y_axis) = match layout.orientation {
        Orientation::Vertical => (json!({"showgrid": false, "type": "category"}), value_axis),
        Orientation::Horizontal => (
            value_axis,
            json!({"showgrid": false, "type": "category", "autorange": "reversed"}),
        ),
    };
    base["showlegend"] = json!(false);
    base["xaxis"] = x_axis;
    base["yaxis"] = y_axis;
    base
}

/// Describe a chart; a zero-length series yields an empty plot.
pub fn plot_spec(kind: ChartKind, series: &[ChartSeriesPoint], palette: &Palette, layout: &ChartLayout) -> serde_json::Result<PlotSpec> {
    let trace = match kind {
        ChartKind::Bar => bar_trace(series, palette, layout.orientation)?,
        ChartKind::Line => line_trace(series, palette)?,
        ChartKind::Pie => pie_trace(series, palette),
    };

    Ok(PlotSpec {
        data: Value::Array(vec![trace]),
        layout: layout_json(kind, layout, series),
        config: json!({"responsive": true, "displayModeBar": false}),
    })
}

fn to_js(value: &Value) -> Result<JsValue, serde_wasm_bindgen::Error> {
    value.serialize(&serde_wasm_bindgen::Serializer::json_compatible())
}

fn draw(element: &HtmlElement, spec: &PlotSpec) -> Result<(), String> {
    let data = to_js(&spec.data).map_err(|e| e.to_string())?;
    let layout = to_js(&spec.layout).map_err(|e| e.to_string())?;
    let config = to_js(&spec.config).map_err(|e| e.to_string())?;
    new_plot(element, data, layout, config)
        .map(|_| ())
        .map_err(|e| format!("{:?}", e))
}

#[derive(Properties, PartialEq)]
pub struct ChartProps {
    pub series: Vec<ChartSeriesPoint>,
    #[prop_or_default]
    pub palette: Palette,
    #[prop_or_default]
    pub layout: ChartLayout,
}

#[derive(Properties, PartialEq)]
struct PlotlyChartProps {
    kind: ChartKind,
    series: Vec<ChartSeriesPoint>,
    palette: Palette,
    layout: ChartLayout,
}

#[function_component(PlotlyChart)]
fn plotly_chart(props: &PlotlyChartProps) -> Html {
    let container_ref = use_node_ref();

    use_effect_with(
        (container_ref.clone(), props.kind, props.series.clone(), props.palette.clone(), props.layout.clone()),
        move |(container_ref, kind, series, palette, layout)| {
            if let Some(element) = container_ref.cast::<HtmlElement>() {
                let result = plot_spec(*kind, series, palette, layout)
                    .map_err(|e| e.to_string())
                    .and_then(|spec| draw(&element, &spec));
                match result {
                    Ok(()) => log::trace!("Rendered {:?} chart with {} points", kind, series.len()),
                    Err(e) => log::error!("Failed to render {:?} chart: {}", kind, e),
                }
            }
            || ()
        },
    );

    html! {
        <div ref={container_ref} class="chart-container" style={format!("width:100%; height:{}px;", props.layout.height)}></div>
    }
}

#[function_component(BarChart)]
pub fn bar_chart(props: &ChartProps) -> Html {
    html! {
        <PlotlyChart kind={ChartKind::Bar} series={props.series.clone()} palette={props.palette.clone()} layout={props.layout.clone()} />
    }
}

#[function_component(LineChart)]
pub fn line_chart(props: &ChartProps) -> Html {
    html! {
        <PlotlyChart kind={ChartKind::Line} series={props.series.clone()} palette={props.palette.clone()} layout={props.layout.clone()} />
    }
}

#[function_component(PieChart)]
pub fn pie_chart(props: &ChartProps) -> Html {
    html! {
        <PlotlyChart kind={ChartKind::Pie} series={props.series.clone()} palette={props.palette.clone()} layout={props.layout.clone()} />
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series() -> Vec<ChartSeriesPoint> {
        vec![
            ChartSeriesPoint::new("Active", 5),
            ChartSeriesPoint::new("Verify", 0),
            ChartSeriesPoint::new("Unverify", 2),
        ]
    }

    #[test]
    fn test_bar_trace_colors_cycle_through_palette() {
        let palette = Palette::new(["#024CAA", "#EC8305"]);
        let trace = bar_trace(&series(), &palette, Orientation::Vertical).unwrap();

        assert_eq!(trace["type"], "bar");
        assert_eq!(trace["x"], json!(["Active", "Verify", "Unverify"]));
        assert_eq!(trace["y"], json!([5, 0, 2]));
        assert_eq!(trace["marker"]["color"], json!(["#024CAA", "#EC8305", "#024CAA"]));
    }

    #[test]
    fn test_horizontal_bar_swaps_axes() {
        let trace = bar_trace(&series(), &Palette::default(), Orientation::Horizontal).unwrap();

        assert_eq!(trace["orientation"], "h");
        assert_eq!(trace["x"], json!([5, 0, 2]));
        assert_eq!(trace["y"], json!(["Active", "Verify", "Unverify"]));
    }

    #[test]
    fn test_pie_trace_keeps_order() {
        let palette = Palette::new(["#3498DB", "#E74C3C"]);
        let trace = pie_trace(&series()[..2], &palette);

        assert_eq!(trace["labels"], json!(["Active", "Verify"]));
        assert_eq!(trace["sort"], json!(false));
        assert_eq!(trace["marker"]["colors"], json!(["#3498DB", "#E74C3C"]));
    }

    #[test]
    fn test_empty_series_yields_empty_plot() {
        for kind in [ChartKind::Bar, ChartKind::Line, ChartKind::Pie] {
            let spec = plot_spec(kind, &[], &Palette::default(), &ChartLayout::default()).unwrap();
            let data = spec.data.as_array().unwrap();
            assert_eq!(data.len(), 1);
        }

        let pie = plot_spec(ChartKind::Pie, &[], &Palette::default(), &ChartLayout::default()).unwrap();
        assert_eq!(pie.data[0]["values"], json!([]));
    }

    #[test]
    fn test_layout_integer_ticks_on_value_axis() {
        let vertical = layout_json(ChartKind::Line, &ChartLayout::default().integer_ticks(), &series());
        assert_eq!(vertical["yaxis"]["tickformat"], "d");
        assert_eq!(vertical["yaxis"]["tick0"], json!(0));
        assert_eq!(vertical["yaxis"]["dtick"], json!(1));
        assert_eq!(vertical["xaxis"]["type"], "category");

        let horizontal = layout_json(ChartKind::Bar, &ChartLayout::default().horizontal().integer_ticks(), &series());
        assert_eq!(horizontal["xaxis"]["tickformat"], "d");
        assert_eq!(horizontal["xaxis"]["dtick"], json!(1));
        assert_eq!(horizontal["yaxis"]["autorange"], "reversed");

        let plain = layout_json(ChartKind::Bar, &ChartLayout::default(), &series());
        assert!(plain["yaxis"].get("tickformat").is_none());
        assert!(plain["yaxis"].get("dtick").is_none());
    }

    #[test]
    fn test_integer_ticks_never_step_below_one() {
        let zeros = vec![ChartSeriesPoint::new("Jan", 0), ChartSeriesPoint::new("Feb", 0)];
        let layout = layout_json(ChartKind::Bar, &ChartLayout::default().integer_ticks(), &zeros);
        assert_eq!(layout["yaxis"]["dtick"], json!(1));

        assert_eq!(integer_dtick(&[]), 1);
        assert_eq!(integer_dtick(&[ChartSeriesPoint::new("Jan", 2)]), 1);
        assert_eq!(integer_dtick(&[ChartSeriesPoint::new("Jan", 5)]), 1);
        assert_eq!(integer_dtick(&[ChartSeriesPoint::new("Jan", 6)]), 2);
        assert_eq!(integer_dtick(&[ChartSeriesPoint::new("Jan", 48)]), 10);
    }

    #[test]
    fn test_pie_layout_shows_legend() {
        let layout = layout_json(ChartKind::Pie, &ChartLayout::default(), &series());
        assert_eq!(layout["showlegend"], json!(true));
        assert!(layout.get("xaxis").is_none());
        assert_eq!(layout["height"], json!(200));
    }
}
