//! Per-chart styling overlays.

use crate::{Mapping, Value};

use super::{ChartKind, ChartPresentation, DEFAULT_TEXT_COLOUR, object};

const CARTESIAN_AXES: [&str; 2] = ["x", "y"];
const RADIAL_AXES: [&str; 1] = ["r"];
const GRID_PARTS: [&str; 2] = ["ticks", "grid"];
const SCATTER_PARTS: [&str; 3] = ["title", "ticks", "grid"];

/// Orientation of a bar chart.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum BarLayout {
    /// Bars grow upwards from the x axis.
    #[default]
    Vertical,
    /// Bars grow rightwards from the y axis.
    Horizontal,
}

impl BarLayout {
    const fn index_axis(self) -> &'static str {
        match self {
            Self::Vertical => "x",
            Self::Horizontal => "y",
        }
    }
}

/// Styling knobs that some chart kinds translate into options.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ChartStyle {
    /// Colour for axis ticks, grid lines and (scatter) axis titles.
    pub grid_color: Option<String>,
    /// Bar orientation. Only bar charts read it.
    pub layout: BarLayout,
    /// Draw doughnut segment borders. Only doughnut charts read it.
    pub border: bool,
}

impl ChartStyle {
    /// Options this style contributes for a chart of `kind`.
    ///
    /// An unset grid colour is left absent so any colour the caller chose
    /// survives the merge. Scatter charts fall back to
    /// [`DEFAULT_TEXT_COLOUR`]. Radar point labels reuse the legend font size.
    #[must_use]
    pub fn overlay(&self, kind: ChartKind, presentation: &ChartPresentation) -> Mapping {
        let colour = Value::from(self.grid_color.clone());
        match kind {
            ChartKind::Line | ChartKind::Mixed => {
                scales(axis_colours(&CARTESIAN_AXES, &GRID_PARTS, &colour))
            }
            ChartKind::Bar => {
                let mut options = scales(axis_colours(&CARTESIAN_AXES, &GRID_PARTS, &colour));
                options.insert(
                    "indexAxis".to_owned(),
                    Value::from(self.layout.index_axis()),
                );
                options
            }
            ChartKind::Scatter => {
                let fallback = self.grid_color.as_deref().unwrap_or(DEFAULT_TEXT_COLOUR);
                scales(axis_colours(&CARTESIAN_AXES, &SCATTER_PARTS, &Value::from(fallback)))
            }
            ChartKind::PolarArea => scales(axis_colours(&RADIAL_AXES, &GRID_PARTS, &colour)),
            ChartKind::Radar => {
                let mut axes = axis_colours(&RADIAL_AXES, &GRID_PARTS, &colour);
                if let Some(radial) = axes.get_mut("r").and_then(Value::as_mapping_mut) {
                    radial.insert(
                        "pointLabels".to_owned(),
                        object([
                            ("color", colour.clone()),
                            (
                                "font",
                                object([("size", Value::from(presentation.legend_font_size))]),
                            ),
                        ]),
                    );
                }
                scales(axes)
            }
            ChartKind::Doughnut => Mapping::from_iter([(
                "borderWidth".to_owned(),
                Value::from(if self.border { 2_u32 } else { 0 }),
            )]),
            ChartKind::Pie | ChartKind::Bubble => Mapping::new(),
        }
    }
}

fn scales(axes: Mapping) -> Mapping {
    Mapping::from_iter([("scales".to_owned(), Value::Mapping(axes))])
}

fn axis_colours(axes: &[&str], parts: &[&str], colour: &Value) -> Mapping {
    axes.iter()
        .map(|axis| {
            let styled: Mapping = parts
                .iter()
                .map(|part| ((*part).to_owned(), object([("color", colour.clone())])))
                .collect();
            ((*axis).to_owned(), Value::Mapping(styled))
        })
        .collect()
}
