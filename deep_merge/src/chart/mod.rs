//! Chart option composition.
//!
//! Chart wrappers hand a charting engine one options mapping built from
//! three parts: defaults derived from presentation settings (title, legend),
//! a per-chart overlay derived from styling (grid colour, bar layout,
//! doughnut border), and whatever options the caller supplied. This module
//! computes that mapping; drawing the chart is left to the engine.

mod overlay;

use crate::{Mapping, Value, deep_merge_mappings};

pub use overlay::{BarLayout, ChartStyle};

/// Colour used for titles, legends and scatter grids when none is given.
pub const DEFAULT_TEXT_COLOUR: &str = "#a7a7a7";

/// Chart types a wrapper can render.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum ChartKind {
    /// Bubble chart.
    Bubble,
    /// Line chart.
    Line,
    /// Bar chart, vertical or horizontal.
    Bar,
    /// Pie chart.
    Pie,
    /// Doughnut chart.
    Doughnut,
    /// Radar chart.
    Radar,
    /// Polar area chart.
    PolarArea,
    /// Scatter chart.
    Scatter,
    /// Mixed bar and line datasets.
    Mixed,
}

impl ChartKind {
    /// Name of the engine chart type that renders this kind.
    ///
    /// Mixed charts are drawn by the bar renderer with per-dataset types.
    #[must_use]
    pub const fn engine_type(self) -> &'static str {
        match self {
            Self::Bubble => "bubble",
            Self::Line => "line",
            Self::Bar | Self::Mixed => "bar",
            Self::Pie => "pie",
            Self::Doughnut => "doughnut",
            Self::Radar => "radar",
            Self::PolarArea => "polarArea",
            Self::Scatter => "scatter",
        }
    }
}

/// Title and legend settings shared by every chart kind.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ChartPresentation {
    /// Chart title. The title plugin is hidden when absent or empty.
    pub title: Option<String>,
    /// Title text colour.
    pub title_color: String,
    /// Title font size in pixels.
    pub title_font_size: u32,
    /// Legend placement understood by the engine (`top`, `left`, ...).
    pub legend_position: Option<String>,
    /// Legend label colour.
    pub legend_color: String,
    /// Legend label font size in pixels.
    pub legend_font_size: u32,
}

impl Default for ChartPresentation {
    fn default() -> Self {
        Self {
            title: None,
            title_color: DEFAULT_TEXT_COLOUR.to_owned(),
            title_font_size: 18,
            legend_position: None,
            legend_color: DEFAULT_TEXT_COLOUR.to_owned(),
            legend_font_size: 16,
        }
    }
}

impl ChartPresentation {
    /// Options every chart starts from.
    ///
    /// Unset optional fields become absent markers so caller options or the
    /// engine's own defaults fill them in.
    ///
    /// ```
    /// use deep_merge::chart::ChartPresentation;
    /// use deep_merge::Value;
    ///
    /// let presentation = ChartPresentation {
    ///     title: Some("Revenue".to_owned()),
    ///     ..ChartPresentation::default()
    /// };
    /// let options = Value::from(presentation.default_options());
    /// assert_eq!(options.lookup(&["plugins", "title", "display"]), Some(&Value::from(true)));
    /// assert_eq!(options.lookup(&["plugins", "legend", "position"]), Some(&Value::Undefined));
    /// ```
    #[must_use]
    pub fn default_options(&self) -> Mapping {
        let shows_title = self.title.as_deref().is_some_and(|title| !title.is_empty());
        let legend = object([
            ("position", Value::from(self.legend_position.clone())),
            (
                "labels",
                object([
                    ("color", Value::from(self.legend_color.clone())),
                    ("font", object([("size", Value::from(self.legend_font_size))])),
                ]),
            ),
        ]);
        let title = object([
            ("display", Value::from(shows_title)),
            ("text", Value::from(self.title.clone())),
            ("color", Value::from(self.title_color.clone())),
            ("font", object([("size", Value::from(self.title_font_size))])),
        ]);
        Mapping::from_iter([
            ("responsive".to_owned(), Value::from(true)),
            ("maintainAspectRatio".to_owned(), Value::from(false)),
            (
                "plugins".to_owned(),
                object([("legend", legend), ("title", title)]),
            ),
        ])
    }
}

/// Combine computed defaults with caller options.
///
/// Without caller options the defaults are returned as they are.
#[must_use]
pub fn combine_options(defaults: &Mapping, options: Option<&Mapping>) -> Mapping {
    options.map_or_else(
        || defaults.clone(),
        |caller| deep_merge_mappings([defaults, caller]),
    )
}

/// Full options mapping for a chart of `kind`.
///
/// The style overlay is merged over the caller's options first, then the
/// result is merged over the presentation defaults.
///
/// ```
/// use deep_merge::chart::{resolve_options, BarLayout, ChartKind, ChartPresentation, ChartStyle};
/// use deep_merge::Value;
///
/// let style = ChartStyle {
///     grid_color: Some("#333".to_owned()),
///     layout: BarLayout::Horizontal,
///     ..ChartStyle::default()
/// };
/// let options = Value::from(resolve_options(
///     ChartKind::Bar,
///     &ChartPresentation::default(),
///     &style,
///     None,
/// ));
/// assert_eq!(options.lookup(&["indexAxis"]), Some(&Value::from("y")));
/// assert_eq!(options.lookup(&["scales", "y", "grid", "color"]), Some(&Value::from("#333")));
/// assert_eq!(options.lookup(&["responsive"]), Some(&Value::from(true)));
/// ```
#[must_use]
pub fn resolve_options(
    kind: ChartKind,
    presentation: &ChartPresentation,
    style: &ChartStyle,
    options: Option<&Mapping>,
) -> Mapping {
    let overlay = style.overlay(kind, presentation);
    let caller = deep_merge_mappings(options.into_iter().chain([&overlay]));
    combine_options(&presentation.default_options(), Some(&caller))
}

pub(crate) fn object<const N: usize>(entries: [(&str, Value); N]) -> Value {
    Value::Mapping(
        entries
            .into_iter()
            .map(|(key, value)| (key.to_owned(), value))
            .collect(),
    )
}
