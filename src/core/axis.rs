use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};

use super::{Formatter, LabelAlign, StyleMap};

static NEXT_AXIS_ID: AtomicU64 = AtomicU64::new(1);

/// Process-unique identity of an axis.
///
/// Series refer to axes through this identity; the renderer turns it into the
/// axis position within the owning chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct AxisId(u64);

impl AxisId {
    fn next() -> Self {
        Self(NEXT_AXIS_ID.fetch_add(1, Ordering::Relaxed))
    }

    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AxisOrientation {
    X,
    Y,
}

impl AxisOrientation {
    #[must_use]
    pub const fn option_key(self) -> &'static str {
        match self {
            Self::X => "xAxis",
            Self::Y => "yAxis",
        }
    }
}

/// Reference from a series to one of the chart's axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AxisRef {
    pub id: AxisId,
    pub orientation: AxisOrientation,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisTitle {
    pub enabled: bool,
    pub text: Option<String>,
    pub style: StyleMap,
}

impl Default for AxisTitle {
    fn default() -> Self {
        Self {
            enabled: true,
            text: None,
            style: StyleMap::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisLabels {
    pub enabled: bool,
    pub align: Option<LabelAlign>,
    pub style: StyleMap,
    pub x_offset: Option<f64>,
    pub y_offset: Option<f64>,
    pub formatter: Option<Formatter>,
}

impl Default for AxisLabels {
    fn default() -> Self {
        Self {
            enabled: true,
            align: None,
            style: StyleMap::new(),
            x_offset: None,
            y_offset: None,
            formatter: None,
        }
    }
}

/// Horizontal or vertical chart axis.
///
/// Cloning keeps the identity, so a clone still resolves to the same axis
/// position when referenced by a series.
#[derive(Debug, Clone, PartialEq)]
pub struct Axis {
    id: AxisId,
    orientation: AxisOrientation,
    pub opposite: bool,
    pub show_first_label: bool,
    pub show_last_label: bool,
    pub categories: Vec<String>,
    pub title: AxisTitle,
    pub labels: AxisLabels,
}

impl Axis {
    #[must_use]
    pub fn new(orientation: AxisOrientation) -> Self {
        Self {
            id: AxisId::next(),
            orientation,
            opposite: false,
            show_first_label: true,
            show_last_label: true,
            categories: Vec::new(),
            title: AxisTitle::default(),
            labels: AxisLabels::default(),
        }
    }

    #[must_use]
    pub fn x() -> Self {
        Self::new(AxisOrientation::X)
    }

    #[must_use]
    pub fn y() -> Self {
        Self::new(AxisOrientation::Y)
    }

    #[must_use]
    pub fn id(&self) -> AxisId {
        self.id
    }

    #[must_use]
    pub fn orientation(&self) -> AxisOrientation {
        self.orientation
    }

    #[must_use]
    pub fn reference(&self) -> AxisRef {
        AxisRef {
            id: self.id,
            orientation: self.orientation,
        }
    }

    #[must_use]
    pub fn with_opposite(mut self, opposite: bool) -> Self {
        self.opposite = opposite;
        self
    }

    #[must_use]
    pub fn with_show_first_label(mut self, show: bool) -> Self {
        self.show_first_label = show;
        self
    }

    #[must_use]
    pub fn with_show_last_label(mut self, show: bool) -> Self {
        self.show_last_label = show;
        self
    }

    #[must_use]
    pub fn with_categories<I, S>(mut self, categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.categories = categories.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_title_text(mut self, text: impl Into<String>) -> Self {
        self.title.text = Some(text.into());
        self
    }

    #[must_use]
    pub fn with_title_enabled(mut self, enabled: bool) -> Self {
        self.title.enabled = enabled;
        self
    }

    #[must_use]
    pub fn with_title_style(mut self, property: impl Into<String>, value: impl Into<String>) -> Self {
        self.title.style.insert(property.into(), value.into());
        self
    }

    #[must_use]
    pub fn with_labels_enabled(mut self, enabled: bool) -> Self {
        self.labels.enabled = enabled;
        self
    }

    #[must_use]
    pub fn with_labels_align(mut self, align: LabelAlign) -> Self {
        self.labels.align = Some(align);
        self
    }

    #[must_use]
    pub fn with_labels_style(
        mut self,
        property: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.labels.style.insert(property.into(), value.into());
        self
    }

    /// Sets label pixel offsets relative to the tick position.
    #[must_use]
    pub fn with_labels_offset(mut self, x: Option<f64>, y: Option<f64>) -> Self {
        self.labels.x_offset = x;
        self.labels.y_offset = y;
        self
    }

    #[must_use]
    pub fn with_labels_formatter(mut self, formatter: Formatter) -> Self {
        self.labels.formatter = Some(formatter);
        self
    }
}
