use indexmap::IndexMap;
use smallvec::SmallVec;
use tracing::warn;

use crate::core::Chart;
use crate::error::{ChartError, ChartResult};

pub const DEFAULT_CONTAINER_ELEMENT: &str = "div";

/// Extra attributes of the container element, written in insertion order.
pub type ContainerAttributes = IndexMap<String, AttributeValue>;

/// Attribute value; lists (such as CSS classes) are joined with single spaces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttributeValue {
    Text(String),
    List(SmallVec<[String; 4]>),
}

impl AttributeValue {
    #[must_use]
    pub fn list<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::List(values.into_iter().map(Into::into).collect())
    }

    #[must_use]
    pub fn joined(&self) -> String {
        match self {
            Self::Text(value) => value.clone(),
            Self::List(values) => values.join(" "),
        }
    }
}

impl From<&str> for AttributeValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for AttributeValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<Vec<String>> for AttributeValue {
    fn from(values: Vec<String>) -> Self {
        Self::List(SmallVec::from_vec(values))
    }
}

/// Builds the empty element the chart library draws into.
pub(crate) fn render_container_markup(
    chart: &Chart,
    element: &str,
    attributes: &ContainerAttributes,
) -> ChartResult<String> {
    if attributes.contains_key("id") {
        warn!(chart_id = chart.id(), "rejecting container attributes overriding id");
        return Err(ChartError::InvalidArgument(
            "container attributes cannot set the id".to_owned(),
        ));
    }
    validate_markup_name(element, "element")?;
    for name in attributes.keys() {
        validate_markup_name(name, "attribute")?;
    }

    let mut markup = format!("<{element} id=\"{}\"", chart.id());
    for (name, value) in attributes {
        markup.push(' ');
        markup.push_str(name);
        markup.push_str("=\"");
        markup.push_str(&escape_attribute(&value.joined()));
        markup.push('"');
    }
    markup.push_str("></");
    markup.push_str(element);
    markup.push('>');
    Ok(markup)
}

fn validate_markup_name(name: &str, what: &str) -> ChartResult<()> {
    let valid = !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | ':' | '.'));
    if !valid {
        return Err(ChartError::InvalidArgument(format!(
            "invalid container {what} name `{name}`"
        )));
    }
    Ok(())
}

fn escape_attribute(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '"' => escaped.push_str("&quot;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
