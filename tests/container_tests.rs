use highcharts_rs::core::Chart;
use highcharts_rs::error::ChartError;
use highcharts_rs::render::{AttributeValue, ContainerAttributes, HighchartsRenderer, Renderer};

#[test]
fn default_container_is_empty_div() {
    let chart = Chart::with_id("revenue").expect("chart");

    let markup = HighchartsRenderer::default()
        .render_container(&chart)
        .expect("container");

    assert_eq!(markup, r#"<div id="revenue"></div>"#);
}

#[test]
fn attributes_follow_insertion_order_and_join_lists() {
    let chart = Chart::with_id("revenue").expect("chart");
    let mut attributes = ContainerAttributes::new();
    attributes.insert("style".to_owned(), "height: 400px".into());
    attributes.insert(
        "class".to_owned(),
        AttributeValue::list(["chart", "chart--wide"]),
    );

    let markup = HighchartsRenderer::default()
        .render_container_with(&chart, "section", &attributes)
        .expect("container");

    assert_eq!(
        markup,
        r#"<section id="revenue" style="height: 400px" class="chart chart--wide"></section>"#
    );
}

#[test]
fn id_attribute_is_rejected() {
    let chart = Chart::new();
    let mut attributes = ContainerAttributes::new();
    attributes.insert("id".to_owned(), "custom".into());

    let err = HighchartsRenderer::default()
        .render_container_with(&chart, "div", &attributes)
        .expect_err("id override must fail");

    assert!(matches!(err, ChartError::InvalidArgument(_)));
}

#[test]
fn invalid_element_name_is_rejected() {
    let chart = Chart::new();

    let err = HighchartsRenderer::default()
        .render_container_with(&chart, "div onload=x", &ContainerAttributes::new())
        .expect_err("invalid element must fail");

    assert!(matches!(err, ChartError::InvalidArgument(_)));
}
