use charming::{
    Chart as CharmingChart,
    component::{Axis, Grid, Legend},
    datatype::{DataPoint, DataPointItem},
    element::{
        AxisLabel, AxisType, ItemStyle, Label, LabelPosition, LineStyle, LineStyleType,
        SplitLine, Tooltip, Trigger,
    },
    renderer::WasmRenderer,
    series::Bar,
};
use gloo::events::EventListener;
use std::rc::Rc;
use web_sys::HtmlElement;
use yew::prelude::*;

use crate::models::breakpoint::Breakpoint;
use crate::models::chart::{ChartDescription, ChartSeries, PRICE_UNIT};

const CHART_ID: &str = "price-chart";
const OVERLAY_COLOR: &str = "rgba(0, 0, 0, 0)";

#[derive(Properties, PartialEq)]
pub struct ChartProps {
    pub description: Rc<ChartDescription>,
    pub breakpoint: Breakpoint,
}

#[function_component(Chart)]
pub fn chart(props: &ChartProps) -> Html {
    let container_ref = use_node_ref();

    {
        let container_ref = container_ref.clone();

        use_effect_with(
            (props.description.clone(), container_ref, props.breakpoint),
            |(description, container_ref, breakpoint)| {
                let listener = container_ref
                    .cast::<HtmlElement>()
                    .zip(web_sys::window())
                    .map(|(container, window)| {
                        render_chart(&container, description, *breakpoint);

                        let description = description.clone();
                        let breakpoint = *breakpoint;
                        EventListener::new(&window, "resize", move |_| {
                            render_chart(&container, &description, breakpoint);
                        })
                    });

                move || drop(listener)
            },
        );
    }

    html! {
        <div class={classes!("chart-container", props.breakpoint.code())} ref={container_ref}>
            <div id={CHART_ID} />
        </div>
    }
}

fn render_chart(container: &HtmlElement, description: &ChartDescription, breakpoint: Breakpoint) {
    let width = container.client_width().cast_unsigned();
    let height = container.client_height().cast_unsigned();

    if width == 0 || height == 0 {
        return;
    }

    let chart = build_chart(description, breakpoint);
    if let Err(e) = WasmRenderer::new(width, height).render(CHART_ID, &chart) {
        web_sys::console::error_1(&format!("Render error: {e:?}").into());
    }
}

fn build_series(description: &ChartDescription, series: &ChartSeries) -> Bar {
    let items: Vec<DataPointItem> = series
        .data
        .iter()
        .zip(&series.colors)
        .enumerate()
        .map(|(i, (&value, color))| {
            DataPointItem::new(value)
                .name(description.tooltip_text(i).unwrap_or_default())
                .item_style(ItemStyle::new().color(color.as_str()))
        })
        .collect();

    Bar::new()
        .name(series.label.as_str())
        .data(items)
        .bar_width(format!("{}%", series.bar_width_percent).as_str())
        .bar_gap("-100%")
}

/// One invisible bar per annotated point, carrying the annotation as its label.
fn annotation_bars(description: &ChartDescription, series: &ChartSeries) -> Vec<Bar> {
    series
        .annotations
        .iter()
        .enumerate()
        .filter_map(|(i, text)| Some((i, text.as_deref()?)))
        .map(|(index, text)| {
            let data: Vec<DataPoint> = series
                .data
                .iter()
                .enumerate()
                .map(|(i, &value)| {
                    if i == index {
                        DataPointItem::new(value)
                            .name(description.tooltip_text(i).unwrap_or_default())
                            .item_style(ItemStyle::new().color(OVERLAY_COLOR))
                            .into()
                    } else {
                        DataPoint::from("-")
                    }
                })
                .collect();

            Bar::new()
                .name(series.label.as_str())
                .data(data)
                .bar_width(format!("{}%", series.bar_width_percent).as_str())
                .bar_gap("-100%")
                .label(
                    Label::new()
                        .show(true)
                        .position(LabelPosition::Top)
                        .formatter(text),
                )
        })
        .collect()
}

fn build_chart(description: &ChartDescription, breakpoint: Breakpoint) -> CharmingChart {
    let axis_color = "#6b7280";
    let grid_color = "#e5e7eb";

    let mut chart = CharmingChart::new()
        .legend(Legend::new().data(description.legend.iter().map(String::as_str).collect::<Vec<_>>()))
        .tooltip(Tooltip::new().trigger(Trigger::Item).formatter("{b}"))
        .grid(
            Grid::new()
                .left("4%")
                .right("4%")
                .bottom("12%")
                .contain_label(true),
        )
        .x_axis(
            Axis::new()
                .type_(AxisType::Category)
                .data(description.labels.clone())
                .axis_label(
                    AxisLabel::new()
                        .color(axis_color)
                        .interval(breakpoint.label_interval()),
                ),
        )
        .y_axis(
            Axis::new()
                .type_(AxisType::Value)
                .name(PRICE_UNIT)
                .max(description.max_value)
                .axis_label(AxisLabel::new().color(axis_color))
                .split_line(
                    SplitLine::new().line_style(
                        LineStyle::new()
                            .color(grid_color)
                            .type_(LineStyleType::Dashed),
                    ),
                ),
        );

    // Later series are drawn on top, so add them from the highest order down
    let mut series: Vec<&ChartSeries> = description.series.iter().collect();
    series.sort_by(|a, b| b.order.cmp(&a.order));
    for s in &series {
        chart = chart.series(build_series(description, s));
    }
    for s in &series {
        for bar in annotation_bars(description, s) {
            chart = chart.series(bar);
        }
    }

    chart
}
