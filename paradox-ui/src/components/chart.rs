//! Chart Component
//!
//! One [`ChartSeries`] drawn by Chart.js.

use std::sync::atomic::{AtomicUsize, Ordering};

use leptos::*;

use paradox::viz::ChartSeries;

use crate::js_bridge;

static NEXT_CHART: AtomicUsize = AtomicUsize::new(0);

#[component]
pub fn ClimateChart(
    series: ChartSeries,
    /// Attribution line under the chart
    #[prop(default = None)]
    caption: Option<String>,
) -> impl IntoView {
    let canvas_id = format!("chart-{}", NEXT_CHART.fetch_add(1, Ordering::Relaxed));
    let config = series.chart_config();
    let empty = series.is_empty();

    {
        let canvas_id = canvas_id.clone();
        create_effect(move |_| {
            if !empty {
                js_bridge::render_chart(&canvas_id, &config);
            }
        });
    }
    {
        let canvas_id = canvas_id.clone();
        on_cleanup(move || js_bridge::destroy_chart(&canvas_id));
    }

    view! {
        <div class="bg-white rounded-xl shadow p-6">
            <h3 class="text-lg font-semibold mb-4">{series.title.clone()}</h3>
            {if empty {
                view! { <p class="text-gray-400 text-center py-12">"No data points"</p> }.into_view()
            } else {
                view! {
                    <div class="relative h-72">
                        <canvas id=canvas_id />
                    </div>
                }
                .into_view()
            }}
            {caption.map(|c| view! { <p class="text-xs text-gray-400 mt-3">"Source: " {c}</p> })}
        </div>
    }
}
