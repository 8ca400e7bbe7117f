//! Chart Component
//!
//! Hands chart configurations to Chart.js. The library is reached through the
//! global `Chart` constructor, so pages that don't load it simply get no
//! charts.

use js_sys::{Array, Object, Reflect};
use reading_tracker::charts::{Paint, TooltipLabel};
use reading_tracker::config::ChartsConfig;
use reading_tracker::{ChartBackend, ChartConfig, TrackerError, TrackerResult};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::dom::{describe, global_constructor, typed_element};

/// Chart.js loaded on the page as the global `Chart`
#[derive(Debug, Clone, Copy, Default)]
pub struct ChartJsBackend;

impl ChartBackend for ChartJsBackend {
    type Canvas = HtmlCanvasElement;
    type Chart = JsValue;

    fn canvas(&self, element_id: &str) -> Option<HtmlCanvasElement> {
        typed_element::<HtmlCanvasElement>(element_id)
    }

    fn draw(&self, canvas: HtmlCanvasElement, config: &ChartConfig) -> TrackerResult<JsValue> {
        let constructor = global_constructor(&["Chart"])
            .ok_or_else(|| TrackerError::Chart("Chart.js is not loaded".to_string()))?;

        let js_config = js_sys::JSON::parse(&serde_json::to_string(config)?).map_err(chart_error)?;
        resolve_gradients(&canvas, config, &js_config).map_err(chart_error)?;
        attach_tooltip_label(config, &js_config).map_err(chart_error)?;

        Reflect::construct(&constructor, &Array::of2(&canvas, &js_config)).map_err(chart_error)
    }
}

fn chart_error(err: JsValue) -> TrackerError {
    TrackerError::Chart(describe(&err))
}

/// Replace gradient paints with `CanvasGradient`s built on `canvas`
fn resolve_gradients(
    canvas: &HtmlCanvasElement,
    config: &ChartConfig,
    js_config: &JsValue,
) -> Result<(), JsValue> {
    let datasets = get_path(js_config, &["data", "datasets"])?;

    for (index, dataset) in config.data.datasets.iter().enumerate() {
        let Some(Paint::Gradient(linear)) = &dataset.background_color else {
            continue;
        };

        let context = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()?;

        let gradient = context.create_linear_gradient(linear.x0, linear.y0, linear.x1, linear.y1);
        for stop in &linear.stops {
            gradient.add_color_stop(stop.offset as f32, &stop.color)?;
        }

        let js_dataset = Reflect::get_u32(&datasets, index as u32)?;
        Reflect::set(&js_dataset, &"backgroundColor".into(), &gradient)?;
    }
    Ok(())
}

/// Install the tooltip label callback the configuration asks for
fn attach_tooltip_label(config: &ChartConfig, js_config: &JsValue) -> Result<(), JsValue> {
    let Some(label) = config.options.plugins.tooltip.as_ref().and_then(|t| t.label) else {
        return Ok(());
    };

    let callback = Closure::<dyn Fn(JsValue) -> JsValue>::new(move |context: JsValue| {
        JsValue::from_str(&render_label(label, &context))
    });

    let callbacks = Object::new();
    Reflect::set(&callbacks, &"label".into(), callback.as_ref())?;
    let tooltip = get_path(js_config, &["options", "plugins", "tooltip"])?;
    Reflect::set(&tooltip, &"callbacks".into(), &callbacks)?;

    // Charts live as long as the page
    callback.forget();
    Ok(())
}

fn render_label(label: TooltipLabel, context: &JsValue) -> String {
    let dataset_label = get_path(context, &["dataset", "label"])
        .ok()
        .and_then(|v| v.as_string())
        .unwrap_or_default();
    let value = Reflect::get(context, &"raw".into())
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or_default();
    label.render(&dataset_label, value)
}

fn get_path(value: &JsValue, path: &[&str]) -> Result<JsValue, JsValue> {
    path.iter()
        .try_fold(value.clone(), |current, key| Reflect::get(&current, &JsValue::from_str(key)))
}

/// Apply the page-wide Chart.js defaults (font family and text colour)
pub fn apply_chart_defaults(config: &ChartsConfig) {
    let Some(chart) = global_constructor(&["Chart"]) else {
        tracing::debug!("Chart.js not loaded, skipping chart defaults");
        return;
    };

    let result = get_path(&chart, &["defaults"]).and_then(|defaults| {
        let font = Reflect::get(&defaults, &"font".into())?;
        Reflect::set(&font, &"family".into(), &JsValue::from_str(&config.font_family))?;
        Reflect::set(&defaults, &"color".into(), &JsValue::from_str(&config.text_color))?;
        Ok(())
    });

    if let Err(e) = result {
        tracing::warn!("Could not apply chart defaults: {}", describe(&e));
    }
}
