use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{window, CanvasRenderingContext2d, HtmlCanvasElement};
use yew::prelude::*;

use super::dom::{log_dom_failure, viewport_size, EventListener, Interval};
use crate::rain::{RainField, RainSettings};

const TRAIL_FADE: &str = "rgba(0, 0, 0, 0.05)";
const GLYPH_COLOR: &str = "#00ff41";

#[derive(Properties, PartialEq)]
pub struct MatrixRainProps {
    pub settings: RainSettings,
}

#[function_component(MatrixRain)]
pub fn matrix_rain(props: &MatrixRainProps) -> Html {
    let canvas_ref = use_node_ref();

    {
        let canvas_ref = canvas_ref.clone();
        use_effect_with(props.settings, move |settings| {
            let animation = canvas_ref.cast::<HtmlCanvasElement>().and_then(|canvas| {
                RainAnimation::start(canvas, *settings)
                    .map_err(|error| log_dom_failure("canvas_unavailable", &error))
                    .ok()
            });

            move || drop(animation)
        });
    }

    html! {
        <canvas ref={canvas_ref} class="matrix-rain" aria-hidden="true"></canvas>
    }
}

struct RainAnimation {
    _frames: Interval,
    _resize: EventListener,
}

impl RainAnimation {
    fn start(canvas: HtmlCanvasElement, settings: RainSettings) -> Result<Self, JsValue> {
        let window = window().ok_or_else(|| JsValue::from_str("window unavailable"))?;
        let context = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()?;

        let (width, height) = viewport_size();
        fit_canvas(&canvas, width, height);
        let field = Rc::new(RefCell::new(RainField::new(
            width,
            height,
            settings.font_size,
        )));

        let resize = {
            let field = field.clone();
            EventListener::new(&window, "resize", move |_| {
                let (width, height) = viewport_size();
                fit_canvas(&canvas, width, height);
                field.borrow_mut().resize(width, height);
            })?
        };

        let font = format!("{}px monospace", settings.font_size);
        let frames = Interval::new(settings.frame_interval, move || {
            draw_frame(&context, &mut field.borrow_mut(), &font)
        })?;

        Ok(Self {
            _frames: frames,
            _resize: resize,
        })
    }
}

fn fit_canvas(canvas: &HtmlCanvasElement, width: f64, height: f64) {
    canvas.set_width(width.max(0.0) as u32);
    canvas.set_height(height.max(0.0) as u32);
}

fn draw_frame(context: &CanvasRenderingContext2d, field: &mut RainField, font: &str) {
    let Some(canvas) = context.canvas() else {
        return;
    };

    context.set_fill_style_str(TRAIL_FADE);
    context.fill_rect(
        0.0,
        0.0,
        f64::from(canvas.width()),
        f64::from(canvas.height()),
    );

    // resizing the canvas resets context state, so the font is set every frame
    context.set_font(font);
    context.set_fill_style_str(GLYPH_COLOR);
    for glyph in field.step(js_sys::Math::random) {
        let _ = context.fill_text(&glyph.ch.to_string(), glyph.x, glyph.y);
    }
}
