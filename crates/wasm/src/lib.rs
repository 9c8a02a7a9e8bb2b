use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use platformer_core::{Error, Game, GameConfig, Rect, Renderer};

const CANVAS_ID: &str = "canvas";

fn to_js(e: Error) -> JsValue {
    JsValue::from_str(&e.to_string())
}

/// 2d-context drawing onto a page canvas.
struct CanvasRenderer {
    canvas_id: String,
    surface: Option<(HtmlCanvasElement, CanvasRenderingContext2d)>,
}

impl CanvasRenderer {
    fn new(canvas_id: &str) -> Self {
        Self { canvas_id: canvas_id.to_owned(), surface: None }
    }
}

impl Renderer for CanvasRenderer {
    fn init(&mut self) -> platformer_core::Result<()> {
        let fail = |msg: &str| Error::RendererInit(msg.to_owned());

        let window = web_sys::window().ok_or_else(|| fail("no window"))?;
        let document = window.document().ok_or_else(|| fail("no document"))?;
        let canvas = document
            .get_element_by_id(&self.canvas_id)
            .ok_or_else(|| fail(&format!("no element #{}", self.canvas_id)))?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| fail(&format!("#{} is not a canvas", self.canvas_id)))?;
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| fail(&format!("{e:?}")))?
            .ok_or_else(|| fail("2d context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| fail("unexpected context type"))?;

        self.surface = Some((canvas, ctx));
        Ok(())
    }

    fn clear(&mut self) {
        if let Some((canvas, ctx)) = &self.surface {
            ctx.clear_rect(0.0, 0.0, canvas.width() as f64, canvas.height() as f64);
        }
    }

    fn draw_rect(&mut self, r: &Rect) {
        if let Some((_, ctx)) = &self.surface {
            ctx.begin_path();
            ctx.rect(r.x as f64, r.y as f64, r.w as f64, r.h as f64);
            ctx.stroke();
        }
    }

    fn draw_filled_rect(&mut self, r: &Rect) {
        if let Some((_, ctx)) = &self.surface {
            ctx.begin_path();
            ctx.fill_rect(r.x as f64, r.y as f64, r.w as f64, r.h as f64);
            ctx.stroke();
        }
    }
}

/// Browser host. JS forwards key events and calls `tick()` every
/// `frame_interval_ms()`.
#[wasm_bindgen]
pub struct WebGame {
    game: Game,
    renderer: CanvasRenderer,
}

#[wasm_bindgen]
impl WebGame {
    #[wasm_bindgen(constructor)]
    pub fn new() -> WebGame {
        WebGame {
            game: Game::new(GameConfig::default()),
            renderer: CanvasRenderer::new(CANVAS_ID),
        }
    }

    /// Build from a JSON `GameConfig`; missing fields take defaults.
    pub fn from_config_json(json: &str, canvas_id: &str) -> Result<WebGame, JsValue> {
        let config = GameConfig::from_json(json).map_err(to_js)?;
        Ok(WebGame {
            game: Game::new(config),
            renderer: CanvasRenderer::new(canvas_id),
        })
    }

    /// Must succeed before the first `tick()`.
    pub fn init(&mut self) -> Result<(), JsValue> {
        self.game.init(&mut self.renderer).map_err(to_js)?;
        web_sys::console::log_1(
            &format!("platformer ready: {} platforms", self.game.map().len()).into(),
        );
        Ok(())
    }

    pub fn key_down(&mut self, key: &str) {
        self.game.keyboard_mut().key_down(key);
    }

    pub fn key_up(&mut self, key: &str) {
        self.game.keyboard_mut().key_up(key);
    }

    /// Drop held keys, e.g. when the page loses focus.
    pub fn release_keys(&mut self) {
        self.game.keyboard_mut().release_all();
    }

    pub fn frame_interval_ms(&self) -> f64 {
        self.game.frame_interval().as_secs_f64() * 1000.0
    }

    /// Step once, draw, and return player state + events as a JS object.
    pub fn tick(&mut self) -> Result<JsValue, JsValue> {
        let ev = self.game.tick(&mut self.renderer);
        let s = self.game.player_state();

        let obj = js_sys::Object::new();
        js_sys::Reflect::set(&obj, &"x".into(), &JsValue::from_f64(s.x as f64))?;
        js_sys::Reflect::set(&obj, &"y".into(), &JsValue::from_f64(s.y as f64))?;
        js_sys::Reflect::set(&obj, &"vx".into(), &JsValue::from_f64(s.vx as f64))?;
        js_sys::Reflect::set(&obj, &"vy".into(), &JsValue::from_f64(s.vy as f64))?;
        js_sys::Reflect::set(&obj, &"grounded".into(), &JsValue::from_bool(s.grounded != 0))?;
        js_sys::Reflect::set(&obj, &"jumped".into(), &JsValue::from_bool(ev.jumped != 0))?;
        js_sys::Reflect::set(&obj, &"landed".into(), &JsValue::from_bool(ev.landed != 0))?;
        js_sys::Reflect::set(&obj, &"blocked".into(), &JsValue::from_bool(ev.blocked != 0))?;
        js_sys::Reflect::set(&obj, &"bonked".into(), &JsValue::from_bool(ev.bonked != 0))?;

        Ok(JsValue::from(obj))
    }
}

impl Default for WebGame {
    fn default() -> Self {
        Self::new()
    }
}
