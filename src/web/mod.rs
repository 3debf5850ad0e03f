//! Browser host: the engine wired to the DOM and a JS-side viewer.
//!
//! ```js
//! import init, { WebViewer } from "./vantage.js";
//! await init();
//! const vantage = new WebViewer(bridge, optionsJson);
//! viewer.addEventListener("preFrame", () => vantage.pre_frame());
//! ```
//!
//! Scroll, resize and bound-button clicks are wired up by the constructor.
//! Every DOM callback runs on the one UI thread, so the engine is shared
//! between them as `Rc<RefCell<_>>`.

mod bridge;
mod page;

use std::cell::RefCell;
use std::rc::Rc;

pub use bridge::{JsRenderer, ViewerBridge};
use glam::Vec2;
pub use page::{DomPage, DomSelectors};
use wasm_bindgen::prelude::*;
use web_time::Instant;

use crate::engine::{VantageCommand, VantageEngine};
use crate::error::VantageError;
use crate::host::PageHost;
use crate::options::Options;

type SharedEngine = Rc<RefCell<VantageEngine<DomPage, JsRenderer>>>;

/// Install the console logger and panic hook.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Info) {
        web_sys::console::warn_1(&JsValue::from_str(&e.to_string()));
    }
}

fn to_js(e: VantageError) -> JsValue {
    JsValue::from_str(&e.to_string())
}

fn dispatch(engine: &SharedEngine, command: VantageCommand) {
    match engine.try_borrow_mut() {
        Ok(mut engine) => engine.execute(command, Instant::now()),
        Err(_) => log::warn!("engine busy, dropped {command:?}"),
    }
}

/// The engine as exposed to JavaScript.
#[wasm_bindgen]
pub struct WebViewer {
    engine: SharedEngine,
    listeners: Vec<Closure<dyn FnMut()>>,
}

#[wasm_bindgen]
impl WebViewer {
    /// Bind the choreography to the current document and `bridge`.
    ///
    /// `options_json` is an optional JSON-encoded options object; omitted
    /// fields take their defaults.
    #[wasm_bindgen(constructor)]
    pub fn new(
        bridge: ViewerBridge,
        options_json: Option<String>,
    ) -> Result<WebViewer, JsValue> {
        let options = match options_json {
            Some(json) => Options::from_json(&json).map_err(to_js)?,
            None => Options::default(),
        };
        let page = DomPage::new(DomSelectors::default()).map_err(to_js)?;
        let engine = VantageEngine::new(options, page, JsRenderer::new(bridge))
            .map_err(to_js)?;
        let mut viewer = Self {
            engine: Rc::new(RefCell::new(engine)),
            listeners: Vec::new(),
        };
        viewer.attach().map_err(to_js)?;
        Ok(viewer)
    }

    /// Render tick. Call from the JS viewer's pre-frame hook.
    pub fn pre_frame(&self) {
        match self.engine.try_borrow_mut() {
            Ok(mut engine) => engine.frame(Instant::now()),
            Err(_) => log::warn!("engine busy, skipped frame"),
        }
    }

    /// Forward a pointer drag to the orbit controls.
    pub fn orbit(&self, dx: f32, dy: f32) {
        dispatch(&self.engine, VantageCommand::Orbit { delta: Vec2::new(dx, dy) });
    }

    /// Forward a modified pointer drag as a pan.
    pub fn pan(&self, dx: f32, dy: f32) {
        dispatch(&self.engine, VantageCommand::Pan { delta: Vec2::new(dx, dy) });
    }

    /// Forward a wheel delta to the orbit controls.
    pub fn zoom(&self, delta: f32) {
        dispatch(&self.engine, VantageCommand::Zoom { delta });
    }

    /// Run the action bound to `selector`, as if it had been clicked.
    pub fn click(&self, selector: &str) {
        dispatch(
            &self.engine,
            VantageCommand::Click {
                selector: selector.to_owned(),
            },
        );
    }

    /// Current mode name, e.g. `"Interactive"`.
    #[must_use]
    pub fn mode(&self) -> String {
        format!("{:?}", self.engine.borrow().mode())
    }

    /// Current scroll offset as the engine sees it.
    #[must_use]
    pub fn scroll_y(&self) -> f32 {
        self.engine.borrow().page().scroll_y()
    }

    /// JSON Schema of the UI-exposed options.
    #[must_use]
    pub fn options_schema() -> String {
        serde_json::to_string(&Options::json_schema()).unwrap_or_default()
    }
}

impl WebViewer {
    fn attach(&mut self) -> Result<(), VantageError> {
        let window = web_sys::window()
            .ok_or_else(|| VantageError::Web("no global window".to_owned()))?;
        for (event, command) in [
            ("scroll", VantageCommand::Scrolled),
            ("resize", VantageCommand::Resized),
        ] {
            self.listen(&window, event, command)?;
        }

        let (document, selectors) = {
            let engine = self.engine.borrow();
            let selectors: Vec<String> = engine
                .options()
                .bindings
                .buttons
                .iter()
                .map(|b| b.selector.clone())
                .collect();
            (engine.page().document().clone(), selectors)
        };
        for selector in selectors {
            let Ok(nodes) = document.query_selector_all(&selector) else {
                log::warn!("invalid selector `{selector}`");
                continue;
            };
            if nodes.length() == 0 {
                log::warn!("no element matches binding `{selector}`");
            }
            for i in 0..nodes.length() {
                if let Some(node) = nodes.item(i) {
                    let command = VantageCommand::Click {
                        selector: selector.clone(),
                    };
                    self.listen(&node, "click", command)?;
                }
            }
        }
        Ok(())
    }

    fn listen(
        &mut self,
        target: &web_sys::EventTarget,
        event: &str,
        command: VantageCommand,
    ) -> Result<(), VantageError> {
        let engine = Rc::clone(&self.engine);
        let callback = Closure::<dyn FnMut()>::new(move || {
            dispatch(&engine, command.clone());
        });
        target
            .add_event_listener_with_callback(
                event,
                callback.as_ref().unchecked_ref(),
            )
            .map_err(|e| VantageError::Web(format!("{event} listener: {e:?}")))?;
        self.listeners.push(callback);
        Ok(())
    }
}
