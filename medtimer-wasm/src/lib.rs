//! WASM bindings for the MedTimer screen renderer.
//!
//! The web embedding layer calls these, base64-encodes the returned
//! SVG into a data URI and mounts it in a container sized 40px wider
//! and taller than the canvas.

use wasm_bindgen::prelude::*;

use medtimer_screens::{vector_scene, Adherence, SceneError, Screen};

#[wasm_bindgen]
pub struct RenderOutput {
    svg: String,
    diagnostics: String,
    has_error: bool,
}

#[wasm_bindgen]
impl RenderOutput {
    #[wasm_bindgen(getter)]
    pub fn svg(&self) -> String {
        self.svg.clone()
    }

    #[wasm_bindgen(getter)]
    pub fn diagnostics(&self) -> String {
        self.diagnostics.clone()
    }

    #[wasm_bindgen(getter, js_name = hasError)]
    pub fn has_error(&self) -> bool {
        self.has_error
    }
}

/// Render the Home screen at the given canvas size.
#[wasm_bindgen(js_name = renderHome)]
#[must_use]
pub fn render_home(width: f64, height: f64) -> RenderOutput {
    // The Home screen ignores adherence; 0 is always valid.
    let adherence = match Adherence::new(0) {
        Ok(a) => a,
        Err(e) => return failure(&e),
    };
    into_output(vector_scene(Screen::Home, width, height, adherence))
}

/// Render the Score screen at the given canvas size and adherence
/// percentage.
#[wasm_bindgen(js_name = renderScore)]
#[must_use]
pub fn render_score(width: f64, height: f64, adherence: u8) -> RenderOutput {
    let adherence = match Adherence::new(adherence) {
        Ok(a) => a,
        Err(e) => return failure(&e),
    };
    into_output(vector_scene(Screen::Score, width, height, adherence))
}

fn into_output(result: Result<String, SceneError>) -> RenderOutput {
    match result {
        Ok(svg) => RenderOutput {
            svg,
            diagnostics: String::new(),
            has_error: false,
        },
        Err(e) => failure(&e),
    }
}

fn failure(e: &SceneError) -> RenderOutput {
    RenderOutput {
        svg: String::new(),
        diagnostics: format!("error: {e}"),
        has_error: true,
    }
}
