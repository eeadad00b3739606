use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    pub fn log(value: &str);
}

/// Sends progress lines to the browser console instead of stdout.
macro_rules! println {
    ($($t:tt)*) => ($crate::console::log(&format_args!($($t)*).to_string()))
}
