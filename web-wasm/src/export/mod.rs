pub mod docx_wasm;
pub mod js_bindings;
