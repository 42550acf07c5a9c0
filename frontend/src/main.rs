//! Entry point for the WASM application

pub fn main() {
    syncform_frontend::run();
}
