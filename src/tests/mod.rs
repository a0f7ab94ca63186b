//! Browser-side tests for the view binder, run with `wasm-pack test`.

mod view_binder;
