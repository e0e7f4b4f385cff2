#[cfg(target_arch = "wasm32")]
fn main() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::mount_to_body(floodcoord_client::app::App);
}

// The client only runs in the browser; the native build exists for tests.
#[cfg(not(target_arch = "wasm32"))]
fn main() {}
