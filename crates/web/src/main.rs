// =============================================================================
// ZeroEdge Web - WASM Entry Point
// =============================================================================
// Trunk compiles this binary and injects it into index.html.
// =============================================================================

use zeroedge_web::App;

fn main() {
    console_error_panic_hook::set_once();

    // Ignore if a logger is already installed
    let _ = console_log::init_with_level(log::Level::Debug);

    log::info!("Starting ZeroEdge site...");

    leptos::mount::mount_to_body(App);
}
