use medverse_portal::config::CONFIG;
use medverse_portal::App;

fn main() {
    if CONFIG.is_logging_enabled() {
        wasm_logger::init(wasm_logger::Config::default());
    }
    console_error_panic_hook::set_once();
    log::info!("MedVerse portal starting ({})", CONFIG.environment);

    yew::Renderer::<App>::new().render();
}
