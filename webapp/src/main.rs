mod app;
mod components;
mod config;

use app::App;
use web_sys::console;

fn main() {
    // Panic messages go to the browser console in debug builds.
    #[cfg(debug_assertions)]
    console_error_panic_hook::set_once();

    if console_log::init_with_level(config::LOG_LEVEL).is_err() {
        console::warn_1(&"logger already initialized".into());
    }

    yew::Renderer::<App>::new().render();
    log::info!("mounted {}", config::PAGE_TITLE);
}
