use seller_hub_pwa::components::App;

fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("🛍️ Seller Hub arrancando...");

    yew::Renderer::<App>::new().render();
}
