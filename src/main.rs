#[cfg(feature = "yew")]
fn main() {
    use legal_assistant_ui::config::Config;
    use legal_assistant_ui::dom;

    wasm_logger::init(
        wasm_logger::Config::new(log::Level::Debug).module_prefix("legal_assistant_ui"),
    );

    let ready = dom::when_ready(|| match dom::start(Config::new()) {
        Ok(page) => page.forget(),
        Err(err) => log::error!("Failed to bind page behaviors: {}", err),
    });
    if let Err(err) = ready {
        log::error!("No document to bind to: {}", err);
    }
}

#[cfg(not(feature = "yew"))]
fn main() {
    println!("Please enable the 'yew' feature to run the app.");
}
