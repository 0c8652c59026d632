use folio_web::App;
use tracing::Level;

fn main() {
    // Default to info; the browser console is the only sink on web.
    if let Err(e) = dioxus::logger::init(Level::INFO) {
        eprintln!("Logger already initialized: {e}");
    }
    tracing::info!("Starting folio demo");
    dioxus::launch(App);
}
