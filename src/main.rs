use std::path::Path;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Diagrams land next to the sources that describe them
    let out_dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("docs/diagrams");

    match katsuyou::render_conjugation(&out_dir) {
        Ok(_) => println!("Generated to: {}", out_dir.display()),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
