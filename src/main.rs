#[cfg(not(target_arch = "wasm32"))]
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    terminal_portfolio::server::run().await
}

#[cfg(target_arch = "wasm32")]
fn main() {
    terminal_portfolio::frontend::run();
}
