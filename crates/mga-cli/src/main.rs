//! Thin entrypoint for the `mga` catalog CLI.

#[tokio::main]
async fn main() {
    let code = mga_cli::run().await;
    std::process::exit(code);
}
