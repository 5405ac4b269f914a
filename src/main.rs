#[tokio::main]
async fn main() {
    if let Err(e) = cloud_ident::cli::run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
