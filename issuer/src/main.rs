use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Base URL of the deployed verification page.
    #[arg(long, default_value = "https://certify.example.com/verify")]
    base_url: String,

    /// Directory the QR images are written to.
    #[arg(long, default_value = "qr_codes")]
    out_dir: PathBuf,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    issuer::issue_certificates(&args.base_url, &args.out_dir).await;
}
