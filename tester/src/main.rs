use std::path::Path;

use issuer::{qr::render_qr, utils::slugify};
use uuid::Uuid;

fn main() {
    let certificate_id = Uuid::new_v4();
    let url = format!("https://certify.example.com/verify/{certificate_id}");

    let path = format!("../{}_qr.png", slugify("Test Member"));
    render_qr(&url, Path::new(&path)).unwrap();

    println!("{url}");
    println!("QR written to {path}");
}
