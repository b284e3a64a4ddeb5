//! # Certificate issuance
//!
//! One-shot batch over the roster. Per member:
//!
//! 1. Generate a fresh certificate id.
//! 2. Render the QR code pointing at the verification page for that id.
//! 3. Insert the row into the hosted certificate table.
//!
//! A failure on one member is printed and skipped so it cannot sink the rest
//! of the batch. There is no resume: rerunning the batch issues fresh ids and
//! fresh rows rather than reconciling with earlier runs.
use std::{env, fs, path::Path};

use indicatif::{ProgressBar, ProgressStyle};
use registry::{CertificateStore, NewCertificate};
use uuid::Uuid;

pub mod qr;
pub mod roster;
pub mod utils;

use qr::render_qr;
use roster::ROSTER;
use utils::slugify;

pub async fn issue_certificates(base_url: &str, out_dir: &Path) {
    let store = CertificateStore::new(
        &env::var("DATABASE_URL").expect("DATABASE_URL not set"),
        &env::var("DATABASE_KEY").expect("DATABASE_KEY not set"),
    );

    fs::create_dir_all(out_dir).expect("Cannot create QR output directory");

    println!("Loaded roster: {} members\n", ROSTER.len());

    let pb = ProgressBar::new(ROSTER.len() as u64);
    pb.set_style(
        ProgressStyle::with_template(
            "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}",
        )
        .unwrap()
        .progress_chars("=> "),
    );

    let base_url = base_url.trim_end_matches('/');

    let mut issued = 0;
    let mut failed = 0;

    for member in ROSTER {
        pb.set_message(format!("Issuing {}", member.name));

        let certificate_id = Uuid::new_v4();
        let verification_url = format!("{base_url}/{certificate_id}");
        let slug = slugify(member.name);

        let qr_path = out_dir.join(format!("{slug}_qr.png"));
        if let Err(e) = render_qr(&verification_url, &qr_path) {
            println!("Failed to render QR for {}: {e}", member.name);

            failed += 1;
            pb.inc(1);
            continue;
        }

        let record = NewCertificate {
            member_name: member.name.to_string(),
            member_team: member.team.to_string(),
            certificate_id,
            certificate_image_url: format!("https://example.com/certs/{slug}.pdf"),
            verification_url,
        };

        match store.insert(&record).await {
            Ok(_row) => {
                #[cfg(feature = "verbose")]
                println!("Inserted {} as {}", _row.member_name, _row.certificate_id);

                issued += 1;
            }
            Err(e) => {
                println!("Failed to insert {}: {e}", member.name);

                failed += 1;
            }
        }

        pb.inc(1);
    }

    pb.finish_with_message("Done");

    println!("\nIssued: {issued}");
    println!("Failed: {failed}");
}
