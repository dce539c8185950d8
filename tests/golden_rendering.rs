use std::fs;
use std::path::PathBuf;

use certforge::{CertConfig, ExportFormat, Prefix, Session};

fn golden_path(name: &str) -> PathBuf {
    let mut p = PathBuf::from("tests/goldens/expected");
    p.push(name);
    p
}

// Artifact bytes depend on the machine's font database, so the golden is
// generated per checkout rather than committed.
#[tokio::test]
async fn golden_certificate_jpeg_matches_fixture() {
    let config = CertConfig {
        font_path: None,
        output_dir: std::env::temp_dir().join(format!("certforge-golden-{}", std::process::id())),
    };
    let mut session = Session::new(config).await.expect("create session");
    session.set_prefix(Some(Prefix::Khun));
    session.set_first_name("ทดสอบ");
    session.set_last_name("ระบบ");
    session.submit().await.expect("submit");

    let artifact = session
        .export(ExportFormat::Jpeg)
        .await
        .expect("export")
        .expect("artifact");

    let expected_path = golden_path("certificate.img");
    if std::env::var("UPDATE_GOLDENS").is_ok() {
        fs::create_dir_all("tests/goldens/expected").ok();
        fs::write(&expected_path, hex::encode(&artifact.bytes)).expect("write golden");
        println!("Updated golden: {:?}", expected_path);
        return;
    }

    if !expected_path.exists() {
        println!(
            "No golden at {:?}; run with UPDATE_GOLDENS=1 to create it. Skipping.",
            expected_path
        );
        return;
    }

    let exp = fs::read_to_string(&expected_path).expect("unable to read golden");
    let exp_bytes = hex::decode(exp.trim()).expect("invalid hex in golden");
    assert_eq!(artifact.bytes, exp_bytes);
}
