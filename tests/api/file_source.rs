use anyhow::Result;
use payment_picker::api::{methods, CustomerId, FileSource, PaymentMethodSource};
use std::path::PathBuf;

fn fixture(name: &str, content: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("payment-picker-{}-{}.json", name, std::process::id()));
    std::fs::write(&path, content).unwrap();
    path
}

#[tokio::test]
async fn test_file_source_reads_envelope() -> Result<()> {
    let path = fixture(
        "envelope",
        r#"{"data": [
            {"id": 1, "name": "Cash", "is_default": true},
            {"id": 7, "name": "ACH", "is_default_merchant": true}
        ]}"#,
    );

    let options = FileSource::new(&path)
        .fetch_payment_methods(&CustomerId::new("1"))
        .await?;
    std::fs::remove_file(&path).ok();

    assert_eq!(options.len(), 2);
    assert_eq!(options[0].id, methods::CASH);
    assert_eq!(options[1].id, methods::ACH);
    assert!(options[1].is_default_merchant);
    Ok(())
}

#[tokio::test]
async fn test_file_source_rejects_malformed_json() {
    let path = fixture("malformed", r#"{"data": "nope"}"#);
    let result = FileSource::new(&path)
        .fetch_payment_methods(&CustomerId::new("1"))
        .await;
    std::fs::remove_file(&path).ok();

    let error = result.unwrap_err();
    assert!(format!("{:#}", error).contains("Failed to parse payment methods file"));
}
