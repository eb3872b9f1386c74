use order_flow::{MemoryReporter, OrderRequest, ValidationPolicy, WiringConfig};
use std::io::Write;
use std::sync::Arc;
use tempfile::NamedTempFile;

#[test]
fn test_wiring_file_selects_variants() {
    let mut temp_file = NamedTempFile::new().unwrap();
    let toml_content = r#"
[order]
kind = "standard"

[invoice]
kind = "format"
extension = "html"

[notifier]
kind = "email"
"#;
    temp_file.write_all(toml_content.as_bytes()).unwrap();

    let config = WiringConfig::from_file(temp_file.path()).unwrap();
    let reporter = MemoryReporter::new();
    let manager = config.build_manager(Arc::new(reporter.clone())).unwrap();

    manager.process(&OrderRequest::demo()).unwrap();

    assert_eq!(
        reporter.lines(),
        vec![
            "Order total: $20.0",
            "Order placed for: John Doe at 123 Main St",
            "Invoice generated: order_123.html",
            "Email notification sent to: johndoe@example.com",
        ]
    );
}

#[test]
fn test_default_wiring_reproduces_demo_output() {
    let reporter = MemoryReporter::new();
    let manager = WiringConfig::default()
        .build_manager(Arc::new(reporter.clone()))
        .unwrap();

    manager.process(&OrderRequest::demo()).unwrap();
    manager.process(&OrderRequest::demo()).unwrap();

    let lines = reporter.lines();
    assert_eq!(lines.len(), 8);
    assert_eq!(lines[..4], lines[4..]);
}

#[test]
fn test_strict_wiring_rejects_negative_price() {
    let config = WiringConfig::from_toml_str("[validation]\nstrict = true\n").unwrap();
    let reporter = MemoryReporter::new();
    let manager = config.build_manager(Arc::new(reporter.clone())).unwrap();

    assert_eq!(manager.policy(), ValidationPolicy::Strict);
    assert!(manager
        .process(&OrderRequest::new(-10.0, 2, "A", "B", "c.pdf", "d@e.f"))
        .is_err());
    assert!(reporter.lines().is_empty());
}

#[test]
fn test_out_of_range_surcharge_is_rejected() {
    let config =
        WiringConfig::from_toml_str("[order]\nkind = \"surcharge\"\npercent = 5000.0\n").unwrap();

    assert!(config
        .build_manager(Arc::new(MemoryReporter::new()))
        .is_err());
}
