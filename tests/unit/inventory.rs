//! Tests for the SMBIOS identifier source

use anyhow::Result;
use cloud_ident::inventory::{IdentifierSource, SmbiosSource, StaticSource};
use std::fs;
use tempfile::TempDir;

#[test]
fn reads_identifiers_from_sysfs_style_files() -> Result<()> {
    let dir = TempDir::new()?;
    let hypervisor = dir.path().join("hypervisor_uuid");
    let product = dir.path().join("product_uuid");
    fs::write(&hypervisor, "ec2f8a35-4ba5-0cbf-63f6-34c0e9e7a2fd\n")?;
    fs::write(&product, "  4c4c4544-0042-3510-8054-c04f32343632 \n")?;

    let source = SmbiosSource::new(vec![hypervisor, product]);
    let identifiers = source.identifiers()?;

    // values are trimmed and returned in path order
    assert_eq!(
        identifiers,
        vec![
            "ec2f8a35-4ba5-0cbf-63f6-34c0e9e7a2fd".to_string(),
            "4c4c4544-0042-3510-8054-c04f32343632".to_string(),
        ]
    );

    Ok(())
}

#[test]
fn missing_and_empty_entries_are_skipped() -> Result<()> {
    let dir = TempDir::new()?;
    let empty = dir.path().join("empty_uuid");
    fs::write(&empty, "\n")?;
    let missing = dir.path().join("does_not_exist");

    let source = SmbiosSource::new(vec![empty, missing]);
    let identifiers = source.identifiers()?;

    assert!(identifiers.is_empty());

    Ok(())
}

#[test]
fn static_source_returns_fixed_list() -> Result<()> {
    let source = StaticSource::new(vec!["ec2f8a35".to_string(), "other".to_string()]);
    let identifiers = source.identifiers()?;

    assert_eq!(identifiers, vec!["ec2f8a35".to_string(), "other".to_string()]);

    Ok(())
}
