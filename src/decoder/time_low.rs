use byteorder::{ByteOrder, LittleEndian};

/// Re-render the leading UUID field with its byte order reversed.
///
/// SMBIOS implementations disagree on how the UUID time_low field (the first
/// 4-byte segment) is stored: some firmware renders it big-endian as the
/// string suggests, some little-endian. This helper decodes the first
/// dash-delimited field as hex, reads it as a little-endian u32 and renders
/// the result as lowercase hex without extra zero padding.
///
/// Returns `None` when no alternate form is available: non-hex characters,
/// an odd-length field, or fewer than 4 decoded bytes. Callers treat that as
/// "no match", not as a failure.
///
/// ref. https://docs.aws.amazon.com/AWSEC2/latest/UserGuide/identify_ec2_instances.html
pub fn reversed_time_low_hex(identifier: &str) -> Option<String> {
    let field = identifier.split('-').next()?;
    let decoded = hex::decode(field).ok()?;
    if decoded.len() < 4 {
        return None;
    }
    let value = LittleEndian::read_u32(&decoded);
    Some(format!("{:x}", value))
}
