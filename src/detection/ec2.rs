use crate::decoder::reversed_time_low_hex;
use crate::inventory::IdentifierSource;
use crate::probe::{ConfirmationProber, MetadataTransport};
use tokio::time::Instant;
use tracing::{debug, warn};

/// UUID prefix reported by EC2 instances in either byte order.
const EC2_UUID_PREFIX: &[u8] = b"ec2";

/// Heuristic classifier: does this hardware identifier look EC2-ish?
///
/// Matches when the literal value starts with the EC2 prefix
/// (case-insensitively), or when the byte-order-reversed rendering of its
/// first field does. The double check covers firmware that stores the UUID
/// time_low field little-endian.
///
/// Pure function: no I/O, always returns.
pub fn looks_like_ec2(identifier: &str) -> bool {
    if has_ec2_prefix(identifier) {
        return true;
    }
    match reversed_time_low_hex(identifier) {
        Some(swapped) => has_ec2_prefix(&swapped),
        None => false,
    }
}

fn has_ec2_prefix(candidate: &str) -> bool {
    let bytes = candidate.as_bytes();
    bytes.len() >= EC2_UUID_PREFIX.len()
        && bytes[..EC2_UUID_PREFIX.len()].eq_ignore_ascii_case(EC2_UUID_PREFIX)
}

/// Detection orchestrator: combines a batch of hardware identifiers with
/// the classifier and at most one confirmation probe into the final
/// boolean decision.
pub struct Ec2Detector<S, T>
where
    S: IdentifierSource,
    T: MetadataTransport,
{
    source: S,
    prober: ConfirmationProber<T>,
}

impl<S, T> Ec2Detector<S, T>
where
    S: IdentifierSource,
    T: MetadataTransport,
{
    pub fn new(source: S, prober: ConfirmationProber<T>) -> Self {
        Self { source, prober }
    }

    /// Query the platform source and decide whether this host is EC2.
    ///
    /// A source failure degrades to a negative decision: detection must
    /// never abort the agent's startup path.
    pub async fn detect(&self, deadline: Instant) -> bool {
        let identifiers = match self.source.identifiers() {
            Ok(identifiers) => identifiers,
            Err(e) => {
                warn!("hardware identifier query failed: {}", e);
                return false;
            }
        };
        self.detect_with_identifiers(deadline, &identifiers).await
    }

    /// Decide over an already-collected identifier batch.
    ///
    /// Identifiers are classified in the supplied order and the first match
    /// wins. An empty batch or no match resolves to false without any
    /// network access; a match triggers exactly one confirmation probe for
    /// the whole batch.
    pub async fn detect_with_identifiers(
        &self,
        deadline: Instant,
        identifiers: &[String],
    ) -> bool {
        match identifiers.iter().find(|id| looks_like_ec2(id.as_str())) {
            Some(identifier) => {
                debug!(
                    "identifier {} looks EC2-ish, confirming against metadata endpoint",
                    identifier
                );
                self.prober.confirm(deadline).await
            }
            None => false,
        }
    }
}
