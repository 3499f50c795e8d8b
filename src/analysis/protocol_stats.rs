//! Protocol tally and summary construction
//!
//! Pure functions over an in-memory [`NodeList`]; no I/O happens here.

use crate::types::{classify_scheme, NodeList, ProtocolTally, SubscriptionSummary, TallyGrouping};
use tracing::debug;

/// Count nodes per scheme prefix
pub fn tally_protocols(nodes: &NodeList) -> ProtocolTally {
    let mut tally = ProtocolTally::new();
    for node in nodes.iter() {
        tally.record(classify_scheme(node));
    }
    debug!(
        "Tallied {} nodes into {} distinct schemes",
        nodes.len(),
        tally.len()
    );
    tally
}

/// Build the census summary: total, per-scheme counts, first `preview_limit` nodes
pub fn summarise(nodes: &NodeList, preview_limit: usize) -> SubscriptionSummary {
    SubscriptionSummary {
        total: nodes.len(),
        grouping: TallyGrouping::Scheme,
        protocol_counts: tally_protocols(nodes),
        preview_limit,
        preview: nodes.head(preview_limit).to_vec(),
    }
}
