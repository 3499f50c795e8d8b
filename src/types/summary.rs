//! Census result types

use super::protocol::ProtocolTally;
use serde::{Deserialize, Serialize};

/// How the protocol tally is keyed in a report
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TallyGrouping {
    /// Raw scheme prefix (`hy2` and `hysteria2` counted separately)
    #[default]
    Scheme,
    /// Folded into protocol families
    Family,
}

/// Structured result of one census run, independent of how it is printed
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubscriptionSummary {
    /// Number of non-empty node lines
    pub total: usize,
    pub grouping: TallyGrouping,
    pub protocol_counts: ProtocolTally,
    /// Requested preview size; `preview` holds `min(preview_limit, total)` nodes
    pub preview_limit: usize,
    pub preview: Vec<String>,
}

impl SubscriptionSummary {
    /// Same summary with the tally folded into protocol families
    pub fn grouped_by_family(self) -> Self {
        if self.grouping == TallyGrouping::Family {
            return self;
        }
        Self {
            protocol_counts: self.protocol_counts.by_family(),
            grouping: TallyGrouping::Family,
            ..self
        }
    }
}
