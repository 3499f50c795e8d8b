//! Subscription census analysis
//!
//! The analysis module turns decoded subscription text into a
//! [`SubscriptionSummary`] and renders it through the [`ReportFormatter`].
//!
//! ## Overview
//!
//! - **Tokenising** - split decoded text into trimmed, non-empty node lines
//! - **Protocol Statistics** - per-scheme counts and family regrouping
//! - **Report Generation** - formatted output for console and JSON export
//!
//! ## Usage
//!
//! ```rust,no_run
//! use subscription_census::analysis::{CensusEngine, OutputFormat, ReportFormatter};
//! use subscription_census::errors::AppResult;
//!
//! fn example() -> AppResult<()> {
//!     let engine = CensusEngine::new("./subscription_base64.txt")?;
//!     let summary = engine.summarise(5);
//!     print!("{}", ReportFormatter::format_summary(&summary, &OutputFormat::Console)?);
//!     Ok(())
//! }
//! ```

pub mod node_list;
pub mod protocol_stats;
pub mod reports;

pub use node_list::tokenise;
pub use protocol_stats::{summarise, tally_protocols};
pub use reports::{OutputFormat, ReportFormatter};

use crate::decoder;
use crate::errors::AppResult;
use crate::types::{NodeList, SubscriptionSummary};
use std::path::Path;
use tracing::info;

/// Decoded subscription held in memory, ready for analysis
///
/// Construction performs all fallible work (load, pad, decode); everything
/// after that is infallible, so a report is never half-built.
pub struct CensusEngine {
    nodes: NodeList,
}

impl CensusEngine {
    /// Load and decode the subscription file at `path`
    pub fn new(path: impl AsRef<Path>) -> AppResult<Self> {
        let decoded = decoder::load_and_decode(path.as_ref())?;
        Ok(Self::from_decoded(&decoded))
    }

    /// Build an engine from already-decoded node text
    pub fn from_decoded(decoded: &str) -> Self {
        let nodes = tokenise(decoded);
        info!("Found {} nodes", nodes.len());
        Self { nodes }
    }

    /// All retained node lines in decoded order
    pub fn nodes(&self) -> &NodeList {
        &self.nodes
    }

    /// Total, per-scheme counts and the first `preview_limit` nodes
    pub fn summarise(&self, preview_limit: usize) -> SubscriptionSummary {
        summarise(&self.nodes, preview_limit)
    }
}

/// Run the full pipeline (load, pad, decode, tokenise, classify) for one file
pub fn analyse_subscription(
    path: impl AsRef<Path>,
    preview_limit: usize,
) -> AppResult<SubscriptionSummary> {
    Ok(CensusEngine::new(path)?.summarise(preview_limit))
}
