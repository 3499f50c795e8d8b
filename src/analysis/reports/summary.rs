//! Census summary and node list formatters

use super::utils::export_json;
use super::OutputFormat;
use crate::errors::AppResult;
use crate::types::{NodeList, SubscriptionSummary};

/// Format the census summary
///
/// Console layout: total line, `Protocol counts:` with one indented
/// `scheme: count` line each, a blank line, then the node preview.
pub fn format_summary(summary: &SubscriptionSummary, format: &OutputFormat) -> AppResult<String> {
    match format {
        OutputFormat::Console => {
            let mut output = format!("Total nodes found in Base64: {}\n", summary.total);

            output.push_str("Protocol counts:\n");
            for entry in summary.protocol_counts.iter() {
                output.push_str(&format!("  {}: {}\n", entry.scheme, entry.count));
            }

            output.push_str(&format!("\nFirst {} nodes:\n", summary.preview_limit));
            for node in &summary.preview {
                output.push_str(node);
                output.push('\n');
            }

            Ok(output)
        }
        OutputFormat::Json => export_json(summary),
    }
}

/// Format every retained node line
pub fn format_node_list(nodes: &NodeList, format: &OutputFormat) -> AppResult<String> {
    match format {
        OutputFormat::Console => {
            let mut output = String::new();
            for node in nodes {
                output.push_str(node);
                output.push('\n');
            }
            Ok(output)
        }
        OutputFormat::Json => export_json(nodes),
    }
}
