use serde::{Deserialize, Serialize};

use super::node::UNKNOWN_SCHEME;

/// Count of nodes seen for one scheme (or family label)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProtocolCount {
    pub scheme: String,
    pub count: usize,
}

/// Scheme -> count, iterated in first-seen order
///
/// Only the counts are meaningful; the order just keeps output stable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProtocolTally {
    entries: Vec<ProtocolCount>,
}

impl ProtocolTally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Increment the counter for `scheme`
    pub fn record(&mut self, scheme: &str) {
        self.add(scheme, 1);
    }

    fn add(&mut self, scheme: &str, count: usize) {
        match self.entries.iter_mut().find(|e| e.scheme == scheme) {
            Some(entry) => entry.count += count,
            None => self.entries.push(ProtocolCount {
                scheme: scheme.to_string(),
                count,
            }),
        }
    }

    /// Count for `scheme`, zero if never recorded
    pub fn get(&self, scheme: &str) -> usize {
        self.entries
            .iter()
            .find(|e| e.scheme == scheme)
            .map_or(0, |e| e.count)
    }

    /// Sum of all counters
    pub fn total(&self) -> usize {
        self.entries.iter().map(|e| e.count).sum()
    }

    /// Number of distinct schemes
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ProtocolCount> {
        self.entries.iter()
    }

    /// Fold schemes into their [`ProtocolFamily`] labels, keeping first-seen order
    pub fn by_family(&self) -> ProtocolTally {
        let mut families = ProtocolTally::new();
        for entry in &self.entries {
            families.add(ProtocolFamily::from_scheme(&entry.scheme).label(), entry.count);
        }
        families
    }
}

/// Coarse protocol family of a node scheme
///
/// Folds the aliases proxy clients accept (`hy2`, `socks5`, `https`, ...) into
/// one label per protocol.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProtocolFamily {
    Vless,
    Vmess,
    Trojan,
    Hysteria2,
    AnyTls,
    Tuic,
    Naive,
    WireGuard,
    Shadowsocks,
    Socks,
    Http,
    #[default]
    Unknown,
}

impl ProtocolFamily {
    /// Case-insensitive lookup of a scheme
    pub fn from_scheme(scheme: &str) -> Self {
        match scheme.to_ascii_lowercase().as_str() {
            "vless" => ProtocolFamily::Vless,
            "vmess" => ProtocolFamily::Vmess,
            "trojan" => ProtocolFamily::Trojan,
            "hysteria2" | "hy2" => ProtocolFamily::Hysteria2,
            "anytls" => ProtocolFamily::AnyTls,
            "tuic" => ProtocolFamily::Tuic,
            "naive" | "naive+https" => ProtocolFamily::Naive,
            "wireguard" => ProtocolFamily::WireGuard,
            "ss" => ProtocolFamily::Shadowsocks,
            "socks" | "socks4" | "socks5" => ProtocolFamily::Socks,
            "http" | "https" => ProtocolFamily::Http,
            _ => ProtocolFamily::Unknown,
        }
    }

    /// Canonical scheme-style label used in reports
    pub fn label(&self) -> &'static str {
        match self {
            ProtocolFamily::Vless => "vless",
            ProtocolFamily::Vmess => "vmess",
            ProtocolFamily::Trojan => "trojan",
            ProtocolFamily::Hysteria2 => "hysteria2",
            ProtocolFamily::AnyTls => "anytls",
            ProtocolFamily::Tuic => "tuic",
            ProtocolFamily::Naive => "naive",
            ProtocolFamily::WireGuard => "wireguard",
            ProtocolFamily::Shadowsocks => "ss",
            ProtocolFamily::Socks => "socks",
            ProtocolFamily::Http => "http",
            ProtocolFamily::Unknown => UNKNOWN_SCHEME,
        }
    }
}

impl std::fmt::Display for ProtocolFamily {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
