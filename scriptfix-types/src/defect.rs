use serde::{Deserialize, Serialize};

/// A known corruption left behind by the script generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DefectKind {
    /// A quoted base URL with a local filesystem path glued onto it.
    MalformedUrl,
    /// A line carrying a markdown code fence marker.
    StrayFence,
}

impl DefectKind {
    pub const ALL: [DefectKind; 2] = [DefectKind::MalformedUrl, DefectKind::StrayFence];

    /// Stable identifier, used in reports.
    pub fn id(self) -> &'static str {
        match self {
            DefectKind::MalformedUrl => "url.malformed_literal",
            DefectKind::StrayFence => "markdown.stray_fence",
        }
    }

    /// Short user-facing key (CLI).
    pub fn key(self) -> &'static str {
        match self {
            DefectKind::MalformedUrl => "malformed-url",
            DefectKind::StrayFence => "stray-fence",
        }
    }
}

/// Per-kind repair counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefectCounts {
    pub malformed_url: u64,
    pub stray_fence: u64,
}

impl DefectCounts {
    pub fn add(&mut self, kind: DefectKind, n: u64) {
        match kind {
            DefectKind::MalformedUrl => self.malformed_url += n,
            DefectKind::StrayFence => self.stray_fence += n,
        }
    }

    pub fn get(&self, kind: DefectKind) -> u64 {
        match kind {
            DefectKind::MalformedUrl => self.malformed_url,
            DefectKind::StrayFence => self.stray_fence,
        }
    }

    pub fn merge(&mut self, other: &DefectCounts) {
        for kind in DefectKind::ALL {
            self.add(kind, other.get(kind));
        }
    }

    pub fn total(&self) -> u64 {
        self.malformed_url + self.stray_fence
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_merge_per_kind() {
        let mut a = DefectCounts::default();
        a.add(DefectKind::MalformedUrl, 2);

        let mut b = DefectCounts::default();
        b.add(DefectKind::StrayFence, 3);
        b.add(DefectKind::MalformedUrl, 1);

        a.merge(&b);
        assert_eq!(a.get(DefectKind::MalformedUrl), 3);
        assert_eq!(a.get(DefectKind::StrayFence), 3);
        assert_eq!(a.total(), 6);
        assert!(!a.is_empty());
    }

    #[test]
    fn ids_and_keys_are_distinct() {
        assert_ne!(DefectKind::MalformedUrl.id(), DefectKind::StrayFence.id());
        assert_ne!(DefectKind::MalformedUrl.key(), DefectKind::StrayFence.key());
    }
}
