use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// One page's accessibility-scan result as produced by the scanner.
///
/// `total_violations` and the sum of `violations_by_rule` are independently
/// supplied by the scanner and are never cross-validated here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanRecord {
    /// Address of the scanned page; doubles as the stable per-page id.
    pub page_url: String,
    /// ISO-8601-ish scan time, kept exactly as the scanner wrote it.
    pub timestamp: String,
    #[serde(default)]
    pub total_violations: u64,
    #[serde(default)]
    pub violations_by_rule: RuleCounts,
}

impl ScanRecord {
    /// Rules sorted by count descending. The sort is stable, so rules with
    /// equal counts keep the order the scanner emitted them in.
    pub fn ranked_rules(&self) -> Vec<(&str, u64)> {
        let mut rules: Vec<_> = self.violations_by_rule.iter().collect();
        rules.sort_by(|a, b| b.1.cmp(&a.1));
        rules
    }

    /// The `n` most-violated rules, same ordering as [`ranked_rules`].
    ///
    /// [`ranked_rules`]: Self::ranked_rules
    pub fn top_rules(&self, n: usize) -> Vec<(&str, u64)> {
        let mut ranked = self.ranked_rules();
        ranked.truncate(n);
        ranked
    }
}

/// Rule-name to violation-count map that keeps JSON insertion order.
///
/// Ranking ties are broken by the order the scanner emitted the rules, so a
/// hash map would scramble the tie-break.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleCounts(Vec<(String, u64)>);

impl RuleCounts {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.0.iter().map(|(rule, count)| (rule.as_str(), *count))
    }
}

impl FromIterator<(String, u64)> for RuleCounts {
    fn from_iter<I: IntoIterator<Item = (String, u64)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Serialize for RuleCounts {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (rule, count) in &self.0 {
            map.serialize_entry(rule, count)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for RuleCounts {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct RuleCountsVisitor;

        impl<'de> Visitor<'de> for RuleCountsVisitor {
            type Value = RuleCounts;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of rule name to violation count")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((rule, count)) = access.next_entry::<String, u64>()? {
                    entries.push((rule, count));
                }
                Ok(RuleCounts(entries))
            }
        }

        deserializer.deserialize_map(RuleCountsVisitor)
    }
}
