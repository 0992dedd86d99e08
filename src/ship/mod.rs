//! Static flavor tables for the ship: docks, garden, cannons, restricted areas.
//!
//! Every table is a `const` slice of [`ShipRecord`]; lookup accepts an index,
//! a key/alias, a substring, or a near-miss spelling.

pub mod areas;
pub mod cannons;
pub mod docks;
pub mod garden;

/// One immutable entry of a flavor table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShipRecord {
    pub key: &'static str,
    pub aliases: &'static [&'static str],
    pub title: &'static str,
    pub description: &'static str,
    pub launch_message: &'static str,
}

impl ShipRecord {
    fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        std::iter::once(self.key).chain(self.aliases.iter().copied())
    }
}

/// A named flavor table.
#[derive(Debug, Clone, Copy)]
pub struct ShipTable {
    pub name: &'static str,
    pub records: &'static [ShipRecord],
}

impl ShipTable {
    pub const fn new(name: &'static str, records: &'static [ShipRecord]) -> Self {
        Self { name, records }
    }

    pub fn iter(&self) -> impl Iterator<Item = &'static ShipRecord> {
        self.records.iter()
    }

    /// Find a record by position, exact name, substring, or fuzzy spelling.
    pub fn lookup(&self, query: &str) -> Option<&'static ShipRecord> {
        let q = normalize(query);
        if q.is_empty() {
            return None;
        }

        if let Ok(index) = q.parse::<usize>() {
            return self.records.get(index);
        }

        // Exact match first
        for record in self.records {
            if record.names().any(|name| name == q) {
                return Some(record);
            }
        }

        // Substring match
        for record in self.records {
            if record.names().any(|name| name.contains(&q) || q.contains(name)) {
                return Some(record);
            }
        }

        // Fuzzy match (edit distance <= 2)
        let mut best: Option<(&'static ShipRecord, usize)> = None;
        for record in self.records {
            for name in record.names() {
                let dist = edit_distance(&q, name);
                if dist <= 2 && best.map_or(true, |(_, d)| dist < d) {
                    best = Some((record, dist));
                }
            }
        }

        best.map(|(record, _)| record)
    }
}

/// Lowercase, trim, and treat spaces/underscores as hyphens.
fn normalize(query: &str) -> String {
    query
        .trim()
        .to_lowercase()
        .split(|c: char| c.is_whitespace() || c == '_' || c == '-')
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}

/// Compute edit distance between two strings (Levenshtein).
fn edit_distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let (m, n) = (a.len(), b.len());

    let mut prev = (0..=n).collect::<Vec<_>>();
    let mut curr = vec![0; n + 1];

    for i in 1..=m {
        curr[0] = i;
        for j in 1..=n {
            let cost = if a[i - 1] == b[j - 1] { 0 } else { 1 };
            curr[j] = (prev[j] + 1).min(curr[j - 1] + 1).min(prev[j - 1] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    prev[n]
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: ShipTable = ShipTable::new(
        "sample",
        &[
            ShipRecord {
                key: "lion-head",
                aliases: &["figurehead"],
                title: "Lion Head",
                description: "",
                launch_message: "",
            },
            ShipRecord {
                key: "aquarium-bar",
                aliases: &["aquarium"],
                title: "Aquarium Bar",
                description: "",
                launch_message: "",
            },
        ],
    );

    #[test]
    fn test_lookup_by_index() {
        assert_eq!(SAMPLE.lookup("1").unwrap().key, "aquarium-bar");
        assert!(SAMPLE.lookup("7").is_none());
    }

    #[test]
    fn test_lookup_exact_and_alias() {
        assert_eq!(SAMPLE.lookup("Lion Head").unwrap().key, "lion-head");
        assert_eq!(SAMPLE.lookup("FIGUREHEAD").unwrap().key, "lion-head");
    }

    #[test]
    fn test_lookup_substring() {
        assert_eq!(SAMPLE.lookup("bar").unwrap().key, "aquarium-bar");
    }

    #[test]
    fn test_lookup_fuzzy() {
        assert_eq!(SAMPLE.lookup("figurhead").unwrap().key, "lion-head");
    }

    #[test]
    fn test_lookup_miss() {
        assert!(SAMPLE.lookup("xyznothing").is_none());
        assert!(SAMPLE.lookup("   ").is_none());
    }

    #[test]
    fn test_normalize() {
        assert_eq!(normalize("  Coup de  Burst "), "coup-de-burst");
        assert_eq!(normalize("pop_greens"), "pop-greens");
    }

    #[test]
    fn test_edit_distance() {
        assert_eq!(edit_distance("kitten", "sitting"), 3);
        assert_eq!(edit_distance("merry", "mery"), 1);
        assert_eq!(edit_distance("abc", "abc"), 0);
    }
}
