//! Overload numbering for generated identifiers

use indexmap::{IndexMap, IndexSet};
use tracing::{debug, warn};

/// Tracks how often each function name has been seen during one run.
///
/// The first occurrence of a name keeps it unchanged, the Nth repeat gets the
/// suffix `_N`. Numbering therefore depends on the order names are resolved
/// in, which must be the input order.
#[derive(Debug, Default)]
pub struct OverloadRegistry {
    counts: IndexMap<String, u32>,
    emitted: IndexSet<String>,
}

impl OverloadRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve the identifier for the next occurrence of `name`
    pub fn resolve(&mut self, name: &str) -> String {
        let resolved = match self.counts.get_mut(name) {
            Some(count) => {
                *count += 1;
                let resolved = format!("{}_{}", name, count);
                debug!("Overload {} of {} resolved to {}", count, name, resolved);
                resolved
            }
            None => {
                self.counts.insert(name.to_string(), 0);
                name.to_string()
            }
        };

        if !self.emitted.insert(resolved.clone()) {
            warn!(
                "Identifier {} was already generated, the headers will contain a duplicate",
                resolved
            );
        }

        resolved
    }

    /// Base names seen more than once, in first-seen order
    pub fn overloaded_names(&self) -> impl Iterator<Item = (&str, u32)> + '_ {
        self.counts
            .iter()
            .filter(|(_, count)| **count > 0)
            .map(|(name, count)| (name.as_str(), count + 1))
    }

    /// Number of distinct base names
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}
