//! Upsert/delete over a section's ordered entries.
//!
//! Every function takes the current entries by reference and returns the next
//! ones; callers swap the result in.

use tracing::debug;

use crate::error::EngineError;
use crate::shape::{Delimiter, EntityShape, InsertPosition};

/// Splits a delimited list field, trimming segments and dropping empty ones.
pub fn split_list(input: &str, delimiter: Delimiter) -> Vec<String> {
    input
        .split(delimiter.as_char())
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

pub fn join_list(items: &[String], delimiter: Delimiter) -> String {
    items.join(delimiter.joiner())
}

/// Next entries after an upsert, and whether the submitted entry is among them.
#[derive(Debug, Clone, PartialEq)]
pub struct Upserted<E> {
    pub entries: Vec<E>,
    pub stored: bool,
}

/// Inserts or replaces `entry`.
///
/// With `target` set, the first entry keyed `target` is replaced in place; a
/// missing target leaves the entries unchanged and reports `stored: false`.
/// Without a target the entry is added at the section's insert position. An
/// entry whose key is already used by a different entry is refused.
pub fn upsert<E: EntityShape>(
    entries: &[E],
    entry: E,
    target: Option<&str>,
) -> Result<Upserted<E>, EngineError> {
    let collides = entries
        .iter()
        .any(|e| e.key() == entry.key() && Some(e.key()) != target);
    if collides {
        return Err(EngineError::DuplicateKey {
            section: E::SECTION,
            key: entry.key().to_string(),
        });
    }

    let mut next = entries.to_vec();
    let stored = match target {
        Some(target) => match next.iter().position(|e| e.key() == target) {
            Some(idx) => {
                next[idx] = entry;
                true
            }
            None => {
                debug!(section = E::SECTION, key = target, "edit target gone, nothing replaced");
                false
            }
        },
        None => {
            match E::INSERT {
                InsertPosition::Append => next.push(entry),
                InsertPosition::Prepend => next.insert(0, entry),
            }
            true
        }
    };
    Ok(Upserted {
        entries: next,
        stored,
    })
}

/// Removes every entry keyed `key`.
pub fn delete<E: EntityShape>(entries: &[E], key: &str) -> Vec<E> {
    entries.iter().filter(|e| e.key() != key).cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Experience, HostedDemo};

    fn demo(name: &str) -> HostedDemo {
        HostedDemo {
            name: name.to_string(),
            task: "NLP".to_string(),
            description: format!("{name} demo"),
            link: format!("https://example.com/{name}"),
        }
    }

    fn job(company: &str) -> Experience {
        Experience {
            company: company.to_string(),
            role: "Engineer".to_string(),
            duration: "2020".to_string(),
            accomplishments: vec![],
        }
    }

    #[test]
    fn split_trims_and_drops_empty_segments() {
        assert_eq!(split_list("a, b,  c", Delimiter::Comma), ["a", "b", "c"]);
        assert_eq!(split_list("a,,b, ,", Delimiter::Comma), ["a", "b"]);
        assert!(split_list("", Delimiter::Comma).is_empty());
        assert_eq!(split_list("one\n\ntwo, three\n", Delimiter::Newline), ["one", "two, three"]);
    }

    #[test]
    fn create_appends_by_default() {
        let entries = vec![demo("a"), demo("b")];
        let next = upsert(&entries, demo("c"), None).unwrap().entries;
        assert_eq!(next.len(), 3);
        assert_eq!(next[2].name, "c");
    }

    #[test]
    fn create_prepends_for_experience() {
        let entries = vec![job("Old Co")];
        let next = upsert(&entries, job("New Co"), None).unwrap().entries;
        assert_eq!(next[0].company, "New Co");
        assert_eq!(next[1].company, "Old Co");
    }

    #[test]
    fn edit_replaces_in_place() {
        let entries = vec![demo("a"), demo("b"), demo("c")];
        let mut changed = demo("b");
        changed.task = "Vision".to_string();
        let next = upsert(&entries, changed.clone(), Some("b")).unwrap();
        assert!(next.stored);
        assert_eq!(next.entries, vec![demo("a"), changed, demo("c")]);
    }

    #[test]
    fn edit_may_rename_the_key() {
        let entries = vec![demo("a"), demo("b")];
        let next = upsert(&entries, demo("z"), Some("a")).unwrap().entries;
        assert_eq!(next, vec![demo("z"), demo("b")]);
    }

    #[test]
    fn edit_of_missing_target_is_a_no_op() {
        let entries = vec![demo("a")];
        let next = upsert(&entries, demo("q"), Some("gone")).unwrap();
        assert_eq!(next.entries, entries);
        assert!(!next.stored);
    }

    #[test]
    fn colliding_key_is_refused() {
        let entries = vec![demo("a"), demo("b")];
        let err = upsert(&entries, demo("b"), None).unwrap_err();
        assert_eq!(
            err,
            EngineError::DuplicateKey {
                section: "demos",
                key: "b".to_string()
            }
        );
        assert!(upsert(&entries, demo("b"), Some("a")).is_err());
    }

    #[test]
    fn delete_uses_filter_semantics() {
        let entries = vec![demo("a"), demo("b"), demo("a")];
        assert_eq!(delete(&entries, "a"), vec![demo("b")]);
        assert_eq!(delete(&entries, "missing"), entries);
    }
}
