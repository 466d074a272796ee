use crate::loader::TypeDatabase;
use crate::types::{TagSet, TypeRecord};

/// A named class or struct whose size matched the requested value.
#[derive(Debug, Clone, Copy)]
pub struct SizeMatch<'a> {
    pub name: &'a str,
    pub record: &'a TypeRecord,
}

/// Find every class/struct record of exactly `size` bytes, in stored order.
///
/// Records without a `type`, `size` or `name` are skipped. `tags` decides which
/// `type` values count as class/struct. When `filter` is set, only names
/// containing it are kept.
pub fn find_by_size<'a>(
    db: &'a TypeDatabase,
    size: u64,
    tags: TagSet,
    filter: Option<&str>,
) -> Vec<SizeMatch<'a>> {
    db.records()
        .filter_map(|(_, record)| {
            if !record.kind.is_some_and(|k| k.is_aggregate(tags)) || record.size != Some(size) {
                return None;
            }
            let name = record.name.as_deref()?;
            if filter.is_some_and(|f| !name.contains(f)) {
                return None;
            }
            Some(SizeMatch { name, record })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn db() -> TypeDatabase {
        TypeDatabase::from_slice(
            br#"{
                "1": {"type": "struct", "name": "A", "size": 16, "members": [{"name": "x", "offset": 0}]},
                "2": {"type": "class", "name": "B", "size": 24},
                "3": {"type": "union", "name": "U", "size": 16},
                "4": {"type": "class", "size": 16},
                "5": {"name": "NoKind", "size": 16},
                "6": {"type": "class", "name": "NoSize"},
                "7": {"type": "structure", "name": "AB", "size": 16},
                "8": {"type": "pointer_type", "name": "P", "size": 16}
            }"#,
        )
        .unwrap()
    }

    fn names<'a>(matches: &[SizeMatch<'a>]) -> Vec<&'a str> {
        matches.iter().map(|m| m.name).collect()
    }

    #[test]
    fn matches_exact_size_aggregates_only() {
        let db = db();
        assert_eq!(names(&find_by_size(&db, 16, TagSet::Standard, None)), ["A"]);
        assert_eq!(names(&find_by_size(&db, 24, TagSet::Standard, None)), ["B"]);
    }

    #[test]
    fn exporter_structure_tag_needs_opt_in() {
        let db = db();
        assert_eq!(names(&find_by_size(&db, 16, TagSet::Exporter, None)), ["A", "AB"]);
    }

    #[test]
    fn wrongly_typed_size_is_skipped() {
        let db = TypeDatabase::from_slice(
            br#"{
                "1": {"type": "struct", "name": "Text", "size": "16"},
                "2": {"type": 7, "name": "Odd", "size": 16},
                "3": {"type": "struct", "name": "A", "size": 16}
            }"#,
        )
        .unwrap();
        assert_eq!(names(&find_by_size(&db, 16, TagSet::Standard, None)), ["A"]);
    }

    #[test]
    fn no_matches_is_empty() {
        assert!(find_by_size(&db(), 1000, TagSet::Standard, None).is_empty());
        assert!(find_by_size(&TypeDatabase::default(), 16, TagSet::Standard, None).is_empty());
    }

    #[test]
    fn filter_narrows_by_name() {
        let db = db();
        assert_eq!(names(&find_by_size(&db, 16, TagSet::Exporter, Some("B"))), ["AB"]);
        assert!(find_by_size(&db, 16, TagSet::Standard, Some("B")).is_empty());
    }
}
