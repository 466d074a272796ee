use crate::loader::TypeDatabase;
use crate::types::{BaseRef, Member, TagSet, TypeId};

/// Prefix of the name synthesized for ids that cannot be resolved.
pub const PLACEHOLDER_PREFIX: &str = "#";
/// Appended to the pointee name of a pointer record.
pub const POINTER_SUFFIX: &str = "*";

/// Resolves type ids into display names and member lists.
///
/// Never fails: dangling ids and records without a usable name degrade to a
/// `#<id>` placeholder.
pub struct TypeResolver<'a> {
    db: &'a TypeDatabase,
    tags: TagSet,
}

impl<'a> TypeResolver<'a> {
    pub fn new(db: &'a TypeDatabase) -> Self {
        Self { db, tags: TagSet::Standard }
    }

    pub fn with_tags(mut self, tags: TagSet) -> Self {
        self.tags = tags;
        self
    }

    pub fn resolve_name(&self, id: &TypeId) -> String {
        let Some(record) = self.db.get(id) else {
            return placeholder(id);
        };

        if let Some(name) = &record.name {
            return name.clone();
        }

        if record.kind.is_some_and(|k| k.is_pointer(self.tags)) {
            let pointee_name = record
                .type_id
                .as_ref()
                .and_then(|pointee| self.db.get(pointee))
                .and_then(|pointee| pointee.name.as_deref());
            if let Some(name) = pointee_name {
                return format!("{}{}", name, POINTER_SUFFIX);
            }
        }

        placeholder(id)
    }

    /// Members of the record behind `id`, borrowed from the database.
    pub fn resolve_members(&self, id: &TypeId) -> Option<&'a [Member]> {
        self.db.get(id)?.members.as_deref()
    }

    pub fn resolve_bases(&self, id: &TypeId) -> Option<&'a [BaseRef]> {
        self.db.get(id)?.parents.as_deref()
    }
}

fn placeholder(id: &TypeId) -> String {
    format!("{}{}", PLACEHOLDER_PREFIX, id)
}
