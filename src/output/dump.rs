use crate::resolver::TypeResolver;
use crate::types::{BaseRef, Member, TypeId};

/// Nesting levels rendered below a matched type. Caps traversal of cyclic graphs.
pub const DEFAULT_MAX_DEPTH: usize = 4;
/// Spaces of indentation per nesting level.
pub const INDENT_WIDTH: usize = 4;
/// Type name shown for members without a `type_id`.
pub const UNKNOWN_TYPE_NAME: &str = "unk";

#[derive(Debug, Clone, Copy)]
pub struct DumpOptions {
    pub max_depth: usize,
    /// Render base classes before members.
    pub show_bases: bool,
}

impl Default for DumpOptions {
    fn default() -> Self {
        Self { max_depth: DEFAULT_MAX_DEPTH, show_bases: false }
    }
}

/// Renders member lists recursively, one line per member:
///
/// ```text
///     +0x0010     Inner inner
/// ```
///
/// Offsets are absolute from the outermost type. They are accumulated while
/// descending and never written back into the database.
pub struct MemberDumper<'a> {
    resolver: TypeResolver<'a>,
    options: DumpOptions,
}

impl<'a> MemberDumper<'a> {
    pub fn new(resolver: TypeResolver<'a>, options: DumpOptions) -> Self {
        Self { resolver, options }
    }

    pub fn dump(&self, out: &mut String, members: &[Member], base_offset: u64, depth: usize) {
        if depth >= self.options.max_depth {
            return;
        }

        for member in members {
            let (type_name, submembers) = match &member.type_id {
                Some(id) => (self.resolver.resolve_name(id), self.resolver.resolve_members(id)),
                None => (UNKNOWN_TYPE_NAME.to_string(), None),
            };

            let offset = member.offset.saturating_add(base_offset);
            push_line(out, offset, depth, &format!("{} {}", type_name, member.display_name()));

            if self.options.show_bases {
                let bases = member.type_id.as_ref().and_then(|id| self.resolver.resolve_bases(id));
                if let Some(bases) = bases {
                    self.dump_bases(out, bases, offset, depth + 1);
                }
            }

            if let Some(submembers) = submembers.filter(|m| !m.is_empty()) {
                self.dump(out, submembers, offset, depth + 1);
            }
        }
    }

    /// Renders base classes as `: Base` lines, followed by each base's own
    /// bases and members one level deeper.
    pub fn dump_bases(&self, out: &mut String, bases: &[BaseRef], base_offset: u64, depth: usize) {
        if depth >= self.options.max_depth {
            return;
        }

        for base in bases {
            let offset = base.offset.saturating_add(base_offset);
            push_line(out, offset, depth, &format!(": {}", self.resolver.resolve_name(&base.id)));
            self.dump_type(out, &base.id, offset, depth + 1);
        }
    }

    fn dump_type(&self, out: &mut String, id: &TypeId, offset: u64, depth: usize) {
        if let Some(bases) = self.resolver.resolve_bases(id) {
            self.dump_bases(out, bases, offset, depth);
        }
        if let Some(members) = self.resolver.resolve_members(id) {
            self.dump(out, members, offset, depth);
        }
    }
}

fn push_line(out: &mut String, offset: u64, depth: usize, text: &str) {
    let indent = " ".repeat(INDENT_WIDTH * depth);
    out.push_str(&format!("    +0x{:04x}{} {}\n", offset, indent, text));
}
