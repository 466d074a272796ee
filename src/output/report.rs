use crate::output::dump::{DumpOptions, MemberDumper};
use crate::resolver::TypeResolver;
use crate::scan::SizeMatch;
use colored::Colorize;

/// Plain-text report: for each match a blank line, the type name, then its
/// member dump.
pub struct ReportFormatter {
    no_color: bool,
    options: DumpOptions,
}

impl ReportFormatter {
    pub fn new(no_color: bool, options: DumpOptions) -> Self {
        Self { no_color, options }
    }

    pub fn format(&self, resolver: TypeResolver<'_>, matches: &[SizeMatch<'_>]) -> String {
        let dumper = MemberDumper::new(resolver, self.options);
        let mut output = String::new();

        for m in matches {
            output.push('\n');
            if self.no_color {
                output.push_str(m.name);
            } else {
                output.push_str(&m.name.bold().to_string());
            }
            output.push('\n');

            if self.options.show_bases {
                if let Some(bases) = &m.record.parents {
                    dumper.dump_bases(&mut output, bases, 0, 0);
                }
            }
            if let Some(members) = &m.record.members {
                dumper.dump(&mut output, members, 0, 0);
            }
        }

        output
    }
}
