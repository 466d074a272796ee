use anyhow::Result;
use clap::Parser;
use clap::error::ErrorKind;
use layout_find::{
    Cli, DatabaseFile, DumpOptions, ReportFormatter, TagSet, TypeResolver, find_by_size,
};
use std::process::ExitCode;

/// Exit status for a wrong or malformed command line.
const USAGE_EXIT_CODE: u8 = 1;

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(e) => {
            print!("{}", e.render());
            return ExitCode::from(USAGE_EXIT_CODE);
        }
    };

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", err);
            let code = err.downcast_ref::<layout_find::Error>().map_or(1, |e| e.exit_code());
            ExitCode::from(code)
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    if !cli.quiet {
        eprintln!("Reading the file {}", cli.database.display());
    }
    let file = DatabaseFile::load(&cli.database)?;

    if !cli.quiet {
        eprintln!("Parsing JSON");
    }
    let db = file.parse()?;

    if !cli.quiet {
        eprintln!("Searching the size 0x{:x}", cli.size);
    }
    let tags = if cli.exporter_tags { TagSet::Exporter } else { TagSet::Standard };
    let matches = find_by_size(&db, cli.size, tags, cli.filter.as_deref());

    if matches.is_empty() {
        if !cli.quiet {
            eprintln!("No class or struct of size 0x{:x} found", cli.size);
        }
        return Ok(());
    }

    let options = DumpOptions { max_depth: cli.max_depth, show_bases: cli.bases };
    let formatter = ReportFormatter::new(cli.no_color, options);
    print!("{}", formatter.format(TypeResolver::new(&db).with_tags(tags), &matches));

    Ok(())
}
