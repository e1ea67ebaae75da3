use std::io::{self, Write};

use anyhow::Error;

use crate::util::text::wrap;

#[rustfmt::skip]
pub fn print_error(err: &Error) {
    let mut stderr = io::stderr().lock();

    let _ = writeln!(stderr);
    let _ = writeln!(stderr, "   ╔══════════════════════════════════════════════════════════════╗");
    let _ = writeln!(stderr, "   ║  ✗ Error                                                     ║");
    let _ = writeln!(stderr, "   ╟──────────────────────────────────────────────────────────────╢");

    let msg = err.to_string();
    for line in wrap(&msg, 59) {
        let _ = writeln!(stderr, "   ║  {:<59} ║", line);
    }

    let mut source = err.source();
    while let Some(cause) = source {
        let _ = writeln!(stderr, "   ╟──────────────────────────────────────────────────────────────╢");
        let _ = writeln!(stderr, "   ║  Caused by:                                                  ║");
        for line in wrap(&cause.to_string(), 59) {
            let _ = writeln!(stderr, "   ║    {:<57} ║", line);
        }
        source = cause.source();
    }

    if let Some(hints) = HintCollector::collect(err) {
        let _ = writeln!(stderr, "   ╟──────────────────────────────────────────────────────────────╢");
        let _ = writeln!(stderr, "   ║  Hints:                                                      ║");
        for hint in hints {
            let wrapped = wrap(&hint, 55);
            if let Some((first, rest)) = wrapped.split_first() {
                let _ = writeln!(stderr, "   ║    • {:<55} ║", first);
                for line in rest {
                    let _ = writeln!(stderr, "   ║      {:<55} ║", line);
                }
            }
        }
    }

    let _ = writeln!(stderr, "   ╚══════════════════════════════════════════════════════════════╝");
    let _ = writeln!(stderr);
}

struct HintCollector {
    hints: Vec<String>,
    has_typed_hints: bool,
}

impl HintCollector {
    fn new() -> Self {
        Self {
            hints: Vec::new(),
            has_typed_hints: false,
        }
    }

    fn collect(err: &Error) -> Option<Vec<String>> {
        let mut collector = Self::new();

        collector.collect_table_hints(err);
        collector.collect_fixture_hints(err);

        if !collector.has_typed_hints {
            if let Some(source) = err.downcast_ref::<std::io::Error>() {
                collector.collect_std_io_hints(source);
            } else {
                collector.collect_fallback_hints(err);
            }
        }

        if collector.hints.is_empty() {
            None
        } else {
            Some(collector.hints)
        }
    }

    fn add(&mut self, hint: impl Into<String>) {
        self.hints.push(hint.into());
    }

    fn mark_typed(&mut self) {
        self.has_typed_hints = true;
    }

    fn collect_table_hints(&mut self, err: &Error) {
        use periodic_table::Error as TableError;

        let Some(table_err) = err.downcast_ref::<TableError>() else {
            return;
        };

        self.mark_typed();

        match table_err {
            TableError::UnknownSymbol(symbol) => {
                self.add(format!("The chemistry data has no entry for '{}'", symbol));
                self.add("Check that --data covers every symbol in the record set");
            }

            TableError::AtomicNumberOutOfRange(n) => {
                self.add(format!("Atomic number {} is not a known element", n));
                self.add("Atomic numbers run from 1 (H) to 118 (Og)");
            }

            TableError::GroupOutOfRange(group) => {
                self.add(format!("Group {} does not exist", group));
                self.add("Store 0 for an unassigned group, otherwise 1 to 18");
            }

            TableError::InvalidSymbol(symbol) => {
                self.add(format!("'{}' cannot be a chemical symbol", symbol));
                self.add("Symbols are one to three letters, e.g. 'Fe' or 'Og'");
            }

            TableError::InvalidGroup(group) => {
                self.add(format!("'{}' is neither a group number nor a label", group));
                self.add("Use a number from 1 to 18 or a label from 1A-8A / 1B-8B");
                self.add("'8B' selects columns 8, 9 and 10 together");
            }

            TableError::NotFound(query) => {
                self.add(format!("No stored record matches {}", query));
                self.add("Symbols are case-sensitive: 'Fe', not 'FE' or 'fe'");
                self.add("A custom --fixture may not include every element");
            }

            TableError::MultipleFound { count, .. } => {
                self.add(format!("{} records match where one was expected", count));
                self.add("Hydrogen shares atomic number 1 with deuterium and tritium");
                self.add("Look the element up by symbol instead");
            }

            TableError::DuplicateId(id) => {
                self.add(format!("Two fixture records use pk {}", id));
                self.add("Every record needs its own primary key");
            }

            TableError::PlanOverlap { atomic_number, .. } => {
                self.add(format!(
                    "Atomic number {} is claimed by two assignment steps",
                    atomic_number
                ));
                self.add("Use --no-groups to skip group assignment");
            }

            TableError::ChemistryParse(_) => {
                self.add("Chemistry data file has invalid TOML syntax");
                self.add("Check for missing quotes, brackets, or invalid values");
                self.add("Entries live under [elements], keyed by symbol");
            }

            TableError::ChemistryData { symbol, .. } => {
                self.add(format!("The entry for '{}' parsed but is unusable", symbol));
                self.add("Masses and densities must be positive");
                self.add("Isotope spans need first <= last");
            }

            TableError::Io(io_err) => {
                self.collect_fixture_error_hints(io_err);
            }
        }
    }

    fn collect_fixture_hints(&mut self, err: &Error) {
        let Some(io_err) = err.downcast_ref::<periodic_table::io::Error>() else {
            return;
        };

        self.mark_typed();
        self.collect_fixture_error_hints(io_err);
    }

    fn collect_fixture_error_hints(&mut self, io_err: &periodic_table::io::Error) {
        use periodic_table::io::Error as FixtureError;

        match io_err {
            FixtureError::Io { source } => {
                self.collect_std_io_hints(source);
            }

            FixtureError::Json { source } => {
                self.add(format!(
                    "Fixture JSON is malformed near line {}, column {}",
                    source.line(),
                    source.column()
                ));
                self.add("The file must be an array of {model, pk, fields} objects");
            }

            FixtureError::Fixture { index, .. } => {
                self.add(format!("Record #{} of the fixture was rejected", index));
                self.add(format!(
                    "Every record needs \"model\": \"{}\"",
                    periodic_table::io::FIXTURE_MODEL
                ));
            }
        }
    }

    fn collect_std_io_hints(&mut self, source: &std::io::Error) {
        use std::io::ErrorKind;

        match source.kind() {
            ErrorKind::NotFound => {
                self.add("File or directory not found");
                self.add("Check the path spelling and ensure the file exists");
            }

            ErrorKind::PermissionDenied => {
                self.add("Permission denied accessing the file");
                self.add("Check file permissions with `ls -la`");
            }

            ErrorKind::InvalidData => {
                self.add("File is not valid UTF-8 text");
                self.add("Chemistry data and fixtures must be plain text");
            }

            ErrorKind::BrokenPipe => {
                self.add("Output consumer terminated early");
                self.add("This may occur when piping to commands like `head`");
            }

            _ => {
                self.add("I/O operation failed");
                self.add("Check file path, permissions, and disk space");
            }
        }
    }

    fn collect_fallback_hints(&mut self, err: &Error) {
        let msg = error_chain_text(err);

        if msg.contains("no such file") || msg.contains("not found") {
            self.add("Check that the file path is correct");
            self.add("Verify the file exists and is readable");
            return;
        }

        if msg.contains("permission denied") {
            self.add("Check file permissions with `ls -la`");
            self.add("Ensure you have the required access rights");
        }
    }
}

fn error_chain_text(err: &Error) -> String {
    let mut text = String::new();

    text.push_str(&err.to_string());

    let mut source = err.source();
    while let Some(cause) = source {
        text.push('\n');
        text.push_str(&cause.to_string());
        source = cause.source();
    }

    text.to_lowercase()
}
