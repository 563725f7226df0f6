use crate::application::command::Command;
use crate::error::{LoanError, Result};
use csv::StringRecord;
use std::io::Read;

/// Reads registry commands from a headerless CSV script.
///
/// Each row starts with a verb followed by its fields:
///
/// ```text
/// contact, <name>, <phone>
/// book, <title>, <author>, <isbn>
/// item, <name>, <kind>, <id>
/// lend, <id>, <phone>
/// return, <id>
/// ```
///
/// Fields are trimmed, rows may have different widths and lines starting
/// with `#` are skipped. A row missing a column is rejected; an empty
/// column (`contact, , 111`) is passed through as an empty value.
pub struct CommandReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> CommandReader<R> {
    /// Creates a new `CommandReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .trim(csv::Trim::All)
            .flexible(true)
            .comment(Some(b'#'))
            .from_reader(source);
        Self { reader }
    }

    /// Returns an iterator that lazily reads and parses commands.
    ///
    /// A bad row yields an error in its place; later rows are still read.
    pub fn commands(self) -> impl Iterator<Item = Result<Command>> {
        self.reader
            .into_records()
            .map(|result| result.map_err(LoanError::from).and_then(parse_record))
    }
}

fn parse_record(record: StringRecord) -> Result<Command> {
    let verb = record.get(0).unwrap_or_default().to_ascii_lowercase();
    let line = record.position().map_or(0, |pos| pos.line());
    let field = |index: usize, label: &str| -> Result<String> {
        record.get(index).map(str::to_string).ok_or_else(|| {
            LoanError::InvalidCommand(format!("line {line}: `{verb}` is missing <{label}>"))
        })
    };

    match verb.as_str() {
        "contact" => Ok(Command::RegisterContact {
            name: field(1, "name")?,
            phone: field(2, "phone")?,
        }),
        "book" => Ok(Command::RegisterBook {
            title: field(1, "title")?,
            author: field(2, "author")?,
            isbn: field(3, "isbn")?,
        }),
        "item" => Ok(Command::RegisterItem {
            name: field(1, "name")?,
            kind: field(2, "kind")?,
            id: field(3, "id")?,
        }),
        "lend" => Ok(Command::Lend {
            id: field(1, "id")?,
            phone: field(2, "phone")?,
        }),
        "return" => Ok(Command::Return {
            id: field(1, "id")?,
        }),
        _ => Err(LoanError::InvalidCommand(format!(
            "line {line}: unknown command `{verb}`"
        ))),
    }
}
