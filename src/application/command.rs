/// A single registry operation, as issued by a host program or read from a
/// command script.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum Command {
    RegisterContact {
        name: String,
        phone: String,
    },
    RegisterBook {
        title: String,
        author: String,
        isbn: String,
    },
    RegisterItem {
        name: String,
        kind: String,
        id: String,
    },
    Lend {
        id: String,
        phone: String,
    },
    Return {
        id: String,
    },
}

impl Command {
    /// Script verb for this command.
    pub fn verb(&self) -> &'static str {
        match self {
            Command::RegisterContact { .. } => "contact",
            Command::RegisterBook { .. } => "book",
            Command::RegisterItem { .. } => "item",
            Command::Lend { .. } => "lend",
            Command::Return { .. } => "return",
        }
    }
}
