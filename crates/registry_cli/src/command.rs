//! Menu commands accepted by the interactive controller.

/// One entry of the fixed main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuCommand {
    List,
    ListLong,
    Register,
    Edit,
    Select,
    Exit,
}

impl MenuCommand {
    /// All commands in menu display order.
    pub fn all() -> &'static [MenuCommand] {
        &[
            Self::List,
            Self::ListLong,
            Self::Register,
            Self::Edit,
            Self::Select,
            Self::Exit,
        ]
    }

    /// Single-character key the operator types. Keys are case-sensitive.
    pub fn key(self) -> char {
        match self {
            Self::List => 'l',
            Self::ListLong => 'L',
            Self::Register => 'r',
            Self::Edit => 'e',
            Self::Select => 's',
            Self::Exit => 'q',
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::List => "List all members",
            Self::ListLong => "List all members (long)",
            Self::Register => "Register new member",
            Self::Edit => "Edit member",
            Self::Select => "Select member",
            Self::Exit => "Exit application",
        }
    }

    /// Parses one line of operator input, ignoring surrounding whitespace.
    pub fn parse(input: &str) -> Option<Self> {
        let mut chars = input.trim().chars();
        let key = chars.next()?;
        if chars.next().is_some() {
            return None;
        }
        Self::all().iter().copied().find(|command| command.key() == key)
    }
}
