use std::fmt;
use std::str::FromStr;

use crate::error::MenuError;

/// Entries of the main menu, numbered 1 through 8 in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    ListAll,
    ListAvailable,
    Borrow,
    Return,
    Search,
    Add,
    Statistics,
    Exit,
}

impl MenuChoice {
    /// Every entry in the order the menu prints them.
    pub const ALL: [MenuChoice; 8] = [
        MenuChoice::ListAll,
        MenuChoice::ListAvailable,
        MenuChoice::Borrow,
        MenuChoice::Return,
        MenuChoice::Search,
        MenuChoice::Add,
        MenuChoice::Statistics,
        MenuChoice::Exit,
    ];

    /// The number the user types to pick this entry.
    pub fn number(self) -> u8 {
        match self {
            MenuChoice::ListAll => 1,
            MenuChoice::ListAvailable => 2,
            MenuChoice::Borrow => 3,
            MenuChoice::Return => 4,
            MenuChoice::Search => 5,
            MenuChoice::Add => 6,
            MenuChoice::Statistics => 7,
            MenuChoice::Exit => 8,
        }
    }

    /// Text shown next to the number in the menu.
    pub fn label(self) -> &'static str {
        match self {
            MenuChoice::ListAll => "Display All Books",
            MenuChoice::ListAvailable => "Display Available Books",
            MenuChoice::Borrow => "Borrow a Book",
            MenuChoice::Return => "Return a Book",
            MenuChoice::Search => "Search Books",
            MenuChoice::Add => "Add New Book",
            MenuChoice::Statistics => "Show Statistics",
            MenuChoice::Exit => "Exit",
        }
    }
}

impl FromStr for MenuChoice {
    type Err = MenuError;

    /// Accepts the menu number with surrounding whitespace. Anything else,
    /// numeric or not, is an invalid choice.
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let trimmed = input.trim();
        trimmed
            .parse::<u8>()
            .ok()
            .and_then(|number| MenuChoice::ALL.into_iter().find(|c| c.number() == number))
            .ok_or_else(|| MenuError::InvalidMenuChoice(trimmed.to_string()))
    }
}

impl fmt::Display for MenuChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}. {}", self.number(), self.label())
    }
}
