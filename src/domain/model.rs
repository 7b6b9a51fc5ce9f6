use std::fmt;

pub const BANNER: &str = "Welcome to the Little Machine Code IDE!";

/// Menu lines printed at the top of every iteration. The leading empty line
/// separates the menu from the previous response.
pub const MENU_LINES: [&str; 5] = [
    "",
    "Menu:",
    "1. Edit LMC File",
    "2. Build & Run LMC Program",
    "3. Exit",
];

pub const PROMPT: &str = "Enter your choice: ";

pub const EDIT_RESPONSE: &str = "Edit LMC File - Not yet implemented.";
pub const BUILD_RESPONSE: &str = "Build & Run LMC Program - Not yet implemented.";
pub const EXIT_RESPONSE: &str = "Exiting IDE. Goodbye!";
pub const INVALID_RESPONSE: &str = "Invalid choice. Please try again.";

/// One line of user input, matched by exact text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Choice {
    EditFile,
    BuildAndRun,
    Exit,
    Invalid(String),
}

impl Choice {
    pub fn parse(input: &str) -> Self {
        match input {
            "1" => Choice::EditFile,
            "2" => Choice::BuildAndRun,
            "3" => Choice::Exit,
            other => Choice::Invalid(other.to_string()),
        }
    }

    pub fn response(&self) -> &'static str {
        match self {
            Choice::EditFile => EDIT_RESPONSE,
            Choice::BuildAndRun => BUILD_RESPONSE,
            Choice::Exit => EXIT_RESPONSE,
            Choice::Invalid(_) => INVALID_RESPONSE,
        }
    }
}

impl fmt::Display for Choice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Choice::EditFile => write!(f, "edit-file"),
            Choice::BuildAndRun => write!(f, "build-and-run"),
            Choice::Exit => write!(f, "exit"),
            Choice::Invalid(raw) => write!(f, "invalid({:?})", raw),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuState {
    #[default]
    Running,
    Terminated,
}

impl MenuState {
    /// Terminated is absorbing.
    pub fn next(self, choice: &Choice) -> Self {
        match (self, choice) {
            (MenuState::Terminated, _) => MenuState::Terminated,
            (MenuState::Running, Choice::Exit) => MenuState::Terminated,
            (MenuState::Running, _) => MenuState::Running,
        }
    }

    pub fn is_running(self) -> bool {
        self == MenuState::Running
    }
}
