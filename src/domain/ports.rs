use crate::utils::error::Result;

/// Line-oriented terminal the menu loop talks to.
pub trait Terminal {
    /// Write `line` followed by a newline.
    fn write_line(&mut self, line: &str) -> Result<()>;

    /// Show `prompt` without a newline and read one line of input.
    /// Returns `None` once the input stream is exhausted.
    fn prompt(&mut self, prompt: &str) -> Result<Option<String>>;
}
