use crate::domain::ports::Terminal;
use crate::utils::error::Result;
use std::io::{BufRead, Write};

/// `Terminal` over any buffered reader and writer.
#[derive(Debug)]
pub struct Console<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    pub fn into_inner(self) -> (R, W) {
        (self.reader, self.writer)
    }
}

impl<R: BufRead, W: Write> Terminal for Console<R, W> {
    fn write_line(&mut self, line: &str) -> Result<()> {
        writeln!(self.writer, "{}", line)?;
        Ok(())
    }

    fn prompt(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.writer, "{}", prompt)?;
        self.writer.flush()?;

        let mut line = Vec::new();
        if self.reader.read_until(b'\n', &mut line)? == 0 {
            return Ok(None);
        }

        strip_line_ending(&mut line);
        // 非 UTF-8 輸入仍視為一般 (無效) 選項
        Ok(Some(String::from_utf8_lossy(&line).into_owned()))
    }
}

/// 只移除行尾換行 (`\n` 或 `\r\n`)，其他空白保留
fn strip_line_ending(line: &mut Vec<u8>) {
    if line.last() == Some(&b'\n') {
        line.pop();
        if line.last() == Some(&b'\r') {
            line.pop();
        }
    }
}
