use std::io::{self, BufRead, Write};

/// ANSI "erase display, cursor home".
const CLEAR_SCREEN: &str = "\x1B[2J\x1B[1;1H";

/// Line-oriented operator terminal over any reader/writer pair.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Writes `text` as-is and flushes, so prompts appear before blocking reads.
    pub fn print(&mut self, text: &str) -> io::Result<()> {
        self.output.write_all(text.as_bytes())?;
        self.output.flush()
    }

    pub fn println(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.output, "{text}")
    }

    pub fn clear(&mut self) -> io::Result<()> {
        self.print(CLEAR_SCREEN)
    }

    /// Reads one line with its terminator stripped. `None` at end of input.
    pub fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut raw = Vec::new();
        if self.input.read_until(b'\n', &mut raw)? == 0 {
            return Ok(None);
        }
        let line = String::from_utf8_lossy(&raw);
        Ok(Some(line.trim_end_matches(['\n', '\r']).to_string()))
    }

    /// Prints `prompt`, then reads a line cut to at most `capacity` characters.
    /// The rest of an over-long line is discarded.
    pub fn prompt(&mut self, prompt: &str, capacity: usize) -> io::Result<Option<String>> {
        self.print(prompt)?;
        Ok(self
            .read_line()?
            .map(|line| line.chars().take(capacity).collect()))
    }

    /// Waits for the operator to press ENTER. `false` once input has ended.
    pub fn pause(&mut self) -> io::Result<bool> {
        self.print("\nPress ENTER to continue...")?;
        Ok(self.read_line()?.is_some())
    }
}
