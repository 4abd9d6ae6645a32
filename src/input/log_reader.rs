use std::collections::VecDeque;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Forward-only line source over a log file.
///
/// Lines are handed out one at a time with their terminator stripped. `\n`,
/// `\r\n` and a lone `\r` all end a line. Bytes that are not valid UTF-8 are
/// replaced rather than treated as a read failure.
pub struct LogReader<R = BufReader<File>> {
    reader: R,
    /// Lines already split out of the last chunk but not yet handed out
    pending: VecDeque<String>,
}

impl LogReader<BufReader<File>> {
    /// Open a log file for reading
    pub fn open(path: &Path) -> io::Result<Self> {
        let file = File::open(path)?;
        Ok(LogReader::new(BufReader::new(file)))
    }
}

impl<R: BufRead> LogReader<R> {
    pub fn new(reader: R) -> Self {
        LogReader {
            reader,
            pending: VecDeque::new(),
        }
    }

    /// Read up to the next `\n` and queue every line the chunk contains
    fn fill(&mut self) -> io::Result<bool> {
        let mut buf = Vec::new();
        if self.reader.read_until(b'\n', &mut buf)? == 0 {
            return Ok(false);
        }

        if buf.last() == Some(&b'\n') {
            buf.pop();
        }
        let ends_with_cr = buf.last() == Some(&b'\r');

        let mut pieces: Vec<&[u8]> = buf.split(|&b| b == b'\r').collect();
        // A trailing `\r` leaves an empty piece that is not a line of its own
        if ends_with_cr {
            pieces.pop();
        }
        self.pending.extend(
            pieces
                .into_iter()
                .map(|piece| String::from_utf8_lossy(piece).into_owned()),
        );
        Ok(true)
    }
}

impl<R: BufRead> Iterator for LogReader<R> {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        while self.pending.is_empty() {
            match self.fill() {
                Ok(true) => {}
                Ok(false) => return None,
                Err(e) => return Some(Err(e)),
            }
        }
        self.pending.pop_front().map(Ok)
    }
}
