use std::{
    io::{self, BufRead},
    str::Utf8Error,
};

use rewind_collections::{PullError, Source};
use tracing::trace;

/// Lines of a reader, read once each, without their line terminators.
///
/// `has_next` reads one line ahead and holds on to it (or to the read error)
/// until the following `pull`. A line that is not valid UTF-8 stops the
/// source: every later pull reports the same `InvalidData` error, so no line
/// is ever skipped.
#[derive(custom_debug::Debug)]
pub struct LineSource<R> {
    #[debug(skip)]
    reader: R,
    peeked: Option<io::Result<String>>,
    invalid: Option<Utf8Error>,
    eof: bool,
    lines_read: usize,
}

impl<R: BufRead> LineSource<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            peeked: None,
            invalid: None,
            eof: false,
            lines_read: 0,
        }
    }

    /// Number of lines handed out by `pull`.
    pub fn lines_read(&self) -> usize {
        self.lines_read
    }

    fn read_line(&mut self) -> Option<io::Result<String>> {
        if let Some(err) = self.invalid {
            return Some(Err(io::Error::new(io::ErrorKind::InvalidData, err)));
        }
        if self.eof {
            return None;
        }
        let mut buf = Vec::new();
        match self.reader.read_until(b'\n', &mut buf) {
            Ok(0) => {
                trace!("EOF reached");
                self.eof = true;
                None
            }
            Ok(_) => {
                if buf.ends_with(b"\n") {
                    buf.pop();
                    if buf.ends_with(b"\r") {
                        buf.pop();
                    }
                }
                match String::from_utf8(buf) {
                    Ok(line) => Some(Ok(line)),
                    Err(err) => {
                        let err = err.utf8_error();
                        trace!(line_no = self.lines_read, %err, "invalid line");
                        self.invalid = Some(err);
                        Some(Err(io::Error::new(io::ErrorKind::InvalidData, err)))
                    }
                }
            }
            Err(err) => Some(Err(err)),
        }
    }
}

impl<R: BufRead> Source for LineSource<R> {
    type Item = String;
    type Error = io::Error;

    fn has_next(&mut self) -> bool {
        if self.peeked.is_none() {
            self.peeked = self.read_line();
        }
        self.peeked.is_some()
    }

    fn pull(&mut self) -> Result<String, PullError<io::Error>> {
        let line = self
            .peeked
            .take()
            .or_else(|| self.read_line())
            .ok_or(PullError::Exhausted)?
            .map_err(PullError::Source)?;
        trace!(line_no = self.lines_read, len = line.len(), "read line");
        self.lines_read += 1;
        Ok(line)
    }
}

#[cfg(test)]
mod tests {
    use std::io::{BufReader, Cursor, Read};

    use rewind_collections::{BufferedCursor, CursorError, ListCursor as _};

    use super::*;

    struct Broken;

    impl Read for Broken {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::other("disk on fire"))
        }
    }

    #[test]
    fn strips_terminators() {
        let mut source = LineSource::new(Cursor::new("one\ntwo\r\n\nlast"));
        let mut lines = vec![];
        while source.has_next() {
            lines.push(source.pull().unwrap());
        }
        assert_eq!(lines, ["one", "two", "", "last"]);
        assert_eq!(source.lines_read(), 4);
        assert!(matches!(source.pull(), Err(PullError::Exhausted)));
    }

    #[test]
    fn has_next_reads_each_line_once() {
        let mut source = LineSource::new(Cursor::new("a\nb\n"));
        assert!(source.has_next());
        assert!(source.has_next());
        assert_eq!(source.pull().unwrap(), "a");
        assert_eq!(source.pull().unwrap(), "b");
        assert!(!source.has_next());
    }

    #[test]
    fn read_error_reaches_cursor() {
        let reader = BufReader::new(Cursor::new("first\n").chain(Broken));
        let mut cursor = BufferedCursor::new(LineSource::new(reader));

        assert_eq!(cursor.next().unwrap(), "first");
        assert!(cursor.has_next());
        let err = cursor.next().unwrap_err();
        assert!(matches!(&err, CursorError::Source(e) if e.to_string() == "disk on fire"));
        assert_eq!(cursor.next_index(), 1);
        assert_eq!(cursor.buffered_len(), 1);

        assert_eq!(cursor.previous().unwrap(), "first");
        assert_eq!(cursor.next().unwrap(), "first");
        assert_eq!(cursor.source().lines_read(), 1);
    }

    #[test]
    fn invalid_utf8_is_never_skipped() {
        let source = LineSource::new(Cursor::new(&b"a\n\xff\nb\n"[..]));
        let mut cursor = BufferedCursor::new(source);

        assert_eq!(cursor.next().unwrap(), "a");
        for _ in 0..2 {
            assert!(cursor.has_next());
            let err = cursor.next().unwrap_err();
            assert!(
                matches!(&err, CursorError::Source(e) if e.kind() == io::ErrorKind::InvalidData)
            );
            assert_eq!(cursor.next_index(), 1);
        }

        assert_eq!(cursor.buffered(), ["a"]);
        assert_eq!(cursor.source().lines_read(), 1);
        assert_eq!(cursor.previous().unwrap(), "a");
    }
}
