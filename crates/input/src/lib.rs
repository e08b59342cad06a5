use std::{
    fs::File,
    io::{self, BufRead, BufReader},
    path::Path,
};

pub use self::line_source::LineSource;

mod line_source;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

/// Opens `path` as a line source; `-` reads standard input.
pub fn open(path: &Path) -> Result<LineSource<Box<dyn BufRead>>> {
    let reader: Box<dyn BufRead> = if path == Path::new("-") {
        Box::new(io::stdin().lock())
    } else {
        Box::new(BufReader::new(File::open(path)?))
    };
    Ok(LineSource::new(reader))
}
