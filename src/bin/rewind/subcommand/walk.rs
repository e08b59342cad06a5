use std::path::PathBuf;

use color_eyre::eyre;
use rewind::walker::Walker;
use rewind_collections::{BufferedCursor, ListCursor as _};
use rewind_kernel::types::step::MoveScript;

/// Walk the lines of a file with a move script
#[derive(clap::Parser, Debug)]
pub struct Args {
    /// The input file to read, or `-` for standard input
    input: PathBuf,
    /// Moves to make, e.g. `n3 p2 n`
    #[clap(default_value = "n")]
    script: MoveScript,
}

impl Args {
    #[tracing::instrument(name = "walk", skip_all)]
    pub(crate) fn run(&self) -> eyre::Result<()> {
        let source = rewind_input::open(&self.input)?;
        let mut walker = Walker::new(BufferedCursor::new(source));

        let summary = walker.run(&self.script, std::io::stdout().lock())?;

        let cursor = walker.into_cursor();
        tracing::info!(
            %summary,
            position = cursor.next_index(),
            buffered = cursor.buffered_len(),
            "walk finished"
        );
        Ok(())
    }
}
