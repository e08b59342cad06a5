use std::{
    io::{self, BufRead as _, Write as _},
    path::PathBuf,
};

use color_eyre::eyre;
use rewind::walker::Walker;
use rewind_collections::{BufferedCursor, ListCursor as _};
use rewind_kernel::types::step::MoveScript;
use tracing::warn;

/// Read move scripts from standard input and apply them to the lines of a file
#[derive(clap::Parser, Debug)]
pub struct Args {
    /// The input file to read
    input: PathBuf,
}

impl Args {
    #[tracing::instrument(name = "step", skip_all)]
    pub(crate) fn run(&self) -> eyre::Result<()> {
        if self.input.as_os_str() == "-" {
            eyre::bail!("standard input is reserved for commands; pass a file");
        }

        let source = rewind_input::open(&self.input)?;
        let mut walker = Walker::new(BufferedCursor::new(source));

        let mut stdout = io::stdout().lock();
        for line in io::stdin().lock().lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            let script = match line.parse::<MoveScript>() {
                Ok(script) => script,
                Err(err) => {
                    warn!(%err, "skipping invalid move script");
                    continue;
                }
            };
            walker.run(&script, &mut stdout)?;
            stdout.flush()?;
        }

        let cursor = walker.cursor();
        tracing::info!(
            position = cursor.next_index(),
            lines_read = cursor.source().lines_read(),
            "input closed"
        );
        Ok(())
    }
}
