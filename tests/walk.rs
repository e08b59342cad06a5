use std::io::Cursor;

use color_eyre::eyre;
use rewind::walker::{Summary, Walker};
use rewind_collections::{BufferedCursor, CursorError, ListCursor as _, Operation};
use rewind_input::LineSource;
use rewind_kernel::types::step::MoveScript;

fn walk(path: &str, script: &str) -> eyre::Result<(String, Summary)> {
    let source = rewind_input::open(path.as_ref())?;
    let mut walker = Walker::new(BufferedCursor::new(source));
    let script = script.parse::<MoveScript>()?;
    let mut out = vec![];
    let summary = walker.run(&script, &mut out)?;
    Ok((String::from_utf8(out)?, summary))
}

#[test]
fn walk_file_back_and_forth() -> eyre::Result<()> {
    let (out, summary) = walk("tests/assets/words.txt", "n3 p3 n5")?;
    assert_eq!(
        out,
        [
            "0\talpha",
            "1\tbravo",
            "2\tcharlie",
            "2\tcharlie",
            "1\tbravo",
            "0\talpha",
            "0\talpha",
            "1\tbravo",
            "2\tcharlie",
            "3\tdelta",
            "next\t<end>",
            "",
        ]
        .join("\n")
    );
    assert_eq!(summary.visits, 10);
    assert_eq!(summary.misses, 1);
    Ok(())
}

#[test]
fn each_line_is_read_once() -> eyre::Result<()> {
    let source = LineSource::new(Cursor::new("a\nb\nc\n"));
    let mut cursor = BufferedCursor::new(source);

    for _ in 0..3 {
        while cursor.has_next() {
            cursor.next()?;
        }
        while cursor.has_previous() {
            cursor.previous()?;
        }
    }

    assert_eq!(cursor.source().lines_read(), 3);
    assert_eq!(cursor.buffered(), ["a", "b", "c"]);
    assert_eq!(cursor.previous_index(), None);
    Ok(())
}

#[test]
fn cursor_is_read_only() -> eyre::Result<()> {
    let mut cursor = BufferedCursor::new(rewind_input::open("tests/assets/words.txt".as_ref())?);
    cursor.next()?;

    let err = cursor.set("zulu".to_owned()).unwrap_err();
    assert!(matches!(err, CursorError::Unsupported(Operation::Set)));
    assert_eq!(err.to_string(), "cursor does not support `set`");
    assert!(cursor.remove().is_err());
    assert!(cursor.add(String::new()).is_err());

    assert_eq!(cursor.next_index(), 1);
    assert_eq!(cursor.previous_index(), Some(0));
    Ok(())
}

#[test]
fn missing_file_is_reported() {
    assert!(rewind_input::open("tests/assets/no-such-file.txt".as_ref()).is_err());
}
