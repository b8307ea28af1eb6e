use std::io::{self, Write};

use anyhow::Result;
use chessgrid_core::Board;
use tracing::{debug, info};

fn main() -> Result<()> {
    tracing_subscriber::fmt().with_writer(io::stderr).init();
    info!("chessgrid starting");

    let board = chessgrid_core::generate();
    debug!(squares = board.len(), "board generated");

    render(&board, io::stdout().lock())?;
    Ok(())
}

/// Write the board's ids, one row per line, rank 8 first.
fn render(board: &Board, mut out: impl Write) -> io::Result<()> {
    for row in board.rows() {
        let ids: Vec<&str> = row.iter().map(|sq| sq.id()).collect();
        writeln!(out, "{}", ids.join(" "))?;
    }
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::render;

    #[test]
    fn render_writes_eight_rows_of_ids() {
        let mut buf = Vec::new();
        render(&chessgrid_core::generate(), &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();

        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 8);
        for line in &lines {
            assert_eq!(line.split(' ').count(), 8, "{line:?}");
        }
        assert_eq!(lines[0], "a8 b8 c8 d8 e8 f8 g8 h8");
        assert_eq!(lines[7], "a1 b1 c1 d1 e1 f1 g1 h1");
        assert!(text.ends_with('\n'));
        assert!(!text.contains('\x1b'));
    }
}
