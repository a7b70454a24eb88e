//! Text rendering of a session.

use std::fmt::Write as _;

use watersort_core::{Color, Container};
use watersort_game::Session;
use watersort_generator::difficulty;

/// How colors are drawn.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Palette {
    /// One letter per color (`R`, `B`, ...).
    #[default]
    Letters,
    /// Colored square emoji.
    Glyphs,
}

impl Palette {
    fn cell(self, color: Option<Color>) -> String {
        match (self, color) {
            (Self::Letters, Some(color)) => format!("[{color}]"),
            (Self::Letters, None) => "[ ]".to_owned(),
            (Self::Glyphs, Some(color)) => format!("{} ", color.glyph()),
            (Self::Glyphs, None) => "   ".to_owned(),
        }
    }
}

/// Renders the status lines, containers, and victory banner of `session`.
///
/// Containers are drawn as columns with the top slot first, numbered from 1.
/// The selected container is marked with `v`.
#[must_use]
pub fn render(session: &Session, palette: Palette) -> String {
    let mut out = String::new();
    let level = session.level();
    let difficulty = session.difficulty();

    let _ = writeln!(
        out,
        "Level {level} ({}, {} colors)  progress {:.0}%",
        difficulty.tier,
        difficulty.color_count,
        difficulty::progress(level) * 100.0
    );
    let _ = writeln!(
        out,
        "moves: {}  history: {}",
        session.move_count(),
        session.history_depth()
    );
    let _ = writeln!(out);

    let containers = session.arrangement().containers();
    for i in 0..containers.len() {
        out.push_str(if session.selection() == Some(i) {
            " v  "
        } else {
            "    "
        });
    }
    let _ = writeln!(out);

    for slot in (0..Container::CAPACITY).rev() {
        for container in containers {
            out.push_str(&palette.cell(container.units().get(slot).copied()));
            out.push(' ');
        }
        let _ = writeln!(out);
    }
    for i in 1..=containers.len() {
        let _ = write!(out, "{i:^3} ");
    }
    let _ = writeln!(out);

    if session.is_solved() {
        let _ = writeln!(out);
        let _ = writeln!(
            out,
            "*** Level {level} cleared in {} moves! Type n for the next level. ***",
            session.move_count()
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use watersort_game::SessionOptions;

    use super::*;

    fn session(arrangement: &str) -> Session {
        Session::with_arrangement(SessionOptions::default(), arrangement.parse().unwrap())
    }

    #[test]
    fn test_render_columns_top_first() {
        let text = render(&session("RB Y - -"), Palette::Letters);
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines[0], "Level 1 (tutorial, 3 colors)  progress 5%");
        assert_eq!(lines[1], "moves: 0  history: 0");
        // Marker row, then 4 slots from the top.
        assert_eq!(lines[4], "[ ] [ ] [ ] [ ] ");
        assert_eq!(lines[6], "[B] [ ] [ ] [ ] ");
        assert_eq!(lines[7], "[R] [Y] [ ] [ ] ");
        assert_eq!(lines[8], " 1   2   3   4  ");
    }

    #[test]
    fn test_render_marks_selection() {
        let mut s = session("RB Y - -");
        s.select_container(1).unwrap();
        let text = render(&s, Palette::Letters);
        assert_eq!(text.lines().nth(3), Some("     v          "));
    }

    #[test]
    fn test_render_victory_banner() {
        let mut s = session("RRR R");
        s.select_container(1).unwrap();
        s.select_container(0).unwrap();
        let text = render(&s, Palette::Glyphs);
        assert!(text.contains("Level 1 cleared in 1 moves"));
        assert!(text.contains("🟥"));
    }
}
