//! Plain-text drawing of hexagrams and trigrams

use crate::domain::{Hexagram, Line, MovingLine, Trigram};

const SOLID: &str = "━━━━━━━━━━━";
const BROKEN: &str = "━━━━   ━━━━";

/// One drawn line of a figure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrawnLine {
    pub text: String,
    pub moving: bool,
}

fn draw(line: Line) -> &'static str {
    match line {
        Line::Solid => SOLID,
        Line::Broken => BROKEN,
    }
}

/// Draw a hexagram top line first, marking the moving line if given.
pub fn hexagram_lines(hexagram: &Hexagram, moving: Option<MovingLine>) -> Vec<DrawnLine> {
    hexagram
        .lines()
        .iter()
        .enumerate()
        .rev()
        .map(|(index, &line)| {
            let is_moving = moving.is_some_and(|m| m.index() == index);
            let text = if is_moving {
                format!("{} ◀ 動 {}", draw(line), index + 1)
            } else {
                draw(line).to_string()
            };
            DrawnLine {
                text,
                moving: is_moving,
            }
        })
        .collect()
}

/// Caption of a hexagram: name plus upper/lower trigram.
pub fn caption(hexagram: &Hexagram) -> String {
    let (upper, lower) = (hexagram.upper(), hexagram.lower());
    format!(
        "{}  upper {} {} ({})  lower {} {} ({})",
        hexagram,
        upper.display_name,
        upper.name,
        upper.element,
        lower.display_name,
        lower.name,
        lower.element
    )
}

/// Compact pattern of a trigram, top line first, e.g. "━━━ ━ ━ ━━━".
pub fn trigram_pattern(trigram: &Trigram) -> String {
    trigram
        .pattern
        .iter()
        .map(|line| match line {
            Line::Solid => "━━━",
            Line::Broken => "━ ━",
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TrigramId;

    #[test]
    fn given_hexagram_when_drawing_then_top_line_first() {
        // Kun over Qian (Tai): top three broken, bottom three solid
        let tai = Hexagram::from_trigrams(TrigramId::KUN, TrigramId::QIAN);
        let drawn = hexagram_lines(&tai, None);

        assert_eq!(drawn.len(), 6);
        assert_eq!(drawn[0].text, BROKEN);
        assert_eq!(drawn[5].text, SOLID);
        assert!(drawn.iter().all(|l| !l.moving));
    }

    #[test]
    fn given_moving_line_when_drawing_then_marks_that_line_only() {
        let tai = Hexagram::from_trigrams(TrigramId::KUN, TrigramId::QIAN);
        let drawn = hexagram_lines(&tai, Some(MovingLine::new(2).unwrap()));

        let marked: Vec<usize> = drawn
            .iter()
            .enumerate()
            .filter(|(_, l)| l.moving)
            .map(|(i, _)| i)
            .collect();
        // line 2 from the bottom is row 4 from the top
        assert_eq!(marked, vec![4]);
        assert!(drawn[4].text.ends_with("動 2"));
    }

    #[test]
    fn given_hexagram_when_captioning_then_names_trigrams() {
        let tai = Hexagram::from_trigrams(TrigramId::KUN, TrigramId::QIAN);
        let text = caption(&tai);
        assert!(text.starts_with("#11 Tai 泰"));
        assert!(text.contains("upper 坤 Kun (Earth)"));
        assert!(text.contains("lower 乾 Qian (Heaven)"));
    }

    #[test]
    fn test_trigram_pattern() {
        let li = Trigram::get(TrigramId::LI);
        assert_eq!(trigram_pattern(li), "━━━ ━ ━ ━━━");
    }
}
