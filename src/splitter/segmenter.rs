use tracing::debug;

use super::rule::BoundaryRule;
use crate::error::{Result, SplitError};

/// Text of one chapter, from its heading up to the next heading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment<'t> {
    pub heading: &'t str,
    pub content: &'t str,
    pub start: usize,
}

/// Cut `text` into chapter segments at every boundary found by `rule`.
///
/// Anything before the first boundary is not part of any segment; see
/// [`preface`] to recover it.
pub fn segment<'t, R>(text: &'t str, rule: &R) -> Result<Vec<Segment<'t>>>
where
    R: BoundaryRule + ?Sized,
{
    let boundaries = rule.find_boundaries(text);
    if boundaries.is_empty() {
        return Err(SplitError::NoBoundariesFound {
            pattern: rule.describe().to_string(),
        });
    }

    let ends = boundaries
        .iter()
        .skip(1)
        .map(|b| b.start)
        .chain(std::iter::once(text.len()));

    let segments: Vec<Segment<'t>> = boundaries
        .iter()
        .zip(ends)
        .map(|(b, end)| Segment {
            heading: b.heading,
            content: &text[b.start..end],
            start: b.start,
        })
        .collect();

    debug!(
        count = segments.len(),
        dropped_prefix = segments[0].start,
        "segmented text"
    );
    Ok(segments)
}

/// Text preceding the first boundary, if there is any.
pub fn preface<'t, R>(text: &'t str, rule: &R) -> Option<&'t str>
where
    R: BoundaryRule + ?Sized,
{
    let first = rule.find_boundaries(text).first().map(|b| b.start)?;
    (first > 0).then(|| &text[..first])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::splitter::rule::RegexRule;

    fn chapter_rule() -> RegexRule {
        RegexRule::new(r"[Cc]hapter\s*\d+").unwrap()
    }

    #[test]
    fn test_three_chapters() {
        let text = "Chapter 1\nfoo\nChapter 2\nbar\nChapter 3\nbaz";
        let segments = segment(text, &chapter_rule()).unwrap();

        let contents: Vec<&str> = segments.iter().map(|s| s.content).collect();
        assert_eq!(contents, vec!["Chapter 1\nfoo\n", "Chapter 2\nbar\n", "Chapter 3\nbaz"]);
        let headings: Vec<&str> = segments.iter().map(|s| s.heading).collect();
        assert_eq!(headings, vec!["Chapter 1", "Chapter 2", "Chapter 3"]);
    }

    #[test]
    fn test_no_match_reports_no_boundaries() {
        let err = segment("just some prose\nwithout headings", &chapter_rule()).unwrap_err();
        assert!(matches!(err, SplitError::NoBoundariesFound { .. }));
    }

    #[test]
    fn test_empty_text() {
        let err = segment("", &chapter_rule()).unwrap_err();
        assert!(matches!(err, SplitError::NoBoundariesFound { .. }));
    }

    #[test]
    fn test_preface_is_dropped() {
        let text = "Preface\nthanks to everyone\n\nChapter 1\nIt begins.\nChapter 2\nIt ends.";
        let segments = segment(text, &chapter_rule()).unwrap();

        assert_eq!(segments.len(), 2);
        assert!(segments[0].content.starts_with("Chapter 1"));
        assert_eq!(preface(text, &chapter_rule()), Some("Preface\nthanks to everyone\n\n"));
    }

    #[test]
    fn test_match_at_start_has_no_preface() {
        let text = "Chapter 1\nbody";
        assert_eq!(preface(text, &chapter_rule()), None);
        assert_eq!(segment(text, &chapter_rule()).unwrap()[0].content, text);
    }

    #[test]
    fn test_concatenation_covers_text_from_first_match() {
        let texts = [
            "intro\nChapter 1 a\nChapter 2 b\n\nChapter 10 c\n",
            "chapter1chapter2chapter3",
            "제목\n\n第1章 一\n内容\n",
        ];
        let rules = [chapter_rule(), chapter_rule(), RegexRule::new(r"第\d+章").unwrap()];

        for (text, rule) in texts.iter().zip(rules.iter()) {
            let segments = segment(text, rule).unwrap();
            let joined: String = segments.iter().map(|s| s.content).collect();
            let first = segments[0].start;
            assert_eq!(joined, &text[first..]);
        }
    }

    #[test]
    fn test_korean_headings() {
        let rule = RegexRule::new(r"#?\s*제\d+장").unwrap();
        let text = "# 제1장\n봄\n# 제2장\n여름\n";
        let segments = segment(text, &rule).unwrap();
        assert_eq!(segments.len(), 2);
        assert_eq!(segments[0].heading, "# 제1장");
        assert_eq!(segments[0].content, "# 제1장\n봄\n");
        assert_eq!(segments[1].content, "# 제2장\n여름\n");
    }
}
