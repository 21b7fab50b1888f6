//! Two-segment response splitting.
//!
//! Text generators are asked for a labelled full answer and a labelled
//! short summary, e.g. `TRANSLATION: ... SUMMARY: ...`. When either label is
//! missing the splitter degrades to a fixed fallback and never fails.

use serde::Serialize;

pub const ANSWER_LABEL: &str = "TRANSLATION:";
pub const SUMMARY_LABEL: &str = "SUMMARY:";

/// Summary length used when the generator ignored the format.
pub const FALLBACK_SUMMARY_CHARS: usize = 150;

/// Which segment the generator was asked to emit first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentOrder {
    AnswerFirst,
    SummaryFirst,
}

/// Labels, order and fallback for one two-segment contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SegmentProtocol {
    pub answer_label: String,
    pub summary_label: String,
    pub order: SegmentOrder,
    /// Characters of raw text used as the fallback summary.
    /// `None` keeps the whole text.
    pub fallback_summary_chars: Option<usize>,
}

/// Result of a split.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Segments {
    pub answer: String,
    pub summary: String,
    /// `false` when the fallback was used.
    pub honored: bool,
}

impl SegmentProtocol {
    /// `TRANSLATION: <answer> SUMMARY: <summary>`, used by chat and advisory.
    pub fn advisory() -> Self {
        Self {
            answer_label: ANSWER_LABEL.to_string(),
            summary_label: SUMMARY_LABEL.to_string(),
            order: SegmentOrder::AnswerFirst,
            fallback_summary_chars: Some(FALLBACK_SUMMARY_CHARS),
        }
    }

    /// `SUMMARY: <summary> TRANSLATION: <answer>`, used by translation.
    pub fn translation() -> Self {
        Self {
            answer_label: ANSWER_LABEL.to_string(),
            summary_label: SUMMARY_LABEL.to_string(),
            order: SegmentOrder::SummaryFirst,
            fallback_summary_chars: None,
        }
    }

    /// Instruction line asking a generator to follow this protocol.
    pub fn format_instruction(&self, answer_hint: &str, summary_hint: &str) -> String {
        match self.order {
            SegmentOrder::AnswerFirst => format!(
                "STRICT FORMAT: {} [{}] {} [{}]",
                self.answer_label, answer_hint, self.summary_label, summary_hint
            ),
            SegmentOrder::SummaryFirst => format!(
                "STRICT FORMAT: {} [{}] {} [{}]",
                self.summary_label, summary_hint, self.answer_label, answer_hint
            ),
        }
    }

    /// Split `text` into answer and summary.
    ///
    /// Both labels must be present. The text is cut at the first occurrence
    /// of the label expected second; the leading segment has every
    /// occurrence of its own label removed. Both halves are trimmed.
    pub fn split(&self, text: &str) -> Segments {
        if !text.contains(self.answer_label.as_str()) || !text.contains(self.summary_label.as_str())
        {
            tracing::debug!(len = text.len(), "Two-segment labels missing, using fallback");
            return self.fallback(text);
        }

        let (leading_label, trailing_label) = match self.order {
            SegmentOrder::AnswerFirst => (&self.answer_label, &self.summary_label),
            SegmentOrder::SummaryFirst => (&self.summary_label, &self.answer_label),
        };

        let Some((head, tail)) = text.split_once(trailing_label.as_str()) else {
            return self.fallback(text);
        };
        let leading = head.replace(leading_label.as_str(), "").trim().to_string();
        let trailing = tail.trim().to_string();

        let (answer, summary) = match self.order {
            SegmentOrder::AnswerFirst => (leading, trailing),
            SegmentOrder::SummaryFirst => (trailing, leading),
        };
        Segments {
            answer,
            summary,
            honored: true,
        }
    }

    fn fallback(&self, text: &str) -> Segments {
        let summary = match self.fallback_summary_chars {
            Some(limit) => text.chars().take(limit).collect(),
            None => text.to_string(),
        };
        Segments {
            answer: text.to_string(),
            summary,
            honored: false,
        }
    }
}

/// Split with the advisory (answer-first) protocol.
pub fn split(text: &str) -> (String, String) {
    let segments = SegmentProtocol::advisory().split(text);
    (segments.answer, segments.summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_labelled_answer_and_summary() {
        assert_eq!(
            split("TRANSLATION: X SUMMARY: Y"),
            ("X".to_string(), "Y".to_string())
        );
    }

    #[test]
    fn multiline_segments_are_trimmed() {
        let text = "TRANSLATION:\n**Diagnosis**\nApply copper.\n\nSUMMARY:\n  Spray today.  ";
        let segments = SegmentProtocol::advisory().split(text);
        assert!(segments.honored);
        assert_eq!(segments.answer, "**Diagnosis**\nApply copper.");
        assert_eq!(segments.summary, "Spray today.");
    }

    #[test]
    fn unlabelled_text_falls_back_to_prefix() {
        let text = "a".repeat(400);
        let (answer, summary) = split(&text);
        assert_eq!(answer, text);
        assert_eq!(summary.chars().count(), FALLBACK_SUMMARY_CHARS);
    }

    #[test]
    fn short_unlabelled_text_is_its_own_summary() {
        assert_eq!(
            split("Local logic active."),
            ("Local logic active.".to_string(), "Local logic active.".to_string())
        );
    }

    #[test]
    fn one_label_is_not_enough() {
        let segments = SegmentProtocol::advisory().split("TRANSLATION: only the answer");
        assert!(!segments.honored);
        assert_eq!(segments.answer, "TRANSLATION: only the answer");
    }

    #[test]
    fn fallback_counts_characters_not_bytes() {
        let text = "நெல்".repeat(100);
        let (_, summary) = split(&text);
        assert_eq!(summary.chars().count(), FALLBACK_SUMMARY_CHARS);
    }

    #[test]
    fn summary_first_protocol() {
        let segments = SegmentProtocol::translation()
            .split("SUMMARY: Short. TRANSLATION: Full translated text.");
        assert!(segments.honored);
        assert_eq!(segments.answer, "Full translated text.");
        assert_eq!(segments.summary, "Short.");
    }

    #[test]
    fn translation_fallback_keeps_whole_text() {
        let segments = SegmentProtocol::translation().split("no labels here");
        assert_eq!(segments.answer, "no labels here");
        assert_eq!(segments.summary, "no labels here");
    }

    #[test]
    fn answer_label_repeated_in_answer_is_removed() {
        let (answer, summary) = split("TRANSLATION: TRANSLATION: X SUMMARY: Y");
        assert_eq!(answer, "X");
        assert_eq!(summary, "Y");
    }

    #[test]
    fn format_instruction_follows_order() {
        let advisory = SegmentProtocol::advisory().format_instruction("Full", "Short");
        assert_eq!(advisory, "STRICT FORMAT: TRANSLATION: [Full] SUMMARY: [Short]");
        let translation = SegmentProtocol::translation().format_instruction("Full", "Short");
        assert_eq!(translation, "STRICT FORMAT: SUMMARY: [Short] TRANSLATION: [Full]");
    }
}
