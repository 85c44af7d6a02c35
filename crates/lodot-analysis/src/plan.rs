use lodot_types::{FOCUS_ORDER, Focus};

/// Which modules a focus list activates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FocusPlan {
    pub text: bool,
    pub words: bool,
    pub pos: bool,
    pub composition: bool,
    pub read: bool,
    pub sent: bool,
    pub lexicon: bool,
    pub ngrams: bool,
}

impl FocusPlan {
    pub fn contains(&self, focus: Focus) -> bool {
        match focus {
            Focus::Text => self.text,
            Focus::Words => self.words,
            Focus::Pos => self.pos,
            Focus::Composition => self.composition,
            Focus::Read => self.read,
            Focus::Sent => self.sent,
            Focus::Lexicon => self.lexicon,
            Focus::Ngrams => self.ngrams,
        }
    }

    fn enable(&mut self, focus: Focus) {
        match focus {
            Focus::Text => self.text = true,
            Focus::Words => self.words = true,
            Focus::Pos => self.pos = true,
            Focus::Composition => self.composition = true,
            Focus::Read => self.read = true,
            Focus::Sent => self.sent = true,
            Focus::Lexicon => self.lexicon = true,
            Focus::Ngrams => self.ngrams = true,
        }
    }

    /// Active focuses in canonical order.
    pub fn focuses(&self) -> Vec<Focus> {
        FOCUS_ORDER
            .iter()
            .copied()
            .filter(|focus| self.contains(*focus))
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Collapse duplicates; an empty list falls back to `text`.
pub fn focus_plan_for(focuses: &[Focus]) -> FocusPlan {
    let mut plan = FocusPlan::default();
    for focus in focuses {
        plan.enable(*focus);
    }
    if plan.is_empty() {
        plan.text = true;
    }
    plan
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicates_collapse_into_canonical_order() {
        let plan = focus_plan_for(&[Focus::Sent, Focus::Text, Focus::Sent, Focus::Read]);
        assert_eq!(plan.focuses(), vec![Focus::Text, Focus::Read, Focus::Sent]);
    }

    #[test]
    fn empty_focus_list_defaults_to_text() {
        assert_eq!(focus_plan_for(&[]).focuses(), vec![Focus::Text]);
    }

    #[test]
    fn every_focus_can_be_enabled() {
        let plan = focus_plan_for(Focus::all());
        assert_eq!(plan.focuses().len(), FOCUS_ORDER.len());
    }
}
