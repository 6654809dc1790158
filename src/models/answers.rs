// ABOUTME: Answer record for the questionnaire - selected trigger labels per
// category, plus a free-text field no input control writes to.

#![allow(dead_code)]

use super::questions::TriggerCategory;

/// Selected trigger labels, grouped by category.
///
/// Each category holds a duplicate-free list of labels; `toggle` checks
/// membership before inserting, so repeated toggles flip membership rather
/// than stacking entries. `toggle` itself does not validate labels against
/// the question bank; every in-app caller resolves labels from the bank
/// before calling, which keeps selections a subset of the rendered options.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnswerState {
    situational: Vec<String>,
    environmental: Vec<String>,
    cognitive: Vec<String>,
    physical: Vec<String>,
    emotional: Vec<String>,
    /// Free-text field carried in the record; no input control writes to it
    pub other_text: String,
}

impl AnswerState {
    pub fn new() -> Self {
        Self::default()
    }

    fn entries(&self, category: TriggerCategory) -> &Vec<String> {
        match category {
            TriggerCategory::Situational => &self.situational,
            TriggerCategory::Environmental => &self.environmental,
            TriggerCategory::Cognitive => &self.cognitive,
            TriggerCategory::Physical => &self.physical,
            TriggerCategory::Emotional => &self.emotional,
        }
    }

    fn entries_mut(&mut self, category: TriggerCategory) -> &mut Vec<String> {
        match category {
            TriggerCategory::Situational => &mut self.situational,
            TriggerCategory::Environmental => &mut self.environmental,
            TriggerCategory::Cognitive => &mut self.cognitive,
            TriggerCategory::Physical => &mut self.physical,
            TriggerCategory::Emotional => &mut self.emotional,
        }
    }

    /// Flip membership of `option` in the category's selection.
    ///
    /// Removing is exact string match; adding appends. Toggling the same
    /// label twice restores the selection it started from.
    pub fn toggle(&mut self, category: TriggerCategory, option: &str) {
        let entries = self.entries_mut(category);
        if let Some(position) = entries.iter().position(|item| item == option) {
            entries.remove(position);
        } else {
            entries.push(option.to_string());
        }
    }

    /// Whether `option` is currently selected in the category
    pub fn is_selected(&self, category: TriggerCategory, option: &str) -> bool {
        self.entries(category).iter().any(|item| item == option)
    }

    /// Selected labels for one category, in toggle order
    pub fn selected(&self, category: TriggerCategory) -> &[String] {
        self.entries(category)
    }

    /// Number of selected labels in one category
    pub fn selected_count(&self, category: TriggerCategory) -> usize {
        self.entries(category).len()
    }

    /// Total selected labels across all five categories.
    ///
    /// The free-text field is not counted, so an untouched questionnaire
    /// reports zero.
    pub fn total_selected(&self) -> usize {
        TriggerCategory::all()
            .iter()
            .map(|category| self.selected_count(*category))
            .sum()
    }

    /// Reset every category and the free-text field to empty
    pub fn clear(&mut self) {
        self.situational.clear();
        self.environmental.clear();
        self.cognitive.clear();
        self.physical.clear();
        self.emotional.clear();
        self.other_text.clear();
    }
}
