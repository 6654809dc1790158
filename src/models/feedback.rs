// ABOUTME: Static per-category advice table and the feedback text builder for
// the results screen.

#![allow(dead_code)]

use super::answers::AnswerState;
use super::questions::TriggerCategory;

/// Shown when no trigger was selected in any category
pub const NO_TRIGGERS_MESSAGE: &str = "Nu ai selectat niciun declanșator. Este important să identifici factorii care îți pot influența anxietatea pentru a putea dezvolta strategii eficiente de gestionare.";

/// Fixed advice paragraph for a category.
///
/// One paragraph per category, chosen only by whether the category has any
/// selection at all. Closed table, no other inputs.
pub const fn advice(category: TriggerCategory) -> &'static str {
    match category {
        TriggerCategory::Situational => "Observ că situațiile sociale îți provoacă anxietate. Poți începe prin expunerea graduală la astfel de situații, începând cu cele mai puțin anxiogene.",
        TriggerCategory::Environmental => "Factorii de mediu par să fie importanți pentru tine. Încearcă să-ți creezi un mediu controlat și să ai pregătite strategii de coping pentru momentele când nu poți controla mediul.",
        TriggerCategory::Cognitive => "Gândurile negative joacă un rol important în anxietatea ta. Tehnicile de restructurare cognitivă ar putea fi foarte utile pentru tine.",
        TriggerCategory::Physical => "Starea fizică îți influențează nivelul de anxietate. Focusează-te pe îmbunătățirea rutinei de somn și a obiceiurilor alimentare.",
        TriggerCategory::Emotional => "Factori emoționali puternici îți declanșează anxietatea. Învățarea unor tehnici de reglare emoțională ar putea fi benefică.",
    }
}

/// Build the results text for an answer record.
///
/// With nothing selected the fixed zero-trigger message is returned.
/// Otherwise each non-empty category contributes its advice paragraph, in
/// category declaration order regardless of toggle order, joined by a blank
/// line. The free-text field never influences the output.
pub fn generate_feedback(answers: &AnswerState) -> String {
    if answers.total_selected() == 0 {
        return NO_TRIGGERS_MESSAGE.to_string();
    }

    let paragraphs: Vec<&str> = TriggerCategory::all()
        .iter()
        .copied()
        .filter(|category| answers.selected_count(*category) > 0)
        .map(advice)
        .collect();

    paragraphs.join("\n\n")
}
