// ABOUTME: Question bank model - five fixed trigger categories, each with one
// checkbox question. Ordered, immutable, defined entirely at compile time.

#![allow(dead_code)]

use serde::Serialize;
use std::fmt;

/// The five anxiety-trigger categories, in declaration order.
///
/// Declaration order is load-bearing: the questionnaire walks the categories
/// in this order and feedback paragraphs are emitted in this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TriggerCategory {
    Situational,
    Environmental,
    Cognitive,
    Physical,
    Emotional,
}

impl TriggerCategory {
    /// Get all categories in declaration order
    pub fn all() -> &'static [TriggerCategory] {
        &[
            Self::Situational,
            Self::Environmental,
            Self::Cognitive,
            Self::Physical,
            Self::Emotional,
        ]
    }

    /// Stable lowercase key, used by the CLI and config surfaces
    pub const fn key(&self) -> &'static str {
        match self {
            Self::Situational => "situational",
            Self::Environmental => "environmental",
            Self::Cognitive => "cognitive",
            Self::Physical => "physical",
            Self::Emotional => "emotional",
        }
    }

    /// Parse a category from its stable key
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "situational" => Some(Self::Situational),
            "environmental" => Some(Self::Environmental),
            "cognitive" => Some(Self::Cognitive),
            "physical" => Some(Self::Physical),
            "emotional" => Some(Self::Emotional),
            _ => None,
        }
    }

    /// Short display label, used in the progress row
    pub const fn short_label(&self) -> &'static str {
        match self {
            Self::Situational => "Situaționali",
            Self::Environmental => "De mediu",
            Self::Cognitive => "Cognitivi",
            Self::Physical => "Fizici",
            Self::Emotional => "Emoționali",
        }
    }
}

impl fmt::Display for TriggerCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// One questionnaire screen: a title, its category, and the selectable
/// trigger options in display order.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Question {
    title: &'static str,
    category: TriggerCategory,
    options: &'static [&'static str],
}

impl Question {
    /// Display title for this question
    pub const fn title(&self) -> &'static str {
        self.title
    }

    /// Category this question's selections are recorded under
    pub const fn category(&self) -> TriggerCategory {
        self.category
    }

    /// Selectable option labels, in display order
    pub const fn options(&self) -> &'static [&'static str] {
        self.options
    }
}

const QUESTION_BANK: [Question; 5] = [
    Question {
        title: "Declanșatori situaționali",
        category: TriggerCategory::Situational,
        options: &[
            "Vorbitul în public",
            "Spațiile aglomerate",
            "Întâlnirile sociale",
        ],
    },
    Question {
        title: "Declanșatori de mediu",
        category: TriggerCategory::Environmental,
        options: &[
            "Zgomote puternice",
            "Lumini puternice",
            "Anumite mirosuri",
        ],
    },
    Question {
        title: "Declanșatori cognitivi",
        category: TriggerCategory::Cognitive,
        options: &[
            "Dialog intern negativ",
            "Gânduri catastrofice",
            "Teama de eșec",
        ],
    },
    Question {
        title: "Declanșatori fizici",
        category: TriggerCategory::Physical,
        options: &[
            "Lipsa odihnei, a somnului",
            "Foamea",
            "Consumul de cofeină",
        ],
    },
    Question {
        title: "Declanșatori emoționali",
        category: TriggerCategory::Emotional,
        options: &[
            "Stresul",
            "Conflictul",
            "Responsabilitățile copleșitoare",
        ],
    },
];

/// The full ordered question bank
pub fn question_bank() -> &'static [Question] {
    &QUESTION_BANK
}

/// Number of steps in the questionnaire
pub fn question_count() -> usize {
    QUESTION_BANK.len()
}
