//! The IMII v2 question catalog.
//!
//! Twenty-seven statements rated on a 1–5 scale. Items 1–14 measure
//! communication with the inner mind, items 15–27 measure trust in it.
//!
//! ```rust
//! use mindtrx_core::questions::{question, Section, QUESTION_COUNT};
//!
//! assert_eq!(QUESTION_COUNT, 27);
//! assert_eq!(question(15).map(|q| q.section), Some(Section::Trust));
//! ```

use core::ops::RangeInclusive;

use crate::scoring::{COMM_MAX_RAW, TRUST_MAX_RAW};

/// Number of items in the inventory.
pub const QUESTION_COUNT: usize = 27;

/// Labels for ratings 1 through 5, in order.
pub const SCALE_LABELS: [&str; 5] = [
    "Rarely/Never true",
    "Seldom true",
    "Sometimes true",
    "Often true",
    "Very true / Always true",
];

/// Which sub-score a question feeds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum Section {
    /// Questions 1–14: frequency of inner-mind engagement practices.
    Communication,
    /// Questions 15–27: reliance on inner guidance and intuition.
    Trust,
}

impl Section {
    /// Section heading shown above its questions.
    pub fn title(&self) -> &'static str {
        match self {
            Section::Communication => "Communication with the Inner Mind",
            Section::Trust => "Trust in the Inner Mind",
        }
    }

    /// One-line prompt for the section.
    pub fn description(&self) -> &'static str {
        match self {
            Section::Communication => {
                "How actively do you engage in practices that connect you with your inner self?"
            }
            Section::Trust => {
                "How much do you trust and act upon your inner wisdom and intuition?"
            }
        }
    }

    /// Highest achievable raw score (every item rated 5).
    pub fn max_raw(&self) -> i32 {
        match self {
            Section::Communication => COMM_MAX_RAW,
            Section::Trust => TRUST_MAX_RAW,
        }
    }

    /// Question ids belonging to this section.
    pub fn question_ids(&self) -> RangeInclusive<u8> {
        match self {
            Section::Communication => 1..=14,
            Section::Trust => 15..=27,
        }
    }
}

/// A single inventory item.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Question {
    /// 1-based id; also the answer-set key.
    pub id: u8,
    /// Sub-score this item contributes to.
    pub section: Section,
    /// Statement shown to the respondent.
    pub text: &'static str,
}

const fn comm(id: u8, text: &'static str) -> Question {
    Question { id, section: Section::Communication, text }
}

const fn trust(id: u8, text: &'static str) -> Question {
    Question { id, section: Section::Trust, text }
}

/// All questions in presentation order. `QUESTIONS[i].id == i + 1`.
pub const QUESTIONS: [Question; QUESTION_COUNT] = [
    comm(1, "I journal about dreams, thoughts, or emotions."),
    comm(2, "I meditate or sit in silence regularly."),
    comm(3, "I use self-hypnosis / mental rehearsal."),
    comm(4, "I visualize goals or healing imagery intentionally."),
    comm(5, "I listen to Paraliminals or guided audio."),
    comm(6, "I engage in prayer or spiritual dialogue."),
    comm(7, "I use affirmations (spoken, written, displayed)."),
    comm(8, "I maintain a vision board / symbolic imagery collection."),
    comm(9, "I participate in spiritual ceremonies / energy rituals."),
    comm(10, "I track or interpret my dreams."),
    comm(11, "I do automatic writing / freewriting."),
    comm(12, "I practice somatic techniques (breathwork, yoga, dance)."),
    comm(13, "I use biofeedback or neurofeedback tools."),
    comm(
        14,
        "I explore altered states (float tanks, trance, Holosync, Audio Visual Entrainment, Shamanic journeying).",
    ),
    trust(15, "I believe the inner mind holds valuable insights."),
    trust(16, "I trust my intuitive nudges and gut feelings."),
    trust(17, "I act on synchronicities or inner signs."),
    trust(18, "I apply dream insights or symbolic messages."),
    trust(19, "I study intuition / transformation / inner development."),
    trust(20, "I join workshops / retreats / coaching for growth."),
    trust(
        21,
        "I have used psychedelics/entheogens for awakening to higher consciousness.",
    ),
    trust(22, "I trust non-linear inspiration and creative flow."),
    trust(23, "I feel guided by a deeper or higher self."),
    trust(24, "I integrate intuitive insights into decisions."),
    trust(25, "I surrender control to inner knowing when appropriate."),
    trust(
        26,
        "I feel confident in the spontaneous insights and inspiration that come to me.",
    ),
    trust(27, "I'm comfortable with paradox, ambiguity, and symbolic meaning."),
];

/// Look up a question by id. Returns `None` outside 1–27.
pub fn question(id: u8) -> Option<&'static Question> {
    let idx = usize::from(id).checked_sub(1)?;
    QUESTIONS.get(idx)
}
