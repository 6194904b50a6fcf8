//! Written feedback for each quadrant and position.

use crate::scoring::{Classification, Position, Quadrant};

/// Short and long descriptions of a position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PositionFeedback {
    /// One-line summary.
    pub short: &'static str,
    /// Paragraph-length guidance.
    pub long: &'static str,
}

/// Everything shown beneath a result.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Feedback {
    /// Quadrant description.
    pub quadrant: &'static str,
    /// Position descriptions.
    pub position: PositionFeedback,
}

/// Feedback for a classification.
pub fn feedback_for(c: &Classification) -> Feedback {
    Feedback {
        quadrant: c.quadrant.description(),
        position: c.position.feedback(),
    }
}

impl Quadrant {
    /// One-sentence description of the quadrant.
    pub fn description(&self) -> &'static str {
        match self {
            Quadrant::DisengagedMind => {
                "Low communication and trust with the inner mind. An opportunity for awakening and exploration awaits."
            }
            Quadrant::SkepticalExplorer => {
                "Active practices but low trust in inner wisdom. You are experimenting but not yet fully believing."
            }
            Quadrant::FaithfulSeeker => {
                "Strong trust but limited active communication. Your faith is there, waiting for deeper practice."
            }
            Quadrant::IntegratedAlchemist => {
                "High communication and trust. You are actively engaging with and trusting your inner wisdom."
            }
        }
    }
}

impl Position {
    /// Short and long feedback text.
    pub fn feedback(&self) -> PositionFeedback {
        let (short, long) = match self {
            Position::DetachedObserver => (
                "Minimal engagement with inner processes.",
                "You observe life from a distance, rarely engaging with your inner world. Consider beginning with simple mindfulness or journaling practices to open the door to your inner mind.",
            ),
            Position::OverstimulatedSkeptic => (
                "Some practices but without belief or consistency.",
                "You may have tried various practices but remain skeptical. This position suggests overwhelm or distrust. Focus on one simple, enjoyable practice and approach it with curiosity rather than expectation.",
            ),
            Position::ConditionedThinker => (
                "Some openness but limited by old beliefs.",
                "You have a degree of trust but have not developed practices to engage your inner wisdom. Your conditioning may be holding you back. Explore practices that feel natural and aligned with your values.",
            ),
            Position::FrozenPotential => (
                "Caught between wanting to engage and resistance.",
                "You are at a threshold: some trust, some practice, but not enough to create momentum. This is a pivotal point. Choose one practice and commit to it for 30 days to break through the freeze.",
            ),
            Position::MethodicalPractitioner => (
                "Consistent practice but with analytical distance.",
                "You engage regularly but may treat it like a task rather than a relationship. Your practices are solid, but deeper trust could transform them from routine to revelation. Allow yourself to feel, not just do.",
            ),
            Position::HopefulDoubter => (
                "High engagement with lingering skepticism.",
                "You are deeply involved in practices yet question their efficacy. This tension can be productive: keep practicing while staying open to unexpected insights. Trust may come through experience, not logic.",
            ),
            Position::SpiritualTechnician => (
                "Skilled in methods but tentative in trust.",
                "You have developed a toolkit and some faith, but you may still be testing the waters. You are on the verge of integration. Notice the moments when your practices produce results and let them build your trust.",
            ),
            Position::ExperimentalLearner => (
                "Actively exploring with growing openness.",
                "You are in a powerful growth phase, trying many things with increasing trust. This is a fertile time. Track what works, notice patterns, and let your experiments guide you toward deeper practices.",
            ),
            Position::InnerBeliever => (
                "Strong trust, minimal structured practice.",
                "You believe in the power of the inner mind but have not established regular practices. Your faith is a strong foundation. Now build upon it with consistent, intentional engagement.",
            ),
            Position::VisionaryDreamer => (
                "Faith and occasional practice, not yet integrated.",
                "You trust your inner wisdom and practice sporadically. You are in touch with insights and visions but need more structure to fully embody them. Regular practice will ground your vision in daily life.",
            ),
            Position::SacredObserver => (
                "Deep trust with receptive, contemplative energy.",
                "You have profound faith and a contemplative stance. Your trust is high, and you are beginning to practice more. Consider deepening your practices to match your spiritual openness.",
            ),
            Position::IntentionalYearner => (
                "High faith, growing practice, seeking deeper integration.",
                "You are close to full integration. Your trust is strong, and your practices are increasing. You yearn for deeper connection. The next step is consistency and experimentation; you are ready for transformation.",
            ),
            Position::GroundedMystic => (
                "Steady practice and trust, rooted in reality.",
                "You have a balanced, grounded relationship with your inner mind. Your practice is steady, your trust is solid. You integrate inner wisdom into daily life with grace and pragmatism. Continue deepening.",
            ),
            Position::CreativeConduit => (
                "High practice and trust, flowing with inspiration.",
                "You are a channel for creative insight and inner wisdom. Your practices are robust, and you trust what comes through. This is a powerful position for creative work, teaching, and transformation. Share your gifts.",
            ),
            Position::SymbolicStrategist => (
                "Deep trust and practice with symbolic mastery.",
                "You work skillfully with symbols, dreams, and inner guidance. Your high trust and disciplined practice allow you to navigate life with inner clarity. You may be called to guide others on their path.",
            ),
            Position::EmbodiedTransformer => (
                "Fully integrated inner-outer alignment and mastery.",
                "You have achieved deep integration between inner wisdom and outer action. Your practice is strong, your trust is unwavering. You embody the alchemical transformation. You are likely a teacher, healer, or transformational leader.",
            ),
        };
        PositionFeedback { short, long }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::classify;

    #[test]
    fn test_every_position_has_distinct_feedback() {
        for (i, a) in Position::ALL.iter().enumerate() {
            assert!(!a.feedback().short.is_empty());
            for b in &Position::ALL[i + 1..] {
                assert_ne!(a.feedback().short, b.feedback().short, "{} vs {}", a, b);
            }
        }
    }

    #[test]
    fn test_feedback_for_classification() {
        let fb = feedback_for(&classify(14, 13));
        assert_eq!(fb.quadrant, Quadrant::DisengagedMind.description());
        assert_eq!(fb.position.short, "Minimal engagement with inner processes.");
    }
}
