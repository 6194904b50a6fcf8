/*
 * MINDTRX Inner Mind Integration Inventory (IMII v2).
 *
 * This source code is licensed under the Business Source License 1.1.
 * See LICENSE in the root directory for full details.
 */

//! Score classification: rescaling, banding, quadrants and positions.
//!
//! - [`classify`]: maps `(comm_raw, trust_raw)` to a [`Classification`].
//! - [`Band`]: four ordinal buckets over the 0–50 scale.
//! - [`Quadrant`]: four regions split at [`SCORE_CUTOFF`] on each axis.
//! - [`Position`]: sixteen labels, four per quadrant, picked from [`POSITION_RULES`].
//!
//! # Invariants
//!
//! - `classify` is total over `i32`: no panics, no error path.
//! - For in-range raw scores, `comm50` and `trust50` lie in [0, 50].
//! - A position always decodes back to the quadrant and band pair that selected it.
//! - no_std compatible; zero unsafe code.
//!
//! # Rounding
//!
//! Rescaling rounds half up (towards +∞), the `Math.round` convention. It is
//! computed on integers, so there is no floating-point drift. With maxima of 70
//! and 65 an integer raw score never lands exactly on a `.5`.

// ─── Constants ───────────────────────────────────────────────────────────────

/// Lowest normalized score that counts as "high" on either axis.
pub const SCORE_CUTOFF: i32 = 26;

/// Maximum raw communication score (14 items × 5).
pub const COMM_MAX_RAW: i32 = 70;

/// Maximum raw trust score (13 items × 5).
pub const TRUST_MAX_RAW: i32 = 65;

/// Top of the normalized scale.
pub const NORMALIZED_MAX: i32 = 50;

/// Rescale `raw / max_raw` onto [0, 50] and round half up.
///
/// `max_raw` is one of the two crate constants, so the divisor is never zero.
fn rescale(raw: i32, max_raw: i32) -> i32 {
    let numerator = 2 * i64::from(raw) * i64::from(NORMALIZED_MAX) + i64::from(max_raw);
    let denominator = 2 * i64::from(max_raw);
    numerator.div_euclid(denominator) as i32
}

/// Normalize a raw communication score: `round(raw / 70 × 50)`.
pub fn normalize_comm(comm_raw: i32) -> i32 {
    rescale(comm_raw, COMM_MAX_RAW)
}

/// Normalize a raw trust score: `round(raw / 65 × 50)`.
pub fn normalize_trust(trust_raw: i32) -> i32 {
    rescale(trust_raw, TRUST_MAX_RAW)
}

// ─── Band ────────────────────────────────────────────────────────────────────

/// Ordinal bucket of a normalized score.
///
/// ```text
///  0 ─ 12 │ 13 ─ 25 │ 26 ─ 38 │ 39 ─ 50
/// lowLow  │ lowHigh │ highLow │ highHigh
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub enum Band {
    /// 0–12 (and anything below).
    LowLow,
    /// 13–25.
    LowHigh,
    /// 26–38.
    HighLow,
    /// 39–50 (and anything above).
    HighHigh,
}

impl Band {
    /// All bands in ascending order.
    pub const ALL: [Band; 4] = [Band::LowLow, Band::LowHigh, Band::HighLow, Band::HighHigh];

    /// Band a normalized score. Thresholds 12/25/38 are inclusive upper bounds.
    pub fn from_score50(v: i32) -> Self {
        if v <= 12 {
            Band::LowLow
        } else if v <= 25 {
            Band::LowHigh
        } else if v <= 38 {
            Band::HighLow
        } else {
            Band::HighHigh
        }
    }

    /// Wire label (`lowLow`, `lowHigh`, `highLow`, `highHigh`).
    pub fn label(&self) -> &'static str {
        match self {
            Band::LowLow => "lowLow",
            Band::LowHigh => "lowHigh",
            Band::HighLow => "highLow",
            Band::HighHigh => "highHigh",
        }
    }

    /// `true` for the two bands at or above [`SCORE_CUTOFF`].
    pub fn is_high(&self) -> bool {
        matches!(self, Band::HighLow | Band::HighHigh)
    }
}

impl core::fmt::Display for Band {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.label())
    }
}

// ─── Quadrant ────────────────────────────────────────────────────────────────

/// Top-level region of the (communication × trust) plane.
///
/// ```text
///               │ comm < 26           │ comm ≥ 26
/// ──────────────┼─────────────────────┼─────────────────────
/// trust ≥ 26    │ Faithful Seeker     │ Integrated Alchemist
/// trust < 26    │ Disengaged Mind     │ Skeptical Explorer
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Quadrant {
    /// Low communication, low trust.
    #[cfg_attr(feature = "serde", serde(rename = "Disengaged Mind"))]
    DisengagedMind,
    /// High communication, low trust.
    #[cfg_attr(feature = "serde", serde(rename = "Skeptical Explorer"))]
    SkepticalExplorer,
    /// Low communication, high trust.
    #[cfg_attr(feature = "serde", serde(rename = "Faithful Seeker"))]
    FaithfulSeeker,
    /// High communication, high trust.
    #[cfg_attr(feature = "serde", serde(rename = "Integrated Alchemist"))]
    IntegratedAlchemist,
}

impl Quadrant {
    /// All quadrants, in [`POSITION_RULES`] order.
    pub const ALL: [Quadrant; 4] = [
        Quadrant::DisengagedMind,
        Quadrant::SkepticalExplorer,
        Quadrant::FaithfulSeeker,
        Quadrant::IntegratedAlchemist,
    ];

    /// Pick the quadrant for a pair of normalized scores.
    ///
    /// A score equal to [`SCORE_CUTOFF`] counts as high.
    pub fn from_scores(comm50: i32, trust50: i32) -> Self {
        match (comm50 >= SCORE_CUTOFF, trust50 >= SCORE_CUTOFF) {
            (false, false) => Quadrant::DisengagedMind,
            (true, false) => Quadrant::SkepticalExplorer,
            (false, true) => Quadrant::FaithfulSeeker,
            (true, true) => Quadrant::IntegratedAlchemist,
        }
    }

    /// Display label, e.g. `"Disengaged Mind"`.
    pub fn label(&self) -> &'static str {
        match self {
            Quadrant::DisengagedMind => "Disengaged Mind",
            Quadrant::SkepticalExplorer => "Skeptical Explorer",
            Quadrant::FaithfulSeeker => "Faithful Seeker",
            Quadrant::IntegratedAlchemist => "Integrated Alchemist",
        }
    }

    /// Parse a display label back into a quadrant.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|q| q.label() == label)
    }

    /// `true` when communication is on the high side of the cutoff.
    pub fn comm_high(&self) -> bool {
        matches!(self, Quadrant::SkepticalExplorer | Quadrant::IntegratedAlchemist)
    }

    /// `true` when trust is on the high side of the cutoff.
    pub fn trust_high(&self) -> bool {
        matches!(self, Quadrant::FaithfulSeeker | Quadrant::IntegratedAlchemist)
    }

    /// The two communication bands reachable inside this quadrant.
    pub fn comm_bands(&self) -> [Band; 2] {
        side_bands(self.comm_high())
    }

    /// The two trust bands reachable inside this quadrant.
    pub fn trust_bands(&self) -> [Band; 2] {
        side_bands(self.trust_high())
    }

    /// The position rule that governs this quadrant.
    pub fn rule(&self) -> &'static PositionRule {
        let idx = match self {
            Quadrant::DisengagedMind => 0,
            Quadrant::SkepticalExplorer => 1,
            Quadrant::FaithfulSeeker => 2,
            Quadrant::IntegratedAlchemist => 3,
        };
        &POSITION_RULES[idx]
    }
}

impl core::fmt::Display for Quadrant {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.label())
    }
}

fn side_bands(high: bool) -> [Band; 2] {
    if high {
        [Band::HighLow, Band::HighHigh]
    } else {
        [Band::LowLow, Band::LowHigh]
    }
}

// ─── Position ────────────────────────────────────────────────────────────────

/// Fine-grained label inside a quadrant. Sixteen in total, four per quadrant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Position {
    // Disengaged Mind
    /// Disengaged Mind, comm lowLow / trust lowLow.
    #[cfg_attr(feature = "serde", serde(rename = "Detached Observer"))]
    DetachedObserver,
    /// Disengaged Mind, comm lowHigh / trust lowLow.
    #[cfg_attr(feature = "serde", serde(rename = "Overstimulated Skeptic"))]
    OverstimulatedSkeptic,
    /// Disengaged Mind, comm lowLow / trust lowHigh.
    #[cfg_attr(feature = "serde", serde(rename = "Conditioned Thinker"))]
    ConditionedThinker,
    /// Disengaged Mind default (comm lowHigh / trust lowHigh).
    #[cfg_attr(feature = "serde", serde(rename = "Frozen Potential"))]
    FrozenPotential,
    // Skeptical Explorer
    /// Skeptical Explorer, comm highLow / trust lowLow.
    #[cfg_attr(feature = "serde", serde(rename = "Methodical Practitioner"))]
    MethodicalPractitioner,
    /// Skeptical Explorer, comm highHigh / trust lowLow.
    #[cfg_attr(feature = "serde", serde(rename = "Hopeful Doubter"))]
    HopefulDoubter,
    /// Skeptical Explorer, comm highLow / trust lowHigh.
    #[cfg_attr(feature = "serde", serde(rename = "Spiritual Technician"))]
    SpiritualTechnician,
    /// Skeptical Explorer default (comm highHigh / trust lowHigh).
    #[cfg_attr(feature = "serde", serde(rename = "Experimental Learner"))]
    ExperimentalLearner,
    // Faithful Seeker
    /// Faithful Seeker, comm lowLow / trust highLow.
    #[cfg_attr(feature = "serde", serde(rename = "Inner Believer"))]
    InnerBeliever,
    /// Faithful Seeker, comm lowHigh / trust highLow.
    #[cfg_attr(feature = "serde", serde(rename = "Visionary Dreamer"))]
    VisionaryDreamer,
    /// Faithful Seeker, comm lowLow / trust highHigh.
    #[cfg_attr(feature = "serde", serde(rename = "Sacred Observer"))]
    SacredObserver,
    /// Faithful Seeker default (comm lowHigh / trust highHigh).
    #[cfg_attr(feature = "serde", serde(rename = "Intentional Yearner"))]
    IntentionalYearner,
    // Integrated Alchemist
    /// Integrated Alchemist, comm highLow / trust highLow.
    #[cfg_attr(feature = "serde", serde(rename = "Grounded Mystic"))]
    GroundedMystic,
    /// Integrated Alchemist, comm highHigh / trust highLow.
    #[cfg_attr(feature = "serde", serde(rename = "Creative Conduit"))]
    CreativeConduit,
    /// Integrated Alchemist, comm highLow / trust highHigh.
    #[cfg_attr(feature = "serde", serde(rename = "Symbolic Strategist"))]
    SymbolicStrategist,
    /// Integrated Alchemist default (comm highHigh / trust highHigh).
    #[cfg_attr(feature = "serde", serde(rename = "Embodied Transformer"))]
    EmbodiedTransformer,
}

impl Position {
    /// All sixteen positions, grouped by quadrant.
    pub const ALL: [Position; 16] = [
        Position::DetachedObserver,
        Position::OverstimulatedSkeptic,
        Position::ConditionedThinker,
        Position::FrozenPotential,
        Position::MethodicalPractitioner,
        Position::HopefulDoubter,
        Position::SpiritualTechnician,
        Position::ExperimentalLearner,
        Position::InnerBeliever,
        Position::VisionaryDreamer,
        Position::SacredObserver,
        Position::IntentionalYearner,
        Position::GroundedMystic,
        Position::CreativeConduit,
        Position::SymbolicStrategist,
        Position::EmbodiedTransformer,
    ];

    /// Look up the position for a quadrant and band pair.
    ///
    /// The quadrant's three explicit rows are checked first; anything else
    /// lands on the quadrant's fallback position.
    pub fn select(quadrant: Quadrant, comm_band: Band, trust_band: Band) -> Self {
        let rule = quadrant.rule();
        rule.explicit
            .iter()
            .find(|&&(c, t, _)| c == comm_band && t == trust_band)
            .map(|&(_, _, p)| p)
            .unwrap_or(rule.fallback)
    }

    /// The quadrant this position belongs to.
    pub fn quadrant(&self) -> Quadrant {
        POSITION_RULES
            .iter()
            .find(|rule| rule.contains(*self))
            .map(|rule| rule.quadrant)
            .unwrap_or(Quadrant::DisengagedMind)
    }

    /// The `(comm_band, trust_band)` pair that selects this position.
    ///
    /// For a fallback position this is the one in-quadrant pair that no
    /// explicit row claims.
    pub fn band_pair(&self) -> (Band, Band) {
        let rule = self.quadrant().rule();
        rule.explicit
            .iter()
            .find(|&&(_, _, p)| p == *self)
            .map(|&(c, t, _)| (c, t))
            .unwrap_or_else(|| rule.fallback_bands())
    }

    /// `true` if this is its quadrant's fallback position.
    pub fn is_fallback(&self) -> bool {
        self.quadrant().rule().fallback == *self
    }

    /// Display label, e.g. `"Detached Observer"`.
    pub fn label(&self) -> &'static str {
        match self {
            Position::DetachedObserver => "Detached Observer",
            Position::OverstimulatedSkeptic => "Overstimulated Skeptic",
            Position::ConditionedThinker => "Conditioned Thinker",
            Position::FrozenPotential => "Frozen Potential",
            Position::MethodicalPractitioner => "Methodical Practitioner",
            Position::HopefulDoubter => "Hopeful Doubter",
            Position::SpiritualTechnician => "Spiritual Technician",
            Position::ExperimentalLearner => "Experimental Learner",
            Position::InnerBeliever => "Inner Believer",
            Position::VisionaryDreamer => "Visionary Dreamer",
            Position::SacredObserver => "Sacred Observer",
            Position::IntentionalYearner => "Intentional Yearner",
            Position::GroundedMystic => "Grounded Mystic",
            Position::CreativeConduit => "Creative Conduit",
            Position::SymbolicStrategist => "Symbolic Strategist",
            Position::EmbodiedTransformer => "Embodied Transformer",
        }
    }

    /// Parse a display label back into a position.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.label() == label)
    }
}

impl core::fmt::Display for Position {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.label())
    }
}

// ─── Position table ──────────────────────────────────────────────────────────

/// One quadrant's slice of the position table.
///
/// `explicit` holds three `(comm_band, trust_band, position)` rows. Every
/// other band pair selects `fallback`. Inside a quadrant only one pair is
/// left over, so the fallback has a single meaning.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PositionRule {
    /// Quadrant this rule applies to.
    pub quadrant: Quadrant,
    /// The three explicitly matched band pairs.
    pub explicit: [(Band, Band, Position); 3],
    /// Position for any pair not in `explicit`.
    pub fallback: Position,
}

impl PositionRule {
    /// `true` if `position` is produced by this rule.
    pub fn contains(&self, position: Position) -> bool {
        self.fallback == position || self.explicit.iter().any(|&(_, _, p)| p == position)
    }

    /// The in-quadrant band pair not covered by an explicit row.
    pub fn fallback_bands(&self) -> (Band, Band) {
        for c in self.quadrant.comm_bands() {
            for t in self.quadrant.trust_bands() {
                if !self.explicit.iter().any(|&(ec, et, _)| ec == c && et == t) {
                    return (c, t);
                }
            }
        }
        // Unreachable for a well-formed table: 4 pairs, 3 explicit rows.
        let [_, c] = self.quadrant.comm_bands();
        let [_, t] = self.quadrant.trust_bands();
        (c, t)
    }
}

/// The full 16-row position table, one [`PositionRule`] per quadrant.
pub const POSITION_RULES: [PositionRule; 4] = [
    PositionRule {
        quadrant: Quadrant::DisengagedMind,
        explicit: [
            (Band::LowLow, Band::LowLow, Position::DetachedObserver),
            (Band::LowHigh, Band::LowLow, Position::OverstimulatedSkeptic),
            (Band::LowLow, Band::LowHigh, Position::ConditionedThinker),
        ],
        fallback: Position::FrozenPotential,
    },
    PositionRule {
        quadrant: Quadrant::SkepticalExplorer,
        explicit: [
            (Band::HighLow, Band::LowLow, Position::MethodicalPractitioner),
            (Band::HighHigh, Band::LowLow, Position::HopefulDoubter),
            (Band::HighLow, Band::LowHigh, Position::SpiritualTechnician),
        ],
        fallback: Position::ExperimentalLearner,
    },
    PositionRule {
        quadrant: Quadrant::FaithfulSeeker,
        explicit: [
            (Band::LowLow, Band::HighLow, Position::InnerBeliever),
            (Band::LowHigh, Band::HighLow, Position::VisionaryDreamer),
            (Band::LowLow, Band::HighHigh, Position::SacredObserver),
        ],
        fallback: Position::IntentionalYearner,
    },
    PositionRule {
        quadrant: Quadrant::IntegratedAlchemist,
        explicit: [
            (Band::HighLow, Band::HighLow, Position::GroundedMystic),
            (Band::HighHigh, Band::HighLow, Position::CreativeConduit),
            (Band::HighLow, Band::HighHigh, Position::SymbolicStrategist),
        ],
        fallback: Position::EmbodiedTransformer,
    },
];

// ─── Classification ──────────────────────────────────────────────────────────

/// Deterministic outcome of [`classify`]. Carries no timestamp; see
/// [`Classification::at`] to turn it into a result record.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Classification {
    /// Normalized communication score.
    pub comm50: i32,
    /// Normalized trust score.
    pub trust50: i32,
    /// Selected quadrant.
    pub quadrant: Quadrant,
    /// Selected position (always inside `quadrant`).
    pub position: Position,
    /// Band of `comm50`.
    pub comm_band: Band,
    /// Band of `trust50`.
    pub trust_band: Band,
    /// Raw communication score as given.
    pub comm_raw: i32,
    /// Raw trust score as given.
    pub trust_raw: i32,
}

/// Classify a pair of raw sub-scores.
///
/// 1. Rescale each onto 0–50 ([`normalize_comm`], [`normalize_trust`]).
/// 2. Band each independently ([`Band::from_score50`]).
/// 3. Pick the quadrant at cutoff 26 ([`Quadrant::from_scores`]).
/// 4. Pick the position from the quadrant's rule ([`Position::select`]).
///
/// Any `i32` is accepted; out-of-range input is rescaled as given.
pub fn classify(comm_raw: i32, trust_raw: i32) -> Classification {
    let comm50 = normalize_comm(comm_raw);
    let trust50 = normalize_trust(trust_raw);
    let comm_band = Band::from_score50(comm50);
    let trust_band = Band::from_score50(trust50);
    let quadrant = Quadrant::from_scores(comm50, trust50);
    let position = Position::select(quadrant, comm_band, trust_band);

    Classification {
        comm50,
        trust50,
        quadrant,
        position,
        comm_band,
        trust_band,
        comm_raw,
        trust_raw,
    }
}

// ─── Tests ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    // ── Rescaling ─────────────────────────────────────────────────────────

    #[test]
    fn test_normalize_endpoints() {
        assert_eq!(normalize_comm(0), 0);
        assert_eq!(normalize_comm(70), 50);
        assert_eq!(normalize_trust(0), 0);
        assert_eq!(normalize_trust(65), 50);
    }

    #[test]
    fn test_normalize_rounds_to_nearest() {
        // 37 × 50 / 70 = 26.43
        assert_eq!(normalize_comm(37), 26);
        // 36 × 50 / 70 = 25.71
        assert_eq!(normalize_comm(36), 26);
        // 35 × 50 / 70 = 25.0
        assert_eq!(normalize_comm(35), 25);
        // 34 × 50 / 65 = 26.15
        assert_eq!(normalize_trust(34), 26);
        // 33 × 50 / 65 = 25.38
        assert_eq!(normalize_trust(33), 25);
    }

    #[test]
    fn test_normalize_half_rounds_up() {
        // 1 × 50 / 70 = 0.714, 1 × 50 / 65 = 0.769: both round up to 1.
        assert_eq!(normalize_comm(1), 1);
        assert_eq!(normalize_trust(1), 1);
        // Negative input: -7 × 50 / 70 = -5.0 exactly.
        assert_eq!(normalize_comm(-7), -5);
    }

    #[test]
    fn test_normalize_matches_float_reference() {
        for raw in -100..=200 {
            let expected = ((raw as f64 / 70.0) * 50.0 + 0.5).floor() as i32;
            assert_eq!(normalize_comm(raw), expected, "comm raw={}", raw);
            let expected = ((raw as f64 / 65.0) * 50.0 + 0.5).floor() as i32;
            assert_eq!(normalize_trust(raw), expected, "trust raw={}", raw);
        }
    }

    #[test]
    fn test_normalize_extreme_inputs_do_not_panic() {
        let _ = classify(i32::MAX, i32::MIN);
        let _ = classify(i32::MIN, i32::MAX);
        assert!(normalize_comm(i32::MAX) > 0);
        assert!(normalize_trust(i32::MIN) < 0);
    }

    // ── Band ──────────────────────────────────────────────────────────────

    #[test]
    fn test_band_thresholds() {
        assert_eq!(Band::from_score50(0), Band::LowLow);
        assert_eq!(Band::from_score50(12), Band::LowLow);
        assert_eq!(Band::from_score50(13), Band::LowHigh);
        assert_eq!(Band::from_score50(25), Band::LowHigh);
        assert_eq!(Band::from_score50(26), Band::HighLow);
        assert_eq!(Band::from_score50(38), Band::HighLow);
        assert_eq!(Band::from_score50(39), Band::HighHigh);
        assert_eq!(Band::from_score50(50), Band::HighHigh);
    }

    #[test]
    fn test_band_out_of_range_clamps() {
        assert_eq!(Band::from_score50(-40), Band::LowLow);
        assert_eq!(Band::from_score50(900), Band::HighHigh);
    }

    #[test]
    fn test_band_high_side_matches_cutoff() {
        for v in 0..=50 {
            assert_eq!(Band::from_score50(v).is_high(), v >= SCORE_CUTOFF, "v={}", v);
        }
    }

    // ── Quadrant ──────────────────────────────────────────────────────────

    #[test]
    fn test_quadrant_cutoff_is_inclusive() {
        assert_eq!(Quadrant::from_scores(25, 25), Quadrant::DisengagedMind);
        assert_eq!(Quadrant::from_scores(26, 25), Quadrant::SkepticalExplorer);
        assert_eq!(Quadrant::from_scores(25, 26), Quadrant::FaithfulSeeker);
        assert_eq!(Quadrant::from_scores(26, 26), Quadrant::IntegratedAlchemist);
    }

    #[test]
    fn test_quadrant_labels_round_trip() {
        for q in Quadrant::ALL {
            assert_eq!(Quadrant::from_label(q.label()), Some(q));
        }
        assert_eq!(Quadrant::from_label("Lost Wanderer"), None);
    }

    #[test]
    fn test_rule_order_matches_quadrant() {
        for q in Quadrant::ALL {
            assert_eq!(q.rule().quadrant, q);
        }
    }

    // ── Position table ────────────────────────────────────────────────────

    #[test]
    fn test_table_covers_every_position_once() {
        for p in Position::ALL {
            let owners = POSITION_RULES.iter().filter(|r| r.contains(p)).count();
            assert_eq!(owners, 1, "{:?} owned by {} rules", p, owners);
        }
    }

    #[test]
    fn test_explicit_rows_stay_inside_quadrant() {
        for rule in &POSITION_RULES {
            for &(c, t, _) in &rule.explicit {
                assert!(rule.quadrant.comm_bands().contains(&c));
                assert!(rule.quadrant.trust_bands().contains(&t));
            }
        }
    }

    #[test]
    fn test_fallback_bands() {
        assert_eq!(
            Position::FrozenPotential.band_pair(),
            (Band::LowHigh, Band::LowHigh)
        );
        assert_eq!(
            Position::ExperimentalLearner.band_pair(),
            (Band::HighHigh, Band::LowHigh)
        );
        assert_eq!(
            Position::IntentionalYearner.band_pair(),
            (Band::LowHigh, Band::HighHigh)
        );
        assert_eq!(
            Position::EmbodiedTransformer.band_pair(),
            (Band::HighHigh, Band::HighHigh)
        );
    }

    #[test]
    fn test_select_decodes_back() {
        for q in Quadrant::ALL {
            for c in q.comm_bands() {
                for t in q.trust_bands() {
                    let p = Position::select(q, c, t);
                    assert_eq!(p.quadrant(), q);
                    assert_eq!(p.band_pair(), (c, t), "{:?}", p);
                }
            }
        }
    }

    #[test]
    fn test_exactly_one_fallback_per_quadrant() {
        for q in Quadrant::ALL {
            let n = Position::ALL
                .iter()
                .filter(|p| p.quadrant() == q && p.is_fallback())
                .count();
            assert_eq!(n, 1, "{}", q);
        }
    }

    #[test]
    fn test_position_labels_round_trip() {
        for p in Position::ALL {
            assert_eq!(Position::from_label(p.label()), Some(p));
        }
    }

    // ── classify ──────────────────────────────────────────────────────────

    #[test]
    fn test_classify_minimum_answers() {
        let c = classify(14, 13);
        assert_eq!((c.comm50, c.trust50), (10, 10));
        assert_eq!(c.quadrant, Quadrant::DisengagedMind);
        assert_eq!(c.position, Position::DetachedObserver);
    }

    #[test]
    fn test_classify_maximum_answers() {
        let c = classify(70, 65);
        assert_eq!((c.comm50, c.trust50), (50, 50));
        assert_eq!(c.quadrant, Quadrant::IntegratedAlchemist);
        assert_eq!(c.position, Position::EmbodiedTransformer);
    }

    #[test]
    fn test_classify_comm_on_cutoff() {
        let c = classify(37, 13);
        assert_eq!(c.comm50, 26);
        assert_eq!(c.trust50, 10);
        assert_eq!(c.quadrant, Quadrant::SkepticalExplorer);
        assert_eq!(c.position, Position::MethodicalPractitioner);
    }

    #[test]
    fn test_classify_keeps_raw_inputs() {
        let c = classify(42, 39);
        assert_eq!((c.comm_raw, c.trust_raw), (42, 39));
        assert_eq!((c.comm50, c.trust50), (30, 30));
        assert_eq!(c.position, Position::GroundedMystic);
    }

    #[test]
    fn test_classify_quadrant_sweep() {
        let cases: &[(i32, i32, Quadrant, Position)] = &[
            (14, 13, Quadrant::DisengagedMind, Position::DetachedObserver),
            (30, 13, Quadrant::DisengagedMind, Position::OverstimulatedSkeptic),
            (14, 26, Quadrant::DisengagedMind, Position::ConditionedThinker),
            (30, 26, Quadrant::DisengagedMind, Position::FrozenPotential),
            (40, 13, Quadrant::SkepticalExplorer, Position::MethodicalPractitioner),
            (60, 13, Quadrant::SkepticalExplorer, Position::HopefulDoubter),
            (40, 26, Quadrant::SkepticalExplorer, Position::SpiritualTechnician),
            (60, 26, Quadrant::SkepticalExplorer, Position::ExperimentalLearner),
            (14, 40, Quadrant::FaithfulSeeker, Position::InnerBeliever),
            (30, 40, Quadrant::FaithfulSeeker, Position::VisionaryDreamer),
            (14, 60, Quadrant::FaithfulSeeker, Position::SacredObserver),
            (30, 60, Quadrant::FaithfulSeeker, Position::IntentionalYearner),
            (40, 40, Quadrant::IntegratedAlchemist, Position::GroundedMystic),
            (60, 40, Quadrant::IntegratedAlchemist, Position::CreativeConduit),
            (40, 60, Quadrant::IntegratedAlchemist, Position::SymbolicStrategist),
            (60, 60, Quadrant::IntegratedAlchemist, Position::EmbodiedTransformer),
        ];

        for &(comm, trust, quadrant, position) in cases {
            let c = classify(comm, trust);
            assert_eq!(
                (c.quadrant, c.position),
                (quadrant, position),
                "comm={} trust={} -> comm50={} trust50={}",
                comm,
                trust,
                c.comm50,
                c.trust50
            );
        }
    }
}
