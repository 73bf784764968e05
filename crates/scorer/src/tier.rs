use serde::Serialize;

/// Identifier for one relevance tier, in descending confidence order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TierKey {
    FairDinkum,
    ShellBeRight,
    WoopWoop,
    Buckleys,
}

/// One rung of the fixed relevance ladder.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct RelevanceTier {
    pub key: TierKey,
    pub label: &'static str,
    /// Inclusive lower bound. Tiers are cumulative, not a partition: a
    /// candidate qualifies for every tier whose threshold its score
    /// meets, so a 0.95 lands in all four.
    pub min_score: f32,
}

pub const RELEVANCE_TIERS: [RelevanceTier; 4] = [
    RelevanceTier {
        key: TierKey::FairDinkum,
        label: "Fair Dinkum — She's a Beauty!",
        min_score: 0.8,
    },
    RelevanceTier {
        key: TierKey::ShellBeRight,
        label: "She'll Be Right (I hope)",
        min_score: 0.6,
    },
    RelevanceTier {
        key: TierKey::WoopWoop,
        label: "Heading for Woop Woop",
        min_score: 0.4,
    },
    RelevanceTier {
        key: TierKey::Buckleys,
        label: "Two Chances: Buckley's or None!",
        min_score: 0.0,
    },
];
