//! Meta-emotion group table and score aggregation
//!
//! Declaration order is significant: score ties and labels belonging to
//! several groups resolve to the earliest declared group. Groups may
//! overlap, and a base label may belong to no group at all.

use crate::active::ActiveSet;

/// One named meta-emotion group
#[derive(Debug, Clone)]
pub struct MetaGroup {
    pub name: String,
    pub members: Vec<String>,
}

/// Ordered table of meta-emotion groups, immutable after construction
#[derive(Debug, Clone)]
pub struct MetaGroups {
    groups: Vec<MetaGroup>,
}

impl Default for MetaGroups {
    fn default() -> Self {
        let table: [(&str, &[&str]); 13] = [
            (
                "passive_frustration",
                &["approval", "disappointment", "annoyance", "disapproval"],
            ),
            ("positive_excited", &["admiration", "excitement", "joy", "pride"]),
            ("negative_strong", &["anger", "disgust", "fear"]),
            ("sad_block", &["sadness", "grief", "remorse"]),
            ("care_block", &["caring", "love", "gratitude"]),
            ("confusion_block", &["confusion", "realization", "curiosity"]),
            (
                "burnout_exhaustion",
                &["sadness", "disappointment", "annoyance"],
            ),
            ("anxiety_block", &["fear", "nervousness"]),
            ("calm_relief", &["relief", "joy"]),
            ("detachment", &["neutral", "disappointment"]),
            ("desire_block", &["desire", "curiosity"]),
            ("humor_light", &["amusement"]),
            ("positive_mild", &["optimism", "approval"]),
        ];

        Self::new(
            table
                .into_iter()
                .map(|(name, members)| MetaGroup {
                    name: name.to_string(),
                    members: members.iter().map(|m| m.to_string()).collect(),
                })
                .collect(),
        )
    }
}

impl MetaGroups {
    pub fn new(groups: Vec<MetaGroup>) -> Self {
        Self { groups }
    }

    pub fn iter(&self) -> impl Iterator<Item = &MetaGroup> {
        self.groups.iter()
    }

    /// First group (in declaration order) containing the given base label
    pub fn first_containing(&self, label: &str) -> Option<&str> {
        self.groups
            .iter()
            .find(|g| g.members.iter().any(|m| m == label))
            .map(|g| g.name.as_str())
    }

    /// Group with the greatest summed active score.
    ///
    /// First-seen wins on ties, so an all-zero aggregation resolves to the
    /// first declared group. Returns `None` only for an empty table.
    pub fn dominant(&self, active: &ActiveSet) -> Option<&str> {
        let mut best: Option<(&str, f32)> = None;
        for group in &self.groups {
            let score: f32 = group.members.iter().map(|m| active.score(m)).sum();
            let better = match best {
                Some((_, top)) => score > top,
                None => true,
            };
            if better {
                best = Some((group.name.as_str(), score));
            }
        }
        best.map(|(name, _)| name)
    }
}
