use crate::{
    effects::mode::EffectMode,
    foundation::core::{ProjectId, VideoRef},
};

/// Predicted virality on a 0..=100 scale.
///
/// Construction and deserialization both clamp, so a stored score is always in range.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    serde::Serialize,
    serde::Deserialize,
)]
#[serde(from = "i64", into = "u8")]
pub struct ViralityScore(u8);

impl ViralityScore {
    pub const MAX: u8 = 100;

    pub fn new(score: i64) -> Self {
        Self(score.clamp(0, i64::from(Self::MAX)) as u8)
    }

    pub fn get(self) -> u8 {
        self.0
    }

    pub fn tier(self) -> ViralityTier {
        if self.0 > 80 {
            ViralityTier::Hot
        } else {
            ViralityTier::Warm
        }
    }
}

impl From<i64> for ViralityScore {
    fn from(value: i64) -> Self {
        Self::new(value)
    }
}

impl From<ViralityScore> for u8 {
    fn from(value: ViralityScore) -> Self {
        value.0
    }
}

impl std::fmt::Display for ViralityScore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Display bucket for a score; "hot" above 80.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViralityTier {
    Hot,
    Warm,
}

/// A finished creative project. Immutable once built.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectRecord {
    pub id: ProjectId,
    pub title: String,
    pub description: String,
    pub thumbnail_url: String,
    pub video_url: VideoRef,
    /// Human-readable age ("2 hrs ago", "Just now").
    pub created_at: String,
    pub views: u64,
    pub remixes: u64,
    pub virality_score: ViralityScore,
    pub author: String,
    #[serde(default)]
    pub fractal_mode: EffectMode,
}

#[cfg(test)]
#[path = "../../tests/unit/project/model.rs"]
mod tests;
