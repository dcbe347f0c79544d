use crate::{
    effects::mode::EffectMode,
    foundation::core::{ProjectId, VideoRef},
    project::model::{ProjectRecord, ViralityScore},
};

/// Sample clips used when generation is unavailable or fails.
pub const PLACEHOLDER_VIDEOS: [&str; 3] = [
    "https://commondatastorage.googleapis.com/gtv-videos-bucket/sample/ForBiggerBlazes.mp4",
    "https://commondatastorage.googleapis.com/gtv-videos-bucket/sample/ForBiggerEscapes.mp4",
    "https://commondatastorage.googleapis.com/gtv-videos-bucket/sample/ForBiggerJoyrides.mp4",
];

/// Example generation prompts offered as inspiration.
pub const EXAMPLE_PROMPTS: [&str; 3] = [
    "A cyberpunk city with neon lights reflecting in rain puddles, cinematic 4k",
    "Slow motion ink dropping into water, swirling colors, abstract macro",
    "A futuristic drone flying through a recursive tunnel of mirrors",
];

/// Pick a placeholder clip for `prompt`. Stable for a given prompt.
pub fn placeholder_for(prompt: &str) -> VideoRef {
    let idx = (stable_hash64(prompt) % PLACEHOLDER_VIDEOS.len() as u64) as usize;
    VideoRef::new(PLACEHOLDER_VIDEOS[idx])
}

fn stable_hash64(s: &str) -> u64 {
    // FNV-1a 64.
    let mut h = 0xcbf2_9ce4_8422_2325u64;
    for &b in s.as_bytes() {
        h ^= u64::from(b);
        h = h.wrapping_mul(0x0000_0100_0000_01B3);
    }
    h
}

/// The projects every seeded store starts with, in listing order.
pub fn seed_projects() -> Vec<ProjectRecord> {
    vec![
        seed(
            "1",
            "Neon Drift - Infinite Loop",
            "A recursive drift through the neon city.",
            0,
            "2 hrs ago",
            (12_400, 45, 88),
            "CyberArtist_99",
            EffectMode::RecursivePiP,
        ),
        seed(
            "2",
            "Coffee Pour Echo",
            "Morning vibes with a time-delay echo effect.",
            1,
            "5 hrs ago",
            (8_900, 12, 72),
            "BaristaFlow",
            EffectMode::TimeEcho,
        ),
        seed(
            "3",
            "Urban Grid Glitch",
            "City lights broken into a recursive grid.",
            2,
            "1 day ago",
            (45_000, 156, 94),
            "GlitchMaster",
            EffectMode::GridRemix,
        ),
    ]
}

#[allow(clippy::too_many_arguments)]
fn seed(
    id: &str,
    title: &str,
    description: &str,
    video: usize,
    created_at: &str,
    (views, remixes, score): (u64, u64, i64),
    author: &str,
    mode: EffectMode,
) -> ProjectRecord {
    ProjectRecord {
        id: ProjectId::new(id),
        title: title.to_string(),
        description: description.to_string(),
        thumbnail_url: format!("https://picsum.photos/400/225?random={id}"),
        video_url: VideoRef::new(PLACEHOLDER_VIDEOS[video]),
        created_at: created_at.to_string(),
        views,
        remixes,
        virality_score: ViralityScore::new(score),
        author: author.to_string(),
        fractal_mode: mode,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/project/seed.rs"]
mod tests;
