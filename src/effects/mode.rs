/// Named visual transform a source video is rendered through.
///
/// Serialized as the product's display tag (`"Recursive PiP"`, `"Grid Remix"`, ...).
/// Deserialization is lossy: unknown tags become [`EffectMode::None`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(from = "String", into = "String")]
pub enum EffectMode {
    /// Source rendered unmodified.
    #[default]
    None,
    /// Self-similar nested picture-in-picture.
    RecursivePiP,
    /// Counter-rotating layers under a circular lens.
    Kaleidoscope,
    /// Stacked blur/opacity ghosts.
    TimeEcho,
    /// 2x2 grid with per-tile filters.
    GridRemix,
}

impl EffectMode {
    /// Every mode, `None` first.
    pub const ALL: [EffectMode; 5] = [
        EffectMode::None,
        EffectMode::RecursivePiP,
        EffectMode::Kaleidoscope,
        EffectMode::TimeEcho,
        EffectMode::GridRemix,
    ];

    /// Stable wire tag.
    pub fn tag(self) -> &'static str {
        match self {
            Self::None => "None",
            Self::RecursivePiP => "Recursive PiP",
            Self::Kaleidoscope => "Kaleidoscope",
            Self::TimeEcho => "Time Echo",
            Self::GridRemix => "Grid Remix",
        }
    }

    /// Label shown on the mode picker.
    pub fn label(self) -> &'static str {
        match self {
            Self::GridRemix => "Grid Glitch",
            other => other.tag(),
        }
    }

    /// Strict parse. Accepts wire tags and identifier spellings, ignoring case,
    /// spaces, `_` and `-`.
    pub fn parse(tag: &str) -> Option<Self> {
        let key: String = tag
            .chars()
            .filter(|c| !matches!(c, ' ' | '_' | '-'))
            .flat_map(char::to_lowercase)
            .collect();
        match key.as_str() {
            "none" => Some(Self::None),
            "recursivepip" | "pip" => Some(Self::RecursivePiP),
            "kaleidoscope" => Some(Self::Kaleidoscope),
            "timeecho" | "echo" => Some(Self::TimeEcho),
            "gridremix" | "gridglitch" | "grid" => Some(Self::GridRemix),
            _ => None,
        }
    }

    /// Fail-soft parse: anything unrecognized renders as [`EffectMode::None`].
    pub fn parse_lossy(tag: &str) -> Self {
        Self::parse(tag).unwrap_or_else(|| {
            tracing::debug!(tag, "unknown effect mode tag, using None");
            Self::None
        })
    }
}

impl std::fmt::Display for EffectMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}

impl From<String> for EffectMode {
    fn from(value: String) -> Self {
        Self::parse_lossy(&value)
    }
}

impl From<EffectMode> for String {
    fn from(value: EffectMode) -> Self {
        value.tag().to_string()
    }
}

/// Modes offered on the picker, in display order. `None` is not selectable.
pub fn list_modes() -> [(EffectMode, &'static str); 4] {
    [
        EffectMode::RecursivePiP,
        EffectMode::Kaleidoscope,
        EffectMode::GridRemix,
        EffectMode::TimeEcho,
    ]
    .map(|m| (m, m.label()))
}

/// Whether `tag` names one of the five modes.
pub fn is_valid(tag: &str) -> bool {
    EffectMode::parse(tag).is_some()
}

#[cfg(test)]
#[path = "../../tests/unit/effects/mode.rs"]
mod tests;
