use crate::error::BioError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Social network a bio is rendered for
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    #[default]
    Twitter,
    Instagram,
    Youtube,
    Linkedin,
    Farcaster,
    Bluesky,
}

impl Platform {
    /// All platforms, in the order they are presented to the user
    pub const ALL: [Platform; 6] = [
        Platform::Twitter,
        Platform::Instagram,
        Platform::Youtube,
        Platform::Linkedin,
        Platform::Farcaster,
        Platform::Bluesky,
    ];

    /// Lowercase identifier used in profile files and on the command line
    pub fn id(&self) -> &'static str {
        match self {
            Platform::Twitter => "twitter",
            Platform::Instagram => "instagram",
            Platform::Youtube => "youtube",
            Platform::Linkedin => "linkedin",
            Platform::Farcaster => "farcaster",
            Platform::Bluesky => "bluesky",
        }
    }

    /// Human readable name
    pub fn label(&self) -> &'static str {
        match self {
            Platform::Twitter => "Twitter",
            Platform::Instagram => "Instagram",
            Platform::Youtube => "YouTube",
            Platform::Linkedin => "LinkedIn",
            Platform::Farcaster => "Farcaster",
            Platform::Bluesky => "Bluesky",
        }
    }

    /// Sample "additional info" text shown as a hint for this platform
    pub fn placeholder_info(&self) -> &'static str {
        match self {
            Platform::Twitter => {
                "🎓 5+ years in tech\n💻 Building in public\n🚀 Sharing daily insights"
            }
            Platform::Instagram => {
                "📸 Daily tech tips\n💫 Tutorial creator\n🎯 Helping devs grow"
            }
            Platform::Youtube => {
                "🎥 Weekly coding tutorials\n💡 Tech tips & tricks\n🌟 Community projects"
            }
            Platform::Linkedin => {
                "Leading tech initiatives\nMentoring developers\nBuilding innovative solutions"
            }
            Platform::Farcaster => {
                "⚡️ Web3 enthusiast\n🔮 Building the future\n🌟 Daily tech insights"
            }
            Platform::Bluesky => {
                "✨ Tech explorer\n🚀 Building in public\n💫 Sharing knowledge"
            }
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Platform {
    type Err = BioError;

    /// Case-insensitive; surrounding whitespace is ignored
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Platform::ALL
            .into_iter()
            .find(|p| p.id().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| BioError::UnknownPlatform(s.to_string()))
    }
}

/// The four pieces of text a user fills in
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct UserInfo {
    /// Channel or profile name
    #[serde(alias = "channelName")]
    pub channel_name: String,
    /// What the profile is about, e.g. "Web Development"
    pub niche: String,
    /// Free text, may hold several URLs on separate lines
    pub links: String,
    /// Multi-line description, decorated before rendering
    #[serde(alias = "additionalInfo")]
    pub additional_info: String,
}

impl UserInfo {
    pub const CHANNEL_NAME_HINT: &'static str = "e.g., Tech with Sarah";
    pub const NICHE_HINT: &'static str = "e.g., Web Development | UI/UX Design";
    pub const LINKS_HINT: &'static str = "e.g., linktr.ee/techsarah";

    pub fn new(
        channel_name: impl Into<String>,
        niche: impl Into<String>,
        links: impl Into<String>,
        additional_info: impl Into<String>,
    ) -> Self {
        Self {
            channel_name: channel_name.into(),
            niche: niche.into(),
            links: links.into(),
            additional_info: additional_info.into(),
        }
    }
}

/// Defaults applied when rendering a profile
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct DefaultsConfig {
    /// Platform used when none is requested explicitly
    /// Defaults to twitter
    #[serde(default)]
    pub platform: Option<Platform>,
    /// Seed for the decoration picker; output is reproducible when set
    #[serde(default)]
    pub seed: Option<u64>,
    /// Whether an unknown platform identifier is an error instead of an empty bio
    /// Defaults to false
    #[serde(default)]
    pub strict: Option<bool>,
}

/// Root structure for a YAML profile file
#[derive(Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct BioConfig {
    /// The user's profile text
    #[serde(default)]
    pub profile: UserInfo,
    /// Rendering defaults
    #[serde(default)]
    pub defaults: DefaultsConfig,
}
