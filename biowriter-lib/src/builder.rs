use crate::config::{BioConfig, DefaultsConfig, Platform, UserInfo};
use crate::BioWriter;

/// Builder for creating a user profile programmatically
#[derive(Debug, Clone, Default)]
pub struct UserInfoBuilder {
    info: UserInfo,
}

impl UserInfoBuilder {
    /// Create a new builder with every field empty
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the channel or profile name
    pub fn channel_name(mut self, channel_name: impl Into<String>) -> Self {
        self.info.channel_name = channel_name.into();
        self
    }

    /// Set the niche
    pub fn niche(mut self, niche: impl Into<String>) -> Self {
        self.info.niche = niche.into();
        self
    }

    /// Set the links block
    pub fn links(mut self, links: impl Into<String>) -> Self {
        self.info.links = links.into();
        self
    }

    /// Append one link on its own line
    pub fn link(mut self, link: impl AsRef<str>) -> Self {
        if !self.info.links.is_empty() {
            self.info.links.push('\n');
        }
        self.info.links.push_str(link.as_ref());
        self
    }

    /// Set the additional info text
    pub fn additional_info(mut self, additional_info: impl Into<String>) -> Self {
        self.info.additional_info = additional_info.into();
        self
    }

    /// Append one line of additional info
    pub fn info_line(mut self, line: impl AsRef<str>) -> Self {
        if !self.info.additional_info.is_empty() {
            self.info.additional_info.push('\n');
        }
        self.info.additional_info.push_str(line.as_ref());
        self
    }

    /// Build the UserInfo
    pub fn build(self) -> UserInfo {
        self.info
    }
}

impl From<UserInfo> for UserInfoBuilder {
    fn from(info: UserInfo) -> Self {
        Self { info }
    }
}

/// Builder for creating a BioWriter
#[derive(Debug, Clone, Default)]
pub struct BioWriterBuilder {
    profile: UserInfo,
    default_platform: Option<Platform>,
    seed: Option<u64>,
    strict: Option<bool>,
}

impl BioWriterBuilder {
    /// Create a new BioWriterBuilder
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from a parsed profile file
    pub fn from_config(config: BioConfig) -> Self {
        Self {
            profile: config.profile,
            default_platform: config.defaults.platform,
            seed: config.defaults.seed,
            strict: config.defaults.strict,
        }
    }

    /// Set the profile using a UserInfoBuilder
    pub fn profile(mut self, profile_builder: UserInfoBuilder) -> Self {
        self.profile = profile_builder.build();
        self
    }

    /// Set a pre-built profile
    pub fn user_info(mut self, info: UserInfo) -> Self {
        self.profile = info;
        self
    }

    /// Set the platform used by [`BioWriter::generate_default`]
    pub fn default_platform(mut self, platform: Platform) -> Self {
        self.default_platform = Some(platform);
        self
    }

    /// Make decoration choices reproducible
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Report unknown platform identifiers as errors
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = Some(strict);
        self
    }

    /// Build the BioWriter
    pub fn build(self) -> BioWriter {
        BioWriter::from_config(BioConfig {
            profile: self.profile,
            defaults: DefaultsConfig {
                platform: self.default_platform,
                seed: self.seed,
                strict: self.strict,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_info_builder_basic() {
        let info = UserInfoBuilder::new()
            .channel_name("Tech with Sarah")
            .niche("Web Dev")
            .link("linktr.ee/techsarah")
            .link("github.com/sarah")
            .info_line("5 years experience")
            .info_line("Building in public")
            .build();

        assert_eq!(info.channel_name, "Tech with Sarah");
        assert_eq!(info.niche, "Web Dev");
        assert_eq!(info.links, "linktr.ee/techsarah\ngithub.com/sarah");
        assert_eq!(
            info.additional_info,
            "5 years experience\nBuilding in public"
        );
    }

    #[test]
    fn test_user_info_builder_overrides_existing_profile() {
        let base = UserInfo::new("Old", "Rust", "a.com", "hello");
        let info = UserInfoBuilder::from(base).channel_name("New").build();

        assert_eq!(info.channel_name, "New");
        assert_eq!(info.niche, "Rust");
        assert_eq!(info.links, "a.com");
    }

    #[test]
    fn test_bio_writer_builder() {
        let writer = BioWriterBuilder::new()
            .profile(UserInfoBuilder::new().channel_name("Sarah"))
            .default_platform(Platform::Bluesky)
            .seed(9)
            .strict(true)
            .build();

        assert_eq!(writer.profile().channel_name, "Sarah");
        assert_eq!(writer.default_platform(), Platform::Bluesky);
        assert_eq!(writer.seed(), Some(9));
        assert!(writer.is_strict());
    }

    #[test]
    fn test_bio_writer_builder_defaults() {
        let writer = BioWriterBuilder::new().build();

        assert_eq!(writer.default_platform(), Platform::Twitter);
        assert_eq!(writer.seed(), None);
        assert!(!writer.is_strict());
    }
}
