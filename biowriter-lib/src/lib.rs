mod builder;
mod config;
mod enhancer;
mod error;
mod formatter;
mod yaml_parser;

pub use builder::*;
pub use config::*;
pub use enhancer::*;
pub use error::*;
pub use formatter::*;
pub use yaml_parser::*;

use anyhow::{Context, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::{Path, PathBuf};

/// Main entry point for the biowriter library
#[derive(Debug, Clone)]
pub struct BioWriter {
    profile: UserInfo,
    defaults: DefaultsConfig,
}

impl BioWriter {
    /// Create a new BioWriter instance by loading a profile from a YAML file
    pub async fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let config = parse_yaml_file(path).await?;
        Ok(Self::from_config(config))
    }

    /// Create a BioWriter from an already parsed profile
    pub fn from_config(config: BioConfig) -> Self {
        Self {
            profile: config.profile,
            defaults: config.defaults,
        }
    }

    /// The profile bios are rendered from
    pub fn profile(&self) -> &UserInfo {
        &self.profile
    }

    /// Platform used by [`BioWriter::generate_default`]
    pub fn default_platform(&self) -> Platform {
        self.defaults.platform.unwrap_or_default()
    }

    pub fn seed(&self) -> Option<u64> {
        self.defaults.seed
    }

    pub fn is_strict(&self) -> bool {
        self.defaults.strict.unwrap_or(false)
    }

    /// Render the bio for one platform
    ///
    /// With a seed configured, every call uses a freshly seeded generator so the
    /// same profile and platform always render to the same text.
    pub fn generate(&self, platform: Platform) -> String {
        match self.defaults.seed {
            Some(seed) => {
                format_bio_with(platform, &self.profile, &mut StdRng::seed_from_u64(seed))
            }
            None => format_bio(platform, &self.profile),
        }
    }

    /// Render the bio for the default platform
    pub fn generate_default(&self) -> String {
        self.generate(self.default_platform())
    }

    /// Render the bio for a platform identifier
    ///
    /// Unknown identifiers render as an empty string, or fail with
    /// [`BioError::UnknownPlatform`] when the writer is strict.
    pub fn generate_for(&self, platform_id: &str) -> Result<String, BioError> {
        match platform_id.parse::<Platform>() {
            Ok(platform) => Ok(self.generate(platform)),
            Err(err) if self.is_strict() => Err(err),
            Err(_) => {
                tracing::warn!(platform = platform_id, "Unknown platform, rendering empty bio");
                Ok(String::new())
            }
        }
    }

    /// Render one bio per platform, in [`Platform::ALL`] order
    pub fn generate_all(&self) -> Vec<(Platform, String)> {
        Platform::ALL
            .into_iter()
            .map(|platform| (platform, self.generate(platform)))
            .collect()
    }

    /// Write every platform's bio to `<output_dir>/<platform>.txt`
    ///
    /// The directory is created if missing. Returns the written paths in
    /// [`Platform::ALL`] order.
    pub async fn generate_to_directory<P: AsRef<Path>>(
        &self,
        output_dir: P,
    ) -> Result<Vec<PathBuf>> {
        let output_path = output_dir.as_ref();

        tokio::fs::create_dir_all(output_path)
            .await
            .with_context(|| format!("Failed to create directory: {}", output_path.display()))?;

        let mut written = Vec::with_capacity(Platform::ALL.len());
        for (platform, bio) in self.generate_all() {
            let file = output_path.join(format!("{}.txt", platform));
            tokio::fs::write(&file, &bio)
                .await
                .with_context(|| format!("Failed to write bio: {}", file.display()))?;
            tracing::info!(%platform, path = %file.display(), "Wrote bio");
            written.push(file);
        }

        Ok(written)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn writer(seed: Option<u64>, strict: bool) -> BioWriter {
        let mut builder = BioWriterBuilder::new()
            .user_info(UserInfo::new("Sarah", "Rust", "sarah.dev", "one\ntwo"))
            .strict(strict);
        if let Some(seed) = seed {
            builder = builder.seed(seed);
        }
        builder.build()
    }

    #[test]
    fn test_seeded_writer_is_reproducible() {
        let writer = writer(Some(3), false);
        assert_eq!(
            writer.generate(Platform::Linkedin),
            writer.generate(Platform::Linkedin)
        );
    }

    #[test]
    fn test_generate_default_uses_twitter() {
        let bio = writer(Some(3), false).generate_default();
        assert!(bio.starts_with("Sarah ✦ Rust\n"));
    }

    #[test]
    fn test_generate_for_lenient_and_strict() {
        assert_eq!(writer(None, false).generate_for("myspace"), Ok(String::new()));
        assert_eq!(
            writer(None, true).generate_for("myspace"),
            Err(BioError::UnknownPlatform("myspace".to_string()))
        );
        assert!(writer(None, true)
            .generate_for("bluesky")
            .unwrap()
            .starts_with("✦ Sarah ✦\n"));
    }

    #[test]
    fn test_generate_all_covers_every_platform_in_order() {
        let bios = writer(None, false).generate_all();
        let platforms: Vec<Platform> = bios.iter().map(|(p, _)| *p).collect();
        assert_eq!(platforms, Platform::ALL.to_vec());
        assert!(bios.iter().all(|(_, bio)| bio.ends_with("sarah.dev")));
    }
}
