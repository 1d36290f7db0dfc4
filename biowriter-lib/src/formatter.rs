use crate::config::{Platform, UserInfo};
use crate::enhancer::enhance_additional_info_with;
use crate::error::BioError;
use rand::Rng;

/// Render the bio for `platform`, decorating additional info with the thread-local generator
pub fn format_bio(platform: Platform, info: &UserInfo) -> String {
    format_bio_with(platform, info, &mut rand::thread_rng())
}

/// Render the bio for `platform`, drawing decorations from `rng`
pub fn format_bio_with<R: Rng + ?Sized>(
    platform: Platform,
    info: &UserInfo,
    rng: &mut R,
) -> String {
    let UserInfo {
        channel_name,
        niche,
        links,
        additional_info,
    } = info;
    let enhanced = enhance_additional_info_with(additional_info, rng);

    tracing::debug!(%platform, "Formatting bio");

    match platform {
        Platform::Twitter => format!(
            "{channel_name} ✦ {niche}\n\n{enhanced}\n\n🔗 Let's connect:\n{links}"
        ),
        Platform::Instagram => format!(
            "✨ {channel_name} ✨\n{} 🚀\n\n{enhanced}\n\n📍 Links & Socials\n👇\n{links}",
            niche.to_uppercase()
        ),
        Platform::Youtube => format!(
            "🎥 {channel_name}\n{niche} | Content Creator\n\n{enhanced}\n\n🎯 Subscribe for more content!\n📍 Links & Social Media:\n{links}"
        ),
        Platform::Linkedin => format!(
            "{channel_name}\n{niche} | Content Creator & Industry Professional\n\n📌 About Me:\n{enhanced}\n\n🤝 Let's Connect:\n{links}"
        ),
        Platform::Farcaster => format!(
            "⚡\u{FE0F} {channel_name}\n{niche}\n\n{enhanced}\n\n🔗 Connect & Follow:\n{links}"
        ),
        Platform::Bluesky => format!(
            "✦ {channel_name} ✦\n{niche}\n\n{enhanced}\n\n🌐 Find me here:\n{links}"
        ),
    }
}

/// Render by platform identifier. Unknown identifiers yield an empty string.
pub fn format_bio_for(platform_id: &str, info: &UserInfo) -> String {
    format_bio_for_with(platform_id, info, &mut rand::thread_rng())
}

/// Same as [`format_bio_for`] but draws decorations from `rng`
pub fn format_bio_for_with<R: Rng + ?Sized>(
    platform_id: &str,
    info: &UserInfo,
    rng: &mut R,
) -> String {
    match platform_id.parse::<Platform>() {
        Ok(platform) => format_bio_with(platform, info, rng),
        Err(_) => {
            tracing::warn!(platform = platform_id, "Unknown platform, rendering empty bio");
            String::new()
        }
    }
}

/// Strict variant of [`format_bio_for`]: unknown identifiers are reported as
/// [`BioError::UnknownPlatform`].
pub fn try_format_bio_for(platform_id: &str, info: &UserInfo) -> Result<String, BioError> {
    try_format_bio_for_with(platform_id, info, &mut rand::thread_rng())
}

/// Same as [`try_format_bio_for`] but draws decorations from `rng`
pub fn try_format_bio_for_with<R: Rng + ?Sized>(
    platform_id: &str,
    info: &UserInfo,
    rng: &mut R,
) -> Result<String, BioError> {
    let platform = platform_id.parse::<Platform>()?;
    Ok(format_bio_with(platform, info, rng))
}
