use biowriter::*;

const PROFILE: &str = r#"
profile:
  channel_name: Tech with Sarah
  niche: Web Dev
  links: linktr.ee/techsarah
  additional_info: "5 years experience"
defaults:
  platform: youtube
  seed: 11
"#;

#[tokio::test]
async fn test_bio_writer_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("profile.yaml");
    tokio::fs::write(&path, PROFILE).await.unwrap();

    let writer = BioWriter::new(&path).await.unwrap();
    assert_eq!(writer.default_platform(), Platform::Youtube);

    let bio = writer.generate_default();
    assert!(bio.starts_with("🎥 Tech with Sarah\nWeb Dev | Content Creator\n\n"));
    assert!(bio.ends_with("📍 Links & Social Media:\nlinktr.ee/techsarah"));
    assert_eq!(bio, writer.generate_default());
}

#[tokio::test]
async fn test_generate_to_directory_writes_one_file_per_platform() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("bios");

    let writer = BioWriterBuilder::from_config(parse_yaml_string(PROFILE).unwrap()).build();
    let written = writer.generate_to_directory(&out).await.unwrap();

    assert_eq!(written.len(), 6);
    for (platform, path) in Platform::ALL.iter().zip(&written) {
        assert_eq!(path, &out.join(format!("{}.txt", platform)));
        let content = tokio::fs::read_to_string(path).await.unwrap();
        assert_eq!(content, writer.generate(*platform));
    }
}

#[test]
fn test_twitter_example() {
    let info = UserInfo::new(
        "Tech with Sarah",
        "Web Dev",
        "linktr.ee/techsarah",
        "5 years experience",
    );
    let bio = format_bio(Platform::Twitter, &info);

    assert!(bio.starts_with("Tech with Sarah ✦ Web Dev"));
    assert!(bio.ends_with("🔗 Let's connect:\nlinktr.ee/techsarah"));
    assert!(DECORATIONS
        .iter()
        .any(|d| bio.contains(&format!("{} 5 years experience", d))));
}

#[test]
fn test_placeholder_text_survives_enhancement() {
    // every sample line except LinkedIn's already starts with an emoji
    for platform in Platform::ALL {
        let sample = platform.placeholder_info();
        let enhanced = enhance_additional_info(sample);
        if platform == Platform::Linkedin {
            assert_eq!(enhanced.lines().count(), 3);
            assert!(enhanced.lines().all(is_decorated));
            assert!(enhanced.ends_with(" Building innovative solutions"));
        } else {
            assert_eq!(enhanced, sample, "{platform}");
        }
    }
}

#[test]
fn test_instagram_niche() {
    let info = UserInfoBuilder::new().niche("web development").build();
    assert!(format_bio(Platform::Instagram, &info).contains("WEB DEVELOPMENT 🚀"));
}

#[test]
fn test_unknown_platform() {
    let info = UserInfo::default();
    assert_eq!(format_bio_for("friendster", &info), "");
    assert!(try_format_bio_for("friendster", &info).is_err());
}
