use biowriter::*;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load the profile from a file when given, otherwise build one inline
    let writer = match std::env::args().nth(1) {
        Some(path) => {
            println!("Loading profile from {}...", path);
            BioWriter::new(path).await?
        }
        None => BioWriterBuilder::new()
            .profile(
                UserInfoBuilder::new()
                    .channel_name("Tech with Sarah")
                    .niche("Web Development | UI/UX Design")
                    .link("linktr.ee/techsarah")
                    .info_line("5+ years in tech")
                    .info_line("🚀 Building in public"),
            )
            .build(),
    };

    for (platform, bio) in writer.generate_all() {
        println!("== {} ==", platform.label());
        println!("{}", bio);
        println!();
    }

    Ok(())
}
