mod clipboard;

use anyhow::{Context, Result};
use biowriter::*;
use clap::{Arg, ArgAction, ArgMatches, Command};
use std::path::PathBuf;
use tokio::io::AsyncReadExt;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let matches = build_cli().get_matches();

    init_logging(matches.get_count("verbose"));

    match matches.subcommand() {
        Some(("generate", sub_matches)) => {
            generate_command(sub_matches).await?;
        }
        Some(("enhance", sub_matches)) => {
            enhance_command(sub_matches).await?;
        }
        Some(("platforms", _)) => {
            platforms_command();
        }
        _ => {
            build_cli().print_help()?;
            std::process::exit(1);
        }
    }

    Ok(())
}

/// Logs go to stderr so bios on stdout stay clean. RUST_LOG wins over -v.
fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn build_cli() -> Command {
    Command::new("biowriter")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Create the perfect bio for every platform")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .action(ArgAction::Count)
                .global(true)
                .help("Increase log verbosity (-v info, -vv debug, -vvv trace)"),
        )
        .subcommand(
            Command::new("generate")
                .about("Render a bio from a YAML profile and/or inline fields")
                .arg(
                    Arg::new("profile-file")
                        .short('f')
                        .long("file")
                        .value_name("FILE")
                        .help("YAML file containing the profile"),
                )
                .arg(
                    Arg::new("name")
                        .long("name")
                        .value_name("TEXT")
                        .help(format!("Channel/profile name ({})", UserInfo::CHANNEL_NAME_HINT)),
                )
                .arg(
                    Arg::new("niche")
                        .long("niche")
                        .value_name("TEXT")
                        .help(format!("Your niche ({})", UserInfo::NICHE_HINT)),
                )
                .arg(
                    Arg::new("links")
                        .long("links")
                        .value_name("TEXT")
                        .help(format!("Links ({})", UserInfo::LINKS_HINT)),
                )
                .arg(
                    Arg::new("info")
                        .long("info")
                        .value_name("TEXT")
                        .help("Additional information, one item per line"),
                )
                .arg(
                    Arg::new("platform")
                        .short('p')
                        .long("platform")
                        .value_name("PLATFORM")
                        .help("Platform to render for (defaults to the profile default, else twitter)"),
                )
                .arg(
                    Arg::new("all")
                        .long("all")
                        .action(ArgAction::SetTrue)
                        .conflicts_with("platform")
                        .help("Render for every platform"),
                )
                .arg(
                    Arg::new("output")
                        .short('o')
                        .long("output")
                        .value_name("PATH")
                        .help("Output file (or directory with --all); defaults to stdout"),
                )
                .arg(seed_arg())
                .arg(
                    Arg::new("strict")
                        .long("strict")
                        .action(ArgAction::SetTrue)
                        .help("Fail on an unknown platform instead of rendering an empty bio"),
                )
                .arg(
                    Arg::new("copy")
                        .long("copy")
                        .action(ArgAction::SetTrue)
                        .conflicts_with("all")
                        .help("Copy the bio to the system clipboard"),
                ),
        )
        .subcommand(
            Command::new("enhance")
                .about("Decorate additional info text with emoji")
                .arg(
                    Arg::new("text")
                        .short('t')
                        .long("text")
                        .value_name("TEXT")
                        .help("Text to decorate (reads stdin when omitted)"),
                )
                .arg(seed_arg()),
        )
        .subcommand(Command::new("platforms").about("List supported platforms"))
}

fn seed_arg() -> Arg {
    Arg::new("seed")
        .long("seed")
        .value_name("N")
        .value_parser(clap::value_parser!(u64))
        .help("Seed the decoration picker for reproducible output")
}

async fn generate_command(matches: &ArgMatches) -> Result<()> {
    let config = match matches.get_one::<String>("profile-file") {
        Some(file) => {
            tracing::info!(file = %file, "Loading profile");
            parse_yaml_file(file).await?
        }
        None => BioConfig::default(),
    };

    let profile = apply_inline_fields(UserInfoBuilder::from(config.profile.clone()), matches);
    let mut builder = BioWriterBuilder::from_config(config).profile(profile);
    if let Some(seed) = matches.get_one::<u64>("seed") {
        builder = builder.seed(*seed);
    }
    if matches.get_flag("strict") {
        builder = builder.strict(true);
    }
    let writer = builder.build();

    let output = matches.get_one::<String>("output").map(PathBuf::from);

    if matches.get_flag("all") {
        match output {
            Some(dir) => {
                let written = writer.generate_to_directory(&dir).await?;
                println!("✓ Wrote {} bios to {}", written.len(), dir.display());
            }
            None => {
                for (platform, bio) in writer.generate_all() {
                    println!("== {} ==", platform.label());
                    println!("{}", bio);
                    println!();
                }
            }
        }
        return Ok(());
    }

    let bio = match matches.get_one::<String>("platform") {
        Some(platform_id) => writer.generate_for(platform_id)?,
        None => writer.generate_default(),
    };

    match output {
        Some(file) => {
            tokio::fs::write(&file, &bio)
                .await
                .with_context(|| format!("Failed to write bio: {}", file.display()))?;
            println!("✓ Bio written to: {}", file.display());
        }
        None => println!("{}", bio),
    }

    if matches.get_flag("copy") {
        eprintln!("{}", clipboard::copy_to_clipboard(&bio));
    }

    Ok(())
}

/// Inline flags override the matching profile fields
fn apply_inline_fields(mut profile: UserInfoBuilder, matches: &ArgMatches) -> UserInfoBuilder {
    if let Some(name) = matches.get_one::<String>("name") {
        profile = profile.channel_name(name);
    }
    if let Some(niche) = matches.get_one::<String>("niche") {
        profile = profile.niche(niche);
    }
    if let Some(links) = matches.get_one::<String>("links") {
        profile = profile.links(links);
    }
    if let Some(info) = matches.get_one::<String>("info") {
        profile = profile.additional_info(info);
    }
    profile
}

async fn enhance_command(matches: &ArgMatches) -> Result<()> {
    let text = match matches.get_one::<String>("text") {
        Some(text) => text.clone(),
        None => {
            let mut buffer = String::new();
            tokio::io::stdin()
                .read_to_string(&mut buffer)
                .await
                .context("Failed to read text from stdin")?;
            buffer
        }
    };

    let enhanced = match matches.get_one::<u64>("seed") {
        Some(seed) => {
            use rand::SeedableRng;
            enhance_additional_info_with(&text, &mut rand::rngs::StdRng::seed_from_u64(*seed))
        }
        None => enhance_additional_info(&text),
    };
    print!("{}", enhanced);

    Ok(())
}

fn platforms_command() {
    for platform in Platform::ALL {
        println!("{:<10} {}", platform.id(), platform.label());
        for line in platform.placeholder_info().lines() {
            println!("           {}", line);
        }
    }
}
