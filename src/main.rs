use anyhow::Result;
use clap::Parser;
use std::fs;
use std::path::PathBuf;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use uuid::Uuid;
use vocabcard_generator::characters::Character;
use vocabcard_generator::generator::ContentGenerator;

#[derive(Debug, Parser)]
#[command(name = "vocabcard-generator")]
#[command(about = "Generate themed vocabulary flashcard content")]
struct CliArgs {
    /// Character to illustrate, e.g. Tanjiro or Chiikawa.
    #[arg(value_name = "CHARACTER", value_parser = parse_character_arg)]
    character: Character,

    /// Free-text scene description, e.g. "autumn forest".
    #[arg(value_name = "SCENE")]
    scene: String,

    /// Directory to write the flashcard JSON and image into.
    #[arg(long, value_name = "DIR", default_value = "output")]
    output_dir: PathBuf,
}

fn parse_character_arg(input: &str) -> std::result::Result<Character, String> {
    input.parse::<Character>().map_err(|_| {
        let known: Vec<&str> = Character::ALL.iter().map(|c| c.name()).collect();
        format!(
            "Unknown character '{}'. Expected one of: {}",
            input,
            known.join(", ")
        )
    })
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "vocabcard_generator=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting vocabcard-generator");

    let args = CliArgs::parse();

    match ContentGenerator::from_env() {
        Ok(generator) => match run(&generator, &args).await {
            Ok(_) => {
                info!("Generation completed successfully");
                Ok(())
            }
            Err(e) => {
                error!("Generation failed: {}", e);
                std::process::exit(1);
            }
        },
        Err(e) => {
            error!("Failed to initialize generator: {}", e);
            std::process::exit(1);
        }
    }
}

async fn run(generator: &ContentGenerator, args: &CliArgs) -> vocabcard_generator::Result<()> {
    let content = generator.generate(args.character, &args.scene).await?;

    let session_id = Uuid::new_v4();
    let out_dir = args.output_dir.join(format!(
        "{}_{}",
        args.character.name().to_lowercase(),
        session_id
    ));
    fs::create_dir_all(&out_dir)?;

    let json = serde_json::to_string_pretty(&content)?;
    let json_path = out_dir.join("flashcard.json");
    fs::write(&json_path, &json)?;
    info!("Saved flashcard data at: {}", json_path.display());

    if let Some(image) = &content.image {
        let image_path = out_dir.join(format!("image.{}", image.file_extension()));
        fs::write(&image_path, image.decode()?)?;
        info!("Saved image at: {}", image_path.display());
    }

    info!(
        "Generated {} vocabulary items for {} in a {} setting",
        content.vocabulary.len(),
        args.character,
        args.scene
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::parse_character_arg;
    use vocabcard_generator::characters::Character;

    #[test]
    fn test_parse_character_arg_valid() {
        assert_eq!(parse_character_arg("tanjiro").unwrap(), Character::Tanjiro);
    }

    #[test]
    fn test_parse_character_arg_invalid_lists_known_characters() {
        let err = parse_character_arg("Totoro").unwrap_err();
        assert!(err.contains("Totoro"));
        assert!(err.contains("Chiikawa"));
    }
}
