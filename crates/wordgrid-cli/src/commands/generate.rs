use crate::cli::{GenerateArgs, OutputFormat};
use crate::config::PartialGenerationConfig;
use crate::error::Result;
use crate::utils::{parser, progress::CliProgressHandler};
use serde::Serialize;
use std::fmt::Write as _;
use std::io::Write;
use tracing::info;
use wordgrid::{
    core::models::{grid::LetterGrid, placement::Placement, word::Word},
    engine::progress::ProgressReporter,
    workflows::{self, generate::GenerationResult},
};

#[derive(Serialize)]
struct PuzzleDocument<'a> {
    puzzle: &'a LetterGrid,
    #[serde(skip_serializing_if = "Option::is_none")]
    words: Option<&'a [Word]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    placements: Option<&'a [Placement]>,
}

pub fn run(args: GenerateArgs) -> Result<()> {
    let words = parser::parse_word_list(&args.words)?;
    info!(count = words.len(), "Parsed word list.");

    let partial_config = match &args.config {
        Some(path) => PartialGenerationConfig::from_file(path)?,
        None => PartialGenerationConfig::default(),
    };
    info!("Merging configuration from file and CLI arguments...");
    let final_config = partial_config.merge_with_cli(&args)?;

    let progress_handler = CliProgressHandler::new();
    let reporter = ProgressReporter::with_callback(progress_handler.get_callback());

    info!("Invoking the core generation workflow...");
    let result = workflows::generate::run(words.as_slice(), &final_config, &reporter)?;
    info!(
        size = result.size(),
        passes = result.passes,
        "Workflow finished."
    );

    let rendered = render(&result, args.format, args.answers)?;

    match &args.output {
        Some(path) => {
            std::fs::write(path, &rendered)?;
            eprintln!(
                "✓ {}x{} puzzle written to: {}",
                result.size(),
                result.size(),
                path.display()
            );
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(rendered.as_bytes())?;
            stdout.flush()?;
        }
    }

    Ok(())
}

/// Renders a finished puzzle, always ending with a newline.
pub fn render(result: &GenerationResult, format: OutputFormat, answers: bool) -> Result<String> {
    let mut out = match format {
        OutputFormat::Json => {
            let document = PuzzleDocument {
                puzzle: &result.grid,
                words: answers.then_some(result.words.as_slice()),
                placements: answers.then_some(result.placements.as_slice()),
            };
            serde_json::to_string(&document)?
        }
        OutputFormat::Text => {
            let mut text = result.grid.to_string();
            if answers {
                text.push_str("\n\n");
                for (word, p) in result.words.iter().zip(&result.placements) {
                    // Infallible for String.
                    let _ = writeln!(
                        text,
                        "{}: row {}, col {}, {:?}",
                        word, p.row, p.col, p.direction
                    );
                }
                text.truncate(text.trim_end().len());
            }
            text
        }
    };
    out.push('\n');
    Ok(out)
}
