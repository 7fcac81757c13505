//! CLI tool for planning slide layouts from slide text.

use anyhow::{Context, Result};
use clap::Parser;
use deck_core::{
    DeckInput, DeckPlan, LayoutEngine, PlaceholderCounts, PlanFormatter, SlideAssemblyPlanner,
};
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Plan slide layouts from a JSON deck of slide titles and text.
#[derive(Parser, Debug)]
#[command(name = "deck-plan")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Input deck file(s): a JSON array of {"title", "content"} slides,
    /// or {"title": ..., "slides": [...]}
    #[arg(required = true)]
    input: Vec<PathBuf>,

    /// Output directory (default: same as input file)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print output to stdout instead of writing to file
    #[arg(short, long)]
    print: bool,

    /// Print a text outline instead of the JSON plan
    #[arg(short, long)]
    text: bool,

    /// Deck title, overriding the one in the input file
    #[arg(long)]
    deck_title: Option<String>,

    /// Placeholder counts for slots 0-7, comma-separated
    #[arg(long, value_name = "COUNTS", default_value = "2,2,2,3,5,1,0,3")]
    placeholders: PlaceholderCounts,

    /// Truncate captions longer than this many characters
    #[arg(long, default_value = "200")]
    caption_limit: usize,

    /// Treat inputs as saved plans and print their outline
    #[arg(long)]
    from_plan: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    if args.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    }

    let engine = LayoutEngine::new()
        .with_planner(SlideAssemblyPlanner::new().with_caption_limit(args.caption_limit));
    let formatter = PlanFormatter::new().with_reasoning(args.verbose);

    for input_path in &args.input {
        if args.verbose {
            eprintln!("Processing: {}", input_path.display());
        }

        if args.from_plan {
            match DeckPlan::load(input_path) {
                Ok(plan) => print!("{}", formatter.format_with_newline(&plan)),
                Err(e) => eprintln!("Error reading plan {}: {}", input_path.display(), e),
            }
            continue;
        }

        match process_file(input_path, &args, &engine) {
            Ok(plan) => {
                if args.print {
                    if args.text {
                        print!("{}", formatter.format_with_newline(&plan));
                    } else {
                        println!("{}", plan.to_json()?);
                    }
                } else {
                    let output_path = get_output_path(input_path, args.output.as_ref(), args.text)?;
                    write_output(&output_path, &plan, &formatter, args.text)?;
                    if args.verbose {
                        eprintln!("Written to: {}", output_path.display());
                    }
                }
            }
            Err(e) => {
                eprintln!("Error processing {}: {:#}", input_path.display(), e);
            }
        }
    }

    Ok(())
}

/// Plan a single deck file.
fn process_file(input_path: &Path, args: &Args, engine: &LayoutEngine) -> Result<DeckPlan> {
    let deck = DeckInput::load(input_path)
        .with_context(|| format!("Failed to read deck {}", input_path.display()))?;

    let title = args.deck_title.as_deref().unwrap_or(&deck.title);

    if args.verbose {
        eprintln!("  Found {} slides", deck.slides.len());
    }

    let plan = engine.plan_deck(title, &deck.slides, &args.placeholders);

    let degraded = plan
        .slides
        .iter()
        .filter(|s| s.instruction.fallback.is_some())
        .count();
    if degraded > 0 {
        log::info!("{} slide(s) used a fallback mapping", degraded);
    }

    Ok(plan)
}

/// Determine the output path for a processed file.
fn get_output_path(input_path: &Path, output_dir: Option<&PathBuf>, text: bool) -> Result<PathBuf> {
    let stem = input_path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("deck");

    let extension = if text { "plan.txt" } else { "plan.json" };
    let output_filename = format!("{}.{}", stem, extension);

    let output_path = match output_dir {
        Some(dir) => {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create output directory: {}", dir.display()))?;
            dir.join(output_filename)
        }
        None => {
            if let Some(parent) = input_path.parent() {
                parent.join(output_filename)
            } else {
                PathBuf::from(output_filename)
            }
        }
    };

    Ok(output_path)
}

/// Write a plan to a file as JSON or as a text outline.
fn write_output(path: &Path, plan: &DeckPlan, formatter: &PlanFormatter, text: bool) -> Result<()> {
    if !text {
        return plan
            .save(path)
            .with_context(|| format!("Failed to write {}", path.display()));
    }

    let mut file =
        File::create(path).with_context(|| format!("Failed to create {}", path.display()))?;

    file.write_all(formatter.format_with_newline(plan).as_bytes())
        .with_context(|| format!("Failed to write to {}", path.display()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_parse_defaults() {
        let args = Args::try_parse_from(["deck-plan", "deck.json"]).unwrap();
        assert_eq!(args.input, vec![PathBuf::from("deck.json")]);
        assert_eq!(args.placeholders, PlaceholderCounts::default());
        assert_eq!(args.caption_limit, 200);
        assert!(!args.print);
    }

    #[test]
    fn test_args_reject_bad_placeholders() {
        assert!(Args::try_parse_from(["deck-plan", "--placeholders", "1,2", "deck.json"]).is_err());
    }

    #[test]
    fn test_output_path_next_to_input() {
        let path = get_output_path(Path::new("talks/q3.json"), None, false).unwrap();
        assert_eq!(path, PathBuf::from("talks/q3.plan.json"));

        let path = get_output_path(Path::new("q3.json"), None, true).unwrap();
        assert_eq!(path, PathBuf::from("q3.plan.txt"));
    }
}
