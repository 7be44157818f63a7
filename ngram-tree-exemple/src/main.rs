use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, ValueEnum};
use ngram_tree_core::{
    build_forest_with, render_forest_html, render_forest_outline, Forest, Stopwords, TreeOptions,
    WordTokenizer,
};

mod io;

/// Rendering written for each input text
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq)]
enum Format {
    /// Emacs outline-mode text
    Outline,
    /// Nested HTML list
    Html,
    /// JSON array of trees
    Json,
}

impl Format {
    /// File extension used when writing next to the input
    fn extension(self) -> &'static str {
        match self {
            Format::Outline => "org",
            Format::Html => "html",
            Format::Json => "json",
        }
    }
}

/// Summarize the repeated phrases of a text as an n-gram frequency tree
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Text file, or directory whose `.txt` files are all processed
    input: PathBuf,

    /// Longest n-gram length bound (n-grams shorter than this are counted)
    #[arg(short, long, default_value_t = 10)]
    max_length: usize,

    /// Built-in stopword list to apply (en, fr, de, es, it, pt, nl)
    #[arg(short, long)]
    stopwords: Option<String>,

    /// Additional stopword, can be repeated
    #[arg(long = "extra-stopword")]
    extra_stopwords: Vec<String>,

    /// Lowercase every token before counting
    #[arg(long, default_value_t = false)]
    lowercase: bool,

    #[arg(short, long, value_enum, default_value_t = Format::Outline)]
    format: Format,

    /// Level marker of outline roots, may start with a dash (`--marker "- "`)
    #[arg(long, default_value = "* ", allow_hyphen_values = true)]
    marker: String,

    /// Output file (single input only); prints to stdout when omitted
    #[arg(short, long)]
    output: Option<PathBuf>,
}

impl Cli {
    /// Builds the pipeline options from the flags.
    fn tree_options(&self) -> Result<TreeOptions, Box<dyn std::error::Error>> {
        let mut stopwords = match &self.stopwords {
            Some(language) => Stopwords::for_language(language),
            None => Stopwords::empty(),
        };
        stopwords.extend(self.extra_stopwords.iter().map(String::as_str));

        Ok(TreeOptions::new(self.max_length, stopwords)?)
    }

    fn render(&self, forest: &Forest) -> Result<String, Box<dyn std::error::Error>> {
        Ok(match self.format {
            Format::Outline => render_forest_outline(forest, &self.marker),
            Format::Html => render_forest_html(forest),
            Format::Json => serde_json::to_string_pretty(forest)?,
        })
    }

    /// Builds and renders the forest of one text file.
    fn process(
        &self,
        path: &Path,
        options: &TreeOptions,
    ) -> Result<String, Box<dyn std::error::Error>> {
        let text = io::read_text(path)?;
        let tokenizer = WordTokenizer::new().with_lowercase(self.lowercase);
        let forest = build_forest_with(&tokenizer, &text, options)?;
        log::info!("{}: {} trees, {} n-grams", path.display(), forest.len(), forest.node_count());
        self.render(&forest)
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let cli = Cli::parse();
    let options = cli.tree_options()?;

    let input = io::resolve_input(&cli.input);
    if input.is_dir() {
        if cli.output.is_some() {
            return Err("--output cannot be used with a directory input".into());
        }

        // Each text gets its rendering written next to it
        for file in io::list_files(&input, "txt")? {
            let rendered = cli.process(&file, &options)?;
            let output = io::rendering_path(&file, cli.format.extension())?;
            fs::write(&output, rendered)?;
            println!("Written {}", output.display());
        }
        return Ok(());
    }

    let rendered = cli.process(&input, &options)?;
    match &cli.output {
        Some(output) => fs::write(output, rendered)?,
        None => print!("{rendered}"),
    }

    Ok(())
}
