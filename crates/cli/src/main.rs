mod echo;

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::Context;
use clap::Parser;
use owo_colors::OwoColorize;
use teaser_core::{
    Article, FetchConfig, HttpArticleSource, OutputFormat, StopWords, Summarizer, SummarizerConfig, Summary,
    fetch_file, fetch_stdin,
};

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Summarize an article into its most representative sentences
#[derive(Parser, Debug)]
#[command(name = "teaser")]
#[command(author = "Teaser Contributors")]
#[command(version = VERSION)]
#[command(about = "Summarize articles from the web, files, or stdin", long_about = None)]
struct Args {
    /// URL to fetch, local text or HTML file, or "-" for stdin
    #[arg(value_name = "INPUT")]
    input: String,

    /// Title of the text (file and stdin input; overrides the title of an HTML file)
    #[arg(short, long, value_name = "TITLE")]
    title: Option<String>,

    /// Output format (text, markdown, json)
    #[arg(short, long, default_value = "text", value_name = "FORMAT")]
    format: OutputFormat,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Number of sentences in the summary
    #[arg(short = 'n', long, default_value = "5", value_name = "NUM")]
    sentences: usize,

    /// Number of keywords used for scoring
    #[arg(long, default_value = "10", value_name = "NUM")]
    keywords: usize,

    /// Stop-word list, one word per line (default: bundled English list)
    #[arg(long, value_name = "FILE")]
    stopwords: Option<PathBuf>,

    /// Treat file or stdin input as HTML
    #[arg(long)]
    html: bool,

    /// Prefix each sentence with its score (text format only)
    #[arg(long)]
    scores: bool,

    /// HTTP timeout in seconds
    #[arg(long, default_value = "30", value_name = "SECS")]
    timeout: u64,

    /// Custom User-Agent for HTTP requests
    #[arg(long, value_name = "UA")]
    user_agent: Option<String>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

/// Initialize tracing on stderr; `RUST_LOG` overrides the default filter.
fn init_tracing(verbose: bool) {
    use tracing_subscriber::{EnvFilter, fmt};

    let filter = if verbose { "teaser_core=debug,teaser=debug" } else { "teaser_core=warn" };
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn is_url(input: &str) -> bool {
    input.starts_with("http://") || input.starts_with("https://")
}

fn is_html_path(input: &str) -> bool {
    Path::new(input)
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("html") || ext.eq_ignore_ascii_case("htm"))
}

/// Summarizes a local file or stdin.
fn summarize_local(args: &Args, summarizer: &Summarizer) -> anyhow::Result<Summary> {
    let content = if args.input == "-" {
        if args.verbose {
            echo::print_step(1, 3, "Reading from stdin");
        }
        fetch_stdin().context("Failed to read from stdin")?
    } else {
        if args.verbose {
            echo::print_step(1, 3, &format!("Reading from file {}", args.input.bright_white()));
        }
        fetch_file(&args.input).with_context(|| format!("Failed to read file: {}", args.input))?
    };

    if args.verbose {
        echo::print_detail("Size", &echo::format_size(content.len()));
    }

    let (title, text) = if args.html || is_html_path(&args.input) {
        let article = Article::from_html(&content, None).context("Failed to extract article from HTML")?;
        (args.title.clone().unwrap_or(article.title), article.cleaned_text)
    } else {
        (args.title.clone().unwrap_or_default(), content)
    };

    if args.verbose {
        echo::print_detail("Title", if title.is_empty() { "(none)" } else { title.as_str() });
        eprintln!();
        echo::print_step(2, 3, "Scoring sentences");
    }

    Ok(summarizer.summarize_document(&title, &text))
}

/// Fetches and summarizes a web page.
async fn summarize_remote(args: &Args, summarizer: &Summarizer) -> anyhow::Result<Summary> {
    if args.verbose {
        echo::print_step(1, 3, &format!("Fetching from {}", args.input.bright_white().underline()));
    }

    let mut config = FetchConfig { timeout: args.timeout, ..Default::default() };
    if let Some(user_agent) = &args.user_agent {
        config.user_agent = user_agent.clone();
    }
    let source = HttpArticleSource::with_config(config);

    if args.verbose {
        echo::print_step(2, 3, "Extracting and scoring sentences");
    }

    summarizer
        .summarize_url_document(&source, &args.input)
        .await
        .with_context(|| format!("No summary could be produced for {}", args.input))
}

fn render(summary: &Summary, args: &Args) -> anyhow::Result<String> {
    if args.scores && args.format == OutputFormat::PlainText {
        let mut out = String::new();
        for sentence in &summary.sentences {
            out.push_str(&format!("{:>8.4}  {}\n", sentence.total(), sentence.text));
        }
        return Ok(out);
    }

    summary.to_format(args.format).context("Failed to render summary")
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    if args.verbose {
        echo::print_banner();
        echo::print_info("Debug logging enabled");
        eprintln!();
    }

    let stop_words = match &args.stopwords {
        Some(path) => StopWords::from_file(path)
            .with_context(|| format!("Failed to load stop words from {}", path.display()))?,
        None => StopWords::english(),
    };

    let config = SummarizerConfig::builder()
        .max_sentences(args.sentences)
        .max_keywords(args.keywords)
        .build();
    let summarizer = Summarizer::with_config(config, stop_words);

    let started = Instant::now();
    let summary = if is_url(&args.input) {
        summarize_remote(&args, &summarizer).await?
    } else {
        summarize_local(&args, &summarizer)?
    };

    if args.verbose {
        echo::print_detail("Sentences", &summary.sentence_count.to_string());
        if summary.passthrough {
            echo::print_info("Short document, every sentence kept in order");
        }
        echo::print_keywords(&summary.keywords);
        echo::print_timing("Summarize", started.elapsed());
        eprintln!();
        echo::print_step(3, 3, "Writing output");
        echo::print_detail("Format", &format!("{:?}", args.format));
        eprintln!();
    }

    let output = render(&summary, &args)?;

    match &args.output {
        Some(path) => {
            fs::write(path, output).with_context(|| format!("Failed to write to file: {}", path.display()))?;
            echo::print_success(&format!("Output written to {}", path.display().bright_white()));
        }
        None => {
            print!("{}", output);
        }
    }

    Ok(())
}
