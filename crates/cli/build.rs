use std::{env, fs, path::PathBuf};

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=OUT_DIR");

    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
    let completions_dir = out_dir.join("completions");

    fs::create_dir_all(&completions_dir).unwrap();

    let mut cmd = clap::Command::new("teaser")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Teaser Contributors")
        .about("Summarize articles from the web, files, or stdin")
        .arg(clap::arg!(<INPUT> "URL to fetch, local text or HTML file, or '-' for stdin"))
        .arg(clap::arg!(-t --title <TITLE> "Title of the text (file and stdin input)"))
        .arg(
            clap::arg!(-f --format <FORMAT> "Output format (text, markdown, json)")
                .value_name("FORMAT")
                .default_value("text")
                .value_parser(["text", "markdown", "json"]),
        )
        .arg(
            clap::arg!(-o --output <FILE> "Output file (default: stdout)")
                .value_name("FILE")
                .value_parser(clap::value_parser!(std::path::PathBuf)),
        )
        .arg(clap::arg!(-n --sentences <NUM> "Number of sentences in the summary").default_value("5"))
        .arg(clap::arg!(--keywords <NUM> "Number of keywords used for scoring").default_value("10"))
        .arg(
            clap::arg!(--stopwords <FILE> "Stop-word list, one word per line")
                .value_name("FILE")
                .value_parser(clap::value_parser!(std::path::PathBuf)),
        )
        .arg(clap::arg!(--html "Treat file or stdin input as HTML"))
        .arg(clap::arg!(--scores "Prefix each sentence with its score (text format only)"))
        .arg(clap::arg!(--timeout <SECS> "HTTP timeout in seconds").default_value("30"))
        .arg(clap::arg!(--user_agent <UA> "Custom User-Agent for HTTP requests").value_name("UA"))
        .arg(clap::arg!(-v --verbose "Enable debug logging"));

    clap_complete::generate_to(clap_complete::shells::Bash, &mut cmd, "teaser", &completions_dir).unwrap();
    clap_complete::generate_to(clap_complete::shells::Zsh, &mut cmd, "teaser", &completions_dir).unwrap();
    clap_complete::generate_to(clap_complete::shells::Fish, &mut cmd, "teaser", &completions_dir).unwrap();
    clap_complete::generate_to(clap_complete::shells::PowerShell, &mut cmd, "teaser", &completions_dir).unwrap();

    println!(
        "cargo:warning=Shell completions generated in: {}",
        completions_dir.display()
    );
}
