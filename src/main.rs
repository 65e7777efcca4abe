use anyhow::{Context, Result};
use clap::Parser;
use std::io::Read;
use std::path::{Path, PathBuf};

use newsprint::{convert, fetch, xml};

#[derive(Parser, Debug)]
#[command(
    name = "newsprint",
    about = "Convert an RSS 2.0 news feed into a console summary or an HTML page"
)]
struct Args {
    /// Feed source: a local file path, an http(s) URL, or "-" for stdin
    input: String,

    /// Write an HTML document to FILE instead of printing a console summary
    #[arg(long, value_name = "FILE")]
    html: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing for debug logging
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    let xml_text = read_input(&args.input).await?;
    let root = xml::parse_document(&xml_text).context("Failed to parse feed XML")?;

    match &args.html {
        Some(path) => {
            let html = convert::convert_to_html(&root)
                .context("Feed is not a renderable RSS 2.0 document")?;
            write_atomic(path, html.as_bytes())
                .with_context(|| format!("Failed to write '{}'", path.display()))?;
            println!("Wrote {}", path.display());
        }
        None => {
            let lines = convert::convert_to_console_lines(&root)
                .context("Feed is not a valid RSS 2.0 document")?;
            for line in lines {
                println!("{}", line);
            }
        }
    }

    Ok(())
}

/// Reads the feed XML from stdin, a remote URL, or a local file.
async fn read_input(input: &str) -> Result<String> {
    if input == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read feed from stdin")?;
        return Ok(buf);
    }

    if fetch::is_remote(input) {
        let client = reqwest::Client::builder()
            .user_agent(concat!("newsprint/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to build HTTP client")?;
        return fetch::fetch_feed(&client, input)
            .await
            .with_context(|| format!("Failed to fetch '{}'", input));
    }

    std::fs::read_to_string(input).with_context(|| format!("Failed to read '{}'", input))
}

/// Writes a file using the write-to-temp-then-rename pattern, so the
/// destination is never left holding a partial document.
fn write_atomic(path: &Path, content: &[u8]) -> Result<()> {
    use std::io::Write;
    use std::time::{SystemTime, UNIX_EPOCH};

    // Randomized temp filename to prevent clashes with concurrent runs
    let random_suffix = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or(0);
    let temp_path = path.with_extension(format!("tmp.{:016x}", random_suffix));

    let mut file = std::fs::OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(&temp_path)
        .with_context(|| {
            format!(
                "Failed to create temporary file '{}': check directory permissions",
                temp_path.display()
            )
        })?;

    file.write_all(content).with_context(|| {
        let _ = std::fs::remove_file(&temp_path);
        format!(
            "Failed to write temporary file '{}': disk may be full",
            temp_path.display()
        )
    })?;

    file.sync_all().with_context(|| {
        let _ = std::fs::remove_file(&temp_path);
        format!(
            "Failed to sync temporary file '{}' to disk",
            temp_path.display()
        )
    })?;

    drop(file);

    std::fs::rename(&temp_path, path).with_context(|| {
        let _ = std::fs::remove_file(&temp_path);
        format!(
            "Failed to rename '{}' to '{}'",
            temp_path.display(),
            path.display()
        )
    })?;

    Ok(())
}
