use std::io::{self, BufWriter, Write};

use anyhow::{Context, Result};
use clap::Parser;

use quill::model::Document;
use quill::syntax::StyleTag;
use quill::theme::load_theme;
use quill::EngineConfig;

mod cli;

use cli::{CliArgs, OutputMode};

const ANSI_RESET: &str = "\x1b[0m";
const ANSI_BOLD: &str = "\x1b[1m";

fn main() -> Result<()> {
    let args = CliArgs::parse();
    quill::tracing::init(args.log_file);

    let mut config = EngineConfig::load();
    if let Some(theme) = &args.theme {
        config.theme = theme.clone();
    }
    if args.no_highlight {
        config.syntax_highlighting = false;
    }

    let mut doc = Document::from_file(args.file.clone(), &config)
        .with_context(|| format!("failed to open {}", args.file.display()))?;

    if let Some(id) = &args.theme {
        // An explicitly requested theme must exist
        let theme = load_theme(id)
            .map_err(anyhow::Error::msg)
            .with_context(|| format!("failed to load theme '{}'", id))?;
        doc.set_theme(theme);
        doc.set_font(&config.font_face, config.font_size);
    }

    tracing::debug!(
        "Highlighted {} ({} chars)",
        doc.display_name(),
        doc.len_chars()
    );

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    match args.output_mode() {
        OutputMode::Ansi => write_ansi(&mut out, &doc)?,
        OutputMode::Runs => write_runs(&mut out, &doc)?,
        OutputMode::Letters => writeln!(out, "{}", doc.styles().to_letters())?,
    }
    out.flush()?;
    Ok(())
}

fn write_ansi(out: &mut impl Write, doc: &Document) -> Result<()> {
    let text: Vec<char> = doc.buffer().rope().chars().collect();
    let table = doc.style_table();
    for run in doc.styles().runs() {
        let style = table.get(run.tag);
        let chunk: String = text[run.range].iter().collect();
        if style.bold {
            write!(out, "{}", ANSI_BOLD)?;
        }
        write!(out, "{}{}{}", style.color.ansi_fg(), chunk, ANSI_RESET)?;
    }
    Ok(())
}

fn write_runs(out: &mut impl Write, doc: &Document) -> Result<()> {
    let text: Vec<char> = doc.buffer().rope().chars().collect();
    for run in doc.styles().runs() {
        if run.tag == StyleTag::Plain {
            continue;
        }
        let chunk: String = text[run.range.clone()].iter().collect();
        writeln!(
            out,
            "{}..{}\t{}\t{:?}",
            run.range.start,
            run.range.end,
            run.tag.name(),
            chunk
        )?;
    }
    Ok(())
}
