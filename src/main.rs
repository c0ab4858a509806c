//! mklabels - print a sheet of labels with cutting guides
//!
//! Usage:
//!   mklabels "Flour" "Sugar" "Salt"        Compile and open the sheet
//!   mklabels -t "Flour" > labels.tex       Print the LaTeX source only
//!   mklabels -r native -o labels.pdf ...   Write a PDF without LaTeX
//!   cat pantry.txt | mklabels -W 40 -H 20  Read one label per line

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, ValueEnum};
use mklabels::compile::{Toolchain, DEFAULT_COMPILER, DEFAULT_VIEWER};
use mklabels::pdf::{write_pdf, PdfOptions};
use mklabels::{render_sheet, Info, LabelGeometry, Mm, PageGeometry, Sheet, Style};
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

/// Generate a printable sheet of labels with cutting guides
#[derive(Parser, Debug)]
#[command(name = "mklabels")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Label texts, one label each (read from stdin, one per line, if omitted)
    labels: Vec<String>,

    /// Width of the labels (mm)
    #[arg(short = 'W', long, default_value_t = 56)]
    width: u32,

    /// Height of the labels (mm)
    #[arg(short = 'H', long, default_value_t = 13)]
    height: u32,

    /// Page margins of the whole page (mm)
    #[arg(short = 'm', long = "page-margin", default_value_t = 15)]
    page_margin: u32,

    /// Length of cut markers (mm)
    #[arg(short = 'l', long = "marker-length", default_value_t = 2)]
    marker_length: u32,

    /// Marker distance to cut point (mm)
    #[arg(short = 's', long = "marker-sep", default_value_t = 1)]
    marker_sep: u32,

    /// Output LaTeX code only; don't compile
    #[arg(short = 't', long, conflicts_with_all = ["output", "renderer"])]
    latex: bool,

    /// Draw label outlines and midlines
    #[arg(short = 'd', long)]
    debug: bool,

    /// Shape of the cut markers: plain or rounded
    #[arg(long, default_value_t = Style::Plain)]
    style: Style,

    /// How to produce the PDF
    #[arg(short = 'r', long, value_enum, default_value_t = RendererArg::Latex)]
    renderer: RendererArg,

    /// Write the PDF here instead of opening it in a viewer
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,

    /// LaTeX compiler to run
    #[arg(long, default_value = DEFAULT_COMPILER)]
    compiler: String,

    /// Program used to open the PDF. `xdg-open` may return before the PDF is
    /// read, in which case use --output instead
    #[arg(long, default_value = DEFAULT_VIEWER)]
    viewer: String,

    /// Document title (native renderer only)
    #[arg(long)]
    title: Option<String>,

    /// More log output (-v info, -vv debug)
    #[arg(short = 'v', long, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum RendererArg {
    /// Generate LaTeX and run the compiler on it
    Latex,
    /// Write the PDF directly
    Native,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let labels = if cli.labels.is_empty() {
        read_labels(io::stdin().lock()).context("failed to read labels from stdin")?
    } else {
        cli.labels.clone()
    };
    if labels.is_empty() {
        anyhow::bail!("no labels given");
    }

    let page = PageGeometry::sheet(Mm::from(cli.page_margin));
    let label = LabelGeometry::new(
        Mm::from(cli.width),
        Mm::from(cli.height),
        Mm::from(cli.marker_length),
        Mm::from(cli.marker_sep),
    );
    let sheet = Sheet::plan(&labels, page, label, cli.style)?;
    log::info!(
        "{} labels on a {} x {} grid",
        labels.len(),
        sheet.grid.rows,
        sheet.grid.columns
    );

    if cli.title.is_some() && (cli.latex || cli.renderer != RendererArg::Native) {
        log::warn!("--title only applies to the native renderer and is ignored");
    }

    if cli.latex {
        let markup = render_sheet(&sheet, cli.debug)?;
        io::stdout().lock().write_all(markup.as_bytes())?;
        return Ok(());
    }

    let toolchain = Toolchain {
        compiler: cli.compiler.clone(),
        viewer_args: if cli.viewer == DEFAULT_VIEWER {
            Toolchain::default().viewer_args
        } else {
            Vec::new()
        },
        viewer: cli.viewer.clone(),
    };

    // deleted on drop, including when compiling or viewing fails
    let workdir = tempfile::tempdir().context("failed to create a working directory")?;

    let document = match cli.renderer {
        RendererArg::Latex => {
            let markup = render_sheet(&sheet, cli.debug)?;
            toolchain.compile(&markup, workdir.path())?
        }
        RendererArg::Native => {
            let mut options = PdfOptions {
                debug_guides: cli.debug,
                ..PdfOptions::default()
            };
            if let Some(title) = &cli.title {
                options.info = Some(Info::new().title(title).clone());
            }
            let path = workdir.path().join("labels.pdf");
            let file = std::fs::File::create(&path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            write_pdf(&sheet, &options, io::BufWriter::new(file))?;
            path
        }
    };

    match &cli.output {
        Some(output) => save(&document, output),
        None => Ok(toolchain.view(&document)?),
    }
}

/// One label per non-empty line
fn read_labels<R: BufRead>(input: R) -> io::Result<Vec<String>> {
    let mut labels = Vec::new();
    for line in input.lines() {
        let line = line?;
        let line = line.trim();
        if !line.is_empty() {
            labels.push(line.to_string());
        }
    }
    Ok(labels)
}

fn save(document: &Path, output: &Path) -> Result<()> {
    std::fs::copy(document, output)
        .with_context(|| format!("failed to write {}", output.display()))?;
    log::info!("wrote {}", output.display());
    Ok(())
}
