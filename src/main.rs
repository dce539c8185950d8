use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use certforge::{CertConfig, ExportArtifact, ExportFormat, IdentityRecord, Prefix, Session, ViewState};

/// Collect an identity record, preview the certificate, export it.
#[derive(Parser)]
#[command(name = "certforge", version, about = "Render and export personalized certificates")]
struct Args {
    /// Directory exported artifacts are written to
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,

    /// Font file for the certificate text (system fonts are used otherwise)
    #[arg(long)]
    font: Option<PathBuf>,

    /// Identity record as JSON, e.g. '{"prefix":"นาย","first_name":"สมชาย","last_name":"ใจดี"}'.
    /// When given, runs once without prompting.
    #[arg(long)]
    record: Option<String>,

    /// Export format for --record mode: jpeg, pdf, or both
    #[arg(long, default_value = "both")]
    format: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let config = CertConfig {
        font_path: args.font.clone(),
        output_dir: args.out_dir.clone(),
    };
    let mut session = Session::new(config).await?;

    if let Some(json) = args.record.as_deref() {
        let record: IdentityRecord =
            serde_json::from_str(json).context("invalid --record JSON")?;
        session.set_record(record);
        session.submit().await?;
        for format in parse_formats(&args.format)? {
            report(session.export(format).await?);
        }
    } else {
        run_interactive(&mut session).await?;
    }

    session.close().await?;
    Ok(())
}

fn parse_formats(s: &str) -> anyhow::Result<Vec<ExportFormat>> {
    match s.trim() {
        "both" => Ok(vec![ExportFormat::Jpeg, ExportFormat::Pdf]),
        other => Ok(vec![other.parse::<ExportFormat>()?]),
    }
}

async fn run_interactive(session: &mut Session) -> anyhow::Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        match session.state() {
            ViewState::Collecting => {
                println!("ข้อมูลสำหรับ Certificate");
                for (i, prefix) in Prefix::ALL.iter().enumerate() {
                    println!("  {}. {}", i + 1, prefix);
                }
                let choice = match prompt(&mut lines, "เลือกคำนำหน้า (1-3, q ออก): ")? {
                    Some(line) => line,
                    None => break,
                };
                if choice.trim().eq_ignore_ascii_case("q") {
                    break;
                }
                session.set_prefix(parse_prefix(&choice));

                let first = match prompt(&mut lines, "ชื่อ: ")? {
                    Some(line) => line,
                    None => break,
                };
                session.set_first_name(first.trim());

                let last = match prompt(&mut lines, "นามสกุล: ")? {
                    Some(line) => line,
                    None => break,
                };
                session.set_last_name(last.trim());

                // The blocking notification: report the missing fields and
                // collect again.
                if let Err(e) = session.submit().await {
                    eprintln!("{}", e);
                }
            }
            ViewState::Previewing => {
                println!();
                println!("{}", session.preview_text());
                println!();
                let choice = match prompt(
                    &mut lines,
                    "[j] Download JPEG  [p] Download PDF  [e] แก้ไขข้อมูล  [q] ออก: ",
                )? {
                    Some(line) => line,
                    None => break,
                };
                match choice.trim() {
                    "j" => report(session.export(ExportFormat::Jpeg).await?),
                    "p" => report(session.export(ExportFormat::Pdf).await?),
                    "e" => session.edit().await?,
                    "q" => break,
                    _ => {}
                }
            }
        }
    }
    Ok(())
}

/// Accept a menu index or the prefix string itself.
fn parse_prefix(input: &str) -> Option<Prefix> {
    let input = input.trim();
    if let Ok(n) = input.parse::<usize>() {
        return n.checked_sub(1).and_then(|i| Prefix::ALL.get(i).copied());
    }
    input.parse::<Prefix>().ok()
}

fn prompt<I>(lines: &mut I, msg: &str) -> anyhow::Result<Option<String>>
where
    I: Iterator<Item = io::Result<String>>,
{
    print!("{}", msg);
    io::stdout().flush()?;
    match lines.next() {
        Some(line) => Ok(Some(line?)),
        None => Ok(None),
    }
}

fn report(artifact: Option<ExportArtifact>) {
    match artifact {
        Some(a) => println!("saved {}", a.filename),
        None => eprintln!("export is not available yet"),
    }
}
