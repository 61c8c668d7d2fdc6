mod commands;
mod core;
mod manifest;
mod ui;

use clap::Parser;
use crate::core::error::{RelError, print_error};
use std::path::PathBuf;

/// Bump a packaging manifest version and mark the release with an annotated git tag
#[derive(Parser)]
#[command(name = "relkit")]
#[command(version, about, long_about = None)]
#[command(styles = get_styles())]
struct Cli {
  /// New version number (e.g., 3.4.1)
  #[arg(id = "new_version", value_name = "VERSION")]
  version: String,

  /// Show what would be done without doing it
  #[arg(long)]
  dry_run: bool,

  /// Don't commit or create a git tag
  #[arg(long)]
  no_tag: bool,

  /// Skip the confirmation prompt
  #[arg(short, long)]
  yes: bool,

  /// Output the dry-run plan in JSON format
  #[arg(long, requires = "dry_run")]
  json: bool,

  /// Path to the packaging manifest (overrides release.toml)
  #[arg(long)]
  manifest: Option<PathBuf>,

  /// Name of the version assignment in the manifest (overrides release.toml)
  #[arg(long)]
  key: Option<String>,
}

fn get_styles() -> clap::builder::Styles {
  clap::builder::Styles::styled()
    .usage(
      anstyle::Style::new()
        .bold()
        .underline()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Yellow))),
    )
    .header(
      anstyle::Style::new()
        .bold()
        .underline()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Yellow))),
    )
    .literal(anstyle::Style::new().fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Green))))
    .invalid(
      anstyle::Style::new()
        .bold()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Red))),
    )
    .error(
      anstyle::Style::new()
        .bold()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Red))),
    )
    .valid(
      anstyle::Style::new()
        .bold()
        .underline()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Green))),
    )
    .placeholder(anstyle::Style::new().fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::White))))
}

fn main() {
  let cli = Cli::parse();

  let result = commands::run_release(commands::ReleaseOptions {
    version: cli.version,
    dry_run: cli.dry_run,
    no_tag: cli.no_tag,
    yes: cli.yes,
    json: cli.json,
    manifest: cli.manifest,
    key: cli.key,
  });

  if let Err(err) = result {
    handle_error(err);
  }
}

fn handle_error(err: RelError) -> ! {
  print_error(&err);
  std::process::exit(err.exit_code().as_i32());
}
