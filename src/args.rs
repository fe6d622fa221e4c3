use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use log::LevelFilter;
use xword_gen::Inference;

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum InferenceMode {
  None,
  ArcConsistency,
}

impl From<InferenceMode> for Inference {
  fn from(mode: InferenceMode) -> Self {
    match mode {
      InferenceMode::None => Inference::Disabled,
      InferenceMode::ArcConsistency => Inference::ArcConsistency,
    }
  }
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogLevel {
  Off,
  Error,
  Warn,
  Info,
  Debug,
  Trace,
}

impl From<LogLevel> for LevelFilter {
  fn from(level: LogLevel) -> Self {
    match level {
      LogLevel::Off => LevelFilter::Off,
      LogLevel::Error => LevelFilter::Error,
      LogLevel::Warn => LevelFilter::Warn,
      LogLevel::Info => LevelFilter::Info,
      LogLevel::Debug => LevelFilter::Debug,
      LogLevel::Trace => LevelFilter::Trace,
    }
  }
}

#[derive(Parser, Debug)]
#[command(version, about = "Fill a crossword grid from a word list", long_about = None)]
pub struct Args {
  /// Grid structure, one line per row: `_` is a fillable cell, anything else
  /// is blocked.
  pub structure: PathBuf,

  /// Word list, one word per line.
  pub words: PathBuf,

  /// Where to save an image of the solved grid, as a PNG.
  pub output: Option<PathBuf>,

  /// Font the letters in the saved image are drawn with.
  #[arg(long, default_value = "assets/fonts/OpenSans-Regular.ttf")]
  pub font: PathBuf,

  /// Where to save the solved letter grid, bitcode encoded.
  #[arg(long)]
  pub save_grid: Option<PathBuf>,

  #[arg(long, default_value = "none")]
  pub inference: InferenceMode,

  #[arg(long, default_value = "warn")]
  pub log_level: LogLevel,
}
