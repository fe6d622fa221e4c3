#![deny(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

mod args;
mod export;
mod render;

use std::{
  fs::{self, File},
  io::Write,
  path::Path,
};

use args::Args;
use clap::Parser;
use log::{info, LevelFilter};
use util::{bitcode, error::XWordResult, grid::Grid, time::time_fn};
use xword_gen::{SolveOptions, WordBank, XWordSolver, XWordStructure};

fn init_logging(level: LevelFilter) -> XWordResult {
  fern::Dispatch::new()
    .format(|out, message, record| {
      out.finish(format_args!(
        "[{} {}] {}",
        record.level(),
        record.target(),
        message
      ))
    })
    .level(level)
    .chain(std::io::stderr())
    .apply()?;
  Ok(())
}

fn save_grid(path: &Path, letters: &Grid<Option<char>>) -> XWordResult {
  let result = bitcode::encode(letters);
  let mut file = File::create(path)?;
  file.write_all(&result)?;
  info!("Saved letter grid to {}", path.display());
  Ok(())
}

fn main() -> XWordResult {
  let args = Args::parse();
  init_logging(args.log_level.into())?;

  let structure = XWordStructure::from_layout(&fs::read_to_string(&args.structure)?)?;
  let words = WordBank::parse_word_list(&fs::read_to_string(&args.words)?);
  info!(
    "Loaded {} slots and {} words",
    structure.slots().len(),
    words.len()
  );

  let options = SolveOptions { inference: args.inference.into() };
  let mut solver = XWordSolver::with_options(&structure, &words, options);
  let (time, solution) = time_fn(|| solver.solve());
  info!("Took {}s", time.as_secs_f32());

  let Some(assignment) = solution? else {
    println!("No solution.");
    return Ok(());
  };

  let letters = assignment.letter_grid(&structure)?;
  print!("{}", render::render(&structure, &letters));
  if let Some(output) = &args.output {
    let font = export::load_font(&args.font)?;
    export::save_image(output, &structure, &letters, font.as_ref())?;
  }
  if let Some(path) = &args.save_grid {
    save_grid(path, &letters)?;
  }

  Ok(())
}
