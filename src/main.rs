mod cli;
mod compare;
mod error;
mod reader;
mod syntax;
mod value;

use std::{path::Path, process};

use clap::Parser;
use cli::{Cli, Command, OutputFormat};
use error::PResult;

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Command::Compare { file, format } => compare_file(&file, format),
        Command::Check { file } => check_file(&file),
    };

    if let Err(why) = result {
        eprintln!("{why}");
        process::exit(1);
    }
}

fn compare_file(path: &Path, format: OutputFormat) -> PResult<()> {
    for pair in reader::read_pairs(path)? {
        println!("{}", format.render(&pair?));
    }
    Ok(())
}

fn check_file(path: &Path) -> PResult<()> {
    let mut count = 0;
    for pair in reader::read_pairs(path)? {
        pair?;
        count += 1;
    }

    log::info!("{} parsed without errors", path.display());
    println!("{count} pairs");
    Ok(())
}
