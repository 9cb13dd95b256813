use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "rolodex")]
#[command(about = "A phone book for the command line", long_about = None)]
pub struct Cli {
    /// Path to the phone book file (loaded on start, written on save)
    #[arg(default_value = "phonebook.db")]
    pub path: PathBuf,
}
