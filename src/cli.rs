use clap::{ArgAction, Parser};
use std::path::PathBuf;

/// Split a novel into files of N chapters each.
///
/// Run without arguments for the interactive menu.
#[derive(Parser, Debug, Default)]
#[command(name = "novel_splitter", version)]
pub struct Cli {
    /// Files, glob patterns or directories to split
    pub inputs: Vec<String>,

    /// Chapter heading regex; takes precedence over --preset
    #[arg(short, long)]
    pub pattern: Option<String>,

    /// Built-in or configured preset (see --list-presets)
    #[arg(long)]
    pub preset: Option<String>,

    /// Chapters per output file
    #[arg(short, long, value_parser = parse_group_size)]
    pub group_size: Option<usize>,

    /// Output directory (default: next to each input file)
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// Message and file name language: ko, en, zh-TW
    #[arg(long)]
    pub lang: Option<String>,

    /// Also write the text before the first chapter to <name>_preface
    #[arg(long)]
    pub keep_preface: bool,

    /// Report what would be written without touching the disk
    #[arg(long)]
    pub dry_run: bool,

    /// Print the run report as JSON on stdout; logs stay on stderr
    #[arg(long)]
    pub json: bool,

    /// List the available presets and exit
    #[arg(long)]
    pub list_presets: bool,

    /// Settings file (default: ./novel_splitter.toml and the user config dir)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// More log output on stderr (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

fn parse_group_size(s: &str) -> Result<usize, String> {
    match s.parse::<usize>() {
        Ok(0) => Err("must be at least 1".to_string()),
        Ok(n) => Ok(n),
        Err(err) => Err(err.to_string()),
    }
}

impl Cli {
    pub fn is_interactive(&self) -> bool {
        self.inputs.is_empty() && !self.list_presets
    }
}
