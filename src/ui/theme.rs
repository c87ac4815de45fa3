use colored::Colorize;
use crossterm::style::{Attribute, Color};
use rust_i18n::t;
use termimad::MadSkin;

use crate::output::{DocumentReport, DocumentStatus, RunReport};
use crate::splitter::Preset;

pub const INK_BLUE: Color = Color::Rgb { r: 70, g: 110, b: 180 }; // #466EB4
pub const PAPER: Color = Color::Rgb { r: 236, g: 228, b: 210 }; // #ECE4D2
pub const SEAL_RED: Color = Color::Rgb { r: 190, g: 60, b: 50 }; // #BE3C32

const RULE_WIDTH: usize = 50;

pub fn create_skin() -> MadSkin {
    let mut skin = MadSkin::default();

    skin.bold.set_fg(INK_BLUE);
    skin.headers[0].set_fg(INK_BLUE);
    skin.headers[0].add_attr(Attribute::Bold);

    skin.table.set_fg(PAPER);
    skin.inline_code.set_fg(SEAL_RED);

    skin
}

pub fn rule() -> String {
    "=".repeat(RULE_WIDTH)
}

pub fn print_banner(title: &str) {
    println!("{}", rule().blue());
    println!("    {}", title.bold());
    println!("{}", rule().blue());
    println!();
}

/// Per-document progress lines in the same order the work happened.
pub fn print_document(doc: &DocumentReport, group_size: usize, dry_run: bool) {
    println!("{}", t!("reading_file", path = doc.input.display()));
    println!("{}", t!("splitting_with", pattern = doc.pattern.as_str()));

    match doc.status {
        DocumentStatus::InputUnavailable => {
            let error = doc.error.as_deref().unwrap_or_default();
            eprintln!("{}", t!("input_unavailable", error = error).red());
            return;
        }
        DocumentStatus::NoBoundaries => {
            eprintln!("{}", t!("no_boundaries", pattern = doc.pattern.as_str()).yellow());
            return;
        }
        DocumentStatus::Ok | DocumentStatus::PartialWrite => {}
    }

    println!("{}", t!("chapters_found", count = doc.segments));
    println!("{}", t!("groups_made", size = group_size, count = doc.batches));
    if let Some(path) = &doc.preface {
        println!("{} {}", "✓".green(), t!("preface_saved", path = path.display()));
    }
    if dry_run {
        for path in &doc.planned {
            println!("{} {}", "·".dimmed(), t!("file_planned", path = path.display()));
        }
    }
    for path in &doc.written {
        println!("{} {}", "✓".green(), t!("file_created", path = path.display()));
    }
    for failed in &doc.failed {
        eprintln!(
            "{} {}",
            "✗".red(),
            t!("file_failed", path = failed.path.display(), error = failed.error.as_str())
        );
    }
}

pub fn print_summary(report: &RunReport, skin: &MadSkin) {
    println!();
    println!("{}", rule().blue());
    let done = if report.dry_run {
        t!("dry_run_done", count = report.files_planned())
    } else {
        t!("done", count = report.files_written())
    };
    if report.success() {
        println!("{}", done.green().bold());
    } else {
        println!("{}", done.yellow().bold());
    }

    if let [only] = report.documents.as_slice() {
        println!("{}", t!("saved_to", path = only.destination.display()));
    } else if !report.documents.is_empty() {
        let headers = [
            t!("table_file"),
            t!("table_chapters"),
            t!("table_groups"),
            t!("table_written"),
            t!("table_destination"),
        ];
        let headers = headers.each_ref().map(|h| &**h);
        skin.print_text(&report.to_markdown(headers));
    }
    println!("{}", rule().blue());
}

/// Localized description for built-ins, `name (pattern)` for configured presets.
pub fn describe_preset(preset: &Preset) -> String {
    if preset.example.is_none() {
        return format!("{} ({})", preset.name, preset.pattern);
    }
    let text = match preset.name.as_str() {
        "korean" => t!("preset_korean"),
        "korean_hanja" => t!("preset_korean_hanja"),
        "chapter_en" => t!("preset_chapter_en"),
        "chapter_num" => t!("preset_chapter_num"),
        "episode" => t!("preset_episode"),
        "part" => t!("preset_part"),
        _ => return format!("{} ({})", preset.name, preset.pattern),
    };
    text.to_string()
}

pub fn print_presets(presets: &[&Preset], default: &str) {
    println!("{}", t!("presets_title").bold());
    for preset in presets {
        let marker = if preset.name == default { "*" } else { " " };
        println!(
            "{} {:<14} {:<22} {}",
            marker,
            preset.name.as_str().cyan(),
            preset.pattern,
            describe_preset(preset).dimmed()
        );
    }
}
