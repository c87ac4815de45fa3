use anyhow::Result;
use colored::Colorize;
use rust_i18n::t;
use std::path::PathBuf;

use super::prompt::Repl;
use super::theme;
use crate::splitter::{GROUP_SIZE_CHOICES, PresetCatalog, RegexRule};

/// What the user picked in the interactive menu.
#[derive(Debug, Clone)]
pub struct WizardChoice {
    pub input: PathBuf,
    pub pattern: String,
    pub group_size: usize,
}

#[derive(Debug, PartialEq, Eq)]
enum MenuError {
    NotANumber,
    OutOfRange,
}

/// Empty input picks the first entry; otherwise a 1-based index up to `max`.
fn parse_menu_choice(input: &str, max: usize) -> Result<usize, MenuError> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(1);
    }
    let n: usize = input.parse().map_err(|_| MenuError::NotANumber)?;
    if (1..=max).contains(&n) { Ok(n) } else { Err(MenuError::OutOfRange) }
}

fn report_menu_error(err: MenuError) {
    match err {
        MenuError::NotANumber => println!("{}", t!("not_a_number").red()),
        MenuError::OutOfRange => println!("{}", t!("invalid_choice").red()),
    }
}

/// Runs the three-step menu. `Ok(None)` means the user cancelled.
pub fn run_wizard(catalog: &PresetCatalog) -> Result<Option<WizardChoice>> {
    let mut repl = Repl::new();
    theme::print_banner(&t!("banner_title"));

    let Some(input) = ask_input_file(&mut repl)? else {
        println!("{}", t!("file_not_selected").yellow());
        return Ok(None);
    };
    println!("{}", t!("file_selected", path = input.display()).green());
    println!();

    let Some(pattern) = ask_pattern(&mut repl, catalog)? else {
        return Ok(None);
    };
    println!("{}", t!("pattern_selected", pattern = pattern.as_str()).green());
    println!();

    let Some(group_size) = ask_group_size(&mut repl)? else {
        return Ok(None);
    };
    println!("{}", t!("group_selected", n = group_size).green());
    println!();

    Ok(Some(WizardChoice { input, pattern, group_size }))
}

fn ask_input_file(repl: &mut Repl) -> Result<Option<PathBuf>> {
    println!("{}", t!("step_file").cyan().bold());
    loop {
        let Some(answer) = repl.ask(&t!("file_prompt"))? else {
            return Ok(None);
        };
        if answer.is_empty() {
            return Ok(None);
        }
        // drag-and-drop into a terminal usually quotes the path
        let path = PathBuf::from(answer.trim_matches(|c| c == '"' || c == '\''));
        if path.is_file() {
            return Ok(Some(path));
        }
        println!("{}", t!("file_not_found", path = path.display()).red());
    }
}

fn ask_pattern(repl: &mut Repl, catalog: &PresetCatalog) -> Result<Option<String>> {
    println!("{}", t!("step_pattern").cyan().bold());
    println!("{}", "-".repeat(40));
    for (i, preset) in catalog.iter().enumerate() {
        println!("  {}. {}", i + 1, theme::describe_preset(preset));
    }
    let custom_index = catalog.len() + 1;
    println!("  {}. {}", custom_index, t!("preset_custom_option"));
    println!("{}", "-".repeat(40));

    loop {
        let Some(answer) = repl.ask(&t!("choose_range", max = custom_index))? else {
            return Ok(None);
        };
        let choice = match parse_menu_choice(&answer, custom_index) {
            Ok(choice) => choice,
            Err(err) => {
                report_menu_error(err);
                continue;
            }
        };

        if choice < custom_index {
            if let Some(preset) = catalog.iter().nth(choice - 1) {
                return Ok(Some(preset.pattern.clone()));
            }
            continue;
        }

        let Some(pattern) = repl.ask(&t!("pattern_input"))? else {
            return Ok(None);
        };
        if pattern.is_empty() {
            println!("{}", t!("pattern_empty").red());
            continue;
        }
        match RegexRule::new(&pattern) {
            Ok(_) => return Ok(Some(pattern)),
            Err(err) => println!("{}", t!("pattern_invalid", error = err).red()),
        }
    }
}

fn ask_group_size(repl: &mut Repl) -> Result<Option<usize>> {
    println!("{}", t!("step_group").cyan().bold());
    println!("{}", "-".repeat(40));
    for (i, n) in GROUP_SIZE_CHOICES.iter().enumerate() {
        println!("  {}. {}", i + 1, t!("group_option", n = n));
    }
    let custom_index = GROUP_SIZE_CHOICES.len() + 1;
    println!("  {}. {}", custom_index, t!("group_custom_option"));
    println!("{}", "-".repeat(40));

    loop {
        let Some(answer) = repl.ask(&t!("choose_range", max = custom_index))? else {
            return Ok(None);
        };
        let choice = match parse_menu_choice(&answer, custom_index) {
            Ok(choice) => choice,
            Err(err) => {
                report_menu_error(err);
                continue;
            }
        };

        if choice < custom_index {
            return Ok(Some(GROUP_SIZE_CHOICES[choice - 1]));
        }

        let Some(answer) = repl.ask(&t!("group_input"))? else {
            return Ok(None);
        };
        match answer.parse::<usize>() {
            Ok(n) if n >= 1 => return Ok(Some(n)),
            Ok(_) => println!("{}", t!("group_too_small").red()),
            Err(_) => report_menu_error(MenuError::NotANumber),
        }
    }
}

/// Keeps the console window open when the tool was started by double-click.
pub fn wait_for_enter() {
    println!("\n{}", t!("press_enter"));
    let mut buf = String::new();
    let _ = std::io::stdin().read_line(&mut buf);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_answer_picks_first() {
        assert_eq!(parse_menu_choice("", 7), Ok(1));
        assert_eq!(parse_menu_choice("  ", 7), Ok(1));
    }

    #[test]
    fn test_in_range() {
        assert_eq!(parse_menu_choice("7", 7), Ok(7));
        assert_eq!(parse_menu_choice(" 3 ", 7), Ok(3));
    }

    #[test]
    fn test_out_of_range_and_garbage() {
        assert_eq!(parse_menu_choice("0", 7), Err(MenuError::OutOfRange));
        assert_eq!(parse_menu_choice("8", 7), Err(MenuError::OutOfRange));
        assert_eq!(parse_menu_choice("five", 7), Err(MenuError::NotANumber));
        assert_eq!(parse_menu_choice("-1", 7), Err(MenuError::NotANumber));
    }
}
