use reedline::{DefaultPrompt, DefaultPromptSegment, Reedline, Signal};
use std::io;

/// Line editor used by the wizard; `None` means the user cancelled (Ctrl-C / Ctrl-D).
pub struct Repl {
    line_editor: Reedline,
}

impl Repl {
    pub fn new() -> Self {
        Self {
            line_editor: Reedline::create(),
        }
    }

    pub fn ask(&mut self, label: &str) -> Result<Option<String>, io::Error> {
        let prompt = DefaultPrompt::new(
            DefaultPromptSegment::Basic(label.to_string()),
            DefaultPromptSegment::Empty,
        );
        match self.line_editor.read_line(&prompt) {
            Ok(Signal::Success(buffer)) => Ok(Some(buffer.trim().to_string())),
            Ok(Signal::CtrlD) | Ok(Signal::CtrlC) => Ok(None),
            Err(e) => Err(e),
        }
    }
}
