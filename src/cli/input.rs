//! Interactive question prompt using rustyline
//!
//! Line editing with in-session history. `/exit`, `/quit` and Ctrl-D end the
//! session; Ctrl-C discards the current line.

use anyhow::Result;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

/// One line read from the prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Question(String),
    Empty,
    Exit,
}

/// Input handler wrapping the readline editor
pub struct InputHandler {
    editor: DefaultEditor,
    prompt: String,
}

impl InputHandler {
    pub fn new() -> Result<Self> {
        Ok(InputHandler {
            editor: DefaultEditor::new()?,
            prompt: "question> ".to_string(),
        })
    }

    /// Read the next line
    pub fn read(&mut self) -> Result<Input> {
        match self.editor.readline(&self.prompt) {
            Ok(line) => {
                let input = classify(&line);
                if let Input::Question(q) = &input {
                    let _ = self.editor.add_history_entry(q.as_str());
                }
                Ok(input)
            }
            Err(ReadlineError::Interrupted) => Ok(Input::Empty),
            Err(ReadlineError::Eof) => Ok(Input::Exit),
            Err(err) => Err(anyhow::anyhow!("Readline error: {}", err)),
        }
    }
}

/// Classify a raw line
pub fn classify(line: &str) -> Input {
    let trimmed = line.trim();
    match trimmed {
        "" => Input::Empty,
        "/exit" | "/quit" => Input::Exit,
        _ => Input::Question(trimmed.to_string()),
    }
}
