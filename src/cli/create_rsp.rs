//! Interactive response file generation

use anyhow::Result;
use std::io::{self, BufRead, Write};
use std::path::Path;
use tracing::{debug, warn};

use crate::domain::{validate_languages, BundleError, Language, RESPONSE_FILE_NAME};
use crate::response::ResponseFile;
use crate::utils::parse_yes;

pub fn run() -> Result<()> {
    let response = PromptSession::new(io::stdin().lock(), io::stdout().lock()).collect()?;

    let path = Path::new(RESPONSE_FILE_NAME);
    if path.exists() {
        warn!(path = %path.display(), "overwriting response file");
        println!("Warning: The response file already exists. It will be overwritten.");
    }
    response.write_to(path)?;

    println!("Response file created: {}", RESPONSE_FILE_NAME);
    println!("Run it with: files-bundler bundle @{}", RESPONSE_FILE_NAME);
    Ok(())
}

/// Line-oriented question/answer loop over any reader and writer.
pub struct PromptSession<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> PromptSession<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Ask every question in order and gather the answers.
    ///
    /// The language question repeats until a valid list is entered.
    pub fn collect(&mut self) -> Result<ResponseFile, BundleError> {
        let language = self.ask_language()?;
        let output = self.ask("Enter output file path:")?;
        let note = parse_yes(&self.ask("Add source comment? (yes/no):")?);
        let sort = self.ask("Sort files by name or type? (abc/type):")?.to_lowercase();
        let remove_empty_lines = parse_yes(&self.ask("Remove empty lines? (yes/no):")?);
        let author = self.ask("Enter author's name (optional):")?;

        Ok(ResponseFile { language, output, note, sort, remove_empty_lines, author })
    }

    fn ask_language(&mut self) -> Result<String, BundleError> {
        loop {
            self.say("Enter language (comma separated or 'all'):")?;
            for language in Language::all() {
                self.say(language.identifier())?;
            }
            let answer = self.read_answer()?;
            match validate_languages(&answer) {
                Ok(selection) => {
                    debug!(languages = %selection, "language selection accepted");
                    return Ok(answer);
                }
                Err(err) => {
                    debug!(error = %err, "language selection rejected");
                    self.say(&format!("Error: {err}"))?;
                }
            }
        }
    }

    fn ask(&mut self, question: &str) -> Result<String, BundleError> {
        self.say(question)?;
        self.read_answer()
    }

    fn say(&mut self, line: &str) -> Result<(), BundleError> {
        writeln!(self.output, "{line}").and_then(|_| self.output.flush()).map_err(BundleError::Prompt)
    }

    /// Next input line without its terminator. End of input aborts the session.
    fn read_answer(&mut self) -> Result<String, BundleError> {
        let mut line = String::new();
        let read = self.input.read_line(&mut line).map_err(BundleError::Prompt)?;
        if read == 0 {
            return Err(BundleError::PromptAborted);
        }
        Ok(line.trim().to_string())
    }
}
