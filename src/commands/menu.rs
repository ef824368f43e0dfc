use std::io::{BufRead, Write};
use crate::error::InventoryError;

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Scope {
    AllEnvironments,
    SelectEnvironments,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum OutputTarget {
    ConsoleMediaWiki,
    FileMediaWiki,
    FileCsv,
    FileJson,
    FileYaml,
}

/// An operator choice; `Quit` ends the program without output.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Selection<T> {
    Chosen(T),
    Quit,
}

pub(crate) const SCOPE_CHOICES: [&str; 3] = ["All_Environments", "Select_Environments", "Quit"];
pub(crate) const OUTPUT_CHOICES: [&str; 6] = [
    "Console_MediaWiki",
    "File_MediaWiki",
    "File_CSV",
    "File_JSON",
    "File_YAML",
    "Quit",
];

impl Scope {
    pub(crate) fn from_flag(value: &str) -> Result<Self, InventoryError> {
        match value {
            "all" => Ok(Scope::AllEnvironments),
            "select" => Ok(Scope::SelectEnvironments),
            other => Err(InventoryError::UnknownSelection(format!("Environment Action ({})", other))),
        }
    }

    fn from_choice(index: usize) -> Selection<Self> {
        match index {
            0 => Selection::Chosen(Scope::AllEnvironments),
            1 => Selection::Chosen(Scope::SelectEnvironments),
            _ => Selection::Quit,
        }
    }
}

impl OutputTarget {
    pub(crate) fn from_flag(value: &str) -> Result<Self, InventoryError> {
        match value {
            "console-mediawiki" => Ok(OutputTarget::ConsoleMediaWiki),
            "file-mediawiki" => Ok(OutputTarget::FileMediaWiki),
            "file-csv" => Ok(OutputTarget::FileCsv),
            "file-json" => Ok(OutputTarget::FileJson),
            "file-yaml" => Ok(OutputTarget::FileYaml),
            other => Err(InventoryError::UnknownSelection(format!("Output Action ({})", other))),
        }
    }

    fn from_choice(index: usize) -> Selection<Self> {
        match index {
            0 => Selection::Chosen(OutputTarget::ConsoleMediaWiki),
            1 => Selection::Chosen(OutputTarget::FileMediaWiki),
            2 => Selection::Chosen(OutputTarget::FileCsv),
            3 => Selection::Chosen(OutputTarget::FileJson),
            4 => Selection::Chosen(OutputTarget::FileYaml),
            _ => Selection::Quit,
        }
    }

    /// File extension, `None` for console output.
    pub(crate) fn extension(&self) -> Option<&'static str> {
        match self {
            OutputTarget::ConsoleMediaWiki => None,
            OutputTarget::FileMediaWiki => Some("txt"),
            OutputTarget::FileCsv => Some("csv"),
            OutputTarget::FileJson => Some("json"),
            OutputTarget::FileYaml => Some("yml"),
        }
    }

    pub(crate) fn title(&self) -> &'static str {
        match self {
            OutputTarget::ConsoleMediaWiki => "OUTPUTING MEDIAWIKI CONSOLE",
            OutputTarget::FileMediaWiki => "OUTPUTING MEDIAWIKI FILE",
            OutputTarget::FileCsv => "OUTPUTING CSV FILE",
            OutputTarget::FileJson => "OUTPUTING JSON FILE",
            OutputTarget::FileYaml => "OUTPUTING YAML FILE",
        }
    }
}

pub(crate) fn prompt_scope<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<Selection<Scope>, InventoryError> {
    let index = prompt_choice(input, output, &SCOPE_CHOICES)?;
    Ok(index.map_or(Selection::Quit, Scope::from_choice))
}

pub(crate) fn prompt_output<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<Selection<OutputTarget>, InventoryError> {
    let index = prompt_choice(input, output, &OUTPUT_CHOICES)?;
    Ok(index.map_or(Selection::Quit, OutputTarget::from_choice))
}

/// Numbered menu; accepts the number or the (case-insensitive) name. End of input means quit.
pub(crate) fn prompt_choice<R: BufRead, W: Write>(input: &mut R, output: &mut W, choices: &[&str]) -> Result<Option<usize>, InventoryError> {
    for (index, choice) in choices.iter().enumerate() {
        writeln!(output, "{}. {}", index + 1, choice)?;
    }

    loop {
        write!(output, "> ")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        let answer = line.trim();
        if let Some(index) = match_choice(answer, choices) {
            writeln!(output, "{} Selected", choices[index].replace('_', " "))?;
            return Ok(Some(index));
        }

        writeln!(output, "You must choose one of [{}].", choices.join(", "))?;
    }
}

fn match_choice(answer: &str, choices: &[&str]) -> Option<usize> {
    if let Ok(number) = answer.parse::<usize>() {
        return (1..=choices.len()).contains(&number).then(|| number - 1);
    }

    choices.iter().position(|choice| choice.eq_ignore_ascii_case(answer))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_flags() {
        assert_eq!(Scope::from_flag("all").unwrap(), Scope::AllEnvironments);
        assert_eq!(Scope::from_flag("select").unwrap(), Scope::SelectEnvironments);
        assert!(matches!(Scope::from_flag("some"), Err(InventoryError::UnknownSelection(_))));
        assert_eq!(OutputTarget::from_flag("file-yaml").unwrap(), OutputTarget::FileYaml);
        assert!(OutputTarget::from_flag("file-xml").is_err());
    }

    #[test]
    fn test_extensions() {
        assert_eq!(OutputTarget::ConsoleMediaWiki.extension(), None);
        assert_eq!(OutputTarget::FileMediaWiki.extension(), Some("txt"));
        assert_eq!(OutputTarget::FileCsv.extension(), Some("csv"));
        assert_eq!(OutputTarget::FileJson.extension(), Some("json"));
        assert_eq!(OutputTarget::FileYaml.extension(), Some("yml"));
    }

    #[test]
    fn test_prompt_by_number() {
        let mut input = Cursor::new("2\n");
        let mut output = Vec::new();

        let selection = prompt_scope(&mut input, &mut output).unwrap();

        assert_eq!(selection, Selection::Chosen(Scope::SelectEnvironments));
        assert!(String::from_utf8(output).unwrap().contains("Select Environments Selected"));
    }

    #[test]
    fn test_prompt_by_name_after_invalid_answer() {
        let mut input = Cursor::new("9\nfile_csv\n");
        let mut output = Vec::new();

        let selection = prompt_output(&mut input, &mut output).unwrap();

        assert_eq!(selection, Selection::Chosen(OutputTarget::FileCsv));
        assert!(String::from_utf8(output).unwrap().contains("You must choose one of"));
    }

    #[test]
    fn test_prompt_quit() {
        let mut output = Vec::new();

        assert_eq!(prompt_scope(&mut Cursor::new("3\n"), &mut output).unwrap(), Selection::Quit);
        assert_eq!(prompt_output(&mut Cursor::new("quit\n"), &mut output).unwrap(), Selection::Quit);
        assert_eq!(prompt_output(&mut Cursor::new(""), &mut output).unwrap(), Selection::Quit);
    }
}
