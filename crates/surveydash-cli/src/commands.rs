use surveydash_core::AnalysisKind;

/// One line of interactive input.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Select a household, or clear the selection with `contact none`
    Contact(Option<String>),
    /// Select an analysis kind; unrecognized kinds clear the selection
    Analysis(Option<AnalysisKind>),
    /// Select a verification column, or clear with `verify none`
    Verify(Option<String>),
    /// List the contact picker options
    Contacts,
    /// List the status columns available to `verify`
    Columns,
    /// Re-render every output from the current selections
    Show,
    Help,
    Quit,
    Empty,
    Unknown(String),
}

pub fn parse_command(line: &str) -> Command {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Command::Empty;
    }
    let (head, rest) = trimmed
        .split_once(char::is_whitespace)
        .map(|(head, rest)| (head, rest.trim()))
        .unwrap_or((trimmed, ""));
    match head {
        "contact" => Command::Contact(optional(rest)),
        "analysis" => Command::Analysis(optional(rest).and_then(|v| AnalysisKind::parse(&v))),
        "verify" => Command::Verify(optional(rest)),
        "contacts" => Command::Contacts,
        "columns" => Command::Columns,
        "show" => Command::Show,
        "help" => Command::Help,
        "quit" | "exit" => Command::Quit,
        other => Command::Unknown(other.to_string()),
    }
}

/// An empty argument or the literal "none" clears the selection.
fn optional(raw: &str) -> Option<String> {
    match raw {
        "" | "none" => None,
        value => Some(value.to_string()),
    }
}

pub const HELP_TEXT: &str = "\
Commands:
  contact <mobile>    select a household (contact none to clear)
  analysis <kind>     gender | age | livestock | land (analysis none to clear)
  verify <column>     pick a status column (verify none to clear)
  contacts            list contact options
  columns             list status columns
  show                re-render every output
  help                this text
  quit                exit";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_contact() {
        assert_eq!(
            parse_command("contact 111"),
            Command::Contact(Some("111".to_string()))
        );
        assert_eq!(parse_command("contact none"), Command::Contact(None));
        assert_eq!(parse_command("contact"), Command::Contact(None));
    }

    #[test]
    fn test_parse_analysis() {
        assert_eq!(
            parse_command("analysis gender"),
            Command::Analysis(Some(AnalysisKind::Gender))
        );
        // Unrecognized kinds read as no selection, the defined default
        assert_eq!(parse_command("analysis income"), Command::Analysis(None));
        assert_eq!(parse_command("analysis"), Command::Analysis(None));
    }

    #[test]
    fn test_parse_verify_keeps_spaces() {
        assert_eq!(
            parse_command("verify ID Status"),
            Command::Verify(Some("ID Status".to_string()))
        );
    }

    #[test]
    fn test_parse_misc() {
        assert_eq!(parse_command(""), Command::Empty);
        assert_eq!(parse_command("  "), Command::Empty);
        assert_eq!(parse_command("quit"), Command::Quit);
        assert_eq!(parse_command("exit"), Command::Quit);
        assert_eq!(
            parse_command("frobnicate"),
            Command::Unknown("frobnicate".to_string())
        );
    }
}
