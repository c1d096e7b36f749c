use crate::error::DeskError;
use skydesk_core::TicketId;

/// The four free-text fields of the booking form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Flight,
    From,
    To,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Set(Field, String),
    ShowForm,
    Book,
    Cancel,
    Select(TicketId),
    Delete,
    Print,
    List,
    Ledger,
    Export,
    Help,
    Quit,
}

pub const HELP: &str = "\
Commands:
  name <text>      set passenger name
  flight <text>    set flight
  from <text>      set origin
  to <text>        set destination
  form             show the form
  book             book the flight in the form
  cancel           cancel the booking in the form
  select <id>      select a ticket by id
  delete           delete the selected ticket
  print            print the selected ticket
  list             show all tickets
  passenger        show the held passenger's bookings
  export           dump the table as JSON
  help             this message
  quit             leave";

impl Command {
    /// Parse one input line. Blank lines yield `None`.
    ///
    /// Field values are everything after the first whitespace following
    /// the keyword, kept exactly as typed.
    pub fn parse(line: &str) -> Result<Option<Command>, DeskError> {
        let line = line.trim_end_matches(['\r', '\n']).trim_start();
        if line.trim().is_empty() {
            return Ok(None);
        }

        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest),
            None => (line, ""),
        };

        let command = match word.to_ascii_lowercase().as_str() {
            "name" => Command::Set(Field::Name, rest.to_string()),
            "flight" => Command::Set(Field::Flight, rest.to_string()),
            "from" => Command::Set(Field::From, rest.to_string()),
            "to" => Command::Set(Field::To, rest.to_string()),
            "form" => Command::ShowForm,
            "book" => Command::Book,
            "cancel" => Command::Cancel,
            "select" => {
                let id = rest.parse::<TicketId>()
                    .map_err(|_| DeskError::InvalidTicketId(rest.trim().to_string()))?;
                Command::Select(id)
            }
            "delete" => Command::Delete,
            "print" => Command::Print,
            "list" => Command::List,
            "passenger" | "ledger" => Command::Ledger,
            "export" => Command::Export,
            "help" | "?" => Command::Help,
            "quit" | "exit" => Command::Quit,
            _ => return Err(DeskError::UnknownCommand(word.to_string())),
        };

        Ok(Some(command))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_keeps_text_as_typed() {
        let cmd = Command::parse("name Mary Ann Smith ").unwrap();
        assert_eq!(cmd, Some(Command::Set(Field::Name, "Mary Ann Smith ".to_string())));

        let cmd = Command::parse("  from  JFK\r").unwrap();
        assert_eq!(cmd, Some(Command::Set(Field::From, " JFK".to_string())));
    }

    #[test]
    fn test_bare_field_clears_it() {
        assert_eq!(
            Command::parse("flight").unwrap(),
            Some(Command::Set(Field::Flight, String::new()))
        );
    }

    #[test]
    fn test_blank_line() {
        assert_eq!(Command::parse("   ").unwrap(), None);
    }

    #[test]
    fn test_select_parses_id() {
        assert_eq!(Command::parse("select 4").unwrap(), Some(Command::Select(TicketId(4))));
        assert!(matches!(Command::parse("select x"), Err(DeskError::InvalidTicketId(_))));
        assert!(matches!(Command::parse("select"), Err(DeskError::InvalidTicketId(_))));
    }

    #[test]
    fn test_unknown_command() {
        assert!(matches!(Command::parse("fly away"), Err(DeskError::UnknownCommand(w)) if w == "fly"));
    }

    #[test]
    fn test_keywords_case_insensitive() {
        assert_eq!(Command::parse("BOOK").unwrap(), Some(Command::Book));
        assert_eq!(Command::parse("exit").unwrap(), Some(Command::Quit));
        assert_eq!(Command::parse("Ledger").unwrap(), Some(Command::Ledger));
        assert_eq!(Command::parse("passenger").unwrap(), Some(Command::Ledger));
    }
}
