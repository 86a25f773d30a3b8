use crate::board::{ShareMode, Square};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliCommand {
    New,
    Mode(ShareMode),
    Board,
    Moves(Option<Square>),
    Transporter,
    Apex,
    Checks,
    Tal,
    Mates(Square),
    Info,
    Log,
    Help,
    Move(String),
    Quit,
    Invalid(String),
}

/// Parse one input line. Blank lines yield `None`; anything that is not a
/// known command is handed on as move text.
pub fn parse_cli_command(line: &str) -> Option<CliCommand> {
    let trimmed = line.trim();
    let parts: Vec<&str> = trimmed.split_whitespace().collect();
    let (&head, args) = parts.split_first()?;

    let square_arg = |usage: &str| -> Result<Square, CliCommand> {
        args.first()
            .ok_or_else(|| CliCommand::Invalid(format!("usage: {usage}")))?
            .parse::<Square>()
            .map_err(|e| CliCommand::Invalid(e.to_string()))
    };

    let cmd = match head.to_ascii_lowercase().as_str() {
        "new" => CliCommand::New,
        "mode" => match args.first().map(|m| m.parse::<ShareMode>()) {
            Some(Ok(mode)) => CliCommand::Mode(mode),
            Some(Err(e)) => CliCommand::Invalid(e),
            None => CliCommand::Invalid("usage: mode linear|quantum".to_string()),
        },
        "board" => CliCommand::Board,
        "moves" => {
            if args.is_empty() {
                CliCommand::Moves(None)
            } else {
                match square_arg("moves [square]") {
                    Ok(sq) => CliCommand::Moves(Some(sq)),
                    Err(invalid) => invalid,
                }
            }
        }
        "transporter" => CliCommand::Transporter,
        "apex" => CliCommand::Apex,
        "checks" => CliCommand::Checks,
        "tal" => CliCommand::Tal,
        "mates" => match square_arg("mates <square>") {
            Ok(sq) => CliCommand::Mates(sq),
            Err(invalid) => invalid,
        },
        "info" => CliCommand::Info,
        "log" => CliCommand::Log,
        "help" => CliCommand::Help,
        "move" => match args {
            [] => CliCommand::Invalid("usage: move <notation>".to_string()),
            _ => CliCommand::Move(args.join("")),
        },
        "quit" | "exit" => CliCommand::Quit,
        _ => CliCommand::Move(parts.concat()),
    };

    Some(cmd)
}
