//! Text command parsing for the `chesskers` binary

use anyhow::{anyhow, bail, Result};
use chesskers::game::Position;

/// One line of player input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Select(Position),
    Move(Position),
    Moves(Position),
    Deselect,
    Board,
    Status,
    History,
    Reset,
    Help,
    Quit,
}

pub const HELP: &str = "\
commands:
  select <sq>   select the piece on a square
  move <sq>     move the selected piece
  moves <sq>    list legal destinations of any piece
  deselect      cancel the current selection
  board         print the board
  status        team on move, phase, captures
  history       list moves played so far
  reset         restore the starting layout
  quit
squares are `row,col` (0-7) or algebraic (`a1` is row 7, col 0)";

fn square(arg: Option<&str>, command: &str) -> Result<Position> {
    let arg = arg.ok_or_else(|| anyhow!("`{command}` needs a square"))?;
    Position::parse(arg).ok_or_else(|| anyhow!("`{arg}` is not a square"))
}

/// Parse a command line; `Ok(None)` for blank lines and `#` comments
pub fn parse_command(line: &str) -> Result<Option<Command>> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }
    let mut words = line.split_whitespace();
    let name = words.next().unwrap_or_default().to_ascii_lowercase();
    let arg = words.next();
    if words.next().is_some() {
        bail!("too many arguments to `{name}`");
    }

    let command = match name.as_str() {
        "select" | "s" => Command::Select(square(arg, &name)?),
        "move" | "m" => Command::Move(square(arg, &name)?),
        "moves" => Command::Moves(square(arg, &name)?),
        "deselect" => Command::Deselect,
        "board" | "b" => Command::Board,
        "status" => Command::Status,
        "history" => Command::History,
        "reset" => Command::Reset,
        "help" | "?" => Command::Help,
        "quit" | "exit" | "q" => Command::Quit,
        other => bail!("unknown command `{other}` (try `help`)"),
    };
    Ok(Some(command))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_squares_in_both_notations() {
        assert_eq!(
            parse_command("select 2,0").unwrap(),
            Some(Command::Select(Position::new(2, 0)))
        );
        assert_eq!(
            parse_command("  move b5 ").unwrap(),
            Some(Command::Move(Position::new(3, 1)))
        );
    }

    #[test]
    fn test_blank_and_comment_lines_are_skipped() {
        assert_eq!(parse_command("").unwrap(), None);
        assert_eq!(parse_command("# opening").unwrap(), None);
    }

    #[test]
    fn test_bad_input_is_reported() {
        assert!(parse_command("select").is_err());
        assert!(parse_command("select z9").is_err());
        assert!(parse_command("fly 1,1").is_err());
        assert!(parse_command("board now").is_err());
    }
}
