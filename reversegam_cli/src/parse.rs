//! 着手プロンプトに入力された1行の解釈。

use reversegam_core::engine::Square;
use thiserror::Error;

/// プロンプトで対局者が求めたこと。
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Command {
    /// ヒント表示の切り替え。
    Hints,
    /// 指定マスへの着手。
    Move(Square),
    /// 対局の中断。
    Quit,
    /// 推奨手の表示。
    Suggest,
}

/// 入力を解釈できなかった理由。
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum ParseError {
    /// 空行。
    #[error("empty input")]
    Empty,
    /// 「列・行」2桁の座標として読めない。
    #[error("invalid move '{0}': enter the column (1-8) then the row (1-8), e.g. 81 for the top-right corner")]
    InvalidCoordinateFormat(String),
}

/// 1行を解釈する。制御語は大文字小文字を区別しない。
pub fn parse_command(input: &str) -> Result<Command, ParseError> {
    let input = input.trim().to_lowercase();
    match input.as_str() {
        "" => Err(ParseError::Empty),
        "hints" => Ok(Command::Hints),
        "quit" => Ok(Command::Quit),
        "suggest" => Ok(Command::Suggest),
        other => parse_square(other).map(Command::Move),
    }
}

/// 1始まりの「列・行」2桁の座標を解釈する。
pub fn parse_square(input: &str) -> Result<Square, ParseError> {
    let invalid = || ParseError::InvalidCoordinateFormat(input.to_owned());

    let mut chars = input.chars();
    let (Some(col), Some(row), None) = (chars.next(), chars.next(), chars.next()) else {
        return Err(invalid());
    };

    match (one_to_eight(col), one_to_eight(row)) {
        (Some(col), Some(row)) => Square::from_col_row(col, row).ok_or_else(invalid),
        _ => Err(invalid()),
    }
}

/// '1'..='8' を 0..=7 に写す。
fn one_to_eight(ch: char) -> Option<u8> {
    let digit = ch.to_digit(10)?;
    if !(1..=8).contains(&digit) {
        return None;
    }
    u8::try_from(digit.saturating_sub(1)).ok()
}

#[cfg(test)]
mod tests {
    use super::{Command, ParseError, parse_command, parse_square};
    use reversegam_core::engine::Square;

    #[test]
    fn square_is_column_then_row() {
        let square = parse_square("35");
        assert_eq!(square.map(|value| (value.col(), value.row())), Ok((2, 4)));

        let corner = parse_square("81");
        assert_eq!(corner.clone().map(|value| (value.col(), value.row())), Ok((7, 0)));
        assert_eq!(corner.map(Square::is_corner), Ok(true));
    }

    #[test]
    fn digits_outside_one_to_eight_are_rejected() {
        assert!(parse_square("90").is_err());
        assert!(parse_square("09").is_err());
        assert!(parse_square("19").is_err());
    }

    #[test]
    fn only_two_characters_are_accepted() {
        assert!(parse_square("3").is_err());
        assert!(parse_square("355").is_err());
    }

    #[test]
    fn non_digit_reports_the_input() {
        assert_eq!(
            parse_square("c4"),
            Err(ParseError::InvalidCoordinateFormat("c4".to_owned()))
        );
    }

    #[test]
    fn control_words_ignore_case_and_spaces() {
        assert_eq!(parse_command("  Quit "), Ok(Command::Quit));
        assert_eq!(parse_command("HINTS"), Ok(Command::Hints));
        assert_eq!(parse_command("suggest"), Ok(Command::Suggest));
        assert_eq!(parse_command("   "), Err(ParseError::Empty));
    }

    #[test]
    fn coordinates_become_moves() {
        assert_eq!(
            parse_command(" 43 ").ok(),
            Square::from_col_row(3, 2).map(Command::Move)
        );
    }
}
