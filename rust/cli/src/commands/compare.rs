//! `compare`: does one trick-game play beat another?

use std::io::Write;

use tricktable_engine::pattern::{can_beat, evaluate_with_rules};

use super::resolve_rules;
use crate::error::CliError;
use crate::formatters::format_play;
use crate::validation::parse_card_args;

pub fn handle_compare_command(
    level: Option<u8>,
    plain_level_cards: bool,
    a: &str,
    b: &str,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let (level, rules) = resolve_rules(level, plain_level_cards)?;
    let play_a = evaluate_with_rules(&parse_card_args(&[a])?, level, rules);
    let play_b = evaluate_with_rules(&parse_card_args(&[b])?, level, rules);

    writeln!(out, "A: {}", format_play(&play_a))?;
    writeln!(out, "B: {}", format_play(&play_b))?;
    let verdict = if can_beat(&play_a, &play_b) {
        "A beats B"
    } else {
        "A does not beat B"
    };
    writeln!(out, "Result: {}", verdict)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn verdict(a: &str, b: &str) -> String {
        let mut out = Vec::new();
        handle_compare_command(Some(15), true, a, b, &mut out).unwrap();
        String::from_utf8(out)
            .unwrap()
            .lines()
            .last()
            .unwrap()
            .to_string()
    }

    #[test]
    fn jokers_beat_four_aces_but_not_five_kings() {
        assert_eq!(verdict("BJ RJ", "As Ah Ad Ac"), "Result: A beats B");
        assert_eq!(verdict("BJ RJ", "Ks Kh Kd Kc Ks"), "Result: A does not beat B");
    }

    #[test]
    fn different_shapes_do_not_beat_each_other() {
        assert_eq!(verdict("3s 4d 5c 6h 7s", "As Ad"), "Result: A does not beat B");
        assert_eq!(verdict("As Ad", "3s 4d 5c 6h 7s"), "Result: A does not beat B");
    }
}
