// Menu walker: presents one tier of the catalog at a time, reads a line
// of input, validates it, and descends into the chosen node's children.
// The functions are small and synchronous to make the flow easy to follow.

use crate::currency::format_currency;
use crate::model::{Catalog, CatalogNode};
use anyhow::Result;
use dialoguer::Input;

/// The one blocking suspension point of the program: read a single line
/// of operator input. A fresh reader is acquired and released per call,
/// so nothing is held open between prompts. Tests substitute a scripted
/// implementation.
pub trait LinePrompt {
    fn read_line(&mut self, prompt: &str) -> Result<String>;
}

/// Terminal-backed prompt using `dialoguer::Input`. Empty input is
/// allowed because an empty line means quit.
pub struct TermPrompt;

impl LinePrompt for TermPrompt {
    fn read_line(&mut self, prompt: &str) -> Result<String> {
        let line: String = Input::new()
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()?;
        Ok(line)
    }
}

/// Outcome of validating one line of input against the current tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// A valid choice, as a zero-based index into the tier.
    Pick(usize),
    /// Empty input or `q`/`Q`: stop walking and keep what was chosen.
    Quit,
    /// Anything else: re-display the same tier.
    Invalid,
}

/// Validate raw input: quit signals first, then the numeric test, then
/// the integer range check against `[1, tier_len]`. Fractional, zero,
/// negative and out-of-range numbers are all invalid.
pub fn parse_selection(raw: &str, tier_len: usize) -> Selection {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("q") {
        return Selection::Quit;
    }
    let number: f64 = match trimmed.parse() {
        Ok(n) => n,
        Err(_) => return Selection::Invalid,
    };
    if number.fract() != 0.0 || number < 1.0 || number > tier_len as f64 {
        return Selection::Invalid;
    }
    Selection::Pick(number as usize - 1)
}

/// Run the interactive walk over `catalog`, returning the ordered trail
/// of chosen nodes. The trail may be empty (empty menu, or quit before
/// the first pick); the caller decides what to print in that case.
pub fn run_menu(catalog: &Catalog, prompt: &mut dyn LinePrompt) -> Result<Vec<CatalogNode>> {
    let mut trail: Vec<CatalogNode> = Vec::new();

    if catalog.menu.is_empty() {
        println!("No menu items to display");
        return Ok(trail);
    }

    println!("Menu");
    println!("----");

    let mut tier: &[CatalogNode] = &catalog.menu;
    while !tier.is_empty() {
        for (index, item) in tier.iter().enumerate() {
            println!(
                "{}. {} - {}",
                index + 1,
                item.name,
                format_currency(item.price)
            );
        }

        let line = prompt.read_line("Make a selection (q to quit)")?;
        match parse_selection(&line, tier.len()) {
            Selection::Quit => return Ok(trail),
            Selection::Invalid => {
                println!(
                    "Please enter a number between 1 and {}, or q to quit.",
                    tier.len()
                );
                continue;
            }
            Selection::Pick(index) => {
                let chosen = &tier[index];
                println!(
                    "\nYou selected {} for {}\n",
                    chosen.name,
                    format_currency(chosen.price)
                );
                tracing::debug!(name = %chosen.name, price = chosen.price, "selection recorded");
                trail.push(chosen.clone());
                tier = &chosen.children;
            }
        }
    }
    Ok(trail)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::NodeId;
    use rstest::rstest;
    use std::collections::VecDeque;

    /// Feeds a fixed script of input lines to the walker.
    struct ScriptedPrompt {
        lines: VecDeque<String>,
    }

    impl ScriptedPrompt {
        fn new(lines: &[&str]) -> Self {
            ScriptedPrompt {
                lines: lines.iter().map(|s| s.to_string()).collect(),
            }
        }
    }

    impl LinePrompt for ScriptedPrompt {
        fn read_line(&mut self, _prompt: &str) -> Result<String> {
            // Running out of script means the test forgot a quit line.
            Ok(self.lines.pop_front().expect("script exhausted"))
        }
    }

    fn node(id: i64, name: &str, price: f64, children: Vec<CatalogNode>) -> CatalogNode {
        CatalogNode {
            id: NodeId::Number(id),
            name: name.to_string(),
            description: None,
            price,
            children,
        }
    }

    fn sample_catalog() -> Catalog {
        Catalog {
            menu: vec![
                node(
                    1,
                    "A",
                    10.0,
                    vec![node(2, "A1", 5.0, vec![]), node(3, "A2", 7.0, vec![])],
                ),
                node(4, "B", 20.0, vec![]),
            ],
        }
    }

    #[rstest]
    #[case("q", Selection::Quit)]
    #[case("Q", Selection::Quit)]
    #[case("", Selection::Quit)]
    #[case("  ", Selection::Quit)]
    #[case("1", Selection::Pick(0))]
    #[case(" 3 ", Selection::Pick(2))]
    #[case("0", Selection::Invalid)]
    #[case("4", Selection::Invalid)]
    #[case("-1", Selection::Invalid)]
    #[case("1.5", Selection::Invalid)]
    #[case("abc", Selection::Invalid)]
    fn validates_selections(#[case] raw: &str, #[case] expected: Selection) {
        assert_eq!(parse_selection(raw, 3), expected);
    }

    #[test]
    fn descends_to_leaf_and_stops() {
        let catalog = sample_catalog();
        let mut prompt = ScriptedPrompt::new(&["1", "1"]);
        let trail = run_menu(&catalog, &mut prompt).unwrap();
        let names: Vec<&str> = trail.iter().map(|n| n.name.as_str()).collect();
        assert_eq!(names, ["A", "A1"]);
    }

    #[test]
    fn immediate_quit_yields_empty_trail() {
        let catalog = sample_catalog();
        let mut prompt = ScriptedPrompt::new(&["q"]);
        assert!(run_menu(&catalog, &mut prompt).unwrap().is_empty());
    }

    #[test]
    fn empty_line_quits_mid_walk() {
        let catalog = sample_catalog();
        let mut prompt = ScriptedPrompt::new(&["1", ""]);
        let trail = run_menu(&catalog, &mut prompt).unwrap();
        assert_eq!(trail.len(), 1);
        assert_eq!(trail[0].name, "A");
    }

    #[test]
    fn invalid_input_redisplays_same_tier() {
        let catalog = sample_catalog();
        // Out-of-range, non-numeric and fractional entries must not
        // advance the tier or append; "2" then picks A2 on the same tier.
        let mut prompt = ScriptedPrompt::new(&["9", "abc", "1.5", "1", "2"]);
        let trail = run_menu(&catalog, &mut prompt).unwrap();
        let names: Vec<&str> = trail.iter().map(|n| n.name.as_str()).collect();
        assert_eq!(names, ["A", "A2"]);
    }

    #[test]
    fn leaf_pick_ends_without_further_prompts() {
        let catalog = sample_catalog();
        // "B" is a leaf at the top tier; no script entry is consumed
        // after the pick.
        let mut prompt = ScriptedPrompt::new(&["2"]);
        let trail = run_menu(&catalog, &mut prompt).unwrap();
        assert_eq!(trail.len(), 1);
        assert_eq!(trail[0].name, "B");
    }

    #[test]
    fn empty_menu_returns_empty_trail() {
        let catalog = Catalog { menu: vec![] };
        let mut prompt = ScriptedPrompt::new(&[]);
        assert!(run_menu(&catalog, &mut prompt).unwrap().is_empty());
    }
}
