use super::*;

fn first_match(input: &str) -> Option<(usize, usize)> {
    compiled_rules()
        .iter()
        .enumerate()
        .find_map(|(i, r)| r.match_len(input).map(|len| (i, len)))
}

fn rule_index(kind: TokenKind) -> usize {
    RULES
        .iter()
        .position(|r| r.action == RuleAction::Emit(kind))
        .unwrap_or(usize::MAX)
}

#[test]
fn every_rule_compiles() {
    assert_eq!(compiled_rules().len(), RULES.len());
}

#[test]
fn prefixed_literals_precede_decimal() {
    let dec = rule_index(TokenKind::DecLit);
    assert!(rule_index(TokenKind::HexLit) < dec);
    assert!(rule_index(TokenKind::BinLit) < dec);
}

#[test]
fn matches_are_anchored() {
    // The decimal rule would find "12" further in, but nothing matches at 0.
    assert_eq!(first_match("@12"), None);
}

#[test]
fn first_listed_rule_wins() {
    let (index, len) = first_match("0x1f+1").unwrap_or((usize::MAX, 0));
    assert_eq!(index, rule_index(TokenKind::HexLit));
    assert_eq!(len, 4);

    let (index, len) = first_match("0b101").unwrap_or((usize::MAX, 0));
    assert_eq!(index, rule_index(TokenKind::BinLit));
    assert_eq!(len, 5);
}

#[test]
fn bare_zero_x_falls_back_to_decimal() {
    let (index, len) = first_match("0x").unwrap_or((usize::MAX, 0));
    assert_eq!(index, rule_index(TokenKind::DecLit));
    assert_eq!(len, 1);
}

#[test]
fn whitespace_rule_skips() {
    let (index, len) = first_match(" \t 1").unwrap_or((usize::MAX, 0));
    assert_eq!(RULES[index].action, RuleAction::Skip);
    assert_eq!(len, 3);
}

#[test]
fn register_rule_accepts_one_extra_sigil() {
    let (index, len) = first_match("$$0+1").unwrap_or((usize::MAX, 0));
    assert_eq!(index, rule_index(TokenKind::Register));
    assert_eq!(len, 3);

    assert_eq!(first_match("$$"), None);
    assert_eq!(first_match("$$$0"), None);
}
