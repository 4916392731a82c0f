use super::*;
use indoc::indoc;

fn analyzer(input: &str) -> ExpressionAnalyzer {
    let mut analyzer = ExpressionAnalyzer::new();
    analyzer.parse_input(input);
    analyzer
}

#[test]
fn test_parse_input_stores_without_validation() {
    let analyzer = analyzer("(]");
    assert_eq!(analyzer.input(), "(]");
    assert_eq!(analyzer.lookahead(), CommentLookahead::FirstOccurrence);
}

#[test]
fn test_balanced_inputs() {
    let inputs = indoc! {"
        ()
        [()]
        {[()()]}
        (a+b)*c
        a+[b*c+(d*e+f)]*g
        {x*[y+(z)]}
    "};
    for line in inputs.lines() {
        assert_eq!(
            analyzer(line).check_syntax().unwrap(),
            SyntaxStatus::Balanced,
            "input: {line:?}"
        );
    }
}

#[test]
fn test_unbalanced_inputs() {
    assert_eq!(analyzer("(]").check_syntax().unwrap(), SyntaxStatus::Mismatch);
    assert_eq!(analyzer("((").check_syntax().unwrap(), SyntaxStatus::NonEmptyStack);
    assert_eq!(analyzer("a)").check_syntax().unwrap(), SyntaxStatus::Mismatch);
}

#[test]
fn test_check_syntax_is_repeatable() {
    for input in ["((", "(]", "a+b*c", "/*/"] {
        let analyzer = analyzer(input);
        let first = analyzer.check_syntax().unwrap();
        let second = analyzer.check_syntax().unwrap();
        assert_eq!(first, second, "input: {input:?}");
    }
}

#[test]
fn test_failed_check_does_not_leak_into_postfix() {
    // An unbalanced check leaves openers behind on its own stack only
    let checked = analyzer("((a+b");
    assert_eq!(checked.check_syntax().unwrap(), SyntaxStatus::NonEmptyStack);
    assert_eq!(checked.postfix_expression().unwrap(), "ab+((");

    let fresh = analyzer("((a+b");
    assert_eq!(fresh.postfix_expression().unwrap(), "ab+((");
}

#[test]
fn test_postfix_expression() {
    assert_eq!(analyzer("a+b*c").postfix_expression().unwrap(), "abc*+");
    assert_eq!(analyzer("(a+b)*c").postfix_expression().unwrap(), "ab+c*");
}

#[test]
fn test_analyze_balanced() {
    let analysis = analyzer("a+b*c").analyze().unwrap();
    assert!(analysis.is_balanced());
    assert_eq!(analysis.input, "a+b*c");
    assert_eq!(analysis.postfix.as_deref(), Some("abc*+"));
}

#[test]
fn test_analyze_unbalanced_skips_postfix() {
    let analysis = analyzer("(a+b").analyze().unwrap();
    assert_eq!(analysis.status, SyntaxStatus::NonEmptyStack);
    assert_eq!(analysis.postfix, None);
}

#[test]
fn test_reusing_analyzer_for_new_input() {
    let mut analyzer = analyzer("((");
    assert_eq!(analyzer.check_syntax().unwrap(), SyntaxStatus::NonEmptyStack);

    analyzer.parse_input("a*b");
    assert_eq!(analyzer.check_syntax().unwrap(), SyntaxStatus::Balanced);
    assert_eq!(analyzer.postfix_expression().unwrap(), "ab*");
}

#[test]
fn test_lookahead_mode_changes_result() {
    let mut analyzer = ExpressionAnalyzer::with_lookahead(CommentLookahead::CurrentPosition);
    analyzer.parse_input("a*b*/");
    assert_eq!(analyzer.check_syntax().unwrap(), SyntaxStatus::Mismatch);

    analyzer.set_lookahead(CommentLookahead::FirstOccurrence);
    assert_eq!(analyzer.check_syntax().unwrap(), SyntaxStatus::NonEmptyStack);
}
