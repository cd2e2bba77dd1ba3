use mfterm::prelude::*;

fn build(expr: Expr) -> TermSet {
    let formula = Formula::from_expr(&expr).unwrap();
    TermSet::build(&formula).unwrap()
}

fn names(names: &[Name]) -> Vec<String> {
    names.iter().map(ToString::to_string).collect()
}

#[test]
fn implicit_intercept_is_present() {
    let set = build(Expr::tie(sym("y"), sym("x")));
    assert!(set.has_intercept());
    assert!(set.has_response());
}

#[test]
fn explicit_zero_denies_intercept() {
    let set = build(Expr::tie(sym("y"), lit(0) + sym("x")));
    assert!(!set.has_intercept());
}

#[test]
fn subtracted_unit_denies_intercept() {
    let set = build(Expr::tie(sym("y"), sym("x") - lit(1)));
    assert!(!set.has_intercept());
}

#[test]
fn explicit_unit_keeps_intercept() {
    let set = build(Expr::tie(sym("y"), lit(1) + sym("x")));
    assert!(set.has_intercept());
}

#[test]
fn negative_unit_denies_intercept() {
    let set = build(Expr::tie(sym("y"), lit(-1) + sym("x")));
    assert!(!set.has_intercept());
}

#[test]
fn denial_wins_over_explicit_unit() {
    // An explicit `0` anywhere forces absence even alongside a `1`.
    let set = build(Expr::tie(sym("y"), lit(1) + sym("x") + lit(0)));
    assert!(!set.has_intercept());
}

#[test]
fn variables_put_response_first() {
    let set = build(Expr::tie(
        sym("y"),
        sym("a") + sym("b") + (sym("a") & sym("b")),
    ));
    assert_eq!(names(set.variables()), vec!["y", "a", "b"]);
    assert_eq!(set.terms().len(), 3);
    assert_eq!(set.degrees(), &[1, 1, 2]);
}

#[test]
fn factors_matrix_marks_constituents() {
    let set = build(Expr::tie(
        sym("y"),
        sym("a") + sym("b") + (sym("a") & sym("b")),
    ));
    let factors = set.factors();
    assert_eq!(factors.nrows(), 3); // y, a, b
    assert_eq!(factors.ncols(), 3); // a, b, a & b

    // The response row is all false: y is not an rhs term constituent.
    assert!(!factors[(0, 0)] && !factors[(0, 1)] && !factors[(0, 2)]);
    // a appears in `a` and `a & b`.
    assert!(factors[(1, 0)] && !factors[(1, 1)] && factors[(1, 2)]);
    // b appears in `b` and `a & b`.
    assert!(!factors[(2, 0)] && factors[(2, 1)] && factors[(2, 2)]);
}

#[test]
fn duplicate_terms_keep_first_occurrence() {
    let set = build(Expr::tie(sym("y"), sym("a") + sym("a") + sym("b")));
    assert_eq!(set.terms().len(), 2);
    assert_eq!(names(set.variables()), vec!["y", "a", "b"]);
}

#[test]
fn crossing_expands_before_extraction() {
    let set = build(Expr::tie(sym("y"), sym("a") * sym("b") * sym("c")));
    assert_eq!(set.terms().len(), 7);
    assert_eq!(set.degrees(), &[1, 1, 1, 2, 2, 2, 3]);
    assert_eq!(names(set.variables()), vec!["y", "a", "b", "c"]);
}

#[test]
fn grouping_terms_are_tracked_separately() {
    let set = build(Expr::tie(sym("y"), sym("a") + (lit(1) | sym("g"))));
    assert_eq!(set.terms().len(), 1);
    assert_eq!(set.group_terms().len(), 1);
    // `g` only occurs inside the grouping, so it is not a model variable.
    assert_eq!(names(set.variables()), vec!["y", "a"]);
    assert!(set.group_terms()[0].is_grouping());
}

#[test]
fn one_sided_formula_has_no_response() {
    let set = build(Expr::onesided(sym("x")));
    assert!(!set.has_response());
    assert!(set.response().is_none());
    assert_eq!(names(set.variables()), vec!["x"]);
}

#[test]
fn intercept_only_rhs() {
    let set = build(Expr::tie(sym("y"), lit(1)));
    assert!(set.has_intercept());
    assert!(set.terms().is_empty());
    assert_eq!(names(set.variables()), vec!["y"]);
}

#[test]
fn term_vars_parallel_terms() {
    let set = build(Expr::tie(sym("y"), sym("a") + (sym("a") & sym("b"))));
    assert_eq!(set.term_vars().len(), set.terms().len());
    assert_eq!(names(&set.term_vars()[0]), vec!["a"]);
    assert_eq!(names(&set.term_vars()[1]), vec!["a", "b"]);
}

#[test]
fn non_formula_root_is_rejected() {
    let err = Formula::from_expr(&(sym("a") + sym("b"))).unwrap_err();
    assert!(err.is_not_a_formula());

    let err = Formula::from_expr(&Expr::call(
        Operator::Tilde,
        vec![sym("a"), sym("b"), sym("c")],
    ))
    .unwrap_err();
    assert!(err.is_not_a_formula());
}
