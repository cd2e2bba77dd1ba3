use mfterm::prelude::*;

fn t(expr: &Expr) -> Term {
    Term::from_expr(expr).unwrap()
}

#[test]
fn crossing_expands_to_sum_and_interaction() {
    let crossed = t(&(sym("a") * sym("b")));
    let spelled_out = t(&(sym("a") + sym("b") + (sym("a") & sym("b"))));
    assert_eq!(crossed, spelled_out);
}

#[test]
fn three_way_crossing_yields_seven_terms() {
    let crossed = t(&(sym("a") * sym("b") * sym("c"))).sorted();
    let expected = t(&(sym("a")
        + sym("b")
        + sym("c")
        + (sym("a") & sym("b"))
        + (sym("a") & sym("c"))
        + (sym("b") & sym("c"))
        + (sym("a") & sym("b") & sym("c"))))
    .sorted();
    assert_eq!(crossed, expected);
    assert_eq!(crossed.summands().len(), 7);
}

#[test]
fn sum_association_flattens() {
    let left = t(&((sym("a") + sym("b")) + sym("c")));
    let right = t(&(sym("a") + (sym("b") + sym("c"))));
    let flat = t(&Expr::call(
        Operator::Plus,
        vec![sym("a"), sym("b"), sym("c")],
    ));
    assert_eq!(left, right);
    assert_eq!(left, flat);
    assert_eq!(
        flat,
        Term::Sum(vec![
            Term::Eval("a".into()),
            Term::Eval("b".into()),
            Term::Eval("c".into()),
        ])
    );
}

#[test]
fn interaction_association_flattens() {
    let nested = t(&((sym("a") & sym("b")) & sym("c")));
    assert_eq!(
        nested,
        Term::Interaction(vec![
            Term::Eval("a".into()),
            Term::Eval("b".into()),
            Term::Eval("c".into()),
        ])
    );
    assert_eq!(nested.degree(), 3);
}

#[test]
fn interaction_distributes_over_sum() {
    let factored = t(&(sym("a") & (sym("b") + sym("c"))));
    let expanded = t(&((sym("a") & sym("b")) + (sym("a") & sym("c"))));
    assert_eq!(factored, expanded);
}

#[test]
fn distribution_keeps_suffix_children() {
    // (b + c) & a must distribute with `a` as the trailing factor.
    let factored = t(&((sym("b") + sym("c")) & sym("a")));
    let expanded = t(&((sym("b") & sym("a")) + (sym("c") & sym("a"))));
    assert_eq!(factored, expanded);
}

#[test]
fn subtraction_rewrites_to_negative_intercept() {
    let subtracted = t(&(sym("a") - lit(1)));
    let spelled_out = t(&(sym("a") + lit(-1)));
    assert_eq!(subtracted, spelled_out);
}

#[test]
fn subtraction_rejects_non_unit_operand() {
    let err = Term::from_expr(&(sym("a") - sym("b"))).unwrap_err();
    assert!(err.is_bad_subtraction());

    let err = Term::from_expr(&(sym("a") - lit(0))).unwrap_err();
    assert!(err.is_bad_subtraction());
}

#[test]
fn intercept_literal_out_of_range_is_rejected() {
    let err = Term::from_expr(&lit(2)).unwrap_err();
    assert_eq!(err, TermError::BadInterceptValue { value: 2 });
}

#[test]
fn nested_formula_separator_is_rejected() {
    let err = Term::from_expr(&(sym("a") + Expr::tie(sym("y"), sym("x")))).unwrap_err();
    assert_eq!(err, TermError::Malformed { op: Operator::Tilde });
}

#[test]
fn degree_orders_intercepts_first() {
    let term = t(&((sym("a") & sym("b")) + sym("c") + lit(1))).sorted();
    let degrees: Vec<usize> = term
        .summands()
        .iter()
        .map(Term::degree)
        .collect();
    assert_eq!(degrees, vec![0, 1, 2]);
}

#[test]
fn grouping_keeps_children_and_no_eval_vars() {
    let term = t(&(lit(1) | sym("g")));
    assert_eq!(
        term,
        Term::Grouping(vec![
            Term::Intercept(Intercept::Positive),
            Term::Eval("g".into()),
        ])
    );
    assert!(term.eval_vars().is_empty());
    assert_eq!(term.degree(), 1);
}

#[test]
fn eval_vars_deduplicate_in_order() {
    let term = t(&(sym("a") + sym("b") + (sym("a") & sym("c"))));
    let vars: Vec<String> = term.eval_vars().iter().map(ToString::to_string).collect();
    assert_eq!(vars, vec!["a", "b", "c"]);
}
