use pretty_assertions::assert_eq;
use typecalc::*;

#[test]
fn test_run_success() {
    let result = run("(λx:Nat→x) succ(0)").unwrap();
    assert_eq!(result.ty, Some(Type::Nat));
    assert_eq!(result.value, Some(Value::Nat(1)));
    assert_eq!(result.to_string(), "1");
}

#[test]
fn test_run_bool_and_closure_rendering() {
    assert_eq!(run("iszero 0").unwrap().to_string(), "true");
    assert_eq!(run("λb:Bool→b").unwrap().to_string(), "<closure λb:Bool>");
}

#[test]
fn test_syntax_error_stops_pipeline() {
    match run("") {
        Err(CalcError::Syntax(err)) => assert_eq!(err.found, None),
        other => panic!("expected syntax error, got {:?}", other),
    }
}

#[test]
fn test_diagnostics_stop_evaluation() {
    match run("if true then 0 else false") {
        Err(CalcError::Type(errors)) => {
            assert_eq!(errors.messages(), vec!["Incorrect type of then/else branches"]);
        }
        other => panic!("expected type errors, got {:?}", other),
    }
}

#[test]
fn test_all_diagnostics_are_reported() {
    let err = run("(λx:Bool→succ x) iszero true").unwrap_err();
    assert_eq!(
        err.to_string(),
        "Incorrect type of succ. Incorrect type of the body. Incorrect type of IsZero"
    );
}

#[test]
fn test_prelude_bindings() {
    let inc = Pipeline::new()
        .run("λn:Nat→succ n")
        .unwrap()
        .value
        .unwrap();
    let prelude = Prelude::new()
        .with("two", Type::Nat, Value::Nat(2))
        .and_then(|p| p.with("inc", Type::arrow(Type::Nat, Type::Nat), inc))
        .unwrap();
    let pipeline = Pipeline::new().with_prelude(prelude);

    let result = pipeline.run("inc inc two").unwrap();
    assert_eq!(result.value, Some(Value::Nat(4)));

    // Unknown to the checker without the prelude
    assert!(run("inc two").is_ok_and(|r| r.value.is_none()));
}

#[test]
fn test_prelude_rejects_mistyped_binding() {
    let err = Prelude::new()
        .with("flag", Type::Bool, Value::Nat(1))
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "binding `flag` is declared as Bool but holds a Nat"
    );
}

#[test]
fn test_prelude_rejects_closure_with_wrong_result() {
    let is_zero = Pipeline::new()
        .run("λn:Nat→iszero n")
        .unwrap()
        .value
        .unwrap();
    let err = Prelude::new()
        .with("f", Type::arrow(Type::Nat, Type::Nat), is_zero.clone())
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "binding `f` is declared as (Nat → Nat) but holds a (Nat → Bool)"
    );

    // A closure over a captured value is typed through that value
    let adder = Pipeline::new()
        .run("(λk:Nat→(λn:Nat→if iszero n then k else n)) succ 0")
        .unwrap()
        .value
        .unwrap();
    assert!(Prelude::new()
        .with("adder", Type::arrow(Type::Nat, Type::Nat), adder)
        .is_ok());
    assert!(Prelude::new()
        .with("is_zero", Type::arrow(Type::Nat, Type::Bool), is_zero)
        .is_ok());
}

#[test]
fn test_deeply_nested_program_is_rejected() {
    let succs = format!("{}0", "succ ".repeat(2000));
    assert!(matches!(run(&succs), Err(CalcError::Syntax(_))));

    let parens = format!("succ {}0{}", "(".repeat(5000), ")".repeat(5000));
    assert!(matches!(run(&parens), Err(CalcError::Syntax(_))));
}

#[test]
fn test_context_limits_apply() {
    let pipeline = Pipeline::new().with_context(EvalContext::with_max_call_depth(0));
    let err = pipeline.run("(λx:Nat→x) 0").unwrap_err();
    assert_eq!(err.to_string(), "call depth 1 exceeds the limit of 0");

    let pipeline = Pipeline::new();
    pipeline.context().interrupt();
    assert!(matches!(
        pipeline.run("0"),
        Err(CalcError::Eval(EvalError::Interrupted))
    ));
}

#[test]
fn test_stages_are_available_separately() {
    let pipeline = Pipeline::new();
    let expr = pipeline.parse("pred succ 0").unwrap();
    assert!(pipeline.check(&expr).is_ok());
    assert_eq!(pipeline.evaluate(&expr).unwrap(), Some(Value::Nat(0)));

    // Evaluation does not require a clean check
    let expr = pipeline.parse("succ true").unwrap();
    assert!(!pipeline.check(&expr).is_ok());
    assert_eq!(pipeline.evaluate(&expr).unwrap(), None);
}
