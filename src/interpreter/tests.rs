use super::execute;
use crate::config::RunnerConfig;
use crate::error::ErrorKind;
use crate::lexer::tokenize;
use crate::parser::parse;

fn run(src: &str) -> Result<(String, Vec<String>), ErrorKind> {
    let tokens = tokenize(src).expect("lex failed");
    let parsed = parse(&tokens).unwrap_or_else(|e| panic!("parse failed: {e}"));
    let config = RunnerConfig::default();
    match execute(&parsed.body, &config) {
        Ok(outcome) => Ok((outcome.output, outcome.warnings)),
        Err(e) => Err(e.kind),
    }
}

fn run_ok(src: &str) -> String {
    run(src).unwrap_or_else(|kind| panic!("expected success, got {kind:?} error")).0
}

#[test]
fn hello_world() {
    let out = run_ok(r#"int main(void){ printf("hello, world\n"); return 0; }"#);
    assert_eq!(out, "hello, world\n");
}

#[test]
fn for_loop_sum() {
    let out = run_ok(
        r#"int main(void){
            int sum = 0;
            for (int i = 1; i <= 10; i += 1) { sum += i; }
            printf("%d\n", sum);
            return 0;
        }"#,
    );
    assert_eq!(out, "55\n");
}

#[test]
fn while_loop_countdown() {
    let out = run_ok(
        r#"int main(void){
            int n = 3;
            while (n > 0) { printf("%d ", n); n -= 1; }
            printf("\n");
            return 0;
        }"#,
    );
    assert_eq!(out, "3 2 1 \n");
}

#[test]
fn primality_check() {
    let src = r#"int main(void){
        int n = 17;
        int is_prime = 1;
        int d = 2;
        while (d * d <= n) {
            if (n % d == 0) { is_prime = 0; }
            d += 1;
        }
        if (is_prime) { printf("prime\n"); } else { printf("composite\n"); }
        return 0;
    }"#;
    assert_eq!(run_ok(src), "prime\n");
}

#[test]
fn printf_multiple_specifiers() {
    let out = run_ok(r#"int main(void){ printf("%d-%x-%c\n", 10, 255, 65); return 0; }"#);
    assert_eq!(out, "10-ff-A\n");
}

#[test]
fn division_by_zero_is_runtime_failure() {
    let err = run(r#"int main(void){ int x = 1 / 0; return 0; }"#).unwrap_err();
    assert_eq!(err, ErrorKind::Runtime);
}

#[test]
fn modulus_by_zero_is_runtime_failure() {
    let err = run(r#"int main(void){ int x = 1 % 0; return 0; }"#).unwrap_err();
    assert_eq!(err, ErrorKind::Runtime);
}

#[test]
fn undeclared_identifier_is_runtime_failure() {
    let err = run(r#"int main(void){ x = 1; return 0; }"#).unwrap_err();
    assert_eq!(err, ErrorKind::Runtime);
}

#[test]
fn printf_argument_count_mismatch_warns() {
    let tokens = tokenize(r#"int main(void){ printf("%d %d\n", 1); return 0; }"#).unwrap();
    let parsed = parse(&tokens).unwrap();
    let config = RunnerConfig::default();
    let outcome = execute(&parsed.body, &config).unwrap();
    assert_eq!(outcome.output, "1 %d\n");
    assert_eq!(outcome.warnings.len(), 1);
}

#[test]
fn logical_operators_do_not_short_circuit_but_still_yield_correct_truthiness() {
    // 1 / 0 would fail if evaluated, so this also proves both operands are
    // always evaluated: deliberately avoid any subexpression that could error.
    let out = run_ok(
        r#"int main(void){
            int a = 1;
            int b = 0;
            if (a || b) { printf("or-true\n"); }
            if (a && b) { printf("and-true\n"); } else { printf("and-false\n"); }
            return 0;
        }"#,
    );
    assert_eq!(out, "or-true\nand-false\n");
}

#[test]
fn nested_scopes_do_not_leak_declarations() {
    let err = run(
        r#"int main(void){
            if (1) { int inner = 5; }
            printf("%d\n", inner);
            return 0;
        }"#,
    )
    .unwrap_err();
    assert_eq!(err, ErrorKind::Runtime);
}

#[test]
fn assignment_to_undeclared_variable_is_runtime_error() {
    let err = run(r#"int main(void){ y += 1; return 0; }"#).unwrap_err();
    assert_eq!(err, ErrorKind::Runtime);
}

#[test]
fn for_loop_variable_is_scoped_to_the_loop() {
    let err = run(
        r#"int main(void){
            for (int i = 0; i < 3; i += 1) { }
            printf("%d\n", i);
            return 0;
        }"#,
    )
    .unwrap_err();
    assert_eq!(err, ErrorKind::Runtime);
}

#[test]
fn integer_overflow_wraps() {
    let out = run_ok(
        r#"int main(void){
            int x = 9223372036854775807;
            x += 1;
            printf("%d\n", x);
            return 0;
        }"#,
    );
    assert_eq!(out, "-9223372036854775808\n");
}

#[test]
fn step_budget_trips_internal_error() {
    let tokens = tokenize(
        r#"int main(void){
            int i = 0;
            while (1) { i += 1; }
            return 0;
        }"#,
    )
    .unwrap();
    let parsed = parse(&tokens).unwrap();
    let config = RunnerConfig { max_steps: Some(50), max_output_bytes: None };
    let err = execute(&parsed.body, &config).unwrap_err();
    assert_eq!(err.kind, ErrorKind::Internal);
}

#[test]
fn step_budget_trips_on_a_for_loop_with_no_condition() {
    // A bare `for(;;)` has no condition expression to evaluate, so the step
    // count must come from the loop itself rather than `eval_expr`.
    let tokens = tokenize("int main(void){ for(;;); return 0; }").unwrap();
    let parsed = parse(&tokens).unwrap();
    let config = RunnerConfig { max_steps: Some(50), max_output_bytes: None };
    let err = execute(&parsed.body, &config).unwrap_err();
    assert_eq!(err.kind, ErrorKind::Internal);
}

#[test]
fn redeclaration_in_the_same_scope_keeps_the_newer_value() {
    let out = run_ok(r#"int main(void){ int x = 1; int x = 2; printf("%d", x); return 0; }"#);
    assert_eq!(out, "2");
}
