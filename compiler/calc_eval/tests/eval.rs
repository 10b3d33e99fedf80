//! End-to-end evaluation of calc programs.

use calc_eval::{buffer_handler, Interpreter, Value};
use pretty_assertions::assert_eq;

/// Evaluate `src` and return its value and everything it printed.
fn eval(src: &str) -> (Option<Value>, String) {
    let interpreter = Interpreter::with_print_handler(buffer_handler());
    let value = interpreter.eval_expr(src);
    (value, interpreter.print_handler().output())
}

fn value(src: &str) -> Option<Value> {
    let (value, output) = eval(src);
    assert!(
        value.is_none() || !output.contains("Line:"),
        "unexpected diagnostics for {src:?}: {output}"
    );
    value
}

fn int(src: &str) -> i64 {
    match value(src) {
        Some(Value::Int(n)) => n,
        other => panic!("expected an integer from {src:?}, got {other:?}"),
    }
}

#[test]
fn arithmetic_folds_left() {
    assert_eq!(int("(+ 1 2 3)"), 6);
    assert_eq!(int("(- 2 4)"), -2);
    assert_eq!(int("(* 2 (* 3 4))"), 24);
    assert_eq!(int("(/ 8 (/ 4 2))"), 4);
    assert_eq!(int("(- -2 4)"), -6);
    assert_eq!(int("(* -1 -2)"), 2);
    assert_eq!(int("(% 7 3)"), 1);
    assert_eq!(int("(- 10 2 3)"), 5);
}

#[test]
fn comparisons_yield_one_or_zero() {
    assert_eq!(int("(< 1 2)"), 1);
    assert_eq!(int("(> 1 2)"), 0);
    assert_eq!(int("(= 3 3)"), 1);
    assert_eq!(int("(<> 3 3)"), 0);
    assert_eq!(int("(<= 2 2)"), 1);
    assert_eq!(int("(>= 1 2)"), 0);
}

#[test]
fn boolean_operators() {
    assert_eq!(int("(and 1 0)"), 0);
    assert_eq!(int("(and 1 1)"), 1);
    assert_eq!(int("(or 0 1)"), 1);
    assert_eq!(int("(or 0 0)"), 0);
}

#[test]
fn operands_of_the_wrong_type_degrade_to_zero() {
    assert_eq!(int("(+ 1 \"a\")"), 0);
    assert_eq!(int("(< \"a\" 1)"), 0);
    assert_eq!(int("(if \"a\" 1 2)"), 2);
    assert_eq!(int("(define (f) 1) (+ f 1)"), 0);
}

#[test]
fn set_binds_evaluated_value() {
    assert_eq!(int("(set a 1) a"), 1);
    assert_eq!(int("(set a 1) (set b a) (set a 2) b"), 1);
    assert_eq!(int("(set a (+ 1 2)) (* a a)"), 9);
}

#[test]
fn if_branches() {
    assert_eq!(int("(if 0 1 2)"), 2);
    assert_eq!(int("(if 5 1 2)"), 1);
    assert_eq!(value("(if 0 1)"), Some(Value::Nil));
    assert_eq!(value("(if -1 1)"), Some(Value::Nil));
}

#[test]
fn recursive_functions_terminate() {
    assert_eq!(
        int("(define (fact n) (if (<= n 1) 1 (* n (fact (- n 1))))) (fact 10)"),
        3_628_800
    );
    assert_eq!(
        int("(define (fib n) (if (< n 2) n (+ (fib (- n 1)) (fib (- n 2))))) (fib 10)"),
        55
    );
}

#[test]
fn deep_recursion() {
    assert_eq!(
        int("(define (count n) (if (= n 0) 42 (count (- n 1)))) (count 5000)"),
        42
    );
}

#[test]
fn activations_do_not_leak() {
    // If g's `n` leaked into f, the second `n` would read 10.
    assert_eq!(
        int("(define (g n) (* n 2)) (define (f n) (+ n (g 10) n)) (f 1)"),
        22
    );
}

#[test]
fn functions_are_lexically_scoped() {
    assert_eq!(
        int("(set x 1) (define (f) x) (define (g x) (f)) (g 2)"),
        1
    );
    assert_eq!(
        int("(define (outer a) (define (inner b) (+ a b)) (inner 10)) (outer 5)"),
        15
    );
}

#[test]
fn first_non_nil_body_value_is_returned() {
    let (value, output) = eval("(define (f) (print \"x\") 7 (print \"never\")) (f)");
    assert_eq!(value, Some(Value::Int(7)));
    assert_eq!(output, "x\n");
}

#[test]
fn forms_without_a_value() {
    assert_eq!(value(""), Some(Value::Nil));
    assert_eq!(value("(define (f) 1)"), Some(Value::Nil));
    assert_eq!(value("(set a 1)"), Some(Value::Nil));
}

#[test]
fn last_top_level_value_wins() {
    assert_eq!(int("1 2 3"), 3);
    assert_eq!(value("\"hi\""), Some(Value::from("hi")));
}

#[test]
fn print_writes_space_separated_line() {
    let (value, output) = eval("(print 1 \"two\" (+ 1 2)) (print) (print (if 0 1))");
    assert_eq!(value, Some(Value::Nil));
    assert_eq!(output, "1 two 3\n\nnil\n");
}

#[test]
fn concat_joins_displayed_values() {
    assert_eq!(value("(concat \"a\" 1 \"b\")"), Some(Value::from("a1b")));
    assert_eq!(value("(concat)"), Some(Value::from("")));
    assert_eq!(
        value("(concat \"x\" (if 0 1) (- 0 5))"),
        Some(Value::from("x-5"))
    );
}

#[test]
fn concat_keeps_number_literal_spelling() {
    assert_eq!(value("(concat 007 \"-\" -05)"), Some(Value::from("007-05")));
    assert_eq!(value("(concat (+ 007 0))"), Some(Value::from("7")));
}

#[test]
fn unbound_variable_prints_as_nil() {
    let (value, output) = eval("(if 0 (set x 1)) (print x \"!\")");
    assert_eq!(value, Some(Value::Nil));
    assert_eq!(output, "nil !\n");
    assert_eq!(
        eval("(if 0 (set x 1)) (concat x \"y\")").0,
        Some(Value::from("y"))
    );
}

#[test]
fn switch_runs_matching_case() {
    let (_, output) = eval("(switch 2 (case 1 (print \"one\")) (case 2 (print \"two\")))");
    assert_eq!(output, "two\n");
    assert_eq!(int("(switch 3 (case 1 10) (case 3 30))"), 30);
    assert_eq!(value("(switch 4 (case 1 10) (case 3 30))"), Some(Value::Nil));
    assert_eq!(int("(switch \"b\" (case \"a\" 1) (case \"b\" 2))"), 2);
}

#[test]
fn switch_without_predicate_takes_first_truthy_case() {
    assert_eq!(int("(switch (case 0 1) (case (< 1 2) 2) (case 1 3))"), 2);
}

#[test]
fn standalone_case() {
    assert_eq!(int("(case 1 5)"), 5);
    assert_eq!(value("(case 0 5)"), Some(Value::Nil));
}

#[test]
fn malformed_input_has_no_result() {
    for src in ["()", "(+)", "(", "(+ 1 x)", "(define (f a) a) (f 1 2)"] {
        let (value, output) = eval(src);
        assert_eq!(value, None, "{src:?}");
        assert!(output.contains("Line: 1"), "{src:?}: {output}");
    }
}

#[test]
fn parse_errors_are_all_printed() {
    let (value, output) = eval("()\n(+)");
    assert_eq!(value, None);
    assert_eq!(
        output,
        "Line: 1 Column: 2 - empty expression not allowed\n\
         Line: 2 Column: 2 - math expressions must have at least 2 arguments\n"
    );
}

#[test]
fn unknown_identifier_stops_evaluation() {
    let (value, output) = eval("(print 1) x (print 2)");
    assert_eq!(value, None);
    assert_eq!(output, "1\nLine: 1 Column: 11 - unknown identifier: x\n");
}

#[test]
fn unknown_identifier_names_the_file() {
    let interpreter = Interpreter::with_print_handler(buffer_handler());
    assert_eq!(interpreter.eval_file("test.calc", "(set a 1)\nb"), None);
    assert_eq!(
        interpreter.print_handler().output(),
        "test.calc - Line: 2 Column: 1 - unknown identifier: b\n"
    );
}

#[test]
fn division_by_zero_is_reported() {
    let (value, output) = eval("(print 1) (/ 1 0) (print 2)");
    assert_eq!(value, None);
    assert_eq!(output, "1\nLine: 1 Column: 11 - division by zero\n");
    assert_eq!(eval("(% 5 0)").0, None);
}

#[test]
fn scanner_errors_are_reported() {
    let (value, output) = eval("\"abc");
    assert_eq!(value, None);
    assert_eq!(output, "Line: 1 Column: 1 - unterminated string literal\n");
}

#[test]
fn sessions_are_independent() {
    let interpreter = Interpreter::with_print_handler(buffer_handler());
    assert_eq!(interpreter.eval_expr("(set a 1) a"), Some(Value::Int(1)));
    assert_eq!(interpreter.eval_expr("a"), None);
}

#[test]
fn free_functions_use_stdout() {
    assert_eq!(calc_eval::eval_expr("(+ 1 2)"), Some(Value::Int(3)));
    assert_eq!(calc_eval::eval_file("f.calc", "(* 2 3)"), Some(Value::Int(6)));
}
