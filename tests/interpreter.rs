use lemur::environment::Environment;
use lemur::evaluator::eval;
use lemur::lexer::Lexer;
use lemur::object::Object;
use lemur::parser::Parser;

// Drives the whole pipeline the way the REPL does: source in, display
// form out.
fn interpret(input: &str) -> String {
    let lexer = Lexer::new(input);
    let mut parser = Parser::new(lexer);
    let program = parser.parse_program();
    assert!(
        parser.errors().is_empty(),
        "parse errors for {:?}: {:?}",
        input,
        parser.errors()
    );
    let env = Environment::new_global();
    eval(&program, &env).to_string()
}

#[test]
fn conditional_on_a_computed_binding() {
    let input = "let a = 5; let b = a > 3; let c = a * 99; if (b) { 10 } else { 1 };";
    assert_eq!(interpret(input), "10");
}

#[test]
fn nested_function_calls() {
    let input = "let add = fn(a, b) { a + b }; add(1, add(2, 3));";
    assert_eq!(interpret(input), "6");
}

#[test]
fn closures_keep_their_definition_scope() {
    let input = "let newAdder = fn(x) { fn(y) { x + y } }; let addTwo = newAdder(2); addTwo(3);";
    assert_eq!(interpret(input), "5");
}

#[test]
fn map_built_from_recursion_and_builtins() {
    let input = "let map = fn(arr, f) { \
        let iter = fn(a, acc) { \
            if (len(a) == 0) { acc } else { iter(rest(a), push(acc, f(first(a)))) } \
        }; \
        iter(arr, []) \
    }; \
    map([1,2,3], fn(x){ x*2 });";
    assert_eq!(interpret(input), "[2, 4, 6]");
}

#[test]
fn string_concatenation_displays_raw() {
    assert_eq!(interpret("\"hello\" + \" \" + \"world\""), "hello world");
}

#[test]
fn undefined_identifiers_report_as_error_values() {
    assert_eq!(interpret("foobar"), "ERROR: identifier not found: foobar");
}

#[test]
fn mixed_operand_kinds_report_a_type_mismatch() {
    assert_eq!(interpret("5 + true;"), "ERROR: type mismatch: INTEGER + BOOLEAN");
}

#[test]
fn nested_return_propagates_to_the_outermost_block() {
    let input = "if (10 > 1) { if (10 > 1) { return 10; } return 1; }";
    assert_eq!(interpret(input), "10");
}

#[test]
fn truthiness_follows_the_falsy_pair() {
    assert_eq!(interpret("if (0) { \"A\" } else { \"B\" }"), "A");
    assert_eq!(
        interpret("if (if (true) {}) { \"A\" } else { \"B\" }"),
        "B",
        "an empty consequence yields null, which is falsy"
    );
    assert_eq!(interpret("if (false) { \"A\" } else { \"B\" }"), "B");
}

#[test]
fn push_grows_a_copy_and_leaves_the_original() {
    let input = "let a = [1, 2]; let b = push(a, 9); [len(a), len(b), b[2]];";
    assert_eq!(interpret(input), "[2, 3, 9]");
}

#[test]
fn function_display_form() {
    assert_eq!(interpret("fn(x, y) { x + y; }"), "fn(x, y) {\n(x + y);\n}");
}

#[test]
fn environment_persists_across_inputs_like_a_repl_session() {
    // one environment, several programs, as the REPL drives it
    let env = Environment::new_global();
    let run = |input: &str| {
        let lexer = Lexer::new(input);
        let mut parser = Parser::new(lexer);
        let program = parser.parse_program();
        assert!(parser.errors().is_empty(), "{:?}", parser.errors());
        eval(&program, &env).to_string()
    };

    assert_eq!(run("let counter = fn(x) { if (x > 2) { x } else { counter(x + 1) } };"), "null");
    assert_eq!(run("counter(0);"), "3");
    assert_eq!(run("let banana = \"yellow\";"), "null");
    assert_eq!(run("banana"), "yellow");
}

#[test]
fn parse_errors_keep_the_evaluator_away() {
    let lexer = Lexer::new("let x 5;");
    let mut parser = Parser::new(lexer);
    let _ = parser.parse_program();
    assert!(!parser.errors().is_empty());
}

#[test]
fn hash_display_keeps_source_order() {
    assert_eq!(
        interpret("{\"a\": 1, \"b\": 2, \"c\": 3}"),
        "{a: 1, b: 2, c: 3}"
    );
    // a duplicate key updates in place rather than moving to the back
    assert_eq!(interpret("{\"a\": 1, \"b\": 2, \"a\": 3}"), "{a: 3, b: 2}");
}

#[test]
fn hash_literals_evaluate_and_index() {
    let input = "let m = {\"name\": \"lemur\", 1: \"one\", true: \"yes\"}; \
                 m[\"name\"] + \" \" + m[1] + \" \" + m[true];";
    assert_eq!(interpret(input), "lemur one yes");
}

#[test]
fn builtin_arity_violations_surface_as_error_values() {
    assert_eq!(
        interpret("len(\"a\", \"b\")"),
        "ERROR: wrong number of arguments: got=2, want=1"
    );
    assert_eq!(
        interpret("first(1)"),
        "ERROR: argument to 'first' must be ARRAY, got INTEGER"
    );
}
