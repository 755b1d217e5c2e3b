use crate::object::{Builtin, Object};
use once_cell::sync::Lazy;
use std::collections::HashMap;

/*
Host primitives, consulted when an identifier misses the environment
chain. Every entry takes the already-evaluated argument list and answers
with a plain object; failures come back as Error objects and propagate
like any other runtime error.
*/

pub static BUILTINS: Lazy<HashMap<&'static str, Builtin>> = Lazy::new(|| {
    let mut m = HashMap::new();
    m.insert("len", Builtin { name: "len", func: builtin_len });
    m.insert("first", Builtin { name: "first", func: builtin_first });
    m.insert("last", Builtin { name: "last", func: builtin_last });
    m.insert("rest", Builtin { name: "rest", func: builtin_rest });
    m.insert("push", Builtin { name: "push", func: builtin_push });
    m.insert("puts", Builtin { name: "puts", func: builtin_puts });
    m
});

/// Returns the named builtin wrapped as an object, if one exists.
pub fn lookup(name: &str) -> Option<Object> {
    BUILTINS.get(name).map(|builtin| Object::Builtin(*builtin))
}

fn wrong_arg_count(got: usize, want: usize) -> Object {
    Object::Error(format!(
        "wrong number of arguments: got={got}, want={want}"
    ))
}

fn builtin_len(args: Vec<Object>) -> Object {
    if args.len() != 1 {
        return wrong_arg_count(args.len(), 1);
    }
    match &args[0] {
        Object::String(value) => Object::Integer(value.len() as i64),
        Object::Array(elements) => Object::Integer(elements.len() as i64),
        other => Object::Error(format!(
            "argument to 'len' not supported, got {}",
            other.kind()
        )),
    }
}

fn builtin_first(args: Vec<Object>) -> Object {
    if args.len() != 1 {
        return wrong_arg_count(args.len(), 1);
    }
    match &args[0] {
        Object::Array(elements) => elements.first().cloned().unwrap_or(Object::Null),
        other => Object::Error(format!(
            "argument to 'first' must be ARRAY, got {}",
            other.kind()
        )),
    }
}

fn builtin_last(args: Vec<Object>) -> Object {
    if args.len() != 1 {
        return wrong_arg_count(args.len(), 1);
    }
    match &args[0] {
        Object::Array(elements) => elements.last().cloned().unwrap_or(Object::Null),
        other => Object::Error(format!(
            "argument to 'last' must be ARRAY, got {}",
            other.kind()
        )),
    }
}

// All but the first element, as a fresh array. Empty arrays have no rest.
fn builtin_rest(args: Vec<Object>) -> Object {
    if args.len() != 1 {
        return wrong_arg_count(args.len(), 1);
    }
    match &args[0] {
        Object::Array(elements) => {
            if elements.is_empty() {
                Object::Null
            } else {
                Object::Array(elements[1..].to_vec())
            }
        }
        other => Object::Error(format!(
            "argument to 'rest' must be ARRAY, got {}",
            other.kind()
        )),
    }
}

// Returns a new array with the value appended; the input is untouched.
fn builtin_push(args: Vec<Object>) -> Object {
    if args.len() != 2 {
        return wrong_arg_count(args.len(), 2);
    }
    match &args[0] {
        Object::Array(elements) => {
            let mut extended = elements.clone();
            extended.push(args[1].clone());
            Object::Array(extended)
        }
        other => Object::Error(format!(
            "argument to 'push' must be ARRAY, got {}",
            other.kind()
        )),
    }
}

fn builtin_puts(args: Vec<Object>) -> Object {
    if args.is_empty() {
        return wrong_arg_count(0, 1);
    }
    let line: Vec<String> = args.iter().map(|arg| arg.to_string()).collect();
    println!("{}", line.join(" "));
    Object::Null
}
