use crate::ast::{BlockStatement, Expression, Identifier, Program, Statement};
use crate::builtins;
use crate::environment::{Env, Environment};
use crate::object::{Function, HashKey, Object};
use indexmap::IndexMap;
use std::rc::Rc;

/*
A tree-walking evaluator. Two sentinel objects steer control flow instead
of a separate exception channel: ReturnValue carries a `return` outward and
Error carries a failure outward, and both stop a block the moment they
appear. The one asymmetry between them is where unwrapping happens — a
block hands both up untouched, while the program boundary and each
function-call boundary unwrap ReturnValue exactly once. That is what lets
a `return` inside nested blocks cut straight out of the enclosing function
and no further.
*/

/// Evaluates a program against an environment and returns the last
/// statement's value, or the first Error / returned value that appears.
pub fn eval(program: &Program, env: &Env) -> Object {
    let mut result = Object::Null;

    for statement in &program.statements {
        result = eval_statement(statement, env);
        match result {
            Object::ReturnValue(value) => return *value,
            Object::Error(_) => return result,
            _ => {}
        }
    }
    result
}

fn eval_statement(statement: &Statement, env: &Env) -> Object {
    match statement {
        Statement::Expression { expression, .. } => eval_expression(expression, env),
        Statement::Let { name, value, .. } => {
            let value = eval_expression(value, env);
            if value.is_error() {
                return value;
            }
            env.borrow_mut().define(&name.value, value);
            Object::Null
        }
        Statement::Return { value, .. } => {
            let value = eval_expression(value, env);
            if value.is_error() {
                return value;
            }
            Object::ReturnValue(Box::new(value))
        }
        Statement::Block(block) => eval_block_statement(block, env),
    }
}

// Sentinels pass through unwrapped here; only program and call boundaries
// may open a ReturnValue.
fn eval_block_statement(block: &BlockStatement, env: &Env) -> Object {
    let mut result = Object::Null;

    for statement in &block.statements {
        result = eval_statement(statement, env);
        if matches!(result, Object::ReturnValue(_) | Object::Error(_)) {
            return result;
        }
    }
    result
}

fn eval_expression(expression: &Expression, env: &Env) -> Object {
    match expression {
        Expression::IntegerLiteral { value, .. } => Object::Integer(*value),
        Expression::BooleanLiteral { value, .. } => Object::Boolean(*value),
        Expression::StringLiteral { value, .. } => Object::String(value.clone()),
        Expression::Identifier(ident) => eval_identifier(ident, env),
        Expression::Prefix {
            operator, right, ..
        } => {
            let right = eval_expression(right, env);
            if right.is_error() {
                return right;
            }
            eval_prefix_expression(operator, right)
        }
        Expression::Infix {
            left,
            operator,
            right,
            ..
        } => {
            let left = eval_expression(left, env);
            if left.is_error() {
                return left;
            }
            let right = eval_expression(right, env);
            if right.is_error() {
                return right;
            }
            eval_infix_expression(operator, left, right)
        }
        Expression::If {
            condition,
            consequence,
            alternative,
            ..
        } => eval_if_expression(condition, consequence, alternative.as_ref(), env),
        Expression::FunctionLiteral {
            parameters, body, ..
        } => Object::Function(Rc::new(Function {
            parameters: parameters.clone(),
            body: body.clone(),
            env: Rc::clone(env),
        })),
        Expression::Call {
            function,
            arguments,
            ..
        } => {
            let function = eval_expression(function, env);
            if function.is_error() {
                return function;
            }
            let arguments = match eval_expressions(arguments, env) {
                Ok(values) => values,
                Err(error) => return error,
            };
            apply_function(function, arguments)
        }
        Expression::ArrayLiteral { elements, .. } => match eval_expressions(elements, env) {
            Ok(values) => Object::Array(values),
            Err(error) => error,
        },
        Expression::Index { left, index, .. } => {
            let left = eval_expression(left, env);
            if left.is_error() {
                return left;
            }
            let index = eval_expression(index, env);
            if index.is_error() {
                return index;
            }
            eval_index_expression(left, index)
        }
        Expression::HashLiteral { pairs, .. } => eval_hash_literal(pairs, env),
    }
}

// Left-to-right, stopping at the first error; the single Error becomes the
// result of the whole list's consumer.
fn eval_expressions(expressions: &[Expression], env: &Env) -> Result<Vec<Object>, Object> {
    let mut results = Vec::with_capacity(expressions.len());

    for expression in expressions {
        let value = eval_expression(expression, env);
        if value.is_error() {
            return Err(value);
        }
        results.push(value);
    }
    Ok(results)
}

fn eval_identifier(ident: &Identifier, env: &Env) -> Object {
    if let Some(value) = env.borrow().get(&ident.value) {
        return value;
    }
    if let Some(builtin) = builtins::lookup(&ident.value) {
        return builtin;
    }
    Object::Error(format!("identifier not found: {}", ident.value))
}

fn eval_prefix_expression(operator: &str, right: Object) -> Object {
    match operator {
        "!" => Object::Boolean(!is_truthy(&right)),
        "-" => match right {
            Object::Integer(value) => Object::Integer(value.wrapping_neg()),
            other => Object::Error(format!("unknown operator: -{}", other.kind())),
        },
        _ => Object::Error(format!("unknown operator: {}{}", operator, right.kind())),
    }
}

fn eval_infix_expression(operator: &str, left: Object, right: Object) -> Object {
    match (&left, &right) {
        (Object::Integer(l), Object::Integer(r)) => eval_integer_infix(operator, *l, *r),
        (Object::String(l), Object::String(r)) => eval_string_infix(operator, l, r),
        (Object::Boolean(l), Object::Boolean(r)) => match operator {
            "==" => Object::Boolean(l == r),
            "!=" => Object::Boolean(l != r),
            _ => unknown_operator(operator, &left, &right),
        },
        (Object::Null, Object::Null) => match operator {
            "==" => Object::Boolean(true),
            "!=" => Object::Boolean(false),
            _ => unknown_operator(operator, &left, &right),
        },
        _ if left.kind() != right.kind() => Object::Error(format!(
            "type mismatch: {} {} {}",
            left.kind(),
            operator,
            right.kind()
        )),
        _ => unknown_operator(operator, &left, &right),
    }
}

fn unknown_operator(operator: &str, left: &Object, right: &Object) -> Object {
    Object::Error(format!(
        "unknown operator: {} {} {}",
        left.kind(),
        operator,
        right.kind()
    ))
}

// Arithmetic wraps on overflow rather than aborting the session; a
// scripting value must never take the interpreter down with it.
fn eval_integer_infix(operator: &str, left: i64, right: i64) -> Object {
    match operator {
        "+" => Object::Integer(left.wrapping_add(right)),
        "-" => Object::Integer(left.wrapping_sub(right)),
        "*" => Object::Integer(left.wrapping_mul(right)),
        "/" => {
            if right == 0 {
                Object::Error(format!("division by zero: {left} / {right}"))
            } else {
                // truncates toward zero; MIN / -1 wraps like the other ops
                Object::Integer(left.wrapping_div(right))
            }
        }
        "<" => Object::Boolean(left < right),
        ">" => Object::Boolean(left > right),
        "<=" => Object::Boolean(left <= right),
        ">=" => Object::Boolean(left >= right),
        "==" => Object::Boolean(left == right),
        "!=" => Object::Boolean(left != right),
        _ => Object::Error(format!("unknown operator: INTEGER {operator} INTEGER")),
    }
}

fn eval_string_infix(operator: &str, left: &str, right: &str) -> Object {
    match operator {
        "+" => Object::String(format!("{left}{right}")),
        _ => Object::Error(format!("unknown operator: STRING {operator} STRING")),
    }
}

fn eval_if_expression(
    condition: &Expression,
    consequence: &BlockStatement,
    alternative: Option<&BlockStatement>,
    env: &Env,
) -> Object {
    let condition = eval_expression(condition, env);
    if condition.is_error() {
        return condition;
    }

    if is_truthy(&condition) {
        eval_block_statement(consequence, env)
    } else if let Some(alternative) = alternative {
        eval_block_statement(alternative, env)
    } else {
        Object::Null
    }
}

fn apply_function(function: Object, arguments: Vec<Object>) -> Object {
    match function {
        Object::Function(function) => {
            if arguments.len() != function.parameters.len() {
                return Object::Error(format!(
                    "wrong number of arguments: got={}, want={}",
                    arguments.len(),
                    function.parameters.len()
                ));
            }

            // a fresh frame enclosing the captured environment, not the
            // caller's
            let env = Environment::new_enclosed(&function.env);
            for (parameter, argument) in function.parameters.iter().zip(arguments) {
                env.borrow_mut().define(&parameter.value, argument);
            }

            let evaluated = eval_block_statement(&function.body, &env);
            unwrap_return_value(evaluated)
        }
        Object::Builtin(builtin) => (builtin.func)(arguments),
        other => Object::Error(format!("not a function: {}", other.kind())),
    }
}

fn unwrap_return_value(value: Object) -> Object {
    match value {
        Object::ReturnValue(inner) => *inner,
        other => other,
    }
}

fn eval_index_expression(left: Object, index: Object) -> Object {
    match (left, index) {
        (Object::Array(elements), Object::Integer(i)) => eval_array_index(&elements, i),
        (Object::Hash(pairs), key) => match HashKey::from_object(&key) {
            Some(hash_key) => pairs.get(&hash_key).cloned().unwrap_or(Object::Null),
            None => Object::Error(format!("unusable as hash key: {}", key.kind())),
        },
        (other, _) => Object::Error(format!("index operator not supported: {}", other.kind())),
    }
}

// Out-of-range access, negative included, answers Null rather than an
// error.
fn eval_array_index(elements: &[Object], index: i64) -> Object {
    if index < 0 || index as usize >= elements.len() {
        return Object::Null;
    }
    elements[index as usize].clone()
}

// Pairs evaluate left to right and keep that order in the result; a
// duplicate key overwrites its value in place.
fn eval_hash_literal(pairs: &[(Expression, Expression)], env: &Env) -> Object {
    let mut hash = IndexMap::new();

    for (key_expression, value_expression) in pairs {
        let key = eval_expression(key_expression, env);
        if key.is_error() {
            return key;
        }
        let Some(hash_key) = HashKey::from_object(&key) else {
            return Object::Error(format!("unusable as hash key: {}", key.kind()));
        };

        let value = eval_expression(value_expression, env);
        if value.is_error() {
            return value;
        }
        hash.insert(hash_key, value);
    }
    Object::Hash(hash)
}

/// `false` and `null` are falsy; everything else, `0` and `""` included,
/// is truthy.
fn is_truthy(object: &Object) -> bool {
    !matches!(object, Object::Null | Object::Boolean(false))
}
