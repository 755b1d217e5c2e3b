use crate::ast::{BlockStatement, Identifier};
use crate::environment::Env;
use indexmap::IndexMap;
use std::fmt;
use std::fmt::Formatter;
use std::rc::Rc;

/*
Runtime values are one enum. Two of the variants never reach the user:
ReturnValue is the sentinel that carries a `return` up to the nearest
function boundary, and Error rides the same rails so that any failing
sub-evaluation short-circuits its enclosing block, call or argument list.
Equality is structural for data values and identity for functions, which
share their declaration and captured environment behind an Rc.
*/

pub type BuiltinFn = fn(Vec<Object>) -> Object;

#[derive(Debug, Clone, PartialEq)]
pub enum Object {
    Integer(i64),
    Boolean(bool),
    String(String),
    Null,
    Array(Vec<Object>),
    // insertion-ordered, so the display form of a hash is stable from run
    // to run
    Hash(IndexMap<HashKey, Object>),
    ReturnValue(Box<Object>),
    Error(String),
    Function(Rc<Function>),
    Builtin(Builtin),
}

impl Object {
    /// The kind name used in runtime error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Object::Integer(_) => "INTEGER",
            Object::Boolean(_) => "BOOLEAN",
            Object::String(_) => "STRING",
            Object::Null => "NULL",
            Object::Array(_) => "ARRAY",
            Object::Hash(_) => "HASH",
            Object::ReturnValue(_) => "RETURN",
            Object::Error(_) => "ERROR",
            Object::Function(_) => "FUNCTION",
            Object::Builtin(_) => "BUILTIN",
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Object::Error(_))
    }
}

impl fmt::Display for Object {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Object::Integer(value) => write!(f, "{value}"),
            Object::Boolean(value) => write!(f, "{value}"),
            Object::String(value) => write!(f, "{value}"),
            Object::Null => write!(f, "null"),
            Object::Array(elements) => {
                let elements: Vec<String> = elements.iter().map(|e| e.to_string()).collect();
                write!(f, "[{}]", elements.join(", "))
            }
            Object::Hash(pairs) => {
                let pairs: Vec<String> = pairs
                    .iter()
                    .map(|(key, value)| format!("{key}: {value}"))
                    .collect();
                write!(f, "{{{}}}", pairs.join(", "))
            }
            Object::ReturnValue(value) => write!(f, "{value}"),
            Object::Error(message) => write!(f, "ERROR: {message}"),
            Object::Function(function) => write!(f, "{function}"),
            Object::Builtin(builtin) => write!(f, "{builtin}"),
        }
    }
}

/// A user-defined function: parameters, body, and the environment in force
/// at its definition site. Cloning an Object::Function clones the handle,
/// not the declaration, so every closure made from the same literal shares
/// one captured environment.
pub struct Function {
    pub parameters: Vec<Identifier>,
    pub body: BlockStatement,
    pub env: Env,
}

// Identity, not structure: two closures are the same function only if they
// are the same allocation.
impl PartialEq for Function {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self, other)
    }
}

// The captured environment can reach back to this function through its own
// binding, so Debug stays away from `env` to keep cyclic graphs printable.
impl fmt::Debug for Function {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.debug_struct("Function")
            .field("parameters", &self.parameters)
            .finish_non_exhaustive()
    }
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        let parameters: Vec<String> = self.parameters.iter().map(|p| p.to_string()).collect();
        let body: Vec<String> = self.body.statements.iter().map(|s| s.to_string()).collect();
        write!(
            f,
            "fn({}) {{\n{}\n}}",
            parameters.join(", "),
            body.join(" ")
        )
    }
}

/// A host primitive exposed to programs by name.
#[derive(Debug, Clone, Copy)]
pub struct Builtin {
    pub name: &'static str,
    pub func: BuiltinFn,
}

impl PartialEq for Builtin {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl fmt::Display for Builtin {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "builtin function")
    }
}

/// The object kinds that may key a hash.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum HashKey {
    Integer(i64),
    Boolean(bool),
    String(String),
}

impl HashKey {
    /// Returns the key form of a hashable object, or None for kinds that
    /// cannot key a hash.
    pub fn from_object(object: &Object) -> Option<HashKey> {
        match object {
            Object::Integer(value) => Some(HashKey::Integer(*value)),
            Object::Boolean(value) => Some(HashKey::Boolean(*value)),
            Object::String(value) => Some(HashKey::String(value.clone())),
            _ => None,
        }
    }
}

impl fmt::Display for HashKey {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            HashKey::Integer(value) => write!(f, "{value}"),
            HashKey::Boolean(value) => write!(f, "{value}"),
            HashKey::String(value) => write!(f, "{value}"),
        }
    }
}
