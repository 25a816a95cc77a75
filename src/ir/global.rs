use std::fmt::Display;

use itertools::Itertools;

use crate::ir::ty::Ty;

/// A fully-qualified symbol name.
///
/// A `Member` owner is always a `Top` in well-formed IR; the serializer
/// enforces that at encode time.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Global {
    None,
    Top(String),
    Member(Box<Global>, Sig),
}

impl Global {
    pub fn top(id: impl Into<String>) -> Self {
        Global::Top(id.into())
    }

    pub fn member(owner: Global, sig: Sig) -> Self {
        Global::Member(Box::new(owner), sig)
    }
}

impl Display for Global {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Global::None => write!(f, "<none>"),
            Global::Top(id) => write!(f, "@{id}"),
            Global::Member(owner, sig) => write!(f, "{owner}::{sig}"),
        }
    }
}

/// A signature discriminator. Members sharing an owner are told apart by
/// their `Sig`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Sig {
    Field(String),
    Ctor(Vec<Ty>),
    Method(String, Vec<Ty>),
    Proxy(String, Vec<Ty>),
    Extern(String),
    Generated(String),
    Duplicate(Box<Sig>, Vec<Ty>),
}

impl Display for Sig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let tys = |tys: &[Ty]| tys.iter().map(|t| t.to_string()).join(", ");
        match self {
            Sig::Field(id) => write!(f, "field.{id}"),
            Sig::Ctor(args) => write!(f, "init({})", tys(args)),
            Sig::Method(id, args) => write!(f, "method.{id}({})", tys(args)),
            Sig::Proxy(id, args) => write!(f, "proxy.{id}({})", tys(args)),
            Sig::Extern(id) => write!(f, "extern.{id}"),
            Sig::Generated(id) => write!(f, "generated.{id}"),
            Sig::Duplicate(inner, args) => write!(f, "dup.{inner}({})", tys(args)),
        }
    }
}
