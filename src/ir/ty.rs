use std::fmt::Display;

use itertools::Itertools;

use crate::ir::global::Global;

/// A value or reference type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Ty {
    None,
    Void,
    Vararg,
    Ptr,
    Bool,
    Char,
    Byte,
    UByte,
    Short,
    UShort,
    Int,
    UInt,
    Long,
    ULong,
    Float,
    Double,
    Null,
    Nothing,
    Virtual,
    Unit,
    // [int x 4]
    ArrayValue(Box<Ty>, i32),
    // {int, bool}
    StructValue(Vec<Ty>),
    // (int, bool) -> int
    Function(Vec<Ty>, Box<Ty>),
    Var(Box<Ty>),
    Array(Box<Ty>, bool),
    Ref {
        name: Global,
        exact: bool,
        nullable: bool,
    },
}

impl Display for Ty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Ty::None => write!(f, "none"),
            Ty::Void => write!(f, "void"),
            Ty::Vararg => write!(f, "..."),
            Ty::Ptr => write!(f, "ptr"),
            Ty::Bool => write!(f, "bool"),
            Ty::Char => write!(f, "char"),
            Ty::Byte => write!(f, "byte"),
            Ty::UByte => write!(f, "ubyte"),
            Ty::Short => write!(f, "short"),
            Ty::UShort => write!(f, "ushort"),
            Ty::Int => write!(f, "int"),
            Ty::UInt => write!(f, "uint"),
            Ty::Long => write!(f, "long"),
            Ty::ULong => write!(f, "ulong"),
            Ty::Float => write!(f, "float"),
            Ty::Double => write!(f, "double"),
            Ty::Null => write!(f, "null"),
            Ty::Nothing => write!(f, "nothing"),
            Ty::Virtual => write!(f, "virtual"),
            Ty::Unit => write!(f, "unit"),
            Ty::ArrayValue(ty, n) => write!(f, "[{ty} x {n}]"),
            Ty::StructValue(tys) => {
                write!(f, "{{{}}}", tys.iter().map(|t| t.to_string()).join(", "))
            }
            Ty::Function(args, ret) => write!(
                f,
                "({}) -> {}",
                args.iter().map(|t| t.to_string()).join(", "),
                ret
            ),
            Ty::Var(ty) => write!(f, "var[{ty}]"),
            Ty::Array(ty, nullable) => {
                write!(f, "array[{ty}{}]", if *nullable { "?" } else { "" })
            }
            Ty::Ref {
                name,
                exact,
                nullable,
            } => write!(
                f,
                "ref[{name}{}{}]",
                if *exact { "!" } else { "" },
                if *nullable { "?" } else { "" }
            ),
        }
    }
}
