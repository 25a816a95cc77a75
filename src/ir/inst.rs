use crate::ir::local::Local;
use crate::ir::op::Op;
use crate::ir::val::Val;

/// A control-flow successor: a label target, an unwind handler, or a
/// switch case.
///
/// `Succ` and `Fail` are accepted by the IR grammar but have no tags in
/// the current wire revision; the serializer rejects them.
#[derive(Debug, Clone, PartialEq)]
pub enum Next {
    None,
    Unwind(Local),
    Label(Local, Vec<Val>),
    Case(Val, Box<Next>),
    Succ(Local),
    Fail(Local),
}

impl Next {
    pub fn label(name: Local) -> Self {
        Next::Label(name, vec![])
    }

    pub fn case(value: Val, next: Next) -> Self {
        Next::Case(value, Box::new(next))
    }
}

/// A basic-block instruction. A `Label` opens a block; `Unreachable`,
/// `Ret`, `Jump`, `If`, `Switch` and `Throw` terminate one.
#[derive(Debug, Clone, PartialEq)]
pub enum Inst {
    None,
    #[doc = "$name($params):"]
    Label(Local, Vec<Val>),
    #[doc = "$name = $op [unwind $unwind]"]
    Let(Local, Op, Next),
    #[doc = "unreachable"]
    Unreachable,
    #[doc = "ret $val"]
    Ret(Val),
    #[doc = "jump $next"]
    Jump(Next),
    #[doc = "if $cond then $then_next else $else_next"]
    If(Val, Next, Next),
    #[doc = "switch $val, default $default [$cases]"]
    Switch(Val, Next, Vec<Next>),
    #[doc = "throw $val [unwind $unwind]"]
    Throw(Val, Next),
}

impl Inst {
    /// A `Let` with no unwind handler.
    pub fn let_(name: Local, op: Op) -> Self {
        Inst::Let(name, op, Next::None)
    }
}
