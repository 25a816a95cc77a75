use crate::ir::global::{Global, Sig};
use crate::ir::ty::Ty;
use crate::ir::val::Val;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinOp {
    Iadd,
    Fadd,
    Isub,
    Fsub,
    Imul,
    Fmul,
    Sdiv,
    Udiv,
    Fdiv,
    Srem,
    Urem,
    Frem,
    Shl,
    Lshr,
    Ashr,
    And,
    Or,
    Xor,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompOp {
    Ieq,
    Ine,
    Ugt,
    Uge,
    Ult,
    Ule,
    Sgt,
    Sge,
    Slt,
    Sle,
    Feq,
    Fne,
    Fgt,
    Fge,
    Flt,
    Fle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConvOp {
    Trunc,
    Zext,
    Sext,
    Fptrunc,
    Fpext,
    Fptoui,
    Fptosi,
    Uitofp,
    Sitofp,
    Ptrtoint,
    Inttoptr,
    Bitcast,
}

/// The operation algebra. Every `Op` is bound by a `Let` instruction.
///
/// `Load`/`Store` carry an `is_volatile` flag that has no wire
/// representation; serializing a volatile access is a programmer error.
#[derive(Debug, Clone, PartialEq)]
pub enum Op {
    #[doc = "$dest = call $ty $ptr $args"]
    Call {
        ty: Ty,
        ptr: Val,
        args: Vec<Val>,
    },
    #[doc = "$dest = load $ty $ptr"]
    Load {
        ty: Ty,
        ptr: Val,
        is_volatile: bool,
    },
    #[doc = "store $ty $value $ptr"]
    Store {
        ty: Ty,
        value: Val,
        ptr: Val,
        is_volatile: bool,
    },
    #[doc = "$dest = elem $ty $ptr $indexes"]
    Elem {
        ty: Ty,
        ptr: Val,
        indexes: Vec<Val>,
    },
    #[doc = "$dest = extract $aggr $indexes"]
    Extract {
        aggr: Val,
        indexes: Vec<i32>,
    },
    #[doc = "$dest = insert $aggr $value $indexes"]
    Insert {
        aggr: Val,
        value: Val,
        indexes: Vec<i32>,
    },
    #[doc = "$dest = stackalloc $ty $n"]
    Stackalloc {
        ty: Ty,
        n: Val,
    },
    #[doc = "$dest = $op $ty $l $r"]
    Bin {
        op: BinOp,
        ty: Ty,
        l: Val,
        r: Val,
    },
    #[doc = "$dest = $op $ty $l $r"]
    Comp {
        op: CompOp,
        ty: Ty,
        l: Val,
        r: Val,
    },
    #[doc = "$dest = $op $ty $value"]
    Conv {
        op: ConvOp,
        ty: Ty,
        value: Val,
    },
    #[doc = "$dest = select $cond $then_val $else_val"]
    Select {
        cond: Val,
        then_val: Val,
        else_val: Val,
    },
    #[doc = "$dest = classalloc $name"]
    Classalloc {
        name: Global,
    },
    #[doc = "$dest = fieldload $ty $obj $name"]
    Fieldload {
        ty: Ty,
        obj: Val,
        name: Global,
    },
    #[doc = "fieldstore $ty $obj $name $value"]
    Fieldstore {
        ty: Ty,
        obj: Val,
        name: Global,
        value: Val,
    },
    #[doc = "$dest = method $obj $sig"]
    Method {
        obj: Val,
        sig: Sig,
    },
    #[doc = "$dest = dynmethod $obj $sig"]
    Dynmethod {
        obj: Val,
        sig: Sig,
    },
    #[doc = "$dest = module $name"]
    Module {
        name: Global,
    },
    #[doc = "$dest = as $ty $obj"]
    As {
        ty: Ty,
        obj: Val,
    },
    #[doc = "$dest = is $ty $obj"]
    Is {
        ty: Ty,
        obj: Val,
    },
    #[doc = "$dest = box $ty $obj"]
    Box {
        ty: Ty,
        obj: Val,
    },
    #[doc = "$dest = unbox $ty $obj"]
    Unbox {
        ty: Ty,
        obj: Val,
    },
    #[doc = "$dest = sizeof $ty"]
    Sizeof {
        ty: Ty,
    },
    #[doc = "$dest = copy $value"]
    Copy {
        value: Val,
    },
    #[doc = "$dest = closure $ty $fun $captures"]
    Closure {
        ty: Ty,
        fun: Val,
        captures: Vec<Val>,
    },
    #[doc = "$dest = var $ty"]
    Var {
        ty: Ty,
    },
    #[doc = "$dest = varload $slot"]
    Varload {
        slot: Val,
    },
    #[doc = "varstore $slot $value"]
    Varstore {
        slot: Val,
        value: Val,
    },
    #[doc = "$dest = arrayalloc $ty $init"]
    Arrayalloc {
        ty: Ty,
        init: Val,
    },
    #[doc = "$dest = arrayload $ty $arr $idx"]
    Arrayload {
        ty: Ty,
        arr: Val,
        idx: Val,
    },
    #[doc = "arraystore $ty $arr $idx $value"]
    Arraystore {
        ty: Ty,
        arr: Val,
        idx: Val,
        value: Val,
    },
    #[doc = "$dest = arraylength $arr"]
    Arraylength {
        arr: Val,
    },
}
