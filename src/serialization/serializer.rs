use tracing::instrument;

use crate::ir::attrs::{Attr, Attrs};
use crate::ir::defn::Defn;
use crate::ir::global::{Global, Sig};
use crate::ir::inst::{Inst, Next};
use crate::ir::local::Local;
use crate::ir::op::{BinOp, CompOp, ConvOp, Op};
use crate::ir::ty::Ty;
use crate::ir::val::Val;
use crate::serialization::buffer::ByteBuffer;
use crate::serialization::tags;

/// Serializes a module into `buffer`. On return the cursor sits one past
/// the last payload byte.
pub fn serialize(defns: &[Defn], buffer: &mut ByteBuffer) {
    BinarySerializer::new(buffer).serialize(defns);
}

/// A recursive-descent encoder over the IR grammar.
///
/// The stream opens with a three-word header, then a name index (one
/// `Global` plus an absolute payload offset per definition), then the
/// definition payloads. Offsets are back-patched once payload positions
/// are known, so the index can be written in a single forward pass.
///
/// Malformed IR (volatile accesses, member names with non-top owners,
/// `Next::Succ`/`Fail`) aborts the encode; see the module docs on
/// [`tags`] for what the wire can express.
pub struct BinarySerializer<'b> {
    buffer: &'b mut ByteBuffer,
}

impl<'b> BinarySerializer<'b> {
    pub fn new(buffer: &'b mut ByteBuffer) -> Self {
        BinarySerializer { buffer }
    }

    #[instrument(level = tracing::Level::TRACE, skip(self, defns), fields(defns = defns.len()))]
    pub fn serialize(&mut self, defns: &[Defn]) {
        self.buffer.put_i32(tags::MAGIC);
        self.buffer.put_i32(tags::COMPAT_VERSION);
        self.buffer.put_i32(tags::REVISION);

        // Index pass: names now, zero placeholders where offsets belong.
        let mut slots = Vec::with_capacity(defns.len());
        self.buffer.put_i32(defns.len() as i32);
        for defn in defns {
            self.put_global(defn.name());
            slots.push(self.buffer.position());
            self.buffer.put_i32(0);
        }

        // Payload pass.
        let mut offsets = Vec::with_capacity(defns.len());
        for defn in defns {
            offsets.push(self.buffer.position());
            self.put_defn(defn);
        }

        // Back-patch the index, then restore the cursor.
        let end = self.buffer.position();
        for (slot, offset) in slots.iter().zip(offsets.iter()) {
            self.buffer.set_position(*slot);
            self.buffer.put_i32(*offset as i32);
        }
        self.buffer.set_position(end);

        tracing::debug!(defns = defns.len(), bytes = end, "serialized module");
    }

    #[instrument(level = tracing::Level::TRACE, skip(self, defn), fields(name = %defn.name()))]
    fn put_defn(&mut self, defn: &Defn) {
        match defn {
            Defn::Var {
                attrs,
                name,
                ty,
                value,
            } => {
                self.buffer.put_i32(tags::VAR_DEFN);
                self.put_attrs(attrs);
                self.put_global(name);
                self.put_type(ty);
                self.put_val(value);
            }
            Defn::Const {
                attrs,
                name,
                ty,
                value,
            } => {
                self.buffer.put_i32(tags::CONST_DEFN);
                self.put_attrs(attrs);
                self.put_global(name);
                self.put_type(ty);
                self.put_val(value);
            }
            Defn::Declare { attrs, name, ty } => {
                self.buffer.put_i32(tags::DECLARE_DEFN);
                self.put_attrs(attrs);
                self.put_global(name);
                self.put_type(ty);
            }
            Defn::Define {
                attrs,
                name,
                ty,
                insts,
            } => {
                self.buffer.put_i32(tags::DEFINE_DEFN);
                self.put_attrs(attrs);
                self.put_global(name);
                self.put_type(ty);
                self.put_seq(insts, Self::put_inst);
            }
            Defn::Trait {
                attrs,
                name,
                traits,
            } => {
                self.buffer.put_i32(tags::TRAIT_DEFN);
                self.put_attrs(attrs);
                self.put_global(name);
                self.put_seq(traits, Self::put_global);
            }
            Defn::Class {
                attrs,
                name,
                parent,
                traits,
            } => {
                self.buffer.put_i32(tags::CLASS_DEFN);
                self.put_attrs(attrs);
                self.put_global(name);
                self.put_opt(parent.as_ref(), Self::put_global);
                self.put_seq(traits, Self::put_global);
            }
            Defn::Module {
                attrs,
                name,
                parent,
                traits,
            } => {
                self.buffer.put_i32(tags::MODULE_DEFN);
                self.put_attrs(attrs);
                self.put_global(name);
                self.put_opt(parent.as_ref(), Self::put_global);
                self.put_seq(traits, Self::put_global);
            }
        }
    }

    fn put_inst(&mut self, inst: &Inst) {
        match inst {
            Inst::None => self.buffer.put_i32(tags::NONE_INST),
            Inst::Label(name, params) => {
                self.buffer.put_i32(tags::LABEL_INST);
                self.put_local(*name);
                self.put_seq(params, Self::put_val);
            }
            Inst::Let(name, op, unwind) => match unwind {
                Next::None => {
                    self.buffer.put_i32(tags::LET_INST);
                    self.put_local(*name);
                    self.put_op(op);
                }
                unwind => {
                    self.buffer.put_i32(tags::LET_UNWIND_INST);
                    self.put_local(*name);
                    self.put_op(op);
                    self.put_next(unwind);
                }
            },
            Inst::Unreachable => self.buffer.put_i32(tags::UNREACHABLE_INST),
            Inst::Ret(value) => {
                self.buffer.put_i32(tags::RET_INST);
                self.put_val(value);
            }
            Inst::Jump(next) => {
                self.buffer.put_i32(tags::JUMP_INST);
                self.put_next(next);
            }
            Inst::If(cond, then_next, else_next) => {
                self.buffer.put_i32(tags::IF_INST);
                self.put_val(cond);
                self.put_next(then_next);
                self.put_next(else_next);
            }
            Inst::Switch(value, default, cases) => {
                self.buffer.put_i32(tags::SWITCH_INST);
                self.put_val(value);
                self.put_next(default);
                self.put_seq(cases, Self::put_next);
            }
            Inst::Throw(value, unwind) => {
                self.buffer.put_i32(tags::THROW_INST);
                self.put_val(value);
                self.put_next(unwind);
            }
        }
    }

    fn put_next(&mut self, next: &Next) {
        match next {
            Next::None => self.buffer.put_i32(tags::NONE_NEXT),
            Next::Unwind(name) => {
                self.buffer.put_i32(tags::UNWIND_NEXT);
                self.put_local(*name);
            }
            Next::Label(name, args) => {
                self.buffer.put_i32(tags::LABEL_NEXT);
                self.put_local(*name);
                self.put_seq(args, Self::put_val);
            }
            Next::Case(value, next) => {
                self.buffer.put_i32(tags::CASE_NEXT);
                self.put_val(value);
                self.put_next(next);
            }
            Next::Succ(_) | Next::Fail(_) => {
                panic!("succ/fail successors have no wire tags in revision {}: {next:?}",
                       tags::REVISION)
            }
        }
    }

    fn put_op(&mut self, op: &Op) {
        match op {
            Op::Call { ty, ptr, args } => {
                self.buffer.put_i32(tags::CALL_OP);
                self.put_type(ty);
                self.put_val(ptr);
                self.put_seq(args, Self::put_val);
            }
            Op::Load {
                ty,
                ptr,
                is_volatile,
            } => {
                assert!(!is_volatile, "volatile load has no wire representation");
                self.buffer.put_i32(tags::LOAD_OP);
                self.put_type(ty);
                self.put_val(ptr);
            }
            Op::Store {
                ty,
                value,
                ptr,
                is_volatile,
            } => {
                assert!(!is_volatile, "volatile store has no wire representation");
                self.buffer.put_i32(tags::STORE_OP);
                self.put_type(ty);
                self.put_val(value);
                self.put_val(ptr);
            }
            Op::Elem { ty, ptr, indexes } => {
                self.buffer.put_i32(tags::ELEM_OP);
                self.put_type(ty);
                self.put_val(ptr);
                self.put_seq(indexes, Self::put_val);
            }
            Op::Extract { aggr, indexes } => {
                self.buffer.put_i32(tags::EXTRACT_OP);
                self.put_val(aggr);
                self.put_ints(indexes);
            }
            Op::Insert {
                aggr,
                value,
                indexes,
            } => {
                self.buffer.put_i32(tags::INSERT_OP);
                self.put_val(aggr);
                self.put_val(value);
                self.put_ints(indexes);
            }
            Op::Stackalloc { ty, n } => {
                self.buffer.put_i32(tags::STACKALLOC_OP);
                self.put_type(ty);
                self.put_val(n);
            }
            Op::Bin { op, ty, l, r } => {
                self.buffer.put_i32(tags::BIN_OP);
                self.put_bin(*op);
                self.put_type(ty);
                self.put_val(l);
                self.put_val(r);
            }
            Op::Comp { op, ty, l, r } => {
                self.buffer.put_i32(tags::COMP_OP);
                self.put_comp(*op);
                self.put_type(ty);
                self.put_val(l);
                self.put_val(r);
            }
            Op::Conv { op, ty, value } => {
                self.buffer.put_i32(tags::CONV_OP);
                self.put_conv(*op);
                self.put_type(ty);
                self.put_val(value);
            }
            Op::Select {
                cond,
                then_val,
                else_val,
            } => {
                self.buffer.put_i32(tags::SELECT_OP);
                self.put_val(cond);
                self.put_val(then_val);
                self.put_val(else_val);
            }
            Op::Classalloc { name } => {
                self.buffer.put_i32(tags::CLASSALLOC_OP);
                self.put_global(name);
            }
            Op::Fieldload { ty, obj, name } => {
                self.buffer.put_i32(tags::FIELDLOAD_OP);
                self.put_type(ty);
                self.put_val(obj);
                self.put_global(name);
            }
            Op::Fieldstore {
                ty,
                obj,
                name,
                value,
            } => {
                self.buffer.put_i32(tags::FIELDSTORE_OP);
                self.put_type(ty);
                self.put_val(obj);
                self.put_global(name);
                self.put_val(value);
            }
            Op::Method { obj, sig } => {
                self.buffer.put_i32(tags::METHOD_OP);
                self.put_val(obj);
                self.put_sig(sig);
            }
            Op::Dynmethod { obj, sig } => {
                self.buffer.put_i32(tags::DYNMETHOD_OP);
                self.put_val(obj);
                self.put_sig(sig);
            }
            Op::Module { name } => {
                self.buffer.put_i32(tags::MODULE_OP);
                self.put_global(name);
            }
            Op::As { ty, obj } => {
                self.buffer.put_i32(tags::AS_OP);
                self.put_type(ty);
                self.put_val(obj);
            }
            Op::Is { ty, obj } => {
                self.buffer.put_i32(tags::IS_OP);
                self.put_type(ty);
                self.put_val(obj);
            }
            Op::Box { ty, obj } => {
                self.buffer.put_i32(tags::BOX_OP);
                self.put_type(ty);
                self.put_val(obj);
            }
            Op::Unbox { ty, obj } => {
                self.buffer.put_i32(tags::UNBOX_OP);
                self.put_type(ty);
                self.put_val(obj);
            }
            Op::Sizeof { ty } => {
                self.buffer.put_i32(tags::SIZEOF_OP);
                self.put_type(ty);
            }
            Op::Copy { value } => {
                self.buffer.put_i32(tags::COPY_OP);
                self.put_val(value);
            }
            Op::Closure { ty, fun, captures } => {
                self.buffer.put_i32(tags::CLOSURE_OP);
                self.put_type(ty);
                self.put_val(fun);
                self.put_seq(captures, Self::put_val);
            }
            Op::Var { ty } => {
                self.buffer.put_i32(tags::VAR_OP);
                self.put_type(ty);
            }
            Op::Varload { slot } => {
                self.buffer.put_i32(tags::VARLOAD_OP);
                self.put_val(slot);
            }
            Op::Varstore { slot, value } => {
                self.buffer.put_i32(tags::VARSTORE_OP);
                self.put_val(slot);
                self.put_val(value);
            }
            Op::Arrayalloc { ty, init } => {
                self.buffer.put_i32(tags::ARRAYALLOC_OP);
                self.put_type(ty);
                self.put_val(init);
            }
            Op::Arrayload { ty, arr, idx } => {
                self.buffer.put_i32(tags::ARRAYLOAD_OP);
                self.put_type(ty);
                self.put_val(arr);
                self.put_val(idx);
            }
            Op::Arraystore {
                ty,
                arr,
                idx,
                value,
            } => {
                self.buffer.put_i32(tags::ARRAYSTORE_OP);
                self.put_type(ty);
                self.put_val(arr);
                self.put_val(idx);
                self.put_val(value);
            }
            Op::Arraylength { arr } => {
                self.buffer.put_i32(tags::ARRAYLENGTH_OP);
                self.put_val(arr);
            }
        }
    }

    fn put_val(&mut self, val: &Val) {
        match val {
            Val::None => self.buffer.put_i32(tags::NONE_VAL),
            Val::True => self.buffer.put_i32(tags::TRUE_VAL),
            Val::False => self.buffer.put_i32(tags::FALSE_VAL),
            Val::Null => {
                // No tag of its own in this revision: goes out as
                // zero-of-ptr, and decodes as Zero(Ptr).
                self.buffer.put_i32(tags::ZERO_VAL);
                self.put_type(&Ty::Ptr);
            }
            Val::Zero(ty) => {
                self.buffer.put_i32(tags::ZERO_VAL);
                self.put_type(ty);
            }
            Val::Undef(ty) => {
                self.buffer.put_i32(tags::UNDEF_VAL);
                self.put_type(ty);
            }
            Val::Byte(v) => {
                self.buffer.put_i32(tags::BYTE_VAL);
                self.buffer.put_i8(*v);
            }
            Val::Short(v) => {
                self.buffer.put_i32(tags::SHORT_VAL);
                self.buffer.put_i16(*v);
            }
            Val::Int(v) => {
                self.buffer.put_i32(tags::INT_VAL);
                self.buffer.put_i32(*v);
            }
            Val::Long(v) => {
                self.buffer.put_i32(tags::LONG_VAL);
                self.buffer.put_i64(*v);
            }
            Val::Float(v) => {
                self.buffer.put_i32(tags::FLOAT_VAL);
                self.buffer.put_f32(*v);
            }
            Val::Double(v) => {
                self.buffer.put_i32(tags::DOUBLE_VAL);
                self.buffer.put_f64(*v);
            }
            Val::StructValue(values) => {
                self.buffer.put_i32(tags::STRUCT_VALUE_VAL);
                self.put_seq(values, Self::put_val);
            }
            Val::ArrayValue(ty, values) => {
                self.buffer.put_i32(tags::ARRAY_VALUE_VAL);
                self.put_type(ty);
                self.put_seq(values, Self::put_val);
            }
            Val::Chars(s) => {
                self.buffer.put_i32(tags::CHARS_VAL);
                self.put_string(s);
            }
            Val::Local(local, ty) => {
                self.buffer.put_i32(tags::LOCAL_VAL);
                self.put_local(*local);
                self.put_type(ty);
            }
            Val::Global(global, ty) => {
                self.buffer.put_i32(tags::GLOBAL_VAL);
                self.put_global(global);
                self.put_type(ty);
            }
            Val::Unit => self.buffer.put_i32(tags::UNIT_VAL),
            Val::Const(value) => {
                self.buffer.put_i32(tags::CONST_VAL);
                self.put_val(value);
            }
            Val::String(s) => {
                self.buffer.put_i32(tags::STRING_VAL);
                self.put_string(s);
            }
            Val::Virtual(v) => {
                self.buffer.put_i32(tags::VIRTUAL_VAL);
                self.buffer.put_i64(*v);
            }
        }
    }

    fn put_type(&mut self, ty: &Ty) {
        match ty {
            Ty::None => self.buffer.put_i32(tags::NONE_TYPE),
            Ty::Void => self.buffer.put_i32(tags::VOID_TYPE),
            Ty::Vararg => self.buffer.put_i32(tags::VARARG_TYPE),
            Ty::Ptr => self.buffer.put_i32(tags::PTR_TYPE),
            Ty::Bool => self.buffer.put_i32(tags::BOOL_TYPE),
            Ty::Char => self.buffer.put_i32(tags::CHAR_TYPE),
            Ty::Byte => self.buffer.put_i32(tags::BYTE_TYPE),
            Ty::UByte => self.buffer.put_i32(tags::UBYTE_TYPE),
            Ty::Short => self.buffer.put_i32(tags::SHORT_TYPE),
            Ty::UShort => self.buffer.put_i32(tags::USHORT_TYPE),
            Ty::Int => self.buffer.put_i32(tags::INT_TYPE),
            Ty::UInt => self.buffer.put_i32(tags::UINT_TYPE),
            Ty::Long => self.buffer.put_i32(tags::LONG_TYPE),
            Ty::ULong => self.buffer.put_i32(tags::ULONG_TYPE),
            Ty::Float => self.buffer.put_i32(tags::FLOAT_TYPE),
            Ty::Double => self.buffer.put_i32(tags::DOUBLE_TYPE),
            Ty::Null => self.buffer.put_i32(tags::NULL_TYPE),
            Ty::Nothing => self.buffer.put_i32(tags::NOTHING_TYPE),
            Ty::Virtual => self.buffer.put_i32(tags::VIRTUAL_TYPE),
            Ty::Unit => self.buffer.put_i32(tags::UNIT_TYPE),
            Ty::ArrayValue(ty, n) => {
                self.buffer.put_i32(tags::ARRAY_VALUE_TYPE);
                self.put_type(ty);
                self.buffer.put_i32(*n);
            }
            Ty::StructValue(tys) => {
                self.buffer.put_i32(tags::STRUCT_VALUE_TYPE);
                self.put_seq(tys, Self::put_type);
            }
            Ty::Function(args, ret) => {
                self.buffer.put_i32(tags::FUNCTION_TYPE);
                self.put_seq(args, Self::put_type);
                self.put_type(ret);
            }
            Ty::Var(ty) => {
                self.buffer.put_i32(tags::VAR_TYPE);
                self.put_type(ty);
            }
            Ty::Array(ty, nullable) => {
                self.buffer.put_i32(tags::ARRAY_TYPE);
                self.put_type(ty);
                self.put_bool(*nullable);
            }
            Ty::Ref {
                name,
                exact,
                nullable,
            } => {
                self.buffer.put_i32(tags::REF_TYPE);
                self.put_global(name);
                self.put_bool(*exact);
                self.put_bool(*nullable);
            }
        }
    }

    fn put_global(&mut self, global: &Global) {
        match global {
            Global::None => self.buffer.put_i32(tags::NONE_GLOBAL),
            Global::Top(id) => {
                self.buffer.put_i32(tags::TOP_GLOBAL);
                self.put_string(id);
            }
            Global::Member(owner, sig) => {
                let owner_id = match owner.as_ref() {
                    Global::Top(id) => id,
                    other => panic!("member owner must be a top-level name, got {other}"),
                };
                self.buffer.put_i32(tags::MEMBER_GLOBAL);
                self.put_string(owner_id);
                self.put_sig(sig);
            }
        }
    }

    fn put_sig(&mut self, sig: &Sig) {
        match sig {
            Sig::Field(id) => {
                self.buffer.put_i32(tags::FIELD_SIG);
                self.put_string(id);
            }
            Sig::Ctor(args) => {
                self.buffer.put_i32(tags::CTOR_SIG);
                self.put_seq(args, Self::put_type);
            }
            Sig::Method(id, args) => {
                self.buffer.put_i32(tags::METHOD_SIG);
                self.put_string(id);
                self.put_seq(args, Self::put_type);
            }
            Sig::Proxy(id, args) => {
                self.buffer.put_i32(tags::PROXY_SIG);
                self.put_string(id);
                self.put_seq(args, Self::put_type);
            }
            Sig::Extern(id) => {
                self.buffer.put_i32(tags::EXTERN_SIG);
                self.put_string(id);
            }
            Sig::Generated(id) => {
                self.buffer.put_i32(tags::GENERATED_SIG);
                self.put_string(id);
            }
            Sig::Duplicate(inner, args) => {
                self.buffer.put_i32(tags::DUPLICATE_SIG);
                self.put_sig(inner);
                self.put_seq(args, Self::put_type);
            }
        }
    }

    fn put_attrs(&mut self, attrs: &Attrs) {
        let seq = attrs.to_seq();
        self.put_seq(&seq, Self::put_attr);
    }

    fn put_attr(&mut self, attr: &Attr) {
        match attr {
            Attr::MayInline => self.buffer.put_i32(tags::MAY_INLINE_ATTR),
            Attr::InlineHint => self.buffer.put_i32(tags::INLINE_HINT_ATTR),
            Attr::NoInline => self.buffer.put_i32(tags::NO_INLINE_ATTR),
            Attr::AlwaysInline => self.buffer.put_i32(tags::ALWAYS_INLINE_ATTR),
            Attr::Dyn => self.buffer.put_i32(tags::DYN_ATTR),
            Attr::Stub => self.buffer.put_i32(tags::STUB_ATTR),
            Attr::Extern => self.buffer.put_i32(tags::EXTERN_ATTR),
            Attr::Link(name) => {
                self.buffer.put_i32(tags::LINK_ATTR);
                self.put_string(name);
            }
        }
    }

    fn put_bin(&mut self, bin: BinOp) {
        let tag = match bin {
            BinOp::Iadd => tags::IADD_BIN,
            BinOp::Fadd => tags::FADD_BIN,
            BinOp::Isub => tags::ISUB_BIN,
            BinOp::Fsub => tags::FSUB_BIN,
            BinOp::Imul => tags::IMUL_BIN,
            BinOp::Fmul => tags::FMUL_BIN,
            BinOp::Sdiv => tags::SDIV_BIN,
            BinOp::Udiv => tags::UDIV_BIN,
            BinOp::Fdiv => tags::FDIV_BIN,
            BinOp::Srem => tags::SREM_BIN,
            BinOp::Urem => tags::UREM_BIN,
            BinOp::Frem => tags::FREM_BIN,
            BinOp::Shl => tags::SHL_BIN,
            BinOp::Lshr => tags::LSHR_BIN,
            BinOp::Ashr => tags::ASHR_BIN,
            BinOp::And => tags::AND_BIN,
            BinOp::Or => tags::OR_BIN,
            BinOp::Xor => tags::XOR_BIN,
        };
        self.buffer.put_i32(tag);
    }

    fn put_comp(&mut self, comp: CompOp) {
        let tag = match comp {
            CompOp::Ieq => tags::IEQ_COMP,
            CompOp::Ine => tags::INE_COMP,
            CompOp::Ugt => tags::UGT_COMP,
            CompOp::Uge => tags::UGE_COMP,
            CompOp::Ult => tags::ULT_COMP,
            CompOp::Ule => tags::ULE_COMP,
            CompOp::Sgt => tags::SGT_COMP,
            CompOp::Sge => tags::SGE_COMP,
            CompOp::Slt => tags::SLT_COMP,
            CompOp::Sle => tags::SLE_COMP,
            CompOp::Feq => tags::FEQ_COMP,
            CompOp::Fne => tags::FNE_COMP,
            CompOp::Fgt => tags::FGT_COMP,
            CompOp::Fge => tags::FGE_COMP,
            CompOp::Flt => tags::FLT_COMP,
            CompOp::Fle => tags::FLE_COMP,
        };
        self.buffer.put_i32(tag);
    }

    fn put_conv(&mut self, conv: ConvOp) {
        let tag = match conv {
            ConvOp::Trunc => tags::TRUNC_CONV,
            ConvOp::Zext => tags::ZEXT_CONV,
            ConvOp::Sext => tags::SEXT_CONV,
            ConvOp::Fptrunc => tags::FPTRUNC_CONV,
            ConvOp::Fpext => tags::FPEXT_CONV,
            ConvOp::Fptoui => tags::FPTOUI_CONV,
            ConvOp::Fptosi => tags::FPTOSI_CONV,
            ConvOp::Uitofp => tags::UITOFP_CONV,
            ConvOp::Sitofp => tags::SITOFP_CONV,
            ConvOp::Ptrtoint => tags::PTRTOINT_CONV,
            ConvOp::Inttoptr => tags::INTTOPTR_CONV,
            ConvOp::Bitcast => tags::BITCAST_CONV,
        };
        self.buffer.put_i32(tag);
    }

    fn put_local(&mut self, local: Local) {
        self.buffer.put_i64(local.0);
    }

    fn put_string(&mut self, s: &str) {
        let bytes = s.as_bytes();
        self.buffer.put_i32(bytes.len() as i32);
        self.buffer.put_bytes(bytes);
    }

    fn put_bool(&mut self, v: bool) {
        self.buffer.put_u8(v as u8);
    }

    fn put_opt<T>(&mut self, value: Option<&T>, put: impl FnOnce(&mut Self, &T)) {
        match value {
            Some(value) => {
                self.buffer.put_u8(1);
                put(self, value);
            }
            None => self.buffer.put_u8(0),
        }
    }

    fn put_seq<T>(&mut self, items: &[T], mut put: impl FnMut(&mut Self, &T)) {
        self.buffer.put_i32(items.len() as i32);
        for item in items {
            put(self, item);
        }
    }

    fn put_ints(&mut self, items: &[i32]) {
        self.put_seq(items, |s, v| s.buffer.put_i32(*v));
    }
}
