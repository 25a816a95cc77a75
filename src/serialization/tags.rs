//! Wire tag registry.
//!
//! Every variant of every IR sum type gets a distinct `i32` discriminant
//! here, and nowhere else. The values are a contract shared with the
//! decoder: reusing or reordering one is a breaking change and requires a
//! `REVISION` bump. Families start at multiples of 32 so tags stay
//! globally unique with room for additions.

pub const MAGIC: i32 = 0x2E53_4952; // ".SIR"
pub const COMPAT_VERSION: i32 = 1;
pub const REVISION: i32 = 3;

// ── Attr ────────────────────────────────────────────────────────────────
const ATTR: i32 = 0;
pub const MAY_INLINE_ATTR: i32 = ATTR;
pub const INLINE_HINT_ATTR: i32 = ATTR + 1;
pub const NO_INLINE_ATTR: i32 = ATTR + 2;
pub const ALWAYS_INLINE_ATTR: i32 = ATTR + 3;
pub const DYN_ATTR: i32 = ATTR + 4;
pub const STUB_ATTR: i32 = ATTR + 5;
pub const EXTERN_ATTR: i32 = ATTR + 6;
pub const LINK_ATTR: i32 = ATTR + 7;

// ── Bin ─────────────────────────────────────────────────────────────────
const BIN: i32 = 32;
pub const IADD_BIN: i32 = BIN;
pub const FADD_BIN: i32 = BIN + 1;
pub const ISUB_BIN: i32 = BIN + 2;
pub const FSUB_BIN: i32 = BIN + 3;
pub const IMUL_BIN: i32 = BIN + 4;
pub const FMUL_BIN: i32 = BIN + 5;
pub const SDIV_BIN: i32 = BIN + 6;
pub const UDIV_BIN: i32 = BIN + 7;
pub const FDIV_BIN: i32 = BIN + 8;
pub const SREM_BIN: i32 = BIN + 9;
pub const UREM_BIN: i32 = BIN + 10;
pub const FREM_BIN: i32 = BIN + 11;
pub const SHL_BIN: i32 = BIN + 12;
pub const LSHR_BIN: i32 = BIN + 13;
pub const ASHR_BIN: i32 = BIN + 14;
pub const AND_BIN: i32 = BIN + 15;
pub const OR_BIN: i32 = BIN + 16;
pub const XOR_BIN: i32 = BIN + 17;

// ── Comp ────────────────────────────────────────────────────────────────
const COMP: i32 = 64;
pub const IEQ_COMP: i32 = COMP;
pub const INE_COMP: i32 = COMP + 1;
pub const UGT_COMP: i32 = COMP + 2;
pub const UGE_COMP: i32 = COMP + 3;
pub const ULT_COMP: i32 = COMP + 4;
pub const ULE_COMP: i32 = COMP + 5;
pub const SGT_COMP: i32 = COMP + 6;
pub const SGE_COMP: i32 = COMP + 7;
pub const SLT_COMP: i32 = COMP + 8;
pub const SLE_COMP: i32 = COMP + 9;
pub const FEQ_COMP: i32 = COMP + 10;
pub const FNE_COMP: i32 = COMP + 11;
pub const FGT_COMP: i32 = COMP + 12;
pub const FGE_COMP: i32 = COMP + 13;
pub const FLT_COMP: i32 = COMP + 14;
pub const FLE_COMP: i32 = COMP + 15;

// ── Conv ────────────────────────────────────────────────────────────────
const CONV: i32 = 96;
pub const TRUNC_CONV: i32 = CONV;
pub const ZEXT_CONV: i32 = CONV + 1;
pub const SEXT_CONV: i32 = CONV + 2;
pub const FPTRUNC_CONV: i32 = CONV + 3;
pub const FPEXT_CONV: i32 = CONV + 4;
pub const FPTOUI_CONV: i32 = CONV + 5;
pub const FPTOSI_CONV: i32 = CONV + 6;
pub const UITOFP_CONV: i32 = CONV + 7;
pub const SITOFP_CONV: i32 = CONV + 8;
pub const PTRTOINT_CONV: i32 = CONV + 9;
pub const INTTOPTR_CONV: i32 = CONV + 10;
pub const BITCAST_CONV: i32 = CONV + 11;

// ── Defn ────────────────────────────────────────────────────────────────
const DEFN: i32 = 128;
pub const VAR_DEFN: i32 = DEFN;
pub const CONST_DEFN: i32 = DEFN + 1;
pub const DECLARE_DEFN: i32 = DEFN + 2;
pub const DEFINE_DEFN: i32 = DEFN + 3;
pub const TRAIT_DEFN: i32 = DEFN + 4;
pub const CLASS_DEFN: i32 = DEFN + 5;
pub const MODULE_DEFN: i32 = DEFN + 6;

// ── Global ──────────────────────────────────────────────────────────────
const GLOBAL: i32 = 160;
pub const NONE_GLOBAL: i32 = GLOBAL;
pub const TOP_GLOBAL: i32 = GLOBAL + 1;
pub const MEMBER_GLOBAL: i32 = GLOBAL + 2;

// ── Sig ─────────────────────────────────────────────────────────────────
const SIG: i32 = 192;
pub const FIELD_SIG: i32 = SIG;
pub const CTOR_SIG: i32 = SIG + 1;
pub const METHOD_SIG: i32 = SIG + 2;
pub const PROXY_SIG: i32 = SIG + 3;
pub const EXTERN_SIG: i32 = SIG + 4;
pub const GENERATED_SIG: i32 = SIG + 5;
pub const DUPLICATE_SIG: i32 = SIG + 6;

// ── Type ────────────────────────────────────────────────────────────────
const TYPE: i32 = 224;
pub const NONE_TYPE: i32 = TYPE;
pub const VOID_TYPE: i32 = TYPE + 1;
pub const VARARG_TYPE: i32 = TYPE + 2;
pub const PTR_TYPE: i32 = TYPE + 3;
pub const BOOL_TYPE: i32 = TYPE + 4;
pub const CHAR_TYPE: i32 = TYPE + 5;
pub const BYTE_TYPE: i32 = TYPE + 6;
pub const UBYTE_TYPE: i32 = TYPE + 7;
pub const SHORT_TYPE: i32 = TYPE + 8;
pub const USHORT_TYPE: i32 = TYPE + 9;
pub const INT_TYPE: i32 = TYPE + 10;
pub const UINT_TYPE: i32 = TYPE + 11;
pub const LONG_TYPE: i32 = TYPE + 12;
pub const ULONG_TYPE: i32 = TYPE + 13;
pub const FLOAT_TYPE: i32 = TYPE + 14;
pub const DOUBLE_TYPE: i32 = TYPE + 15;
pub const NULL_TYPE: i32 = TYPE + 16;
pub const NOTHING_TYPE: i32 = TYPE + 17;
pub const VIRTUAL_TYPE: i32 = TYPE + 18;
pub const UNIT_TYPE: i32 = TYPE + 19;
pub const ARRAY_VALUE_TYPE: i32 = TYPE + 20;
pub const STRUCT_VALUE_TYPE: i32 = TYPE + 21;
pub const FUNCTION_TYPE: i32 = TYPE + 22;
pub const VAR_TYPE: i32 = TYPE + 23;
pub const ARRAY_TYPE: i32 = TYPE + 24;
pub const REF_TYPE: i32 = TYPE + 25;

// ── Val ─────────────────────────────────────────────────────────────────
// Val.Null has no tag of its own: it shares ZERO_VAL (encoded as
// zero-of-ptr). Giving it one is a wire change gated on REVISION.
const VAL: i32 = 256;
pub const NONE_VAL: i32 = VAL;
pub const TRUE_VAL: i32 = VAL + 1;
pub const FALSE_VAL: i32 = VAL + 2;
pub const ZERO_VAL: i32 = VAL + 3;
pub const UNDEF_VAL: i32 = VAL + 4;
pub const BYTE_VAL: i32 = VAL + 5;
pub const SHORT_VAL: i32 = VAL + 6;
pub const INT_VAL: i32 = VAL + 7;
pub const LONG_VAL: i32 = VAL + 8;
pub const FLOAT_VAL: i32 = VAL + 9;
pub const DOUBLE_VAL: i32 = VAL + 10;
pub const STRUCT_VALUE_VAL: i32 = VAL + 11;
pub const ARRAY_VALUE_VAL: i32 = VAL + 12;
pub const CHARS_VAL: i32 = VAL + 13;
pub const LOCAL_VAL: i32 = VAL + 14;
pub const GLOBAL_VAL: i32 = VAL + 15;
pub const UNIT_VAL: i32 = VAL + 16;
pub const CONST_VAL: i32 = VAL + 17;
pub const STRING_VAL: i32 = VAL + 18;
pub const VIRTUAL_VAL: i32 = VAL + 19;

// ── Inst ────────────────────────────────────────────────────────────────
const INST: i32 = 288;
pub const NONE_INST: i32 = INST;
pub const LABEL_INST: i32 = INST + 1;
pub const LET_INST: i32 = INST + 2;
pub const LET_UNWIND_INST: i32 = INST + 3;
pub const UNREACHABLE_INST: i32 = INST + 4;
pub const RET_INST: i32 = INST + 5;
pub const JUMP_INST: i32 = INST + 6;
pub const IF_INST: i32 = INST + 7;
pub const SWITCH_INST: i32 = INST + 8;
pub const THROW_INST: i32 = INST + 9;

// ── Next ────────────────────────────────────────────────────────────────
// Next.Succ and Next.Fail have no tags; the serializer rejects them.
const NEXT: i32 = 320;
pub const NONE_NEXT: i32 = NEXT;
pub const UNWIND_NEXT: i32 = NEXT + 1;
pub const LABEL_NEXT: i32 = NEXT + 2;
pub const CASE_NEXT: i32 = NEXT + 3;

// ── Op ──────────────────────────────────────────────────────────────────
const OP: i32 = 352;
pub const CALL_OP: i32 = OP;
pub const LOAD_OP: i32 = OP + 1;
pub const STORE_OP: i32 = OP + 2;
pub const ELEM_OP: i32 = OP + 3;
pub const EXTRACT_OP: i32 = OP + 4;
pub const INSERT_OP: i32 = OP + 5;
pub const STACKALLOC_OP: i32 = OP + 6;
pub const BIN_OP: i32 = OP + 7;
pub const COMP_OP: i32 = OP + 8;
pub const CONV_OP: i32 = OP + 9;
pub const SELECT_OP: i32 = OP + 10;
pub const CLASSALLOC_OP: i32 = OP + 11;
pub const FIELDLOAD_OP: i32 = OP + 12;
pub const FIELDSTORE_OP: i32 = OP + 13;
pub const METHOD_OP: i32 = OP + 14;
pub const DYNMETHOD_OP: i32 = OP + 15;
pub const MODULE_OP: i32 = OP + 16;
pub const AS_OP: i32 = OP + 17;
pub const IS_OP: i32 = OP + 18;
pub const BOX_OP: i32 = OP + 19;
pub const UNBOX_OP: i32 = OP + 20;
pub const SIZEOF_OP: i32 = OP + 21;
pub const COPY_OP: i32 = OP + 22;
pub const CLOSURE_OP: i32 = OP + 23;
pub const VAR_OP: i32 = OP + 24;
pub const VARLOAD_OP: i32 = OP + 25;
pub const VARSTORE_OP: i32 = OP + 26;
pub const ARRAYALLOC_OP: i32 = OP + 27;
pub const ARRAYLOAD_OP: i32 = OP + 28;
pub const ARRAYSTORE_OP: i32 = OP + 29;
pub const ARRAYLENGTH_OP: i32 = OP + 30;
