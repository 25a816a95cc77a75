use std::fmt::Display;

use rustc_hash::FxHashSet;

/// A single definition attribute.
///
/// The derived `Ord` is the canonical attribute order: variant declaration
/// order, then link name. [`Attrs::to_seq`] relies on it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Attr {
    MayInline,
    InlineHint,
    NoInline,
    AlwaysInline,
    Dyn,
    Stub,
    Extern,
    Link(String),
}

impl Display for Attr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Attr::MayInline => write!(f, "mayinline"),
            Attr::InlineHint => write!(f, "inlinehint"),
            Attr::NoInline => write!(f, "noinline"),
            Attr::AlwaysInline => write!(f, "alwaysinline"),
            Attr::Dyn => write!(f, "dyn"),
            Attr::Stub => write!(f, "stub"),
            Attr::Extern => write!(f, "extern"),
            Attr::Link(name) => write!(f, "link({name})"),
        }
    }
}

/// The attribute set of a definition.
///
/// The model is unordered; equality is set equality. Consumers that need a
/// sequence go through [`Attrs::to_seq`], which always produces the same
/// order for the same set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attrs {
    items: FxHashSet<Attr>,
}

impl Attrs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, attr: Attr) -> bool {
        self.items.insert(attr)
    }

    pub fn contains(&self, attr: &Attr) -> bool {
        self.items.contains(attr)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The set in canonical order.
    pub fn to_seq(&self) -> Vec<Attr> {
        let mut seq: Vec<Attr> = self.items.iter().cloned().collect();
        seq.sort();
        seq
    }
}

impl From<Vec<Attr>> for Attrs {
    fn from(value: Vec<Attr>) -> Self {
        value.into_iter().collect()
    }
}

impl FromIterator<Attr> for Attrs {
    fn from_iter<I: IntoIterator<Item = Attr>>(iter: I) -> Self {
        Attrs {
            items: iter.into_iter().collect(),
        }
    }
}
