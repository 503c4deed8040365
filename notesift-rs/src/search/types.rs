//! Search configuration model.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::marker::PhantomData;

/// A member of a [`FlagSet`].
pub trait Flag: Copy + Eq + fmt::Debug + 'static {
    /// Every variant, in declaration order.
    const ALL: &'static [Self];

    /// Single-bit mask for this variant.
    fn bit(self) -> u8;
}

/// A set of enum variants backed by a bit mask.
///
/// Serializes as a list of variant names.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(
    from = "Vec<T>",
    into = "Vec<T>",
    bound(serialize = "T: Serialize", deserialize = "T: Deserialize<'de>")
)]
pub struct FlagSet<T: Flag> {
    bits: u8,
    _marker: PhantomData<T>,
}

impl<T: Flag> FlagSet<T> {
    /// The empty set.
    pub const fn empty() -> Self {
        Self {
            bits: 0,
            _marker: PhantomData,
        }
    }

    /// A set holding every variant.
    pub fn all() -> Self {
        T::ALL.iter().copied().collect()
    }

    /// Return a copy of this set with `flag` added.
    pub fn with(mut self, flag: T) -> Self {
        self.insert(flag);
        self
    }

    pub fn insert(&mut self, flag: T) {
        self.bits |= flag.bit();
    }

    /// Check whether `flag` is a member.
    pub fn contains(&self, flag: T) -> bool {
        self.bits & flag.bit() != 0
    }

    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    pub fn len(&self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Members in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = T> + '_ {
        T::ALL.iter().copied().filter(|f| self.contains(*f))
    }

    /// The first member in declaration order.
    pub fn first(&self) -> Option<T> {
        self.iter().next()
    }
}

impl<T: Flag> Default for FlagSet<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T: Flag> fmt::Debug for FlagSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T: Flag> From<T> for FlagSet<T> {
    fn from(flag: T) -> Self {
        Self::empty().with(flag)
    }
}

impl<T: Flag> FromIterator<T> for FlagSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Self::empty();
        for flag in iter {
            set.insert(flag);
        }
        set
    }
}

impl<T: Flag> From<Vec<T>> for FlagSet<T> {
    fn from(flags: Vec<T>) -> Self {
        flags.into_iter().collect()
    }
}

impl<T: Flag> From<FlagSet<T>> for Vec<T> {
    fn from(set: FlagSet<T>) -> Self {
        set.iter().collect()
    }
}

/// Which documents are eligible as candidates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Scope {
    CurrentNote,
    OpenedNotes,
    CurrentFolder,
    CurrentNotebook,
    AllNotebooks,
}

impl Flag for Scope {
    const ALL: &'static [Self] = &[
        Scope::CurrentNote,
        Scope::OpenedNotes,
        Scope::CurrentFolder,
        Scope::CurrentNotebook,
        Scope::AllNotebooks,
    ];

    fn bit(self) -> u8 {
        1 << (self as u8)
    }
}

/// Which attribute of a candidate is matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Object {
    Name,
    Content,
    Outline,
    Tag,
}

impl Flag for Object {
    const ALL: &'static [Self] = &[Object::Name, Object::Content, Object::Outline, Object::Tag];

    fn bit(self) -> u8 {
        1 << (self as u8)
    }
}

/// Which kind of entity is eligible as a candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Target {
    Note,
    Folder,
    Notebook,
}

impl Flag for Target {
    const ALL: &'static [Self] = &[Target::Note, Target::Folder, Target::Notebook];

    fn bit(self) -> u8 {
        1 << (self as u8)
    }
}

/// Matching options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SearchOption {
    CaseSensitive,
    WholeWordOnly,
    RegularExpression,
}

impl Flag for SearchOption {
    const ALL: &'static [Self] = &[
        SearchOption::CaseSensitive,
        SearchOption::WholeWordOnly,
        SearchOption::RegularExpression,
    ];

    fn bit(self) -> u8 {
        1 << (self as u8)
    }
}

/// Engine that executes the search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Engine {
    #[default]
    Internal,
}

pub type ScopeSet = FlagSet<Scope>;
pub type ObjectSet = FlagSet<Object>;
pub type TargetSet = FlagSet<Target>;
pub type OptionSet = FlagSet<SearchOption>;

/// One search query. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    scope: ScopeSet,
    object: ObjectSet,
    target: TargetSet,
    engine: Engine,
    options: OptionSet,
    keyword: String,
}

impl SearchConfig {
    /// Create a config searching note names in the current note.
    pub fn new(keyword: impl Into<String>) -> Self {
        Self {
            scope: Scope::CurrentNote.into(),
            object: Object::Name.into(),
            target: Target::Note.into(),
            engine: Engine::Internal,
            options: OptionSet::empty(),
            keyword: keyword.into(),
        }
    }

    pub fn with_scope(mut self, scope: impl Into<ScopeSet>) -> Self {
        self.scope = scope.into();
        self
    }

    pub fn with_object(mut self, object: impl Into<ObjectSet>) -> Self {
        self.object = object.into();
        self
    }

    pub fn with_target(mut self, target: impl Into<TargetSet>) -> Self {
        self.target = target.into();
        self
    }

    pub fn with_options(mut self, options: impl Into<OptionSet>) -> Self {
        self.options = options.into();
        self
    }

    pub fn scope(&self) -> ScopeSet {
        self.scope
    }

    pub fn object(&self) -> ObjectSet {
        self.object
    }

    pub fn target(&self) -> TargetSet {
        self.target
    }

    pub fn engine(&self) -> Engine {
        self.engine
    }

    pub fn options(&self) -> OptionSet {
        self.options
    }

    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    /// The scope a run uses. Only one scope is searched per run.
    pub fn primary_scope(&self) -> Option<Scope> {
        self.scope.first()
    }

    pub fn has_option(&self, option: SearchOption) -> bool {
        self.options.contains(option)
    }
}

/// The matching strategy a run applies to every candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MatchStrategy {
    Name,
    Outline,
    Content,
    Tag,
}

impl MatchStrategy {
    /// Pick the strategy for an object set: Name, then Outline, then Content, then Tag.
    pub fn resolve(object: ObjectSet) -> Option<Self> {
        [
            (Object::Name, MatchStrategy::Name),
            (Object::Outline, MatchStrategy::Outline),
            (Object::Content, MatchStrategy::Content),
            (Object::Tag, MatchStrategy::Tag),
        ]
        .into_iter()
        .find(|(o, _)| object.contains(*o))
        .map(|(_, strategy)| strategy)
    }
}
