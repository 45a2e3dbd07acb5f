//! Field descriptors, values, and the [`FieldSet`] bitset.

use std::fmt;

use crate::error::ValidationError;
use crate::group::Group;
use crate::id::FieldId;

/// Classification of a field's value type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FieldKind {
    /// Signed integer (Fortran `integer`).
    Integer,
    /// Double-precision float (Fortran `real(mytype)`).
    Float,
    /// Logical flag.
    Boolean,
    /// Quoted character string.
    String,
    /// Per-scalar list of floats, written as indexed entries (`sc(1)`, `sc(2)`, ...).
    FloatList,
}

impl FieldKind {
    /// Short lowercase name used in error messages.
    pub fn name(self) -> &'static str {
        match self {
            Self::Integer => "integer",
            Self::Float => "float",
            Self::Boolean => "boolean",
            Self::String => "string",
            Self::FloatList => "list of float",
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A concrete parameter value.
#[derive(Clone, Debug, PartialEq)]
pub enum FieldValue {
    /// Integer value.
    Int(i64),
    /// Floating-point value.
    Float(f64),
    /// Logical value.
    Bool(bool),
    /// String value (stored unquoted).
    Str(String),
    /// List of floats.
    FloatList(Vec<f64>),
}

impl FieldValue {
    /// The kind this value currently carries.
    pub fn kind(&self) -> FieldKind {
        match self {
            Self::Int(_) => FieldKind::Integer,
            Self::Float(_) => FieldKind::Float,
            Self::Bool(_) => FieldKind::Boolean,
            Self::Str(_) => FieldKind::String,
            Self::FloatList(_) => FieldKind::FloatList,
        }
    }

    /// Convert to `kind` where the conversion is lossless.
    ///
    /// Integers widen to floats; every other mismatch is returned unchanged
    /// in `Err` so the caller can report it. Integer list elements are
    /// widened when raw file values are converted, before this point.
    pub fn coerce_to(self, kind: FieldKind) -> Result<Self, Self> {
        match (self, kind) {
            (v, k) if v.kind() == k => Ok(v),
            (Self::Int(i), FieldKind::Float) => Ok(Self::Float(i as f64)),
            (v, _) => Err(v),
        }
    }

    /// Integer payload, if this is an [`FieldValue::Int`].
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(v) => Some(*v),
            _ => None,
        }
    }

    /// Float payload, if this is a [`FieldValue::Float`].
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Self::Float(v) => Some(*v),
            _ => None,
        }
    }

    /// Boolean payload, if this is a [`FieldValue::Bool`].
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(v) => Some(*v),
            _ => None,
        }
    }

    /// String payload, if this is a [`FieldValue::Str`].
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(v) => Some(v),
            _ => None,
        }
    }

    /// List payload, if this is a [`FieldValue::FloatList`].
    pub fn as_float_list(&self) -> Option<&[f64]> {
        match self {
            Self::FloatList(v) => Some(v),
            _ => None,
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(v) => write!(f, "{v}"),
            Self::Float(v) => write!(f, "{v:?}"),
            Self::Bool(v) => write!(f, "{v}"),
            Self::Str(v) => write!(f, "'{v}'"),
            Self::FloatList(v) => {
                write!(f, "[")?;
                for (i, x) in v.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{x:?}")?;
                }
                write!(f, "]")
            }
        }
    }
}

impl From<i64> for FieldValue {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<i32> for FieldValue {
    fn from(v: i32) -> Self {
        Self::Int(i64::from(v))
    }
}

impl From<u32> for FieldValue {
    fn from(v: u32) -> Self {
        Self::Int(i64::from(v))
    }
}

impl From<f64> for FieldValue {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<bool> for FieldValue {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<&str> for FieldValue {
    fn from(v: &str) -> Self {
        Self::Str(v.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(v: String) -> Self {
        Self::Str(v)
    }
}

impl From<Vec<f64>> for FieldValue {
    fn from(v: Vec<f64>) -> Self {
        Self::FloatList(v)
    }
}

/// Inclusive numeric bounds. Either side may be open.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    /// Smallest accepted value, if any.
    pub min: Option<f64>,
    /// Largest accepted value, if any.
    pub max: Option<f64>,
}

impl Bounds {
    /// Whether `x` lies within the bounds.
    pub fn contains(&self, x: f64) -> bool {
        self.min.is_none_or(|lo| x >= lo) && self.max.is_none_or(|hi| x <= hi)
    }
}

/// Whether callers may assign a field directly.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldRole {
    /// Assigned by callers, files, or rules.
    Input,
    /// Maintained by the constraint engine only.
    Derived,
}

/// Static declaration of one parameter.
///
/// Descriptors are immutable once the registry is built. A field with
/// `group == None` is auxiliary: it participates in the constraint engine but
/// is never written to a namelist file.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldDescriptor {
    /// Namelist key (case-sensitive, e.g. `"nclxS1"`).
    pub name: &'static str,
    /// Value type.
    pub kind: FieldKind,
    /// Value a fresh parameter set starts with.
    pub default: FieldValue,
    /// Optional numeric bounds (integers and floats only).
    pub bounds: Option<Bounds>,
    /// Namelist section, or `None` for auxiliary fields.
    pub group: Option<Group>,
    /// Input or derived.
    pub role: FieldRole,
    /// Human-readable description, written as a trailing comment.
    pub description: &'static str,
}

impl FieldDescriptor {
    /// Declare an input field; the kind is taken from `default`.
    pub fn new(
        name: &'static str,
        default: impl Into<FieldValue>,
        group: Option<Group>,
        description: &'static str,
    ) -> Self {
        let default = default.into();
        Self {
            name,
            kind: default.kind(),
            default,
            bounds: None,
            group,
            role: FieldRole::Input,
            description,
        }
    }

    /// Restrict to `[min, max]`.
    pub fn within(mut self, min: f64, max: f64) -> Self {
        self.bounds = Some(Bounds {
            min: Some(min),
            max: Some(max),
        });
        self
    }

    /// Restrict to `[min, +inf)`.
    pub fn at_least(mut self, min: f64) -> Self {
        self.bounds = Some(Bounds {
            min: Some(min),
            max: None,
        });
        self
    }

    /// Mark as derived (engine-maintained, read-only to callers).
    pub fn derived(mut self) -> Self {
        self.role = FieldRole::Derived;
        self
    }

    /// Whether the field is written to namelist files.
    pub fn is_grouped(&self) -> bool {
        self.group.is_some()
    }

    /// Whether the field is engine-maintained.
    pub fn is_derived(&self) -> bool {
        self.role == FieldRole::Derived
    }

    /// Coerce `value` to this field's kind and check finiteness and bounds.
    ///
    /// Returns the value as it would be stored.
    pub fn check(&self, value: FieldValue) -> Result<FieldValue, ValidationError> {
        let value = value
            .coerce_to(self.kind)
            .map_err(|v| ValidationError::KindMismatch {
                field: self.name.to_string(),
                expected: self.kind,
                found: v.kind(),
            })?;
        match &value {
            FieldValue::Int(i) => self.check_bounds(*i as f64)?,
            FieldValue::Float(x) => {
                self.check_finite(*x)?;
                self.check_bounds(*x)?;
            }
            FieldValue::FloatList(xs) => {
                for &x in xs {
                    self.check_finite(x)?;
                }
            }
            FieldValue::Bool(_) | FieldValue::Str(_) => {}
        }
        Ok(value)
    }

    fn check_finite(&self, x: f64) -> Result<(), ValidationError> {
        if x.is_finite() {
            Ok(())
        } else {
            Err(ValidationError::NonFinite {
                field: self.name.to_string(),
                value: x,
            })
        }
    }

    fn check_bounds(&self, x: f64) -> Result<(), ValidationError> {
        match self.bounds {
            Some(b) if !b.contains(x) => Err(ValidationError::OutOfBounds {
                field: self.name.to_string(),
                value: x,
                min: b.min,
                max: b.max,
            }),
            _ => Ok(()),
        }
    }
}

/// A set of field IDs implemented as a dynamically-sized bitset.
///
/// Used by rules to declare which fields trigger them and which they write,
/// and by the engine to track fields that are temporarily not editable.
#[derive(Clone, Debug, Default)]
pub struct FieldSet {
    bits: Vec<u64>,
}

impl FieldSet {
    const BITS_PER_WORD: usize = 64;

    /// Create an empty field set.
    pub fn empty() -> Self {
        Self { bits: Vec::new() }
    }

    /// Insert a field ID into the set.
    pub fn insert(&mut self, field: FieldId) {
        let word = field.index() / Self::BITS_PER_WORD;
        let bit = field.index() % Self::BITS_PER_WORD;
        if word >= self.bits.len() {
            self.bits.resize(word + 1, 0);
        }
        self.bits[word] |= 1u64 << bit;
    }

    /// Remove a field ID from the set. Absent IDs are ignored.
    pub fn remove(&mut self, field: FieldId) {
        let word = field.index() / Self::BITS_PER_WORD;
        let bit = field.index() % Self::BITS_PER_WORD;
        if let Some(w) = self.bits.get_mut(word) {
            *w &= !(1u64 << bit);
        }
    }

    /// Check whether the set contains a field ID.
    pub fn contains(&self, field: FieldId) -> bool {
        let word = field.index() / Self::BITS_PER_WORD;
        let bit = field.index() % Self::BITS_PER_WORD;
        word < self.bits.len() && (self.bits[word] & (1u64 << bit)) != 0
    }

    /// Returns `true` if the set contains no fields.
    pub fn is_empty(&self) -> bool {
        self.bits.iter().all(|&w| w == 0)
    }

    /// Returns the number of fields in the set.
    pub fn len(&self) -> usize {
        self.bits.iter().map(|w| w.count_ones() as usize).sum()
    }

    /// Iterate over the field IDs in the set, in ascending order.
    pub fn iter(&self) -> FieldSetIter<'_> {
        FieldSetIter {
            bits: &self.bits,
            word_idx: 0,
            bit_idx: 0,
        }
    }
}

impl PartialEq for FieldSet {
    fn eq(&self, other: &Self) -> bool {
        let max_len = self.bits.len().max(other.bits.len());
        (0..max_len).all(|i| {
            self.bits.get(i).copied().unwrap_or(0) == other.bits.get(i).copied().unwrap_or(0)
        })
    }
}

impl Eq for FieldSet {}

impl FromIterator<FieldId> for FieldSet {
    fn from_iter<I: IntoIterator<Item = FieldId>>(iter: I) -> Self {
        let mut set = Self::empty();
        for field in iter {
            set.insert(field);
        }
        set
    }
}

impl<'a> IntoIterator for &'a FieldSet {
    type Item = FieldId;
    type IntoIter = FieldSetIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over field IDs in a [`FieldSet`], yielding IDs in ascending order.
pub struct FieldSetIter<'a> {
    bits: &'a [u64],
    word_idx: usize,
    bit_idx: usize,
}

impl Iterator for FieldSetIter<'_> {
    type Item = FieldId;

    fn next(&mut self) -> Option<Self::Item> {
        while self.word_idx < self.bits.len() {
            let word = self.bits[self.word_idx];
            while self.bit_idx < 64 {
                let bit = self.bit_idx;
                self.bit_idx += 1;
                if word & (1u64 << bit) != 0 {
                    return Some(FieldId((self.word_idx * 64 + bit) as u32));
                }
            }
            self.word_idx += 1;
            self.bit_idx = 0;
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn arb_field_set() -> impl Strategy<Value = FieldSet> {
        prop::collection::vec(0u32..128, 0..32)
            .prop_map(|ids| ids.into_iter().map(FieldId).collect::<FieldSet>())
    }

    fn float_field() -> FieldDescriptor {
        FieldDescriptor::new("xlx", 1.0, Some(Group::BasicParam), "Domain size").at_least(0.0)
    }

    #[test]
    fn int_widens_to_float() {
        let v = FieldValue::Int(18).coerce_to(FieldKind::Float);
        assert_eq!(v, Ok(FieldValue::Float(18.0)));
    }

    #[test]
    fn float_does_not_narrow_to_int() {
        let v = FieldValue::Float(2.0).coerce_to(FieldKind::Integer);
        assert_eq!(v, Err(FieldValue::Float(2.0)));
    }

    #[test]
    fn check_rejects_negative_length() {
        match float_field().check(FieldValue::Float(-1.0)) {
            Err(ValidationError::OutOfBounds { field, .. }) => assert_eq!(field, "xlx"),
            other => panic!("expected OutOfBounds, got {other:?}"),
        }
    }

    #[test]
    fn check_rejects_nan() {
        match float_field().check(FieldValue::Float(f64::NAN)) {
            Err(ValidationError::NonFinite { .. }) => {}
            other => panic!("expected NonFinite, got {other:?}"),
        }
    }

    #[test]
    fn check_rejects_wrong_kind() {
        match float_field().check(FieldValue::Bool(true)) {
            Err(ValidationError::KindMismatch {
                expected, found, ..
            }) => {
                assert_eq!(expected, FieldKind::Float);
                assert_eq!(found, FieldKind::Boolean);
            }
            other => panic!("expected KindMismatch, got {other:?}"),
        }
    }

    #[test]
    fn remove_clears_membership() {
        let mut set: FieldSet = [FieldId(3), FieldId(70)].into_iter().collect();
        set.remove(FieldId(70));
        set.remove(FieldId(500));
        assert!(set.contains(FieldId(3)));
        assert!(!set.contains(FieldId(70)));
        assert_eq!(set.len(), 1);
    }

    proptest! {
        #[test]
        fn collected_ids_are_members(ids in prop::collection::vec(0u32..200, 0..32)) {
            let set: FieldSet = ids.iter().map(|&i| FieldId(i)).collect();
            for &i in &ids {
                prop_assert!(set.contains(FieldId(i)));
            }
            prop_assert!(set.iter().all(|f| ids.contains(&f.0)));
        }

        #[test]
        fn len_matches_iter_count(a in arb_field_set()) {
            prop_assert_eq!(a.len(), a.iter().count());
        }

        #[test]
        fn in_bounds_floats_pass_check(x in 0.0f64..1e6) {
            prop_assert_eq!(float_field().check(FieldValue::Float(x)), Ok(FieldValue::Float(x)));
        }
    }
}
