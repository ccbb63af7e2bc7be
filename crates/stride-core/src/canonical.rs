//! # Canonical Serialization — Deterministic Byte Production
//!
//! This module defines [`canonicalize`], [`stable_stringify`], and
//! [`CanonicalBytes`] — the construction path for every byte sequence that
//! feeds an inputs-hash computation in the Stride stack.
//!
//! ## Determinism Invariant
//!
//! Two payloads that are deep-equal as JSON values must produce identical
//! canonical bytes regardless of object key insertion order. Array element
//! order is caller-determined and semantically significant (ordered marks,
//! evidence lists), so arrays are never reordered.
//!
//! The `CanonicalBytes` newtype has a private inner field. The only ways to
//! construct it are [`CanonicalBytes::new`] and [`CanonicalBytes::from_value`],
//! both of which run the full canonicalization pipeline. Any function that
//! computes a digest must accept `&CanonicalBytes`, so a digest over
//! non-canonical bytes is a compile error, not a code-review finding.
//!
//! ## Cross-Language Compatibility
//!
//! Serialization uses `serde_jcs` for RFC 8785 (JSON Canonicalization Scheme)
//! output: sorted keys, compact separators, UTF-8 text, and ES6
//! shortest-round-trip number formatting. This matches what
//! `JSON.stringify` produces in the JavaScript services that consume the
//! same hashes, so `15.12` renders as `15.12` and `1.0` as `1` on both
//! sides.
//!
//! Non-finite numbers have no JSON representation. `serde_json::Value`
//! cannot hold them, and the typed [`CanonicalBytes::new`] path runs a
//! validation pass over the value that rejects them before serialization —
//! they fail fast, never degrade to `null`. The pre-pass is required
//! because the underlying `serde_json` serializer writes `null` for
//! non-finite floats, after which the coercion is undetectable.

use serde::ser;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::CanonicalizationError;

/// Maximum nesting depth accepted by [`canonicalize`].
///
/// Payloads hashed here are normally small trusted bundles a few levels
/// deep; the guard exists so a pathological or hostile payload fails with a
/// [`CanonicalizationError::DepthExceeded`] instead of overflowing the stack.
pub const MAX_CANONICAL_DEPTH: usize = 128;

/// Bytes produced exclusively by the canonical JSON pipeline.
///
/// # Invariants
///
/// - The only constructors are [`CanonicalBytes::new`] and
///   [`CanonicalBytes::from_value`].
/// - Object keys are sorted; array order is preserved.
/// - The bytes are the UTF-8 encoding of an RFC 8785 JSON text.
///
/// The inner `Vec<u8>` is private, so downstream code cannot smuggle
/// non-canonical bytes into a digest computation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CanonicalBytes(Vec<u8>);

impl CanonicalBytes {
    /// Construct canonical bytes from any serializable value.
    ///
    /// Walks the value once to reject non-finite floats, then serializes
    /// with the JCS serializer, which sorts object keys recursively. This
    /// is the preferred path for typed payload structs, whose nesting depth
    /// is statically bounded.
    ///
    /// # Errors
    ///
    /// Returns [`CanonicalizationError::NonFinite`] if the value contains
    /// `NaN` or an infinity, and [`CanonicalizationError::Unrepresentable`]
    /// if it has a map with non-string keys or otherwise fails to
    /// serialize.
    pub fn new(obj: &impl Serialize) -> Result<Self, CanonicalizationError> {
        obj.serialize(FiniteCheck)?;
        let s = serde_jcs::to_string(obj)?;
        Ok(Self(s.into_bytes()))
    }

    /// Construct canonical bytes from an already-built JSON value.
    ///
    /// Runs [`stable_stringify`], which applies the depth guard. Use this
    /// path for dynamic payloads whose nesting is not statically known.
    pub fn from_value(value: &Value) -> Result<Self, CanonicalizationError> {
        Ok(Self(stable_stringify(value)?.into_bytes()))
    }

    /// Access the canonical bytes for digest computation.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Returns the length of the canonical byte sequence.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the canonical byte sequence is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl AsRef<[u8]> for CanonicalBytes {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

/// Rewrite a JSON value into canonical form.
///
/// - Mappings: values recursed, then keys re-inserted in sorted order. The
///   comparator is plain byte-wise `str` ordering — deterministic and
///   locale-free. The sort is explicit rather than delegated to the map
///   backing type, so the result does not depend on `serde_json` feature
///   flags.
/// - Sequences: elements recursed; order and length preserved exactly.
/// - Primitives: returned unchanged.
///
/// Cyclic graphs are unrepresentable in the `Value` tree, so cycle
/// detection is unnecessary here. Depth is still bounded by
/// [`MAX_CANONICAL_DEPTH`].
///
/// # Errors
///
/// Returns [`CanonicalizationError::DepthExceeded`] if nesting exceeds
/// [`MAX_CANONICAL_DEPTH`].
pub fn canonicalize(value: &Value) -> Result<Value, CanonicalizationError> {
    canonicalize_at(value, 0)
}

fn canonicalize_at(value: &Value, depth: usize) -> Result<Value, CanonicalizationError> {
    if depth > MAX_CANONICAL_DEPTH {
        return Err(CanonicalizationError::DepthExceeded {
            depth,
            limit: MAX_CANONICAL_DEPTH,
        });
    }
    match value {
        Value::Null | Value::Bool(_) | Value::Number(_) | Value::String(_) => Ok(value.clone()),
        Value::Array(items) => {
            let canonical: Result<Vec<_>, _> = items
                .iter()
                .map(|item| canonicalize_at(item, depth + 1))
                .collect();
            Ok(Value::Array(canonical?))
        }
        Value::Object(map) => {
            let mut keys: Vec<&String> = map.keys().collect();
            keys.sort_unstable();
            let mut canonical = Map::new();
            for key in keys {
                canonical.insert(key.clone(), canonicalize_at(&map[key], depth + 1)?);
            }
            Ok(Value::Object(canonical))
        }
    }
}

/// Serialize a JSON value as canonical RFC 8785 text.
///
/// Applies [`canonicalize`] (depth guard, key sorting) and then the JCS
/// serializer: sorted keys, compact separators, no trailing whitespace,
/// UTF-8 output. The JCS layer orders keys by UTF-16 code units per
/// RFC 8785, which coincides with byte order for all BMP-only keys; the
/// serialized form is the authoritative one for hashing.
pub fn stable_stringify(value: &Value) -> Result<String, CanonicalizationError> {
    let canonical = canonicalize(value)?;
    Ok(serde_jcs::to_string(&canonical)?)
}

/// Validation-only serializer that walks a value and rejects non-finite
/// floats.
///
/// `serde_json`'s serializer silently writes `null` for `NaN` and the
/// infinities, so the rejection has to happen before the value reaches it:
/// once serialized, a coerced `null` is indistinguishable from a genuine
/// one. This serializer produces no output; every method either succeeds,
/// recurses into a nested value, or fails on a non-finite float.
struct FiniteCheck;

#[derive(Debug)]
enum FiniteCheckError {
    NonFinite(f64),
    Custom(String),
}

impl std::fmt::Display for FiniteCheckError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NonFinite(v) => {
                write!(f, "non-finite number is not representable as canonical JSON: {v}")
            }
            Self::Custom(msg) => f.write_str(msg),
        }
    }
}

impl std::error::Error for FiniteCheckError {}

impl ser::Error for FiniteCheckError {
    fn custom<T: std::fmt::Display>(msg: T) -> Self {
        Self::Custom(msg.to_string())
    }
}

impl From<FiniteCheckError> for CanonicalizationError {
    fn from(err: FiniteCheckError) -> Self {
        match err {
            FiniteCheckError::NonFinite(v) => CanonicalizationError::NonFinite(v),
            FiniteCheckError::Custom(msg) => {
                CanonicalizationError::Unrepresentable(<serde_json::Error as ser::Error>::custom(
                    msg,
                ))
            }
        }
    }
}

impl ser::Serializer for FiniteCheck {
    type Ok = ();
    type Error = FiniteCheckError;
    type SerializeSeq = FiniteCheckCompound;
    type SerializeTuple = FiniteCheckCompound;
    type SerializeTupleStruct = FiniteCheckCompound;
    type SerializeTupleVariant = FiniteCheckCompound;
    type SerializeMap = FiniteCheckCompound;
    type SerializeStruct = FiniteCheckCompound;
    type SerializeStructVariant = FiniteCheckCompound;

    fn serialize_f32(self, v: f32) -> Result<(), FiniteCheckError> {
        if v.is_finite() {
            Ok(())
        } else {
            Err(FiniteCheckError::NonFinite(f64::from(v)))
        }
    }

    fn serialize_f64(self, v: f64) -> Result<(), FiniteCheckError> {
        if v.is_finite() {
            Ok(())
        } else {
            Err(FiniteCheckError::NonFinite(v))
        }
    }

    fn serialize_bool(self, _v: bool) -> Result<(), FiniteCheckError> {
        Ok(())
    }

    fn serialize_i8(self, _v: i8) -> Result<(), FiniteCheckError> {
        Ok(())
    }

    fn serialize_i16(self, _v: i16) -> Result<(), FiniteCheckError> {
        Ok(())
    }

    fn serialize_i32(self, _v: i32) -> Result<(), FiniteCheckError> {
        Ok(())
    }

    fn serialize_i64(self, _v: i64) -> Result<(), FiniteCheckError> {
        Ok(())
    }

    fn serialize_u8(self, _v: u8) -> Result<(), FiniteCheckError> {
        Ok(())
    }

    fn serialize_u16(self, _v: u16) -> Result<(), FiniteCheckError> {
        Ok(())
    }

    fn serialize_u32(self, _v: u32) -> Result<(), FiniteCheckError> {
        Ok(())
    }

    fn serialize_u64(self, _v: u64) -> Result<(), FiniteCheckError> {
        Ok(())
    }

    fn serialize_char(self, _v: char) -> Result<(), FiniteCheckError> {
        Ok(())
    }

    fn serialize_str(self, _v: &str) -> Result<(), FiniteCheckError> {
        Ok(())
    }

    fn serialize_bytes(self, _v: &[u8]) -> Result<(), FiniteCheckError> {
        Ok(())
    }

    fn serialize_none(self) -> Result<(), FiniteCheckError> {
        Ok(())
    }

    fn serialize_some<T: ?Sized + Serialize>(self, value: &T) -> Result<(), FiniteCheckError> {
        value.serialize(FiniteCheck)
    }

    fn serialize_unit(self) -> Result<(), FiniteCheckError> {
        Ok(())
    }

    fn serialize_unit_struct(self, _name: &'static str) -> Result<(), FiniteCheckError> {
        Ok(())
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
    ) -> Result<(), FiniteCheckError> {
        Ok(())
    }

    fn serialize_newtype_struct<T: ?Sized + Serialize>(
        self,
        _name: &'static str,
        value: &T,
    ) -> Result<(), FiniteCheckError> {
        value.serialize(FiniteCheck)
    }

    fn serialize_newtype_variant<T: ?Sized + Serialize>(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        value: &T,
    ) -> Result<(), FiniteCheckError> {
        value.serialize(FiniteCheck)
    }

    fn serialize_seq(self, _len: Option<usize>) -> Result<FiniteCheckCompound, FiniteCheckError> {
        Ok(FiniteCheckCompound)
    }

    fn serialize_tuple(self, _len: usize) -> Result<FiniteCheckCompound, FiniteCheckError> {
        Ok(FiniteCheckCompound)
    }

    fn serialize_tuple_struct(
        self,
        _name: &'static str,
        _len: usize,
    ) -> Result<FiniteCheckCompound, FiniteCheckError> {
        Ok(FiniteCheckCompound)
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<FiniteCheckCompound, FiniteCheckError> {
        Ok(FiniteCheckCompound)
    }

    fn serialize_map(self, _len: Option<usize>) -> Result<FiniteCheckCompound, FiniteCheckError> {
        Ok(FiniteCheckCompound)
    }

    fn serialize_struct(
        self,
        _name: &'static str,
        _len: usize,
    ) -> Result<FiniteCheckCompound, FiniteCheckError> {
        Ok(FiniteCheckCompound)
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<FiniteCheckCompound, FiniteCheckError> {
        Ok(FiniteCheckCompound)
    }
}

/// Compound-value half of [`FiniteCheck`]: recurses into elements, keys,
/// and fields, producing nothing.
struct FiniteCheckCompound;

impl ser::SerializeSeq for FiniteCheckCompound {
    type Ok = ();
    type Error = FiniteCheckError;

    fn serialize_element<T: ?Sized + Serialize>(
        &mut self,
        value: &T,
    ) -> Result<(), FiniteCheckError> {
        value.serialize(FiniteCheck)
    }

    fn end(self) -> Result<(), FiniteCheckError> {
        Ok(())
    }
}

impl ser::SerializeTuple for FiniteCheckCompound {
    type Ok = ();
    type Error = FiniteCheckError;

    fn serialize_element<T: ?Sized + Serialize>(
        &mut self,
        value: &T,
    ) -> Result<(), FiniteCheckError> {
        value.serialize(FiniteCheck)
    }

    fn end(self) -> Result<(), FiniteCheckError> {
        Ok(())
    }
}

impl ser::SerializeTupleStruct for FiniteCheckCompound {
    type Ok = ();
    type Error = FiniteCheckError;

    fn serialize_field<T: ?Sized + Serialize>(
        &mut self,
        value: &T,
    ) -> Result<(), FiniteCheckError> {
        value.serialize(FiniteCheck)
    }

    fn end(self) -> Result<(), FiniteCheckError> {
        Ok(())
    }
}

impl ser::SerializeTupleVariant for FiniteCheckCompound {
    type Ok = ();
    type Error = FiniteCheckError;

    fn serialize_field<T: ?Sized + Serialize>(
        &mut self,
        value: &T,
    ) -> Result<(), FiniteCheckError> {
        value.serialize(FiniteCheck)
    }

    fn end(self) -> Result<(), FiniteCheckError> {
        Ok(())
    }
}

impl ser::SerializeMap for FiniteCheckCompound {
    type Ok = ();
    type Error = FiniteCheckError;

    fn serialize_key<T: ?Sized + Serialize>(&mut self, key: &T) -> Result<(), FiniteCheckError> {
        key.serialize(FiniteCheck)
    }

    fn serialize_value<T: ?Sized + Serialize>(
        &mut self,
        value: &T,
    ) -> Result<(), FiniteCheckError> {
        value.serialize(FiniteCheck)
    }

    fn end(self) -> Result<(), FiniteCheckError> {
        Ok(())
    }
}

impl ser::SerializeStruct for FiniteCheckCompound {
    type Ok = ();
    type Error = FiniteCheckError;

    fn serialize_field<T: ?Sized + Serialize>(
        &mut self,
        _key: &'static str,
        value: &T,
    ) -> Result<(), FiniteCheckError> {
        value.serialize(FiniteCheck)
    }

    fn end(self) -> Result<(), FiniteCheckError> {
        Ok(())
    }
}

impl ser::SerializeStructVariant for FiniteCheckCompound {
    type Ok = ();
    type Error = FiniteCheckError;

    fn serialize_field<T: ?Sized + Serialize>(
        &mut self,
        _key: &'static str,
        value: &T,
    ) -> Result<(), FiniteCheckError> {
        value.serialize(FiniteCheck)
    }

    fn end(self) -> Result<(), FiniteCheckError> {
        Ok(())
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::json;

    /// Strategy for JSON-compatible values with finite floats only.
    fn json_value() -> impl Strategy<Value = Value> {
        let leaf = prop_oneof![
            Just(Value::Null),
            any::<bool>().prop_map(Value::Bool),
            any::<i64>().prop_map(|n| json!(n)),
            any::<f64>()
                .prop_filter("finite", |f| f.is_finite())
                .prop_map(|f| json!(f)),
            "[a-zA-Z0-9_ ]{0,50}".prop_map(Value::String),
        ];
        leaf.prop_recursive(4, 64, 8, |inner| {
            prop_oneof![
                prop::collection::vec(inner.clone(), 0..8).prop_map(Value::Array),
                prop::collection::btree_map("[a-z]{1,10}", inner, 0..8).prop_map(|m| {
                    let map: Map<String, Value> = m.into_iter().collect();
                    Value::Object(map)
                }),
            ]
        })
    }

    proptest! {
        /// Canonicalization never fails for finite JSON values of sane depth.
        #[test]
        fn stable_stringify_never_fails(value in json_value()) {
            prop_assert!(stable_stringify(&value).is_ok());
        }

        /// Same input always produces the same canonical text.
        #[test]
        fn stable_stringify_deterministic(value in json_value()) {
            let a = stable_stringify(&value).unwrap();
            let b = stable_stringify(&value).unwrap();
            prop_assert_eq!(a, b);
        }

        /// Canonicalizing twice is the same as canonicalizing once.
        #[test]
        fn canonicalize_idempotent(value in json_value()) {
            let once = canonicalize(&value).unwrap();
            let twice = canonicalize(&once).unwrap();
            prop_assert_eq!(once, twice);
        }

        /// Canonical text is valid JSON and a fixpoint: parsing it and
        /// stringifying again reproduces the same text byte for byte.
        #[test]
        fn canonical_text_is_fixpoint(value in json_value()) {
            let s = stable_stringify(&value).unwrap();
            let parsed: Value = serde_json::from_str(&s).unwrap();
            prop_assert_eq!(stable_stringify(&parsed).unwrap(), s);
        }

        /// Object keys appear sorted in the canonical output.
        #[test]
        fn canonical_keys_sorted(
            keys in prop::collection::btree_set("[a-z]{1,8}", 2..6)
        ) {
            let map: Map<String, Value> = keys
                .iter()
                .enumerate()
                .map(|(i, k)| (k.clone(), json!(i)))
                .collect();
            let s = stable_stringify(&Value::Object(map)).unwrap();
            let parsed: Map<String, Value> = serde_json::from_str(&s).unwrap();
            let output_keys: Vec<&String> = parsed.keys().collect();
            let mut sorted = output_keys.clone();
            sorted.sort();
            prop_assert_eq!(output_keys, sorted);
        }
    }
}
