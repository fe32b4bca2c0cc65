//! The tagged [`Var`] variant: one slot holding any supported scalar kind.
//!
//! `Var` replaces an untagged union design in which the caller wrote one
//! interpretation and read back whichever it liked. Here the active kind
//! travels with the payload, and the checked accessors reject mismatched
//! reads instead of silently reinterpreting bytes.

use std::fmt;

use crate::element::Element;
use crate::error::KindMismatch;

/// The scalar kinds a [`Var`] can hold.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum VarKind {
    /// Unsigned 8-bit integer.
    U8,
    /// Signed 8-bit integer.
    I8,
    /// Unsigned 16-bit integer.
    U16,
    /// Signed 16-bit integer.
    I16,
    /// Unsigned 32-bit integer.
    U32,
    /// Signed 32-bit integer.
    I32,
    /// Unsigned 64-bit integer.
    U64,
    /// Signed 64-bit integer.
    I64,
    /// 32-bit float.
    F32,
    /// 64-bit float.
    F64,
}

impl VarKind {
    /// Storage tag for this kind.
    ///
    /// Tag 0 is `U8`, so a zero-filled slot decodes as `Var::U8(0)` — the
    /// zero-beyond-size invariant of the containers stays meaningful for
    /// variant elements.
    pub const fn tag(self) -> u8 {
        match self {
            Self::U8 => 0,
            Self::I8 => 1,
            Self::U16 => 2,
            Self::I16 => 3,
            Self::U32 => 4,
            Self::I32 => 5,
            Self::U64 => 6,
            Self::I64 => 7,
            Self::F32 => 8,
            Self::F64 => 9,
        }
    }

    /// The kind for a storage tag, or `None` for an unassigned tag.
    pub const fn from_tag(tag: u8) -> Option<Self> {
        match tag {
            0 => Some(Self::U8),
            1 => Some(Self::I8),
            2 => Some(Self::U16),
            3 => Some(Self::I16),
            4 => Some(Self::U32),
            5 => Some(Self::I32),
            6 => Some(Self::U64),
            7 => Some(Self::I64),
            8 => Some(Self::F32),
            9 => Some(Self::F64),
            _ => None,
        }
    }
}

impl fmt::Display for VarKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::U8 => "u8",
            Self::I8 => "i8",
            Self::U16 => "u16",
            Self::I16 => "i16",
            Self::U32 => "u32",
            Self::I32 => "i32",
            Self::U64 => "u64",
            Self::I64 => "i64",
            Self::F32 => "f32",
            Self::F64 => "f64",
        };
        write!(f, "{name}")
    }
}

/// A single value of one of the supported scalar kinds, tagged with its kind.
///
/// Use the checked accessors ([`Var::as_u8`], [`Var::as_f64`], …) to read
/// the payload back; reading as a different kind than the one stored is an
/// error, not a reinterpretation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Var {
    /// An unsigned 8-bit integer.
    U8(u8),
    /// A signed 8-bit integer.
    I8(i8),
    /// An unsigned 16-bit integer.
    U16(u16),
    /// A signed 16-bit integer.
    I16(i16),
    /// An unsigned 32-bit integer.
    U32(u32),
    /// A signed 32-bit integer.
    I32(i32),
    /// An unsigned 64-bit integer.
    U64(u64),
    /// A signed 64-bit integer.
    I64(i64),
    /// A 32-bit float.
    F32(f32),
    /// A 64-bit float.
    F64(f64),
}

macro_rules! var_accessor {
    ($(#[$doc:meta])* $name:ident, $variant:ident, $ty:ty) => {
        $(#[$doc])*
        pub fn $name(self) -> Result<$ty, KindMismatch> {
            match self {
                Self::$variant(v) => Ok(v),
                other => Err(KindMismatch {
                    expected: VarKind::$variant,
                    actual: other.kind(),
                }),
            }
        }
    };
}

impl Var {
    /// The kind currently stored.
    pub const fn kind(self) -> VarKind {
        match self {
            Self::U8(_) => VarKind::U8,
            Self::I8(_) => VarKind::I8,
            Self::U16(_) => VarKind::U16,
            Self::I16(_) => VarKind::I16,
            Self::U32(_) => VarKind::U32,
            Self::I32(_) => VarKind::I32,
            Self::U64(_) => VarKind::U64,
            Self::I64(_) => VarKind::I64,
            Self::F32(_) => VarKind::F32,
            Self::F64(_) => VarKind::F64,
        }
    }

    var_accessor!(
        /// The stored `u8`, or a [`KindMismatch`] if another kind is active.
        as_u8, U8, u8
    );
    var_accessor!(
        /// The stored `i8`, or a [`KindMismatch`] if another kind is active.
        as_i8, I8, i8
    );
    var_accessor!(
        /// The stored `u16`, or a [`KindMismatch`] if another kind is active.
        as_u16, U16, u16
    );
    var_accessor!(
        /// The stored `i16`, or a [`KindMismatch`] if another kind is active.
        as_i16, I16, i16
    );
    var_accessor!(
        /// The stored `u32`, or a [`KindMismatch`] if another kind is active.
        as_u32, U32, u32
    );
    var_accessor!(
        /// The stored `i32`, or a [`KindMismatch`] if another kind is active.
        as_i32, I32, i32
    );
    var_accessor!(
        /// The stored `u64`, or a [`KindMismatch`] if another kind is active.
        as_u64, U64, u64
    );
    var_accessor!(
        /// The stored `i64`, or a [`KindMismatch`] if another kind is active.
        as_i64, I64, i64
    );
    var_accessor!(
        /// The stored `f32`, or a [`KindMismatch`] if another kind is active.
        as_f32, F32, f32
    );
    var_accessor!(
        /// The stored `f64`, or a [`KindMismatch`] if another kind is active.
        as_f64, F64, f64
    );
}

impl Default for Var {
    /// `Var::U8(0)`, matching what a zero-filled slot decodes to.
    fn default() -> Self {
        Self::U8(0)
    }
}

/// Storage layout: one tag byte followed by an 8-byte native-endian
/// payload, narrow kinds zero-padded. Slots only ever contain tags this
/// impl wrote (or zeros), so decoding is total; an unassigned tag falls
/// back to the zero-slot reading `U8`.
impl Element for Var {
    const WIDTH: usize = 9;

    fn write_bytes(&self, out: &mut [u8]) {
        out[0] = self.kind().tag();
        let payload = &mut out[1..9];
        payload.fill(0);
        match *self {
            Self::U8(v) => payload[..1].copy_from_slice(&v.to_ne_bytes()),
            Self::I8(v) => payload[..1].copy_from_slice(&v.to_ne_bytes()),
            Self::U16(v) => payload[..2].copy_from_slice(&v.to_ne_bytes()),
            Self::I16(v) => payload[..2].copy_from_slice(&v.to_ne_bytes()),
            Self::U32(v) => payload[..4].copy_from_slice(&v.to_ne_bytes()),
            Self::I32(v) => payload[..4].copy_from_slice(&v.to_ne_bytes()),
            Self::U64(v) => payload[..8].copy_from_slice(&v.to_ne_bytes()),
            Self::I64(v) => payload[..8].copy_from_slice(&v.to_ne_bytes()),
            Self::F32(v) => payload[..4].copy_from_slice(&v.to_ne_bytes()),
            Self::F64(v) => payload[..8].copy_from_slice(&v.to_ne_bytes()),
        }
    }

    fn read_bytes(bytes: &[u8]) -> Self {
        fn payload<const N: usize>(bytes: &[u8]) -> [u8; N] {
            let mut raw = [0u8; N];
            raw.copy_from_slice(&bytes[1..1 + N]);
            raw
        }

        let kind = VarKind::from_tag(bytes[0]).unwrap_or(VarKind::U8);
        match kind {
            VarKind::U8 => Self::U8(u8::from_ne_bytes(payload::<1>(bytes))),
            VarKind::I8 => Self::I8(i8::from_ne_bytes(payload::<1>(bytes))),
            VarKind::U16 => Self::U16(u16::from_ne_bytes(payload::<2>(bytes))),
            VarKind::I16 => Self::I16(i16::from_ne_bytes(payload::<2>(bytes))),
            VarKind::U32 => Self::U32(u32::from_ne_bytes(payload::<4>(bytes))),
            VarKind::I32 => Self::I32(i32::from_ne_bytes(payload::<4>(bytes))),
            VarKind::U64 => Self::U64(u64::from_ne_bytes(payload::<8>(bytes))),
            VarKind::I64 => Self::I64(i64::from_ne_bytes(payload::<8>(bytes))),
            VarKind::F32 => Self::F32(f32::from_ne_bytes(payload::<4>(bytes))),
            VarKind::F64 => Self::F64(f64::from_ne_bytes(payload::<8>(bytes))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_reports_active_variant() {
        assert_eq!(Var::I32(-5).kind(), VarKind::I32);
        assert_eq!(Var::F64(0.5).kind(), VarKind::F64);
    }

    #[test]
    fn checked_accessor_returns_value_for_matching_kind() {
        assert_eq!(Var::U64(456_875_322_348_934).as_u64(), Ok(456_875_322_348_934));
        assert_eq!(Var::F32(124.48).as_f32(), Ok(124.48));
    }

    #[test]
    fn checked_accessor_rejects_mismatched_kind() {
        let err = Var::U8(12).as_f32().unwrap_err();
        assert_eq!(err.expected, VarKind::F32);
        assert_eq!(err.actual, VarKind::U8);
    }

    #[test]
    fn tag_round_trips_for_every_kind() {
        for kind in [
            VarKind::U8,
            VarKind::I8,
            VarKind::U16,
            VarKind::I16,
            VarKind::U32,
            VarKind::I32,
            VarKind::U64,
            VarKind::I64,
            VarKind::F32,
            VarKind::F64,
        ] {
            assert_eq!(VarKind::from_tag(kind.tag()), Some(kind));
        }
        assert_eq!(VarKind::from_tag(10), None);
    }

    #[test]
    fn zero_filled_slot_decodes_to_default() {
        assert_eq!(Var::read_bytes(&[0u8; 9]), Var::default());
        assert_eq!(Var::default(), Var::U8(0));
    }

    #[test]
    fn element_round_trips_every_kind() {
        let values = [
            Var::U8(200),
            Var::I8(-100),
            Var::U16(64_000),
            Var::I16(-12_345),
            Var::U32(3_000_000_000),
            Var::I32(-42),
            Var::U64(1_248_889_778_344_665),
            Var::I64(-456_875_322_348_934),
            Var::F32(42.42),
            Var::F64(1_458_222_474.484_245_6),
        ];
        for value in values {
            let mut slot = [0u8; 9];
            value.write_bytes(&mut slot);
            assert_eq!(Var::read_bytes(&slot), value);
        }
    }

    #[test]
    fn narrow_write_clears_stale_payload_bytes() {
        let mut slot = [0u8; 9];
        Var::U64(u64::MAX).write_bytes(&mut slot);
        Var::U8(1).write_bytes(&mut slot);
        assert_eq!(Var::read_bytes(&slot), Var::U8(1));
        assert!(slot[2..].iter().all(|&b| b == 0));
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        fn any_var() -> impl Strategy<Value = Var> {
            prop_oneof![
                any::<u8>().prop_map(Var::U8),
                any::<i8>().prop_map(Var::I8),
                any::<u16>().prop_map(Var::U16),
                any::<i16>().prop_map(Var::I16),
                any::<u32>().prop_map(Var::U32),
                any::<i32>().prop_map(Var::I32),
                any::<u64>().prop_map(Var::U64),
                any::<i64>().prop_map(Var::I64),
                any::<f32>().prop_map(Var::F32),
                any::<f64>().prop_map(Var::F64),
            ]
        }

        proptest! {
            #[test]
            fn encoding_round_trips(value in any_var()) {
                let mut slot = [0u8; 9];
                value.write_bytes(&mut slot);
                let back = Var::read_bytes(&slot);
                prop_assert_eq!(back.kind(), value.kind());
                // Compare bitwise so NaN payloads count as equal.
                let mut again = [0u8; 9];
                back.write_bytes(&mut again);
                prop_assert_eq!(again, slot);
            }
        }
    }
}
