//! The [`Element`] trait: fixed-width byte views of storable values.
//!
//! Containers in this workspace manage storage as untyped byte blocks;
//! `Element` is the seam through which typed values enter and leave a
//! slot. Implementations exist for every primitive scalar kind and for
//! the tagged [`Var`](crate::var::Var) variant.

/// A value that can be stored in a dynamic array slot of fixed byte width.
///
/// `WIDTH` is the byte width of one slot, fixed per type. Encoding is
/// native-endian, so a stored value reads back byte-identical on the
/// machine that wrote it (no cross-machine wire format is implied).
///
/// # Contract
///
/// - `WIDTH` is greater than zero.
/// - `write_bytes` writes all `WIDTH` bytes of `out`: the encoding is a
///   pure function of the value, independent of the slot's prior contents.
/// - `read_bytes(written) == value` for any `written` produced by
///   `write_bytes(value)`.
/// - An all-zero byte pattern decodes to the zero value of the type, so
///   zero-filled slots behave like zero-initialised elements.
pub trait Element: Copy {
    /// Byte width of one stored value.
    const WIDTH: usize;

    /// Encode the value into `out`, which is exactly [`Self::WIDTH`] bytes.
    fn write_bytes(&self, out: &mut [u8]);

    /// Decode a value from `bytes`, which is exactly [`Self::WIDTH`] bytes.
    fn read_bytes(bytes: &[u8]) -> Self;
}

macro_rules! scalar_element {
    ($($ty:ty),* $(,)?) => {$(
        impl Element for $ty {
            const WIDTH: usize = std::mem::size_of::<$ty>();

            fn write_bytes(&self, out: &mut [u8]) {
                out.copy_from_slice(&self.to_ne_bytes());
            }

            fn read_bytes(bytes: &[u8]) -> Self {
                let mut raw = [0u8; std::mem::size_of::<$ty>()];
                raw.copy_from_slice(bytes);
                Self::from_ne_bytes(raw)
            }
        }
    )*};
}

scalar_element!(i8, u8, i16, u16, i32, u32, i64, u64, f32, f64);
