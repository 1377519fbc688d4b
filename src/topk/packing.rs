//! Bit-packed (distance | id) encoding.
//!
//! For non-negative IEEE floats the bit pattern orders like an unsigned
//! integer, so overwriting the low `B` mantissa bits with an id keeps any two
//! values whose upper bits differ in order. Equal upper bits then tie-break
//! by id. The price is `B` bits of distance precision, and it only holds for
//! non-negative inputs, which is why the kernels clamp before packing and
//! `get_min_k` rejects negative inputs up front.

/// Largest distance that may be packed. Keeps packed values strictly below
/// the `f32::MAX` bit pattern used to mark empty levels.
pub const PACK_LIMIT: f32 = f32::MAX / 2.0;

/// Raw bit pattern of an empty packed level.
pub const PACKED_SENTINEL_BITS: u32 = f32::MAX.to_bits();

/// Low-bit mask able to hold every id below `n_ids`: `next_pow2(n_ids) - 1`.
#[inline]
pub fn id_mask_for(n_ids: usize) -> u32 {
    (n_ids as u32).next_power_of_two() - 1
}

/// Whether `id_mask` can carry ids `0..n_ids`.
#[inline]
pub fn mask_holds(id_mask: u32, n_ids: usize) -> bool {
    n_ids as u64 <= id_mask as u64 + 1
}

/// Whether an unpacked distance came from an empty level. Real distances
/// are clamped to `PACK_LIMIT` before packing; the sentinel stays far above
/// it once its low bits are cleared.
#[inline]
pub fn is_empty_unpacked(distance: f32) -> bool {
    distance > PACK_LIMIT
}

/// Scalar pack; the vector engines do the same lane by lane.
#[inline]
pub fn pack(distance: f32, id: u32, id_mask: u32) -> f32 {
    debug_assert!(distance >= 0.0, "packing a negative distance");
    debug_assert!(id <= id_mask, "id {id} does not fit mask {id_mask:#x}");
    f32::from_bits((distance.to_bits() & !id_mask) | id)
}

/// Scalar unpack into `(distance with low bits cleared, id)`.
#[inline]
pub fn unpack(packed: f32, id_mask: u32) -> (f32, u32) {
    let bits = packed.to_bits();
    (f32::from_bits(bits & !id_mask), bits & id_mask)
}

#[inline]
pub fn is_packed_sentinel(packed: f32) -> bool {
    packed.to_bits() == PACKED_SENTINEL_BITS
}
