// SPDX-License-Identifier: GPL-3.0-or-later

/// Polynomial rolling hash over a string's UTF-16 code units.
///
/// Accumulates `hash * 31 + unit` with two's-complement wraparound on every
/// step, so long inputs overflow the same way on every platform. Iterating
/// code units (not scalar values) means astral characters contribute their
/// surrogate pair, which keeps the hash stable for identifiers that embed
/// non-ASCII text.
pub fn ident_hash(id: &str) -> i32 {
    let mut hash: i32 = 0;
    for unit in id.encode_utf16() {
        hash = hash.wrapping_mul(31).wrapping_add(i32::from(unit));
    }
    hash
}
