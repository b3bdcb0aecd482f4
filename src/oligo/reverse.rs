/// oligo/reverse.rs — Reverse complement utility
///
/// A pure function with no dependencies. Used for the attB reverse
/// orientation and for flipping both homology arms on replichore 1.
///
/// The fixed mapping is biological convention:
///   A ↔ T   (adenine pairs with thymine)
///   G ↔ C   (guanine pairs with cytosine)
/// Case is preserved, so the lowercase attB default stays lowercase.
/// Anything else (N, IUPAC codes) passes through untouched.

/// Complement a single base, keeping its case.
#[inline]
pub fn complement(c: char) -> char {
    match c {
        'A' => 'T',
        'T' => 'A',
        'G' => 'C',
        'C' => 'G',
        'a' => 't',
        't' => 'a',
        'g' => 'c',
        'c' => 'g',
        x => x,
    }
}

/// Compute the reverse complement of a sequence, read 5'→3'.
pub fn reverse_complement(seq: &str) -> String {
    seq.chars().rev().map(complement).collect()
}
