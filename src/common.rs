//!
//! Types and constants shared across the crate
//!

/// Label of a hidden state or of an emitted symbol, such as `"GC-rich"` or `"A"`.
pub type Label = String;

/// Index of a hidden state in the model's ordered `states`.
pub type StateIndex = usize;

/// Index of a symbol in the model's ordered `symbols`.
pub type SymbolIndex = usize;

/// Type of DNA sequence
pub type Sequence = Vec<u8>;

/// Convert Sequence(Vec<u8>) into &str
/// useful in displaying
///
/// Sequences built from non-UTF8 labels are shown as `"<invalid>"`.
pub fn sequence_to_string(seq: &Sequence) -> &str {
    std::str::from_utf8(seq).unwrap_or("<invalid>")
}

///
/// Array of valid DNA bases
///
pub const VALID_BASES: [u8; 4] = [b'A', b'C', b'G', b'T'];

///
/// Labels of valid DNA bases, in the order of `VALID_BASES`
///
pub const NUCLEOTIDES: [&str; 4] = ["A", "C", "G", "T"];

///
/// Convert a slice of `&str` into owned labels.
///
pub fn labels(names: &[&str]) -> Vec<Label> {
    names.iter().map(|name| name.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nucleotides_match_bases() {
        for (base, label) in VALID_BASES.iter().zip(NUCLEOTIDES.iter()) {
            assert_eq!(label.as_bytes(), &[*base]);
        }
    }

    #[test]
    fn sequence_display() {
        let s: Sequence = b"ACGT".to_vec();
        assert_eq!(sequence_to_string(&s), "ACGT");
        let s: Sequence = vec![0xff, 0xfe];
        assert_eq!(sequence_to_string(&s), "<invalid>");
    }

    #[test]
    fn labels_are_owned_in_order() {
        assert_eq!(labels(&["AT-rich", "GC-rich"]), vec!["AT-rich", "GC-rich"]);
    }
}
