//! Property tests over arbitrary inputs.

use filekind::{FileKind, detect_file_kind_from_bytes, detect_file_kind_from_data, match_extension};
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn prop_arbitrary_bytes_never_panic(data in prop::collection::vec(any::<u8>(), 0..4096)) {
        let first = detect_file_kind_from_bytes(&data);
        prop_assert_eq!(detect_file_kind_from_bytes(&data), first);
        let _ = detect_file_kind_from_data(&data);
    }

    #[test]
    fn prop_zip_magic_without_archive_stays_zip(tail in prop::collection::vec(any::<u8>(), 0..64)) {
        // the signature stage alone decides; no archive is opened
        let mut data = b"PK\x03\x04".to_vec();
        data.extend_from_slice(&tail);
        prop_assert_eq!(detect_file_kind_from_data(&data), Some(FileKind::Zip));
    }

    #[test]
    fn prop_ps_floor(pad in 0usize..53) {
        // under 64 bytes is never PostScript
        let mut data = b"%!PS-Adobe-".to_vec();
        data.extend(std::iter::repeat_n(b' ', pad));
        prop_assert!(data.len() < 64);
        prop_assert_ne!(detect_file_kind_from_data(&data), Some(FileKind::Ps));
    }

    #[test]
    fn prop_fb2_zip_never_zip(stem in "[A-Za-z0-9_]{1,16}", upper in any::<bool>()) {
        let suffix = if upper { ".FB2.ZIP" } else { ".fb2.zip" };
        prop_assert_eq!(match_extension(&format!("{}{}", stem, suffix)), Some(FileKind::Fb2));
    }
}
