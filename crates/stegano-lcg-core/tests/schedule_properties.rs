use tempfile::TempDir;

use stegano_lcg_core::huffman;
use stegano_lcg_core::schedule::{read_index_file, write_index_file};
use stegano_lcg_core::*;

#[test]
fn should_reproduce_the_reference_scenario() {
    let params = LcgParams::new(5, 3, 16, 1);
    assert_eq!(Recurrence::new(params).terms(3).unwrap(), vec![8, 11, 10]);
    assert_eq!(
        Recurrence::new(params).indices(3, 100).unwrap().as_slice(),
        &[1, 9, 20, 30]
    );
}

#[test]
fn should_stay_in_range_and_be_deterministic() {
    let cases = [
        (LcgParams::new(5, 3, 16, 1), 37_u64),
        (LcgParams::new(1103515245, 12345, 1 << 31, 42), 1000),
        (LcgParams::new(-7, 11, 97, -13), 64),
        (LcgParams::new(i64::MAX, i64::MAX, i64::MAX, i64::MIN), 3),
    ];
    for (params, capacity) in cases {
        let first = Recurrence::new(params).indices(500, capacity).unwrap();
        let second = Recurrence::new(params).indices(500, capacity).unwrap();
        assert_eq!(first, second, "{params}");
        assert_eq!(first.len(), 501);
        assert!(first.iter().all(|&i| i < capacity), "{params}");
    }
}

#[test]
fn should_round_trip_index_files() {
    let out_dir = TempDir::new().unwrap();
    let file = out_dir.path().join("indices.txt");
    let indices = Recurrence::new(LcgParams::new(5, 3, 16, 1))
        .indices(40, 100)
        .unwrap();

    write_index_file(&file, &indices).unwrap();
    assert_eq!(read_index_file(&file).unwrap(), indices.into_inner());
}

#[test]
fn huffman_codes_should_be_prefix_free_and_satisfy_kraft() {
    let texts = [
        "a",
        "aaaa",
        "abcd",
        "the quick brown fox jumps over the lazy dog",
        "Lorem ipsum dolor sit amet, consectetur adipiscing elit, sed do eiusmod tempor",
    ];
    for text in texts {
        let (payload, table) = huffman::encode(text);
        let analysis = CodeAnalysis::of(text, &table);

        assert!(table.is_prefix_free(), "{text}");
        assert!(analysis.satisfies_kraft(), "{text}");
        assert!(analysis.within_entropy_bound(), "{text}");
        assert_eq!(table.decode(&payload), huffman::normalize(text));
    }
}
