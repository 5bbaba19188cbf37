use std::fs;

use xorshift_core::{
    generate, produce, verify_reference, SeedPolicy, Stream, VectorError, VectorSet,
    Xorshift128Plus,
};

fn load(name: &str) -> String {
    let path = format!("{}/../test-fixtures/{name}", env!("CARGO_MANIFEST_DIR"));
    fs::read_to_string(&path).unwrap_or_else(|err| panic!("failed reading {path}: {err}"))
}

fn golden_seed_1_2() -> VectorSet {
    VectorSet::parse(
        &load("seed-1-2.out.txt"),
        &load("seed-1-2.state0.txt"),
        &load("seed-1-2.state1.txt"),
    )
    .expect("golden fixture should parse")
}

#[test]
fn golden_fixture_has_reference_length() {
    let golden = golden_seed_1_2();
    assert_eq!(golden.len(), 100);
    assert_eq!(golden.state0.len(), 100);
    assert_eq!(golden.state1.len(), 100);
}

#[test]
fn regenerates_golden_fixture_byte_for_byte() {
    let (vectors, journal) = generate(1, 2, 100, SeedPolicy::Reject).unwrap();

    assert_eq!(vectors.render(Stream::Output), load("seed-1-2.out.txt"));
    assert_eq!(vectors.render(Stream::State0), load("seed-1-2.state0.txt"));
    assert_eq!(vectors.render(Stream::State1), load("seed-1-2.state1.txt"));

    assert_eq!(journal.first_word, Some(3));
    assert_eq!(journal.final_state.s0, 0xe71b_371a_a4aa_6f77);
    assert_eq!(journal.final_state.s1, 0xc991_85ba_fd1c_5192);
}

#[test]
fn verifies_against_golden_fixture() {
    let golden = golden_seed_1_2();
    let journal = verify_reference(1, 2, SeedPolicy::Reject, &golden)
        .expect("golden fixture must verify");
    assert_eq!(journal.count, 100);
    assert_eq!(golden.output[99], 0x8e0a_b828_78c8_04fa);
}

#[test]
fn golden_fixture_rejects_swapped_seed_order() {
    let golden = golden_seed_1_2();
    let err = verify_reference(2, 1, SeedPolicy::Reject, &golden).unwrap_err();
    assert!(matches!(
        err,
        VectorError::WordMismatch {
            stream: Stream::Output,
            ..
        }
    ));
}

#[test]
fn every_recorded_state_resumes_the_golden_sequence() {
    let golden = golden_seed_1_2();
    for i in 0..golden.len() - 1 {
        let state = xorshift_core::StateSnapshot::new(golden.state0[i], golden.state1[i]);
        let mut resumed = Xorshift128Plus::from_snapshot(state, SeedPolicy::Reject).unwrap();
        assert_eq!(resumed.advance(), golden.output[i + 1], "step {}", i + 1);
        assert_eq!(resumed.s0(), golden.state0[i + 1]);
        assert_eq!(resumed.s1(), golden.state1[i + 1]);
    }
}

#[test]
fn long_run_fingerprint_stable() {
    let (_, journal) = generate(1, 2, 1000, SeedPolicy::Reject).unwrap();
    assert_eq!(journal.output_fingerprint, 18_375_827_879_388_134_795);
    assert_eq!(journal.final_state.s0, 0x3f87_e85a_b601_3ff6);
    assert_eq!(journal.final_state.s1, 0x777c_0202_4e87_24a0);
}

#[test]
fn iterator_and_collected_set_agree() {
    let mut a = Xorshift128Plus::seed(0xDEAD_BEEF, 0x1234_5678).unwrap();
    let mut b = a;
    let set = VectorSet::collect(&mut a, 3);

    let steps: Vec<_> = produce(&mut b, 3).collect();
    let words: Vec<u64> = steps.iter().map(|s| s.word).collect();
    assert_eq!(words, set.output);
    assert_eq!(words, vec![0xf0e2_1567, 0x006f_56c5_4ced_5f5e, 0x62c7_a847_01e2_0587]);
    assert_eq!(steps[2].state.s0, 0x6258_5182_93a2_6518);
    assert_eq!(steps[2].state.s1, 0xa37d_8406_32c0_3f9c);
}

#[test]
fn journal_serializes_to_json() {
    let (_, journal) = generate(1, 2, 2, SeedPolicy::Reject).unwrap();
    let json = serde_json::to_value(journal).unwrap();
    assert_eq!(json["seed_slot1"], 1);
    assert_eq!(json["seed_slot0"], 2);
    assert_eq!(json["count"], 2);
    assert_eq!(json["first_word"], 3);
    assert_eq!(json["final_state"]["s0"], 0x80_0023);
}
