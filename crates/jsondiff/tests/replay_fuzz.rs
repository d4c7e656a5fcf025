mod common;

use common::diff_json;
use jsondiff::{diff, DiffOptions, TypeChange};
use jsondiff_util::Fuzzer;

fn option_matrix() -> Vec<DiffOptions> {
    let mut out = Vec::new();
    for type_change in [TypeChange::Replace, TypeChange::Granular] {
        for recurse_slots in [true, false] {
            out.push(DiffOptions {
                type_change,
                recurse_slots,
            });
        }
    }
    out
}

#[test]
fn seeded_random_edits_replay() {
    let matrix = option_matrix();
    for seed in 0..400u64 {
        let mut fuzzer = Fuzzer::from_u64(seed);
        let orig = fuzzer.random_json(4);
        let update = fuzzer.mutate(&orig);
        for opts in &matrix {
            diff_json(&orig, &update, opts);
        }
        assert!(diff(&update, &update).is_empty(), "seed={seed}");
    }
}

#[test]
fn seeded_edit_chains_replay() {
    for seed in 1000..1100u64 {
        let mut fuzzer = Fuzzer::from_u64(seed);
        let mut doc = fuzzer.random_json(3);
        for _ in 0..8 {
            let next = fuzzer.mutate(&doc);
            diff_json(&doc, &next, &DiffOptions::default());
            doc = next;
        }
    }
}

#[test]
fn seeded_unrelated_documents_replay() {
    for seed in 5000..5200u64 {
        let mut fuzzer = Fuzzer::from_u64(seed);
        let orig = fuzzer.random_json(3);
        let update = fuzzer.random_json(3);
        diff_json(&orig, &update, &DiffOptions::default());
    }
}
