use vitae_types::PAGE_HEIGHT;

use crate::assembler::assemble;
use crate::flow::{append_reconciled, append_right};
use crate::scale::Scale;
use crate::state::LayoutState;
use crate::test_utils::{body, plain_options};
use crate::verify::verify;

#[test]
fn empty_state_yields_one_empty_page() {
    let pages = assemble(&LayoutState::new(), Scale::new(1.0));

    assert_eq!(pages.len(), 1);
    assert_eq!(pages[0].number, 1);
    assert!(pages[0].left.is_empty());
    assert!(pages[0].right.is_empty());
    assert!(pages[0].block.is_empty());
}

#[test]
fn placements_are_partitioned_by_page() {
    let opts = plain_options();
    let mut state = LayoutState::new();
    state.push_left("l0", 0.0, 40.0, body("l0"));
    append_right(&mut state, "r0", 0.0, 200.0, body("r0"), &opts);
    append_right(&mut state, "r1", 0.0, 200.0, body("r1"), &opts);

    let pages = assemble(&state, Scale::new(1.0));

    assert_eq!(pages.len(), 2);
    assert_eq!(pages[0].left.len(), 1);
    assert_eq!(pages[0].right.len(), 1);
    assert_eq!(pages[1].right.len(), 1);
    assert_eq!(pages[1].right[0].id.as_str(), "r1");
    assert!(pages[1].left.is_empty());
}

#[test]
fn page_one_right_content_comes_from_the_snapshot() {
    let opts = plain_options();
    let mut state = LayoutState::new();
    append_right(&mut state, "r0", 0.0, 200.0, body("r0"), &opts);
    append_right(&mut state, "r1", 0.0, 200.0, body("r1"), &opts);

    // The live right buffer holds both entries, but page 1 must render
    // from the frozen snapshot.
    let snapshot = state.page_one_right.clone().unwrap();
    let pages = assemble(&state, Scale::new(1.0));

    assert_eq!(pages[0].right, snapshot);
}

#[test]
fn block_placements_appear_on_their_own_pages() {
    let opts = plain_options();
    let mut state = LayoutState::new();
    append_right(&mut state, "fill", 0.0, 290.0, body("fill"), &opts);
    append_reconciled(&mut state, "b0", 0.0, 100.0, body("b0"), &opts);

    let pages = assemble(&state, Scale::new(1.0));

    assert_eq!(pages.len(), 2);
    assert!(pages[0].block.is_empty());
    assert_eq!(pages[1].block.len(), 1);
    assert!(pages[1].right.is_empty());
}

#[test]
fn assembled_geometry_is_scaled() {
    let opts = plain_options();
    let mut state = LayoutState::new();
    state.push_left("l0", 5.0, 40.0, body("l0"));
    append_right(&mut state, "r0", 0.0, 60.0, body("r0"), &opts);

    let pages = assemble(&state, Scale::new(2.0));

    assert_eq!(pages[0].left[0].top, 10.0);
    assert_eq!(pages[0].left[0].height, 80.0);
    assert_eq!(pages[0].right[0].height, 120.0);
    // Payload and identity are untouched by scaling.
    assert_eq!(pages[0].right[0].id.as_str(), "r0");
}

#[test]
fn scaling_changes_geometry_proportionally_and_nothing_else() {
    let opts = plain_options();
    let mut state = LayoutState::new();
    for i in 0..5 {
        append_right(&mut state, format!("r{i}"), 2.0, 80.0, body("r"), &opts);
    }

    let at_one = assemble(&state, Scale::new(1.0));
    let at_three = assemble(&state, Scale::new(3.0));

    for (p1, p3) in at_one.iter().zip(&at_three) {
        assert_eq!(p1.right.len(), p3.right.len());
        for (a, b) in p1.right.iter().zip(&p3.right) {
            assert_eq!(a.id, b.id);
            assert_eq!(a.kind(), b.kind());
            assert!((b.top - 3.0 * a.top).abs() < 1e-3);
            assert!((b.height - 3.0 * a.height).abs() < 1e-3);
        }
    }
}

#[test]
fn verify_accepts_a_clean_state() {
    let opts = plain_options();
    let mut state = LayoutState::new();
    append_right(&mut state, "r0", 0.0, 200.0, body("r0"), &opts);
    append_right(&mut state, "r1", 0.0, 200.0, body("r1"), &opts);

    assert!(verify(&state).is_empty());
}

#[test]
fn verify_flags_a_diverged_snapshot() {
    let opts = plain_options();
    let mut state = LayoutState::new();
    append_right(&mut state, "r0", 0.0, 200.0, body("r0"), &opts);
    append_right(&mut state, "r1", 0.0, 200.0, body("r1"), &opts);

    // Simulate the retroactive-correction bug the two-phase flow
    // eliminates: rewrite a snapshotted placement in the live buffer.
    state.right[0].top += 1.0;

    let warnings = verify(&state);
    assert!(warnings.contains(&crate::LayoutWarning::SnapshotDivergence));
}

#[test]
fn verify_flags_a_straddling_sidebar() {
    let mut state = LayoutState::new();
    state.push_left("l0", 0.0, 250.0, body("l0"));
    state.push_left("l1", 0.0, 100.0, body("l1"));

    // The sidebar never page-breaks; l1 runs from 250 to 350, crossing
    // the page-1 boundary.
    let warnings = verify(&state);
    assert!(matches!(
        warnings.as_slice(),
        [crate::LayoutWarning::BoundaryStraddle { page: 1, .. }]
    ));
}

#[test]
fn layout_is_deterministic() {
    let opts = plain_options();
    let build = || {
        let mut state = LayoutState::new();
        for i in 0..12 {
            append_right(&mut state, format!("r{i}"), 2.5, 47.0, body("r"), &opts);
        }
        assemble(&state, Scale::new(2.0))
    };

    assert_eq!(build(), build());
}
