// Copyright 2026 the Accretion Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Exhaustive interleaving checks for the attachment state machine.
//!
//! Enumerates every owner/platform event sequence up to a fixed depth,
//! filters to sequences the platform contract permits, replays each against
//! a fresh attachment, and validates the renderer call log.

use accretion_harness::{
    RendererCall, ScriptEvent, is_platform_valid, run_script, validate_sequence,
};

const ALPHABET: [ScriptEvent; 5] = [
    ScriptEvent::Attach,
    ScriptEvent::Detach,
    ScriptEvent::SurfaceCreated(1),
    ScriptEvent::SurfaceChanged(64, 48),
    ScriptEvent::SurfaceDestroyed,
];

fn for_each_sequence(depth: usize, mut visit: impl FnMut(&[ScriptEvent])) {
    let mut stack = Vec::with_capacity(depth);
    fn recurse(
        depth: usize,
        stack: &mut Vec<ScriptEvent>,
        visit: &mut impl FnMut(&[ScriptEvent]),
    ) {
        visit(stack);
        if stack.len() == depth {
            return;
        }
        for event in ALPHABET {
            stack.push(event);
            recurse(depth, stack, visit);
            stack.pop();
        }
    }
    recurse(depth, &mut stack, &mut visit);
}

#[test]
fn every_interleaving_yields_a_well_formed_call_sequence() {
    let mut checked = 0_u64;
    for_each_sequence(6, |events| {
        if !is_platform_valid(events) {
            return;
        }
        let log = run_script(events);
        if let Err(e) = validate_sequence(&log.calls()) {
            panic!("sequence {events:?} produced invalid log {:?}: {e}", log.calls());
        }
        checked += 1;
    });
    // Sanity check that the filter did not silently exclude everything.
    assert!(checked > 1_000, "only {checked} sequences were checked");
}

#[test]
fn creates_and_destroys_stay_balanced_per_renderer() {
    for_each_sequence(6, |events| {
        if !is_platform_valid(events) {
            return;
        }
        let log = run_script(events);
        for id in 1..=6 {
            let calls = log.calls_for(id);
            let creates = calls
                .iter()
                .filter(|c| matches!(c, RendererCall::SurfaceCreated(_)))
                .count();
            let destroys = calls
                .iter()
                .filter(|c| matches!(c, RendererCall::SurfaceDestroyed))
                .count();
            // A renderer may end the script still connected (one unmatched
            // create); it can never see more destroys than creates.
            assert!(
                destroys == creates || destroys + 1 == creates,
                "sequence {events:?}: renderer {id} saw {creates} creates, {destroys} destroys"
            );
        }
    });
}

#[test]
fn displaced_renderer_is_severed_before_successor_is_called() {
    // attach R1, surface appears, attach R2 displaces R1.
    let log = run_script(&[
        ScriptEvent::Attach,
        ScriptEvent::SurfaceCreated(1),
        ScriptEvent::Attach,
    ]);
    assert_eq!(
        log.calls(),
        vec![
            (1, RendererCall::SurfaceCreated(1)),
            (1, RendererCall::DetachFromSurface),
            (2, RendererCall::SurfaceCreated(1)),
        ]
    );
}

#[test]
fn surface_first_attach_second_connects_immediately() {
    let log = run_script(&[ScriptEvent::SurfaceCreated(1), ScriptEvent::Attach]);
    assert_eq!(log.calls(), vec![(1, RendererCall::SurfaceCreated(1))]);
}

#[test]
fn owner_events_without_surface_produce_no_calls() {
    let log = run_script(&[
        ScriptEvent::Attach,
        ScriptEvent::Detach,
        ScriptEvent::Detach,
        ScriptEvent::Attach,
    ]);
    assert!(log.calls().is_empty());
}
