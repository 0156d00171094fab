use super::*;
use gitcompare_core::error::{Error, ErrorKind};

fn interaction(filter_text: &str, focused: Option<&str>) -> InteractionState {
    InteractionState {
        focused_branch: focused.map(branch),
        filter_text: filter_text.into(),
        panel_visible: false,
        selected_commit: Some(CommitId("abc".into())),
    }
}

#[test]
fn reconcile_into_history_resets_filter_and_focus() {
    let before = interaction("feat", Some("feature"));
    let after = reconcile(
        &before,
        &comparing("feature", ComparisonMode::Behind),
        &ComparisonState::None,
    );

    assert_eq!(after.filter_text, "");
    assert_eq!(after.focused_branch, None);
    assert_eq!(after.selected_commit, before.selected_commit);
}

#[test]
fn reconcile_between_branches_syncs_filter_text_only() {
    let before = interaction("a", Some("other"));
    let after = reconcile(
        &before,
        &comparing("a", ComparisonMode::Behind),
        &comparing("b", ComparisonMode::Ahead),
    );

    assert_eq!(after.filter_text, "b");
    assert_eq!(after.focused_branch, Some(branch("other")));
    assert_eq!(after.selected_commit, before.selected_commit);
}

#[test]
fn reconcile_mode_change_on_same_branch_keeps_typing() {
    let before = interaction("half-typ", Some("a"));
    let after = reconcile(
        &before,
        &comparing("a", ComparisonMode::Behind),
        &comparing("a", ComparisonMode::Ahead),
    );
    assert_eq!(after, before);
}

#[test]
fn reconcile_history_to_history_is_identity() {
    let before = interaction("typing", Some("a"));
    let after = reconcile(&before, &ComparisonState::None, &ComparisonState::None);
    assert_eq!(after, before);
}

#[test]
fn reconcile_entering_comparison_resets_filter_and_focus() {
    let before = interaction("fea", Some("feature"));
    let after = reconcile(
        &before,
        &ComparisonState::None,
        &comparing("feature", ComparisonMode::Behind),
    );
    assert_eq!(after.filter_text, "");
    assert_eq!(after.focused_branch, None);
    assert_eq!(after.selected_commit, before.selected_commit);
}

#[test]
fn coordinator_started_comparison_clears_in_progress_typing() {
    let mut state = new_state();
    reduce(&mut state, Msg::InputFocused);
    reduce(&mut state, Msg::FilterTextChanged("half-typ".into()));
    reduce(
        &mut state,
        Msg::SelectionChanged {
            branch: Some(branch("half-typed")),
            source: SelectionSource::Filter,
        },
    );

    push(&mut state, comparing("feature", ComparisonMode::Behind));

    assert_eq!(state.interaction.filter_text, "");
    assert_eq!(state.interaction.focused_branch, None);
    assert!(state.interaction.panel_visible);
    assert_eq!(state.comparison.branch().map(|b| b.name.as_str()), Some("feature"));
}

#[test]
fn pushed_history_state_resets_interaction() {
    let mut state = new_state();
    push(&mut state, comparing("a", ComparisonMode::Behind));
    reduce(&mut state, Msg::FilterTextChanged("typed".into()));
    reduce(
        &mut state,
        Msg::SelectionChanged {
            branch: Some(branch("a")),
            source: SelectionSource::Filter,
        },
    );

    assert!(push(&mut state, ComparisonState::None).is_empty());
    assert_eq!(state.interaction.filter_text, "");
    assert_eq!(state.interaction.focused_branch, None);
    assert_eq!(state.comparison, ComparisonState::None);
}

#[test]
fn pushed_branch_switch_syncs_filter_but_not_focus() {
    let mut state = new_state();
    push(&mut state, comparing("a", ComparisonMode::Behind));
    reduce(
        &mut state,
        Msg::SelectionChanged {
            branch: Some(branch("c")),
            source: SelectionSource::Filter,
        },
    );

    push(&mut state, comparing("b", ComparisonMode::Ahead));

    assert_eq!(state.interaction.filter_text, "b");
    assert_eq!(state.interaction.focused_branch, Some(branch("c")));
}

#[test]
fn mode_changes_never_clear_selected_commit() {
    let mut state = new_state();
    reduce(&mut state, Msg::CommitSelected(CommitId("abc".into())));

    push(&mut state, comparing("a", ComparisonMode::Behind));
    push(&mut state, comparing("b", ComparisonMode::Ahead));
    push(&mut state, ComparisonState::None);

    assert_eq!(
        state.interaction.selected_commit,
        Some(CommitId("abc".into()))
    );
}

#[test]
fn tab_click_recomputes_same_branch_with_new_mode() {
    let mut state = new_state();
    push(&mut state, comparing("feature", ComparisonMode::Behind));

    assert_eq!(
        reduce(&mut state, Msg::TabClicked(1)),
        vec![Effect::ExecuteComparison(CompareAction::Branch {
            branch: branch("feature"),
            mode: ComparisonMode::Ahead,
        })]
    );
    assert_eq!(
        reduce(&mut state, Msg::TabClicked(0)),
        vec![Effect::ExecuteComparison(CompareAction::Branch {
            branch: branch("feature"),
            mode: ComparisonMode::Behind,
        })]
    );
}

#[test]
fn tab_click_in_history_or_out_of_range_is_a_noop() {
    let mut state = new_state();
    assert!(reduce(&mut state, Msg::TabClicked(0)).is_empty());

    push(&mut state, comparing("feature", ComparisonMode::Behind));
    assert!(reduce(&mut state, Msg::TabClicked(2)).is_empty());
}

#[test]
fn merge_is_only_issued_while_comparing() {
    let mut state = new_state();
    assert!(reduce(&mut state, Msg::MergeClicked).is_empty());
    assert_eq!(state.merge_in_flight, None);

    push(&mut state, comparing("feature", ComparisonMode::Behind));
    assert_eq!(
        reduce(&mut state, Msg::MergeClicked),
        vec![Effect::MergeBranch {
            branch: "feature".into()
        }]
    );
    assert_eq!(state.merge_in_flight.as_deref(), Some("feature"));

    // A second click while the first merge is pending does nothing.
    assert!(reduce(&mut state, Msg::MergeClicked).is_empty());
}

#[test]
fn merge_completion_returns_to_history_regardless_of_outcome() {
    let outcomes: [Result<(), Error>; 2] = [
        Ok(()),
        Err(Error::new(ErrorKind::MergeConflicts {
            branch: "feature".into(),
        })),
    ];

    for result in outcomes {
        let mut state = new_state();
        push(&mut state, comparing("feature", ComparisonMode::Behind));
        reduce(&mut state, Msg::MergeClicked);

        let effects = reduce(
            &mut state,
            Msg::MergeFinished {
                branch: "feature".into(),
                result,
            },
        );

        assert_eq!(
            effects,
            vec![Effect::ExecuteComparison(CompareAction::History)]
        );
        assert_eq!(state.interaction.filter_text, "");
        assert_eq!(state.merge_in_flight, None);
    }
}

#[test]
fn snapshot_pushed_during_merge_still_applies() {
    let mut state = new_state();
    push(&mut state, comparing("feature", ComparisonMode::Behind));
    reduce(&mut state, Msg::MergeClicked);

    reduce(
        &mut state,
        Msg::ComparisonSnapshotPushed(snapshot(comparing("feature", ComparisonMode::Ahead), 4)),
    );

    assert_eq!(state.comparison.mode(), Some(ComparisonMode::Ahead));
    assert_eq!(state.commit_ids.len(), 4);
    assert_eq!(state.merge_in_flight.as_deref(), Some("feature"));
}
