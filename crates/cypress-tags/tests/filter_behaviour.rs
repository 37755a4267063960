//! Behavioural coverage for the skip/keep semantics of the traversal:
//! inclusion and exclusion, tag inheritance across nested scopes, the
//! outside-container rule, and subtree-exclusive pruning.

mod support;

use cypress_tags::SyntaxNode;

use support::{body, describe, filter, it, plain_describe, plain_it, tag_array};

#[test]
fn a_tagged_case_survives_empty_filters() {
    let transformed = filter(&[], &[]).apply(it(&["smoke"], "t"));
    assert_eq!(
        transformed,
        SyntaxNode::call(
            SyntaxNode::ident("it"),
            vec![SyntaxNode::str("t"), body(Vec::new())],
        )
    );
}

#[test]
fn inclusion_drops_a_disjoint_case_inside_a_tagged_container() {
    let suite = describe(&["suite"], "d", vec![it(&["perf"], "t")]);
    let transformed = filter(&["smoke"], &[]).apply(suite);
    assert_eq!(transformed, SyntaxNode::Empty);
}

#[test]
fn a_bare_case_is_immune_to_inclusion_filtering() {
    let transformed = filter(&["smoke"], &[]).apply(plain_it("t"));
    assert_eq!(transformed, plain_it("t"));
}

#[test]
fn a_tagged_case_outside_any_container_is_immune_to_inclusion_filtering() {
    let transformed = filter(&["smoke"], &[]).apply(it(&["perf"], "t"));
    assert_eq!(
        transformed,
        SyntaxNode::call(
            SyntaxNode::ident("it"),
            vec![SyntaxNode::str("t"), body(Vec::new())],
        )
    );
}

#[test]
fn exclusion_applies_to_a_case_outside_any_container() {
    let transformed = filter(&[], &["slow"]).apply(it(&["slow"], "t3"));
    assert_eq!(transformed, SyntaxNode::Empty);
}

#[test]
fn a_case_inherits_its_container_tags_for_inclusion() {
    // `it(['B'], ...)` carries {A, B}; the include set names only A.
    let suite = describe(&["A"], "d", vec![it(&["B"], "t")]);
    let transformed = filter(&["A"], &[]).apply(suite);
    assert_eq!(
        transformed,
        SyntaxNode::call(
            SyntaxNode::ident("describe"),
            vec![
                SyntaxNode::str("d"),
                body(vec![SyntaxNode::call(
                    SyntaxNode::ident("it"),
                    vec![SyntaxNode::str("t"), body(Vec::new())],
                )]),
            ],
        )
    );
}

#[test]
fn a_case_inherits_its_container_tags_for_exclusion() {
    let suite = describe(&["A"], "d", vec![it(&["B"], "t1"), it(&["C"], "t2")]);
    let transformed = filter(&[], &["B"]).apply(suite);
    assert_eq!(
        transformed,
        SyntaxNode::call(
            SyntaxNode::ident("describe"),
            vec![
                SyntaxNode::str("d"),
                body(vec![
                    SyntaxNode::Empty,
                    SyntaxNode::call(
                        SyntaxNode::ident("it"),
                        vec![SyntaxNode::str("t2"), body(Vec::new())],
                    ),
                ]),
            ],
        )
    );
}

#[test]
fn pruning_is_subtree_exclusive() {
    // The nested case's own tag matches the include set, but its container
    // is pruned first; nothing below a pruned node is re-evaluated.
    let suite = describe(&["perf"], "P", vec![it(&["smoke"], "t")]);
    let transformed = filter(&["smoke"], &[]).apply(suite);
    assert_eq!(transformed, SyntaxNode::Empty);
}

#[test]
fn an_untagged_container_does_not_scope_inclusion() {
    // Only tagged containers mark the context; cases under an untagged
    // `describe` still count as outside any container.
    let suite = plain_describe("d", vec![plain_it("t"), it(&["perf"], "t2")]);
    let transformed = filter(&["smoke"], &[]).apply(suite);
    assert_eq!(
        transformed,
        plain_describe(
            "d",
            vec![
                plain_it("t"),
                SyntaxNode::call(
                    SyntaxNode::ident("it"),
                    vec![SyntaxNode::str("t2"), body(Vec::new())],
                ),
            ],
        )
    );
}

#[test]
fn keeps_matching_suites_and_prunes_the_rest() {
    let suite = SyntaxNode::block(vec![
        describe(&["smoke"], "S", vec![plain_it("t1")]),
        describe(&["perf"], "P", vec![plain_it("t2")]),
    ]);
    let transformed = filter(&["smoke"], &[]).apply(suite);
    assert_eq!(
        transformed,
        SyntaxNode::block(vec![
            SyntaxNode::call(
                SyntaxNode::ident("describe"),
                vec![SyntaxNode::str("S"), body(vec![plain_it("t1")])],
            ),
            SyntaxNode::Empty,
        ])
    );
}

#[test]
fn member_reference_tags_count_by_property_name() {
    let suite = SyntaxNode::call(
        SyntaxNode::ident("it"),
        vec![
            SyntaxNode::array(vec![
                SyntaxNode::str("A"),
                SyntaxNode::member(SyntaxNode::ident("Tag"), "WIP"),
            ]),
            SyntaxNode::str("t"),
            body(Vec::new()),
        ],
    );
    let transformed = filter(&[], &["WIP"]).apply(suite);
    assert_eq!(transformed, SyntaxNode::Empty);
}

#[test]
fn context_containers_filter_like_describe() {
    let suite = SyntaxNode::call(
        SyntaxNode::ident("context"),
        vec![tag_array(&["perf"]), SyntaxNode::str("P"), body(Vec::new())],
    );
    let transformed = filter(&["smoke"], &[]).apply(suite);
    assert_eq!(transformed, SyntaxNode::Empty);
}

#[test]
fn sibling_suites_do_not_leak_tags_into_each_other() {
    let suite = SyntaxNode::block(vec![
        describe(&["slow"], "S1", vec![plain_it("t1")]),
        describe(&["fast"], "S2", vec![plain_it("t2")]),
    ]);
    let transformed = filter(&[], &["slow"]).apply(suite);
    assert_eq!(
        transformed,
        SyntaxNode::block(vec![
            SyntaxNode::Empty,
            SyntaxNode::call(
                SyntaxNode::ident("describe"),
                vec![SyntaxNode::str("S2"), body(vec![plain_it("t2")])],
            ),
        ])
    );
}
