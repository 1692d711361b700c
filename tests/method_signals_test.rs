mod common;

use common::ScopeFixture;
use docsignal::model::{Tag, TagKind};
use docsignal::SignatureOrigin;
use indoc::indoc;
use pretty_assertions::assert_eq;

#[test]
fn test_bare_getter_with_setter_sibling() {
    let mut fixture = ScopeFixture::new("Person");
    let age = fixture.method("age").add();
    fixture.method("age=").params(&["value"]).add();

    let method = fixture.wrap(age);
    assert!(method.is_getter());
    assert!(!method.is_setter());
    assert!(!method.has_doc());
    assert!(!method.is_return_mentioned());
    assert!(!method.is_return_described());
}

#[test]
fn test_setter_inherits_documented_getter_return() {
    let mut fixture = ScopeFixture::new("Person");
    fixture
        .method("age")
        .doc("The age of the person.")
        .tag(Tag::returns(&["Integer"], "the age"))
        .add();
    let setter = fixture.method("age=").params(&["value"]).add();

    let method = fixture.wrap(setter);
    assert!(method.is_setter());
    let texts: Vec<&str> = method.return_tags().iter().map(|t| t.text.as_str()).collect();
    assert_eq!(texts, vec!["the age"]);
    assert!(method.is_return_described());
    assert!(method.is_return_mentioned());
    assert!(method.is_return_typed());
}

#[test]
fn test_setter_with_own_return_never_inherits() {
    let mut fixture = ScopeFixture::new("Person");
    fixture
        .method("age")
        .tag(Tag::returns(&["Integer"], "the age"))
        .add();
    let setter = fixture
        .method("age=")
        .params(&["value"])
        .tag(Tag::returns(&["Integer"], ""))
        .add();

    let method = fixture.wrap(setter);
    assert_eq!(method.return_tags().len(), 1);
    assert!(method.return_tags()[0].text.is_empty());
    assert!(method.is_return_mentioned());
    assert!(!method.is_return_described());
}

#[test]
fn test_writer_name_without_single_parameter_does_not_inherit() {
    let mut fixture = ScopeFixture::new("Matrix");
    fixture
        .method("[]")
        .params(&["row", "col"])
        .tag(Tag::returns(&["Float"], "the cell"))
        .add();
    let writer = fixture.method("[]=").params(&["row", "col", "value"]).add();

    let method = fixture.wrap(writer);
    assert!(!method.is_setter());
    assert!(method.return_tags().is_empty());
}

#[test]
fn test_void_return_tag_counts_as_description() {
    let mut fixture = ScopeFixture::new("Cache");
    let clear = fixture
        .method("clear!")
        .tag(Tag::returns(&["void"], ""))
        .add();

    let method = fixture.wrap(clear);
    assert!(method.is_bang_name());
    assert!(method.is_return_described());
}

#[test]
fn test_implicit_docstring_is_not_return_evidence() {
    let mut fixture = ScopeFixture::new("Report");
    let total = fixture
        .method("total")
        .synthesized_doc("Returns the grand total of all rows")
        .add();

    let method = fixture.wrap(total);
    assert!(!method.is_return_mentioned());
    assert!(!method.is_return_described());
    assert!(!method.has_doc());
    assert_eq!(method.original_docstring(), "");
}

#[test]
fn test_authored_docstring_return_prose() {
    let mut fixture = ScopeFixture::new("Report");
    let total = fixture
        .method("total")
        .doc(indoc! {"
            Sums every row.

            Returns the grand total of all rows.
        "})
        .add();

    let method = fixture.wrap(total);
    assert!(method.has_doc());
    assert!(method.is_return_mentioned());
    assert!(method.is_return_described());
    assert!(method.original_docstring().starts_with("Sums every row."));
}

#[test]
fn test_restated_overload_supplies_return_tag() {
    let mut fixture = ScopeFixture::new("Parser");
    let parse = fixture
        .method("parse")
        .params(&["input"])
        .overload(
            &["input"],
            vec![Tag::returns(&["Ast"], "the syntax tree")],
            "Parses a string.",
        )
        .add();

    let method = fixture.wrap(parse);
    assert_eq!(method.signatures().len(), 1);
    assert_eq!(method.signatures()[0].origin(), SignatureOrigin::Overload(0));
    assert_eq!(method.return_tags().len(), 1);
    assert_eq!(method.return_tags()[0].text, "the syntax tree");
    assert!(method.is_return_described());
    assert!(method.has_doc());
}

#[test]
fn test_only_first_return_of_each_overload_is_used() {
    let mut fixture = ScopeFixture::new("Parser");
    let parse = fixture
        .method("parse")
        .params(&["input"])
        .tag(Tag::returns(&["Ast"], "own"))
        .overload(
            &["input", "strict: true"],
            vec![
                Tag::returns(&["Ast"], "first"),
                Tag::returns(&["nil"], "second"),
            ],
            "",
        )
        .add();

    let method = fixture.wrap(parse);
    let texts: Vec<&str> = method.return_tags().iter().map(|t| t.text.as_str()).collect();
    assert_eq!(texts, vec!["own", "first"]);
    assert_eq!(method.signatures().len(), 2);
}

#[test]
fn test_has_doc_through_overload_only() {
    let mut fixture = ScopeFixture::new("Parser");
    let parse = fixture
        .method("parse")
        .params(&["input"])
        .overload(&["input", "options"], vec![], "Parses with options.")
        .add();

    let method = fixture.wrap(parse);
    assert!(method.has_doc());
    assert!(method.has_multiple_signatures());
}

#[test]
fn test_code_example_via_example_tag() {
    let mut fixture = ScopeFixture::new("Parser");
    let parse = fixture
        .method("parse")
        .tag(Tag::new(TagKind::Example).with_text("Parser.new.parse('x')"))
        .add();

    assert!(fixture.wrap(parse).has_code_example());
}

#[test]
fn test_constructor_and_override_chain() {
    let mut fixture = ScopeFixture::new("Widget");
    let base = fixture.method("initialize").doc("Builds a widget.").add();
    let child = fixture.method("initialize").overrides(base).add();

    let method = fixture.wrap(child);
    assert!(method.is_constructor());
    assert!(method.is_overridden());
    assert_eq!(
        method.overridden_method_fullname(),
        Some("Widget#initialize")
    );
    let parent = method.overridden_method().unwrap();
    assert!(parent.has_doc());
    assert!(!parent.is_overridden());
}

#[test]
fn test_wrapping_twice_is_interchangeable() {
    let mut fixture = ScopeFixture::new("Person");
    let age = fixture
        .method("age")
        .doc("Age in years.")
        .tag(Tag::returns(&["Integer"], "whole years"))
        .add();
    fixture.method("age=").params(&["value"]).add();
    let alias = fixture.method("years").aliases(&[age]).add();

    let first = fixture.wrap(age);
    let second = fixture.wrap(age);
    assert_eq!(first.signals(), second.signals());
    assert_eq!(fixture.wrap(alias).aliases_fullnames(), vec!["Person#age"]);
}
