use super::{SyntaxElement, SyntaxNode};
use crate::green::GreenBuilder;
use crate::kind::SyntaxKind;

fn flat_root() -> SyntaxNode {
    let mut builder = GreenBuilder::new();
    builder.start_node(SyntaxKind::Root);
    builder.token(SyntaxKind::IntLiteral, "12");
    builder.token(SyntaxKind::Whitespace, " ");
    builder.token(SyntaxKind::Identifier, "żółw");
    builder.finish_node().unwrap();
    SyntaxNode::new_root(builder.finish().unwrap())
}

#[test]
fn root_sits_at_offset_zero_without_parent() {
    let root = flat_root();
    assert_eq!(root.offset(), 0);
    assert_eq!(root.kind(), SyntaxKind::Root);
    assert!(root.parent().is_none());
    assert_eq!(root.span().end(), root.width());
}

#[test]
fn children_accumulate_absolute_offsets() {
    let root = flat_root();

    let offsets: Vec<_> = root
        .children()
        .map(|child| (child.offset(), child.width()))
        .collect();
    assert_eq!(offsets, [(0, 2), (2, 1), (3, 4)]);

    for child in root.children() {
        let parent = match &child {
            SyntaxElement::Node(node) => node.parent(),
            SyntaxElement::Token(token) => token.parent(),
        };
        assert_eq!(parent.unwrap().green(), root.green());
    }
}

#[test]
fn nested_views_carry_absolute_offsets() {
    let mut builder = GreenBuilder::new();
    builder.start_node(SyntaxKind::Root);
    builder.token(SyntaxKind::Whitespace, "  ");
    builder.start_node(SyntaxKind::Error);
    builder.token(SyntaxKind::Plus, "+");
    builder.finish_node().unwrap();
    builder.finish_node().unwrap();
    let root = SyntaxNode::new_root(builder.finish().unwrap());

    let error = root
        .children()
        .find_map(|child| child.as_node().cloned())
        .unwrap();
    assert_eq!(error.kind(), SyntaxKind::Error);
    assert_eq!(error.offset(), 2);
    assert_eq!(error.span().start(), 2);
    assert_eq!(error.span().end(), 3);

    let plus = error.tokens().next().unwrap();
    assert_eq!(plus.offset(), 2);
    assert_eq!(plus.text(), "+");
    assert_eq!(plus.parent().unwrap().green(), error.green());
}

#[test]
fn tokens_filters_node_children() {
    let mut builder = GreenBuilder::new();
    builder.start_node(SyntaxKind::Root);
    builder.token(SyntaxKind::IntLiteral, "1");
    builder.start_node(SyntaxKind::Error);
    builder.token(SyntaxKind::Plus, "+");
    builder.finish_node().unwrap();
    builder.token(SyntaxKind::IntLiteral, "2");
    builder.finish_node().unwrap();
    let root = SyntaxNode::new_root(builder.finish().unwrap());

    let texts: Vec<_> = root.tokens().map(|token| token.text().to_owned()).collect();
    assert_eq!(texts, ["1", "2"]);

    let first = root.children().next().unwrap();
    assert_eq!(first.kind(), SyntaxKind::IntLiteral);
    assert!(first.as_token().is_some());
    assert_eq!(first.span().len(), 1);
}
