use super::*;
use crate::Position;
use pretty_assertions::assert_eq;

fn span() -> Span {
    Span::point(Position::START)
}

fn lit(lit: Literal) -> Node {
    Node::new(NodeKind::Literal(lit), span())
}

fn ident(name: &str) -> Node {
    Node::new(NodeKind::Identifier(name.to_string()), span())
}

#[test]
fn test_display_expression() {
    let node = Node::new(
        NodeKind::Expression(vec![ident("+"), lit(Literal::Int(3)), lit(Literal::Float(9.5))]),
        span(),
    );
    assert_eq!(node.to_string(), "(+ 3 9.5)");
}

#[test]
fn test_display_collections() {
    let vector = Node::new(
        NodeKind::Vector(vec![lit(Literal::Nil), lit(Literal::Bool(true))]),
        span(),
    );
    let map = Node::new(
        NodeKind::Map(vec![
            lit(Literal::Symbol("one".to_string())),
            lit(Literal::Int(1)),
        ]),
        span(),
    );
    assert_eq!(vector.to_string(), "[nil true]");
    assert_eq!(map.to_string(), "{:one 1}");
}

#[test]
fn test_display_quoted() {
    let inner = Node::new(NodeKind::Expression(vec![ident("a"), ident("b")]), span());
    let quoted = Node::new(NodeKind::Quoted(Rc::new(inner)), span());
    assert_eq!(quoted.to_string(), "'(a b)");
}

#[test]
fn test_display_string_escapes() {
    let node = lit(Literal::Str("line\n\"quoted\"\t\\".to_string()));
    assert_eq!(node.to_string(), r#""line\n\"quoted\"\t\\""#);
    assert_eq!(Escaped("plain").to_string(), "\"plain\"");
}

#[test]
fn test_display_float_keeps_decimal_point() {
    assert_eq!(lit(Literal::Float(3.0)).to_string(), "3.0");
}

#[test]
fn test_children() {
    let expr = Node::new(NodeKind::Expression(vec![ident("f"), ident("x")]), span());
    assert_eq!(expr.children().len(), 2);
    assert!(ident("x").children().is_empty());

    let quoted = Node::new(NodeKind::Quoted(Rc::new(expr)), span());
    assert!(quoted.children().is_empty());
}

#[test]
fn test_as_identifier() {
    assert_eq!(ident("name").as_identifier(), Some("name"));
    assert_eq!(lit(Literal::Int(1)).as_identifier(), None);
}

#[test]
fn test_describe() {
    assert_eq!(lit(Literal::Symbol("k".into())).describe(), "symbol");
    assert_eq!(ident("x").describe(), "identifier");
    assert_eq!(Node::new(NodeKind::Block(vec![]), span()).describe(), "block");
}

fn nest_vectors(depth: usize) -> Node {
    let mut node = lit(Literal::Int(1));
    for _ in 0..depth {
        node = Node::new(NodeKind::Vector(vec![node]), span());
    }
    node
}

#[test]
fn test_drop_deep_tree() {
    drop(nest_vectors(200_000));

    let mut quoted = lit(Literal::Nil);
    for _ in 0..200_000 {
        quoted = Node::new(NodeKind::Quoted(Rc::new(quoted)), span());
    }
    drop(quoted);
}

#[test]
fn test_drop_keeps_shared_quoted_body() {
    let body = Rc::new(Node::new(
        NodeKind::Expression(vec![ident("+"), lit(Literal::Int(1))]),
        span(),
    ));
    let outer = Node::new(
        NodeKind::Block(vec![Node::new(NodeKind::Quoted(Rc::clone(&body)), span())]),
        span(),
    );
    drop(outer);
    assert_eq!(Rc::strong_count(&body), 1);
    assert_eq!(body.to_string(), "(+ 1)");
}
