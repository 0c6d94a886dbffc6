//! Integration tests for end-to-end parsing.
//!
//! These tests run complete programs through tokenization and parsing and
//! check the resulting tree and the rendered diagnostics.

use std::path::Path;

use langparse::{
    ast::{
        ast::{ExprType, Program, StmtType},
        expressions::LambdaExpr,
        statements::{BlockStmt, ClassDeclStmt, FnDeclStmt, ForPropStmt, VarDeclStmt},
    },
    lexer::{lexer::tokenize, tokens::TokenKind},
    parse_source, render_error,
};

const SHAPES: &str = r#"
// Shapes and a registry of their areas
class Point {
    fn constructor(x, y) {
        this.x = x;
        this.y = y;
    }
}

class Point3D extends Point {
    fn constructor(x, y, z) {
        super(x, y);
        this.z = z;
    }
}

let registry = { count: 0, "items": [], ready: false, };
let area = (w, h) -> { return w * h; };

fn register(name, shape) {
    registry["items"][registry.count] = { name: name, shape: shape };
    registry.count += 1;
    return registry.count;
}

for (let i = 0; i < 10; i += 1) {
    if (i == 3) continue;
    else if (i > 8) break;
    register("p" + i, new Point(i, -i));
}

for (let entry : registry.items) {
    let a = area(entry.shape.x, entry.shape.y), unused;
    do { a -= 1; } while (a > 0 && registry.ready);
}
"#;

fn parse(source: &str) -> Program {
    match parse_source(source, Some("test.lang".to_string())) {
        Ok(program) => program,
        Err(e) => panic!("failed to parse: {}", e),
    }
}

#[test]
fn test_parse_full_program() {
    let program = parse(SHAPES);

    let kinds: Vec<StmtType> = program.body.iter().map(|stmt| stmt.get_stmt_type()).collect();
    assert_eq!(
        kinds,
        vec![
            StmtType::ClassDeclStmt,
            StmtType::ClassDeclStmt,
            StmtType::VarDeclStmt,
            StmtType::VarDeclStmt,
            StmtType::FnDeclStmt,
            StmtType::ForStmt,
            StmtType::ForPropStmt,
        ]
    );

    let point3d = program.body[1].downcast_ref::<ClassDeclStmt>().unwrap();
    assert_eq!(point3d.super_class.as_ref().unwrap().name, "Point");

    let registry = program.body[2].downcast_ref::<VarDeclStmt>().unwrap();
    assert_eq!(
        registry.declarations[0].init.as_ref().unwrap().get_expr_type(),
        ExprType::ObjectLiteral
    );

    let area = program.body[3].downcast_ref::<VarDeclStmt>().unwrap();
    let lambda = area.declarations[0]
        .init
        .as_ref()
        .unwrap()
        .downcast_ref::<LambdaExpr>()
        .unwrap();
    assert_eq!(lambda.params.len(), 2);

    let register = program.body[4].downcast_ref::<FnDeclStmt>().unwrap();
    assert_eq!(register.body.body.len(), 3);

    let for_each = program.body[6].downcast_ref::<ForPropStmt>().unwrap();
    let body = for_each.body.downcast_ref::<BlockStmt>().unwrap();
    let decl = body.body[0].downcast_ref::<VarDeclStmt>().unwrap();
    assert_eq!(decl.declarations.len(), 2);
    assert!(decl.declarations[1].init.is_none());
}

#[test]
fn test_parsing_twice_is_identical() {
    let first = parse(SHAPES);
    let second = parse(SHAPES);
    assert_eq!(format!("{:?}", first), format!("{:?}", second));
}

#[test]
fn test_program_span_covers_source() {
    let source = "let a = 1;\nlet b = 2;\n";
    let program = parse(source);

    assert_eq!(program.span.start.0, 0);
    assert_eq!(program.span.end.0 as usize, source.len());
    assert_eq!(*program.span.start.1, "test.lang");
}

#[test]
fn test_tokenizer_output_feeds_parser() {
    let tokens = tokenize("(a, b) -> { return a; }".to_string(), None).unwrap();

    let kinds: Vec<TokenKind> = tokens.iter().map(|token| token.kind).collect();
    assert_eq!(kinds[0], TokenKind::OpenParen);
    assert_eq!(kinds[5], TokenKind::Arrow);
    assert_eq!(*kinds.last().unwrap(), TokenKind::EOF);
    assert_eq!(tokens[0].debug_line(), "0..1 OpenParen");
    assert_eq!(tokens[1].debug_line(), "1..2 Identifier (a)");
}

#[test]
fn test_cover_grammar_errors() {
    let cases = [
        ("{ a: 1 }", "InvalidBlockStatement"),
        ("let o = { x; };", "InvalidObjectLiteral"),
        ("let f = (x + 1) -> { };", "InvalidLambdaParameter"),
        ("1 = 2;", "InvalidAssignmentTarget"),
        ("for (let a, b : data) body;", "InvalidForPropBinding"),
        ("let a = ", "UnexpectedEndOfInput"),
        ("let let = 1;", "UnexpectedToken"),
        ("let s = 'open", "UnexpectedEndOfInput"),
        ("let a = 1 @ 2;", "UnrecognisedToken"),
    ];

    for (source, name) in cases {
        let error = parse_source(source, None).unwrap_err();
        assert_eq!(error.get_error_name(), name, "{}", source);
    }
}

#[test]
fn test_render_error_points_at_offending_token() {
    let source = "let ok = 1;\n    let o = { let x = 1; };\n";
    let error = parse_source(source, Some("shapes.lang".to_string())).unwrap_err();

    let rendered = render_error(&error, source, Path::new("shapes.lang"));
    let lines: Vec<&str> = rendered.lines().collect();

    assert!(lines[0].starts_with("Error: InvalidObjectLiteral"));
    assert_eq!(lines[1], "-> shapes.lang");
    assert_eq!(lines[3], "2 | let o = { let x = 1; };");
    assert_eq!(lines[4], "  | ----------^");
}
