//! End-to-end tests for assembling generated files.
//!
//! Inline snapshots show the full file layout; run `cargo insta review` after
//! intentional changes to the output format.

use std::fs;

use printwright_codegen::{
    Printer, PrinterConfig,
    testing::{FailingWriter, assert_content_eq, write_to_temp},
};

/// Emit a small equality function that needs `bytes` and, optionally, a
/// second package that also wants to be called `bytes`.
fn emit_equal(p: &mut Printer, order: &[(&str, &str)]) {
    let imports: Vec<_> = order
        .iter()
        .map(|(name, path)| p.new_import(*name, *path))
        .collect();
    p.push_line("func deriveEqual(a, b []byte) bool {");
    p.push_indent();
    for import in &imports {
        p.push_fmt(format_args!("_ = {}.Equal", import.resolve()));
    }
    p.push_line("return true");
    p.push_dedent();
    p.push_line("}");
}

#[test]
fn test_colliding_imports_snapshot() {
    let mut p = Printer::new("derived");
    let std_fmt = p.new_import("fmt", "fmt");
    let pkg_fmt = p.new_import("fmt", "example.com/pkg/fmt");

    assert_eq!(std_fmt.resolve(), "fmt");
    assert_eq!(pkg_fmt.resolve(), "example_com_pkg_fmt");

    p.push_line("func deriveString() string {");
    p.push_indent();
    p.push_fmt(format_args!(
        "return {}.Sprint({}.Name)",
        std_fmt.resolve(),
        pkg_fmt.resolve()
    ));
    p.push_dedent();
    p.push_line("}");

    insta::assert_snapshot!(p.render(), @r#"
// Code generated by printwright DO NOT EDIT.

package derived

import (
	example_com_pkg_fmt "example.com/pkg/fmt"
	"fmt"
)
func deriveString() string {
	return fmt.Sprint(example_com_pkg_fmt.Name)
}
"#);
}

#[test]
fn test_vendored_imports_snapshot() {
    let mut p = Printer::new("derived");
    let a = p.new_import("errors", "github.com/app/vendor/github.com/pkg/errors");
    let b = p.new_import("errors", "github.com/pkg/errors");
    let sort = p.import_path("sort");

    p.push_fmt(format_args!("var _ = {}.New", a.resolve()));
    p.push_fmt(format_args!("var _ = {}.Wrap", b.resolve()));
    p.push_fmt(format_args!("var _ = {}.Strings", sort.resolve()));

    insta::assert_snapshot!(p.render(), @r#"
// Code generated by printwright DO NOT EDIT.

package derived

import (
	errors "github.com/pkg/errors"
	"sort"
)
var _ = errors.New
var _ = errors.Wrap
var _ = sort.Strings
"#);
}

#[test]
fn test_output_independent_of_declaration_order() {
    let paths = [("bytes", "bytes"), ("strings", "strings"), ("sort", "sort")];
    let mut reversed = paths;
    reversed.reverse();

    let mut a = Printer::new("derived");
    emit_equal(&mut a, &paths);
    let mut b = Printer::new("derived");
    emit_equal(&mut b, &reversed);

    let header = |p: &Printer| {
        let out = p.render();
        let end = out.find(")\n").expect("import block") + 2;
        out[..end].to_string()
    };
    assert_content_eq(&header(&a), &header(&b));
    assert!(header(&a).contains("\t\"bytes\"\n\t\"sort\"\n\t\"strings\"\n"));
}

#[test]
fn test_same_path_always_same_alias() {
    let p = Printer::new("derived");
    let first = p.new_import("reflect", "reflect");
    assert_eq!(first.resolve(), "reflect");

    for name in ["reflect", "refl", ""] {
        let again = p.new_import(name, "reflect");
        assert_eq!(again.resolve(), "reflect");
        assert_eq!(again.resolve(), "reflect");
    }
    assert!(p.has_imports());
}

#[test]
fn test_same_name_distinct_paths_get_distinct_aliases() {
    let p = Printer::new("derived");
    let a = p.new_import("json", "encoding/json");
    let b = p.new_import("json", "github.com/fast/json");

    let (a, b) = (a.resolve(), b.resolve());
    assert!(!a.is_empty());
    assert!(!b.is_empty());
    assert_ne!(a, b);
    assert_eq!(b, "github_com_fast_json");
}

#[test]
fn test_import_path_with_trailing_slash() {
    let mut p = Printer::new("derived");
    let x = p.import_path("example.com/x/");
    assert_eq!(x.resolve(), "x");
    p.push_fmt(format_args!("var _ = {}.X", x.resolve()));

    assert_content_eq(
        "// Code generated by printwright DO NOT EDIT.\n\n\
         package derived\n\n\
         import (\n\
         \tx \"example.com/x/\"\n\
         )\n\
         var _ = x.X\n",
        &p.render(),
    );
}

#[test]
fn test_has_content_after_single_line() {
    let mut p = Printer::new("derived");
    assert!(!p.has_content());
    p.push_line("");
    assert!(p.has_content());
}

#[test]
#[should_panic(expected = "bug in code generator")]
fn test_unbalanced_dedent_aborts() {
    let mut p = Printer::new("derived");
    p.push_indent();
    p.push_line("x := 1");
    p.push_dedent();
    p.push_dedent();
}

#[test]
#[should_panic(expected = "non unique import alias 'a_b'")]
fn test_ambiguous_fallback_aborts() {
    let p = Printer::new("derived");
    p.new_import("b", "x/b").resolve();
    p.new_import("b", "a/b").resolve();
    p.new_import("b", "a-b").resolve();
}

#[test]
fn test_write_to_file() {
    let mut p = Printer::new("derived");
    let strings = p.new_import("strings", "strings");
    p.push_fmt(format_args!("var _ = {}.Join", strings.resolve()));

    let (_dir, path) = write_to_temp(&p, "derived.gen.go").unwrap();
    assert_content_eq(&p.render(), &fs::read_to_string(path).unwrap());
}

#[test]
fn test_write_failure_returns_partial_count() {
    let mut p = Printer::new("derived");
    p.push_line("var x = 1");
    let total = p.render().len() as u64;

    let mut sink = FailingWriter::new(total - 3);
    let err = p.write_to(&mut sink).unwrap_err();
    assert_eq!(err.written, total - 3);
    assert_eq!(sink.attempts_after_failure(), 0);

    let mut sink = FailingWriter::new(total);
    assert_eq!(p.write_to(&mut sink).unwrap(), total);
}

#[test]
fn test_printer_from_config_file() {
    let dir = tempfile::TempDir::new().unwrap();
    let config_path = dir.path().join("printwright.toml");
    fs::write(&config_path, "generator = \"goderive\"\nindent = 4\n").unwrap();
    let config = PrinterConfig::load(&config_path).unwrap();

    let mut p = Printer::with_config("derived", &config);
    p.push_block("func f() {", "}", |p| {
        p.push_line("return");
    });

    insta::assert_snapshot!(p.render(), @r#"
// Code generated by goderive DO NOT EDIT.

package derived
func f() {
    return
}
"#);
}
