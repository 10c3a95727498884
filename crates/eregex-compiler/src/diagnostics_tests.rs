use crate::test_utils::compile_error;

#[test]
fn renders_message_and_hint() {
    let err = compile_error("a{2,1}");
    let out = err.printer().render();

    assert!(out.contains("error: invalid content inside braces"), "{out}");
    assert!(out.contains("a{2,1}"), "{out}");
    assert!(out.contains("n <= m <= 255"), "{out}");
    assert!(out.contains("^^^^^"), "{out}");
}

#[test]
fn error_at_end_of_pattern() {
    let err = compile_error("(ab");
    let out = err.printer().render();

    assert!(out.contains("mismatching parenthesis"), "{out}");
    assert!(out.contains("(ab"), "{out}");
}

#[test]
fn path_is_shown() {
    let err = compile_error("[z-a]");
    let out = err.printer().path("<pattern>").render();

    assert!(out.contains("<pattern>"), "{out}");
    assert!(out.contains("invalid character range"), "{out}");
}

#[test]
fn colored_output_has_escapes() {
    let err = compile_error("*");
    let out = err.printer().colored(true).render();
    assert!(out.contains("\x1b["), "{out}");
}
