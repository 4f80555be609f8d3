use bucket_versions_rs::{match_paths, prefix};

#[test]
fn keeps_the_parent_directory() {
    assert_eq!(prefix("hello/(.*).tgz"), "hello/");
    assert_eq!(prefix("hello/world-(.*)"), "hello/");
    assert_eq!(prefix("hello-world/some-file-(.*)"), "hello-world/");
}

#[test]
fn is_empty_without_a_parent_directory() {
    assert_eq!(prefix("(.*).tgz"), "");
    assert_eq!(prefix("hello-(.*).tgz"), "");
}

#[test]
fn skips_regex_path_names() {
    assert_eq!(prefix("hello/(.*)/what.txt"), "hello/");
}

#[test]
fn unescapes_escaped_regex_characters() {
    assert_eq!(
        prefix(r"hello/cruel\[\\\^\$\.\|\?\*\+\(\)world/fizz-(.*).tgz"),
        r"hello/cruel[\^$.|?*+()world/"
    );
}

#[test]
fn truncates_at_regex_specific_escapes() {
    assert_eq!(prefix(r"hello/\d{3}/fizz-(.*).tgz"), "hello/");
    assert_eq!(prefix(r"hello/\d/fizz-(.*).tgz"), "hello/");
}

#[test]
fn never_treats_quantified_literals_as_fixed() {
    assert_eq!(prefix("hello/a{3}/b/(.*)"), "hello/");
    assert_eq!(prefix("hello/world/?(.*)"), "hello/");
}

#[test]
fn prefix_holds_for_every_anchored_match() {
    let cases: [(&str, &[&str]); 5] = [
        ("hello/(.*).tgz", &["hello/a.tgz", "hello/b/c.tgz", "other/a.tgz"]),
        (r"a/b\.c/(\d+)", &["a/b.c/1", "a/bxc/2", "a/b.c/x"]),
        ("data/x?/file", &["data//file", "data/x/file", "data/file"]),
        ("hello/a|b", &["hello/a", "b"]),
        (r"x/y{0}/z", &["x//z", "x/y/z"]),
    ];

    for (pattern, paths) in cases {
        let narrowed = prefix(pattern);
        for path in match_paths(paths, pattern).expect("pattern should compile") {
            assert!(
                path.starts_with(&narrowed),
                "prefix '{narrowed}' of '{pattern}' does not cover '{path}'"
            );
        }
    }
}

#[test]
fn never_fails_on_invalid_patterns() {
    assert_eq!(prefix("hello/a(c"), "hello/");
    assert_eq!(prefix("hello/[unclosed"), "hello/");
}
