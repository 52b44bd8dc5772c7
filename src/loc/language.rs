/// Language label used for files whose extension is not in the table.
pub const OTHER: &str = "Other";

/// Comment syntax for one language: single-line prefixes and an optional
/// block comment (open, close) pair.
#[derive(Debug)]
pub struct CommentStyle {
    pub line_comments: &'static [&'static str],
    pub block_comment: Option<(&'static str, &'static str)>,
}

#[derive(Debug)]
pub struct LanguageSpec {
    pub name: &'static str,
    pub extensions: &'static [&'static str],
    pub comments: Option<CommentStyle>,
}

macro_rules! lang {
    ($name:expr, ext: [$($ext:expr),+], line: [$($lc:expr),+], block: $bo:expr, $bc:expr) => {
        LanguageSpec {
            name: $name,
            extensions: &[$($ext),+],
            comments: Some(CommentStyle {
                line_comments: &[$($lc),+],
                block_comment: Some(($bo, $bc)),
            }),
        }
    };
    ($name:expr, ext: [$($ext:expr),+], line: [$($lc:expr),+]) => {
        LanguageSpec {
            name: $name,
            extensions: &[$($ext),+],
            comments: Some(CommentStyle {
                line_comments: &[$($lc),+],
                block_comment: None,
            }),
        }
    };
    ($name:expr, ext: [$($ext:expr),+], block: $bo:expr, $bc:expr) => {
        LanguageSpec {
            name: $name,
            extensions: &[$($ext),+],
            comments: Some(CommentStyle {
                line_comments: &[],
                block_comment: Some(($bo, $bc)),
            }),
        }
    };
    ($name:expr, ext: [$($ext:expr),+], none) => {
        LanguageSpec {
            name: $name,
            extensions: &[$($ext),+],
            comments: None,
        }
    };
}

pub fn languages() -> &'static [LanguageSpec] {
    static LANGUAGES: &[LanguageSpec] = &[
        lang!("JavaScript", ext: [".js", ".jsx"], line: ["//"], block: "/*", "*/"),
        lang!("TypeScript", ext: [".ts", ".tsx"], line: ["//"], block: "/*", "*/"),
        // Docstrings stand in for block comments.
        lang!("Python", ext: [".py"], line: ["#"], block: "\"\"\"", "\"\"\""),
        lang!("Lua", ext: [".lua"], line: ["--"], block: "--[[", "]]"),
        lang!("HTML", ext: [".html"], block: "<!--", "-->"),
        lang!("CSS", ext: [".css"], block: "/*", "*/"),
        lang!("JSON", ext: [".json"], none),
        lang!("YAML", ext: [".yaml", ".yml"], none),
        lang!("Markdown", ext: [".md"], none),
        lang!("Shell", ext: [".sh", ".bash"], line: ["#"]),
        lang!("Go", ext: [".go"], line: ["//"], block: "/*", "*/"),
        lang!("Java", ext: [".java"], line: ["//"], block: "/*", "*/"),
        lang!("C", ext: [".c"], line: ["//"], block: "/*", "*/"),
        lang!("C++", ext: [".cpp"], line: ["//"], block: "/*", "*/"),
        lang!("C/C++ Header", ext: [".h"], none),
        lang!("Rust", ext: [".rs"], line: ["//"], block: "/*", "*/"),
        lang!("Ruby", ext: [".rb"], line: ["#"]),
        lang!("PHP", ext: [".php"], line: ["//", "#"], block: "/*", "*/"),
    ];
    LANGUAGES
}

/// Extension of a file name, from its last `.` inclusive, lower-cased.
/// A name without a dot is returned whole.
fn extension_of(file_name: &str) -> String {
    match file_name.rfind('.') {
        Some(dot) => file_name[dot..].to_lowercase(),
        None => file_name.to_lowercase(),
    }
}

/// Look up the language spec for a path (relative or absolute, `/` or `\`
/// separated). Returns `None` for unrecognized extensions.
pub fn detect(path: &str) -> Option<&'static LanguageSpec> {
    let file_name = path.rsplit(['/', '\\']).next().unwrap_or(path);
    let ext = extension_of(file_name);
    languages()
        .iter()
        .find(|spec| spec.extensions.contains(&ext.as_str()))
}

/// Language label for a path, `Other` when unrecognized.
pub fn language_of(path: &str) -> &'static str {
    detect(path).map_or(OTHER, |spec| spec.name)
}

/// Comment style registered for a language label, if any.
pub fn comment_style(language: &str) -> Option<&'static CommentStyle> {
    languages()
        .iter()
        .find(|spec| spec.name == language)
        .and_then(|spec| spec.comments.as_ref())
}

#[cfg(test)]
#[path = "language_test.rs"]
mod tests;
