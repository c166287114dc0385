use std::path::Path;

/// Map a file path to a display language name by extension, with a
/// couple of well-known extensionless file names. Unknown files are
/// grouped under "Other" so every row lands in some language bucket.
pub fn language_of(path: &str) -> &'static str {
    let file_name = Path::new(path)
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or(path);

    match file_name {
        "Makefile" | "makefile" => return "Make",
        "Dockerfile" => return "Docker",
        "CMakeLists.txt" => return "CMake",
        _ => {}
    }

    let ext = match file_name.rsplit_once('.') {
        Some((_, e)) => e,
        None => return "Other",
    };

    match ext {
        "rs" => "Rust",
        "go" => "Go",
        "py" => "Python",
        "rb" => "Ruby",
        "java" => "Java",
        "kt" | "kts" => "Kotlin",
        "scala" => "Scala",
        "c" | "h" => "C",
        "cc" | "cpp" | "cxx" | "hpp" | "hh" => "C++",
        "cs" => "C#",
        "swift" => "Swift",
        "js" | "jsx" | "mjs" | "cjs" => "JavaScript",
        "ts" | "tsx" | "mts" | "cts" => "TypeScript",
        "php" => "PHP",
        "ex" | "exs" => "Elixir",
        "erl" => "Erlang",
        "hs" => "Haskell",
        "ml" | "mli" => "OCaml",
        "clj" | "cljs" => "Clojure",
        "lua" => "Lua",
        "dart" => "Dart",
        "r" | "R" => "R",
        "pl" | "pm" => "Perl",
        "sh" | "bash" | "zsh" => "Shell",
        "sql" => "SQL",
        "html" | "htm" => "HTML",
        "css" | "scss" | "sass" | "less" => "CSS",
        "md" | "markdown" => "Markdown",
        "json" => "JSON",
        "yaml" | "yml" => "YAML",
        "toml" => "TOML",
        "xml" => "XML",
        "proto" => "Protobuf",
        "tf" => "Terraform",
        "zig" => "Zig",
        "nim" => "Nim",
        "vue" => "Vue",
        "svelte" => "Svelte",
        _ => "Other",
    }
}
