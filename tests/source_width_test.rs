use std::fs;
use std::path::Path;

const MAX_WIDTH: usize = 100;

fn overlong_lines(dir: &Path, found: &mut Vec<String>) {
    for entry in fs::read_dir(dir).unwrap() {
        let path = entry.unwrap().path();
        if path.is_dir() {
            overlong_lines(&path, found);
        } else if path.extension().is_some_and(|ext| ext == "rs") {
            let text = fs::read_to_string(&path).unwrap();
            for (i, line) in text.lines().enumerate() {
                if line.chars().count() > MAX_WIDTH {
                    found.push(format!("{}:{}", path.display(), i + 1));
                }
            }
        }
    }
}

#[test]
fn test_sources_fit_max_width() {
    let root = Path::new(env!("CARGO_MANIFEST_DIR"));
    let mut found = Vec::new();
    for dir in ["src", "tests", "demos", "benches"] {
        overlong_lines(&root.join(dir), &mut found);
    }
    assert!(found.is_empty(), "lines wider than {MAX_WIDTH} columns: {found:?}");
}
