use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Get a Command for bibkeep
pub fn bibkeep() -> Command {
    cargo_bin_cmd!("bibkeep")
}

/// Bibliography with one annotated entry and one unannotated entry
#[allow(dead_code)]
pub const TWO_ENTRY_BIB: &str = "\
## Research

### Jane Doe. (2024). **Memory Safety**. *example.com*
**URL:** https://www.example.com/memory-safety

**Key Findings:**
Borrow checking prevents use-after-free.

<details><summary>Content preview (click to expand)</summary>

```
Memory safety article text.
```
</details>

---

### **Async Runtimes**. *blog.dev*
**URL:** https://blog.dev/async-runtimes

<details><summary>Content preview (click to expand)</summary>

```
Async runtime comparison text.
```
</details>

---
";

/// One fetched-content record with full metadata, as a JSON object
#[allow(dead_code)]
pub const FULL_RECORD: &str = r#"{
  "url": "https://www.example.com/article",
  "title": "Example Title",
  "authors": ["Jane Doe"],
  "date": "2024-03-09",
  "content": "Body text here.",
  "annotation": "Establishes X."
}"#;

/// Write bibliography contents into the directory, returning the file path
#[allow(dead_code)]
pub fn write_bib(dir: &TempDir, contents: &str) -> PathBuf {
    let path = dir.path().join("bibliography.md");
    std::fs::write(&path, contents).unwrap();
    path
}

/// Read a bibliography file back
#[allow(dead_code)]
pub fn read_bib(path: &Path) -> String {
    std::fs::read_to_string(path).unwrap()
}

/// Run bibkeep against a file and return stdout as String
#[allow(dead_code)]
pub fn run_and_get_stdout(dir: &TempDir, args: &[&str]) -> String {
    let output = bibkeep()
        .current_dir(dir.path())
        .args(args)
        .output()
        .unwrap();
    String::from_utf8_lossy(&output.stdout).to_string()
}
