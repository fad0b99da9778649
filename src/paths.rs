use std::path::{Path, PathBuf};

const OUTPUT_SUFFIX: &str = "--out.csv";

/// `dir/statement.csv` -> `dir/statement--out.csv`. Only the last extension is replaced.
pub fn output_path(input_path: &Path) -> PathBuf {
    let mut output_path = input_path.with_extension("").into_os_string();
    output_path.push(OUTPUT_SUFFIX);
    output_path.into()
}
