//! TypeScript import statements of a generated file

use std::path::{Component, Path};

/// `import { a, b } from 'from';`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportStatement {
    pub from: String,
    pub destruct: Vec<String>,
}

impl ImportStatement {
    pub fn new(from: impl Into<String>, destruct: Vec<String>) -> Self {
        Self {
            from: from.into(),
            destruct,
        }
    }

    pub fn render(&self) -> String {
        format!("import {{ {} }} from '{}';", self.destruct.join(", "), self.from)
    }
}

/// Push `name` from `from` unless it is already imported from there
pub fn push_unique_import(imports: &mut Vec<ImportStatement>, from: &str, name: &str) {
    let exists = imports
        .iter()
        .any(|i| i.from == from && i.destruct.iter().any(|d| d == name));
    if !exists {
        imports.push(ImportStatement::new(from, vec![name.to_string()]));
    }
}

/// Merge statements importing from the same module, keeping first-seen order
pub fn zip_import_statements(imports: Vec<ImportStatement>) -> Vec<ImportStatement> {
    let mut zipped: Vec<ImportStatement> = Vec::new();
    for import in imports {
        match zipped.iter_mut().find(|z| z.from == import.from) {
            Some(existing) => {
                for name in import.destruct {
                    if !existing.destruct.contains(&name) {
                        existing.destruct.push(name);
                    }
                }
            }
            None => zipped.push(import),
        }
    }
    zipped
}

/// Module specifier of `to_dir/file_name` as seen from a file in `from_dir`.
///
/// Both directories are relative to the output root; the `.ts` extension is
/// dropped.
pub fn relative_import_path(from_dir: &Path, to_dir: &Path, file_name: &str) -> String {
    let from: Vec<Component<'_>> = from_dir.components().filter(is_normal).collect();
    let to: Vec<Component<'_>> = to_dir.components().filter(is_normal).collect();
    let common = from.iter().zip(&to).take_while(|(a, b)| a == b).count();

    let mut parts: Vec<String> = Vec::new();
    if common == from.len() {
        parts.push(".".to_string());
    } else {
        parts.extend(std::iter::repeat("..".to_string()).take(from.len() - common));
    }
    parts.extend(
        to[common..]
            .iter()
            .map(|c| c.as_os_str().to_string_lossy().into_owned()),
    );
    parts.push(file_name.strip_suffix(".ts").unwrap_or(file_name).to_string());
    parts.join("/")
}

fn is_normal(component: &Component<'_>) -> bool {
    matches!(component, Component::Normal(_))
}
