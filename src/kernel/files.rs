//! In-memory file set backing the workspace.
//!
//! Files are identified by name and listed in insertion order.

pub const NEW_FILE_CONTENT: &str = "// New file\n";

const EXAMPLE_JS: &str = "// Welcome to AI Code Assistant\n// Type \"help\" in terminal to see available commands\n\nconsole.log(\"Hello, World!\");";

const README_MD: &str = "# AI Code Assistant\n\nA CLI-style coding environment with AI assistance.\n\n## Commands:\n- `help` - Show available commands\n- `create <filename>` - Create a new file\n- `open <filename>` - Open a file in editor\n- `list` - List all files\n- `ai <question>` - Ask AI for coding help\n- `clear` - Clear terminal";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VirtualFile {
    pub name: String,
    pub content: String,
}

impl VirtualFile {
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }

    pub fn kind(&self) -> FileKind {
        FileKind::from_name(&self.name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    JavaScript,
    TypeScript,
    Css,
    Html,
    Markdown,
    Json,
    Python,
    Text,
}

impl FileKind {
    pub fn from_name(name: &str) -> Self {
        let Some((_, ext)) = name.rsplit_once('.') else {
            return FileKind::Text;
        };
        match ext.to_ascii_lowercase().as_str() {
            "js" | "jsx" => FileKind::JavaScript,
            "ts" | "tsx" => FileKind::TypeScript,
            "css" => FileKind::Css,
            "html" => FileKind::Html,
            "md" => FileKind::Markdown,
            "json" => FileKind::Json,
            "py" => FileKind::Python,
            _ => FileKind::Text,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FileKind::JavaScript => "JavaScript",
            FileKind::TypeScript => "TypeScript",
            FileKind::Css => "CSS",
            FileKind::Html => "HTML",
            FileKind::Markdown => "Markdown",
            FileKind::Json => "JSON",
            FileKind::Python => "Python",
            FileKind::Text => "Text",
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct FileSet {
    files: Vec<VirtualFile>,
}

impl FileSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// The two files every fresh workspace starts with.
    pub fn seeded() -> Self {
        Self {
            files: vec![
                VirtualFile::new("example.js", EXAMPLE_JS),
                VirtualFile::new("README.md", README_MD),
            ],
        }
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    pub fn get(&self, name: &str) -> Option<&VirtualFile> {
        self.files.iter().find(|f| f.name == name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut VirtualFile> {
        self.files.iter_mut().find(|f| f.name == name)
    }

    pub fn first(&self) -> Option<&VirtualFile> {
        self.files.first()
    }

    pub fn iter(&self) -> impl Iterator<Item = &VirtualFile> {
        self.files.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.files.iter().map(|f| f.name.as_str())
    }

    /// Returns `false` (and leaves the set untouched) if the name is taken.
    pub fn insert(&mut self, file: VirtualFile) -> bool {
        if self.contains(&file.name) {
            return false;
        }
        self.files.push(file);
        true
    }

    pub fn remove(&mut self, name: &str) -> Option<VirtualFile> {
        let idx = self.position(name)?;
        Some(self.files.remove(idx))
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.files.iter().position(|f| f.name == name)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/files.rs"]
mod tests;
