// Pattern: Composite.
// Files and folders answer the same questions; a folder answers by asking
// its children.

use crate::error::DemoError;
use crate::harness::{Demo, Session, Topic};

pub const DEMO: Demo = Demo {
    name: "composite",
    topic: Topic::Structural,
    summary: "File tree where folders and files share one Node contract",
    run,
};

pub trait Node {
    fn name(&self) -> &str;
    fn size(&self) -> u64;
    /// Lines of an indented tree, one per node.
    fn render(&self, depth: usize) -> Vec<String>;

    fn count_files(&self) -> usize {
        1
    }
}

pub struct FileLeaf {
    name: String,
    bytes: u64,
}

impl FileLeaf {
    pub fn new(name: &str, bytes: u64) -> Self {
        Self {
            name: name.to_string(),
            bytes,
        }
    }
}

impl Node for FileLeaf {
    fn name(&self) -> &str {
        &self.name
    }

    fn size(&self) -> u64 {
        self.bytes
    }

    fn render(&self, depth: usize) -> Vec<String> {
        vec![format!("{}{} ({} B)", "  ".repeat(depth), self.name, self.bytes)]
    }
}

pub struct Folder {
    name: String,
    children: Vec<Box<dyn Node>>,
}

impl Folder {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            children: Vec::new(),
        }
    }

    pub fn with(mut self, child: impl Node + 'static) -> Self {
        self.children.push(Box::new(child));
        self
    }

    pub fn add(&mut self, child: Box<dyn Node>) {
        self.children.push(child);
    }

    pub fn children(&self) -> &[Box<dyn Node>] {
        &self.children
    }
}

impl Node for Folder {
    fn name(&self) -> &str {
        &self.name
    }

    fn size(&self) -> u64 {
        self.children.iter().map(|c| c.size()).sum()
    }

    fn render(&self, depth: usize) -> Vec<String> {
        let mut lines = vec![format!("{}{}/ ({} B)", "  ".repeat(depth), self.name, self.size())];
        for child in &self.children {
            lines.extend(child.render(depth + 1));
        }
        lines
    }

    fn count_files(&self) -> usize {
        self.children.iter().map(|c| c.count_files()).sum()
    }
}

fn sample_tree() -> Folder {
    let src = Folder::new("src")
        .with(FileLeaf::new("main.rs", 1_200))
        .with(FileLeaf::new("lib.rs", 3_400));
    let mut root = Folder::new("project")
        .with(FileLeaf::new("Cargo.toml", 450))
        .with(src);
    root.add(Box::new(Folder::new("target")));
    root
}

fn run(session: &mut Session) -> Result<(), DemoError> {
    session.heading("Composite");

    let root = sample_tree();
    for line in root.render(0) {
        session.step(line);
    }
    session.result(format!(
        "{} holds {} files, {} bytes",
        root.name(),
        root.count_files(),
        root.size()
    ));

    if let Some(single) = root.children().first() {
        session.result(format!(
            "a leaf answers the same way: {} is {} bytes",
            single.name(),
            single.size()
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_folder_size_is_sum_of_children() {
        let root = sample_tree();
        assert_eq!(root.size(), 450 + 1_200 + 3_400);
        assert_eq!(root.count_files(), 3);
    }

    #[test]
    fn test_empty_folder() {
        let empty = Folder::new("empty");
        assert_eq!(empty.size(), 0);
        assert_eq!(empty.count_files(), 0);
        assert_eq!(empty.render(0), vec!["empty/ (0 B)".to_string()]);
    }

    #[test]
    fn test_render_indents_by_depth() {
        let lines = sample_tree().render(0);
        assert_eq!(lines[0], "project/ (5050 B)");
        assert_eq!(lines[1], "  Cargo.toml (450 B)");
        assert_eq!(lines[2], "  src/ (4600 B)");
        assert_eq!(lines[3], "    main.rs (1200 B)");
        assert_eq!(lines.len(), 6);
    }

    #[test]
    fn test_demo_reports_first_child_of_sample_tree() {
        let config = crate::config::TourConfig::default();
        let mut session = Session::new(&config, crate::harness::Transcript::new());
        run(&mut session).unwrap();
        assert!(session
            .transcript()
            .contains("a leaf answers the same way: Cargo.toml is 450 bytes"));
    }

    #[test]
    fn test_leaf_and_folder_through_same_contract() {
        let nodes: Vec<Box<dyn Node>> = vec![
            Box::new(FileLeaf::new("a", 10)),
            Box::new(Folder::new("b").with(FileLeaf::new("c", 5))),
        ];
        let total: u64 = nodes.iter().map(|n| n.size()).sum();
        assert_eq!(total, 15);
    }
}
