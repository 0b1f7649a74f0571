// Test infrastructure and utilities for rfd integration tests
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const TEMPLATE: &str = "# RFD {{NUMBER}}: {{TITLE}}\n\n\
    <!-- RFD-META\n\
    Status: Draft\n\
    Date: {{DATE}}\n\
    Author: {{AUTHOR}}\n\
    -->\n\n\
    ## Summary\n";

pub const HOST: &str = "A\n<!-- BEGIN RFD INDEX -->\nold\n<!-- END RFD INDEX -->\nB";

/// Render a document with the given heading fields and metadata
pub fn rfd_markdown(number: &str, title: &str, status: &str, date: &str) -> String {
    format!(
        "# RFD {number}: {title}\n\n\
         <!-- RFD-META\nStatus: {status}\nDate: {date}\nAuthor: tester\n-->\n\n\
         ## Summary\n"
    )
}

/// Temporary project laid out the way `rfd` expects by default
pub struct TestProject {
    pub root: TempDir,
}

impl TestProject {
    /// Empty project: no docs directory, template or README
    pub fn empty() -> Self {
        Self { root: TempDir::new().expect("Failed to create temp dir") }
    }

    /// Project with the template and a README carrying the index markers
    pub fn new() -> Self {
        let project = Self::empty();
        project.write("docs/rfds/_template.md.tpl", TEMPLATE);
        project.write("docs/README.md", HOST);
        project
    }

    pub fn root_path(&self) -> &Path {
        self.root.path()
    }

    pub fn rfds_dir(&self) -> PathBuf {
        self.root.path().join("docs/rfds")
    }

    pub fn readme(&self) -> String {
        self.read("docs/README.md")
    }

    /// Write a file relative to the root, creating parents
    pub fn write(&self, path: &str, content: &str) -> PathBuf {
        let file_path = self.root.path().join(path);
        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&file_path, content).unwrap();
        file_path
    }

    /// Add a document under docs/rfds
    pub fn add_doc(&self, filename: &str, content: &str) -> PathBuf {
        self.write(&format!("docs/rfds/{}", filename), content)
    }

    pub fn read(&self, path: &str) -> String {
        fs::read_to_string(self.root.path().join(path)).unwrap()
    }

    pub fn file_exists(&self, path: &str) -> bool {
        self.root.path().join(path).exists()
    }
}
