//! Update index command implementation

use anyhow::{Context, Result};
use rfd::config::Config;
use rfd::errors::print_warning;
use rfd::index::{render_table, DocumentIndex};
use rfd::section::update_file_section;
use rfd::theme;

/// Regenerate the index table between the markers of the host file
///
/// Every document must parse before the host file is touched.
pub fn update_index(config: &Config) -> Result<()> {
    let index = DocumentIndex::from_config(config);

    if index.is_empty() {
        print_warning(&format!("No RFD files found in {}", config.docs_directory.display()));
        return Ok(());
    }

    let docs = index.load_all().context("Failed to read RFD metadata")?;

    let table = render_table(&docs, &config.link_prefix());

    update_file_section(
        &config.readme_file,
        &config.index_start_marker,
        &config.index_end_marker,
        &table,
    )
    .context("Failed to update RFD index")?;

    println!(
        "{} Updated RFD index in {} ({} document(s))",
        theme::success(theme::success_symbol()),
        config.readme_file.display(),
        docs.len()
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rfd::errors::RfdError;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    const HOST: &str = "A\n<!-- BEGIN RFD INDEX -->\nold\n<!-- END RFD INDEX -->\nB";

    fn write_doc(dir: &Path, file: &str, heading: &str, status: &str, date: &str) {
        fs::write(
            dir.join(file),
            format!(
                "{heading}\n\n<!-- RFD-META\nStatus: {status}\nDate: {date}\nAuthor: tester\n-->\n"
            ),
        )
        .unwrap();
    }

    fn create_test_project(host: &str) -> (Config, TempDir) {
        let temp = TempDir::new().unwrap();
        let config = Config::for_root(temp.path());
        fs::create_dir_all(&config.docs_directory).unwrap();
        fs::write(&config.readme_file, host).unwrap();
        (config, temp)
    }

    fn root_cause(err: &anyhow::Error) -> &RfdError {
        err.root_cause().downcast_ref::<RfdError>().expect("rfd error")
    }

    #[test]
    fn test_update_index_two_documents() {
        let (config, _temp) = create_test_project(HOST);
        let dir = &config.docs_directory;
        write_doc(dir, "0002-beta.md", "# RFD 0002: Beta", "Final", "2025-02-01");
        write_doc(dir, "0001-alpha.md", "# RFD 0001: Alpha", "Draft", "2025-01-01");
        fs::write(dir.join("_template.md.tpl"), "# RFD {{NUMBER}}: {{TITLE}}\n").unwrap();

        update_index(&config).unwrap();

        assert_eq!(
            fs::read_to_string(&config.readme_file).unwrap(),
            "A\n<!-- BEGIN RFD INDEX -->\n\
             | RFD | Title | Status | Date |\n\
             |-----|-------|---------|------|\n\
             | [0001](rfds/0001-alpha.md) | Alpha | Draft | 2025-01-01 |\n\
             | [0002](rfds/0002-beta.md) | Beta | Final | 2025-02-01 |\n\
             <!-- END RFD INDEX -->\nB"
        );
    }

    #[test]
    fn test_update_index_no_documents_leaves_host() {
        let (config, _temp) = create_test_project(HOST);

        update_index(&config).unwrap();

        assert_eq!(fs::read_to_string(&config.readme_file).unwrap(), HOST);
    }

    #[test]
    fn test_update_index_aborts_on_bad_document() {
        let (config, _temp) = create_test_project(HOST);
        let dir = &config.docs_directory;
        write_doc(dir, "0001-alpha.md", "# RFD 0001: Alpha", "Draft", "2025-01-01");
        write_doc(dir, "0002-foo.md", "# RFD 0005: Foo", "Draft", "2025-01-01");

        let err = update_index(&config).unwrap_err();

        assert!(matches!(root_cause(&err), RfdError::NumberMismatch { .. }));
        assert_eq!(fs::read_to_string(&config.readme_file).unwrap(), HOST);
    }

    #[test]
    fn test_update_index_missing_end_marker() {
        let host = "A\n<!-- BEGIN RFD INDEX -->\nold\nB";
        let (config, _temp) = create_test_project(host);
        write_doc(&config.docs_directory, "0001-a.md", "# RFD 0001: A", "Draft", "today");

        let err = update_index(&config).unwrap_err();

        assert!(matches!(root_cause(&err), RfdError::MarkersNotFound { .. }));
        assert_eq!(fs::read_to_string(&config.readme_file).unwrap(), host);
    }

    #[test]
    fn test_update_index_missing_host() {
        let (config, _temp) = create_test_project(HOST);
        fs::remove_file(&config.readme_file).unwrap();
        write_doc(&config.docs_directory, "0001-a.md", "# RFD 0001: A", "Draft", "today");

        let err = update_index(&config).unwrap_err();

        assert!(matches!(root_cause(&err), RfdError::HostNotFound(_)));
    }
}
