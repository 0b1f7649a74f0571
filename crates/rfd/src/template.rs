//! Template placeholder substitution

use crate::errors::RfdError;
use std::fs;
use std::path::Path;

/// Replace every `{{KEY}}` in `template` with its value from `mapping`
///
/// Placeholders without a mapping entry are left as they are.
pub fn replace_placeholders<K, V>(template: &str, mapping: &[(K, V)]) -> String
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    mapping.iter().fold(template.to_string(), |text, (key, value)| {
        text.replace(&format!("{{{{{}}}}}", key.as_ref()), value.as_ref())
    })
}

/// Render the template at `template_path` into a new file at `output_path`
///
/// Refuses to overwrite an existing file.
pub fn instantiate<K, V>(
    template_path: &Path,
    output_path: &Path,
    mapping: &[(K, V)],
) -> Result<(), RfdError>
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    if output_path.exists() {
        return Err(RfdError::OutputExists(output_path.to_path_buf()));
    }

    if !template_path.is_file() {
        return Err(RfdError::TemplateNotFound(template_path.to_path_buf()));
    }

    let template =
        fs::read_to_string(template_path).map_err(|e| RfdError::io(template_path, e))?;

    let content = replace_placeholders(&template, mapping);

    if let Some(parent) = output_path.parent() {
        fs::create_dir_all(parent).map_err(|e| RfdError::io(parent, e))?;
    }

    fs::write(output_path, content).map_err(|e| RfdError::io(output_path, e))
}
