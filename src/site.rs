use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::markdown_to_html;

/// Fallback page template compiled into the binary, used when the
/// configured template file does not exist.
pub const DEFAULT_TEMPLATE: &str = include_str!("default_template.html");

const TITLE_SLOT: &str = "{{ Title }}";
const CONTENT_SLOT: &str = "{{ Content }}";

#[derive(Debug, thiserror::Error)]
pub enum SiteError {
    #[error("no h1 heading found in {0}")]
    MissingTitle(PathBuf),
    #[error("invalid config {0}: {1}")]
    Config(PathBuf, toml::de::Error),
    #[error("{0}: {1}")]
    Io(PathBuf, io::Error),
}

/// The text of the first `# ` line, if the source has one.
pub fn extract_title(markdown: &str) -> Option<&str> {
    markdown.lines().find_map(|line| line.strip_prefix("# "))
}

/// Render one markdown file through `template` and write it to `dest`.
///
/// The template's `{{ Title }}` slot receives the first h1 text and
/// `{{ Content }}` the converted document. Parent directories of `dest`
/// are created as needed.
pub fn generate_page(from: &Path, template: &str, dest: &Path) -> Result<(), SiteError> {
    log::info!("generating {} from {}", dest.display(), from.display());

    let markdown =
        fs::read_to_string(from).map_err(|e| SiteError::Io(from.to_path_buf(), e))?;
    let title =
        extract_title(&markdown).ok_or_else(|| SiteError::MissingTitle(from.to_path_buf()))?;
    let html = markdown_to_html(&markdown);

    let page = template.replace(TITLE_SLOT, title).replace(CONTENT_SLOT, &html);

    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent).map_err(|e| SiteError::Io(parent.to_path_buf(), e))?;
    }
    fs::write(dest, page).map_err(|e| SiteError::Io(dest.to_path_buf(), e))
}

/// Mirror `src` into `dst`, replacing whatever was there.
pub fn copy_directory(src: &Path, dst: &Path) -> Result<(), SiteError> {
    if dst.exists() {
        fs::remove_dir_all(dst).map_err(|e| SiteError::Io(dst.to_path_buf(), e))?;
    }
    fs::create_dir_all(dst).map_err(|e| SiteError::Io(dst.to_path_buf(), e))?;

    for entry in sorted_entries(src)? {
        let from = entry.path();
        let to = dst.join(entry.file_name());
        if from.is_dir() {
            copy_directory(&from, &to)?;
        } else {
            fs::copy(&from, &to).map_err(|e| SiteError::Io(from.clone(), e))?;
            log::info!("copied {} to {}", from.display(), to.display());
        }
    }
    Ok(())
}

/// Walk `content` and render every `.md` file into the mirrored spot
/// under `output` with an `.html` extension.
pub fn generate_pages(content: &Path, template: &str, output: &Path) -> Result<(), SiteError> {
    for entry in sorted_entries(content)? {
        let path = entry.path();
        if path.is_dir() {
            generate_pages(&path, template, &output.join(entry.file_name()))?;
        } else if let Some(ext) = path.extension()
            && ext == "md"
        {
            let dest = output.join(entry.file_name()).with_extension("html");
            generate_page(&path, template, &dest)?;
        }
    }
    Ok(())
}

/// Build the whole site described by `config`, with its paths resolved
/// against `root`. Returns the output directory.
pub fn build_site(root: &Path, config: &Config) -> Result<PathBuf, SiteError> {
    let content = root.join(&config.content);
    let static_dir = root.join(&config.static_dir);
    let template_path = root.join(&config.template);
    let output = root.join(&config.output);

    let template = match fs::read_to_string(&template_path) {
        Ok(text) => text,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            log::warn!(
                "template {} not found, using the built-in default",
                template_path.display()
            );
            DEFAULT_TEMPLATE.to_string()
        }
        Err(e) => return Err(SiteError::Io(template_path, e)),
    };

    if static_dir.is_dir() {
        copy_directory(&static_dir, &output)?;
    } else {
        fs::create_dir_all(&output).map_err(|e| SiteError::Io(output.clone(), e))?;
    }

    generate_pages(&content, &template, &output)?;
    Ok(output)
}

fn sorted_entries(dir: &Path) -> Result<Vec<fs::DirEntry>, SiteError> {
    let entries = fs::read_dir(dir).map_err(|e| SiteError::Io(dir.to_path_buf(), e))?;
    let mut entries = entries
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| SiteError::Io(dir.to_path_buf(), e))?;
    entries.sort_by_key(|entry| entry.path());
    Ok(entries)
}
