use log::{info, warn};
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::RenderConfig;
use crate::error::{Error, Result};
use crate::{extract_title, render};

/// Template used when no template file is configured.
pub const DEFAULT_TEMPLATE: &str = "<!DOCTYPE html>
<html>
<head>
<meta charset=\"utf-8\">
<title>{{ Title }}</title>
</head>
<body>
{{ Content }}
</body>
</html>
";

/// Load a template file, or the built-in template when `path` is `None`.
pub fn load_template(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => fs::read_to_string(path).map_err(|e| Error::io(path, e)),
        None => Ok(DEFAULT_TEMPLATE.to_string()),
    }
}

/// Substitute every title and content placeholder.
pub fn fill_template(template: &str, title: &str, content: &str, config: &RenderConfig) -> String {
    template
        .replace(&config.title_placeholder, title)
        .replace(&config.content_placeholder, content)
}

/// Render one markdown file into `dest` through `template`.
pub fn generate_page(from: &Path, template: &str, dest: &Path, config: &RenderConfig) -> Result<()> {
    let markdown = fs::read_to_string(from).map_err(|e| Error::io(from, e))?;

    let page = render_page(&markdown, template, config).map_err(|e| Error::Page {
        path: from.to_path_buf(),
        source: Box::new(e),
    })?;

    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
    }
    fs::write(dest, page).map_err(|e| Error::io(dest, e))?;

    info!("generated {} from {}", dest.display(), from.display());
    Ok(())
}

fn render_page(markdown: &str, template: &str, config: &RenderConfig) -> Result<String> {
    let title = extract_title(markdown)?;
    let content = render(markdown)?;
    Ok(fill_template(template, &title, &content, config))
}

/// Generate a page for every `.md` file under `content_dir`, mirroring the
/// directory layout under `dest_dir`. Returns the written paths.
pub fn generate_pages_recursive(
    content_dir: &Path,
    template: &str,
    dest_dir: &Path,
    config: &RenderConfig,
) -> Result<Vec<PathBuf>> {
    let mut written = Vec::new();
    walk(content_dir, template, dest_dir, config, &mut written)?;
    Ok(written)
}

fn walk(
    dir: &Path,
    template: &str,
    dest_dir: &Path,
    config: &RenderConfig,
    written: &mut Vec<PathBuf>,
) -> Result<()> {
    let mut entries = fs::read_dir(dir)
        .map_err(|e| Error::io(dir, e))?
        .map(|entry| entry.map(|e| e.path()))
        .collect::<std::io::Result<Vec<_>>>()
        .map_err(|e| Error::io(dir, e))?;
    entries.sort();

    for path in entries {
        let Some(name) = path.file_name() else {
            continue;
        };
        let dest = dest_dir.join(name);

        if path.is_dir() {
            walk(&path, template, &dest, config, written)?;
        } else if path.extension().is_some_and(|ext| ext == "md") {
            let dest = dest.with_extension("html");
            generate_page(&path, template, &dest, config)?;
            written.push(dest);
        } else {
            warn!("skipping non-markdown file {}", path.display());
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    const TEMPLATE: &str = "<title>{{ Title }}</title><main>{{ Content }}</main>";

    #[test]
    fn fills_every_placeholder() {
        let filled = fill_template(
            "{{ Title }}|{{ Content }}|{{ Title }}",
            "T",
            "<p>c</p>",
            &RenderConfig::default(),
        );
        assert_eq!(filled, "T|<p>c</p>|T");
    }

    #[test]
    fn custom_placeholders() {
        let config = RenderConfig {
            title_placeholder: "%title%".to_string(),
            content_placeholder: "%body%".to_string(),
        };
        assert_eq!(fill_template("%title%:%body%", "a", "b", &config), "a:b");
    }

    #[test]
    fn builtin_template_has_both_placeholders() {
        let template = load_template(None).unwrap();
        assert!(template.contains("{{ Title }}"));
        assert!(template.contains("{{ Content }}"));
    }

    #[test]
    fn generates_single_page() {
        let dir = TempDir::new().unwrap();
        let src = dir.path().join("index.md");
        let dest = dir.path().join("out/index.html");
        fs::write(&src, "# Home\n\nWelcome *friend*").unwrap();

        generate_page(&src, TEMPLATE, &dest, &RenderConfig::default()).unwrap();

        assert_eq!(
            fs::read_to_string(&dest).unwrap(),
            "<title>Home</title><main><div><h1>Home</h1><p>Welcome <i>friend</i></p></div></main>"
        );
    }

    #[test]
    fn page_errors_name_the_source_file() {
        let dir = TempDir::new().unwrap();
        let src = dir.path().join("untitled.md");
        fs::write(&src, "no heading here").unwrap();

        let err = generate_page(
            &src,
            TEMPLATE,
            &dir.path().join("untitled.html"),
            &RenderConfig::default(),
        )
        .unwrap_err();

        assert_eq!(
            err.to_string(),
            format!("failed to render {}: no top-level heading found", src.display())
        );
        match err {
            Error::Page { path, source } => {
                assert_eq!(path, src);
                assert!(matches!(*source, Error::MissingTitle));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn mirrors_content_tree() {
        let dir = TempDir::new().unwrap();
        let content = dir.path().join("content");
        let public = dir.path().join("public");
        fs::create_dir_all(content.join("blog/post")).unwrap();
        fs::write(content.join("index.md"), "# Index").unwrap();
        fs::write(content.join("blog/post/first.md"), "# First\n\n* a").unwrap();
        fs::write(content.join("blog/image.png"), [0u8, 1, 2]).unwrap();

        let written =
            generate_pages_recursive(&content, TEMPLATE, &public, &RenderConfig::default())
                .unwrap();

        assert_eq!(
            written,
            vec![
                public.join("blog/post/first.html"),
                public.join("index.html"),
            ]
        );
        assert_eq!(
            fs::read_to_string(public.join("blog/post/first.html")).unwrap(),
            "<title>First</title><main><div><h1>First</h1><ul><li>a</li></ul></div></main>"
        );
        assert!(!public.join("blog/image.png").exists());
    }
}
