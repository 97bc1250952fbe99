//! Embedded templates
//!
//! Templates are compiled into the binary and rendered with a small
//! mustache-style syntax:
//!
//! - `{{name}}` - value, HTML-escaped
//! - `{{{name}}}` - value, raw
//! - `{{#name}}...{{/name}}` - section shown when `name` is truthy
//! - `{{^name}}...{{/name}}` - section shown when `name` is falsy
//! - `{{! comment }}` - dropped

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::error::{DeodarError, DeodarResult};

/// A named template compiled into the binary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Template {
    pub name: &'static str,
    pub body: &'static str,
}

impl Template {
    pub const BLOCK_JSON: Template = Template {
        name: "block.json",
        body: include_str!("../../templates/block.json.mustache"),
    };
    pub const BLOCK_PHP: Template = Template {
        name: "block.php",
        body: include_str!("../../templates/block.php.mustache"),
    };
    pub const BLOCK_SCSS: Template = Template {
        name: "block.scss",
        body: include_str!("../../templates/block.scss.mustache"),
    };
    pub const BLOCK_JS: Template = Template {
        name: "block.js",
        body: include_str!("../../templates/block.js.mustache"),
    };
    pub const INDEX_PHP: Template = Template {
        name: "index.php",
        body: include_str!("../../templates/index.php.mustache"),
    };
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Value {
    Text(String),
    Flag(bool),
}

/// Values available to a template.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TemplateData {
    values: BTreeMap<String, Value>,
}

impl TemplateData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(key.into(), Value::Text(value.into()));
        self
    }

    pub fn flag(mut self, key: impl Into<String>, value: bool) -> Self {
        self.values.insert(key.into(), Value::Flag(value));
        self
    }

    fn lookup(&self, key: &str) -> &str {
        match self.values.get(key) {
            Some(Value::Text(s)) => s,
            Some(Value::Flag(true)) => "true",
            Some(Value::Flag(false)) => "false",
            None => "",
        }
    }

    fn truthy(&self, key: &str) -> bool {
        match self.values.get(key) {
            Some(Value::Text(s)) => !s.is_empty(),
            Some(Value::Flag(b)) => *b,
            None => false,
        }
    }
}

/// Render a template body.
pub fn render(template: &str, data: &TemplateData) -> String {
    let mut out = String::with_capacity(template.len());
    render_into(&mut out, template, data);
    out
}

fn render_into(out: &mut String, template: &str, data: &TemplateData) {
    let mut rest = template;

    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let after = &rest[start..];

        // {{{raw}}}
        if let Some(inner) = after.strip_prefix("{{{") {
            if let Some(end) = inner.find("}}}") {
                out.push_str(data.lookup(inner[..end].trim()));
                rest = &inner[end + 3..];
                continue;
            }
        }

        let Some(end) = after[2..].find("}}") else {
            // Unclosed tag, emit verbatim
            out.push_str(after);
            return;
        };
        let tag = &after[2..2 + end];
        let tail = &after[2 + end + 2..];

        match tag.chars().next() {
            Some('!') => rest = tail,
            Some(sigil @ ('#' | '^')) => {
                let name = tag[1..].trim();
                let close = format!("{{{{/{}}}}}", name);
                let Some(close_at) = tail.find(&close) else {
                    out.push_str(after);
                    return;
                };

                let show = data.truthy(name) == (sigil == '#');
                if show {
                    render_into(out, &tail[..close_at], data);
                }
                rest = &tail[close_at + close.len()..];
            }
            Some('/') => rest = tail,
            _ => {
                out.push_str(&escape_html(data.lookup(tag.trim())));
                rest = tail;
            }
        }
    }

    out.push_str(rest);
}

fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            '/' => escaped.push_str("&#x2F;"),
            '`' => escaped.push_str("&#x60;"),
            '=' => escaped.push_str("&#x3D;"),
            other => escaped.push(other),
        }
    }
    escaped
}

/// Render `template` with `data` and write it to `path`.
///
/// The caller decides whether a failure is fatal.
pub fn write_template(path: &Path, template: Template, data: &TemplateData) -> DeodarResult<()> {
    let content = render(template.body, data);
    fs::write(path, content).map_err(|source| DeodarError::Template {
        template: template.name.to_string(),
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn substitutes_variables() {
        let data = TemplateData::new().text("slug", "hero");
        assert_eq!(render(".{{slug}} {}", &data), ".hero {}");
        assert_eq!(render(".{{ slug }} {}", &data), ".hero {}");
    }

    #[test]
    fn escapes_by_default_and_not_in_triple_braces() {
        let data = TemplateData::new().text("title", "Tom & \"Jerry\"");
        assert_eq!(render("{{title}}", &data), "Tom &amp; &quot;Jerry&quot;");
        assert_eq!(render("{{{title}}}", &data), "Tom & \"Jerry\"");
    }

    #[test]
    fn missing_values_render_empty() {
        assert_eq!(render("a{{nope}}b", &TemplateData::new()), "ab");
    }

    #[test]
    fn sections_follow_flags() {
        let on = TemplateData::new().flag("js", true);
        let off = TemplateData::new().flag("js", false);

        assert_eq!(render("x{{#js}},y{{/js}}", &on), "x,y");
        assert_eq!(render("x{{#js}},y{{/js}}", &off), "x");
        assert_eq!(render("{{^js}}none{{/js}}", &off), "none");
        assert_eq!(render("{{^js}}none{{/js}}", &on), "");
    }

    #[test]
    fn comments_are_dropped() {
        assert_eq!(render("a{{! note }}b", &TemplateData::new()), "ab");
    }

    #[test]
    fn unclosed_tag_is_kept_verbatim() {
        assert_eq!(render("a {{oops", &TemplateData::new()), "a {{oops");
    }

    #[test]
    fn block_json_is_valid_json_with_and_without_script() {
        for js in [true, false] {
            let data = TemplateData::new()
                .text("slug", "my-block")
                .text("title_json", r#""My \"Block\" \\ 1""#)
                .text("category_json", r#""text""#)
                .flag("js", js);

            let rendered = render(Template::BLOCK_JSON.body, &data);
            let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();

            assert_eq!(value["name"], "acf/my-block");
            assert_eq!(value["title"], "My \"Block\" \\ 1");
            assert_eq!(value["category"], "text");
            assert_eq!(value.get("script").is_some(), js);
        }
    }

    #[test]
    fn write_template_reports_errors() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing-dir").join("index.php");

        let err = write_template(&path, Template::INDEX_PHP, &TemplateData::new()).unwrap_err();
        assert!(matches!(err, DeodarError::Template { .. }));
    }

    #[test]
    fn write_template_writes_rendered_content() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("index.php");

        write_template(&path, Template::INDEX_PHP, &TemplateData::new()).unwrap();
        let content = fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("<?php"));
    }
}
