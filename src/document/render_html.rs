use askama::Template;

use super::{Document, Element, Node};
use crate::error::Result;

/// Tags rendered without a closing tag.
const VOID_TAGS: &[&str] = &["input", "br", "meta", "link", "img", "hr"];

struct HtmlAttr<'a> {
    name: &'a str,
    value: &'a str,
    boolean: bool,
}

#[derive(Template)]
#[template(path = "element.html")]
struct ElementTemplate<'a> {
    tag: &'a str,
    attrs: Vec<HtmlAttr<'a>>,
    void: bool,
    inner: String,
}

#[derive(Template)]
#[template(path = "text.html")]
struct TextTemplate<'a> {
    text: &'a str,
}

#[derive(Template)]
#[template(path = "page.html")]
struct PageTemplate {
    root: String,
}

impl Element {
    /// Renders the element and its subtree. Attribute values and text are
    /// HTML-escaped by the template engine.
    pub fn render_html(&self) -> Result<String> {
        let classes = self.classes.join(" ");
        let mut attrs = Vec::with_capacity(self.attributes.len() + 2);
        if let Some(id) = &self.id {
            attrs.push(HtmlAttr { name: "id", value: id.as_str(), boolean: false });
        }
        if !classes.is_empty() {
            attrs.push(HtmlAttr { name: "class", value: &classes, boolean: false });
        }
        for (name, value) in &self.attributes {
            // Boolean attributes such as `checked` carry an empty value.
            attrs.push(HtmlAttr {
                name: name.as_str(),
                value: value.as_str(),
                boolean: value.is_empty() && name != "value",
            });
        }

        let void = VOID_TAGS.contains(&self.tag.as_str());
        let mut inner = String::new();
        if !void {
            let nested = self.children.iter().any(|c| matches!(c, Node::Element(_)));
            for child in &self.children {
                if nested {
                    inner.push('\n');
                }
                match child {
                    Node::Element(e) => inner.push_str(&e.render_html()?),
                    Node::Text(t) => inner.push_str(&TextTemplate { text: t }.render()?),
                }
            }
            if nested {
                inner.push('\n');
            }
        }

        let html = ElementTemplate {
            tag: &self.tag,
            attrs,
            void,
            inner,
        }
        .render()?;
        Ok(html)
    }
}

impl Document {
    pub fn render_html(&self) -> Result<String> {
        let html = PageTemplate {
            root: self.root.render_html()?,
        }
        .render()?;
        Ok(html)
    }
}
