//! Element trees for the control.
//!
//! [`RenderedControl::to_element`] lays out the header, the legacy
//! select and the current select as an [`Element`] tree, which can be
//! serialized to JSON or written out as HTML.

use std::fmt::{self, Write};
use serde::Serialize;
use crate::{control::RenderedControl,
            select::SchemeOption,
            swatch::SwatchStrip};

/// A node of the tree.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Node {
    Element(Element),
    Text(String),
}

/// An element with attributes (in insertion order) and children.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Element {
    pub tag: String,
    pub attrs: Vec<(String, String)>,
    pub children: Vec<Node>,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Element { tag: tag.into(), attrs: vec![], children: vec![] }
    }

    pub fn attr(mut self, name: impl Into<String>,
                value: impl Into<String>) -> Self {
        self.attrs.push((name.into(), value.into()));
        self
    }

    pub fn child(mut self, e: Element) -> Self {
        self.children.push(Node::Element(e));
        self
    }

    pub fn text(mut self, t: impl Into<String>) -> Self {
        self.children.push(Node::Text(t.into()));
        self
    }

    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs.iter().find(|(n, _)| n == name).map(|(_, v)| v.as_str())
    }

    /// Child elements (text nodes skipped).
    pub fn elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(|n| match n {
            Node::Element(e) => Some(e),
            Node::Text(_) => None,
        })
    }

    /// All elements of the subtree, in document order, satisfying `p`.
    pub fn find_all<P>(&self, p: P) -> Vec<&Element>
    where P: Fn(&Element) -> bool {
        let mut found = vec![];
        self.collect(&p, &mut found);
        found
    }

    fn collect<'a, P>(&'a self, p: &P, found: &mut Vec<&'a Element>)
    where P: Fn(&Element) -> bool {
        if p(self) { found.push(self) }
        for e in self.elements() { e.collect(p, found) }
    }

    /// Write the tree as HTML.
    pub fn write_html(&self, w: &mut impl Write) -> fmt::Result {
        write!(w, "<{}", self.tag)?;
        for (n, v) in &self.attrs {
            write!(w, " {}=\"{}\"", n, escape(v))?;
        }
        w.write_char('>')?;
        for c in &self.children {
            match c {
                Node::Element(e) => e.write_html(w)?,
                Node::Text(t) => w.write_str(&escape(t))?,
            }
        }
        write!(w, "</{}>", self.tag)
    }

    pub fn to_html(&self) -> String {
        let mut s = String::new();
        // Writing to a `String` does not fail.
        let _ = self.write_html(&mut s);
        s
    }
}

fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

const LIST_STYLE: &str = "list-style: none; margin: 0; padding: 0; \
                          display: flex; align-items: center";

impl SwatchStrip {
    /// A tooltip titled with the scheme label, wrapping a list with one
    /// item per swatch.
    pub fn to_element(&self) -> Element {
        let mut ul = Element::new("ul")
            .attr("data-test", &self.id)
            .attr("style", LIST_STYLE);
        for (i, s) in self.swatches.iter().enumerate() {
            ul = ul.child(
                Element::new("li")
                    .attr("key", self.key(i))
                    .attr("style", format!(
                        "flex-basis: 9px; height: 10px; margin: 9px 1px; \
                         background-color: {}; border: 1px solid {}",
                        s.fill, s.border))
                    .text("\u{a0}"));
        }
        let mut tooltip = Element::new("span")
            .attr("class", "tooltip")
            .attr("id", self.tooltip_id());
        if let Some(label) = &self.label {
            tooltip = tooltip.attr("title", label);
        }
        tooltip.child(ul)
    }
}

fn option_element(o: &SchemeOption, selected: bool, with_text: bool)
                  -> Element {
    let mut li = Element::new("li")
        .attr("role", "option")
        .attr("data-value", &o.value)
        .attr("aria-selected", selected.to_string());
    if with_text {
        li = li.attr("aria-label", &o.label);
    }
    li.child(o.preview.to_element())
}

impl RenderedControl {
    fn select_element(&self, class: &str, legacy: bool) -> Element {
        let mut e = Element::new("div")
            .attr("class", class)
            .attr("name", &self.name)
            .attr("data-placeholder", &self.placeholder)
            .attr(if legacy { "data-clearable" } else { "data-allow-clear" },
                  self.clearable.to_string());
        if legacy {
            e = e.attr("data-multi", "false")
                .attr("data-autosize", "false")
                .attr("style", format!("margin-top: {}px", self.label_margin));
            if let Some(d) = &self.default_value {
                e = e.attr("data-default", d);
            }
        }
        let value = Element::new("div").attr("class", "select-value");
        let value = match (&self.value_preview, legacy) {
            (Some(p), true) => value.child(p.to_element()),
            (Some(_), false) => match self.value.as_deref()
                .and_then(|v| self.option(v)) {
                    Some(o) => value.child(o.preview.to_element()),
                    None => value.text(self.value.clone().unwrap_or_default()),
                },
            (None, _) => value.text(&self.placeholder),
        };
        let mut list = Element::new("ul").attr("role", "listbox");
        for o in &self.options {
            let selected = self.value.as_deref() == Some(o.value.as_str());
            list = list.child(option_element(o, selected, legacy));
        }
        e.child(value).child(list)
    }

    /// The tree of the whole control.
    pub fn to_element(&self) -> Element {
        let mut label = Element::new("label")
            .attr("for", &self.name)
            .text(&self.header.label);
        if let Some(d) = &self.header.description {
            label = label.attr("title", d);
        }
        Element::new("div")
            .attr("class", "color-scheme-control")
            .child(Element::new("div").attr("class", "control-header")
                   .child(label))
            .child(self.select_element("legacy-select", true))
            .child(self.select_element("select", false))
    }

    pub fn to_html(&self) -> String { self.to_element().to_html() }
}
