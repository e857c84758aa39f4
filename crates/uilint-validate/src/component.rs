//! # Component Kinds
//!
//! The declared `type` of a root node, resolved once into a tagged enum.
//! Dispatch to structural validators is an exhaustive `match` on this enum,
//! so adding a kind forces the dispatcher to handle it.

use std::fmt;

use serde_json::Value;
use uilint_core::node;

/// Component types with a dedicated structural validator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentKind {
    /// `page`
    Page,
    /// `form`
    Form,
    /// `crud` data grid.
    Crud,
    /// `dialog`
    Dialog,
    /// `drawer`
    Drawer,
    /// `button`
    Button,
    /// `wizard`
    Wizard,
    /// Any other declared type; no type-specific checks.
    Other,
}

impl ComponentKind {
    /// Resolve a type tag. Matching is exact and case-sensitive.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "page" => ComponentKind::Page,
            "form" => ComponentKind::Form,
            "crud" => ComponentKind::Crud,
            "dialog" => ComponentKind::Dialog,
            "drawer" => ComponentKind::Drawer,
            "button" => ComponentKind::Button,
            "wizard" => ComponentKind::Wizard,
            _ => ComponentKind::Other,
        }
    }

    /// Resolve the kind a node declares, if it declares one.
    pub fn of(schema: &Value) -> Option<Self> {
        node::type_tag(schema).map(Self::from_tag)
    }

    /// Display name used in finding messages.
    pub fn display_name(self) -> &'static str {
        match self {
            ComponentKind::Page => "Page",
            ComponentKind::Form => "Form",
            ComponentKind::Crud => "CRUD",
            ComponentKind::Dialog => "Dialog",
            ComponentKind::Drawer => "Drawer",
            ComponentKind::Button => "Button",
            ComponentKind::Wizard => "Wizard",
            ComponentKind::Other => "Component",
        }
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}
