use crate::app::infrastructure::editor::EditorAdapter;
use crate::app::infrastructure::template::ToolbarControl;
use crate::app::services::text_ops::apply_template;

/// A catalog command: wraps the current selection in a markup template.
#[derive(Debug, PartialEq, Eq)]
pub struct Command {
    pub name: &'static str,
    /// Older spelling accepted in configuration.
    pub alias: Option<&'static str>,
    pub label: &'static str,
    /// `$1` marks where the selection goes.
    pub template: &'static str,
}

impl Command {
    pub fn matches(&self, name: &str) -> bool {
        self.name == name || self.alias == Some(name)
    }

    /// The replacement text for `selection`.
    pub fn transform(&self, selection: &str) -> String {
        apply_template(self.template, selection)
    }
}

pub static COMMANDS: [Command; 8] = [
    Command {
        name: "bold",
        alias: None,
        label: "<i class=\"uk-icon-bold\"></i>",
        template: "**$1**",
    },
    Command {
        name: "italic",
        alias: None,
        label: "<i class=\"uk-icon-italic\"></i>",
        template: "*$1*",
    },
    Command {
        name: "strike",
        alias: None,
        label: "<i class=\"uk-icon-strikethrough\"></i>",
        template: "~~$1~~",
    },
    Command {
        name: "blockquote",
        alias: None,
        label: "<i class=\"uk-icon-quote-right\"></i>",
        template: "> $1",
    },
    Command {
        name: "link",
        alias: None,
        label: "<i class=\"uk-icon-link\"></i>",
        template: "[$1](http://)",
    },
    Command {
        name: "picture",
        alias: None,
        label: "<i class=\"uk-icon-picture\"></i>",
        template: "![$1](http://)",
    },
    Command {
        name: "unordered-list",
        alias: Some("listUl"),
        label: "<i class=\"uk-icon-list-ul\"></i>",
        template: "* $1",
    },
    Command {
        name: "ordered-list",
        alias: Some("listOl"),
        label: "<i class=\"uk-icon-list-ol\"></i>",
        template: "1. $1",
    },
];

pub fn lookup(name: &str) -> Option<&'static Command> {
    COMMANDS.iter().find(|c| c.matches(name))
}

/// Renders the enabled toolbar and routes control activations to the editor.
#[derive(Debug, Clone)]
pub struct ToolbarDispatcher {
    enabled: Vec<&'static Command>,
}

impl ToolbarDispatcher {
    /// Resolve configured names against the catalog, keeping their order.
    /// Unknown names are dropped.
    pub fn new(names: &[String]) -> Self {
        let enabled = names
            .iter()
            .filter_map(|name| {
                let cmd = lookup(name);
                if cmd.is_none() {
                    tracing::debug!("Dropping unknown toolbar command '{}'", name);
                }
                cmd
            })
            .collect();
        Self { enabled }
    }

    pub fn enabled(&self) -> &[&'static Command] {
        &self.enabled
    }

    /// One control per enabled command. Empty hides the toolbar.
    pub fn controls(&self) -> Vec<ToolbarControl> {
        self.enabled
            .iter()
            .map(|c| ToolbarControl {
                command: c.name.to_string(),
                label: c.label,
            })
            .collect()
    }

    /// Apply the named command to the editor's selection.
    ///
    /// Names missing from the catalog are ignored. Returns whether the
    /// editor was modified.
    pub fn dispatch<E: EditorAdapter>(&self, name: &str, editor: &mut E) -> bool {
        let Some(cmd) = lookup(name) else {
            tracing::debug!("Ignoring activation of unknown command '{}'", name);
            return false;
        };
        let replacement = cmd.transform(editor.selection());
        editor.replace_selection(&replacement);
        true
    }
}
