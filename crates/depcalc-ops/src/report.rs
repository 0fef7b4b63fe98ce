//! Rendering of a [`DependencyTree`] for the console.

use depcalc_resolver::DependencyTree;
use depcalc_util::errors::{DepcalcError, DepcalcResult};
use serde::Serialize;

/// Output format for `depcalc`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Format {
    #[default]
    Tree,
    Json,
}

/// Render a tree in the requested format.
pub fn render(tree: &DependencyTree, format: Format) -> DepcalcResult<String> {
    match format {
        Format::Tree => Ok(render_tree(tree)),
        Format::Json => render_json(tree),
    }
}

/// JSON with four-space indentation.
pub fn render_json(tree: &DependencyTree) -> DepcalcResult<String> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    tree.serialize(&mut ser).map_err(|e| DepcalcError::Generic {
        message: format!("Failed to serialize dependency tree: {e}"),
    })?;
    String::from_utf8(buf).map_err(|e| {
        DepcalcError::Generic {
            message: format!("Dependency tree is not valid UTF-8: {e}"),
        }
        .into()
    })
}

/// Box-drawing view: upstream above the sources, downstream below.
///
/// ```text
///            ┌─ yql
///       ┌─── Components (1)
///       ├─── Modules (2)
///  ┌─── Upstream
///  ├─ Source(s): yql
///  └─── Downstream
/// ```
pub fn render_tree(tree: &DependencyTree) -> String {
    let mut lines: Vec<String> = vec![String::new()];

    for (i, c) in tree.upstream.components.iter().enumerate() {
        let connector = if i == 0 { '┌' } else { '├' };
        lines.push(format!("           {connector}─ {c}"));
    }
    lines.push(format!(
        "      ┌─── Components ({})",
        tree.upstream.components.len()
    ));
    lines.push("      |".into());
    lines.push("      |".into());

    for (i, m) in tree.upstream.modules.iter().enumerate() {
        let connector = if i == 0 { '┌' } else { '├' };
        lines.push(format!("      |    {connector}─ {m}"));
    }
    lines.push(format!(
        "      ├─── Modules ({})",
        tree.upstream.modules.len()
    ));
    lines.push("      |".into());
    lines.push("      |".into());

    lines.push(" ┌─── Upstream".into());
    lines.push(" |".into());
    lines.push(" |".into());
    lines.push(" |".into());

    let mut source: Vec<&str> = tree.source.iter().map(String::as_str).collect();
    source.sort_unstable();
    lines.push(format!(" ├─ Source(s): {}", source.join(", ")));

    lines.push(" |".into());
    lines.push(" |".into());
    lines.push(" |".into());
    lines.push(" └─── Downstream".into());
    lines.push("      |".into());
    lines.push("      |".into());
    lines.push(format!(
        "      ├─── Modules ({})",
        tree.downstream.modules.len()
    ));

    let count = tree.downstream.modules.len();
    for (i, m) in tree.downstream.modules.iter().enumerate() {
        let connector = if i + 1 == count { '└' } else { '├' };
        lines.push(format!("      |    {connector}─ {m}"));
    }

    lines.push("      |".into());
    lines.push("      |".into());
    lines.push(format!(
        "      └─── Components ({})",
        tree.downstream.components.len()
    ));

    let count = tree.downstream.components.len();
    for (i, c) in tree.downstream.components.iter().enumerate() {
        let connector = if i + 1 == count { '└' } else { '├' };
        lines.push(format!("           {connector}─ {c}"));
    }

    lines.push(String::new());
    lines.join("\n")
}
