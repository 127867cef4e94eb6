//! Shim synthesis
//!
//! Turns the classifier's name sequence into the text appended to a
//! transpiled module: one shared placeholder binding, exported under each
//! collected name with `export { _ as Name }` rename syntax. The marker
//! comment doubles as an idempotence guard so repeated patch runs leave a
//! file untouched.

/// Leading marker of every appended shim block.
pub const SHIM_MARKER: &str = "/* typeshim: runtime placeholders for type-only exports */";

/// Build the shim text for a set of collected names. Returns `None` when
/// there is nothing to append.
pub fn synthesize_shim(names: &[String], placeholder: &str) -> Option<String> {
    if names.is_empty() {
        return None;
    }

    let specifiers = names
        .iter()
        .map(|name| format!("{placeholder} as {name}"))
        .collect::<Vec<_>>()
        .join(", ");

    Some(format!(
        "\n{SHIM_MARKER}\nconst {placeholder} = null;\nexport {{ {specifiers} }};\n"
    ))
}

/// Whether a transpiled output already carries a shim block.
pub fn is_patched(output: &str) -> bool {
    output.contains(SHIM_MARKER)
}

/// Append a shim for `names` to a transpiled output. Returns `None` when
/// nothing needs to change: no names collected, or the output was already
/// patched by an earlier run.
pub fn append_shim(output: &str, names: &[String], placeholder: &str) -> Option<String> {
    if is_patched(output) {
        return None;
    }
    let shim = synthesize_shim(names, placeholder)?;
    let mut patched = String::with_capacity(output.len() + shim.len());
    patched.push_str(output);
    patched.push_str(&shim);
    Some(patched)
}
