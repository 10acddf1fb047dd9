//! Static chart files

use editor_chart_registry::GroupVersionResource;

pub const HELMIGNORE: &str = r#"# Patterns to ignore when building packages.
# This supports shell glob matching, relative path matching, and
# negation (prefixed with !). Only one pattern per line.
.DS_Store
# Common VCS dirs
.git/
.gitignore
.bzr/
.bzrignore
.hg/
.hgignore
.svn/
# Common backup files
*.swp
*.bak
*.tmp
*.orig
*~
# Various IDEs
.project
.idea/
*.tmproj
.vscode/
"#;

/// templates/NOTES.txt
pub fn notes(gvr: &GroupVersionResource, kind: &str) -> String {
    format!(
        "Get the {kind} by running the following command:\n\n  \
         kubectl --namespace {{{{ .Release.Namespace }}}} get {}.{} {{{{ .Release.Name }}}}\n",
        gvr.resource, gvr.group
    )
}
