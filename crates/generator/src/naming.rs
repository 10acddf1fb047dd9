//! Chart naming

/// Strip `.` and `-` from an API group so it can prefix a chart name
pub fn safe_group_name(group: &str) -> String {
    group.chars().filter(|c| *c != '.' && *c != '-').collect()
}

/// `<safe-group>-<lowercase-kind>-editor`
pub fn chart_name(group: &str, kind: &str) -> String {
    format!("{}-{}-editor", safe_group_name(group), kind.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_safe_group_name() {
        assert_eq!(safe_group_name("example.io"), "exampleio");
        assert_eq!(safe_group_name("cert-manager.io"), "certmanagerio");
        assert_eq!(safe_group_name("a_b/c.d-e"), "a_b/cde");
        assert_eq!(safe_group_name(""), "");
    }

    #[test]
    fn test_chart_name() {
        assert_eq!(chart_name("example.io", "Widget"), "exampleio-widget-editor");
        assert_eq!(
            chart_name("kubedb.com", "PostgresVersion"),
            "kubedbcom-postgresversion-editor"
        );
        assert_eq!(chart_name("", "Pod"), "-pod-editor");
    }
}
