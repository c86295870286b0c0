use strata_domain::AbsoluteUnixPath;

use crate::layout::{CLASSES_PATH, DEPENDENCIES_PATH, RESOURCES_PATH};

/// Classpath for the plain layout: resources first so they can shadow
/// anything bundled in classes or dependency jars.
#[must_use]
pub fn default_classpath(app_root: &AbsoluteUnixPath) -> Vec<String> {
    vec![
        app_root.resolve_unix(RESOURCES_PATH).to_string(),
        app_root.resolve_unix(CLASSES_PATH).to_string(),
        format!("{}/*", app_root.resolve_unix(DEPENDENCIES_PATH)),
    ]
}

/// `java [flags...] -cp <classpath> <main class>`
#[must_use]
pub fn default_entrypoint(
    app_root: &AbsoluteUnixPath,
    jvm_flags: &[String],
    main_class: &str,
) -> Vec<String> {
    let mut entrypoint = Vec::with_capacity(jvm_flags.len() + 4);
    entrypoint.push("java".to_string());
    entrypoint.extend(jvm_flags.iter().cloned());
    entrypoint.push("-cp".to_string());
    entrypoint.push(default_classpath(app_root).join(":"));
    entrypoint.push(main_class.to_string());
    entrypoint
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entrypoint_orders_flags_before_classpath() {
        let app_root = AbsoluteUnixPath::parse("/app").expect("absolute");
        let flags = vec!["-Xmx512m".to_string(), "-Dfoo=bar".to_string()];
        assert_eq!(
            default_entrypoint(&app_root, &flags, "com.example.Main"),
            [
                "java",
                "-Xmx512m",
                "-Dfoo=bar",
                "-cp",
                "/app/resources:/app/classes:/app/libs/*",
                "com.example.Main"
            ]
        );
    }

    #[test]
    fn classpath_follows_app_root() {
        let app_root = AbsoluteUnixPath::parse("/srv").expect("absolute");
        assert_eq!(
            default_classpath(&app_root),
            ["/srv/resources", "/srv/classes", "/srv/libs/*"]
        );
    }
}
