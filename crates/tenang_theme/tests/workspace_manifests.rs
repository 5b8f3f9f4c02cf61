//! Every workspace member inherits the shared package metadata and declares
//! its dependencies through the workspace table.

use std::path::Path;

const MEMBERS: [&str; 5] = [
    "tenang_core",
    "tenang_animation",
    "tenang_theme",
    "tenang_style",
    "tenang_cli",
];

fn manifest(member: &str) -> toml::Table {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join(member)
        .join("Cargo.toml");
    let text = std::fs::read_to_string(&path).unwrap();
    text.parse().unwrap()
}

fn inherits(table: &toml::Table, key: &str) -> bool {
    table
        .get(key)
        .and_then(|value| value.get("workspace"))
        .and_then(toml::Value::as_bool)
        == Some(true)
}

#[test]
fn members_share_package_metadata() {
    for member in MEMBERS {
        let manifest = manifest(member);
        let package = manifest["package"].as_table().unwrap();

        assert_eq!(package["name"].as_str(), Some(member));
        for key in ["version", "edition", "license", "rust-version"] {
            assert!(inherits(package, key), "{member}: {key} not inherited");
        }
        assert!(
            package.get("keywords").and_then(toml::Value::as_array).is_some_and(|k| !k.is_empty()),
            "{member}: missing keywords"
        );
        assert!(
            package.get("categories").and_then(toml::Value::as_array).is_some_and(|c| !c.is_empty()),
            "{member}: missing categories"
        );
    }
}

#[test]
fn registry_dependencies_come_from_workspace() {
    for member in MEMBERS {
        let manifest = manifest(member);
        for section in ["dependencies", "dev-dependencies"] {
            let Some(deps) = manifest.get(section).and_then(toml::Value::as_table) else {
                continue;
            };
            for (name, spec) in deps {
                if name.starts_with("tenang_") {
                    assert!(spec.get("path").is_some(), "{member}: {name} should be a path dependency");
                } else {
                    assert!(inherits(deps, name), "{member}: {name} pins its own version");
                }
            }
        }
    }
}
